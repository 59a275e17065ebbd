//! Quiz engine: answer map, tally, and completion tracking.
//!
//! State lives in an explicit [`QuizState`] value advanced by the pure
//! [`reduce`] function. [`QuizSession`] wraps the reducer for callers that
//! want to mutate in place and be notified of progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{Answer, QuestionSet, Recommendation, Strategy};

/// Running count of answers favoring each strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub embed: u32,
    pub reference: u32,
}

impl Tally {
    /// Total number of answers counted.
    pub fn total(&self) -> u32 {
        self.embed + self.reference
    }

    /// Compare the two counters.
    ///
    /// Defined for any tally, including one from an unfinished quiz.
    pub fn recommendation(&self) -> Recommendation {
        match self.embed.cmp(&self.reference) {
            std::cmp::Ordering::Greater => Recommendation::Embed,
            std::cmp::Ordering::Less => Recommendation::Reference,
            std::cmp::Ordering::Equal => Recommendation::Either,
        }
    }

    fn add(&mut self, strategy: Strategy) {
        match strategy {
            Strategy::Embed => self.embed += 1,
            Strategy::Reference => self.reference += 1,
        }
    }

    fn remove(&mut self, strategy: Strategy) {
        match strategy {
            Strategy::Embed => self.embed = self.embed.saturating_sub(1),
            Strategy::Reference => self.reference = self.reference.saturating_sub(1),
        }
    }
}

/// Snapshot of a quiz in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    answers: BTreeMap<String, Answer>,
    tally: Tally,
    total: usize,
}

impl QuizState {
    /// An empty state for the given question set.
    pub fn new(questions: &QuestionSet) -> Self {
        Self {
            answers: BTreeMap::new(),
            tally: Tally::default(),
            total: questions.len(),
        }
    }

    /// Current answer per question id.
    pub fn answers(&self) -> &BTreeMap<String, Answer> {
        &self.answers
    }

    pub fn answer_for(&self, question_id: &str) -> Option<Answer> {
        self.answers.get(question_id).copied()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Number of distinct questions answered so far.
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions in the set this state tracks.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `true` once every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.total
    }

    /// The recommendation for a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` until every question is answered. Use
    /// [`Tally::recommendation`] for the raw comparison.
    pub fn recommendation(&self) -> Result<Recommendation, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::Incomplete {
                answered: self.answered(),
                total: self.total,
            });
        }
        Ok(self.tally.recommendation())
    }
}

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// An earlier answer was changed, moving one unit between counters.
    Revised {
        question_id: String,
        from: Strategy,
        to: Strategy,
    },
    /// The last unanswered question was just answered. Emitted once.
    Completed { tally: Tally },
}

/// Result of applying one answer.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: QuizState,
    pub events: Vec<QuizEvent>,
}

/// Apply an answer to a state, returning the next state.
///
/// # Errors
///
/// Returns `QuizError::UnknownQuestion` if `question_id` is not in `questions`.
pub fn reduce(
    state: &QuizState,
    questions: &QuestionSet,
    question_id: &str,
    answer: Answer,
) -> Result<Transition, QuizError> {
    let question = questions
        .get(question_id)
        .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;

    let was_complete = state.is_complete();
    let mut next = state.clone();
    let mut events = Vec::new();
    let strategy = question.strategy_for(answer);

    match next.answers.insert(question.id.clone(), answer) {
        None => next.tally.add(strategy),
        Some(previous) if previous != answer => {
            let from = question.strategy_for(previous);
            next.tally.remove(from);
            next.tally.add(strategy);
            events.push(QuizEvent::Revised {
                question_id: question.id.clone(),
                from,
                to: strategy,
            });
        }
        Some(_) => {}
    }

    tracing::debug!(
        question = %question.id,
        %answer,
        embed = next.tally.embed,
        reference = next.tally.reference,
        "answer recorded"
    );

    if !was_complete && next.is_complete() {
        tracing::info!(
            embed = next.tally.embed,
            reference = next.tally.reference,
            "all {} questions answered",
            next.total
        );
        events.push(QuizEvent::Completed { tally: next.tally });
    }

    Ok(Transition {
        state: next,
        events,
    })
}

/// Progress notifications from a [`QuizSession`].
pub trait QuizObserver {
    fn on_answer(&self, question_id: &str, answer: Answer, state: &QuizState);
    fn on_complete(&self, state: &QuizState);
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl QuizObserver for NoopObserver {
    fn on_answer(&self, _: &str, _: Answer, _: &QuizState) {}
    fn on_complete(&self, _: &QuizState) {}
}

/// A quiz being taken: a question set, the current state, and an observer.
pub struct QuizSession<O: QuizObserver = NoopObserver> {
    questions: QuestionSet,
    state: QuizState,
    observer: O,
}

impl QuizSession<NoopObserver> {
    pub fn new(questions: QuestionSet) -> Self {
        Self::with_observer(questions, NoopObserver)
    }
}

impl<O: QuizObserver> QuizSession<O> {
    pub fn with_observer(questions: QuestionSet, observer: O) -> Self {
        let state = QuizState::new(&questions);
        Self {
            questions,
            state,
            observer,
        }
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Record an answer, notify the observer, and return what happened.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` for ids outside the question set;
    /// the session state is left untouched in that case.
    pub fn record_answer(
        &mut self,
        question_id: &str,
        answer: Answer,
    ) -> Result<Vec<QuizEvent>, QuizError> {
        let Transition { state, events } =
            reduce(&self.state, &self.questions, question_id, answer)?;
        self.state = state;

        self.observer.on_answer(question_id, answer, &self.state);
        if events
            .iter()
            .any(|e| matches!(e, QuizEvent::Completed { .. }))
        {
            self.observer.on_complete(&self.state);
        }

        Ok(events)
    }

    /// See [`QuizState::recommendation`].
    pub fn recommendation(&self) -> Result<Recommendation, QuizError> {
        self.state.recommendation()
    }

    /// Consume the session, returning its question set and final state.
    pub fn into_parts(self) -> (QuestionSet, QuizState) {
        (self.questions, self.state)
    }
}
