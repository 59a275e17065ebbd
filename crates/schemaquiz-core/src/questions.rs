//! The built-in "embed or reference?" questionnaire.

use crate::model::{Answer, Question};

pub(crate) const BUILTIN_ID: &str = "embed-or-reference";
pub(crate) const BUILTIN_NAME: &str = "MongoDB Schema Design: Embed or Reference?";
pub(crate) const BUILTIN_DESCRIPTION: &str = "Embedding includes related data within the same \
document, while referencing stores related data in separate documents and collections with \
references between them. Answer each question to see which approach fits your use case.";

/// (id, question, answer that favors embedding)
const BUILTIN: [(&str, &str, Answer); 11] = [
    (
        "simplicity",
        "Would keeping the pieces of information together lead to a simpler data model and code?",
        Answer::Yes,
    ),
    (
        "goTogether",
        "Do the pieces of information have a \"has-a,\" \"contains,\" or similar relationship?",
        Answer::Yes,
    ),
    (
        "queryAtomicity",
        "Does the application query the pieces of information together?",
        Answer::Yes,
    ),
    (
        "updateComplexity",
        "Are the pieces of information updated together?",
        Answer::Yes,
    ),
    (
        "archival",
        "Should the pieces of information be archived at the same time?",
        Answer::Yes,
    ),
    (
        "cardinality",
        "Is there a high cardinality (current or growing) in the child side of the relationship?",
        Answer::No,
    ),
    (
        "dataDuplication",
        "Would data duplication be too complicated to manage and undesired?",
        Answer::No,
    ),
    (
        "documentSize",
        "Would the combined size of the pieces of information take too much memory or transfer \
         bandwidth for the application?",
        Answer::No,
    ),
    (
        "documentGrowth",
        "Would the embedded piece grow without bound?",
        Answer::No,
    ),
    (
        "workload",
        "Are the pieces of information written at different times in a write-heavy workload?",
        Answer::No,
    ),
    (
        "individuality",
        "For the children side of the relationship, can the pieces exist by themselves without \
         a parent?",
        Answer::No,
    ),
];

pub(crate) fn builtin_questions() -> Vec<Question> {
    BUILTIN
        .iter()
        .map(|&(id, text, embed_label)| Question::new(id, text, embed_label))
        .collect()
}
