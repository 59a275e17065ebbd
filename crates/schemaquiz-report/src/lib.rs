//! schemaquiz-report — Renders finished quizzes for sharing.

pub mod html;
