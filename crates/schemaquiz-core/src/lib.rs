//! schemaquiz-core — Embed-or-reference quiz engine.
//!
//! This crate defines the question model, the built-in questionnaire, the
//! answer/tally reducer, and the report types the CLI and renderers build on.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
mod questions;
pub mod report;
