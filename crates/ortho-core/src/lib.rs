//! Shared types for the ortho spelling engine.
//!
//! This crate holds the leaf types every other crate agrees on: character
//! classification, case handling, the annotated-sentence input and the
//! [`Match`](rule_match::Match) output. It contains no dictionary logic.

pub mod case;
pub mod character;
pub mod enums;
pub mod rule_match;
pub mod token;
