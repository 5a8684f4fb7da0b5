// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for title validation.
//!
//! A title is parsed, then run through the built-in rules in a fixed
//! order. The first failing rule decides the outcome.

mod builtin;
mod configuration;
mod engine;
mod validator;

pub use builtin::suggestion;
pub use configuration::Configuration;
pub use engine::{validate, TitleValidator};
pub use validator::{ValidationReport, ValidationResult};
