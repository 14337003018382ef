//! Accumulated validation.
//!
//! [`ValidationCollector`] gathers every problem with an input before
//! failing, so a caller sees all malformed fields at once.

use crate::error::ShotError;

/// Accumulates validation errors and converts them into a single
/// [`ShotError::Validation`].
#[derive(Debug, Default)]
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Record the error of a failed parse and return the parsed value, if any.
    pub(crate) fn check<T, E: std::fmt::Display>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.push(e.to_string());
                None
            }
        }
    }

    /// `Ok(())` if nothing was recorded, otherwise one error joining every
    /// message with `"; "`.
    pub(crate) fn finish(self) -> Result<(), ShotError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ShotError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}
