//! Storage-side collaborator that supplies a golfer's shot history.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::shot::Shot;

/// Supplies the historical shots belonging to one user.
///
/// Implementations only read; a recommendation never mutates the log.
pub trait ShotSource {
    /// Error raised when the underlying store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every recorded shot for `user`, across all rounds. An unknown user
    /// has no shots.
    fn shots_for_user(&self, user: &str) -> Result<Vec<Shot>, Self::Error>;
}

impl ShotSource for BTreeMap<String, Vec<Shot>> {
    type Error = Infallible;

    fn shots_for_user(&self, user: &str) -> Result<Vec<Shot>, Self::Error> {
        Ok(self.get(user).cloned().unwrap_or_default())
    }
}
