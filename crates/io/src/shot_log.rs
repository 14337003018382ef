//! In-memory shot log grouped by user and round.

use std::collections::BTreeMap;
use std::convert::Infallible;

use caddie_shot::{Shot, ShotSource};
use serde::Serialize;

/// One round of golf: a course and the shots hit there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Round {
    course_name: String,
    shots: Vec<Shot>,
}

impl Round {
    /// Returns the course the round was played on.
    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// Returns the shots of the round, in recorded order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }
}

/// Every user's rounds, keyed by user name.
///
/// Shots are only ever appended while a log is being built; once built the
/// log is read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShotLog {
    users: BTreeMap<String, Vec<Round>>,
}

impl ShotLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `shot` to `user`'s round at `course_name`, opening the round
    /// on first use.
    pub(crate) fn push(&mut self, user: &str, course_name: &str, shot: Shot) {
        let rounds = self.users.entry(user.to_string()).or_default();
        match rounds.iter_mut().find(|r| r.course_name == course_name) {
            Some(round) => round.shots.push(shot),
            None => rounds.push(Round {
                course_name: course_name.to_string(),
                shots: vec![shot],
            }),
        }
    }

    /// User names, sorted.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Rounds for `user` in first-seen order; empty for an unknown user.
    pub fn rounds(&self, user: &str) -> &[Round] {
        self.users.get(user).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of shots across all users.
    pub fn len(&self) -> usize {
        self.users
            .values()
            .flat_map(|rounds| rounds.iter())
            .map(|r| r.shots.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ShotSource for ShotLog {
    type Error = Infallible;

    fn shots_for_user(&self, user: &str) -> Result<Vec<Shot>, Self::Error> {
        Ok(self
            .rounds(user)
            .iter()
            .flat_map(|r| r.shots.iter().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddie_shot::{Lie, ShotShape};

    fn shot(club: &str, distance: u32) -> Shot {
        Shot::new(club, distance, Lie::Fairway, ShotShape::Straight).unwrap()
    }

    #[test]
    fn groups_by_user_and_course() {
        let mut log = ShotLog::new();
        log.push("alex", "Pebble", shot("Driver", 250));
        log.push("alex", "Pebble", shot("7 Iron", 150));
        log.push("alex", "Links", shot("PW", 110));
        log.push("sam", "Pebble", shot("Driver", 230));

        assert_eq!(log.len(), 4);
        assert_eq!(log.users().collect::<Vec<_>>(), ["alex", "sam"]);
        let rounds = log.rounds("alex");
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].course_name(), "Pebble");
        assert_eq!(rounds[0].shots().len(), 2);
        assert_eq!(rounds[1].course_name(), "Links");
    }

    #[test]
    fn shot_source_flattens_rounds() {
        let mut log = ShotLog::new();
        log.push("alex", "Pebble", shot("Driver", 250));
        log.push("alex", "Links", shot("PW", 110));

        let shots = log.shots_for_user("alex").unwrap();
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[1].club(), "PW");
        assert!(log.shots_for_user("nobody").unwrap().is_empty());
        assert!(log.rounds("nobody").is_empty());
    }
}
