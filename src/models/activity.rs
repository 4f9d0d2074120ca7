use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An extracurricular activity offered by the school.
///
/// The activity's name is not stored here; it is the key the activity is
/// filed under in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Signups are not rejected when it is reached.
    pub max_participants: u32,
    /// Student emails in signup order. Each email appears at most once.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of free places left, saturating at zero once oversubscribed.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Snapshot of the whole directory, keyed by activity name in the order the
/// activities were seeded.
pub type ActivityMap = IndexMap<String, Activity>;

/// Query string for signup and unregister requests.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}
