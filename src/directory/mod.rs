mod error;
mod seed;

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::models::{Activity, ActivityMap};

pub use error::{DirectoryError, Result};
pub use seed::default_activities;

/// In-memory directory of activities, shared by every request handler.
///
/// Cloning is cheap and every clone sees the same activities. A single lock
/// serializes reads and mutations so a participant can never be added twice.
pub struct Directory {
    activities: Arc<Mutex<ActivityMap>>,
}

impl Directory {
    pub fn empty() -> Self {
        Self::from_map(ActivityMap::new())
    }

    pub fn with_seed() -> Self {
        Self::from_map(default_activities())
    }

    /// Build a directory from an explicit set of activities.
    ///
    /// Fails if any activity lists the same participant twice.
    pub fn from_activities(activities: ActivityMap) -> Result<Self> {
        for (name, activity) in &activities {
            let mut seen = std::collections::HashSet::new();
            if let Some(email) = activity.participants.iter().find(|e| !seen.insert(*e)) {
                return Err(DirectoryError::DuplicateSeedParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
        Ok(Self::from_map(activities))
    }

    /// Load activities from a JSON file shaped like the `GET /activities` body.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed file {}", path.display()))?;
        let activities: ActivityMap = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed file {}", path.display()))?;
        tracing::info!("Loaded {} activities from {}", activities.len(), path.display());
        Ok(Self::from_activities(activities)?)
    }

    fn from_map(activities: ActivityMap) -> Self {
        Self {
            activities: Arc::new(Mutex::new(activities)),
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn list_activities(&self) -> ActivityMap {
        let activities = self.activities.lock().expect("directory lock poisoned");
        activities.clone()
    }

    pub fn get_activity(&self, name: &str) -> Option<Activity> {
        let activities = self.activities.lock().expect("directory lock poisoned");
        activities.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.lock().expect("directory lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Add `email` to the participants of `activity_name`.
    ///
    /// Capacity is advisory: a full activity still accepts signups.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.lock().expect("directory lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::NotFound)?;

        if activity.is_registered(email) {
            return Err(DirectoryError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = activity_name,
            spots_left = activity.spots_left(),
            "Signed up {}",
            email
        );

        Ok(format!("Signed up {email} for {activity_name}"))
    }

    /// Remove `email` from the participants of `activity_name`.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.activities.lock().expect("directory lock poisoned");
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;

        activity.participants.remove(position);
        tracing::info!(
            activity = activity_name,
            spots_left = activity.spots_left(),
            "Unregistered {}",
            email
        );

        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::with_seed()
    }
}

impl Clone for Directory {
    fn clone(&self) -> Self {
        Self {
            activities: self.activities.clone(),
        }
    }
}
