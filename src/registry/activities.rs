//! In-memory activity registry.
//!
//! Owns the activity map behind a single `RwLock` so the signup
//! check-then-append sequence is one write-lock critical section and two
//! concurrent signups can never jointly overshoot capacity or double-add
//! an email. Reads clone out under the read lock; no lock is held across
//! response serialization.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::Activity;

/// Cheaply cloneable handle shared across request handlers.
pub type SharedRegistry = Arc<ActivityRegistry>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Already signed up for this activity")]
    AlreadyRegistered,
    #[error("Maximum participants reached")]
    CapacityExceeded,
}

pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Full registry snapshot, keyed by activity name.
    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Result<Activity, RegistryError> {
        self.activities
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    /// Roster for the named activity, in signup order.
    pub async fn participants(&self, name: &str) -> Result<Vec<String>, RegistryError> {
        self.read_field(name, |a| a.participants.clone()).await
    }

    pub async fn schedule(&self, name: &str) -> Result<String, RegistryError> {
        self.read_field(name, |a| a.schedule.clone()).await
    }

    pub async fn description(&self, name: &str) -> Result<String, RegistryError> {
        self.read_field(name, |a| a.description.clone()).await
    }

    pub async fn max_participants(&self, name: &str) -> Result<usize, RegistryError> {
        self.read_field(name, |a| a.max_participants).await
    }

    pub async fn current_participant_count(&self, name: &str) -> Result<usize, RegistryError> {
        self.read_field(name, |a| a.participants.len()).await
    }

    /// Register `email` for the named activity.
    ///
    /// The existence, duplicate, and capacity checks run in that order and
    /// all of them before the append; a rejected signup leaves the roster
    /// untouched.
    pub async fn sign_up(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(RegistryError::NotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if activity.is_full() {
            return Err(RegistryError::CapacityExceeded);
        }

        activity.participants.push(email.to_string());
        info!(
            activity = %name,
            email = %email,
            roster = activity.participants.len(),
            "participant signed up"
        );
        Ok(())
    }

    async fn read_field<T>(
        &self,
        name: &str,
        field: impl FnOnce(&Activity) -> T,
    ) -> Result<T, RegistryError> {
        self.activities
            .read()
            .await
            .get(name)
            .map(field)
            .ok_or(RegistryError::NotFound)
    }
}
