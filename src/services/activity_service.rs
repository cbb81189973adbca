//! Response shapes for the single-activity endpoints.
//!
//! Each single-field view serializes to the one-key object the front-end
//! consumes (`{"schedule": ...}`, `{"max_participants": ...}` etc).

use serde::Serialize;

use crate::registry::{ActivityRegistry, RegistryError};

#[derive(Debug, Serialize)]
pub struct ScheduleView {
    pub schedule: String,
}

#[derive(Debug, Serialize)]
pub struct DescriptionView {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct MaxParticipantsView {
    pub max_participants: usize,
}

#[derive(Debug, Serialize)]
pub struct CurrentParticipantsView {
    pub current_participants: usize,
}

#[derive(Debug, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

pub async fn schedule_view(
    registry: &ActivityRegistry,
    name: &str,
) -> Result<ScheduleView, RegistryError> {
    Ok(ScheduleView {
        schedule: registry.schedule(name).await?,
    })
}

pub async fn description_view(
    registry: &ActivityRegistry,
    name: &str,
) -> Result<DescriptionView, RegistryError> {
    Ok(DescriptionView {
        description: registry.description(name).await?,
    })
}

pub async fn max_participants_view(
    registry: &ActivityRegistry,
    name: &str,
) -> Result<MaxParticipantsView, RegistryError> {
    Ok(MaxParticipantsView {
        max_participants: registry.max_participants(name).await?,
    })
}

pub async fn current_participants_view(
    registry: &ActivityRegistry,
    name: &str,
) -> Result<CurrentParticipantsView, RegistryError> {
    Ok(CurrentParticipantsView {
        current_participants: registry.current_participant_count(name).await?,
    })
}

/// Run the signup and build the confirmation the client shows the student.
pub async fn sign_up(
    registry: &ActivityRegistry,
    name: &str,
    email: &str,
) -> Result<SignupConfirmation, RegistryError> {
    registry.sign_up(name, email).await?;
    Ok(SignupConfirmation {
        message: format!("Signed up {} for {}", email, name),
    })
}
