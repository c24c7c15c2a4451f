use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

mod seed;

/// Shared handle the web layer carries as router state.
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// No activity with the requested name.
    UnknownActivity,
    /// Signup for an email already on the roster.
    AlreadySignedUp,
    /// Unregister for an email not on the roster.
    NotSignedUp,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegistryError::UnknownActivity => "Activity not found",
            RegistryError::AlreadySignedUp => "Student already signed up for this activity",
            RegistryError::NotSignedUp => "Student not registered for this activity",
        })
    }
}

impl std::error::Error for RegistryError {}

/// In-memory mapping from activity name to its record.
///
/// Seeded once at startup; `signup` and `unregister` are the only mutations.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: BTreeMap<String, Activity>,
}

impl ActivityRegistry {
    /// Registry pre-populated with the school's fixed activity list.
    pub fn seeded() -> Self {
        Self {
            activities: seed::activities(),
        }
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Read-only view of the full mapping.
    pub fn all(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// Add `email` to the roster of `activity_name`.
    ///
    /// `max_participants` is advisory and not checked here; the roster may
    /// grow past it.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::UnknownActivity)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    /// Remove `email` from the roster of `activity_name`.
    pub fn unregister(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, RegistryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(RegistryError::UnknownActivity)?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotSignedUp);
        };

        activity.participants.remove(position);
        Ok(format!("Unregistered {email} from {activity_name}"))
    }
}
