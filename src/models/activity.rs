use serde::{Deserialize, Serialize};

/// A school club or class as exposed on the activities API.
///
/// Activities are keyed by name in the registry, so the name itself does not
/// live on the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Enrolled student emails, in signup order. Never contains duplicates.
    pub participants: Vec<String>,
}
