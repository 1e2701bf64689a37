use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reconcile::PersistedChild;

/// A physical drain tracked under one patient's drainage setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drain {
    pub id: Uuid,
    pub name: String,
    pub archived: bool,
    pub archived_at: Option<NaiveDateTime>,
}

impl PersistedChild for Drain {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Requested state for one drain in a roster update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainPayload {
    pub name: String,
    pub archived: bool,
}

/// One raw drainage amount recorded by the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainageEntry {
    pub id: Uuid,
    /// Set when the patient attributed the amount to a specific drain.
    pub drain_id: Option<Uuid>,
    pub volume_ml: i64,
    pub recorded_at: NaiveDateTime,
}
