use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::SymptomCategory;
use crate::reconcile::PersistedChild;

/// A persisted detail line under one symptom entry: what was reported,
/// in which category, at which value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomDetail {
    pub id: Uuid,
    pub symptom_id: Uuid,
    pub category: SymptomCategory,
    pub value: String,
}

impl PersistedChild for SymptomDetail {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Requested state for one detail line — the (symptom, category, value)
/// triple common to both the create and the update shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPayload {
    pub symptom_id: Uuid,
    pub category: SymptomCategory,
    pub value: String,
}

/// A dated symptom reading, as loaded for graphing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReading {
    pub symptom_name: String,
    pub category: SymptomCategory,
    pub recorded_on: NaiveDate,
    pub value: String,
}
