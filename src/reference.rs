//! Permitted-value catalog — reference data deciding which
//! (symptom, category, value) triples a patient may report.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::enums::SymptomCategory;

/// Lookup of permitted `(symptom, category, value)` combinations.
/// Matching is case-insensitive on the value.
pub trait ValueCatalog {
    fn is_permitted(&self, symptom_id: Uuid, category: SymptomCategory, value: &str) -> bool;
}

/// In-memory catalog built from static rows, one per symptom/category
/// pair.
#[derive(Debug, Clone, Default)]
pub struct StaticValueCatalog {
    rows: HashMap<(Uuid, SymptomCategory), Vec<String>>,
}

impl StaticValueCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers permitted values for a symptom under a category.
    pub fn permit(&mut self, symptom_id: Uuid, category: SymptomCategory, values: &[&str]) {
        self.rows
            .entry((symptom_id, category))
            .or_default()
            .extend(values.iter().map(|v| v.trim().to_lowercase()));
    }

    /// Registers the category's standard vocabulary for a symptom.
    pub fn permit_standard(&mut self, symptom_id: Uuid, category: SymptomCategory) {
        self.permit(symptom_id, category, &category.standard_values());
    }
}

impl ValueCatalog for StaticValueCatalog {
    fn is_permitted(&self, symptom_id: Uuid, category: SymptomCategory, value: &str) -> bool {
        let needle = value.trim().to_lowercase();
        self.rows
            .get(&(symptom_id, category))
            .map(|values| values.iter().any(|v| *v == needle))
            .unwrap_or(false)
    }
}
