//! Symptom detail sync — full-state replacement of the detail lines
//! under one symptom entry.
//!
//! Unlike drain roster updates, detail sync honors the complete plan:
//! id-less lines are created, referenced lines replaced, and persisted
//! lines missing from the request hard-deleted. Validation of every
//! requested line runs before any plan step is produced, so a sync is
//! all-or-nothing.

use thiserror::Error;
use uuid::Uuid;

use crate::models::enums::SymptomCategory;
use crate::models::{DetailPayload, SymptomDetail};
use crate::reconcile::{reconcile, ChildRef, ReconcileError, ReconcileMode};
use crate::reference::ValueCatalog;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailSyncError {
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// The reported value is outside the symptom's permitted range.
    #[error("value {value:?} is not permitted for symptom {symptom_id} in category {category:?}")]
    ValueNotPermitted {
        symptom_id: Uuid,
        category: SymptomCategory,
        value: String,
    },
}

/// Applied outcome of a detail sync: explicit created/updated/removed
/// steps for the caller to persist within one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSetUpdate {
    pub created: Vec<SymptomDetail>,
    pub updated: Vec<SymptomDetail>,
    pub removed: Vec<Uuid>,
}

/// Replaces the detail set of one symptom entry with the requested
/// target state.
pub fn sync_detail_set(
    existing: &[SymptomDetail],
    requested: &[ChildRef<DetailPayload>],
    catalog: &dyn ValueCatalog,
) -> Result<DetailSetUpdate, DetailSyncError> {
    for item in requested {
        let p = &item.payload;
        if !catalog.is_permitted(p.symptom_id, p.category, &p.value) {
            tracing::warn!(
                symptom = %p.symptom_id,
                value = %p.value,
                "rejected symptom detail outside permitted range"
            );
            return Err(DetailSyncError::ValueNotPermitted {
                symptom_id: p.symptom_id,
                category: p.category,
                value: p.value.clone(),
            });
        }
    }

    let plan = reconcile(existing, requested, ReconcileMode::FullSync)?;

    let created = plan
        .to_create
        .into_iter()
        .map(|p| SymptomDetail {
            id: Uuid::new_v4(),
            symptom_id: p.symptom_id,
            category: p.category,
            value: p.value,
        })
        .collect();
    let updated = plan
        .to_update
        .into_iter()
        .map(|u| SymptomDetail {
            id: u.id,
            symptom_id: u.payload.symptom_id,
            category: u.payload.category,
            value: u.payload.value,
        })
        .collect();

    Ok(DetailSetUpdate {
        created,
        updated,
        removed: plan.to_remove,
    })
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::StaticValueCatalog;

    fn detail(symptom_id: Uuid, category: SymptomCategory, value: &str) -> SymptomDetail {
        SymptomDetail {
            id: Uuid::new_v4(),
            symptom_id,
            category,
            value: value.into(),
        }
    }

    fn line(
        existing_id: Option<Uuid>,
        symptom_id: Uuid,
        category: SymptomCategory,
        value: &str,
    ) -> ChildRef<DetailPayload> {
        ChildRef {
            existing_id,
            payload: DetailPayload {
                symptom_id,
                category,
                value: value.into(),
            },
        }
    }

    fn catalog_for(symptom_id: Uuid, category: SymptomCategory) -> StaticValueCatalog {
        let mut catalog = StaticValueCatalog::new();
        catalog.permit_standard(symptom_id, category);
        catalog
    }

    // ───────────────────────────────────────
    // Full-sync semantics
    // ───────────────────────────────────────

    #[test]
    fn unreferenced_lines_are_removed() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::MildModerateSevere);
        let existing = vec![
            detail(symptom, SymptomCategory::MildModerateSevere, "mild"),
            detail(symptom, SymptomCategory::MildModerateSevere, "severe"),
        ];
        let kept = existing[0].id;

        let update = sync_detail_set(
            &existing,
            &[line(Some(kept), symptom, SymptomCategory::MildModerateSevere, "moderate")],
            &catalog,
        )
        .unwrap();

        assert_eq!(update.removed, vec![existing[1].id]);
        assert_eq!(update.updated.len(), 1);
        assert_eq!(update.updated[0].id, kept);
        assert_eq!(update.updated[0].value, "moderate");
        assert!(update.created.is_empty());
    }

    #[test]
    fn id_less_lines_are_created_with_fresh_ids() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::YesNo);

        let update = sync_detail_set(
            &[],
            &[line(None, symptom, SymptomCategory::YesNo, "yes")],
            &catalog,
        )
        .unwrap();

        assert_eq!(update.created.len(), 1);
        assert_eq!(update.created[0].value, "yes");
        assert!(update.updated.is_empty());
        assert!(update.removed.is_empty());
    }

    #[test]
    fn empty_request_clears_the_detail_set() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::YesNo);
        let existing = vec![
            detail(symptom, SymptomCategory::YesNo, "yes"),
            detail(symptom, SymptomCategory::YesNo, "no"),
        ];

        let update = sync_detail_set(&existing, &[], &catalog).unwrap();
        assert_eq!(update.removed.len(), 2);
        assert!(update.created.is_empty());
        assert!(update.updated.is_empty());
    }

    #[test]
    fn every_item_is_accounted_for_exactly_once() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::Scale1To10);
        let existing = vec![
            detail(symptom, SymptomCategory::Scale1To10, "3"),
            detail(symptom, SymptomCategory::Scale1To10, "5"),
        ];
        let requested = vec![
            line(Some(existing[0].id), symptom, SymptomCategory::Scale1To10, "7"),
            line(None, symptom, SymptomCategory::Scale1To10, "2"),
        ];

        let update = sync_detail_set(&existing, &requested, &catalog).unwrap();
        assert_eq!(
            update.created.len() + update.updated.len() + update.removed.len(),
            3
        );
        for id in &update.removed {
            assert!(requested.iter().all(|r| r.existing_id != Some(*id)));
        }
    }

    // ───────────────────────────────────────
    // Validation
    // ───────────────────────────────────────

    #[test]
    fn invalid_value_rejects_the_whole_sync() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::MildModerateSevere);
        let existing = vec![detail(symptom, SymptomCategory::MildModerateSevere, "mild")];

        let requested = vec![
            line(
                Some(existing[0].id),
                symptom,
                SymptomCategory::MildModerateSevere,
                "moderate",
            ),
            line(None, symptom, SymptomCategory::MildModerateSevere, "agonizing"),
        ];

        let err = sync_detail_set(&existing, &requested, &catalog).unwrap_err();
        assert_eq!(
            err,
            DetailSyncError::ValueNotPermitted {
                symptom_id: symptom,
                category: SymptomCategory::MildModerateSevere,
                value: "agonizing".into(),
            }
        );
    }

    #[test]
    fn validation_accepts_mixed_case_values() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::MildModerateSevere);

        let update = sync_detail_set(
            &[],
            &[line(None, symptom, SymptomCategory::MildModerateSevere, "Severe")],
            &catalog,
        )
        .unwrap();
        assert_eq!(update.created[0].value, "Severe");
    }

    #[test]
    fn foreign_detail_id_is_rejected() {
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::YesNo);
        let foreign = Uuid::new_v4();

        let err = sync_detail_set(
            &[],
            &[line(Some(foreign), symptom, SymptomCategory::YesNo, "yes")],
            &catalog,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DetailSyncError::Reconcile(ReconcileError::ForeignIdentifier { id: foreign })
        );
    }

    #[test]
    fn validation_runs_before_reconciliation() {
        // An invalid value and a foreign id in the same request: the
        // value check fires first, nothing is classified.
        let symptom = Uuid::new_v4();
        let catalog = catalog_for(symptom, SymptomCategory::YesNo);
        let foreign = Uuid::new_v4();

        let requested = vec![
            line(None, symptom, SymptomCategory::YesNo, "perhaps"),
            line(Some(foreign), symptom, SymptomCategory::YesNo, "yes"),
        ];
        let err = sync_detail_set(&[], &requested, &catalog).unwrap_err();
        assert!(matches!(err, DetailSyncError::ValueNotPermitted { .. }));
    }
}
