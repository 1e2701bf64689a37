//! Child-collection reconciliation — the generic create/update/remove
//! classifier behind drain roster updates and symptom detail sync.
//!
//! Clients resubmit the full target state of a child collection, each
//! submitted item optionally carrying the id of the persisted record it
//! addresses. Reconciliation partitions that input into a plan of
//! explicit steps the caller applies inside its own transaction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A client-submitted child record. An absent `existing_id` marks the
/// item as new; a present one must address a record owned by the same
/// parent aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRef<T> {
    pub existing_id: Option<Uuid>,
    pub payload: T,
}

/// How persisted records left unreferenced by the request are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconcileMode {
    /// Unreferenced records are removed.
    FullSync,
    /// Unreferenced records are left untouched.
    UpdateOnly,
}

/// A planned payload replacement for one persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedUpdate<T> {
    pub id: Uuid,
    pub payload: T,
}

/// Disjoint create/update/remove steps computed from one request.
///
/// Every id in `to_update` and `to_remove` was present in the existing
/// collection; `to_create` items never carry an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationPlan<T> {
    pub to_create: Vec<T>,
    pub to_update: Vec<PlannedUpdate<T>>,
    pub to_remove: Vec<Uuid>,
}

impl<T> ReconciliationPlan<T> {
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_update.is_empty() && self.to_remove.is_empty()
    }
}

/// Implemented by persisted child records so the reconciler can match
/// submitted items against them.
pub trait PersistedChild {
    fn id(&self) -> Uuid;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// The request referenced an id the addressed parent does not own.
    /// Always a hard error, never a silent drop.
    #[error("referenced child {id} does not belong to this aggregate")]
    ForeignIdentifier { id: Uuid },
}

/// Classifies `requested` against `existing` into a [`ReconciliationPlan`].
///
/// Performs no mutation and is deterministic given its inputs: list
/// order in the plan follows request order for creates/updates and
/// existing order for removals.
pub fn reconcile<P: PersistedChild, T: Clone>(
    existing: &[P],
    requested: &[ChildRef<T>],
    mode: ReconcileMode,
) -> Result<ReconciliationPlan<T>, ReconcileError> {
    let existing_ids: HashSet<Uuid> = existing.iter().map(|p| p.id()).collect();

    let mut plan = ReconciliationPlan {
        to_create: Vec::new(),
        to_update: Vec::new(),
        to_remove: Vec::new(),
    };
    let mut referenced: HashSet<Uuid> = HashSet::new();

    for item in requested {
        match item.existing_id {
            Some(id) => {
                if !existing_ids.contains(&id) {
                    return Err(ReconcileError::ForeignIdentifier { id });
                }
                referenced.insert(id);
                plan.to_update.push(PlannedUpdate {
                    id,
                    payload: item.payload.clone(),
                });
            }
            None => plan.to_create.push(item.payload.clone()),
        }
    }

    if mode == ReconcileMode::FullSync {
        plan.to_remove = existing
            .iter()
            .map(|p| p.id())
            .filter(|id| !referenced.contains(id))
            .collect();
    }

    tracing::debug!(
        creates = plan.to_create.len(),
        updates = plan.to_update.len(),
        removes = plan.to_remove.len(),
        ?mode,
        "reconciled child collection"
    );

    Ok(plan)
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
