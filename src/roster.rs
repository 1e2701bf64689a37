//! Drain roster updates — rename and archive-state changes over a
//! patient's tracked drains.
//!
//! Roster updates are deliberately update-only: drains referenced by id
//! are renamed or archive-toggled, drains omitted from the request are
//! left as they are, and the update path can neither introduce nor
//! delete drains. New drains only enter through the initial drainage
//! setup operation.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Drain, DrainPayload};
use crate::reconcile::{reconcile, ChildRef, ReconcileError, ReconcileMode};

/// Most drains a patient can have active (not archived) at once.
pub const MAX_ACTIVE_DRAINS: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// Two drains in the same request share a name (case-insensitive,
    /// after trimming).
    #[error("duplicate drain name: {name}")]
    DuplicateName { name: String },

    /// The update would leave more active drains than allowed.
    #[error("active drain limit exceeded: {active} active, {max} allowed")]
    ActiveLimitExceeded { active: usize, max: usize },
}

/// Applies a roster update and returns the new roster.
///
/// Validation runs entirely before mutation: duplicate request names and
/// the active-drain limit are both checked against the would-be state,
/// so a rejected update leaves the roster exactly as loaded. Archiving a
/// drain stamps `archived_at` with `now`; un-archiving clears it; a
/// rename alone leaves the stamp untouched, which makes resubmitting the
/// same request a no-op.
pub fn apply_roster_update(
    roster: &[Drain],
    requested: &[ChildRef<DrainPayload>],
    now: NaiveDateTime,
) -> Result<Vec<Drain>, RosterError> {
    let mut seen_names: HashSet<String> = HashSet::new();
    for item in requested {
        let key = item.payload.name.trim().to_lowercase();
        if !seen_names.insert(key) {
            return Err(RosterError::DuplicateName {
                name: item.payload.name.trim().to_string(),
            });
        }
    }

    let plan = reconcile(roster, requested, ReconcileMode::UpdateOnly)?;
    if !plan.to_create.is_empty() {
        tracing::warn!(
            ignored = plan.to_create.len(),
            "roster update cannot create drains; dropping id-less items"
        );
    }

    let updates: HashMap<Uuid, &DrainPayload> =
        plan.to_update.iter().map(|u| (u.id, &u.payload)).collect();

    // Post-update active count, checked before any drain is touched.
    let active = roster
        .iter()
        .filter(|d| match updates.get(&d.id) {
            Some(p) => !p.archived,
            None => !d.archived,
        })
        .count();
    if active > MAX_ACTIVE_DRAINS {
        tracing::warn!(active, max = MAX_ACTIVE_DRAINS, "rejected roster update");
        return Err(RosterError::ActiveLimitExceeded {
            active,
            max: MAX_ACTIVE_DRAINS,
        });
    }

    let next = roster
        .iter()
        .map(|d| match updates.get(&d.id) {
            None => d.clone(),
            Some(p) => {
                let archived_at = match (d.archived, p.archived) {
                    (false, true) => Some(now),
                    (true, false) => None,
                    _ => d.archived_at,
                };
                Drain {
                    id: d.id,
                    name: p.name.trim().to_string(),
                    archived: p.archived,
                    archived_at,
                }
            }
        })
        .collect();

    Ok(next)
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
