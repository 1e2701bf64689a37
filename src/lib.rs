//! Recova core — patient-reported-outcome reconciliation and analytics.
//!
//! Pure, synchronous functions over collections the calling service has
//! already loaded: child-collection reconciliation (drain rosters,
//! symptom detail sets) and derived analytics (drainage trend alerts,
//! symptom and spirometry graph series). Persistence, transport, and
//! authentication live in the caller; every function here is safe to
//! invoke concurrently as long as each call owns its inputs.

pub mod details; // symptom detail set sync (full create/update/remove)
pub mod graphing; // categorical symptom readings → ordinal chart series
pub mod models;
pub mod reconcile; // generic child-collection create/update/remove classifier
pub mod reference; // permitted-value catalog for symptom details
pub mod roster; // drain roster updates (update-only)
pub mod spirometry; // numeric lung-function chart series
pub mod trend; // settled daily totals → drainage alert
