pub mod drain;
pub mod enums;
pub mod symptom;

pub use drain::{Drain, DrainPayload, DrainageEntry};
pub use enums::{DrainageAlert, InvalidEnum, SpirometryKind, SymptomCategory};
pub use symptom::{DetailPayload, SymptomDetail, SymptomReading};
