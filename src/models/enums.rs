//! Closed vocabularies shared across the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a stored string does not match any variant of a closed
/// vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid enum value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SymptomCategory {
    YesNo => "yes_no",
    MildModerateSevere => "mild_moderate_severe",
    Scale1To10 => "scale_1_to_10",
});

str_enum!(DrainageAlert {
    None => "none",
    TwoConsecutiveDaysIncreased => "two_consecutive_days_increased",
    LargeIncrease => "large_increase",
    GoalReached => "goal_reached",
});

str_enum!(SpirometryKind {
    Fev1 => "fev1",
    Fvc => "fvc",
    Pef => "pef",
});

impl SymptomCategory {
    /// The raw display values this category accepts, lowercased.
    pub fn standard_values(&self) -> Vec<&'static str> {
        match self {
            Self::YesNo => vec!["yes", "no"],
            Self::MildModerateSevere => vec!["mild", "moderate", "severe"],
            Self::Scale1To10 => vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
        }
    }
}
