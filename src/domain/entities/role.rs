//! The fixed role enumeration and its display colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a participant takes in the ritual.
///
/// The set is closed: submissions with any other role string are rejected,
/// and store records carrying an unknown role are skipped when listing.
/// Each role maps to a pin color on the map page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "RED PINS")]
    RedPins,
    #[serde(rename = "BLACK PINS")]
    BlackPins,
    #[serde(rename = "BLUE PINS")]
    BluePins,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 3] = [Role::RedPins, Role::BlackPins, Role::BluePins];

    /// The wire and store representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::RedPins => "RED PINS",
            Role::BlackPins => "BLACK PINS",
            Role::BluePins => "BLUE PINS",
        }
    }

    /// Pin color as a CSS hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Role::RedPins => "#d32f2f",
            Role::BlackPins => "#000000",
            Role::BluePins => "#1976d2",
        }
    }

    /// One-line description shown in the submission form.
    pub fn blurb(&self) -> &'static str {
        match self {
            Role::RedPins => {
                "If you bleed: offer. For women whose blood becomes prayer in the soil."
            }
            Role::BlackPins => {
                "If you don't: bless. For Wise Women, elders and keepers of the intention."
            }
            Role::BluePins => {
                "If you're a man: protect the space. \
                 For men standing in protection and reverence for this ritual."
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not part of the enumeration.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RED PINS" => Ok(Role::RedPins),
            "BLACK PINS" => Ok(Role::BlackPins),
            "BLUE PINS" => Ok(Role::BluePins),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
