//! Positioning policies
//!
//! Shoes positioning only knows a handful of arrangements. Every drawable type
//! acts like one of them: a Stack, a Flow, or a plain minimum-size box
//! ("Drawable"). Widget and DocumentRoot are slots and behave like a Flow;
//! Button, Para and the other leaf widgets behave like a plain box sized by
//! their native minimum size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LayoutError;

/// How a node arranges its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Leaf with a natural size; children are never laid out
    Intrinsic,
    /// Children top to bottom
    Stacked,
    /// Children left to right, wrapping into rows
    Flowed,
}

/// The fundamental type names recognized by [`Policy::position_as`]
pub const POSITION_TYPES: &[&str] = &["Stack", "Flow", "Drawable"];

/// Type names that position like one of [`POSITION_TYPES`]
pub const POSITION_ALIASES: &[(&str, &str)] = &[
    ("DocumentRoot", "Flow"),
    ("Widget", "Flow"),
    ("Slot", "Flow"),
    ("Button", "Drawable"),
    ("Para", "Drawable"),
    ("EditBox", "Drawable"),
    ("EditLine", "Drawable"),
    ("Check", "Drawable"),
    ("Radio", "Drawable"),
    ("Progress", "Drawable"),
    ("Image", "Drawable"),
    ("Banner", "Drawable"),
    ("Title", "Drawable"),
    ("Subtitle", "Drawable"),
    ("Tagline", "Drawable"),
    ("Caption", "Drawable"),
    ("Inscription", "Drawable"),
];

impl Policy {
    /// Declare what a drawable type positions as.
    ///
    /// Accepts one of [`POSITION_TYPES`] or an alias from [`POSITION_ALIASES`].
    pub fn position_as(type_name: &str) -> Result<Policy, LayoutError> {
        let canonical = POSITION_ALIASES
            .iter()
            .find(|(alias, _)| *alias == type_name)
            .map(|(_, target)| *target)
            .unwrap_or(type_name);

        match canonical {
            "Stack" => Ok(Policy::Stacked),
            "Flow" => Ok(Policy::Flowed),
            "Drawable" => Ok(Policy::Intrinsic),
            _ => {
                tracing::warn!("unknown drawable type {:?} in position_as", type_name);
                Err(LayoutError::unknown_policy(type_name, POSITION_TYPES))
            }
        }
    }

    /// The canonical type name for this policy
    pub fn type_name(&self) -> &'static str {
        match self {
            Policy::Intrinsic => "Drawable",
            Policy::Stacked => "Stack",
            Policy::Flowed => "Flow",
        }
    }

    /// Whether nodes with this policy lay out children
    pub fn is_container(&self) -> bool {
        !matches!(self, Policy::Intrinsic)
    }
}

impl FromStr for Policy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::position_as(s)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Intrinsic => write!(f, "intrinsic"),
            Policy::Stacked => write!(f, "stacked"),
            Policy::Flowed => write!(f, "flowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_types() {
        assert_eq!(Policy::position_as("Stack"), Ok(Policy::Stacked));
        assert_eq!(Policy::position_as("Flow"), Ok(Policy::Flowed));
        assert_eq!(Policy::position_as("Drawable"), Ok(Policy::Intrinsic));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Policy::position_as("DocumentRoot"), Ok(Policy::Flowed));
        assert_eq!(Policy::position_as("Widget"), Ok(Policy::Flowed));
        assert_eq!(Policy::position_as("Button"), Ok(Policy::Intrinsic));
        assert_eq!(Policy::position_as("Para"), Ok(Policy::Intrinsic));
    }

    #[test]
    fn test_every_alias_targets_a_known_type() {
        for (alias, target) in POSITION_ALIASES {
            assert!(POSITION_TYPES.contains(target), "{} -> {}", alias, target);
            assert!(Policy::position_as(alias).is_ok());
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = Policy::position_as("Grid").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownPolicy { ref name, .. } if name == "Grid"));
        // Names are case sensitive
        assert!("stack".parse::<Policy>().is_err());
    }

    #[test]
    fn test_type_name_round_trips() {
        for policy in [Policy::Intrinsic, Policy::Stacked, Policy::Flowed] {
            assert_eq!(Policy::position_as(policy.type_name()), Ok(policy));
        }
    }
}
