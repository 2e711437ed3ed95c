//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A size, offset or margin property holds a value that is not nil,
    /// an integer, a float or a percentage string
    #[error("malformed value {value} for property '{property}' on {node}")]
    MalformedValue {
        node: String,
        property: String,
        value: String,
    },

    /// A container ended up with no usable width or height
    #[error("cannot resolve {dimension} of {node}: no explicit size and no in-flow children")]
    UnresolvableDimension { node: String, dimension: String },

    /// `position_as` was given a type outside the recognized set
    #[error("unknown drawable type '{name}' (known types: {known})")]
    UnknownPolicy { name: String, known: String },
}

impl LayoutError {
    /// Create a malformed value error
    pub fn malformed(
        node: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedValue {
            node: node.into(),
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create an unresolvable dimension error
    pub fn unresolvable(node: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self::UnresolvableDimension {
            node: node.into(),
            dimension: dimension.into(),
        }
    }

    /// Create an unknown policy error
    pub fn unknown_policy(name: impl Into<String>, known: &[&str]) -> Self {
        Self::UnknownPolicy {
            name: name.into(),
            known: known.join(", "),
        }
    }

    /// The node the error was raised for, if any
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::MalformedValue { node, .. } | Self::UnresolvableDimension { node, .. } => {
                Some(node)
            }
            Self::UnknownPolicy { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_value_display() {
        let err = LayoutError::malformed("button 'ok'", "width", "true");
        let msg = err.to_string();
        assert!(msg.contains("width"));
        assert!(msg.contains("button 'ok'"));
        assert!(msg.contains("true"));
    }

    #[test]
    fn test_unresolvable_display() {
        let err = LayoutError::unresolvable("root/0", "height");
        assert!(err.to_string().contains("cannot resolve height of root/0"));
        assert_eq!(err.node(), Some("root/0"));
    }

    #[test]
    fn test_unknown_policy_display() {
        let err = LayoutError::unknown_policy("Grid", &["Stack", "Flow"]);
        assert!(err.to_string().contains("'Grid'"));
        assert!(err.to_string().contains("Stack, Flow"));
        assert_eq!(err.node(), None);
    }
}
