//! Object state: the lifecycle stage of the thing being observed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of an observed system or object.
///
/// No transition rules: any stage may follow any other.
/// Serialized as the upper-case member name (`"STABILIZATION"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectState {
    Conception,
    Formation,
    #[default]
    Stabilization,
    Degradation,
    Termination,
}

impl ObjectState {
    /// Every stage, in display order.
    pub const ALL: [Self; 5] = [
        Self::Conception,
        Self::Formation,
        Self::Stabilization,
        Self::Degradation,
        Self::Termination,
    ];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Conception => "Idea",
            Self::Formation => "Formation",
            Self::Stabilization => "Stabilization",
            Self::Degradation => "Degradation",
            Self::Termination => "Termination",
        }
    }

    /// One-line description shown under the label.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Conception => "Exists only as intent. Nothing is fixed yet.",
            Self::Formation => "Structure is taking shape while rules and roles still move.",
            Self::Stabilization => "Runs predictably. The work is keeping it steady.",
            Self::Degradation => "Quality is slipping and symptoms outpace fixes.",
            Self::Termination => "Being wound down, or already ended.",
        }
    }

    /// The upper-case member name, as persisted.
    pub fn name(self) -> &'static str {
        match self {
            Self::Conception => "CONCEPTION",
            Self::Formation => "FORMATION",
            Self::Stabilization => "STABILIZATION",
            Self::Degradation => "DEGRADATION",
            Self::Termination => "TERMINATION",
        }
    }
}

impl fmt::Display for ObjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stabilization() {
        assert_eq!(ObjectState::default(), ObjectState::Stabilization);
    }

    #[test]
    fn serializes_as_member_name() {
        for state in ObjectState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.name()));
        }
    }

    #[test]
    fn rejects_unknown_member() {
        let err = serde_json::from_str::<ObjectState>("\"DORMANT\"");
        assert!(err.is_err());
    }

    #[test]
    fn display_order_is_declaration_order() {
        let names: Vec<_> = ObjectState::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "CONCEPTION",
                "FORMATION",
                "STABILIZATION",
                "DEGRADATION",
                "TERMINATION"
            ]
        );
    }
}
