//! Human role: the observer's relationship to the object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The observer's standing relative to the observed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HumanRole {
    Owner,
    Strategist,
    Specialist,
    #[default]
    Observer,
    Outsider,
}

impl HumanRole {
    /// Every role, in display order.
    pub const ALL: [Self; 5] = [
        Self::Owner,
        Self::Strategist,
        Self::Specialist,
        Self::Observer,
        Self::Outsider,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Strategist => "Strategist",
            Self::Specialist => "Specialist",
            Self::Observer => "Observer",
            Self::Outsider => "Outsider",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Owner => "Carries the outcome and may change the rules.",
            Self::Strategist => "Sets direction without owning the result.",
            Self::Specialist => "Executes inside a defined area of competence.",
            Self::Observer => "Watches and records without intervening.",
            Self::Outsider => "Has no standing inside the system.",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Strategist => "STRATEGIST",
            Self::Specialist => "SPECIALIST",
            Self::Observer => "OBSERVER",
            Self::Outsider => "OUTSIDER",
        }
    }
}

impl fmt::Display for HumanRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
