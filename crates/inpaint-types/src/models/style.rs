//! Tearing styles offered to the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual manner of the edit applied inside the mask.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TearingStyle {
    /// Ragged, frayed edges
    #[default]
    Wild,
    /// Charred, ash-covered edges
    Burnt,
    /// Clean diagonal slashes
    Claw,
    /// Dripping, dissolving edges
    Melting,
    /// Polygonal glitch cutout
    Geometric,
    /// Hand-torn photo collage
    Paper,
}

impl TearingStyle {
    /// All styles in menu order.
    pub const ALL: [TearingStyle; 6] = [
        Self::Wild,
        Self::Burnt,
        Self::Claw,
        Self::Melting,
        Self::Geometric,
        Self::Paper,
    ];

    /// Stable identifier used on the command line and in JSON.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Wild => "wild",
            Self::Burnt => "burnt",
            Self::Claw => "claw",
            Self::Melting => "melting",
            Self::Geometric => "geometric",
            Self::Paper => "paper",
        }
    }

    /// Short human label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wild => "Torn Fabric",
            Self::Burnt => "Burnt Edges",
            Self::Claw => "Slash Marks",
            Self::Melting => "Surreal Melting",
            Self::Geometric => "Digital Cutout",
            Self::Paper => "Paper-Cut Collage",
        }
    }
}

impl fmt::Display for TearingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TearingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|s| s.id()).collect();
                format!("unknown style '{}', expected one of: {}", needle, known.join(", "))
            })
    }
}
