//! Depth limits and the difficulty presets built on them

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::eval::{MAX_POSITIONAL_SCORE, WIN_SCORE};

/// How deep the search may go before falling back to the positional heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLimit {
    /// Search every line to the end of the game (optimal play)
    #[default]
    Unlimited,
    /// Stop after this many plies and score the position heuristically.
    ///
    /// Up to [`DepthLimit::MAX_BOUNDED_PLIES`] the heuristic stays strictly
    /// below every terminal score the search can produce. Deeper limits are
    /// still searched, but a cutoff score can then tie a late win or loss.
    Plies(u32),
}

impl DepthLimit {
    /// Deepest limit whose heuristic scores cannot reach a terminal score
    pub const MAX_BOUNDED_PLIES: u32 = (WIN_SCORE - MAX_POSITIONAL_SCORE - 1) as u32;

    /// Whether cutoff scores are guaranteed to stay below terminal scores
    pub fn keeps_heuristic_bounded(self) -> bool {
        match self {
            DepthLimit::Unlimited => true,
            DepthLimit::Plies(limit) => limit <= Self::MAX_BOUNDED_PLIES,
        }
    }

    /// Whether a node at `depth` plies below the root is a cutoff leaf
    pub fn cuts_off(self, depth: u32) -> bool {
        match self {
            DepthLimit::Unlimited => false,
            DepthLimit::Plies(limit) => depth >= limit,
        }
    }
}

impl From<Option<u32>> for DepthLimit {
    fn from(limit: Option<u32>) -> Self {
        limit.map_or(DepthLimit::Unlimited, DepthLimit::Plies)
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Unlimited => f.write_str("unlimited"),
            DepthLimit::Plies(n) => write!(f, "{n} plies"),
        }
    }
}

/// Console difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    /// Full search; the engine never loses.
    #[default]
    Hard,
}

impl Difficulty {
    pub fn depth_limit(self) -> DepthLimit {
        match self {
            Difficulty::Easy => DepthLimit::Plies(2),
            Difficulty::Medium => DepthLimit::Plies(4),
            Difficulty::Hard => DepthLimit::Unlimited,
        }
    }
}

impl From<Difficulty> for DepthLimit {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.depth_limit()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: "1/easy, 2/medium, 3/hard".to_string(),
            }),
        }
    }
}
