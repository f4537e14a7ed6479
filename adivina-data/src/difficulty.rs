use crate::text::normalize;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// Difficulty identifier selectable before a round starts
#[derive(Copy, Clone, Debug, DeserializeFromStr, Eq, Hash, PartialEq, SerializeDisplay)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Self> {
        vec![Self::Easy, Self::Medium, Self::Hard]
    }

    /// Attempt and hint budgets for this difficulty
    pub fn config(self) -> DifficultyConfig {
        match self {
            Self::Easy => DifficultyConfig {
                difficulty: self,
                max_attempts: 8,
                max_hints: 3,
            },
            Self::Medium => DifficultyConfig {
                difficulty: self,
                max_attempts: 6,
                max_hints: 2,
            },
            Self::Hard => DifficultyConfig {
                difficulty: self,
                max_attempts: 4,
                max_hints: 0,
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown difficulty: {0}")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "easy" | "facil" => Ok(Self::Easy),
            "medium" | "medio" => Ok(Self::Medium),
            "hard" | "dificil" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Medio",
            Difficulty::Hard => "Difícil",
        };
        write!(f, "{}", name)
    }
}

/// Attempt and hint budgets for one round
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DifficultyConfig {
    pub difficulty: Difficulty,
    pub max_attempts: u32,
    pub max_hints: u32,
}

impl DifficultyConfig {
    /// Resolves an identifier, falling back to Medium when unrecognized
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or(Difficulty::Medium).config()
    }
}
