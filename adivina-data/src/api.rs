use crate::{DerivedStats, GameView, GuessResult, StatsSnapshot};
use serde::{Deserialize, Serialize};

/// Authored hints per word, the hard ceiling of every hint budget
pub const MAX_HINTS: u32 = 3;

/// Fixed messages of the hint endpoint
pub const MISSING_WORD: &str = "Error: palabra no proporcionada";
pub const ALL_HINTS_USED: &str = "Has usado todas las pistas disponibles.";
pub const HINT_FAILURE: &str = "Error al procesar la solicitud de pista.";

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub word: String,
    pub hints_used: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HintResponse {
    pub hint: String,
    pub used: u32,
    pub max: u32,
}

/// Payload of the informational hint endpoint
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintInfo {
    pub message: String,
    pub usage: String,
    pub max_hints: u32,
    pub ai_enabled: bool,
    pub note: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GuessBody {
    pub guess: String,
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Rejected,
    Miss,
    Won,
    Lost,
}

impl From<&GuessResult> for GuessOutcome {
    fn from(result: &GuessResult) -> Self {
        match result {
            GuessResult::Rejected => Self::Rejected,
            GuessResult::Miss => Self::Miss,
            GuessResult::Won(_) => Self::Won,
            GuessResult::Lost(_) => Self::Lost,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GuessReply {
    pub result: GuessOutcome,
    pub game: GameView,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatsReply {
    #[serde(flatten)]
    pub stats: StatsSnapshot,
    pub derived: DerivedStats,
}
