use crate::{Difficulty, GameReport};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most recent rounds kept in the history, newest first
pub const HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameRecord {
    pub date: DateTime<Utc>,
    pub word: String,
    pub won: bool,
    pub attempts: u32,
    pub hints_used: u32,
    pub difficulty: Difficulty,
}

/// Running totals and streaks over all recorded rounds
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_attempts: u32,
    pub total_hints_used: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub history: Vec<GameRecord>,
}

impl StatsSnapshot {
    /// Folds a finished round into the totals
    ///
    /// A win extends the current streak, a loss resets it to zero. The best
    /// streak is a running maximum and only an explicit reset lowers it.
    pub fn record(&mut self, report: &GameReport, date: DateTime<Utc>) {
        self.total_games += 1;
        self.total_attempts += report.attempts;
        self.total_hints_used += report.hints_used;
        if report.won {
            self.wins += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.losses += 1;
            self.current_streak = 0;
        }
        self.history.insert(
            0,
            GameRecord {
                date,
                word: report.word.clone(),
                won: report.won,
                attempts: report.attempts,
                hints_used: report.hints_used,
                difficulty: report.difficulty,
            },
        );
        self.history.truncate(HISTORY_LIMIT);
    }
}

/// Figures derived from a snapshot for display
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct DerivedStats {
    pub win_percentage: u32,
    pub avg_attempts: f64,
    pub avg_hints: f64,
}

impl From<&StatsSnapshot> for DerivedStats {
    fn from(stats: &StatsSnapshot) -> Self {
        if stats.total_games == 0 {
            return Self {
                win_percentage: 0,
                avg_attempts: 0.0,
                avg_hints: 0.0,
            };
        }
        let games = f64::from(stats.total_games);
        Self {
            win_percentage: (f64::from(stats.wins) / games * 100.0).round() as u32,
            avg_attempts: round_tenth(f64::from(stats.total_attempts) / games),
            avg_hints: round_tenth(f64::from(stats.total_hints_used) / games),
        }
    }
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Persistence port for completed rounds
///
/// Injected into the server orchestrator so the rules engine itself never
/// touches storage. Implementations treat `record_game` as an atomic
/// read-modify-write.
#[async_trait]
pub trait StatsLedger: Send + Sync {
    async fn record_game(&self, report: &GameReport) -> StatsSnapshot;
    async fn snapshot(&self) -> StatsSnapshot;
    async fn reset(&self);
}
