use crate::{hint::HintService, storage::StatsStore};
use adivina_data::{
    api::{GuessOutcome, HintResponse},
    DifficultyConfig, GameView, GuessResult, Session, StatsLedger, WordCatalog,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub struct AppState {
    pub host: GameHost,
    pub hints: Arc<HintService>,
    pub stats: Arc<StatsStore>,
}

pub type SharedState = Arc<AppState>;

/// Result of a hint round trip against the live round
#[derive(Debug)]
pub enum HintOutcome {
    /// Budget spent, round over, or another request still in flight
    Unavailable { used: u32 },
    Delivered(HintResponse),
    /// The round was replaced while the hint was in flight
    Expired,
}

/// The single live round and its collaborators
pub struct GameHost {
    catalog: Arc<WordCatalog>,
    hints: Arc<HintService>,
    ledger: Arc<dyn StatsLedger>,
    session: Mutex<Option<Session>>,
}

impl GameHost {
    pub fn new(
        catalog: Arc<WordCatalog>,
        hints: Arc<HintService>,
        ledger: Arc<dyn StatsLedger>,
    ) -> Self {
        Self {
            catalog,
            hints,
            ledger,
            session: Mutex::new(None),
        }
    }

    /// Starts a fresh round, replacing any previous one
    pub async fn start(&self, config: DifficultyConfig) -> Option<GameView> {
        let entry = self.catalog.random()?.clone();
        info!("new round: \"{}\" ({})", entry.word, config.difficulty);
        let session = Session::new(entry, config);
        let view = session.view();
        *self.session.lock().await = Some(session);
        Some(view)
    }

    pub async fn view(&self) -> Option<GameView> {
        self.session.lock().await.as_ref().map(Session::view)
    }

    /// Submits a guess, recording terminal rounds through the ledger
    pub async fn guess(&self, text: &str) -> Option<(GuessOutcome, GameView)> {
        let (result, view) = {
            let mut guard = self.session.lock().await;
            let session = guard.as_mut()?;
            let result = session.submit_guess(text);
            (result, session.view())
        };
        let outcome = GuessOutcome::from(&result);
        match result {
            GuessResult::Won(report) | GuessResult::Lost(report) => {
                info!(
                    "round over: \"{}\", won: {}, attempts: {}",
                    report.word, report.won, report.attempts
                );
                let stats = self.ledger.record_game(&report).await;
                debug!(
                    "streak is now {}, best {}",
                    stats.current_streak, stats.best_streak
                );
            }
            _ => {}
        }
        Some((outcome, view))
    }

    /// Runs one hint round trip, `None` when no round is live
    pub async fn hint(&self) -> Option<HintOutcome> {
        let ticket = {
            let mut guard = self.session.lock().await;
            let session = guard.as_mut()?;
            match session.begin_hint() {
                Some(ticket) => ticket,
                None => {
                    return Some(HintOutcome::Unavailable {
                        used: session.hints_used(),
                    })
                }
            }
        };
        // Delivery happens outside the session lock. The ticket keeps an
        // overlapping request from double-charging the hint budget.
        let response = self.hints.hint(&ticket.word, ticket.index).await;
        let mut guard = self.session.lock().await;
        match guard.as_mut() {
            Some(session) => {
                if session.complete_hint(&ticket, response.hint.clone()) {
                    debug!("hint {} delivered", ticket.index);
                    Some(HintOutcome::Delivered(response))
                } else {
                    Some(HintOutcome::Expired)
                }
            }
            None => Some(HintOutcome::Expired),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adivina_data::{GamePhase, GameReport, StatsSnapshot, WordEntry};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MemoryLedger(Mutex<StatsSnapshot>);

    impl MemoryLedger {
        fn new() -> Arc<Self> {
            Arc::new(Self(Mutex::new(StatsSnapshot::default())))
        }
    }

    #[async_trait]
    impl StatsLedger for MemoryLedger {
        async fn record_game(&self, report: &GameReport) -> StatsSnapshot {
            let mut stats = self.0.lock().await;
            stats.record(report, Utc::now());
            stats.clone()
        }

        async fn snapshot(&self) -> StatsSnapshot {
            self.0.lock().await.clone()
        }

        async fn reset(&self) {
            *self.0.lock().await = StatsSnapshot::default();
        }
    }

    fn single_word_host(word: &str) -> (GameHost, Arc<MemoryLedger>) {
        let entry: WordEntry = WordCatalog::builtin().find(word).unwrap().clone();
        let catalog = Arc::new(WordCatalog::new(vec![entry]));
        let ledger = MemoryLedger::new();
        let host = GameHost::new(
            Arc::clone(&catalog),
            Arc::new(HintService::new(catalog, false, 0)),
            ledger.clone() as Arc<dyn StatsLedger>,
        );
        (host, ledger)
    }

    #[tokio::test]
    async fn no_round_means_no_operations() {
        let (host, _) = single_word_host("chocolate");
        assert!(host.view().await.is_none());
        assert!(host.guess("chocolate").await.is_none());
        assert!(host.hint().await.is_none());
    }

    #[tokio::test]
    async fn won_round_lands_in_the_ledger() {
        let (host, ledger) = single_word_host("chocolate");
        host.start(DifficultyConfig::resolve("medium")).await.unwrap();

        let (outcome, view) = host.guess("girasol").await.unwrap();
        assert_eq!(outcome, GuessOutcome::Miss);
        assert_eq!(view.attempts, 1);

        let (outcome, view) = host.guess("CHOCOLATE").await.unwrap();
        assert_eq!(outcome, GuessOutcome::Won);
        assert_eq!(view.phase, GamePhase::Won);
        assert_eq!(view.word.as_deref(), Some("chocolate"));

        let stats = ledger.snapshot().await;
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.history[0].attempts, 2);
    }

    #[tokio::test]
    async fn hint_round_trips_charge_the_budget_once_each() {
        let (host, _) = single_word_host("chocolate");
        host.start(DifficultyConfig::resolve("medium")).await.unwrap();

        for expected in 1..=2u32 {
            match host.hint().await.unwrap() {
                HintOutcome::Delivered(response) => {
                    assert_eq!(response.used, expected);
                    assert!(!response.hint.is_empty());
                }
                other => panic!("expected a hint, got {other:?}"),
            }
        }
        match host.hint().await.unwrap() {
            HintOutcome::Unavailable { used } => assert_eq!(used, 2),
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn hard_rounds_get_no_hints() {
        let (host, _) = single_word_host("volcan");
        host.start(DifficultyConfig::resolve("Difícil")).await.unwrap();
        assert!(matches!(
            host.hint().await.unwrap(),
            HintOutcome::Unavailable { used: 0 }
        ));
    }

    #[tokio::test]
    async fn starting_a_round_replaces_the_previous_one() {
        let (host, ledger) = single_word_host("chocolate");
        host.start(DifficultyConfig::resolve("easy")).await.unwrap();
        host.guess("girasol").await.unwrap();

        let view = host.start(DifficultyConfig::resolve("hard")).await.unwrap();
        assert_eq!(view.attempts, 0);
        assert_eq!(view.max_attempts, 4);
        // abandoned rounds are not recorded
        assert_eq!(ledger.snapshot().await.total_games, 0);
    }
}
