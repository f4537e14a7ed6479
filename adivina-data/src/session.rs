use crate::{text, Difficulty, DifficultyConfig, WordEntry};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Phase of a round, one-directional: playing until won or lost
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GuessRecord {
    pub text: String,
    pub correct: bool,
}

/// Terminal event emitted once per round, consumed by the stats ledger
#[derive(Clone, Debug, PartialEq)]
pub struct GameReport {
    pub word: String,
    pub won: bool,
    pub attempts: u32,
    pub hints_used: u32,
    pub difficulty: Difficulty,
}

/// Outcome of a submitted guess
#[derive(Clone, Debug, PartialEq)]
pub enum GuessResult {
    /// Guard tripped: blank input or the round is already over
    Rejected,
    Miss,
    Won(GameReport),
    Lost(GameReport),
}

/// Claim on the next hint while its delivery round trip is in flight
#[derive(Clone, Debug, PartialEq)]
pub struct HintTicket {
    pub word: String,
    /// 1-based index of the hint to deliver
    pub index: u32,
}

/// One round of play from word selection to terminal outcome
#[derive(Clone, Debug)]
pub struct Session {
    word: WordEntry,
    config: DifficultyConfig,
    attempts: u32,
    hints_used: u32,
    hints_revealed: Vec<String>,
    guesses: Vec<GuessRecord>,
    phase: GamePhase,
    pending_hint: Option<u32>,
}

impl Session {
    pub fn new(word: WordEntry, config: DifficultyConfig) -> Self {
        Self {
            word,
            config,
            attempts: 0,
            hints_used: 0,
            hints_revealed: vec![],
            guesses: vec![],
            phase: GamePhase::Playing,
            pending_hint: None,
        }
    }

    pub fn word(&self) -> &WordEntry {
        &self.word
    }

    pub fn difficulty(&self) -> DifficultyConfig {
        self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn hints_revealed(&self) -> &[String] {
        &self.hints_revealed
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn hint_pending(&self) -> bool {
        self.pending_hint.is_some()
    }

    /// Submits a guess and advances the phase
    ///
    /// Correctness is checked before the attempt budget, so a correct guess
    /// on the final allowed attempt still wins the round.
    pub fn submit_guess(&mut self, text: &str) -> GuessResult {
        if self.phase != GamePhase::Playing || text.trim().is_empty() {
            return GuessResult::Rejected;
        }
        let correct = text::is_correct(text, &self.word.word);
        self.guesses.push(GuessRecord {
            text: text.trim().to_string(),
            correct,
        });
        self.attempts += 1;
        if correct {
            self.phase = GamePhase::Won;
            GuessResult::Won(self.report(true))
        } else if self.attempts == self.config.max_attempts {
            self.phase = GamePhase::Lost;
            GuessResult::Lost(self.report(false))
        } else {
            GuessResult::Miss
        }
    }

    /// Claims the next hint, or `None` when the round is over, the budget is
    /// spent, or another request is still in flight
    pub fn begin_hint(&mut self) -> Option<HintTicket> {
        if self.phase != GamePhase::Playing
            || self.pending_hint.is_some()
            || self.hints_used >= self.config.max_hints
        {
            return None;
        }
        let index = self.hints_used + 1;
        self.pending_hint = Some(index);
        Some(HintTicket {
            word: self.word.word.clone(),
            index,
        })
    }

    /// Records a delivered hint; stale tickets are dropped
    pub fn complete_hint(&mut self, ticket: &HintTicket, hint: impl Into<String>) -> bool {
        if self.pending_hint != Some(ticket.index) || self.word.word != ticket.word {
            return false;
        }
        self.hints_revealed.push(hint.into());
        self.hints_used = ticket.index;
        self.pending_hint = None;
        true
    }

    /// Releases a claimed hint without charging the budget, so a failed
    /// delivery can be retried
    pub fn abort_hint(&mut self, ticket: &HintTicket) {
        if self.pending_hint == Some(ticket.index) && self.word.word == ticket.word {
            self.pending_hint = None;
        }
    }

    /// Client-facing projection, target word masked until the round is over
    pub fn view(&self) -> GameView {
        let over = self.phase.is_terminal();
        GameView {
            category: self.word.category.clone(),
            word_length: self.word.word.graphemes(true).count(),
            difficulty: self.config.difficulty,
            attempts: self.attempts,
            max_attempts: self.config.max_attempts,
            hints_used: self.hints_used,
            max_hints: self.config.max_hints,
            hints: self.hints_revealed.clone(),
            guesses: self.guesses.clone(),
            phase: self.phase,
            word: over.then(|| self.word.word.clone()),
            description: over.then(|| self.word.description.clone()),
        }
    }

    fn report(&self, won: bool) -> GameReport {
        GameReport {
            word: self.word.word.clone(),
            won,
            attempts: self.attempts,
            hints_used: self.hints_used,
            difficulty: self.config.difficulty,
        }
    }
}

/// What a client is allowed to see of a [`Session`]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GameView {
    pub category: String,
    pub word_length: usize,
    pub difficulty: Difficulty,
    pub attempts: u32,
    pub max_attempts: u32,
    pub hints_used: u32,
    pub max_hints: u32,
    pub hints: Vec<String>,
    pub guesses: Vec<GuessRecord>,
    pub phase: GamePhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, WordCatalog};

    fn entry(word: &str) -> WordEntry {
        WordCatalog::builtin().find(word).unwrap().clone()
    }

    fn medium_session(word: &str) -> Session {
        Session::new(entry(word), Difficulty::Medium.config())
    }

    #[test]
    fn win_on_last_attempt_beats_exhaustion() {
        let mut session = medium_session("chocolate");
        for i in 1..=5 {
            assert_eq!(session.submit_guess("girasol"), GuessResult::Miss);
            assert_eq!(session.attempts(), i);
            assert_eq!(session.phase(), GamePhase::Playing);
        }
        match session.submit_guess("chocolate") {
            GuessResult::Won(report) => {
                assert!(report.won);
                assert_eq!(report.attempts, 6);
                assert_eq!(report.word, "chocolate");
                assert_eq!(report.difficulty, Difficulty::Medium);
            }
            other => panic!("expected a win, got {other:?}"),
        }
        assert_eq!(session.phase(), GamePhase::Won);
    }

    #[test]
    fn sixth_miss_loses_the_round() {
        let mut session = medium_session("chocolate");
        for _ in 1..=5 {
            assert_eq!(session.submit_guess("girasol"), GuessResult::Miss);
        }
        match session.submit_guess("guitarra") {
            GuessResult::Lost(report) => {
                assert!(!report.won);
                assert_eq!(report.attempts, 6);
            }
            other => panic!("expected a loss, got {other:?}"),
        }
        assert_eq!(session.phase(), GamePhase::Lost);
    }

    #[test]
    fn guesses_ignore_case_and_accents() {
        let mut session = medium_session("maratón");
        assert!(matches!(session.submit_guess("MARATON"), GuessResult::Won(_)));
    }

    #[test]
    fn blank_guesses_are_rejected_without_charge() {
        let mut session = medium_session("chocolate");
        assert_eq!(session.submit_guess(""), GuessResult::Rejected);
        assert_eq!(session.submit_guess("   "), GuessResult::Rejected);
        assert_eq!(session.attempts(), 0);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn terminal_phase_is_sticky() {
        let mut session = medium_session("chocolate");
        assert!(matches!(session.submit_guess("chocolate"), GuessResult::Won(_)));
        assert_eq!(session.submit_guess("chocolate"), GuessResult::Rejected);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.phase(), GamePhase::Won);
        assert!(session.begin_hint().is_none());
    }

    #[test]
    fn hints_follow_the_authored_sequence() {
        let mut session = medium_session("chocolate");
        let word = entry("chocolate");

        let first = session.begin_hint().unwrap();
        assert_eq!(first.index, 1);
        assert!(session.complete_hint(&first, word.hint(first.index)));
        let second = session.begin_hint().unwrap();
        assert_eq!(second.index, 2);
        assert!(session.complete_hint(&second, word.hint(second.index)));

        // Medium allows two hints
        assert!(session.begin_hint().is_none());
        assert_eq!(session.hints_used(), 2);
        assert_eq!(session.hints_revealed().len(), 2);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn hard_rounds_never_hand_out_hints() {
        let mut session = Session::new(entry("volcan"), Difficulty::Hard.config());
        assert_eq!(session.difficulty().max_hints, 0);
        assert!(session.begin_hint().is_none());
    }

    #[test]
    fn overlapping_hint_requests_are_refused() {
        let mut session = medium_session("chocolate");
        let ticket = session.begin_hint().unwrap();
        assert!(session.hint_pending());
        assert!(session.begin_hint().is_none());
        assert!(session.complete_hint(&ticket, "pista"));
        assert!(!session.hint_pending());
    }

    #[test]
    fn aborted_hint_costs_nothing() {
        let mut session = medium_session("chocolate");
        let ticket = session.begin_hint().unwrap();
        session.abort_hint(&ticket);
        assert_eq!(session.hints_used(), 0);
        assert!(session.hints_revealed().is_empty());

        // the retry claims the same index again
        let retry = session.begin_hint().unwrap();
        assert_eq!(retry.index, 1);
    }

    #[test]
    fn stale_tickets_are_dropped() {
        let mut session = medium_session("chocolate");
        let ticket = session.begin_hint().unwrap();

        let mut replacement = medium_session("guitarra");
        assert!(!replacement.complete_hint(&ticket, "pista"));
        assert_eq!(replacement.hints_used(), 0);
        replacement.abort_hint(&ticket);

        assert!(session.complete_hint(&ticket, "pista"));
    }

    #[test]
    fn view_masks_the_word_until_the_round_ends() {
        let mut session = medium_session("maratón");
        let view = session.view();
        assert_eq!(view.word_length, 7);
        assert_eq!(view.category, "Deporte");
        assert_eq!(view.word, None);
        assert_eq!(view.description, None);

        session.submit_guess("maraton");
        let view = session.view();
        assert_eq!(view.phase, GamePhase::Won);
        assert_eq!(view.word.as_deref(), Some("maratón"));
        assert!(view.description.is_some());
        assert_eq!(view.guesses.len(), 1);
        assert!(view.guesses[0].correct);
    }
}
