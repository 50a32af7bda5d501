use anyhow::{Result, anyhow};
use std::time::Instant;

use super::evaluate::evaluate;
use super::grid::Grid;
use super::keyboard::KeyboardStatus;
use super::outcome::{Outcome, OutcomeNotifier, resolve};
use super::settings::RoundSettings;
use super::ui;
use super::words::{self, WordBank};

/// A key event after terminal plumbing has been stripped away. The router
/// only ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
    Restart,
    Quit,
    MoreAttempts,
    FewerAttempts,
    MoreLetters,
    FewerLetters,
}

pub struct Game {
    pub grid: Grid,
    pub keyboard: KeyboardStatus,
    pub words: WordBank,
    pub notifier: OutcomeNotifier,
    pub status: Outcome,
    pub online: bool,

    /* control flow flags */
    pub input_enabled: bool,
    pub checking: bool,
    pub show_none_word_error: bool,
    pub err_msg: String,
}

impl Game {
    pub fn new(settings: RoundSettings, online: bool) -> Result<Self> {
        let mut game = Game {
            grid: Grid::new(settings.num_of_letters, settings.num_of_attempts),
            keyboard: KeyboardStatus::new(),
            words: WordBank::load(),
            notifier: OutcomeNotifier::new(),
            status: Outcome::Ongoing,
            online,
            input_enabled: false,
            checking: false,
            show_none_word_error: false,
            err_msg: String::new(),
        };
        game.new_round()?;
        Ok(game)
    }

    pub fn settings(&self) -> RoundSettings {
        RoundSettings {
            num_of_attempts: self.grid.max_attempts,
            num_of_letters: self.grid.word_len,
        }
    }

    /// Start a fresh round: drop any pending outcome notification, clear
    /// the keyboard overlay, pick a new target and re-open input.
    pub fn new_round(&mut self) -> Result<()> {
        self.notifier.cancel();
        self.keyboard.reset();
        let target = self.next_target(self.grid.word_len)?;
        self.grid.start_round(&target);
        self.status = Outcome::Ongoing;
        self.input_enabled = true;
        self.checking = false;
        self.show_none_word_error = false;
        self.err_msg.clear();
        log::info!(
            "new round: {} letters, {} attempts",
            self.grid.word_len,
            self.grid.max_attempts
        );
        Ok(())
    }

    fn next_target(&mut self, len: usize) -> Result<String> {
        if self.online {
            if let Some(word) = words::fetch_remote_word(len) {
                self.words.insert(&word);
                return Ok(word);
            }
            log::warn!("remote word fetch failed, falling back to the embedded bank");
        }
        self.words
            .draw(len)
            .ok_or_else(|| anyhow!("no {len}-letter words in the word bank"))
    }

    fn try_new_round(&mut self) {
        if let Err(e) = self.new_round() {
            log::warn!("could not start a round: {e:#}");
            self.err_msg = format!("{e:#}");
            self.input_enabled = false;
        }
    }

    /// The input state machine. Restart and quit bypass the enable gate;
    /// everything else is ignored while input is disabled, and unknown or
    /// out-of-bounds keys are no-ops.
    pub fn handle_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Quit => {}
            Key::Restart => self.try_new_round(),
            Key::MoreAttempts => self.apply_settings(self.settings().nudge_attempts(1)),
            Key::FewerAttempts => self.apply_settings(self.settings().nudge_attempts(-1)),
            Key::MoreLetters => self.apply_settings(self.settings().nudge_letters(1)),
            Key::FewerLetters => self.apply_settings(self.settings().nudge_letters(-1)),
            _ => {
                if !self.input_enabled {
                    return;
                }
                // Transient conditions clear on the next interaction.
                self.show_none_word_error = false;
                self.err_msg.clear();
                match key {
                    Key::Letter(ch) if ch.is_ascii_alphabetic() => self.grid.append_letter(ch),
                    Key::Backspace => self.grid.delete_letter(),
                    Key::Enter if self.grid.row_fully_typed() && !self.checking => {
                        self.submit_current(now);
                    }
                    _ => {}
                }
            }
        }
    }

    /// Settings pushes reconcile the board; only a destructive reshape
    /// costs the player the round in progress.
    pub fn apply_settings(&mut self, settings: RoundSettings) {
        log::info!(
            "settings: {} attempts, {} letters",
            settings.num_of_attempts,
            settings.num_of_letters
        );
        if self
            .grid
            .reconcile(settings.num_of_attempts, settings.num_of_letters)
        {
            self.try_new_round();
        }
    }

    /// The submit pipeline: validity check, then evaluate, record, fold
    /// the keyboard and resolve the outcome. An invalid word or a failed
    /// oracle call leaves the row editable and the grid untouched.
    fn submit_current(&mut self, now: Instant) {
        self.checking = true;
        let text = self.grid.current_attempt_text();
        let verdict = self.check_word(&text);
        self.checking = false;

        match verdict {
            Err(e) => {
                log::warn!("spell check unavailable: {e:#}");
                self.err_msg = String::from("spell check unavailable, try again");
                return;
            }
            Ok(false) => {
                self.show_none_word_error = true;
                return;
            }
            Ok(true) => {}
        }

        let guess: Vec<char> = text.chars().collect();
        let target: Vec<char> = self.grid.target.chars().collect();
        let statuses = evaluate(&guess, &target);

        for (ch, status) in guess.iter().zip(&statuses) {
            self.keyboard.fold(*ch, *status);
        }
        self.grid.submit_attempt(statuses);

        match resolve(&self.grid) {
            Outcome::Ongoing => {}
            outcome => {
                log::info!("round over: {outcome}");
                self.input_enabled = false;
                self.notifier.schedule(outcome, now);
            }
        }
    }

    fn check_word(&self, text: &str) -> Result<bool> {
        if self.words.is_word(text) {
            return Ok(true);
        }
        if self.online {
            return words::lookup_remote(text);
        }
        Ok(false)
    }

    /// Advance deferred work. Called every pass of the event loop so the
    /// reveal delay elapses even while the player is idle.
    pub fn tick(&mut self, now: Instant) {
        if let Some(outcome) = self.notifier.poll(now) {
            log::debug!("game status: {outcome}");
            self.status = outcome;
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();

        loop {
            self.tick(Instant::now());

            terminal.draw(|frame| {
                self.render_terminal(frame);
            })?;

            match ui::poll_input()? {
                Some(Key::Quit) => break,
                Some(key) => self.handle_key(key, Instant::now()),
                None => {}
            }
        }
        ratatui::restore();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::outcome::REVEAL_DELAY;
    use crate::utils::tile::LetterStatus;

    fn game_with_target(target: &str) -> Game {
        let settings = RoundSettings::clamped(6, target.len());
        let mut game = Game::new(settings, false).expect("game expected");
        game.grid.target = target.to_string();
        game
    }

    fn type_word(game: &mut Game, word: &str, now: Instant) {
        for ch in word.chars() {
            game.handle_key(Key::Letter(ch), now);
        }
    }

    #[test]
    fn winning_round_schedules_and_delivers_status() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "raise", now);
        game.handle_key(Key::Enter, now);

        assert_eq!(game.grid.statuses[0], vec![LetterStatus::Correct; 5]);
        assert!(!game.input_enabled);
        assert_eq!(game.status, Outcome::Ongoing);

        game.tick(now + REVEAL_DELAY / 2);
        assert_eq!(game.status, Outcome::Ongoing);
        game.tick(now + REVEAL_DELAY);
        assert_eq!(game.status, Outcome::Won);
    }

    #[test]
    fn evaluation_and_keyboard_fold_on_submit() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "ARISE", now);
        game.handle_key(Key::Enter, now);

        assert_eq!(
            game.grid.statuses[0],
            vec![
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
            ]
        );
        assert_eq!(game.keyboard.get('A'), LetterStatus::Present);
        assert_eq!(game.keyboard.get('I'), LetterStatus::Correct);
        assert_eq!(game.grid.attempt_index, 1);
        assert_eq!(game.grid.letter_index, 0);
        assert!(game.input_enabled);
    }

    #[test]
    fn unknown_word_raises_transient_flag_without_mutation() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        // Not in the bank; row must stay typed and editable.
        type_word(&mut game, "XQJZK", now);
        game.handle_key(Key::Enter, now);

        assert!(game.show_none_word_error);
        assert_eq!(game.grid.attempt_index, 0);
        assert_eq!(game.grid.current_attempt_text(), "XQJZK");
        assert_eq!(game.grid.statuses[0], vec![LetterStatus::Unset; 5]);

        // Next interaction clears the flag.
        game.handle_key(Key::Backspace, now);
        assert!(!game.show_none_word_error);
        assert_eq!(game.grid.current_attempt_text(), "XQJZ");
    }

    #[test]
    fn enter_on_partial_row_is_noop() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "RAI", now);
        game.handle_key(Key::Enter, now);
        assert_eq!(game.grid.attempt_index, 0);
        assert_eq!(game.grid.statuses[0], vec![LetterStatus::Unset; 5]);
    }

    #[test]
    fn double_enter_submits_once() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "ARISE", now);
        game.handle_key(Key::Enter, now);
        game.handle_key(Key::Enter, now);
        assert_eq!(game.grid.attempt_index, 1);
    }

    #[test]
    fn disabled_input_ignores_keys() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");
        game.input_enabled = false;

        type_word(&mut game, "ARISE", now);
        assert_eq!(game.grid.current_attempt_text(), "");
    }

    #[test]
    fn losing_round_after_exhausting_attempts() {
        let now = Instant::now();
        let settings = RoundSettings::clamped(2, 5);
        let mut game = Game::new(settings, false).expect("game expected");
        game.grid.target = String::from("RAISE");

        type_word(&mut game, "EPOCH", now);
        game.handle_key(Key::Enter, now);
        assert_eq!(game.status, Outcome::Ongoing);
        assert!(game.input_enabled);

        type_word(&mut game, "SLATE", now);
        game.handle_key(Key::Enter, now);
        assert!(!game.input_enabled);

        game.tick(now + REVEAL_DELAY);
        assert_eq!(game.status, Outcome::Lost);
    }

    #[test]
    fn restart_cancels_pending_outcome() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "raise", now);
        game.handle_key(Key::Enter, now);
        game.handle_key(Key::Restart, now);

        game.tick(now + REVEAL_DELAY * 2);
        assert_eq!(game.status, Outcome::Ongoing);
        assert!(game.input_enabled);
        assert_eq!(game.grid.attempt_index, 0);
        assert_eq!(game.keyboard.get('R'), LetterStatus::Unset);
        assert_eq!(game.grid.word_len, 5);
    }

    #[test]
    fn growing_attempts_preserves_round_in_progress() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");
        let target = game.grid.target.clone();

        type_word(&mut game, "ARISE", now);
        game.handle_key(Key::Enter, now);
        game.handle_key(Key::MoreAttempts, now);

        assert_eq!(game.grid.max_attempts, 7);
        assert_eq!(game.grid.attempt_index, 1);
        assert_eq!(game.grid.target, target);
        assert_eq!(game.keyboard.get('I'), LetterStatus::Correct);
    }

    #[test]
    fn changing_letters_restarts_with_new_word() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "ARISE", now);
        game.handle_key(Key::Enter, now);
        game.handle_key(Key::MoreLetters, now);

        assert_eq!(game.grid.word_len, 6);
        assert_eq!(game.grid.target.len(), 6);
        assert_eq!(game.grid.attempt_index, 0);
        assert_eq!(game.keyboard.get('I'), LetterStatus::Unset);
        assert!(game.input_enabled);
    }

    #[test]
    fn letters_beyond_row_capacity_are_dropped() {
        let now = Instant::now();
        let mut game = game_with_target("RAISE");

        type_word(&mut game, "ARISES", now);
        assert_eq!(game.grid.current_attempt_text(), "ARISE");
    }
}
