//! Game state machine
//!
//! A [`Game`] is driven by exactly one caller at a time. Every method runs to
//! completion synchronously except [`Game::submit`], which awaits the injected
//! word validator (bounded by [`EngineConfig::validation_timeout`]).

use super::config::EngineConfig;
use super::events::{GameEvent, Listeners, SubscriptionId};
use super::snapshot::{Restored, Snapshot};
use super::view::{Cell, Grid, KEY_ROWS, KeyCap};
use crate::core::{HEIGHT, LetterState, WIDTH, Word, letter_feedback, row_feedback, to_emoji};
use crate::wordlists::WordValidator;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Terminal outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishedState {
    Won,
    Lost,
}

impl fmt::Display for FinishedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// What happened to a submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was not a full row, or the game is over
    Ignored,
    /// The validator rejected the word (or failed / timed out)
    Rejected,
    /// The word was appended to the guesses
    Accepted,
}

/// A single Wordle game
pub struct Game {
    validator: Arc<dyn WordValidator>,
    config: EngineConfig,
    answer: Option<Word>,
    guesses: Vec<Word>,
    current_input: String,
    invalid_submit: bool,
    listeners: Listeners,
}

impl Game {
    /// Create an uninitialised game using the default configuration
    #[must_use]
    pub fn new(validator: Arc<dyn WordValidator>) -> Self {
        Self::with_config(validator, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(validator: Arc<dyn WordValidator>, config: EngineConfig) -> Self {
        Self {
            validator,
            config,
            answer: None,
            guesses: Vec::new(),
            current_input: String::new(),
            invalid_submit: false,
            listeners: Listeners::default(),
        }
    }

    /// Start a fresh round with `answer`, discarding all previous state
    pub fn initialize(&mut self, answer: Word) {
        self.install(Restored {
            answer,
            guesses: Vec::new(),
            current_input: String::new(),
            invalid_submit: false,
        });
    }

    fn install(&mut self, state: Restored) {
        self.answer = Some(state.answer);
        self.guesses = state.guesses;
        self.current_input = state.current_input;
        self.invalid_submit = state.invalid_submit;
        self.emit(GameEvent::Init);
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.answer.is_some()
    }

    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// True iff the last submit failed validation and no edit happened since
    #[must_use]
    pub fn invalid_submit(&self) -> bool {
        self.invalid_submit
    }

    /// Index of the row being typed
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    /// `Won` if the last guess is the answer, `Lost` once every row is used
    #[must_use]
    pub fn finished_state(&self) -> Option<FinishedState> {
        if self.guesses.last().is_some_and(|last| Some(last) == self.answer.as_ref()) {
            Some(FinishedState::Won)
        } else if self.guesses.len() >= HEIGHT {
            Some(FinishedState::Lost)
        } else {
            None
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.finished_state().is_none() && self.current_input.len() == WIDTH
    }

    /// Type a letter into the active row
    ///
    /// A full row keeps its first `WIDTH - 1` letters and takes `letter` in the
    /// last slot. Non-alphabetic input only clears the invalid-word flag.
    pub fn add_letter(&mut self, letter: char) {
        if self.finished_state().is_some() {
            return;
        }

        if !letter.is_ascii_alphabetic() {
            if std::mem::take(&mut self.invalid_submit) {
                self.emit(GameEvent::Change);
            }
            return;
        }

        self.invalid_submit = false;
        self.current_input.truncate(WIDTH - 1);
        self.current_input.push(letter.to_ascii_uppercase());
        trace!(input = %self.current_input, "letter added");
        self.emit(GameEvent::Change);
    }

    pub fn backspace(&mut self) {
        if self.finished_state().is_some() {
            return;
        }

        self.invalid_submit = false;
        self.current_input.pop();
        trace!(input = %self.current_input, "backspace");
        self.emit(GameEvent::Change);
    }

    /// Submit the active row as a guess
    ///
    /// Validator errors and timeouts count as a rejected word.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Ignored;
        }

        let input = self.current_input.clone();
        let verdict = tokio::time::timeout(
            self.config.validation_timeout,
            self.validator.validate_word(&input),
        )
        .await;

        let valid = match verdict {
            Ok(Ok(valid)) => valid,
            Ok(Err(err)) => {
                warn!(word = %input, error = %err, "word validation failed, rejecting guess");
                false
            }
            Err(_) => {
                warn!(
                    word = %input,
                    timeout_ms = self.config.validation_timeout.as_millis() as u64,
                    "word validation timed out, rejecting guess"
                );
                false
            }
        };

        match Word::new(input) {
            Ok(guess) if valid => {
                debug!(guess = %guess, row = self.guesses.len(), "guess accepted");
                self.invalid_submit = false;
                self.guesses.push(guess);
                self.current_input.clear();
                self.emit(GameEvent::Change);
                SubmitOutcome::Accepted
            }
            _ => {
                debug!(input = %self.current_input, "guess rejected");
                self.invalid_submit = true;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Positional feedback for `letter` at `position`
    #[must_use]
    pub fn letter_feedback(&self, letter: char, position: usize) -> LetterState {
        self.feedback_at(Some(letter), position)
    }

    fn feedback_at(&self, letter: Option<char>, position: usize) -> LetterState {
        match &self.answer {
            Some(answer) => letter_feedback(answer, letter, position),
            None => LetterState::Incorrect,
        }
    }

    /// Best-known state of every letter played so far
    ///
    /// Precedence is `Correct` > `CorrectLetter` > `Incorrect`; a letter is
    /// never downgraded by a later guess.
    #[must_use]
    pub fn aggregated_letter_states(&self) -> FxHashMap<char, LetterState> {
        let mut states: FxHashMap<char, LetterState> = FxHashMap::default();

        for guess in &self.guesses {
            for (position, letter) in guess.text().chars().enumerate() {
                let state = self.feedback_at(Some(letter), position);
                states
                    .entry(letter)
                    .and_modify(|best| {
                        if state.rank() > best.rank() {
                            *best = state;
                        }
                    })
                    .or_insert(state);
            }
        }

        states
    }

    /// Keyboard state of a single letter, `None` if it has not been played
    #[must_use]
    pub fn keyboard_letter_state(&self, letter: char) -> Option<LetterState> {
        self.aggregated_letter_states()
            .get(&letter.to_ascii_uppercase())
            .copied()
    }

    /// Board projection: completed rows with feedback, the active row, blanks
    #[must_use]
    pub fn grid(&self) -> Grid {
        let current_row = self.current_row();
        let finished = self.finished_state().is_some();
        let mut grid = [[Cell::BLANK; WIDTH]; HEIGHT];

        for (y, row) in grid.iter_mut().enumerate() {
            let word = match y.cmp(&current_row) {
                std::cmp::Ordering::Less => self.guesses[y].text(),
                std::cmp::Ordering::Equal => self.current_input.as_str(),
                std::cmp::Ordering::Greater => "",
            };

            for (x, cell) in row.iter_mut().enumerate() {
                let letter = word.chars().nth(x);
                let state = if y > current_row || (y == current_row && finished) {
                    LetterState::Unanswered
                } else if y == current_row {
                    LetterState::ActiveRow
                } else {
                    self.feedback_at(letter, x)
                };

                *cell = Cell { letter, state };
            }
        }

        grid
    }

    /// Keyboard projection grouped by physical row
    #[must_use]
    pub fn keyboard(&self) -> Vec<Vec<KeyCap>> {
        let states = self.aggregated_letter_states();

        KEY_ROWS
            .iter()
            .map(|row| {
                row.chars()
                    .map(|letter| KeyCap {
                        letter,
                        state: states.get(&letter).copied(),
                    })
                    .collect()
            })
            .collect()
    }

    /// Emoji summary of a finished game, e.g. "Wordle 3/6" followed by rows
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let finished = self.finished_state()?;
        let answer = self.answer.as_ref()?;

        let score = match finished {
            FinishedState::Won => self.guesses.len().to_string(),
            FinishedState::Lost => "X".to_string(),
        };

        let mut text = format!("Wordle {score}/{HEIGHT}\n");
        for guess in &self.guesses {
            text.push('\n');
            text.push_str(&to_emoji(&row_feedback(answer, guess)));
        }

        Some(text)
    }

    /// Plain record of the persistent state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            answer: self
                .answer
                .as_ref()
                .map(|w| w.text().to_string())
                .unwrap_or_default(),
            guesses: self.guesses.iter().map(|g| g.text().to_string()).collect(),
            current_input: self.current_input.clone(),
            invalid_submit: self.invalid_submit,
        }
    }

    /// Serialize the persistent state to an opaque string
    #[must_use]
    pub fn encode(&self) -> String {
        self.snapshot().to_json()
    }

    /// Replace the state with a previously encoded snapshot
    ///
    /// Returns `false` and leaves the game untouched if the blob cannot be
    /// parsed or breaks a board invariant.
    pub fn decode(&mut self, blob: &str) -> bool {
        match Snapshot::parse(blob).and_then(Snapshot::validate) {
            Ok(state) => {
                self.install(state);
                true
            }
            Err(err) => {
                warn!(error = %err, "discarding unusable snapshot");
                false
            }
        }
    }

    /// Register a callback fired after every state-affecting operation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(GameEvent, &Game) + Send + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Remove a callback; returns `false` if it was already removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.listeners.is_empty() {
            return;
        }

        // Listeners get a shared view of the game, so detach them while dispatching
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.emit(event, self);
        self.listeners = listeners;
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("answer", &self.answer.as_ref().map(Word::text))
            .field("guesses", &self.guesses.len())
            .field("current_input", &self.current_input)
            .field("invalid_submit", &self.invalid_submit)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{FnValidator, ValidationError, WordBank};
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Mutex;
    use std::time::Duration;

    fn accept_all() -> Arc<dyn WordValidator> {
        Arc::new(FnValidator(|_: &str| true))
    }

    fn game_with_answer(answer: &str) -> Game {
        let mut game = Game::new(accept_all());
        game.initialize(Word::new(answer).unwrap());
        game
    }

    fn type_word(game: &mut Game, word: &str) {
        for letter in word.chars() {
            game.add_letter(letter);
        }
    }

    async fn play(game: &mut Game, word: &str) -> SubmitOutcome {
        type_word(game, word);
        game.submit().await
    }

    struct SlowValidator;

    #[async_trait]
    impl WordValidator for SlowValidator {
        async fn validate_word(&self, _word: &str) -> Result<bool, ValidationError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(true)
        }
    }

    struct BrokenValidator;

    #[async_trait]
    impl WordValidator for BrokenValidator {
        async fn validate_word(&self, _word: &str) -> Result<bool, ValidationError> {
            Err(ValidationError::Unavailable("backend down".to_string()))
        }
    }

    #[test]
    fn new_game_is_uninitialized() {
        let game = Game::new(accept_all());
        assert!(!game.is_initialized());
        assert_eq!(game.finished_state(), None);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.letter_feedback('A', 0), LetterState::Incorrect);
    }

    #[test]
    fn initialize_resets_state() {
        let mut game = game_with_answer("crane");
        type_word(&mut game, "abc");
        game.initialize(Word::new("slate").unwrap());

        assert!(game.is_initialized());
        assert_eq!(game.answer().map(Word::text), Some("SLATE"));
        assert_eq!(game.current_input(), "");
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn add_letter_overflow_replaces_last_slot() {
        let mut game = game_with_answer("crane");
        for _ in 0..7 {
            game.add_letter('A');
        }
        assert_eq!(game.current_input(), "AAAAA");

        let mut game = game_with_answer("crane");
        type_word(&mut game, "abcdefg");
        assert_eq!(game.current_input(), "ABCDG");
    }

    #[test]
    fn add_letter_uppercases_and_ignores_symbols() {
        let mut game = game_with_answer("crane");
        game.add_letter('c');
        game.add_letter('1');
        game.add_letter(' ');
        game.add_letter('é');
        assert_eq!(game.current_input(), "C");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut game = game_with_answer("crane");
        game.backspace();
        assert_eq!(game.current_input(), "");

        type_word(&mut game, "cra");
        game.backspace();
        assert_eq!(game.current_input(), "CR");
    }

    #[test]
    fn input_length_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = game_with_answer("crane");

        for _ in 0..2000 {
            if rng.random_bool(0.7) {
                game.add_letter(char::from(rng.random_range(b'A'..=b'Z')));
            } else {
                game.backspace();
            }
            assert!(game.current_input().len() <= WIDTH);
        }
    }

    #[tokio::test]
    async fn submit_short_input_is_ignored() {
        let mut game = Game::new(Arc::new(FnValidator(|_: &str| false)));
        game.initialize(Word::new("crane").unwrap());

        type_word(&mut game, "slate");
        assert_eq!(game.submit().await, SubmitOutcome::Rejected);
        assert!(game.invalid_submit());

        // Backspace clears the flag and leaves a short row
        game.backspace();
        assert!(!game.invalid_submit());
        assert_eq!(game.submit().await, SubmitOutcome::Ignored);
        assert!(!game.invalid_submit());
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_input(), "SLAT");
    }

    #[tokio::test]
    async fn submit_short_input_keeps_invalid_flag() {
        let mut game = Game::new(accept_all());
        assert!(game.decode(
            r#"{"answer":"CRANE","guesses":[],"currentInput":"SL","invalidSubmit":true}"#
        ));

        assert_eq!(game.submit().await, SubmitOutcome::Ignored);
        assert!(game.invalid_submit());
        assert!(game.guesses().is_empty());
    }

    #[tokio::test]
    async fn rejected_word_sets_invalid_flag_until_edit() {
        let bank = Arc::new(WordBank::embedded());
        let mut game = Game::new(bank);
        game.initialize(Word::new("crane").unwrap());

        assert_eq!(play(&mut game, "qqqqq").await, SubmitOutcome::Rejected);
        assert!(game.invalid_submit());
        assert_eq!(game.current_input(), "QQQQQ");
        assert!(game.guesses().is_empty());

        game.add_letter('Z');
        assert!(!game.invalid_submit());
        assert_eq!(game.current_input(), "QQQQZ");
    }

    #[tokio::test]
    async fn crane_scenario_won() {
        let mut game = game_with_answer("crane");

        assert_eq!(play(&mut game, "slate").await, SubmitOutcome::Accepted);
        assert_eq!(game.current_input(), "");
        let expected = [
            LetterState::Incorrect,
            LetterState::Incorrect,
            LetterState::Correct,
            LetterState::Incorrect,
            LetterState::Correct,
        ];
        for (x, letter) in "SLATE".chars().enumerate() {
            assert_eq!(game.letter_feedback(letter, x), expected[x]);
        }
        assert_eq!(game.finished_state(), None);

        assert_eq!(play(&mut game, "crane").await, SubmitOutcome::Accepted);
        assert_eq!(game.finished_state(), Some(FinishedState::Won));
        assert!(game.grid()[1].iter().all(|c| c.state == LetterState::Correct));
    }

    #[tokio::test]
    async fn six_misses_lose() {
        let mut game = game_with_answer("crane");

        for word in ["slate", "pious", "blunt", "ghost", "fight", "dumpy"] {
            assert_eq!(game.finished_state(), None);
            assert_eq!(play(&mut game, word).await, SubmitOutcome::Accepted);
        }

        assert_eq!(game.finished_state(), Some(FinishedState::Lost));
        assert_eq!(game.current_row(), HEIGHT);
    }

    #[tokio::test]
    async fn finished_game_ignores_mutations() {
        let mut game = game_with_answer("crane");
        play(&mut game, "crane").await;

        let before = game.encode();
        game.add_letter('A');
        game.backspace();
        assert_eq!(game.submit().await, SubmitOutcome::Ignored);
        assert_eq!(game.encode(), before);
        assert!(!game.can_submit());
    }

    #[tokio::test]
    async fn win_on_last_row_is_won() {
        let mut game = game_with_answer("crane");
        for word in ["slate", "pious", "blunt", "ghost", "fight", "crane"] {
            play(&mut game, word).await;
        }
        assert_eq!(game.finished_state(), Some(FinishedState::Won));
    }

    #[tokio::test]
    async fn validator_error_rejects_guess() {
        let mut game = Game::new(Arc::new(BrokenValidator));
        game.initialize(Word::new("crane").unwrap());

        assert_eq!(play(&mut game, "slate").await, SubmitOutcome::Rejected);
        assert!(game.invalid_submit());
        assert!(game.guesses().is_empty());
    }

    #[tokio::test]
    async fn validator_timeout_rejects_guess() {
        let config = EngineConfig::default().with_validation_timeout(Duration::from_millis(20));
        let mut game = Game::with_config(Arc::new(SlowValidator), config);
        game.initialize(Word::new("crane").unwrap());

        assert_eq!(play(&mut game, "slate").await, SubmitOutcome::Rejected);
        assert!(game.invalid_submit());
        assert_eq!(game.current_input(), "SLATE");
    }

    #[tokio::test]
    async fn aggregated_states_never_downgrade() {
        let mut game = game_with_answer("crane");
        play(&mut game, "arise").await; // A yellow, R green, E green
        play(&mut game, "slate").await; // A green
        play(&mut game, "about").await; // A yellow again

        let states = game.aggregated_letter_states();
        assert_eq!(states.get(&'A'), Some(&LetterState::Correct));
        assert_eq!(states.get(&'R'), Some(&LetterState::Correct));
        assert_eq!(states.get(&'B'), Some(&LetterState::Incorrect));
        assert_eq!(states.get(&'E'), Some(&LetterState::Correct));
        assert_eq!(states.get(&'S'), Some(&LetterState::Incorrect));
        assert_eq!(states.get(&'Z'), None);
    }

    #[tokio::test]
    async fn aggregated_states_keep_correct_over_later_yellow() {
        let mut game = game_with_answer("crane");
        play(&mut game, "spoke").await; // E green at the end
        play(&mut game, "enemy").await; // E yellow at the start

        assert_eq!(
            game.aggregated_letter_states().get(&'E'),
            Some(&LetterState::Correct)
        );
        assert_eq!(game.keyboard_letter_state('e'), Some(LetterState::Correct));
        assert_eq!(game.keyboard_letter_state('N'), Some(LetterState::CorrectLetter));
        assert_eq!(game.keyboard_letter_state('Q'), None);
    }

    #[tokio::test]
    async fn grid_projection_rows() {
        let mut game = game_with_answer("crane");
        play(&mut game, "slate").await;
        type_word(&mut game, "cr");

        let grid = game.grid();

        // Completed row: positional feedback
        assert_eq!(grid[0][0], Cell { letter: Some('S'), state: LetterState::Incorrect });
        assert_eq!(grid[0][2], Cell { letter: Some('A'), state: LetterState::Correct });
        assert_eq!(grid[0][4], Cell { letter: Some('E'), state: LetterState::Correct });

        // Active row
        assert_eq!(grid[1][0], Cell { letter: Some('C'), state: LetterState::ActiveRow });
        assert_eq!(grid[1][2], Cell { letter: None, state: LetterState::ActiveRow });

        // Later rows
        assert!(grid[2..].iter().flatten().all(|c| *c == Cell::BLANK));
    }

    #[tokio::test]
    async fn grid_row_feedback_is_positional_per_row() {
        let mut game = game_with_answer("crane");
        play(&mut game, "about").await; // A yellow here
        play(&mut game, "crane").await;

        let grid = game.grid();
        assert_eq!(grid[0][0].state, LetterState::CorrectLetter);
        assert_eq!(grid[1][2].state, LetterState::Correct);

        // Finished: the next row is not active
        assert!(grid[2].iter().all(|c| c.state == LetterState::Unanswered));
    }

    #[test]
    fn keyboard_projection_layout() {
        let game = game_with_answer("crane");
        let keyboard = game.keyboard();

        let lengths: Vec<usize> = keyboard.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![10, 9, 7]);
        assert_eq!(keyboard[0][0].letter, 'Q');
        assert!(keyboard.iter().flatten().all(|k| k.state.is_none()));
    }

    #[tokio::test]
    async fn keyboard_projection_states() {
        let mut game = game_with_answer("crane");
        play(&mut game, "slate").await;

        let keys: FxHashMap<char, Option<LetterState>> = game
            .keyboard()
            .into_iter()
            .flatten()
            .map(|k| (k.letter, k.state))
            .collect();

        assert_eq!(keys[&'E'], Some(LetterState::Correct));
        assert_eq!(keys[&'A'], Some(LetterState::Correct));
        assert_eq!(keys[&'S'], Some(LetterState::Incorrect));
        assert_eq!(keys[&'C'], None);
    }

    #[tokio::test]
    async fn encode_decode_round_trip() {
        let mut game = Game::new(Arc::new(FnValidator(|w: &str| w != "QQQQQ")));
        game.initialize(Word::new("crane").unwrap());
        play(&mut game, "slate").await;
        play(&mut game, "qqqqq").await;

        let blob = game.encode();
        let mut restored = Game::new(accept_all());
        assert!(restored.decode(&blob));

        assert_eq!(restored.answer().map(Word::text), Some("CRANE"));
        assert_eq!(restored.guesses(), game.guesses());
        assert_eq!(restored.current_input(), "QQQQQ");
        assert!(restored.invalid_submit());
        assert_eq!(restored.encode(), blob);
    }

    #[test]
    fn decode_garbage_leaves_state_untouched() {
        let mut game = game_with_answer("crane");
        type_word(&mut game, "ab");
        let before = game.encode();

        for blob in [
            "",
            "{",
            "null",
            r#"{"answer":"CRANE"}"#,
            r#"{"answer":"CRANE","guesses":{}}"#,
            r#"{"answer":"CRANES","guesses":[]}"#,
            r#"{"answer":"CRANE","guesses":[],"currentInput":"TOOLONG"}"#,
        ] {
            assert!(!game.decode(blob), "decoded {blob:?}");
            assert_eq!(game.encode(), before);
        }
    }

    #[test]
    fn decode_marks_initialized() {
        let mut game = Game::new(accept_all());
        assert!(game.decode(r#"{"answer":"CRANE","guesses":["SLATE"]}"#));
        assert!(game.is_initialized());
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn decode_finished_snapshot() {
        let mut game = Game::new(accept_all());
        assert!(game.decode(r#"{"answer":"CRANE","guesses":["SLATE","CRANE"]}"#));
        assert_eq!(game.finished_state(), Some(FinishedState::Won));
    }

    #[test]
    fn uninitialized_snapshot_does_not_decode() {
        let blob = Game::new(accept_all()).encode();
        assert!(!Game::new(accept_all()).decode(&blob));
    }

    #[tokio::test]
    async fn listeners_receive_events_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut game = Game::new(accept_all());

        let first = Arc::clone(&seen);
        game.subscribe(move |event, _| first.lock().unwrap().push(("first", event)));
        let second = Arc::clone(&seen);
        game.subscribe(move |event, _| second.lock().unwrap().push(("second", event)));

        game.initialize(Word::new("crane").unwrap());
        game.add_letter('A');

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("first", GameEvent::Init),
                ("second", GameEvent::Init),
                ("first", GameEvent::Change),
                ("second", GameEvent::Change),
            ]
        );
    }

    #[tokio::test]
    async fn listeners_see_updated_state() {
        let inputs = Arc::new(Mutex::new(Vec::new()));
        let mut game = game_with_answer("crane");

        let sink = Arc::clone(&inputs);
        game.subscribe(move |_, game| sink.lock().unwrap().push(game.encode()));

        play(&mut game, "slate").await;

        let inputs = inputs.lock().unwrap();
        // Five letters plus the accepted submit
        assert_eq!(inputs.len(), 6);
        assert!(inputs[5].contains(r#""guesses":["SLATE"]"#));
    }

    #[tokio::test]
    async fn rejected_submit_does_not_notify() {
        let count = Arc::new(Mutex::new(0));
        let mut game = Game::new(Arc::new(FnValidator(|_: &str| false)));
        game.initialize(Word::new("crane").unwrap());
        type_word(&mut game, "slate");

        let counter = Arc::clone(&count);
        game.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        game.submit().await;
        assert!(game.invalid_submit());
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn non_letter_key_clears_invalid_flag_only() {
        let count = Arc::new(Mutex::new(0));
        let mut game = Game::new(Arc::new(FnValidator(|_: &str| false)));
        game.initialize(Word::new("crane").unwrap());
        type_word(&mut game, "slate");
        game.submit().await;

        let counter = Arc::clone(&count);
        game.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        game.add_letter('#');
        assert!(!game.invalid_submit());
        assert_eq!(game.current_input(), "SLATE");
        assert_eq!(*count.lock().unwrap(), 1);

        // Nothing left to clear
        game.add_letter('#');
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Arc::new(Mutex::new(0));
        let mut game = game_with_answer("crane");

        let counter = Arc::clone(&count);
        let id = game.subscribe(move |_, _| *counter.lock().unwrap() += 1);
        game.add_letter('A');
        assert!(game.unsubscribe(id));
        game.add_letter('B');

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(!game.unsubscribe(id));
    }

    #[test]
    fn decode_notifies_init() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut game = Game::new(accept_all());
        let sink = Arc::clone(&events);
        game.subscribe(move |event, _| sink.lock().unwrap().push(event));

        assert!(!game.decode("garbage"));
        assert!(game.decode(r#"{"answer":"CRANE","guesses":[]}"#));

        assert_eq!(*events.lock().unwrap(), vec![GameEvent::Init]);
    }

    #[tokio::test]
    async fn share_text_for_finished_games() {
        let mut game = game_with_answer("crane");
        assert_eq!(game.share_text(), None);

        play(&mut game, "slate").await;
        play(&mut game, "crane").await;

        assert_eq!(
            game.share_text().unwrap(),
            "Wordle 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[tokio::test]
    async fn share_text_marks_misplaced_letters() {
        let mut game = game_with_answer("crane");
        play(&mut game, "react").await;
        play(&mut game, "crane").await;

        assert_eq!(
            game.share_text().unwrap(),
            "Wordle 2/6\n\n🟨🟨🟩🟨⬜\n🟩🟩🟩🟩🟩"
        );
    }

    #[tokio::test]
    async fn share_text_lost_uses_x() {
        let mut game = game_with_answer("crane");
        for word in ["slate", "pious", "blunt", "ghost", "fight", "dumpy"] {
            play(&mut game, word).await;
        }
        assert!(game.share_text().unwrap().starts_with("Wordle X/6\n"));
    }

    #[test]
    fn finished_state_display() {
        assert_eq!(FinishedState::Won.to_string(), "won");
        assert_eq!(FinishedState::Lost.to_string(), "lost");
    }
}
