use super::tile::LetterStatus;

pub const EMPTY_CELL: char = ' ';

/// Single source of truth for one round: the typed-letter matrix, the
/// parallel status matrix, the cursor, the target word and the board
/// shape. Rows are attempts, columns are letter positions.
#[derive(Debug)]
pub struct Grid {
    pub rows: Vec<Vec<char>>,
    pub statuses: Vec<Vec<LetterStatus>>,
    pub target: String,
    pub word_len: usize,
    pub max_attempts: usize,
    pub attempt_index: usize,
    pub letter_index: usize,
}

impl Grid {
    pub fn new(word_len: usize, max_attempts: usize) -> Self {
        Grid {
            rows: vec![vec![EMPTY_CELL; word_len]; max_attempts],
            statuses: vec![vec![LetterStatus::Unset; word_len]; max_attempts],
            target: String::new(),
            word_len,
            max_attempts,
            attempt_index: 0,
            letter_index: 0,
        }
    }

    /// Reallocate both matrices to the given shape and reset the cursor.
    /// A no-op when the shape is unchanged, so redundant configuration
    /// pushes do not wipe an in-progress attempt.
    pub fn configure(&mut self, word_len: usize, max_attempts: usize) {
        if word_len == self.word_len && max_attempts == self.max_attempts {
            return;
        }
        self.word_len = word_len;
        self.max_attempts = max_attempts;
        self.rows = vec![vec![EMPTY_CELL; word_len]; max_attempts];
        self.statuses = vec![vec![LetterStatus::Unset; word_len]; max_attempts];
        self.attempt_index = 0;
        self.letter_index = 0;
        self.target.clear();
    }

    /// Apply a settings change mid-round. A different letter count or a
    /// shrunken attempt count cannot be reconciled with typed rows, so the
    /// board is rebuilt; a grown attempt count just appends empty rows.
    /// Returns true when the caller must start a fresh round.
    pub fn reconcile(&mut self, max_attempts: usize, word_len: usize) -> bool {
        if word_len != self.word_len || max_attempts < self.max_attempts {
            self.configure(word_len, max_attempts);
            true
        } else if max_attempts > self.max_attempts {
            log::debug!("extending board to {max_attempts} attempts without reset");
            for _ in self.max_attempts..max_attempts {
                self.rows.push(vec![EMPTY_CELL; self.word_len]);
                self.statuses.push(vec![LetterStatus::Unset; self.word_len]);
            }
            self.max_attempts = max_attempts;
            false
        } else {
            false
        }
    }

    /// Begin a round against `target`. Reuses the allocation when the
    /// shape fits, otherwise resizes the board to the word's length.
    pub fn start_round(&mut self, target: &str) {
        let target = target.to_ascii_uppercase();
        if target.len() != self.word_len {
            self.configure(target.len(), self.max_attempts);
        } else {
            self.clear();
        }
        self.target = target;
    }

    fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            row.fill(EMPTY_CELL);
        }
        for row in self.statuses.iter_mut() {
            row.fill(LetterStatus::Unset);
        }
        self.attempt_index = 0;
        self.letter_index = 0;
    }

    pub fn append_letter(&mut self, ch: char) {
        if self.letter_index < self.word_len {
            self.rows[self.attempt_index][self.letter_index] = ch.to_ascii_uppercase();
            self.letter_index += 1;
        }
    }

    pub fn delete_letter(&mut self) {
        if self.letter_index > 0 {
            self.letter_index -= 1;
            self.rows[self.attempt_index][self.letter_index] = EMPTY_CELL;
        }
    }

    pub fn current_attempt_text(&self) -> String {
        self.rows[self.attempt_index][..self.letter_index]
            .iter()
            .collect()
    }

    pub fn row_fully_typed(&self) -> bool {
        self.letter_index == self.word_len
    }

    pub fn attempts_exhausted(&self) -> bool {
        self.attempt_index == self.max_attempts
    }

    /// Record the evaluated statuses for the current row and advance to
    /// the next attempt. The router guarantees a fully typed row and a
    /// free attempt slot before calling.
    pub fn submit_attempt(&mut self, statuses: Vec<LetterStatus>) {
        debug_assert!(self.row_fully_typed());
        debug_assert!(!self.attempts_exhausted());
        debug_assert_eq!(statuses.len(), self.word_len);
        self.statuses[self.attempt_index] = statuses;
        self.attempt_index += 1;
        self.letter_index = 0;
    }

    /// Statuses of the most recently submitted row, if any.
    pub fn last_submitted_row(&self) -> Option<&[LetterStatus]> {
        self.attempt_index
            .checked_sub(1)
            .map(|i| self.statuses[i].as_slice())
    }
}
