/// Board shape, adjustable between and during rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub num_of_attempts: usize,
    pub num_of_letters: usize,
}

pub const MIN_ATTEMPTS: usize = 1;
pub const MAX_ATTEMPTS: usize = 12;
// Bounded by the lengths the embedded word bank covers.
pub const MIN_LETTERS: usize = 4;
pub const MAX_LETTERS: usize = 8;

impl Default for RoundSettings {
    fn default() -> Self {
        RoundSettings {
            num_of_attempts: 6,
            num_of_letters: 5,
        }
    }
}

impl RoundSettings {
    pub fn clamped(num_of_attempts: usize, num_of_letters: usize) -> Self {
        RoundSettings {
            num_of_attempts: num_of_attempts.clamp(MIN_ATTEMPTS, MAX_ATTEMPTS),
            num_of_letters: num_of_letters.clamp(MIN_LETTERS, MAX_LETTERS),
        }
    }

    pub fn nudge_attempts(self, delta: isize) -> Self {
        Self::clamped(
            self.num_of_attempts.saturating_add_signed(delta),
            self.num_of_letters,
        )
    }

    pub fn nudge_letters(self, delta: isize) -> Self {
        Self::clamped(
            self.num_of_attempts,
            self.num_of_letters.saturating_add_signed(delta),
        )
    }
}
