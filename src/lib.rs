// Library interface for wordle_unlimited
// This allows integration tests to access the engine modules

pub mod utils;

pub use utils::evaluate::evaluate;
pub use utils::game::{Game, Key};
pub use utils::grid::Grid;
pub use utils::keyboard::KeyboardStatus;
pub use utils::outcome::{Outcome, OutcomeNotifier, REVEAL_DELAY, resolve};
pub use utils::settings::RoundSettings;
pub use utils::tile::LetterStatus;
pub use utils::words::WordBank;
