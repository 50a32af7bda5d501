use std::fmt;
use std::time::{Duration, Instant};

use super::grid::Grid;
use super::tile::LetterStatus;

/// Time the final row stays on screen before the win/lose status goes out.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::Won => write!(f, "win"),
            Outcome::Lost => write!(f, "lose"),
        }
    }
}

/// Derive win/loss from the grid after a submission. Before the first
/// submission there is no row to judge, so the round is ongoing no matter
/// what the status matrix holds.
pub fn resolve(grid: &Grid) -> Outcome {
    let Some(last) = grid.last_submitted_row() else {
        return Outcome::Ongoing;
    };
    if last.iter().all(|s| *s == LetterStatus::Correct) {
        Outcome::Won
    } else if grid.attempts_exhausted() {
        Outcome::Lost
    } else {
        Outcome::Ongoing
    }
}

/// Deferred, cancellable delivery of a terminal outcome. Owned state
/// instead of a fire-and-forget timer: scheduling arms it, `poll` fires it
/// at most once per round, and a round restart cancels it.
#[derive(Debug, Default)]
pub struct OutcomeNotifier {
    pending: Option<(Outcome, Instant)>,
    delivered: bool,
}

impl OutcomeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, outcome: Outcome, now: Instant) {
        if self.delivered || self.pending.is_some() {
            return;
        }
        self.pending = Some((outcome, now + REVEAL_DELAY));
    }

    /// Take the outcome once its deadline has passed. Later calls within
    /// the same round return `None`.
    pub fn poll(&mut self, now: Instant) -> Option<Outcome> {
        match self.pending {
            Some((outcome, due)) if now >= due => {
                self.pending = None;
                self.delivered = true;
                Some(outcome)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.delivered = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid_with_rows(rows: Vec<Vec<LetterStatus>>, max_attempts: usize) -> Grid {
        let mut grid = Grid::new(5, max_attempts);
        grid.start_round("RAISE");
        for statuses in rows {
            for ch in "ARISE".chars() {
                grid.append_letter(ch);
            }
            grid.submit_attempt(statuses);
        }
        grid
    }

    #[test]
    fn no_submission_is_ongoing() {
        let grid = grid_with_rows(vec![], 6);
        assert_eq!(resolve(&grid), Outcome::Ongoing);
    }

    #[test]
    fn all_correct_row_wins() {
        let grid = grid_with_rows(vec![vec![LetterStatus::Correct; 5]], 6);
        assert_eq!(resolve(&grid), Outcome::Won);
    }

    #[test]
    fn win_on_the_final_attempt() {
        let grid = grid_with_rows(
            vec![vec![LetterStatus::Absent; 5], vec![LetterStatus::Correct; 5]],
            2,
        );
        assert_eq!(resolve(&grid), Outcome::Won);
    }

    #[test]
    fn exhausted_attempts_lose() {
        let grid = grid_with_rows(
            vec![vec![LetterStatus::Absent; 5], vec![LetterStatus::Present; 5]],
            2,
        );
        assert_eq!(resolve(&grid), Outcome::Lost);
    }

    #[test]
    fn partial_progress_is_ongoing() {
        let mut row = vec![LetterStatus::Correct; 5];
        row[4] = LetterStatus::Present;
        let grid = grid_with_rows(vec![row], 6);
        assert_eq!(resolve(&grid), Outcome::Ongoing);
    }

    #[test]
    fn notifier_fires_once_after_the_delay() {
        let mut notifier = OutcomeNotifier::new();
        let now = Instant::now();
        notifier.schedule(Outcome::Won, now);

        assert_eq!(notifier.poll(now), None);
        assert_eq!(notifier.poll(now + REVEAL_DELAY / 2), None);
        assert_eq!(notifier.poll(now + REVEAL_DELAY), Some(Outcome::Won));
        // Idle polls within the same terminal round stay quiet.
        assert_eq!(notifier.poll(now + REVEAL_DELAY * 2), None);
    }

    #[test]
    fn reschedule_after_delivery_is_ignored() {
        let mut notifier = OutcomeNotifier::new();
        let now = Instant::now();
        notifier.schedule(Outcome::Lost, now);
        assert_eq!(notifier.poll(now + REVEAL_DELAY), Some(Outcome::Lost));

        notifier.schedule(Outcome::Won, now);
        assert_eq!(notifier.poll(now + REVEAL_DELAY * 3), None);
    }

    #[test]
    fn cancel_suppresses_pending_notification() {
        let mut notifier = OutcomeNotifier::new();
        let now = Instant::now();
        notifier.schedule(Outcome::Won, now);
        notifier.cancel();
        assert_eq!(notifier.poll(now + REVEAL_DELAY * 2), None);

        // A new round may schedule again.
        notifier.schedule(Outcome::Lost, now);
        assert_eq!(notifier.poll(now + REVEAL_DELAY), Some(Outcome::Lost));
    }
}
