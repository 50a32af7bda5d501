use std::collections::HashMap;

use super::tile::LetterStatus;

/// Score a submitted row against the target word.
///
/// Two passes with per-letter occurrence budgets. The first pass marks
/// exact matches and spends one unit of the letter's budget; the second
/// marks the remaining positions `Present` while budget is left, `Absent`
/// otherwise. Surplus duplicates therefore go `Absent` in left-to-right
/// order, which is the standard rule for this game family.
///
/// Both slices must have the same length and be uppercased by the caller;
/// anything else is a caller bug, not a runtime condition.
pub fn evaluate(guess: &[char], target: &[char]) -> Vec<LetterStatus> {
    debug_assert_eq!(guess.len(), target.len());

    let mut budget: HashMap<char, i32> = HashMap::new();
    target.iter().for_each(|c| {
        *budget.entry(*c).or_insert(0) += 1;
    });

    let mut statuses = vec![LetterStatus::Unset; guess.len()];

    // First pass: mark correct letters
    for (i, ch) in guess.iter().enumerate() {
        if target[i] == *ch {
            statuses[i] = LetterStatus::Correct;
            if let Some(val) = budget.get_mut(ch) {
                *val -= 1;
            }
        }
    }

    // Second pass: mark present and absent letters
    for (i, ch) in guess.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }

        match budget.get_mut(ch) {
            Some(val) if *val > 0 => {
                statuses[i] = LetterStatus::Present;
                *val -= 1;
            }
            _ => statuses[i] = LetterStatus::Absent,
        }
    }

    statuses
}
