//! Edits applied to the raw entry text
//!
//! All functions work on the raw text and return the new text; the caller
//! redraws afterwards.

use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

use crate::wheel::entries;

/// Uniformly permute the raw lines (Fisher-Yates). Blank lines are kept.
pub fn shuffle<R: Rng>(raw: &str, rng: &mut R) -> String {
    let mut lines: Vec<&str> = raw.split('\n').collect();
    lines.shuffle(rng);
    lines.join("\n")
}

/// Sort entries alphabetically. Blank lines are dropped and entries trimmed.
pub fn sort(raw: &str) -> String {
    let mut parsed = entries::parse(raw);
    parsed.sort_by(|a, b| locale_cmp(a, b));
    entries::join(&parsed)
}

/// Case-insensitive ordering; among case variants lowercase sorts first
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.to_lowercase();
    let folded_b = b.to_lowercase();
    folded_a.cmp(&folded_b).then_with(|| b.cmp(a))
}

/// Remove exactly one line whose trimmed text equals `winner`.
///
/// `position` is the winner's index among parsed entries. That line is removed
/// when it still holds the winner; otherwise the first matching line is.
/// Returns `None` if no line matches.
pub fn remove_one(raw: &str, winner: &str, position: Option<usize>) -> Option<String> {
    let target = winner.trim();
    let mut lines: Vec<&str> = raw.split('\n').collect();

    let positional = position.and_then(|pos| {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .nth(pos)
            .filter(|(_, line)| line.trim() == target)
            .map(|(i, _)| i)
    });

    let index = positional.or_else(|| lines.iter().position(|line| line.trim() == target))?;
    lines.remove(index);
    Some(lines.join("\n"))
}
