//! Candidate partitioning for a guessed letter
//!
//! Given the current pattern and a letter, every candidate produces a
//! group-pattern: the current pattern with the letter revealed wherever the
//! candidate has it. Candidates sharing a group-pattern form a family. The
//! engine keeps the largest family, breaking ties with the alphabetically
//! first pattern.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Candidates that share a group-pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family<'a> {
    pub pattern: Pattern,
    /// Members in the order they were supplied (alphabetical for the engine)
    pub members: Vec<&'a Word>,
}

impl Family<'_> {
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// How many positions of this family's pattern show `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.pattern.count(letter)
    }
}

/// Group candidates by the pattern they produce for `letter`
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::engine::partition::group_by_pattern;
///
/// let words: Vec<Word> = ["cat", "car", "cow"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let current = Pattern::hidden(3).with_letter('c', &[0]);
///
/// let groups = group_by_pattern(&current, 'a', &words);
/// assert_eq!(groups.len(), 2);
/// ```
pub fn group_by_pattern<'a, I>(
    current: &Pattern,
    letter: char,
    candidates: I,
) -> FxHashMap<Pattern, Vec<&'a Word>>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut groups: FxHashMap<Pattern, Vec<&'a Word>> = FxHashMap::default();

    for candidate in candidates {
        let pattern = current.with_letter(letter, candidate.positions_of(letter));
        groups.entry(pattern).or_default().push(candidate);
    }

    groups
}

/// Largest family first, then alphabetical by pattern
fn family_order(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the winning family: maximum size, alphabetically-first pattern on ties
///
/// Returns `None` only when `groups` is empty. The result does not depend on
/// the hash map's iteration order.
#[must_use]
pub fn select_winner<'a>(groups: FxHashMap<Pattern, Vec<&'a Word>>) -> Option<Family<'a>> {
    groups
        .into_iter()
        .min_by(|(pa, a), (pb, b)| family_order((pa, a.len()), (pb, b.len())))
        .map(|(pattern, members)| Family { pattern, members })
}

/// All families, winner first, then by descending size and pattern
#[must_use]
pub fn ranked_families(groups: FxHashMap<Pattern, Vec<&Word>>) -> Vec<Family<'_>> {
    let mut families: Vec<Family<'_>> = groups
        .into_iter()
        .map(|(pattern, members)| Family { pattern, members })
        .collect();

    families.sort_by(|a, b| family_order((&a.pattern, a.size()), (&b.pattern, b.size())));
    families
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts<'a>(family: &Family<'a>) -> Vec<&'a str> {
        family.members.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn all_candidates_share_first_letter() {
        let candidates = words(&["car", "cat", "cow"]);
        let groups = group_by_pattern(&Pattern::hidden(3), 'c', &candidates);

        assert_eq!(groups.len(), 1);
        let winner = select_winner(groups).unwrap();
        assert_eq!(winner.pattern.to_string(), "c - -");
        assert_eq!(winner.size(), 3);
        assert_eq!(winner.occurrences('c'), 1);
    }

    #[test]
    fn largest_family_wins() {
        let candidates = words(&["car", "cat", "cow"]);
        let current: Pattern = "c - -".parse().unwrap();
        let winner = select_winner(group_by_pattern(&current, 'a', &candidates)).unwrap();

        assert_eq!(winner.pattern.to_string(), "c a -");
        assert_eq!(texts(&winner), vec!["car", "cat"]);
    }

    #[test]
    fn tie_goes_to_alphabetically_first_pattern() {
        // "- - -" (bed) vs "a - -" (ace) vs "- a -" (bat): all size 1
        let candidates = words(&["ace", "bat", "bed"]);
        let winner = select_winner(group_by_pattern(&Pattern::hidden(3), 'a', &candidates)).unwrap();

        assert_eq!(winner.pattern.to_string(), "- - -");
        assert_eq!(texts(&winner), vec!["bed"]);
        assert_eq!(winner.occurrences('a'), 0);
    }

    #[test]
    fn tie_between_two_revealing_families() {
        // "- o -" {dog, hot} vs "o - -" {oak, owl}: equal size, "- o -" sorts first
        let candidates = words(&["dog", "hot", "oak", "owl"]);
        let winner = select_winner(group_by_pattern(&Pattern::hidden(3), 'o', &candidates)).unwrap();

        assert_eq!(winner.pattern.to_string(), "- o -");
        assert_eq!(texts(&winner), vec!["dog", "hot"]);
    }

    #[test]
    fn letter_absent_everywhere_gives_single_family() {
        let candidates = words(&["car", "cat"]);
        let current: Pattern = "c a -".parse().unwrap();
        let groups = group_by_pattern(&current, 'z', &candidates);

        assert_eq!(groups.len(), 1);
        let winner = select_winner(groups).unwrap();
        assert_eq!(winner.pattern, current);
        assert_eq!(winner.size(), 2);
    }

    #[test]
    fn repeated_letters_form_their_own_family() {
        let candidates = words(&["eel", "ewe", "elk", "end"]);
        let families = ranked_families(group_by_pattern(&Pattern::hidden(3), 'e', &candidates));

        let rendered: Vec<(String, usize)> = families
            .iter()
            .map(|f| (f.pattern.to_string(), f.size()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("e - -".to_string(), 2),
                ("e - e".to_string(), 1),
                ("e e -".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_candidates_have_no_winner() {
        let candidates: Vec<Word> = Vec::new();
        let groups = group_by_pattern(&Pattern::hidden(3), 'a', &candidates);
        assert!(groups.is_empty());
        assert!(select_winner(groups).is_none());
    }

    #[test]
    fn family_sizes_sum_to_candidate_count() {
        let candidates = words(&["bat", "bet", "bit", "but", "tab", "tub"]);
        let groups = group_by_pattern(&Pattern::hidden(3), 't', &candidates);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), candidates.len());
    }
}
