//! Similarity ranking between a mistyped token and candidate names.
//!
//! Scoring is case-insensitive Jaro-Winkler similarity
//! ([`strsim::jaro_winkler`]), which rewards shared characters and common
//! prefixes rather than counting raw edits. That is what makes a
//! one-letter input like `"a"` resolve to `another-flag` (they share a
//! character) while `"k"` resolves to nothing (no candidate contains a
//! `k` anywhere near position zero).

/// Similarity a candidate must *exceed* to be proposed.
///
/// Zero similarity means the candidate shares no in-window character with
/// the input; proposing such a candidate would be a pure guess.
/// Equivalently: the normalized distance `1.0 - similarity` must be
/// strictly below the fixed cutoff of `1.0`.
const SIMILARITY_FLOOR: f64 = 0.0;

/// Selects the candidate most similar to `input`.
///
/// Returns `None` when `input` is empty, when `candidates` is empty, or
/// when no candidate clears [`SIMILARITY_FLOOR`]. Ties are broken by
/// candidate order: the first candidate with the maximal score wins, so
/// caller-side ordering (declared order, canonical name before aliases)
/// is a meaningful contract.
///
/// # Examples
///
/// ```
/// use arg_suggest::best_match;
///
/// let commands = ["config", "info"];
/// assert_eq!(best_match(commands, "conf"), Some("config"));
/// assert_eq!(best_match(commands, "information"), Some("info"));
/// assert_eq!(best_match(commands, ""), None);
/// ```
pub fn best_match<'a, I>(candidates: I, input: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if input.is_empty() {
        return None;
    }
    let input = input.to_lowercase();

    let mut best = None;
    let mut best_score = SIMILARITY_FLOOR;
    for candidate in candidates {
        let score = strsim::jaro_winkler(&candidate.to_lowercase(), &input);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_match() {
        assert_eq!(best_match(["help", "verbose"], ""), None);
    }

    #[test]
    fn test_empty_candidates_yield_no_match() {
        let candidates: [&str; 0] = [];
        assert_eq!(best_match(candidates, "help"), None);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(best_match(["Help"], "hlp"), Some("Help"));
        assert_eq!(best_match(["help"], "HLP"), Some("help"));
    }

    #[test]
    fn test_exact_match_beats_near_match() {
        assert_eq!(best_match(["socket", "s"], "s"), Some("s"));
    }

    #[test]
    fn test_input_sharing_no_characters_yields_no_match() {
        assert_eq!(best_match(["fl", "s", "another-flag"], "k"), None);
    }

    #[test]
    fn test_distance_based_not_semantic() {
        // "not-existing" is unrelated to both candidates; the closer
        // string still wins.
        assert_eq!(best_match(["config", "info"], "not-existing"), Some("info"));
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        // Identical candidates score identically; the first wins.
        assert_eq!(best_match(["same", "same"], "sam"), Some("same"));
        let (first, second) = ("abcd", "abcd".to_string());
        let winner = best_match([first, second.as_str()], "abce").unwrap();
        assert!(std::ptr::eq(winner, first));
    }
}
