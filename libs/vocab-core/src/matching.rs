//! Answer matching for quiz sessions.
//!
//! Free-text answers are rarely typed exactly; accents, minor typos and
//! optional articles would all fail an equality check. Answers are
//! therefore scored with a sequence-matching similarity ratio and
//! accepted above a tunable threshold. Everything here is pure and
//! deterministic.

/// Default acceptance threshold for [`is_acceptable`].
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Whether `answer` is close enough to `reference` to count as correct.
///
/// Both strings are normalized (trimmed, lowercased) before scoring, so
/// case and surrounding whitespace never affect the outcome.
pub fn is_acceptable(answer: &str, reference: &str, threshold: f64) -> bool {
    similarity_ratio(&normalize(answer), &normalize(reference)) >= threshold
}

/// Whether `answer` equals `reference` exactly after normalization.
///
/// Computed independently of the similarity ratio; callers use it to
/// present a fuzzy accept differently from an exact one.
pub fn is_perfect_match(answer: &str, reference: &str) -> bool {
    normalize(answer) == normalize(reference)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Similarity ratio in `[0.0, 1.0]` between two strings.
///
/// Ratio = 2·M / T, where M is the total length of the matching blocks
/// found by recursively taking the longest matching substring, and T is
/// the sum of both lengths. Two empty strings are identical (1.0); one
/// empty string against a non-empty one scores 0.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = matching_total(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matched as f64 / total as f64
}

/// Total length of all matching blocks within `a[alo..ahi]` / `b[blo..bhi]`:
/// take the longest match, then recurse on the pieces to its left and right.
fn matching_total(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> usize {
    let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
    if k == 0 {
        return 0;
    }
    k + matching_total(a, b, alo, i, blo, j)
        + matching_total(a, b, i + k, ahi, j + k, bhi)
}

/// Longest matching block in `a[alo..ahi]` / `b[blo..bhi]`.
///
/// Returns `(i, j, k)` such that `a[i..i + k] == b[j..j + k]`, with ties
/// broken towards the earliest start in `a`, then in `b`. `k == 0` means
/// no common character.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0usize);

    // lengths[j + 1]: length of the match ending at a[i], b[j]
    // (shifted by one so j = 0 reads a zero instead of underflowing).
    let mut lengths = vec![0usize; b.len() + 1];
    for i in alo..ahi {
        let mut next = vec![0usize; b.len() + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = lengths[j] + 1;
                next[j + 1] = k;
                if k > best_k {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_k = k;
                }
            }
        }
        lengths = next;
    }

    (best_i, best_j, best_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity_ratio("kat", "kat"), 1.0);
        assert!(is_acceptable("kat", "kat", 1.0));
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_string_cases() {
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("", "kat"), 0.0);
        assert!(is_acceptable("", "", 1.0));
        assert!(!is_acceptable("", "nonempty", 0.1));
    }

    #[test]
    fn known_ratio_values() {
        // blocks: "bcd" -> 2 * 3 / 8
        assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
        // blocks: "app" + "e" -> 2 * 4 / 10
        assert_eq!(similarity_ratio("appel", "apple"), 0.8);
    }

    #[test]
    fn threshold_monotonicity() {
        for (a, b) in [("appel", "apple"), ("kat", "katt"), ("huis", "muis")] {
            if is_acceptable(a, b, 0.85) {
                assert!(is_acceptable(a, b, 0.5));
            }
        }
    }

    #[test]
    fn acceptance_normalizes_case_and_whitespace() {
        assert!(is_acceptable("  Kat ", "kat", 1.0));
    }

    #[test]
    fn perfect_match_normalizes_case_and_whitespace() {
        assert!(is_perfect_match("  Kat ", "kat"));
        assert!(!is_perfect_match("katt", "kat"));
    }

    #[test]
    fn fuzzy_accept_is_not_a_perfect_match() {
        // 2 * 3 / 7 over "kat" = 0.857...
        assert!(is_acceptable("katt", "kat", DEFAULT_SIMILARITY_THRESHOLD));
        assert!(!is_perfect_match("katt", "kat"));
    }

    #[test]
    fn typo_below_threshold_is_rejected() {
        assert!(!is_acceptable("appel", "apple", DEFAULT_SIMILARITY_THRESHOLD));
        assert!(is_acceptable("appel", "apple", 0.75));
    }
}
