//! Edit-distance helpers shared by the colour and shape-name correctors.

/// Similarity (1 − distance / longer length) a candidate needs before it is
/// offered as a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.4;

/// Levenshtein distance counted in `char`s.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = if ca == cb { 0 } else { 1 };
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }
    row[b.len()]
}

/// First candidate (in iteration order) within `max_distance` edits.
pub fn first_within<'a, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find(|c| levenshtein(input, c) <= max_distance)
}

/// Best-scoring candidate whose similarity reaches [`SUGGESTION_THRESHOLD`].
/// Ties keep the earlier candidate.
pub fn suggest<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let longest = input.chars().count().max(candidate.chars().count());
        if longest == 0 {
            continue;
        }
        let score = 1.0 - levenshtein(input, candidate) as f64 / longest as f64;
        if score >= SUGGESTION_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("circl", "circle"), 1);
        assert_eq!(levenshtein("reactangle", "rectangle"), 1);
        assert_eq!(levenshtein("bleu", "blue"), 2);
    }

    #[test]
    fn test_first_within_keeps_order() {
        let names = ["abcd", "abce", "zzzz"];
        assert_eq!(first_within("abcf", names, 1), Some("abcd"));
        assert_eq!(first_within("qqqq", names, 1), None);
    }

    #[test]
    fn test_suggest_threshold() {
        let names = ["rectangle", "circle", "star"];
        assert_eq!(suggest("circel", names), Some("circle"));
        assert_eq!(suggest("xyzxyzxyzxyz", names), None);
    }
}
