//! Sequence similarity for fuzzy dictionary matching
//!
//! Ratcliff/Obershelp: find the longest common block, recurse on the pieces
//! to its left and right, and score `2 * matched / (len(a) + len(b))`.
//! Lengths are in Unicode scalar values.

/// Similarity ratio in [0, 1]; two empty strings score 1.0
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_chars(&a, &b) as f64 / total as f64
}

/// Total size of the matching blocks between `a` and `b`
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as (i, j, len)
///
/// Among equally long blocks the one starting earliest in `a`, then in `b`, wins.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    // run[j + 1] = length of the common run ending at a[i], b[blo + j]
    let mut prev = vec![0usize; width + 1];
    let mut run = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in 0..width {
            run[j + 1] = if a[i] == b[blo + j] { prev[j] + 1 } else { 0 };
            let k = run[j + 1];
            if k > best.2 {
                best = (i + 1 - k, blo + j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut run);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert!(approx(similarity("पानी", "पानी"), 1.0));
        assert!(approx(similarity("abc", "xyz"), 0.0));
        assert!(approx(similarity("", ""), 1.0));
        assert!(approx(similarity("abc", ""), 0.0));
    }

    #[test]
    fn test_known_ratios() {
        // matching blocks "a" + "cd" → 2 * 3 / 8
        assert!(approx(similarity("abcd", "acdb"), 0.75));
        assert!(approx(similarity("abcdefghij", "abcdefgxyz"), 0.7));
        assert!(approx(similarity("abcdefghij", "abcdefghxy"), 0.8));
    }

    #[test]
    fn test_recurses_on_both_sides() {
        // "x" left of the longest block "bcd", "z" right of it
        assert!(approx(similarity("xbcdz", "xqbcdqz"), 2.0 * 5.0 / 12.0));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // घर vs घरों: 2 shared scalars out of 2 + 4
        assert!(approx(similarity("घर", "घरों"), 4.0 / 6.0));
    }

    #[test]
    fn test_symmetric_for_simple_inputs() {
        let pairs = [("किताब", "कीताब"), ("ᱫᱟᱜ", "ᱫᱟᱜᱮ"), ("kitten", "sitting")];
        for (a, b) in pairs {
            assert!(approx(similarity(a, b), similarity(b, a)), "{} / {}", a, b);
        }
    }
}
