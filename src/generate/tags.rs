//! Tag expression handling
//!
//! A tag expression is a semicolon-delimited list of tag names, possibly
//! with duplicates and empty segments (`"a;b;a;;"`). Canonicalization keeps
//! the first occurrence of each tag in the order it appears; it never sorts.

use rand::Rng;

/// Canonicalize a tag expression: drop empty segments, deduplicate keeping
/// first-occurrence order, rejoin with `;`.
///
/// An empty expression yields an empty string.
#[must_use]
pub fn canonical(expression: &str) -> String {
    dedup_join(expression.split(';'))
}

/// Thin a tag expression for random assignment: each segment is
/// independently kept with 50% probability, then the survivors are
/// canonicalized as in [`canonical`].
///
/// May yield an empty string when every segment is thinned away.
pub fn thin<R: Rng>(expression: &str, rng: &mut R) -> String {
    dedup_join(expression.split(';').filter(|_| rng.gen_bool(0.5)))
}

fn dedup_join<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for segment in segments {
        if !segment.is_empty() && !seen.contains(&segment) {
            seen.push(segment);
        }
    }
    seen.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_canonical_removes_duplicates_and_empties() {
        assert_eq!(canonical("a;b;a;;"), "a;b");
    }

    #[test]
    fn test_canonical_preserves_first_occurrence_order() {
        assert_eq!(canonical("zebra;apple;zebra;mango"), "zebra;apple;mango");
    }

    #[test]
    fn test_canonical_empty_expression() {
        assert_eq!(canonical(""), "");
        assert_eq!(canonical(";;;"), "");
    }

    #[test]
    fn test_canonical_single_tag() {
        assert_eq!(canonical("only"), "only");
    }

    #[test]
    fn test_thin_produces_ordered_subset() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let thinned = thin("a;b;c;d", &mut rng);
            if thinned.is_empty() {
                continue;
            }
            let kept: Vec<&str> = thinned.split(';').collect();
            let mut cursor = ["a", "b", "c", "d"].iter();
            for tag in &kept {
                // Each kept tag must appear in the original order
                assert!(cursor.any(|t| t == tag), "unexpected tag {tag}");
            }
            let mut deduped = kept.clone();
            deduped.dedup();
            assert_eq!(kept, deduped);
        }
    }

    #[test]
    fn test_thin_empty_expression_never_produces_tags() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(thin("", &mut rng), "");
        }
    }

    #[test]
    fn test_thin_deduplicates_survivors() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let thinned = thin("x;x;x;x", &mut rng);
            assert!(thinned == "x" || thinned.is_empty());
        }
    }
}
