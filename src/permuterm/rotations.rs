use crate::alphabet::EOW;

/// All left-rotations of `term + '$'`, rotation 0 first.
///
/// A term of length `n` yields exactly `n + 1` rotations, each of length
/// `n + 1`. Rotating so the marker lands anywhere turns every wildcard
/// position into a literal prefix of some rotation.
pub fn permuterms(term: &str) -> Rotations {
    let mut base: Vec<char> = term.chars().collect();
    base.push(EOW);
    Rotations { base, next: 0 }
}

pub struct Rotations {
    base: Vec<char>,
    next: usize,
}

impl Iterator for Rotations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.base.len() {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some(
            self.base[k..]
                .iter()
                .chain(self.base[..k].iter())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.base.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rotations {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rotations_of_abc() {
        let got: Vec<String> = permuterms("abc").collect();
        assert_eq!(got, vec!["abc$", "bc$a", "c$ab", "$abc"]);
    }

    #[test]
    fn count_and_length_are_term_length_plus_one() {
        for term in ["a", "ab", "abbas", "xyzzy"] {
            let rotations: Vec<String> = permuterms(term).collect();
            assert_eq!(rotations.len(), term.len() + 1);
            for r in &rotations {
                assert_eq!(r.len(), term.len() + 1);
            }
        }
    }

    #[test]
    fn rotations_are_pairwise_distinct_for_aperiodic_terms() {
        // The marker breaks most symmetries, but a term like "aa" still
        // yields distinct rotations because '$' occupies a different slot
        // in each one.
        for term in ["abc", "aa", "abab"] {
            let rotations: HashSet<String> = permuterms(term).collect();
            assert_eq!(rotations.len(), term.len() + 1);
        }
    }

    #[test]
    fn each_rotation_rotates_back_to_base() {
        let term = "abbey";
        let base = format!("{}{}", term, EOW);
        for (k, rotation) in permuterms(term).enumerate() {
            let n = rotation.len();
            let back: String = rotation
                .chars()
                .cycle()
                .skip(n - k)
                .take(n)
                .collect();
            assert_eq!(back, base);
        }
    }

    #[test]
    fn empty_term_yields_the_bare_marker() {
        let got: Vec<String> = permuterms("").collect();
        assert_eq!(got, vec!["$"]);
    }

    #[test]
    fn generator_reports_exact_size() {
        let mut it = permuterms("abc");
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
    }
}
