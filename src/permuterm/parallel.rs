use rayon::prelude::*;

use crate::permuterm::{PermutermIndex, QueryResult};

impl<'a> PermutermIndex<'a> {
    /// Evaluates a batch of query lines across the rayon pool. The frozen
    /// trie has no interior mutability, so workers share it directly.
    /// Results come back in input order.
    pub fn query_many(&self, lines: &[String]) -> Vec<QueryResult<'a>> {
        lines.par_iter().map(|line| self.query(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use crate::dictionary::Dictionary;
    use crate::permuterm::PermutermIndex;

    #[test]
    fn batch_results_match_sequential_evaluation() {
        let mut dict = Dictionary::new();
        for word in ["abbas", "abbey", "crab", "cab", "tab", "xyz"] {
            dict.push(word);
        }
        let arena = Arena::new();
        let (index, _) = PermutermIndex::build(&dict, &arena);

        let queries: Vec<String> = ["ab*", "*ab", "a*b", "*ab*", "xyz", "missing", "*a*b*"]
            .iter()
            .map(|q| q.to_string())
            .collect();

        let parallel = index.query_many(&queries);
        let sequential: Vec<_> = queries.iter().map(|q| index.query(q)).collect();
        assert_eq!(parallel, sequential);
    }
}
