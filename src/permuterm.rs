pub mod iterators;
pub mod node;
pub mod parallel;
pub mod rotations;
pub mod search;
pub mod trie;
pub mod wildcard;

use std::collections::HashSet;

use typed_arena::Arena;

use crate::alphabet::WILDCARD;
use crate::dictionary::Dictionary;
use crate::permuterm::node::ImmutableTrieNode;
use crate::permuterm::trie::{ImmutableTrie, Trie};

/// Outcome of one classified query line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum QueryResult<'a> {
    /// Exact query: the entry, or `None` when the term is not indexed.
    Exact(Option<&'a str>),
    /// Wildcard query: matching entries in preorder, de-duplicated.
    Matches(Vec<&'a str>),
}

/// The frozen permuterm trie wired to the dictionary it indexes. The trie
/// stores only `u32` indices; this facade resolves them back to entries.
#[derive(Clone, Copy)]
pub struct PermutermIndex<'a> {
    trie: ImmutableTrie<'a>,
    dict: &'a Dictionary,
}

impl<'a> PermutermIndex<'a> {
    /// Indexes every dictionary entry (plain term plus all rotations) and
    /// freezes the result into `arena`. Entries the alphabet rejects keep
    /// their dictionary slot but never reach the trie, the same bargain the
    /// loader's failure counter reports; the number skipped is returned
    /// alongside the index.
    pub fn build(
        dict: &'a Dictionary,
        arena: &'a Arena<ImmutableTrieNode<'a>>,
    ) -> (PermutermIndex<'a>, usize) {
        let build_arena = Arena::new();
        let trie = Trie::new(&build_arena);

        let mut rejected = 0;
        for (index, term) in dict.iter().enumerate() {
            if trie.insert_term(term, index as u32).is_err() {
                rejected += 1;
            }
        }

        (
            PermutermIndex {
                trie: trie.build(arena),
                dict,
            },
            rejected,
        )
    }

    /// Exact lookup of one term.
    pub fn lookup(&self, term: &str) -> Option<&'a str> {
        self.dict.get(self.trie.search(term)?)
    }

    /// Every entry whose trie path starts with `prefix`. This runs against
    /// the shared trie, so a prefix containing `$` probes rotations too.
    pub fn prefixed(&self, prefix: &str) -> impl Iterator<Item = &'a str> + '_ {
        let dict = self.dict;
        self.trie
            .iter_prefixed(prefix)
            .filter_map(move |index| dict.get(index))
    }

    /// Resolves a wildcard pattern to entries. The contains form reaches a
    /// term once per infix occurrence, so repeated indices are dropped
    /// (first preorder hit kept).
    pub fn wildcard(&self, pattern: &str) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.trie
            .resolve_wildcard(pattern)
            .filter(|index| seen.insert(*index))
            .filter_map(|index| self.dict.get(index))
            .collect()
    }

    /// Classifies one query line: any `*` makes it a wildcard pattern,
    /// otherwise it is an exact term.
    pub fn query(&self, line: &str) -> QueryResult<'a> {
        if line.contains(WILDCARD) {
            QueryResult::Matches(self.wildcard(line))
        } else {
            QueryResult::Exact(self.lookup(line))
        }
    }
}
