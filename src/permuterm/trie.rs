use thiserror::Error;
use typed_arena::Arena;

use crate::alphabet::symbol_index;
use crate::permuterm::node::{ImmutableTrieNode, TrieNode};
use crate::permuterm::rotations::permuterms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The term contains a character with no slot in the index alphabet.
    /// Nodes already created along the shared prefix stay behind as plain
    /// path segments; nothing is marked terminal.
    #[error("character {0:?} is outside the index alphabet")]
    InvalidCharacter(char),
}

/// Build-phase permuterm trie. All terms and their rotations go into one
/// shared node store; once every term is in, `build` freezes it for the
/// query phase.
pub struct Trie<'a> {
    arena: &'a Arena<TrieNode<'a>>,
    pub(crate) root: &'a TrieNode<'a>,
}

impl<'a> Trie<'a> {
    pub fn new(arena: &'a Arena<TrieNode<'a>>) -> Trie<'a> {
        Trie {
            arena,
            root: arena.alloc(TrieNode::default()),
        }
    }

    /// Inserts one literal string and tags its final node with
    /// `dict_index`. Re-inserting the same string overwrites the tag.
    ///
    /// Validation happens per character during the descent, so an invalid
    /// character aborts the insertion mid-path. That matches prefix-sharing
    /// semantics, not a rollback: the nodes walked so far are legitimate
    /// shared-prefix segments.
    pub fn insert(&self, text: &str, dict_index: u32) -> Result<(), InsertError> {
        let mut node = self.root;
        for c in text.chars() {
            let idx = symbol_index(c).ok_or(InsertError::InvalidCharacter(c))?;
            node = node.child_or_insert(idx, self.arena);
        }
        node.terminal.set(Some(dict_index));
        Ok(())
    }

    /// Inserts a dictionary term the way the index is built: the plain term
    /// plus every rotation of `term + '$'`, all tagged with `dict_index`.
    pub fn insert_term(&self, term: &str, dict_index: u32) -> Result<(), InsertError> {
        self.insert(term, dict_index)?;
        for rotation in permuterms(term) {
            self.insert(&rotation, dict_index)?;
        }
        Ok(())
    }

    /// Number of nodes allocated so far, root included. Shared prefixes
    /// allocate once, so this doubles as the leak-accounting tally: the
    /// arena frees exactly this many nodes when it drops.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Freezes the trie into `arena`. The build-phase nodes can be dropped
    /// afterwards; queries only touch the frozen copy.
    pub fn build<'f>(&self, arena: &'f Arena<ImmutableTrieNode<'f>>) -> ImmutableTrie<'f> {
        ImmutableTrie {
            root: self.root.freeze(arena),
        }
    }
}

/// Frozen query-phase trie. `Copy` and `Sync`: hand it to as many readers
/// as needed once built.
#[derive(Clone, Copy, Debug)]
pub struct ImmutableTrie<'a> {
    pub(crate) root: &'a ImmutableTrieNode<'a>,
}
