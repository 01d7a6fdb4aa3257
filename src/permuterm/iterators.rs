use crate::permuterm::node::ImmutableTrieNode;

/// Lazy preorder walk over a frozen subtree, yielding the dictionary index
/// of every terminal node. Children are visited `a..z` then `$`, so the
/// order is deterministic for a given trie.
pub struct Matches<'a> {
    stack: Vec<&'a ImmutableTrieNode<'a>>,
}

impl<'a> Matches<'a> {
    pub(crate) fn from_subtree(root: &'a ImmutableTrieNode<'a>) -> Self {
        Matches { stack: vec![root] }
    }

    pub(crate) fn empty() -> Self {
        Matches { stack: Vec::new() }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some(node) = self.stack.pop() {
            // Reverse push so the lowest symbol is walked first.
            for child in node.children.iter().rev().flatten() {
                self.stack.push(child);
            }
            if let Some(index) = node.terminal {
                return Some(index);
            }
        }
        None
    }
}
