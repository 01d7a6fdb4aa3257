use crate::alphabet::symbol_index;
use crate::permuterm::iterators::Matches;
use crate::permuterm::node::ImmutableTrieNode;
use crate::permuterm::trie::ImmutableTrie;

impl<'a> ImmutableTrie<'a> {
    /// Pure descent through `text`, one child per character. `None` as soon
    /// as a child is missing or a character has no alphabet slot.
    fn descend(&self, text: &str) -> Option<&'a ImmutableTrieNode<'a>> {
        let mut node = self.root;
        for c in text.chars() {
            node = node.child(symbol_index(c)?)?;
        }
        Some(node)
    }

    /// Exact lookup. `Some(0)` is a real hit; absence is `None`, never a
    /// sentinel.
    pub fn search(&self, text: &str) -> Option<u32> {
        self.descend(text)?.terminal
    }

    /// Everything stored below the node reached by `prefix`, in preorder.
    /// A dead-end or invalid prefix yields the empty sequence.
    pub fn iter_prefixed(&self, prefix: &str) -> Matches<'a> {
        match self.descend(prefix) {
            Some(node) => Matches::from_subtree(node),
            None => Matches::empty(),
        }
    }
}
