use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::{symbol_at, SYMBOLS};

/// Build-phase trie node. Children are arena references behind `Cell`s so
/// insertion can run through `&self`, the way the builder threads one shared
/// borrow of the arena.
#[derive(Default)]
pub struct TrieNode<'a> {
    pub(crate) children: [Cell<Option<&'a TrieNode<'a>>>; SYMBOLS],
    /// Dictionary index of the exact string ending here. `None` for pure
    /// path segments. Written last-wins on duplicate insertion.
    pub(crate) terminal: Cell<Option<u32>>,
}

impl<'a> TrieNode<'a> {
    pub(crate) fn child(&self, idx: usize) -> Option<&'a TrieNode<'a>> {
        self.children[idx].get()
    }

    pub(crate) fn child_or_insert(
        &self,
        idx: usize,
        arena: &'a Arena<TrieNode<'a>>,
    ) -> &'a TrieNode<'a> {
        match self.children[idx].get() {
            Some(child) => child,
            None => {
                let child = arena.alloc(TrieNode::default());
                self.children[idx].set(Some(child));
                child
            }
        }
    }

    /// Copies this subtree into `arena` as frozen nodes.
    pub(crate) fn freeze<'f>(
        &self,
        arena: &'f Arena<ImmutableTrieNode<'f>>,
    ) -> &'f ImmutableTrieNode<'f> {
        let mut children: [Option<&'f ImmutableTrieNode<'f>>; SYMBOLS] = [None; SYMBOLS];
        for (idx, slot) in self.children.iter().enumerate() {
            if let Some(child) = slot.get() {
                children[idx] = Some(child.freeze(arena));
            }
        }
        arena.alloc(ImmutableTrieNode {
            children,
            terminal: self.terminal.get(),
        })
    }
}

/// Frozen query-phase node. No interior mutability, so a built trie is
/// `Sync` and can be probed from rayon workers.
pub struct ImmutableTrieNode<'a> {
    pub(crate) children: [Option<&'a ImmutableTrieNode<'a>>; SYMBOLS],
    pub(crate) terminal: Option<u32>,
}

impl<'a> ImmutableTrieNode<'a> {
    pub(crate) fn child(&self, idx: usize) -> Option<&'a ImmutableTrieNode<'a>> {
        self.children[idx]
    }
}

impl Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal.get())
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.get().is_some())
                    .map(|(idx, _)| symbol_at(idx))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Debug for ImmutableTrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutableTrieNode")
            .field("terminal", &self.terminal)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_some())
                    .map(|(idx, _)| symbol_at(idx))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::symbol_index;

    #[test]
    fn child_or_insert_reuses_existing_nodes() {
        let arena = Arena::new();
        let root = TrieNode::default();
        let idx = symbol_index('a').unwrap();

        let first = root.child_or_insert(idx, &arena) as *const _;
        let second = root.child_or_insert(idx, &arena) as *const _;
        assert_eq!(first, second);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn freeze_preserves_shape_and_terminals() {
        let arena = Arena::new();
        let root = TrieNode::default();
        let a = symbol_index('a').unwrap();
        let b = symbol_index('b').unwrap();

        root.child_or_insert(a, &arena)
            .child_or_insert(b, &arena)
            .terminal
            .set(Some(7));

        let frozen_arena = Arena::new();
        let frozen = root.freeze(&frozen_arena);

        let node = frozen.child(a).unwrap().child(b).unwrap();
        assert_eq!(node.terminal, Some(7));
        assert!(frozen.child(b).is_none());
        assert_eq!(frozen_arena.len(), 3);
    }
}
