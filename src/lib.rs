//! Permuterm index over a word list: a shared 27-way trie holding every
//! term plus all rotations of `term + '$'`, so exact lookups descend
//! directly and wildcard patterns (`ab*`, `*ab`, `a*b`, `*ab*`) rewrite
//! into plain prefix probes.

pub mod alphabet;
pub mod dictionary;
pub mod permuterm;
