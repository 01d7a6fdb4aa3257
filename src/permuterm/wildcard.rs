use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::combinator::{all_consuming, map, value};
use nom::multi::many1;
use nom::IResult;

use crate::alphabet::{symbol_index, EOW};
use crate::permuterm::iterators::Matches;
use crate::permuterm::trie::ImmutableTrie;

#[derive(Debug, PartialEq, Clone)]
enum Segment {
    Literal(String),
    Star,
}

fn literal_run(input: &str) -> IResult<&str, Segment> {
    map(
        take_while1(|c: char| symbol_index(c).is_some()),
        |run: &str| Segment::Literal(run.to_string()),
    )(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    alt((value(Segment::Star, tag("*")), literal_run))(input)
}

fn segments(input: &str) -> IResult<&str, Vec<Segment>> {
    all_consuming(many1(segment))(input)
}

/// A wildcard pattern rewritten into a literal prefix probe.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RewrittenQuery {
    /// Single-star pattern `head*tail`, rewritten as `tail$head` so the
    /// wildcard boundary lines up with the end-of-word marker. `*ab` folds
    /// to `ab$`, `ab*` to `$ab`, bare `*` to `$`.
    Rotated(String),
    /// Two-star "contains" pattern: the text strictly between the stars,
    /// probed directly with no marker rotation, since "contains" anchors to
    /// neither end of the term.
    Infix(String),
}

/// Rewrites `pattern` into its prefix form, or `None` for malformed input:
/// characters outside the alphabet-plus-star set, an empty pattern, or a
/// star count of zero or more than two. Malformed patterns resolve to the
/// empty match set rather than an error, keeping the query path total.
pub fn rewrite(pattern: &str) -> Option<RewrittenQuery> {
    let (_, segs) = segments(pattern).ok()?;
    let stars: Vec<usize> = segs
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Segment::Star)
        .map(|(i, _)| i)
        .collect();

    let text_of = |range: std::ops::Range<usize>| {
        segs[range]
            .iter()
            .map(|s| match s {
                Segment::Literal(run) => run.as_str(),
                Segment::Star => "",
            })
            .collect::<String>()
    };

    match stars.as_slice() {
        [at] => {
            let head = text_of(0..*at);
            let tail = text_of(at + 1..segs.len());
            Some(RewrittenQuery::Rotated(format!("{}{}{}", tail, EOW, head)))
        }
        [first, second] => Some(RewrittenQuery::Infix(text_of(first + 1..*second))),
        _ => None,
    }
}

impl<'a> ImmutableTrie<'a> {
    /// Resolves a wildcard pattern against the permuterm trie by rewriting
    /// it into a prefix probe. Matches may repeat an index when the infix
    /// occurs more than once in a term; the index facade de-duplicates.
    pub fn resolve_wildcard(&self, pattern: &str) -> Matches<'a> {
        match rewrite(pattern) {
            Some(RewrittenQuery::Rotated(prefix)) | Some(RewrittenQuery::Infix(prefix)) => {
                self.iter_prefixed(&prefix)
            }
            None => Matches::empty(),
        }
    }
}
