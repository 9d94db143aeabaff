//! # Bracket-Parse Tokenizers

use std::borrow::Cow;

/// Flatten a bracketed parse into its tokens.
///
/// Parentheses are stripped, the remainder is split on spaces,
/// and empty tokens are dropped.
///
/// ```rust
/// use nlistream::records::tokenize;
///
/// assert_eq!(tokenize("( ( a b ) ( c d ) )"), vec!["a", "b", "c", "d"]);
/// ```
pub fn tokenize(s: &str) -> Vec<Cow<'_, str>> {
    s.split(' ')
        .map(|piece| {
            if piece.contains(['(', ')']) {
                Cow::Owned(piece.replace(['(', ')'], ""))
            } else {
                Cow::Borrowed(piece)
            }
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Extract the POS tag of every leaf of a full constituency parse.
///
/// A leaf is a bracket group closed before another opens;
/// its tag is the group's first space-separated token.
///
/// ```rust
/// use nlistream::records::parse_pos;
///
/// assert_eq!(parse_pos("(NP (DT a) (NN dog))"), vec!["DT", "NN"]);
/// ```
pub fn parse_pos(s: &str) -> Vec<&str> {
    s.split('(')
        .filter(|group| group.contains(')'))
        .map(|leaf| {
            let leaf = leaf.trim_end_matches(' ').trim_end_matches(')');
            leaf.split(' ').next().unwrap_or_default()
        })
        .collect()
}
