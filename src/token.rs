//! The fixed vocabulary of stop-name prefix and suffix tokens.

use core::fmt;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Trailing marker for English text that needs three or more lines.
pub const MULTILINE_SUFFIX: char = '!';

/// Line-break marker counted in the English display text.
pub const AT_MARKER: char = '@';

/// More than this many markers means the English text is multiline.
pub const MULTILINE_AT_THRESHOLD: usize = 2;

/// A recognised front-anchored token and the flags it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    AutoSplitThree, // _!~
    AutoSplitTwo,   // _~
    AutoThree,      // _!!
    AutoTwo,        // _!
    SplitThree,     // !~
    SplitTwo,       // ~
    Three,          // !!
    Two,            // !
    Auto,           // _
}

/// Match table, in priority order. Longer tokens must come before any token
/// they start with.
pub const PREFIX_TOKENS: &[(&str, Prefix)] = &[
    ("_!~", Prefix::AutoSplitThree),
    ("_~", Prefix::AutoSplitTwo),
    ("_!!", Prefix::AutoThree),
    ("_!", Prefix::AutoTwo),
    ("!~", Prefix::SplitThree),
    ("~", Prefix::SplitTwo),
    ("!!", Prefix::Three),
    ("!", Prefix::Two),
    ("_", Prefix::Auto),
];

// Precomputed reverse lookup: (autoskip, width_variant_split, chinese_pages) -> token.
static BY_FLAGS: Lazy<HashMap<(bool, bool, u8), Prefix>> = Lazy::new(|| {
    PREFIX_TOKENS
        .iter()
        .map(|&(_, p)| ((p.autoskip(), p.width_variant_split(), p.chinese_pages()), p))
        .collect()
});

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::AutoSplitThree => "_!~",
            Prefix::AutoSplitTwo => "_~",
            Prefix::AutoThree => "_!!",
            Prefix::AutoTwo => "_!",
            Prefix::SplitThree => "!~",
            Prefix::SplitTwo => "~",
            Prefix::Three => "!!",
            Prefix::Two => "!",
            Prefix::Auto => "_",
        }
    }

    pub fn autoskip(self) -> bool {
        matches!(
            self,
            Prefix::AutoSplitThree
                | Prefix::AutoSplitTwo
                | Prefix::AutoThree
                | Prefix::AutoTwo
                | Prefix::Auto
        )
    }

    pub fn width_variant_split(self) -> bool {
        matches!(
            self,
            Prefix::AutoSplitThree | Prefix::AutoSplitTwo | Prefix::SplitThree | Prefix::SplitTwo
        )
    }

    /// Chinese page count as stored in the flags (the 8-wide value when split).
    pub fn chinese_pages(self) -> u8 {
        match self {
            Prefix::AutoSplitThree | Prefix::AutoThree | Prefix::SplitThree | Prefix::Three => 3,
            Prefix::AutoSplitTwo | Prefix::AutoTwo | Prefix::SplitTwo | Prefix::Two => 2,
            Prefix::Auto => 1,
        }
    }

    /// Strips the highest-priority token from the front of `name`.
    ///
    /// Returns `None` and the untouched input when nothing matches.
    pub fn strip(name: &str) -> (Option<Prefix>, &str) {
        PREFIX_TOKENS
            .iter()
            .find_map(|&(tok, p)| name.strip_prefix(tok).map(|rest| (Some(p), rest)))
            .unwrap_or((None, name))
    }

    /// The token that carries exactly these flags, if the vocabulary has one.
    ///
    /// `(false, false, 1)` is the default and has no token. Any split with a
    /// single page, and any page count outside `1..=3`, also yields `None`.
    pub fn for_flags(
        autoskip: bool,
        width_variant_split: bool,
        chinese_pages: u8,
    ) -> Option<Prefix> {
        BY_FLAGS
            .get(&(autoskip, width_variant_split, chinese_pages))
            .copied()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_tokens_agree_with_as_str() {
        for &(tok, p) in PREFIX_TOKENS {
            assert_eq!(tok, p.as_str());
            assert_eq!(tok, p.to_string());
        }
    }

    #[test]
    fn longer_tokens_are_checked_before_their_prefixes() {
        for (i, &(earlier, _)) in PREFIX_TOKENS.iter().enumerate() {
            for &(later, _) in &PREFIX_TOKENS[i + 1..] {
                assert!(
                    !later.starts_with(earlier),
                    "'{later}' is shadowed by '{earlier}'"
                );
            }
        }
    }

    #[test]
    fn strip_prefers_the_most_specific_token() {
        assert_eq!(Prefix::strip("_!~X"), (Some(Prefix::AutoSplitThree), "X"));
        assert_eq!(Prefix::strip("_!!X"), (Some(Prefix::AutoThree), "X"));
        assert_eq!(Prefix::strip("!!!X"), (Some(Prefix::Three), "!X"));
        assert_eq!(Prefix::strip("~~"), (Some(Prefix::SplitTwo), "~"));
        assert_eq!(Prefix::strip("Elm St"), (None, "Elm St"));
        assert_eq!(Prefix::strip(""), (None, ""));
    }

    #[test]
    fn reverse_lookup_covers_every_token_and_nothing_else() {
        for &(_, p) in PREFIX_TOKENS {
            assert_eq!(
                Prefix::for_flags(p.autoskip(), p.width_variant_split(), p.chinese_pages()),
                Some(p)
            );
        }

        assert_eq!(Prefix::for_flags(false, false, 1), None);
        assert_eq!(Prefix::for_flags(false, true, 1), None);
        assert_eq!(Prefix::for_flags(true, true, 1), None);
        assert_eq!(Prefix::for_flags(true, false, 4), None);
        assert_eq!(Prefix::for_flags(false, false, 0), None);
    }
}
