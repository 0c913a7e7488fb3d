//! # Stop name codec
//!
//! Bus stop signs read their display behaviour from the stop's name. A short
//! prefix and an optional suffix, drawn from a fixed vocabulary, carry the
//! flags; whatever is left is the name itself.
//!
//! ## Prefixes
//! Checked front-anchored, first match wins, in this order:
//!
//! | token | auto-play | 6w/8w split | chinese pages |
//! |-------|-----------|-------------|---------------|
//! | `_!~` | yes       | yes         | 3             |
//! | `_~`  | yes       | yes         | 2             |
//! | `_!!` | yes       | no          | 3             |
//! | `_!`  | yes       | no          | 2             |
//! | `!~`  | no        | yes         | 3             |
//! | `~`   | no        | yes         | 2             |
//! | `!!`  | no        | no          | 3             |
//! | `!`   | no        | no          | 2             |
//! | `_`   | yes       | no          | 1             |
//!
//! With a split the page count is the 8-wide count; the 6-wide sign shows one
//! more page.
//!
//! ## Suffix
//! A trailing `!` marks English text that needs three or more lines. It is
//! stripped before prefix matching, so a name that really ends in `!` cannot
//! be stored.
//!
//! ## Example
//! ```rust
//! use stop_name_codec::{apply_ui_edit, decode};
//!
//! let flags = decode("_!~Central!");
//! assert!(flags.autoskip && flags.width_variant_split && flags.english_multiline);
//! assert_eq!(flags.chinese_pages, 3);
//! assert_eq!(flags.base_name, "Central");
//!
//! let next = apply_ui_edit("!!Old Town", true, false, 2, "a@b@c@@");
//! assert_eq!(next, "_!Old Town!");
//! ```

mod describe;
mod error;
mod flags;
mod token;

pub use describe::describe;
pub use error::{Error, Result};
pub use flags::{StopNameFlags, UiValues};
pub use token::{Prefix, AT_MARKER, MULTILINE_AT_THRESHOLD, MULTILINE_SUFFIX, PREFIX_TOKENS};

/// Splits an encoded stop name into its flags and base name.
///
/// Never fails: a name with no recognised tokens decodes to the default
/// flags with the whole input as the base name.
pub fn decode(name: &str) -> StopNameFlags {
    let (english_multiline, rest) = match name.strip_suffix(MULTILINE_SUFFIX) {
        Some(rest) => (true, rest),
        None => (false, name),
    };

    let (prefix, base_name) = Prefix::strip(rest);
    log::trace!("decoded {name:?}: prefix {prefix:?}, multiline {english_multiline}");

    let mut flags = StopNameFlags {
        english_multiline,
        base_name: base_name.to_string(),
        ..StopNameFlags::default()
    };

    if let Some(p) = prefix {
        flags.autoskip = p.autoskip();
        flags.width_variant_split = p.width_variant_split();
        flags.chinese_pages = p.chinese_pages();
    }

    flags
}

/// Builds an encoded stop name.
///
/// `eng_at_count` is the number of `@` markers in the English display text.
/// Flags with no token are dropped silently (see [`try_encode`]): a split
/// with a single page loses the split, and a page count outside `1..=3` is
/// written as a single page.
pub fn encode(
    base_name: &str,
    autoskip: bool,
    width_variant_split: bool,
    chinese_pages: u8,
    eng_at_count: usize,
) -> String {
    let mut out = String::with_capacity(base_name.len() + 4);

    if let Some(p) = compatible_prefix(autoskip, width_variant_split, chinese_pages) {
        out.push_str(p.as_str());
    }

    out.push_str(base_name);

    if eng_at_count > MULTILINE_AT_THRESHOLD {
        out.push(MULTILINE_SUFFIX);
    }

    out
}

/// Like [`encode`], but rejects flags that would not survive decoding.
pub fn try_encode(
    base_name: &str,
    autoskip: bool,
    width_variant_split: bool,
    chinese_pages: u8,
    eng_at_count: usize,
) -> Result<String> {
    flags::validate_pages(width_variant_split, chinese_pages)?;
    Ok(encode(
        base_name,
        autoskip,
        width_variant_split,
        chinese_pages,
        eng_at_count,
    ))
}

/// Re-encodes `current_name` with fresh editor values.
///
/// Only the base name is taken from `current_name`; its old flags are
/// replaced. Multiline is derived from the `@` markers in
/// `english_display_text`.
pub fn apply_ui_edit(
    current_name: &str,
    autoskip: bool,
    width_variant_split: bool,
    chinese_pages: u8,
    english_display_text: &str,
) -> String {
    let base = decode(current_name).base_name;
    encode(
        &base,
        autoskip,
        width_variant_split,
        chinese_pages,
        count_at_markers(english_display_text),
    )
}

/// Editor field values for an encoded stop name.
pub fn ui_values(name: &str) -> UiValues {
    decode(name).into()
}

pub fn count_at_markers(text: &str) -> usize {
    text.chars().filter(|&c| c == AT_MARKER).count()
}

/// Token for the given flags, falling back to the plain auto-play token (or
/// none) when the combination has no encoding.
pub(crate) fn fallback_prefix(
    autoskip: bool,
    width_variant_split: bool,
    chinese_pages: u8,
) -> Option<Prefix> {
    Prefix::for_flags(autoskip, width_variant_split, chinese_pages)
        .or_else(|| Prefix::for_flags(autoskip, false, 1))
}

/// [`fallback_prefix`], warning when a flag is dropped.
fn compatible_prefix(
    autoskip: bool,
    width_variant_split: bool,
    chinese_pages: u8,
) -> Option<Prefix> {
    if let Err(e) = flags::validate_pages(width_variant_split, chinese_pages) {
        log::warn!("{e}; encoding as a single page without a 6w/8w split");
    }

    fallback_prefix(autoskip, width_variant_split, chinese_pages)
}

/// Encoder with a selectable policy for flags that have no token.
///
/// The default policy drops them silently, keeping output identical to names
/// written by older tools. [`Codec::strict`] reports them as errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    strict: bool,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn decode(&self, name: &str) -> StopNameFlags {
        decode(name)
    }

    pub fn encode(
        &self,
        base_name: &str,
        autoskip: bool,
        width_variant_split: bool,
        chinese_pages: u8,
        eng_at_count: usize,
    ) -> Result<String> {
        if self.strict {
            try_encode(
                base_name,
                autoskip,
                width_variant_split,
                chinese_pages,
                eng_at_count,
            )
        } else {
            Ok(encode(
                base_name,
                autoskip,
                width_variant_split,
                chinese_pages,
                eng_at_count,
            ))
        }
    }

    pub fn apply_ui_edit(
        &self,
        current_name: &str,
        autoskip: bool,
        width_variant_split: bool,
        chinese_pages: u8,
        english_display_text: &str,
    ) -> Result<String> {
        let base = self.decode(current_name).base_name;
        self.encode(
            &base,
            autoskip,
            width_variant_split,
            chinese_pages,
            count_at_markers(english_display_text),
        )
    }
}
