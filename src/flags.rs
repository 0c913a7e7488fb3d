use core::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::token::MULTILINE_SUFFIX;

/// Display-behaviour flags carried by an encoded stop name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopNameFlags {
    /// Pages advance on their own.
    pub autoskip: bool,
    /// The 6-wide and 8-wide signs need different page counts.
    pub width_variant_split: bool,
    /// Chinese pages, 1 to 3. Holds the 8-wide count when split.
    pub chinese_pages: u8,
    /// English text needs three or more lines.
    pub english_multiline: bool,
    /// The name with every recognised token removed.
    pub base_name: String,
}

impl Default for StopNameFlags {
    fn default() -> Self {
        Self {
            autoskip: false,
            width_variant_split: false,
            chinese_pages: 1,
            english_multiline: false,
            base_name: String::new(),
        }
    }
}

impl StopNameFlags {
    pub fn eight_wide_pages(&self) -> u8 {
        self.chinese_pages
    }

    /// The 6-wide sign shows one page more than the 8-wide sign when split.
    ///
    /// `chinese_pages` is read as the 8-wide count, so `!~` and `_!~` give
    /// 3 pages on 8-wide and 4 on 6-wide.
    pub fn six_wide_pages(&self) -> u8 {
        if self.width_variant_split {
            self.chinese_pages.saturating_add(1)
        } else {
            self.chinese_pages
        }
    }

    /// Page turns on the 8-wide sign.
    pub fn page_turns(&self) -> u8 {
        self.chinese_pages.saturating_sub(1)
    }

    /// Checks that the flags survive an encode/decode cycle.
    pub fn validate(&self) -> Result<()> {
        validate_pages(self.width_variant_split, self.chinese_pages)
    }

    pub fn is_representable(&self) -> bool {
        self.validate().is_ok()
    }
}

pub(crate) fn validate_pages(width_variant_split: bool, chinese_pages: u8) -> Result<()> {
    if !(1..=3).contains(&chinese_pages) {
        return Err(Error::InvalidChinesePages(chinese_pages));
    }

    if width_variant_split && chinese_pages == 1 {
        return Err(Error::UnrepresentableSplit);
    }

    Ok(())
}

/// Writes the canonical encoded name. Flags with no token are dropped
/// without logging.
impl fmt::Display for StopNameFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) =
            crate::fallback_prefix(self.autoskip, self.width_variant_split, self.chinese_pages)
        {
            write!(f, "{p}")?;
        }

        f.write_str(&self.base_name)?;

        if self.english_multiline {
            write!(f, "{MULTILINE_SUFFIX}")?;
        }

        Ok(())
    }
}

/// The editor fields populated from a stop name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiValues {
    pub autoskip: bool,
    pub width_variant_split: bool,
    pub chinese_pages: u8,
    pub base_name: String,
}

impl From<StopNameFlags> for UiValues {
    fn from(flags: StopNameFlags) -> Self {
        Self {
            autoskip: flags.autoskip,
            width_variant_split: flags.width_variant_split,
            chinese_pages: flags.chinese_pages,
            base_name: flags.base_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flags(autoskip: bool, split: bool, pages: u8, multiline: bool) -> StopNameFlags {
        StopNameFlags {
            autoskip,
            width_variant_split: split,
            chinese_pages: pages,
            english_multiline: multiline,
            base_name: "Main St".to_string(),
        }
    }

    #[test]
    fn default_is_a_single_page_without_flags() {
        let f = StopNameFlags::default();
        assert_eq!(f.chinese_pages, 1);
        assert!(!f.autoskip && !f.width_variant_split && !f.english_multiline);
        assert_eq!(f.to_string(), "");
    }

    #[test]
    fn width_variant_page_counts() {
        let split = flags(false, true, 2, false);
        assert_eq!(split.eight_wide_pages(), 2);
        assert_eq!(split.six_wide_pages(), 3);
        assert_eq!(split.page_turns(), 1);

        let split_three = flags(true, true, 3, false);
        assert_eq!(split_three.eight_wide_pages(), 3);
        assert_eq!(split_three.six_wide_pages(), 4);

        let plain = flags(false, false, 3, false);
        assert_eq!(plain.six_wide_pages(), 3);
        assert_eq!(plain.page_turns(), 2);
    }

    #[test]
    fn display_writes_the_encoded_name() {
        assert_eq!(flags(true, true, 3, true).to_string(), "_!~Main St!");
        assert_eq!(flags(false, false, 2, false).to_string(), "!Main St");
        assert_eq!(flags(true, false, 1, false).to_string(), "_Main St");
        assert_eq!(flags(false, false, 1, false).to_string(), "Main St");
    }

    #[test]
    fn display_drops_unrepresentable_split() {
        assert_eq!(flags(false, true, 1, false).to_string(), "Main St");
        assert_eq!(flags(true, true, 1, false).to_string(), "_Main St");
    }

    #[test]
    fn display_and_encode_agree_on_dropped_flags() {
        for (split, pages) in [(true, 1), (false, 0), (true, 9)] {
            for autoskip in [false, true] {
                let f = flags(autoskip, split, pages, true);
                assert_eq!(
                    f.to_string(),
                    crate::encode("Main St", autoskip, split, pages, 3)
                );
            }
        }
    }

    #[test]
    fn validate_rejects_contract_violations() {
        assert_eq!(flags(false, false, 0, false).validate(), Err(Error::InvalidChinesePages(0)));
        assert_eq!(flags(true, false, 4, false).validate(), Err(Error::InvalidChinesePages(4)));
        assert_eq!(flags(true, true, 1, false).validate(), Err(Error::UnrepresentableSplit));
        assert!(flags(true, true, 2, true).is_representable());
        assert!(flags(false, false, 1, false).is_representable());
    }

    #[test]
    fn ui_values_drop_the_multiline_flag() {
        let ui = UiValues::from(flags(true, true, 2, true));
        assert_eq!(
            ui,
            UiValues {
                autoskip: true,
                width_variant_split: true,
                chinese_pages: 2,
                base_name: "Main St".to_string(),
            }
        );
    }

    #[test]
    fn flags_serialize_with_field_names() {
        let json = serde_json::to_value(flags(true, false, 2, false)).expect("serialize");
        assert_eq!(json["autoskip"], true);
        assert_eq!(json["chinese_pages"], 2);
        assert_eq!(json["base_name"], "Main St");
    }
}
