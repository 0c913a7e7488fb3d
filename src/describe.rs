use crate::flags::StopNameFlags;

/// Renders decoded flags as one `label: value` line per concern.
pub fn describe(flags: &StopNameFlags) -> String {
    let mut lines = Vec::with_capacity(4);

    lines.push(format!("name: {}", flags.base_name));
    lines.push(format!(
        "auto-play: {}",
        if flags.autoskip { "on" } else { "off" }
    ));

    if flags.width_variant_split {
        lines.push(format!(
            "chinese: 8-wide {} / 6-wide {}",
            pages(flags.eight_wide_pages()),
            pages(flags.six_wide_pages())
        ));
    } else {
        lines.push(format!("chinese: {}", pages(flags.chinese_pages)));
    }

    lines.push(format!(
        "english: {}",
        if flags.english_multiline {
            "multiline"
        } else {
            "single"
        }
    ));

    lines.join("\n")
}

fn pages(n: u8) -> String {
    if n == 1 {
        "1 page".to_string()
    } else {
        format!("{n} pages")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_split_pages_per_width() {
        assert_eq!(
            describe(&decode("_!~Central!")),
            "name: Central\nauto-play: on\nchinese: 8-wide 3 pages / 6-wide 4 pages\nenglish: multiline"
        );
    }

    #[test]
    fn describes_plain_name() {
        assert_eq!(
            describe(&decode("Elm St")),
            "name: Elm St\nauto-play: off\nchinese: 1 page\nenglish: single"
        );
    }
}
