use colored::Colorize;
use harps::api::{CmdMessage, ListedHarp, MessageLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const PATH_WIDTH: usize = 36;

/// Messages go to stderr: stdout is reserved for what editor glue consumes.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_harps(harps: &[ListedHarp]) {
    let with_paths = harps.iter().any(|h| h.path.is_some());

    for harp in harps {
        let register = format!("{}. ", harp.register);
        let search = visible(&harp.directive.compile());

        if with_paths {
            let path = harp.path.as_deref().unwrap_or("-");
            let path = truncate_to_width(path, PATH_WIDTH);
            let padding = PATH_WIDTH.saturating_sub(path.width());
            let available = LINE_WIDTH.saturating_sub(register.width() + PATH_WIDTH + 1);
            println!(
                "{}{}{} {}",
                register.yellow(),
                path.dimmed(),
                " ".repeat(padding),
                truncate_to_width(&search, available)
            );
        } else {
            let available = LINE_WIDTH.saturating_sub(register.width());
            println!("{}{}", register.yellow(), truncate_to_width(&search, available));
        }
    }
}

/// Control characters (the stored DEL byte included) are shown as `^X`.
fn visible(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{7f}' => "^?".to_string(),
            c if c.is_ascii_control() => format!("^{}", ((c as u8) + b'@') as char),
            c => c.to_string(),
        })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // One column is kept for the ellipsis.
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn text_exactly_as_wide_as_the_limit_is_kept() {
        assert_eq!(truncate_to_width("abcd", 4), "abcd");
        let path = "x".repeat(PATH_WIDTH);
        assert_eq!(truncate_to_width(&path, PATH_WIDTH), path);
        assert_eq!(truncate_to_width("abcde", 4), "abc…");
    }

    #[test]
    fn wide_characters_count_by_column() {
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
    }

    #[test]
    fn shows_control_characters() {
        assert_eq!(visible("a\u{7f}b"), "a^?b");
        assert_eq!(visible("a\tb"), "a^Ib");
        assert_eq!(visible("plain"), "plain");
    }
}
