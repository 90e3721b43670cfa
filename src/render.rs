//! Line Rendering
//!
//! Classifies history lines and paints them with ANSI colours for a real
//! terminal. Classification is per physical line, so multi-line file
//! contents are styled line by line.

use regex_lite::Regex;

use crate::navigation::PROMPT_USER;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ACCENT: &str = "\x1b[38;2;212;162;127m";
const SKY: &str = "\x1b[38;2;135;206;235m";
const TEXT: &str = "\x1b[38;2;229;229;229m";
const RED: &str = "\x1b[38;2;255;0;0m";

/// Clear the screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// OSC sequence setting the terminal window title.
pub fn window_title(title: &str) -> String {
    format!("\x1b]0;{}\x07", title)
}

lazy_static::lazy_static! {
    /// `# title | tech` project headings
    static ref TITLE_LINE: Regex = Regex::new(r"^# ([^|]+)\|(.+)$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStyle {
    /// Echoed prompt line
    Prompt,
    /// Boot `$ command` line
    Command,
    /// Project heading split into title and tech list
    Title { title: String, tech: String },
    /// Heading without a tech list
    Heading,
    Bullet,
    /// Welcome and ready banners
    Banner,
    /// Help text
    Usage,
    Plain,
}

pub fn classify(line: &str) -> LineStyle {
    if let Some(caps) = TITLE_LINE.captures(line) {
        return LineStyle::Title {
            title: caps[1].trim().to_string(),
            tech: caps[2].to_string(),
        };
    }
    if line.contains('•') {
        return LineStyle::Bullet;
    }
    if line.starts_with(PROMPT_USER) {
        return LineStyle::Prompt;
    }
    if line.starts_with("$ ") {
        return LineStyle::Command;
    }
    if line.contains('🚀') || line.contains("Welcome") || line.contains("terminal ready") {
        return LineStyle::Banner;
    }
    if line.starts_with("# ") {
        return LineStyle::Heading;
    }
    let mentions_command = ["cat ", "cd ", "more-help", "terminal commands"]
        .iter()
        .any(|needle| line.contains(needle));
    if line.starts_with("  ")
        || (line.contains(" - ") && mentions_command)
        || line == "terminal commands:"
    {
        return LineStyle::Usage;
    }
    LineStyle::Plain
}

/// Paint one physical line.
pub fn paint(line: &str) -> String {
    match classify(line) {
        LineStyle::Prompt | LineStyle::Command => format!("{}{}{}{}", ACCENT, BOLD, line, RESET),
        LineStyle::Title { title, tech } => {
            format!("{}{}# {}{}{} | {}{}", SKY, BOLD, title, RESET, TEXT, tech, RESET)
        }
        LineStyle::Heading => format!("{}{}{}{}", RED, BOLD, line, RESET),
        LineStyle::Banner => format!("{}{}{}", SKY, line, RESET),
        LineStyle::Usage => format!("{}{}{}", ACCENT, line, RESET),
        LineStyle::Bullet | LineStyle::Plain => format!("{}{}{}", TEXT, line, RESET),
    }
}

/// Render history entries as screen text, one physical line per row.
pub fn render_lines<S: AsRef<str>>(entries: &[S], color: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        for line in entry.as_ref().split('\n') {
            if color {
                out.push_str(&paint(line));
            } else {
                out.push_str(line);
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_title() {
        assert_eq!(
            classify("# spot | mongoDB, react"),
            LineStyle::Title { title: "spot".into(), tech: " mongoDB, react".into() }
        );
    }

    #[test]
    fn test_classify_kinds() {
        assert_eq!(classify("jon4h@portfolio:~$ ls"), LineStyle::Prompt);
        assert_eq!(classify("$ whoami"), LineStyle::Command);
        assert_eq!(classify("• built things"), LineStyle::Bullet);
        assert_eq!(classify("Welcome to my personal website 🎉!"), LineStyle::Banner);
        assert_eq!(classify("# no tech"), LineStyle::Heading);
        let usage = [
            "  ls                  - list files and directories",
            "cd projects         - navigate to projects directory",
        ];
        for line in usage {
            assert_eq!(classify(line), LineStyle::Usage);
        }
        assert_eq!(classify("/projects"), LineStyle::Plain);
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title("jon4h@portfolio:~"), "\x1b]0;jon4h@portfolio:~\x07");
    }

    #[test]
    fn test_render_without_color() {
        let out = render_lines(&["a\nb", "c"], false);
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn test_render_with_color_resets() {
        let out = render_lines(&["/"], true);
        assert!(out.starts_with(TEXT));
        assert!(out.ends_with(&format!("{}\n", RESET)));
    }
}
