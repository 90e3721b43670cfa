//! Info Overlay
//!
//! A static, read-only view of the biography and projects. It shares no
//! state with the interpreter; the host only opens, closes and renders it.

use log::debug;

use crate::fs::portfolio::ABOUT_ME;
use crate::fs::VirtualFs;

pub const OVERLAY_TITLE: &str = "jonah@portfolio:~/simple-view";

/// One project section: heading and bullet lines.
const PROJECT_SECTIONS: &[(&str, &[&str])] = &[
    (
        "$ cat projects/spot.md | spot, mongodb, react, tailwindcss, flask",
        &[
            "• built full-stack parking marketplace with flask rest api and mongodb",
            "• developed responsive react frontend with authentication and interactive maps",
        ],
    ),
    (
        "$ cat projects/pintos.md | pintos, c, x86",
        &[
            "• implemented essential os system calls for process control, file operations, and subdirectories",
            "• developed posix thread library mapping user/kernel threads with alarm clock and strict priority scheduler",
        ],
    ),
    (
        "$ cat projects/secure-file-sharing.md | golang ",
        &[
            "• architected end-to-end encrypted file storage system with zero-knowledge architecture, 95% security test success rate",
            "• implemented aes-256 encryption, hmac authentication, and rsa key exchange for secure multi-user file sharing",
        ],
    ),
    (
        "$ cat projects/web-portfolio.md",
        &[
            "• built with next.js, typescript, and tailwindcss",
            "• features interactive terminal interface",
        ],
    ),
];

/// Keys the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

#[derive(Debug, Clone, Default)]
pub struct InfoOverlay {
    visible: bool,
}

impl InfoOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
        debug!("info overlay opened");
    }

    pub fn close(&mut self) {
        self.visible = false;
        debug!("info overlay closed");
    }

    /// The header `?` button.
    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.open();
        }
    }

    /// Escape closes the overlay; every other key is ignored. Returns
    /// whether the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.visible && key == Key::Escape {
            self.close();
            return true;
        }
        false
    }

    /// Lines of the overlay, empty while hidden.
    pub fn render(&self) -> Vec<String> {
        if self.visible {
            render_info()
        } else {
            Vec::new()
        }
    }
}

/// The overlay content regardless of visibility.
pub fn render_info() -> Vec<String> {
    let mut lines = vec![OVERLAY_TITLE.to_string(), String::new()];

    lines.push("$ cat about-me.txt".to_string());
    lines.extend(ABOUT_ME.lines().map(String::from));
    lines.push(String::new());

    lines.push("$ ls projects/".to_string());
    let listing = VirtualFs::portfolio()
        .resolve(&["projects"])
        .and_then(VirtualFs::list)
        .unwrap_or_default();
    lines.push(listing.join("  "));
    lines.push(String::new());

    for (heading, bullets) in PROJECT_SECTIONS {
        lines.push(heading.to_string());
        lines.extend(bullets.iter().map(|bullet| format!("  {}", bullet)));
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let overlay = InfoOverlay::new();
        assert!(!overlay.is_visible());
        assert!(overlay.render().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut overlay = InfoOverlay::new();
        overlay.toggle();
        assert!(overlay.is_visible());
        overlay.toggle();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_escape_closes() {
        let mut overlay = InfoOverlay::new();
        assert!(!overlay.handle_key(Key::Escape));
        overlay.open();
        assert!(!overlay.handle_key(Key::Other));
        assert!(overlay.is_visible());
        assert!(overlay.handle_key(Key::Escape));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_render_sections() {
        let mut overlay = InfoOverlay::new();
        overlay.open();
        let lines = overlay.render();
        assert_eq!(lines[0], OVERLAY_TITLE);
        assert!(lines.contains(&"$ cat about-me.txt".to_string()));
        let listing = "spot.md  pintos.md  secure-file-sharing.md  web-portfolio.md";
        assert!(lines.iter().any(|l| l == listing));
        let headings = lines.iter().filter(|l| l.starts_with("$ cat projects/")).count();
        assert_eq!(headings, 4);
    }
}
