//! Portfolio content
//!
//! The fixed tree served by the terminal and the texts shared with the info
//! overlay.

use super::types::FsNode;
use super::virtual_fs::VirtualFs;

pub const ABOUT_ME: &str = "hello! 👋 my name is jonah clemente, and i'm an undergrad at uc berkeley, originally from los angeles. in my free time i play counterstrike, run/lift weights, and make sourdough.

feel free to explore my projects and experiences using the terminal commands, and enjoy your stay :)";

pub const SPOT: &str = "# spot | mongoDB, react, tailwindCSS, flask
• built full-stack parking marketplace with flask rest api and mongodb, with location based search functionality.
• developed responsive react frontend with authentication and interactive maps.";

pub const PINTOS: &str = "# pintOS | c, x86, gdb
• implemented essential os system calls for process control, file operations, and subdirectories
• developed posix thread library mapping user/kernel threads with alarm clock and
  strict priority scheduler";

pub const SECURE_FILE_SHARING: &str = "# secure file sharing system | golang, cryptography
• architected end-to-end encrypted file storage system with zero-knowledge architecture,\x20
  and 95% security test success rate.
• implemented aes-256 encryption, hmac authentication, and rsa key exchange for secure
  multi-user file sharing";

pub const WEB_PORTFOLIO: &str = "# personal portfolio website | next.js, typeScript, tailwindCSS
• built with next.js, typescript, and tailwindcss
• features interactive terminal interface";

/// Project files in listing order
pub const PROJECTS: &[(&str, &str)] = &[
    ("spot.md", SPOT),
    ("pintos.md", PINTOS),
    ("secure-file-sharing.md", SECURE_FILE_SHARING),
    ("web-portfolio.md", WEB_PORTFOLIO),
];

lazy_static::lazy_static! {
    static ref PORTFOLIO: VirtualFs = VirtualFs::new(FsNode::dir([
        ("about-me.txt", FsNode::file(ABOUT_ME)),
        (
            "projects",
            FsNode::dir(PROJECTS.iter().map(|(name, content)| (*name, FsNode::file(*content)))),
        ),
    ]));
}

impl VirtualFs {
    /// The portfolio tree, built on first use and shared for the process.
    pub fn portfolio() -> &'static VirtualFs {
        &PORTFOLIO
    }
}
