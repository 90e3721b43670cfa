//! Terminal Host
//!
//! Ties together the boot sequence, the interpreter session and the info
//! overlay, and draws them on a real terminal. Input is read line by line;
//! lines typed during the boot phase are discarded.

use std::io::{self, Write};

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::boot::{spawn_boot, BootScript};
use crate::info::{InfoOverlay, Key};
use crate::interpreter::{History, Session};
use crate::render::{render_lines, window_title, CLEAR_SCREEN};

/// Options for creating a terminal.
#[derive(Debug, Clone)]
pub struct TerminalOptions {
    /// Intro script and its delays
    pub script: BootScript,
    /// Play the intro with timers; otherwise seed it at once
    pub animate: bool,
    /// ANSI colours
    pub color: bool,
    /// Clear the screen before every redraw
    pub clear_screen: bool,
}

impl TerminalOptions {
    /// Options for a host on the given streams. Clearing follows stdout
    /// alone; `--no-color` only drops the colours.
    pub fn for_streams(stdin_tty: bool, stdout_tty: bool, no_boot: bool, no_color: bool) -> Self {
        Self {
            animate: !no_boot && stdin_tty,
            color: !no_color && stdout_tty,
            clear_screen: stdout_tty,
            ..Self::default()
        }
    }

    pub fn with_script(mut self, script: BootScript) -> Self {
        self.script = script;
        self
    }
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            script: BootScript::portfolio(),
            animate: true,
            color: true,
            clear_screen: true,
        }
    }
}

/// What the host does with an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The `?` header button
    ToggleInfo,
    /// Escape while the overlay is open
    Escape,
    /// Anything else, for the interpreter
    Line(String),
}

impl Input {
    pub fn classify(line: &str, overlay_open: bool) -> Self {
        let trimmed = line.trim();
        if trimmed == "?" {
            return Input::ToggleInfo;
        }
        if overlay_open && (trimmed.starts_with('\x1b') || trimmed.eq_ignore_ascii_case("esc")) {
            return Input::Escape;
        }
        Input::Line(line.to_string())
    }
}

pub struct Terminal<W: Write> {
    session: Session<'static>,
    overlay: InfoOverlay,
    options: TerminalOptions,
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(options: TerminalOptions, out: W) -> Self {
        Self {
            session: Session::portfolio(),
            overlay: InfoOverlay::new(),
            options,
            out,
        }
    }

    pub fn session(&self) -> &Session<'static> {
        &self.session
    }

    pub fn overlay(&self) -> &InfoOverlay {
        &self.overlay
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Play the intro, then seed the session history with it.
    pub async fn boot(&mut self) -> io::Result<()> {
        let history = if self.options.animate {
            if self.options.clear_screen {
                self.out.write_all(CLEAR_SCREEN.as_bytes())?;
                self.out.flush()?;
            }
            let out = &mut self.out;
            let color = self.options.color;
            let mut written = Ok(());
            let history = spawn_boot(self.options.script.clone())
                .wait(|line| {
                    if written.is_ok() {
                        written = out
                            .write_all(render_lines(&[line], color).as_bytes())
                            .and_then(|_| out.flush());
                    }
                })
                .await;
            written?;
            history
        } else {
            History::from_lines(self.options.script.lines.clone())
        };

        info!("boot complete, {} line(s)", history.len());
        self.session.seed(history);
        self.redraw()
    }

    /// Handle one submitted line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<()> {
        match Input::classify(line, self.overlay.is_visible()) {
            Input::ToggleInfo => self.overlay.toggle(),
            Input::Escape => {
                self.overlay.handle_key(Key::Escape);
            }
            Input::Line(_) if self.overlay.is_visible() => {
                self.overlay.handle_key(Key::Other);
            }
            Input::Line(line) => {
                self.session.submit(&line);
            }
        }
        self.redraw()
    }

    /// Boot, then read lines until end of input. Lines that arrive while
    /// the intro is still playing are read and dropped.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines();
        let mut input_open = true;
        {
            let boot = self.boot();
            tokio::pin!(boot);
            loop {
                tokio::select! {
                    biased;
                    booted = &mut boot => {
                        booted?;
                        break;
                    }
                    line = lines.next_line(), if input_open => match line? {
                        Some(line) => debug!("boot: dropping input {:?}", line),
                        None => input_open = false,
                    },
                }
            }
        }

        while let Some(line) = lines.next_line().await? {
            self.handle_line(&line)?;
        }
        debug!("input closed");
        writeln!(self.out)?;
        self.out.flush()
    }

    fn redraw(&mut self) -> io::Result<()> {
        let color = self.options.color;
        let mut screen = String::new();
        if self.options.clear_screen {
            screen.push_str(CLEAR_SCREEN);
            screen.push_str(&window_title(&self.session.nav().title()));
        }

        if self.overlay.is_visible() {
            screen.push_str(&render_lines(&self.overlay.render(), color));
            screen.push_str("[esc + enter to close]");
        } else {
            screen.push_str(&render_lines(self.session.history().lines(), color));
            screen.push_str(&self.session.prompt());
            screen.push(' ');
        }

        self.out.write_all(screen.as_bytes())?;
        self.out.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn plain(animate: bool) -> TerminalOptions {
        TerminalOptions {
            script: BootScript::new(["hello", "ready"]).with_tick(Duration::from_millis(10)),
            animate,
            color: false,
            clear_screen: false,
        }
    }

    fn output(term: Terminal<Vec<u8>>) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_input_classify() {
        assert_eq!(Input::classify(" ? ", false), Input::ToggleInfo);
        assert_eq!(Input::classify("esc", false), Input::Line("esc".into()));
        assert_eq!(Input::classify("ESC", true), Input::Escape);
        assert_eq!(Input::classify("\x1b", true), Input::Escape);
        assert_eq!(Input::classify("ls", true), Input::Line("ls".into()));
    }

    #[tokio::test]
    async fn test_boot_without_animation_seeds_history() {
        let mut term = Terminal::new(plain(false), Vec::new());
        term.boot().await.unwrap();
        assert_eq!(term.session().history().lines(), ["hello", "ready"]);
        assert_eq!(output(term), "hello\nready\njon4h@portfolio:~$ ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_animated_boot_prints_then_redraws() {
        let mut term = Terminal::new(plain(true), Vec::new());
        term.boot().await.unwrap();
        assert_eq!(term.session().history().len(), 2);
        assert_eq!(output(term), "hello\nready\nhello\nready\njon4h@portfolio:~$ ");
    }

    #[tokio::test]
    async fn test_run_reads_commands() {
        let mut term = Terminal::new(plain(false), Vec::new());
        term.run(&b"cd projects\npwd\n"[..]).await.unwrap();
        assert_eq!(
            term.session().history().lines(),
            ["jon4h@portfolio:~/projects$ pwd", "/projects", ""]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_during_boot_is_dropped() {
        let mut term = Terminal::new(plain(true), Vec::new());
        term.run(&b"whoami\n"[..]).await.unwrap();
        assert_eq!(term.session().history().lines(), ["hello", "ready"]);
        assert!(!output(term).contains("kumasta"));
    }

    #[test]
    fn test_no_color_still_clears() {
        let options = TerminalOptions::for_streams(true, true, false, true);
        assert!(!options.color);
        assert!(options.clear_screen);
        assert!(options.animate);

        let options = TerminalOptions::for_streams(false, false, false, false);
        assert!(!options.color);
        assert!(!options.clear_screen);
        assert!(!options.animate);
    }

    #[tokio::test]
    async fn test_redraw_clears_and_sets_title() {
        let mut options = plain(false);
        options.clear_screen = true;
        let mut term = Terminal::new(options, Vec::new());
        term.boot().await.unwrap();
        term.handle_line("cd projects").unwrap();
        term.handle_line("pwd").unwrap();
        let out = output(term);
        let last = out.rsplit(CLEAR_SCREEN).next().unwrap();
        assert_eq!(
            last,
            "\x1b]0;jon4h@portfolio:~/projects\x07\
             jon4h@portfolio:~/projects$ pwd\n/projects\n\njon4h@portfolio:~/projects$ "
        );
    }

    #[tokio::test]
    async fn test_overlay_does_not_reach_interpreter() {
        let mut term = Terminal::new(plain(false), Vec::new());
        term.boot().await.unwrap();
        term.handle_line("?").unwrap();
        assert!(term.overlay().is_visible());

        term.handle_line("ls").unwrap();
        assert!(term.overlay().is_visible());
        assert_eq!(term.session().history().lines(), ["hello", "ready"]);

        term.handle_line("\x1b").unwrap();
        assert!(!term.overlay().is_visible());
        let out = output(term);
        assert!(out.contains("jonah@portfolio:~/simple-view"));
    }
}
