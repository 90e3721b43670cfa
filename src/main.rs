use clap::Parser;
use env_logger::Env;
use std::io::IsTerminal;
use std::time::Duration;

use portfolio_term::boot::BootScript;
use portfolio_term::info::render_info;
use portfolio_term::interpreter::{split_script, Session};
use portfolio_term::render::render_lines;
use portfolio_term::terminal::{Terminal, TerminalOptions};

#[derive(Parser)]
#[command(name = "portfolio-term")]
#[command(about = "A portfolio you explore from a terminal")]
#[command(version)]
struct Cli {
    /// Run commands (separated by ';' or newlines) and print the final screen
    #[arg(short = 'c')]
    commands: Option<String>,

    /// Skip the boot animation
    #[arg(long = "no-boot")]
    no_boot: bool,

    /// Delay between boot lines, in milliseconds
    #[arg(long = "tick-ms", default_value_t = 800)]
    tick_ms: u64,

    /// Pause after the last boot line, in milliseconds
    #[arg(long = "settle-ms", default_value_t = 1000)]
    settle_ms: u64,

    /// Print the simple info view and exit
    #[arg(long = "info")]
    info: bool,

    /// With -c, output the final screen as JSON (history, cwd)
    #[arg(long = "json")]
    json: bool,

    /// Disable ANSI colours
    #[arg(long = "no-color")]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stdout().is_terminal();

    if cli.info {
        print!("{}", render_lines(&render_info(), color));
        return;
    }

    if let Some(commands) = cli.commands {
        let mut session = Session::portfolio();
        for line in split_script(&commands) {
            session.submit(line);
        }

        if cli.json {
            match serde_json::to_string(&session.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            print!("{}", render_lines(session.history().lines(), color));
        }
        return;
    }

    let options = TerminalOptions::for_streams(
        std::io::stdin().is_terminal(),
        std::io::stdout().is_terminal(),
        cli.no_boot,
        cli.no_color,
    )
    .with_script(
        BootScript::portfolio()
            .with_tick(Duration::from_millis(cli.tick_ms))
            .with_settle(Duration::from_millis(cli.settle_ms)),
    );

    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(options, stdout.lock());
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    if let Err(e) = terminal.run(input).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
