//! Interactive driver for the documentation shell.
//!
//! Reads one command per line from stdin, turns it into a shell [`Event`],
//! runs one turn of the task queue, and prints the resulting frame.
//!
//! # Usage
//!
//! ```text
//! docshell [--config <file.toml>] [key=value ...]
//! ```
//!
//! Keys are those of [`Config::KEYS`]; command line pairs override the file.
//!
//! # Commands
//!
//! - `/`: Open search
//! - `close`: Close search from outside the overlay
//! - `type <text>`: Set the search input to `<text>`
//! - `up` / `down`: Move the selection
//! - `enter`: Open the selected result
//! - `esc`: Close search
//! - `hover <n>`: Point at result row `n`
//! - `outside`: Click the backdrop
//! - `go <path>`: Follow a link
//! - `sidebar`: Toggle the sidebar
//! - `lang`: Switch between English and Korean
//! - `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use docshell::search::{Key, SearchEvent};
use docshell::ui::render_page;
use docshell::{initialize, load_theme, observability, Config, Event};

/// Width used when `COLUMNS` is unset or invalid.
const DEFAULT_COLUMNS: usize = 80;

#[derive(Parser, Debug)]
#[command(name = "docshell", version, about = "Interactive documentation shell")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Config overrides as key=value
    #[arg(value_parser = parse_override)]
    overrides: Vec<(String, String)>,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(Event),
    Quit,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("docshell: {e}");
        std::process::exit(1);
    }
}

fn run() -> docshell::Result<()> {
    let config = load_config(&Args::parse())?;
    observability::init_tracing(&config);

    let theme = load_theme(&config);
    let mut shell = initialize(&config)?;
    let cols = terminal_columns();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_frame(&mut stdout, &shell, &theme, cols)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                writeln!(stdout, "unknown command: {}", line.trim())?;
            }
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Event(event) => {
                let prevented = shell.dispatch(&event)?;
                tracing::trace!(prevented, "command handled");
                shell.dispatch(&Event::Tick)?;
            }
        }
        print_frame(&mut stdout, &shell, &theme, cols)?;
    }

    tracing::debug!(renders = shell.render_count(), "exiting");
    Ok(())
}

/// Loads `--config` if given, then applies the `key=value` overrides.
fn load_config(args: &Args) -> docshell::Result<Config> {
    let base = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let overrides: BTreeMap<String, String> = args.overrides.iter().cloned().collect();
    Ok(base.apply_map(&overrides))
}

fn parse_override(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{arg}`"))?;
    let key = key.trim();
    if !Config::KEYS.contains(&key) {
        return Err(format!(
            "unknown key `{key}` (expected one of: {})",
            Config::KEYS.join(", ")
        ));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    let event = match word {
        "quit" | "q" => return Some(Command::Quit),
        "/" => Event::OpenSearch,
        "close" => Event::CloseSearch,
        "type" => Event::Search(SearchEvent::Input(rest.to_string())),
        "up" => Event::Search(SearchEvent::Key(Key::ArrowUp)),
        "down" => Event::Search(SearchEvent::Key(Key::ArrowDown)),
        "enter" => Event::Search(SearchEvent::Key(Key::Enter)),
        "esc" => Event::Search(SearchEvent::Key(Key::Escape)),
        "hover" => Event::Search(SearchEvent::Hover(rest.trim().parse().ok()?)),
        "outside" => Event::Search(SearchEvent::BackdropClick),
        "go" if !rest.trim().is_empty() => Event::Navigate(rest.trim().to_string()),
        "sidebar" => Event::ToggleSidebar,
        "lang" => Event::ToggleLanguage,
        _ => return None,
    };
    Some(Command::Event(event))
}

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse::<usize>().ok())
        .filter(|&c| c > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

fn print_frame(
    out: &mut impl Write,
    shell: &docshell::Shell<String>,
    theme: &docshell::Theme,
    cols: usize,
) -> docshell::Result<()> {
    if let Some(frame) = shell.with_frame(|page| render_page(page, theme, cols)) {
        write!(out, "{frame}")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overlay_commands() {
        assert_eq!(parse_command("/"), Some(Command::Event(Event::OpenSearch)));
        assert_eq!(
            parse_command("type flat map"),
            Some(Command::Event(Event::Search(SearchEvent::Input("flat map".into()))))
        );
        assert_eq!(
            parse_command("  hover 3 "),
            Some(Command::Event(Event::Search(SearchEvent::Hover(3))))
        );
        assert_eq!(parse_command("hover x"), None);
        assert_eq!(parse_command("type"), Some(Command::Event(Event::Search(SearchEvent::Input(String::new())))));
    }

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(
            parse_command("go /array/map"),
            Some(Command::Event(Event::Navigate("/array/map".into())))
        );
        assert_eq!(parse_command("go"), None);
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn args_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docshell.toml");
        std::fs::write(&path, "title = \"from file\"\nmax_results = 4\n").unwrap();

        let args = Args::try_parse_from([
            "docshell".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "max_results=7".to_string(),
        ])
        .unwrap();
        let config = load_config(&args).unwrap();

        assert_eq!(config.title, "from file");
        assert_eq!(config.max_results, 7);
    }

    #[test]
    fn help_and_version_are_handled_by_the_parser() {
        let help = Args::try_parse_from(["docshell", "--help", "title=x"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = Args::try_parse_from(["docshell", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn malformed_arguments_are_rejected() {
        assert!(Args::try_parse_from(["docshell", "--title", "x"]).is_err());
        assert!(Args::try_parse_from(["docshell", "verbose"]).is_err());
        assert!(Args::try_parse_from(["docshell", "colour=red"]).is_err());

        let args = Args::try_parse_from(["docshell", "language=ko", "title=a=b"]).unwrap();
        assert_eq!(
            args.overrides,
            vec![
                ("language".to_string(), "ko".to_string()),
                ("title".to_string(), "a=b".to_string()),
            ]
        );
    }
}
