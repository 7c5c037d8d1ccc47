//! pageread main entry point
//!
//! Loads a page description, runs page-ready, then performs one user
//! action: show the theme, click the toggle, or read something aloud.

use log::{debug, error, info};
use pageread::dom::MemoryDocument;
use pageread::state::config::Config;
use pageread::state::State;
use pageread::Result;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

/// How often to poll the engine while waiting for speech to finish
const SPEECH_POLL: Duration = Duration::from_millis(100);

/// Upper bound on waiting for speech before exiting
const SPEECH_WAIT_LIMIT: Duration = Duration::from_secs(120);

const USAGE: &str = "Usage: pageread [--debug] <theme|toggle|speak> [--page FILE] [TEXT_OR_ID]";

/// Action requested on the command line
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Theme,
    Toggle,
    Speak(Option<String>),
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    action: Action,
    page: Option<PathBuf>,
}

/// Parse arguments after the program name, with `--debug`/`-d` removed
fn parse_args(args: &[String]) -> std::result::Result<Invocation, String> {
    let mut page = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--page" | "-p" => {
                let path = iter.next().ok_or("--page needs a file")?;
                page = Some(PathBuf::from(path));
            }
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let action = match positional.next().as_deref() {
        Some("theme") => Action::Theme,
        Some("toggle") => Action::Toggle,
        Some("speak") => Action::Speak(positional.next()),
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => return Err("No command given".to_string()),
    };

    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument: {}", extra));
    }

    Ok(Invocation { action, page })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let debug_mode = args.iter().any(|arg| arg == "--debug" || arg == "-d");

    if debug_mode {
        // Debug mode: write to pageread.log
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("pageread.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open pageread.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "pageread version {} starting (debug mode, logging to pageread.log)",
            pageread::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    let rest: Vec<String> = args
        .into_iter()
        .skip(1)
        .filter(|arg| arg != "--debug" && arg != "-d")
        .collect();

    let invocation = match parse_args(&rest) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = run(invocation) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(invocation: Invocation) -> Result<()> {
    let config = Config::load()?;
    info!("Configuration loaded from {:?}", config.path());

    let document = match &invocation.page {
        Some(path) => MemoryDocument::load(path)?,
        None => MemoryDocument::new(),
    };

    let mut state = State::new(config, document)?;

    match invocation.action {
        Action::Theme => {
            println!("{}", state.current_theme());
        }
        Action::Toggle => match state.toggle_theme()? {
            Some(pref) => println!("{}", pref),
            None => {
                let toggle_id = state.theme.settings().toggle_id.clone();
                println!("{} (no #{} control on page)", state.current_theme(), toggle_id);
            }
        },
        Action::Speak(input) => {
            state.speak(input.as_deref());
            wait_for_speech(&state);
        }
    }

    Ok(())
}

/// Keep the process alive until the engine goes quiet
fn wait_for_speech(state: &State) {
    let started = Instant::now();
    while state.reader.is_speaking() {
        if started.elapsed() > SPEECH_WAIT_LIMIT {
            debug!("Gave up waiting for speech to finish");
            break;
        }
        thread::sleep(SPEECH_POLL);
    }
}
