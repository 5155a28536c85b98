mod app;
mod config;
mod dropdown;
mod error;
mod events;
mod log;
mod scroll;
mod tui;

use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::Config;
use error::AppError;
use events::{Action, EventHandler};

/// Redraw interval while something animates (about 60 fps).
const FRAME_MS: u64 = 16;
/// Redraw interval when idle.
const IDLE_MS: u64 = 250;

const USAGE: &str = "\
Usage: mydropdown [OPTIONS]

Options:
  -c, --config <PATH>  Read configuration from PATH
      --no-animation   Expand and collapse without animating
      --theme <NAME>   Colour theme: dark or light
  -h, --help           Print this help";

/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    no_animation: bool,
    theme: Option<String>,
    help: bool,
}

/// Parse arguments (without the program name).
fn parse_args(args: &[String]) -> error::Result<CliArgs> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| AppError::from(format!("{} requires a path argument", args[i])))?;
                cli.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--theme" => {
                let name = args
                    .get(i + 1)
                    .ok_or_else(|| AppError::from("--theme requires a name argument"))?;
                cli.theme = Some(name.clone());
                i += 1;
            }
            "--no-animation" => cli.no_animation = true,
            "--help" | "-h" => cli.help = true,
            other => return Err(format!("Unknown argument '{}'", other).into()),
        }
        i += 1;
    }

    Ok(cli)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let config = load_config(cli)?;

    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config);

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;
    log::log("=== mydropdown exited ===");

    result
}

/// Load config with precedence: CLI > config file > defaults.
///
/// An explicit `--config` path must be usable; the default path falls back
/// to defaults with a warning.
fn load_config(cli: CliArgs) -> error::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    Ok(config.with_overrides(cli.no_animation, cli.theme))
}

fn setup_terminal() -> error::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| AppError::Terminal(e.to_string()))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        let now = Instant::now();
        terminal.draw(|frame| tui::ui::render(frame, app, now))?;

        let tick = if app.is_animating(now) { FRAME_MS } else { IDLE_MS };

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        if action != Action::None {
                            log::log_action(&action);
                        }
                        app.dispatch(action, Instant::now());
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            // Advance animations
            _ = tokio::time::sleep(Duration::from_millis(tick)) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
