use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{IsTerminal, stdin, stdout};
use std::path::PathBuf;

use charcount::App;
use charcount::config::{self, ConfigResult};
use charcount::input::InputReader;
use charcount::stats::compute_metrics;

/// Live character, word and line counts for text you type or paste
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive text statistics: characters, words and lines as you type"
)]
struct Args {
    /// Text file to load (with --print, reads stdin when omitted)
    input: Option<PathBuf>,

    /// Print the metrics and exit instead of opening the editor
    #[arg(long)]
    print: bool,

    /// With --print, emit the metrics as JSON
    #[arg(long, requires = "print")]
    json: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/charcount-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/charcount-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== CHARCOUNT DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    if args.print {
        return print_metrics(&args);
    }

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let initial_text = load_initial_text(&args)?;
    let app = App::new(&config_result.config, initial_text.as_deref());

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== CHARCOUNT DEBUG SESSION ENDED ===");

    Ok(())
}

/// Non-interactive mode: report the metrics of FILE or stdin
fn print_metrics(args: &Args) -> Result<()> {
    let text = InputReader::read_text(args.input.as_deref())?;
    let metrics = compute_metrics(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!("{}", metrics);
    }
    Ok(())
}

/// Text to preload into the editor
///
/// A file argument wins. Otherwise piped stdin is read; a terminal stdin
/// starts the editor empty.
fn load_initial_text(args: &Args) -> Result<Option<String>> {
    if let Some(path) = &args.input {
        return Ok(Some(InputReader::read_text(Some(path))?));
    }
    if stdin().is_terminal() {
        return Ok(None);
    }
    Ok(Some(InputReader::read_text(None)?))
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.session
            .notification
            .show_warning("Config not loaded", &warning);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
