//! Terminal entry point: argument parsing, logging, the dataset load, and
//! the single-threaded event loop driving the linked views.

use std::io;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use lexis::app::App;
use lexis::cli::{parse_args, CliCommand, RunOptions};
use lexis::config::DashboardConfig;
use lexis::data::loader::load_dataset;
use lexis::data::model::Region;
use lexis::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("lexis {VERSION}");
            Ok(())
        }
        CliCommand::Invalid(message) => {
            eprintln!("{message}");
            eprintln!("usage: lexis [--data <path>] [--config <path>] [--log-file <path>]");
            std::process::exit(2);
        }
        CliCommand::Run(options) => run(options),
    }
}

/// Restore the terminal on panic so mouse capture and raw mode never
/// outlive the process.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

fn run(options: RunOptions) -> Result<()> {
    color_eyre::install()?;
    init_tracing(options.log_file.as_deref())?;
    setup_panic_hook();

    let config = match &options.config_path {
        Some(path) => DashboardConfig::load(path).wrap_err("invalid dashboard configuration")?,
        None => DashboardConfig::default(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Load failure is fatal: no views render without a dataset.
    let dataset = runtime
        .block_on(load_dataset(&options.data_path))
        .wrap_err_with(|| {
            format!(
                "failed to load dataset from {}",
                options.data_path.display()
            )
        })?;
    tracing::info!(records = dataset.len(), "dataset loaded");

    let mut app = App::new(dataset, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

/// Route tracing output to the log file when one was given; the terminal
/// itself is the UI, so nothing ever logs to stdout.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when something changed; render cost is linear in the
        // displayed record count.
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        let Some(event) = event_stream.next().await else {
            return Ok(());
        };
        match event? {
            Event::Resize(..) => app.mark_dirty(),
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
                KeyCode::Char('q') => app.quit(),
                // Esc mirrors the scatter background click
                KeyCode::Esc => app.clear_selection(),
                KeyCode::Left => app.cycle_region(false),
                KeyCode::Right => app.cycle_region(true),
                KeyCode::Char(c @ '1'..='5') => {
                    if let Some(region) = Region::from_index(c as usize - '1' as usize) {
                        app.select_region(region);
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    app.on_mouse_down(mouse.column, mouse.row);
                }
                MouseEventKind::Moved => {
                    if app.on_mouse_moved(mouse.column, mouse.row) {
                        app.mark_dirty();
                    }
                }
                _ => {}
            },
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
