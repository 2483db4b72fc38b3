//! netmon — internet usage monitor for Linux, written in Rust.
//!
//! Features:
//!   - Rolling 30-second bandwidth chart (sent/received, MB/s)
//!   - Table of processes with established connections, busiest first
//!   - Terminate a process (every instance sharing its name)
//!   - Whole-machine networking kill switch via `nmcli networking on|off`
//!
//! Keybindings: Press F1 or '?' for help.

use std::io;
use std::panic;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use netmon::app::App;
use netmon::config::NetmonConfig;
use netmon::system::collector::Collector;
use netmon::{input, ui};

#[derive(Parser, Debug)]
#[command(
    name = "netmon",
    about = "Internet usage monitor — live bandwidth chart, per-process traffic, nmcli kill switch",
    version
)]
struct Cli {
    /// Update interval in milliseconds (200-10000); overrides the config file
    #[arg(short, long)]
    interval: Option<u64>,

    /// Terminate processes without the confirmation overlay
    #[arg(long)]
    no_confirm: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut app = App::new();
    NetmonConfig::load().apply_to(&mut app);
    if let Some(ms) = cli.interval {
        app.update_interval_ms = ms.clamp(200, 10000);
    }
    if cli.no_confirm {
        app.confirm_kill = false;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app);

    restore_terminal()?;

    if let Err(e) = NetmonConfig::from_app(&app).save() {
        log::warn!("could not save config: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop: draw, poll input with a short timeout, and run
/// one collection pass whenever the tick interval has elapsed
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut collector = Collector::new();
    let tick_rate = Duration::from_millis(app.update_interval_ms);
    let mut last_tick = Instant::now();

    // Initial data collection
    collector.refresh(app);

    loop {
        // Update visible table rows based on terminal size:
        // header (1) + chart (40%) + table header (1) + footer (1)
        let size = terminal.size()?;
        let chart_h = size.height as usize * 40 / 100;
        app.visible_rows = (size.height as usize).saturating_sub(chart_h + 3).max(5);

        // Draw
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Handle events with short timeout for responsiveness
        let timeout = Duration::from_millis(50);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_input(app, key);
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.select_prev(),
                    MouseEventKind::ScrollDown => app.select_next(),
                    _ => {}
                },
                Event::Resize(_, _) => {
                    // Terminal resize - will be handled on next draw
                }
                _ => {}
            }
        }

        // Check if it's time to refresh system data
        if last_tick.elapsed() >= tick_rate {
            collector.refresh(app);
            last_tick = Instant::now();
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
