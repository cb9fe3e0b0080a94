use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use std::path::PathBuf;
use std::time::Instant;

mod animator;
mod app;
mod config;
mod control;
mod easing;
mod geometry;
mod ui;

fn main() -> Result<()> {
    // 0. Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("segtab {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("segtab — animated segmented control for the terminal");
        println!();
        println!("USAGE: segtab [CONFIG]");
        println!();
        println!("Click a tab to switch; the highlight springs to it.");
        println!("CONFIG is an optional YAML file with `tabs`, `default_tab`");
        println!("and `tick_rate_ms`; without it the built-in demo tabs are");
        println!("used (or ~/.config/segtab/segtab.yaml when present).");
        println!();
        println!("OPTIONS:");
        println!("  -h, --help     Print this help message");
        println!("  -V, --version  Print version");
        return Ok(());
    }
    let config_path: Option<PathBuf> = args.get(1).filter(|a| !a.starts_with('-')).map(PathBuf::from);

    // 1. Load configuration and build the demo before touching the terminal
    let config = config::load_config(config_path.as_deref())?;
    let mut app = app::App::new(&config).context("Failed to build segmented control")?;
    let tick_rate = config.tick_rate();

    // 2. Install panic hook so terminal is restored on panic
    install_panic_hook();

    // 3. Initialize TUI with mouse reporting
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .context("Failed to enable mouse capture")?;

    // 4. Event loop: draw every frame so transitions stay smooth, poll
    // with the frame period as the timeout
    loop {
        let now = Instant::now();
        terminal.draw(|frame| app.render(frame, now))?;

        if !crossterm::event::poll(tick_rate)? {
            continue;
        }
        match crossterm::event::read()? {
            Event::Key(key) => {
                // Skip release/repeat events on some terminals
                if key.kind != crossterm::event::KeyEventKind::Press {
                    continue;
                }
                if matches!(app.handle_key(key), app::Action::Quit) {
                    break;
                }
            }
            Event::Mouse(event) => {
                app.handle_mouse(event);
            }
            // The next draw re-measures every tab, so resize needs no
            // extra bookkeeping here.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    // 5. Restore terminal
    crossterm::execute!(std::io::stdout(), DisableMouseCapture).ok();
    ratatui::restore();

    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        crossterm::execute!(std::io::stdout(), DisableMouseCapture).ok();
        ratatui::restore();
        original_hook(panic_info);
    }));
}
