//! Terminal front-end (Ratatui + Crossterm)
//! - Interactive converter window
//! - One-shot `convert` command

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;

pub mod command;
pub mod input;
pub mod state;
pub mod ui;
pub mod util;

pub fn run(config: &Config) -> Result<()> {
    let mut app = state::App::from_config(config);
    log::info!(
        "starting window, {} -> {}",
        app.selection.from,
        app.selection.to
    );

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // restore the terminal even when the loop failed
    let restored = util::first_error([
        disable_raw_mode(),
        crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen),
        terminal.show_cursor(),
    ]);
    log::info!("window closed");
    result?;
    Ok(restored?)
}

/// Leaves raw mode and the alternate screen before the default hook prints.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        log::error!("panic: {info}");
        previous(info);
    }));
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut state::App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.quit {
            return Ok(());
        }
    }
}
