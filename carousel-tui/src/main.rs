//! Carousel TUI — terminal slide carousel with wraparound navigation.
//!
//! Keys: ←/h previous, →/l next, q quit.
//! Mouse: click the ◀/▶ controls or a dot indicator.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use carousel_tui::app::AppState;
use carousel_tui::input::{self, Action};
use carousel_tui::{deck_loader, ui};

#[derive(Parser)]
#[command(
    name = "carousel",
    about = "Terminal slide carousel with dot indicators"
)]
struct Cli {
    /// Path to a JSON deck file. Defaults to the built-in sample deck.
    #[arg(long)]
    deck: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let deck = deck_loader::load_deck(cli.deck.as_deref())?;
    let mut app = AppState::new(deck)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            let action = match event::read()? {
                Event::Key(key) => input::translate_key(key),
                Event::Mouse(mouse) => input::translate_mouse(mouse, &app.regions, &app.stage),
                _ => None,
            };
            match action {
                Some(Action::Quit) => app.quit(),
                Some(Action::Slider(event)) => app.apply(event),
                None => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
