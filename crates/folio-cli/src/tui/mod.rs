mod app;
mod views;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use app::App;

/// Target time between redraws, roughly 30 frames per second.
const FRAME: Duration = Duration::from_millis(33);

pub fn run(seed: u64) -> Result<(), String> {
    let (cols, rows) = crossterm::terminal::size().map_err(|e| format!("terminal error: {e}"))?;
    let (width, height) = views::canvas_extent(Rect::new(0, 0, cols, rows));
    let mut app = App::new(seed, width, height)?;

    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    let mut last_frame = Instant::now();
    loop {
        terminal
            .draw(|frame| views::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = FRAME.saturating_sub(last_frame.elapsed());
        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            match event::read().map_err(|e| format!("event error: {e}"))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= FRAME {
            let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            app.frame(ms);
            last_frame = Instant::now();
        }
    }
}
