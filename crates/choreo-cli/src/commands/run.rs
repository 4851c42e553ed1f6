use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use choreo_core::ChoreoConfig;
use choreo_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{SectionsWidget, StatusBarWidget},
    Theme,
};

pub fn run(config: ChoreoConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Choreo"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the loop, then restore the terminal whether it returned
    // cleanly or bailed on an error.
    let result = event_loop(&mut terminal, config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: ChoreoConfig) -> Result<()> {
    let theme = Theme::default();
    let size = terminal.size()?;
    // Status bar takes one row off the section area.
    let mut app = App::new(config, size.width, size.height.saturating_sub(1));

    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms, app.config.ui.animation_fps);

    // Track if we need the high frame rate for pending scroll input.
    // Checked at the END of each iteration for the NEXT iteration.
    let mut needs_fast_update = false;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: sections + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);

            SectionsWidget::render(frame, main_layout[0], &app, &theme);
            StatusBarWidget::render(frame, main_layout[1], &app, &theme);
        })?;

        if let Some(event) = event_handler.next(needs_fast_update)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    app.apply(action);
                }
                AppEvent::ScrollDown => app.tracker.scroll_by(app.config.ui.scroll_step_px),
                AppEvent::ScrollUp => app.tracker.scroll_by(-app.config.ui.scroll_step_px),
                AppEvent::Resize(cols, rows) => {
                    app.resize(cols, rows.saturating_sub(1));
                }
                AppEvent::Tick => {}
            }
        }

        app.tick();
        needs_fast_update = app.is_animating();

        if app.should_quit {
            return Ok(());
        }
    }
}
