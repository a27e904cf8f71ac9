// Module declarations
pub mod widgets;
pub mod components;

pub mod action;
pub mod component;
pub mod keys;
pub mod layout;
pub mod reducer;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use component::{Component, Effect, Element};
pub use keys::{key_to_action, mouse_to_action, paste_to_action};
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use crate::config::Config;
use crate::measure::CellMeasurer;

/// Main entry point for TUI mode
pub async fn run(config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
) -> Result<(), io::Error> {
    let mut runtime = Runtime::new(AppState::from_config(config), Arc::new(CellMeasurer));

    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    // Main loop
    loop {
        // Apply changes reported by editors before drawing
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }
        if runtime.state().system.should_quit {
            tracing::debug!("ACTION: Quitting application");
            break;
        }

        // Render
        terminal.draw(|f| {
            let area = f.area();
            runtime.set_viewport(area);

            // Build virtual tree from current state
            let element = runtime.build();

            // Render virtual tree to ratatui buffer
            let mut renderer = Renderer::new();
            renderer.render(&element, area, f.buffer_mut());

            #[cfg(feature = "development")]
            if screenshot_requested {
                screenshot_requested = false;
                let filename = crate::dev::screenshot::screenshot_filename(chrono::Local::now());
                if let Err(e) = crate::dev::screenshot::save_buffer_screenshot(f.buffer_mut(), area, &filename) {
                    tracing::error!("Failed to save screenshot: {}", e);
                } else {
                    tracing::info!("Screenshot saved to {}", filename);
                }
            }
        })?;

        // Effect pass: owner values and text field widths
        if runtime.run_effects() {
            tracing::debug!("LOOP: Effects changed state, rendering again");
            continue;
        }

        // Poll for input events
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                #[cfg(feature = "development")]
                {
                    use crossterm::event::{KeyCode, KeyModifiers};
                    if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                        tracing::info!("Screenshot requested via Shift-S");
                        screenshot_requested = true;
                        continue;
                    }
                }

                key_to_action(key, runtime.state(), runtime.focused_view())
            }
            Event::Mouse(mouse) => mouse_to_action(mouse),
            Event::Paste(text) => paste_to_action(text, runtime.state()),
            _ => None,
        };

        if let Some(action) = action {
            runtime.dispatch(action);
        }
    }

    Ok(())
}
