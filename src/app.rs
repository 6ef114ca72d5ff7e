//! Interactive component selector
//!
//! A full-screen checklist over the fixed catalog: arrow keys move the
//! cursor, Space toggles membership in the selection set, Enter confirms,
//! `q` or Esc cancels with an empty set. The screen is redrawn on every
//! event tick via `terminal.draw`.

use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::catalog::Component;
use crate::error::Result;
use crate::ui;

/// Outcome of one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorResult {
    /// Keep looping
    Continue,
    /// Install the current selection
    Confirm,
    /// Leave with nothing selected
    Cancel,
}

/// State for the interactive checklist, threaded explicitly through the
/// event loop.
pub struct SelectorApp {
    items: Vec<Component>,
    cursor: usize,
    selected: Vec<Component>,
}

impl SelectorApp {
    pub fn new() -> Self {
        Self {
            items: Component::all(),
            cursor: 0,
            selected: Vec::new(),
        }
    }

    /// Catalog rows shown in the checklist, in declaration order.
    pub fn items(&self) -> &[Component] {
        &self.items
    }

    /// Index of the row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Components currently checked, in toggle order.
    pub fn selected(&self) -> &[Component] {
        &self.selected
    }

    pub fn is_selected(&self, component: Component) -> bool {
        self.selected.contains(&component)
    }

    /// Run the event loop until the user confirms or cancels.
    ///
    /// Returns the requested components in selection order; an empty vec
    /// means the user cancelled.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<Vec<Component>> {
        loop {
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        match self.handle_key(key_event) {
                            SelectorResult::Continue => {}
                            SelectorResult::Confirm => {
                                debug!(count = self.selected.len(), "selection confirmed");
                                return Ok(self.selected.clone());
                            }
                            SelectorResult::Cancel => {
                                debug!("selection cancelled");
                                return Ok(Vec::new());
                            }
                        }
                    }
                    // Resize is handled implicitly: the next draw uses the
                    // new frame area.
                    _ => {}
                }
            }

            terminal.draw(|f| ui::render_selector(f, self))?;
        }
    }

    /// Apply one key press to the selector state.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> SelectorResult {
        match key_event.code {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(self.items.len() - 1);
            }
            KeyCode::Char(' ') => {
                let component = self.items[self.cursor];
                if self.selected.contains(&component) {
                    self.selected.retain(|c| *c != component);
                } else {
                    self.selected.push(component);
                }
            }
            KeyCode::Enter => {
                // Enter with an empty selection is a no-op, not a cancel.
                if !self.selected.is_empty() {
                    return SelectorResult::Confirm;
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                return SelectorResult::Cancel;
            }
            _ => {}
        }
        SelectorResult::Continue
    }
}

impl Default for SelectorApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_cursor_movement_clamps_at_bounds() {
        let mut app = SelectorApp::new();
        assert_eq!(app.handle_key(press(KeyCode::Up)), SelectorResult::Continue);
        assert_eq!(app.cursor(), 0);

        for _ in 0..500 {
            app.handle_key(press(KeyCode::Down));
        }
        assert_eq!(app.cursor(), app.items().len() - 1);
    }

    #[test]
    fn test_space_toggles_selection() {
        let mut app = SelectorApp::new();
        let first = app.items()[0];

        app.handle_key(press(KeyCode::Char(' ')));
        assert!(app.is_selected(first));

        app.handle_key(press(KeyCode::Char(' ')));
        assert!(!app.is_selected(first));
        assert!(app.selected().is_empty());
    }

    #[test]
    fn test_enter_is_noop_with_empty_selection() {
        let mut app = SelectorApp::new();
        assert_eq!(
            app.handle_key(press(KeyCode::Enter)),
            SelectorResult::Continue
        );
    }

    #[test]
    fn test_enter_confirms_once_something_is_selected() {
        let mut app = SelectorApp::new();
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(
            app.handle_key(press(KeyCode::Enter)),
            SelectorResult::Confirm
        );
    }

    #[test]
    fn test_q_and_esc_cancel() {
        let mut app = SelectorApp::new();
        assert_eq!(
            app.handle_key(press(KeyCode::Char('q'))),
            SelectorResult::Cancel
        );
        assert_eq!(app.handle_key(press(KeyCode::Esc)), SelectorResult::Cancel);
    }

    #[test]
    fn test_selection_preserves_toggle_order() {
        let mut app = SelectorApp::new();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Char(' ')));
        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Char(' ')));

        let items = app.items().to_vec();
        assert_eq!(app.selected(), &[items[1], items[0]]);
    }
}
