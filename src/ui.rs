//! Selector rendering
//!
//! Renders the interactive checklist: title bar, the component list with
//! checkbox glyphs and dependency annotations, and a footer with key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::SelectorApp;
use crate::theme::{Colors, Styles};

/// Render the full selector screen.
pub fn render_selector(f: &mut Frame, app: &SelectorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Checklist
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    let title = Paragraph::new("Component Installer - Interactive Mode")
        .style(Styles::title())
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Colors::BORDER)));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = app
        .items()
        .iter()
        .enumerate()
        .map(|(index, component)| {
            let is_cursor = index == app.cursor();
            let is_selected = app.is_selected(*component);

            let prefix = if is_cursor { "▸ " } else { "  " };
            let checkbox = if is_selected { "☑" } else { "☐" };
            let row_style = if is_cursor {
                Styles::cursor_row()
            } else if is_selected {
                Styles::selected_row()
            } else {
                Styles::plain_row()
            };

            let mut spans = vec![Span::styled(
                format!("{prefix}{checkbox} {component}"),
                row_style,
            )];
            if !component.dependencies().is_empty() {
                let deps = component
                    .dependencies()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                spans.push(Span::styled(format!("  (requires: {deps})"), Styles::hint()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::BORDER))
            .title(" Select Components ")
            .title_style(Styles::title()),
    );
    f.render_widget(list, chunks[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Styles::cursor_row()),
        Span::styled(" move  ", Styles::hint()),
        Span::styled("Space", Styles::cursor_row()),
        Span::styled(" toggle  ", Styles::hint()),
        Span::styled("Enter", Styles::cursor_row()),
        Span::styled(" install  ", Styles::hint()),
        Span::styled("q", Styles::cursor_row()),
        Span::styled(" quit   ", Styles::hint()),
        Span::styled(
            format!("Selected: {}", app.selected().len()),
            Styles::plain_row(),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Colors::BORDER)));
    f.render_widget(footer, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_render_selector_smoke() {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = SelectorApp::new();
        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));

        terminal.draw(|f| render_selector(f, &app)).unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("Select Components"));
        assert!(rendered.contains("Selected: 1"));
    }
}
