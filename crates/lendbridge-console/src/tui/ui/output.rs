/*
[INPUT]:  OutputSurface text and error flag
[OUTPUT]: Response pane showing the last API result
[POS]:    TUI output pane rendering
[UPDATE]: When response display changes
*/

use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use lendbridge_console::render::OutputSurface;

use crate::tui::runtime::{border_style, error_style};

pub(in crate::tui) fn draw_output(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    output: &OutputSurface,
) {
    let (title, style) = if output.is_error() {
        ("Response (error)", error_style())
    } else {
        ("Response", Style::default())
    };

    let widget = Paragraph::new(output.text().to_string())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        );
    frame.render_widget(widget, area);
}
