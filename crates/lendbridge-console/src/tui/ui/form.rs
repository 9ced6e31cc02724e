/*
[INPUT]:  FormState of the active panel
[OUTPUT]: Form pane with labelled fields and the focused field highlighted
[POS]:    TUI form pane rendering
[UPDATE]: When form field layout changes
*/

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use lendbridge_console::form::FormState;

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_form(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    form: &FormState,
) {
    let mut lines: Vec<Line> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let style = if index == form.focus() {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{:>15}: ", field.label())),
                Span::styled(field.value.clone(), style),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Submit",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(form.panel().title()),
    );
    frame.render_widget(widget, area);
}
