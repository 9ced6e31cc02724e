/*
[INPUT]:  TabController state
[OUTPUT]: Tab bar widget
[POS]:    TUI tab bar rendering
[UPDATE]: When panels are added or renamed
*/

use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use lendbridge_console::TabController;

use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    tabs: &TabController,
) {
    let titles: Vec<Line> = tabs
        .tabs()
        .map(|(panel, _)| Line::from(format!("F{} {}", panel.index() + 1, panel.title())))
        .collect();

    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Lending"),
        )
        .highlight_style(header_style())
        .select(tabs.active().index());

    frame.render_widget(widget, area);
}
