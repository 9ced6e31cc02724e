/*
[INPUT]:  ListSurface content
[OUTPUT]: Loan summary list or empty-state message
[POS]:    TUI loans pane rendering
[UPDATE]: When loan summary layout changes
*/

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use lendbridge_console::render::{EMPTY_LOANS_MESSAGE, ListContent, ListSurface};

use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_loans(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    list: &ListSurface,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Loans");

    match list.content() {
        ListContent::Blank => frame.render_widget(block, area),
        ListContent::Empty => {
            let widget = Paragraph::new(EMPTY_LOANS_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(widget, area);
        }
        ListContent::Loans(loans) => {
            let items: Vec<ListItem> = loans
                .iter()
                .map(|loan| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                loan.title.clone(),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(" • "),
                            Span::raw(loan.amount.clone()),
                        ]),
                        Line::from(vec![
                            Span::raw(loan.rate.clone()),
                            Span::raw(" • "),
                            Span::raw(loan.installment.clone()),
                        ]),
                    ])
                })
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}
