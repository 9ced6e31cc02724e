/*
[INPUT]:  AppState surfaces, form state, and log buffer
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or removing panes
*/

mod form;
mod layout;
mod loans;
mod logs;
mod output;

pub(in crate::tui) use form::draw_form;
pub(in crate::tui) use layout::draw_tabs;
pub(in crate::tui) use loans::draw_loans;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use output::draw_output;
