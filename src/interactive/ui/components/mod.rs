pub mod help_dialog;
pub mod list_item;
pub mod list_viewer;
pub mod result_detail;
pub mod result_list;
pub mod search_bar;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod list_item_test;
#[cfg(test)]
mod result_detail_test;

use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Whether a status message is the pending double Ctrl+C prompt.
pub fn is_exit_prompt(message: &str) -> bool {
    message == EXIT_PROMPT
}
