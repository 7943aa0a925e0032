use super::list_item::ListItem;
use crate::interactive::constants::{CARD_INDENT, PAGE_SIZE, TRUNCATED_BIO_LINES};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph, Wrap},
};

/// Scrollable list of variable-height cards with a single selection.
pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub truncation_enabled: bool,
    pub title: String,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(title: String, empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            truncation_enabled: true,
            title,
            empty_message,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn set_truncation_enabled(&mut self, enabled: bool) {
        self.truncation_enabled = enabled;
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn items_count(&self) -> usize {
        self.items.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        let moved = new_index != self.selected_index;
        self.selected_index = new_index;
        moved
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        let moved = new_index != self.selected_index;
        self.selected_index = new_index;
        moved
    }

    pub fn move_to_start(&mut self) -> bool {
        let moved = self.selected_index > 0;
        self.selected_index = 0;
        self.scroll_offset = 0;
        moved
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        let moved = self.selected_index < last_index;
        self.selected_index = last_index;
        moved
    }

    fn body_limit(&self) -> Option<usize> {
        self.truncation_enabled.then_some(TRUNCATED_BIO_LINES)
    }

    fn text_width(area_width: u16) -> usize {
        (area_width.saturating_sub(2) as usize).saturating_sub(CARD_INDENT)
    }

    fn card_height(&self, index: usize, text_width: usize) -> usize {
        self.items
            .get(index)
            .map(|item| {
                item.create_card_lines(index + 1, text_width, self.body_limit())
                    .len()
            })
            .unwrap_or(0)
    }

    /// Cards `start..end` that fit in `available_height` lines when drawing
    /// from `scroll_offset`. At least one card is always included.
    pub fn calculate_visible_range(&self, available_height: u16, area_width: u16) -> (usize, usize) {
        let text_width = Self::text_width(area_width);
        let start = self.scroll_offset.min(self.items.len());
        let mut used = 0;
        let mut end = start;

        while end < self.items.len() {
            let height = self.card_height(end, text_width);
            if end > start && used + height > available_height as usize {
                break;
            }
            used += height;
            end += 1;
        }

        (start, end)
    }

    /// Move `scroll_offset` just far enough that the selected card is drawn.
    pub fn adjust_scroll_offset(&mut self, available_height: u16, area_width: u16) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
            return;
        }

        while self.scroll_offset < self.selected_index {
            let (_, end) = self.calculate_visible_range(available_height, area_width);
            if self.selected_index < end {
                break;
            }
            self.scroll_offset += 1;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .block(Block::default().title(self.title.clone()).borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true });
            f.render_widget(empty_message, area);
            return;
        }

        let available_height = area.height.saturating_sub(2);
        self.adjust_scroll_offset(available_height, area.width);
        let (start, end) = self.calculate_visible_range(available_height, area.width);
        let text_width = Self::text_width(area.width);

        let items: Vec<TuiListItem> = (start..end)
            .filter_map(|i| {
                self.items.get(i).map(|item| {
                    let style = if i == self.selected_index {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    TuiListItem::new(item.create_card_lines(i + 1, text_width, self.body_limit()))
                        .style(style)
                })
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.items_count()
        );

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

        f.render_widget(list, area);
    }
}
