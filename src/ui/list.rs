//! Titled, navigable list of entries.
//!
//! The wizard only talks to the [`SelectionList`] trait: it sets items and a
//! title, moves or reads the highlight, and never styles anything itself.
//! [`MenuList`] is the ratatui implementation used by the application.

use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Rows skipped by a page movement
const PAGE_SIZE: usize = 10;

/// One list row: a label and an optional secondary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub title: String,
    pub description: Option<String>,
}

impl ListEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

/// Highlight movements handled entirely by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

/// Presentation surface driven by the wizard.
pub trait SelectionList {
    /// Replace all entries; the highlight moves to the first entry.
    fn set_items(&mut self, items: Vec<ListEntry>);

    fn set_title(&mut self, title: String);

    /// Index of the highlighted entry, `None` when the list is empty.
    fn selected(&self) -> Option<usize>;

    /// Highlight `index`, clamped to the last entry.
    fn select(&mut self, index: usize);

    fn move_selection(&mut self, movement: Movement);

    /// Draw the list into `area`.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// ratatui-backed [`SelectionList`].
#[derive(Debug, Default)]
pub struct MenuList {
    title: String,
    items: Vec<ListEntry>,
    state: ListState,
}

impl MenuList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[ListEntry] {
        &self.items
    }

    fn to_list_item(entry: &ListEntry) -> ListItem<'static> {
        let mut lines = vec![Line::from(Span::styled(
            entry.title.clone(),
            Style::default()
                .fg(Colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(description) = &entry.description {
            lines.push(Line::from(Span::styled(
                format!("  {}", description),
                Style::default().fg(Colors::FG_MUTED),
            )));
        }
        ListItem::new(lines)
    }
}

impl SelectionList for MenuList {
    fn set_items(&mut self, items: Vec<ListEntry>) {
        self.items = items;
        self.state
            .select(if self.items.is_empty() { None } else { Some(0) });
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn selected(&self) -> Option<usize> {
        self.state
            .selected()
            .filter(|_| !self.items.is_empty())
            .map(|i| i.min(self.items.len() - 1))
    }

    fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    fn move_selection(&mut self, movement: Movement) {
        let Some(current) = self.selected() else {
            return;
        };
        let last = self.items.len() - 1;
        let next = match movement {
            Movement::Up => current.saturating_sub(1),
            Movement::Down => (current + 1).min(last),
            Movement::PageUp => current.saturating_sub(PAGE_SIZE),
            Movement::PageDown => (current + PAGE_SIZE).min(last),
            Movement::First => 0,
            Movement::Last => last,
        };
        self.state.select(Some(next));
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self.items.iter().map(Self::to_list_item).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
                    .title(Span::styled(format!(" {} ", self.title), Styles::title())),
            )
            .highlight_style(Styles::selected())
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(n: usize) -> MenuList {
        let mut list = MenuList::new();
        list.set_items((0..n).map(|i| ListEntry::new(format!("item {}", i))).collect());
        list
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list = MenuList::new();
        list.set_items(Vec::new());
        assert_eq!(list.selected(), None);
        list.move_selection(Movement::Down);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_set_items_highlights_first() {
        let mut list = list_of(3);
        list.select(2);
        list.set_items(vec![ListEntry::new("a"), ListEntry::new("b")]);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_movement_is_clamped() {
        let mut list = list_of(3);
        list.move_selection(Movement::Up);
        assert_eq!(list.selected(), Some(0));

        list.move_selection(Movement::Down);
        list.move_selection(Movement::Down);
        list.move_selection(Movement::Down);
        assert_eq!(list.selected(), Some(2));

        list.move_selection(Movement::First);
        assert_eq!(list.selected(), Some(0));
        list.move_selection(Movement::Last);
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_page_movement() {
        let mut list = list_of(25);
        list.move_selection(Movement::PageDown);
        assert_eq!(list.selected(), Some(10));
        list.move_selection(Movement::PageDown);
        list.move_selection(Movement::PageDown);
        assert_eq!(list.selected(), Some(24));
        list.move_selection(Movement::PageUp);
        assert_eq!(list.selected(), Some(14));
    }

    #[test]
    fn test_select_clamps_to_last() {
        let mut list = list_of(2);
        list.select(7);
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_render_into_test_backend() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut list = list_of(2);
        list.set_title("Select Display".to_string());

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).expect("terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                list.render(f, area);
            })
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Select Display"));
        assert!(text.contains(">> item 0"));
    }
}
