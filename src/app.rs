use chrono::{DateTime, Local};
use ratatui::widgets::ListState;

use livescroll_feed::source::{FeedItem, LoadResult};

pub struct App {
    /// Items from the latest successful load, in feed order.
    pub items: Vec<FeedItem>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last load status message.
    pub status: String,
    /// When the current `items` arrived.
    pub last_loaded: Option<DateTime<Local>>,
    /// Feed URL, shown in the list title.
    pub source: String,
}

impl App {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            list_state: ListState::default(),
            quit: false,
            status: "Starting…".into(),
            last_loaded: None,
            source: source.into(),
        }
    }

    /// Apply the result of one load.
    ///
    /// A success replaces the whole list; a failure keeps the last good list
    /// on screen and only updates the status line.
    pub fn apply_load(&mut self, result: LoadResult, at: DateTime<Local>) {
        match result {
            Ok(items) => {
                self.status = format!("Loaded {} items", items.len());
                self.items = items;
                self.last_loaded = Some(at);
                self.clamp_selection();
            }
            Err(e) => {
                self.status = format!("Error: {e}");
            }
        }
    }

    fn clamp_selection(&mut self) {
        match self.list_state.selected() {
            _ if self.items.is_empty() => self.list_state.select(None),
            Some(i) if i >= self.items.len() => self.list_state.select(Some(self.items.len() - 1)),
            _ => {}
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livescroll_feed::source::LoadError;
    use url::Url;
    use uuid::Uuid;

    fn make_item(description: &str) -> FeedItem {
        FeedItem::new(
            Uuid::new_v4(),
            Some(description.to_string()),
            None,
            Url::parse("https://a-url.com/image.png").unwrap(),
        )
    }

    fn sample_items() -> Vec<FeedItem> {
        vec![make_item("First"), make_item("Second"), make_item("Third")]
    }

    fn loaded_app() -> App {
        let mut app = App::new("https://a-url.com/feed");
        app.apply_load(Ok(sample_items()), Local::now());
        app
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_empty() {
        let app = App::new("https://a-url.com/feed");
        assert!(app.items.is_empty());
        assert!(!app.quit);
        assert!(app.list_state.selected().is_none());
        assert!(app.last_loaded.is_none());
        assert_eq!(app.source, "https://a-url.com/feed");
    }

    // -- apply_load ----------------------------------------------------------

    #[test]
    fn successful_load_keeps_feed_order() {
        let items = sample_items();
        let mut app = App::new("feed");
        app.apply_load(Ok(items.clone()), Local::now());

        assert_eq!(app.items, items);
        assert_eq!(app.status, "Loaded 3 items");
        assert!(app.last_loaded.is_some());
    }

    #[test]
    fn successful_load_replaces_previous_items() {
        let mut app = loaded_app();
        let fresh = vec![make_item("Only")];

        app.apply_load(Ok(fresh.clone()), Local::now());

        assert_eq!(app.items, fresh);
    }

    #[test]
    fn empty_load_clears_items_and_selection() {
        let mut app = loaded_app();
        app.select_first();

        app.apply_load(Ok(vec![]), Local::now());

        assert!(app.items.is_empty());
        assert!(app.list_state.selected().is_none());
        assert_eq!(app.status, "Loaded 0 items");
    }

    #[test]
    fn shorter_load_clamps_selection() {
        let mut app = loaded_app();
        app.select_last(); // index 2

        app.apply_load(Ok(vec![make_item("A"), make_item("B")]), Local::now());

        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn failed_load_keeps_items_and_reports_error() {
        let mut app = loaded_app();
        let before = app.last_loaded;

        app.apply_load(Err(LoadError::Connectivity), Local::now());

        assert_eq!(app.items.len(), 3);
        assert_eq!(app.last_loaded, before);
        assert!(app.status.starts_with("Error: connectivity"));
    }

    #[test]
    fn invalid_data_is_reported() {
        let mut app = App::new("feed");
        app.apply_load(Err(LoadError::InvalidData), Local::now());
        assert!(app.status.starts_with("Error: invalid data"));
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn select_next_on_empty_is_noop() {
        let mut app = App::new("feed");
        app.select_next();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_previous_on_empty_is_noop() {
        let mut app = App::new("feed");
        app.select_previous();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_first_on_empty_is_noop() {
        let mut app = App::new("feed");
        app.select_first();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_last_on_empty_is_noop() {
        let mut app = App::new("feed");
        app.select_last();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_next_starts_at_zero_then_advances() {
        let mut app = loaded_app();

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_next_clamps_at_last_item() {
        let mut app = loaded_app();

        app.select_last();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_previous_clamps_at_zero() {
        let mut app = loaded_app();

        app.select_first();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn select_previous_moves_up() {
        let mut app = loaded_app();

        app.select_last(); // index 2
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
    }
}
