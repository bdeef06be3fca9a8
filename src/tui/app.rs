use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::io::opener;
use crate::model::{AppConfig, ExpenseForm, FormField, Item, Link, Trip};
use crate::ops::itinerary_ops::ItineraryState;
use crate::ops::ledger_ops::Ledger;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Itinerary,
    Reference,
    /// Expense ledger (only when enabled in config)
    Ledger,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Itinerary => "Itinerary",
            View::Reference => "Reference",
            View::Ledger => "Expenses",
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the expense form
    Form,
}

/// Clickable screen regions recorded during the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(View),
    Day(usize),
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-shot message in the status row, cleared by the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub type LinkOpener = Box<dyn FnMut(&str) -> io::Result<()>>;

/// Main application state
pub struct App {
    pub trip: Trip,
    pub config: AppConfig,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Selected day and open detail overlay
    pub itinerary: ItineraryState,
    /// Cursor into the selected day's items
    pub item_cursor: usize,
    /// First visible row of the item list
    pub item_scroll: usize,
    pub detail_scroll: usize,
    /// Where the detail overlay was drawn; clicks outside it close the overlay
    pub detail_area: Option<Rect>,
    pub reference_scroll: usize,
    pub ledger: Ledger,
    pub form: ExpenseForm,
    pub form_field: FormField,
    /// Cursor into the ledger entries (newest first)
    pub ledger_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    pub status: Option<StatusMessage>,
    pub hitboxes: Vec<(Rect, Hit)>,
    opener: LinkOpener,
}

impl App {
    pub fn new(trip: Trip, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        let form = ExpenseForm::new(config.ledger.default_payer.clone());
        let ledger = Ledger::new(config.ledger.default_payer.clone());
        App {
            trip,
            config,
            theme,
            view: View::Itinerary,
            mode: Mode::Navigate,
            should_quit: false,
            itinerary: ItineraryState::new(),
            item_cursor: 0,
            item_scroll: 0,
            detail_scroll: 0,
            detail_area: None,
            reference_scroll: 0,
            ledger,
            form,
            form_field: FormField::default(),
            ledger_cursor: 0,
            show_help: false,
            status: None,
            hitboxes: Vec::new(),
            opener: Box::new(opener::open_link),
        }
    }

    /// Replace the link opener (tests record URLs instead of spawning)
    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Views shown in the tab bar, in order
    pub fn views(&self) -> Vec<View> {
        let mut views = vec![View::Itinerary, View::Reference];
        if self.config.ledger.enabled {
            views.push(View::Ledger);
        }
        views
    }

    pub fn switch_view(&mut self, view: View) {
        if !self.views().contains(&view) {
            return;
        }
        if self.view != view {
            tracing::debug!(from = ?self.view, to = ?view, "switch view");
        }
        self.view = view;
        self.mode = Mode::Navigate;
    }

    /// Cycle through the visible views (`forward` = Tab, else Shift-Tab)
    pub fn cycle_view(&mut self, forward: bool) {
        let views = self.views();
        let pos = views.iter().position(|v| *v == self.view).unwrap_or(0);
        let next = if forward {
            (pos + 1) % views.len()
        } else {
            (pos + views.len() - 1) % views.len()
        };
        self.switch_view(views[next]);
    }

    // -- itinerary ----------------------------------------------------------

    pub fn current_items(&self) -> &[Item] {
        self.itinerary.current_items(&self.trip)
    }

    pub fn cursor_item(&self) -> Option<&Item> {
        self.current_items().get(self.item_cursor)
    }

    pub fn select_day(&mut self, index: usize) {
        if index >= self.trip.day_count() || index == self.itinerary.selected_day() {
            return;
        }
        self.itinerary.select_day(&self.trip, index);
        self.item_cursor = 0;
        self.item_scroll = 0;
    }

    pub fn select_prev_day(&mut self) {
        if let Some(prev) = self.itinerary.selected_day().checked_sub(1) {
            self.select_day(prev);
        }
    }

    pub fn select_next_day(&mut self) {
        self.select_day(self.itinerary.selected_day() + 1);
    }

    pub fn move_item_cursor(&mut self, delta: isize) {
        let len = self.current_items().len();
        if len == 0 {
            return;
        }
        let next = self.item_cursor.saturating_add_signed(delta);
        self.item_cursor = next.min(len - 1);
    }

    /// Open the detail overlay for the item at `index` in the selected day
    pub fn open_item_at(&mut self, index: usize) {
        let Some(item) = self.current_items().get(index).cloned() else {
            return;
        };
        self.item_cursor = index;
        tracing::debug!(item = %item.id, "open detail");
        self.itinerary.open_detail(&item);
        self.detail_scroll = 0;
    }

    pub fn close_detail(&mut self) {
        self.itinerary.close_detail();
        self.detail_area = None;
        self.detail_scroll = 0;
    }

    /// Links of the open item, numbered from 1 in display order
    pub fn detail_links(&self) -> Vec<Link> {
        self.itinerary
            .open_item()
            .map(Item::links)
            .unwrap_or_default()
    }

    // -- links --------------------------------------------------------------

    pub fn open_link(&mut self, label: &str, url: &str) {
        match (self.opener)(url) {
            Ok(()) => self.set_status(format!("opened {}", label), StatusKind::Info),
            Err(e) => {
                tracing::warn!(url, error = %e, "could not open link");
                self.set_status(format!("could not open link: {}", e), StatusKind::Error);
            }
        }
    }

    /// Open the `n`th (1-based) link of the open item
    pub fn open_detail_link(&mut self, n: usize) {
        let links = self.detail_links();
        if let Some(link) = n.checked_sub(1).and_then(|i| links.get(i)) {
            self.open_link(&link.label, &link.url);
        }
    }

    /// Open the `n`th (1-based) essential in the reference view
    pub fn open_essential(&mut self, n: usize) {
        let Some(essential) = n
            .checked_sub(1)
            .and_then(|i| self.trip.essentials.get(i))
            .cloned()
        else {
            return;
        };
        self.open_link(&essential.title, &essential.url);
    }

    // -- ledger -------------------------------------------------------------

    pub fn begin_form(&mut self) {
        if self.config.ledger.enabled {
            self.mode = Mode::Form;
        }
    }

    /// Submit the expense form. Rejections leave the ledger and the form
    /// untouched and only report the reason.
    pub fn submit_form(&mut self) {
        match self.ledger.add_entry(&mut self.form, Local::now()) {
            Ok(entry) => {
                let text = format!("added {}", entry.description);
                self.ledger_cursor = 0;
                self.form_field = FormField::Description;
                self.set_status(text, StatusKind::Info);
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "expense rejected");
                self.set_status(rejection.to_string(), StatusKind::Error);
            }
        }
    }

    pub fn delete_cursor_entry(&mut self) {
        let Some(id) = self
            .ledger
            .entries()
            .get(self.ledger_cursor)
            .map(|e| e.id.clone())
        else {
            return;
        };
        if let Some(removed) = self.ledger.remove_entry(&id) {
            self.set_status(format!("removed {}", removed.description), StatusKind::Info);
        }
        let len = self.ledger.len();
        if self.ledger_cursor >= len {
            self.ledger_cursor = len.saturating_sub(1);
        }
    }

    pub fn move_ledger_cursor(&mut self, delta: isize) {
        let len = self.ledger.len();
        if len == 0 {
            return;
        }
        self.ledger_cursor = self.ledger_cursor.saturating_add_signed(delta).min(len - 1);
    }

    // -- status / hit testing ----------------------------------------------

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// The clickable region under a screen cell, if any
    pub fn hit_at(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        self.hitboxes
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, hit)| *hit)
    }
}

/// Run the TUI application
pub fn run(trip: Trip, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(trip, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
