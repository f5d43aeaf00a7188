//! The full-screen storefront view.
//!
//! One table of products with slash search and category cycling, a
//! toggleable cart panel, a non-blocking detail pane, a help overlay,
//! and the contact dialog. Key bindings: j/k navigate, / search,
//! c/C category, a add, +/- quantity, t cart, Enter details, m contact,
//! ? help, q quit.

use super::contact::{ContactDialog, ContactDialogAction};
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use stall_core::action::{Action, Outcome, ProductDetails};
use stall_core::render::{EMPTY_CART_ROW, ProductCard};
use stall_core::storefront::Storefront;
use std::time::{Duration, Instant};

/// How long transient status messages stay visible.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Placeholder shown in the image column while a slot is pending.
const IMAGE_PENDING: &str = "… loading";

// ---------------------------------------------------------------------------
// Application input modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum InputMode {
    #[default]
    Normal,
    /// User is typing a search query.
    Search,
    /// Contact dialog is open.
    Contact,
    /// Help overlay is open.
    Help,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Main application state for the storefront view.
pub struct StorefrontApp {
    /// The stores plus dispatcher.
    front: Storefront,
    /// Table navigation state (selected row in the filtered grid).
    table_state: TableState,
    /// Current input mode.
    input_mode: InputMode,
    /// Buffer for the search query being typed.
    search_buf: String,
    /// Query value before entering Search mode (for Esc cancel).
    search_prev_query: String,
    /// Whether the right-side detail pane is open.
    show_detail: bool,
    /// Details payload for the open pane.
    detail: Option<ProductDetails>,
    /// Contact dialog state; kept across open/close so typed fields
    /// survive like a real page form.
    contact: ContactDialog,
    /// Transient status message.
    status_msg: Option<(String, Instant)>,
    /// Whether to quit.
    should_quit: bool,
}

impl StorefrontApp {
    #[must_use]
    pub fn new(front: Storefront) -> Self {
        let mut app = Self {
            front,
            table_state: TableState::default(),
            input_mode: InputMode::default(),
            search_buf: String::new(),
            search_prev_query: String::new(),
            show_detail: false,
            detail: None,
            contact: ContactDialog::default(),
            status_msg: None,
            should_quit: false,
        };
        app.clamp_selection();
        app
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn front(&self) -> &Storefront {
        &self.front
    }

    pub(crate) fn front_mut(&mut self) -> &mut Storefront {
        &mut self.front
    }

    fn grid_len(&self) -> usize {
        self.front.view().filter(self.front.catalog()).len()
    }

    fn selected_id(&self) -> Option<String> {
        let idx = self.table_state.selected()?;
        self.front
            .view()
            .filter(self.front.catalog())
            .get(idx)
            .map(|p| p.id.clone())
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_msg = Some((msg.into(), Instant::now()));
    }

    /// Expire stale status messages.
    pub fn tick(&mut self) {
        if let Some((_, since)) = &self.status_msg {
            if since.elapsed() > STATUS_TTL {
                self.status_msg = None;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    fn clamp_selection(&mut self) {
        let len = self.grid_len();
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None if len > 0 => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let len = self.grid_len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| if i + 1 >= len { len - 1 } else { i + 1 });
        self.table_state.select(Some(i));
        self.refresh_detail();
    }

    fn select_prev(&mut self) {
        let len = self.grid_len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(i));
        self.refresh_detail();
    }

    fn select_first(&mut self) {
        if self.grid_len() > 0 {
            self.table_state.select(Some(0));
            self.refresh_detail();
        }
    }

    fn select_last(&mut self) {
        let len = self.grid_len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
            self.refresh_detail();
        }
    }

    /// Re-derive the detail payload for the current selection while the
    /// pane is open.
    fn refresh_detail(&mut self) {
        if !self.show_detail {
            return;
        }
        self.detail = self.selected_id().and_then(|id| {
            match self.front.apply(&Action::ShowDetails(id)) {
                Outcome::Details(details) => Some(details),
                _ => None,
            }
        });
    }

    // -----------------------------------------------------------------------
    // Key event handling
    // -----------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Contact => self.handle_contact_key(key),
            InputMode::Help => self.handle_help_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Quit
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),

            // Search
            KeyCode::Char('/') => {
                self.search_prev_query = self.front.view().query().to_string();
                self.search_buf = self.search_prev_query.clone();
                self.input_mode = InputMode::Search;
            }

            // Category cycling
            KeyCode::Char('c') => self.cycle_category(true),
            KeyCode::Char('C') => self.cycle_category(false),

            // Cart panel
            KeyCode::Char('t') => {
                if let Outcome::PanelToggled { open } = self.front.apply(&Action::ToggleCart) {
                    self.set_status(if open { "Cart shown" } else { "Cart hidden" });
                }
            }

            // Cart mutations on the selected product
            KeyCode::Char('a') => self.apply_to_selection(SelectionAction::Add),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.apply_to_selection(SelectionAction::Increment);
            }
            KeyCode::Char('-') => self.apply_to_selection(SelectionAction::Decrement),

            // Detail pane
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.open_detail(),
            KeyCode::Char('h') | KeyCode::Left if self.show_detail => self.close_detail(),

            // Contact dialog
            KeyCode::Char('m') => self.input_mode = InputMode::Contact,

            // Help overlay
            KeyCode::Char('?') => self.input_mode = InputMode::Help,

            // Close panes / clear filters
            KeyCode::Esc => {
                if self.show_detail {
                    self.close_detail();
                } else if !self.front.view().is_default() {
                    self.front.clear_filters();
                    self.clamp_selection();
                    self.set_status("Filters cleared");
                }
            }

            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search_buf = self.search_prev_query.clone();
                self.front.set_query(&self.search_prev_query.clone());
                self.clamp_selection();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.search_buf.pop();
                self.front.set_query(&self.search_buf.clone());
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                self.search_buf.push(c);
                self.front.set_query(&self.search_buf.clone());
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        match self.contact.handle_key(key) {
            ContactDialogAction::None => {}
            ContactDialogAction::Cancel => {
                self.input_mode = InputMode::Normal;
            }
            ContactDialogAction::Submitted(status) => {
                self.set_status(status.message());
                if status.is_success() {
                    self.input_mode = InputMode::Normal;
                }
            }
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
        ) {
            self.input_mode = InputMode::Normal;
        }
    }

    fn cycle_category(&mut self, forward: bool) {
        let options = self.front.catalog().category_options();
        if options.is_empty() {
            return;
        }
        let current = self.front.view().category().value().to_string();
        let idx = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % options.len()
        } else {
            (idx + options.len() - 1) % options.len()
        };
        self.front.set_category(&options[next]);
        self.clamp_selection();
        let label = self.front.view().category().label();
        self.set_status(format!("Category: {label}"));
    }

    fn apply_to_selection(&mut self, which: SelectionAction) {
        let Some(id) = self.selected_id() else {
            self.set_status("No product selected");
            return;
        };
        let title = self
            .front
            .catalog()
            .get(&id)
            .map_or_else(|| id.clone(), |p| p.title.clone());

        let action = match which {
            SelectionAction::Add => Action::Add(id),
            SelectionAction::Increment => Action::Increment(id),
            SelectionAction::Decrement => Action::Decrement(id),
        };

        match self.front.apply(&action) {
            Outcome::CartChanged => {
                let panel = self.front.panel();
                match which {
                    SelectionAction::Add => {
                        self.set_status(format!("Added {title} · total {}", panel.total));
                    }
                    SelectionAction::Increment | SelectionAction::Decrement => {
                        self.set_status(format!("{title} · total {}", panel.total));
                    }
                }
            }
            Outcome::Ignored => self.set_status(format!("{title} is not in the cart")),
            _ => {}
        }
    }

    fn open_detail(&mut self) {
        self.show_detail = true;
        self.refresh_detail();
        if self.detail.is_none() {
            self.show_detail = false;
        }
    }

    fn close_detail(&mut self) {
        self.show_detail = false;
        self.detail = None;
    }
}

#[derive(Debug, Clone, Copy)]
enum SelectionAction {
    Add,
    Increment,
    Decrement,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Truncate a string to at most `max_chars`, appending '…' if truncated.
fn truncate(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let truncated: String = chars[..max_chars.saturating_sub(1)].iter().collect();
        format!("{truncated}…")
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

fn build_card_row(card: &ProductCard, width: u16) -> Row<'static> {
    let image_cell = card
        .image
        .clone()
        .unwrap_or_else(|| IMAGE_PENDING.to_string());
    let image_budget = (width / 3) as usize;
    Row::new([
        Cell::from(Span::styled(
            card.title.clone(),
            Style::default().fg(Color::White),
        )),
        Cell::from(Span::styled(
            card.category.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Cell::from(Span::styled(
            card.price.clone(),
            Style::default().fg(Color::Green),
        )),
        Cell::from(Span::styled(
            truncate(&image_cell, image_budget),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn render_grid(frame: &mut ratatui::Frame<'_>, app: &mut StorefrontApp, area: Rect) {
    // Feed last frame's scroll offset to the lazy loader before deriving
    // the cards; each observation is idempotent per placeholder.
    let viewport_rows = area.height.saturating_sub(3) as usize; // borders + header
    let offset = app.table_state.offset();
    app.front_mut().observe_grid(offset, viewport_rows);

    let cards = app.front().cards();
    let rows: Vec<Row<'static>> = cards
        .iter()
        .map(|card| build_card_row(card, area.width))
        .collect();

    let header = Row::new(["Title", "Category", "Price", "Image"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let title = format!(" Products ({}) ", cards.len());
    let table = Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Min(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(title),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_cart_panel(frame: &mut ratatui::Frame<'_>, app: &StorefrontApp, area: Rect) {
    let panel = app.front().panel();
    let mut lines: Vec<Line<'static>> = Vec::new();

    if panel.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_CART_ROW,
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for line in &panel.lines {
            lines.push(Line::from(vec![
                Span::styled(line.title.clone(), Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} × {}", line.unit_price, line.quantity),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(line.line_total.clone(), Style::default().fg(Color::Green)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            panel.total.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" Cart ({}) ", panel.count));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn render_detail_panel(frame: &mut ratatui::Frame<'_>, app: &StorefrontApp, area: Rect) {
    let Some(detail) = &app.detail else {
        return;
    };

    let in_cart = app.front().cart().quantity(&detail.id);
    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.category.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Price: ", Style::default().fg(Color::DarkGray)),
            Span::styled(detail.price.clone(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
            Span::raw(detail.image.clone()),
        ]),
    ];
    if in_cart > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("In cart: ", Style::default().fg(Color::DarkGray)),
            Span::raw(in_cart.to_string()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .title(" Details ");
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn render_help_overlay(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let hotkeys = [
        ("j / k", "move selection"),
        ("/", "search titles"),
        ("c / C", "cycle category"),
        ("a", "add selected to cart"),
        ("+ / -", "change quantity"),
        ("t", "toggle cart panel"),
        ("Enter", "product details"),
        ("m", "contact form"),
        ("Esc", "close pane / clear filters"),
        ("q", "quit"),
    ];

    let lines: Vec<Line<'static>> = hotkeys
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:<8}"), Style::default().fg(Color::Cyan)),
                Span::raw((*what).to_string()),
            ])
        })
        .collect();

    let popup = centered_rect(44, hotkeys.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title(" Help "),
        ),
        popup,
    );
}

fn render_contact_dialog(frame: &mut ratatui::Frame<'_>, app: &StorefrontApp, area: Rect) {
    use super::contact::ContactField;

    let dialog = &app.contact;
    let field_style = |field: ContactField| {
        if dialog.focus() == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name:    ", field_style(ContactField::Name)),
            Span::raw(dialog.name_display()),
        ]),
        Line::from(vec![
            Span::styled("Email:   ", field_style(ContactField::Email)),
            Span::raw(dialog.email_display()),
        ]),
        Line::from(Span::styled(
            "Message:",
            field_style(ContactField::Message),
        )),
    ];
    for line in dialog.message_display() {
        lines.push(Line::from(format!("  {line}")));
    }
    lines.push(Line::from(""));
    if let Some(status) = dialog.status() {
        let color = if status.is_success() {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(Span::styled(
            status.message(),
            Style::default().fg(color),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab next field · Ctrl-S send · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect(56, height, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .title(" Contact us "),
            )
            .wrap(Wrap { trim: false }),
        popup,
    );
}

fn build_filter_bar(app: &StorefrontApp) -> Line<'static> {
    let searching = app.input_mode == InputMode::Search;
    let query = if searching {
        app.search_buf.clone()
    } else {
        app.front().view().query().to_string()
    };
    let query_span = if searching {
        Span::styled(
            format!("/{query}█"),
            Style::default().fg(Color::Yellow),
        )
    } else if query.is_empty() {
        Span::styled("/ to search", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(format!("/{query}"), Style::default().fg(Color::White))
    };

    Line::from(vec![
        query_span,
        Span::raw("   "),
        Span::styled("category: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.front().view().category().label(),
            Style::default().fg(Color::Cyan),
        ),
    ])
}

fn build_status_bar(app: &StorefrontApp) -> Line<'static> {
    let year = Local::now().year();
    let left = app.status_msg.as_ref().map_or_else(
        || "a add · +/- qty · t cart · / search · c category · m contact · ? help · q quit"
            .to_string(),
        |(msg, _)| msg.clone(),
    );
    Line::from(vec![
        Span::styled(left, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(format!("© {year}"), Style::default().fg(Color::DarkGray)),
    ])
}

/// Paint one frame.
pub fn render_into(frame: &mut ratatui::Frame<'_>, app: &mut StorefrontApp) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // filter bar
            Constraint::Min(5),    // body
            Constraint::Length(1), // status bar
        ])
        .split(area);

    let panel = app.front().panel();
    let header = Line::from(vec![
        Span::styled(
            "stall",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" terminal storefront   "),
        Span::styled(
            format!("Cart: {} items · {}", panel.count, panel.total),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);
    frame.render_widget(Paragraph::new(build_filter_bar(app)), chunks[1]);

    let body = chunks[2];
    let side_open = app.show_detail || app.front().panel_open();
    if side_open {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(body);
        render_grid(frame, app, split[0]);

        match (app.show_detail, app.front().panel_open()) {
            (true, true) => {
                let right = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(split[1]);
                render_detail_panel(frame, app, right[0]);
                render_cart_panel(frame, app, right[1]);
            }
            (true, false) => render_detail_panel(frame, app, split[1]),
            (false, _) => render_cart_panel(frame, app, split[1]),
        }
    } else {
        render_grid(frame, app, body);
    }

    frame.render_widget(Paragraph::new(build_status_bar(app)), chunks[3]);

    match app.input_mode {
        InputMode::Help => render_help_overlay(frame, area),
        InputMode::Contact => render_contact_dialog(frame, app, area),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::{InputMode, StorefrontApp};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use stall_core::catalog::Catalog;
    use stall_core::lazy::DEFAULT_MARGIN_ROWS;
    use stall_core::store::CartStore;
    use stall_core::storefront::Storefront;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> StorefrontApp {
        let catalog = Catalog::demo();
        let cart = CartStore::open(dir.path().join("cart.json"), &catalog);
        StorefrontApp::new(Storefront::new(catalog, cart, DEFAULT_MARGIN_ROWS))
    }

    fn press(app: &mut StorefrontApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn first_row_is_selected_on_start() {
        let dir = TempDir::new().expect("tempdir");
        let app = app(&dir);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn pressing_a_adds_the_selected_product() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.front().cart().quantity("p1"), 1);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.front().cart().quantity("p1"), 2);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.front().cart().quantity("p1"), 0);

        // One more decrement on the now-absent entry is a no-op.
        press(&mut app, KeyCode::Char('-'));
        assert!(app.front().cart().is_empty());
    }

    #[test]
    fn live_search_filters_the_grid() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('/'));
        for c in "speaker".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.grid_len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.selected_id().as_deref(), Some("p4"));
    }

    #[test]
    fn escape_in_search_restores_the_previous_query() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.grid_len(), 0);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.grid_len(), 6);
    }

    #[test]
    fn category_cycling_wraps_through_all_options() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        let options = app.front().catalog().category_options();

        for expected in options.iter().skip(1) {
            press(&mut app, KeyCode::Char('c'));
            assert_eq!(app.front().view().category().value(), expected);
        }
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.front().view().category().value(), "all");
    }

    #[test]
    fn toggle_opens_and_closes_the_cart_panel() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.front().panel_open());
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.front().panel_open());
    }

    #[test]
    fn enter_opens_a_non_blocking_detail_pane() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Enter);
        assert!(app.show_detail);
        let detail = app.detail.as_ref().expect("detail payload");
        assert_eq!(detail.title, "Wireless Headphones");
        assert_eq!(detail.price, "$59.99");

        // Navigation keeps working while details are open.
        press(&mut app, KeyCode::Char('j'));
        let detail = app.detail.as_ref().expect("detail payload");
        assert_eq!(detail.title, "Smart Watch");

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_detail);
    }

    #[test]
    fn contact_mode_opens_and_cancels() {
        let dir = TempDir::new().expect("tempdir");
        let mut app = app(&dir);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.input_mode, InputMode::Contact);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
