use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::error::Result;
use crate::fmt::money;
use crate::form::Draft;
use crate::ids::new_id;
use crate::ledger::{category_breakdown, totals};
use crate::models::{Category, TxKind};
use crate::settings::get_data_dir;
use crate::storage::FileStore;
use crate::store::Store;
use crate::tui::{
    amount_span, balance_span, run_view, View, ViewAction, EXPENSE_STYLE, FOOTER_STYLE,
    HEADER_STYLE, INCOME_STYLE,
};

pub fn run() -> Result<()> {
    let store = Store::open(FileStore::new(get_data_dir()));
    let mut dashboard = Dashboard::new(store);
    run_view(&mut dashboard)
}

enum Screen {
    Register,
    Add,
    ConfirmDelete,
    ConfirmClear,
}

// Form focus order — keep in sync with draw_form
const FIELD_DESCRIPTION: usize = 0;
const FIELD_AMOUNT: usize = 1;
const FIELD_CATEGORY: usize = 2;
const FIELD_KIND: usize = 3;
const FIELD_DATE: usize = 4;
const FIELD_COUNT: usize = 5;

struct Dashboard {
    store: Store<FileStore>,
    draft: Draft,
    focused: usize,
    selection: usize,
    scroll_offset: usize,
    last_visible_rows: usize,
    screen: Screen,
    status_message: Option<String>,
    /// Remaining keypresses before the status message is cleared.
    status_ttl: u8,
}

impl Dashboard {
    fn new(store: Store<FileStore>) -> Self {
        Self {
            store,
            draft: Draft::new(),
            focused: 0,
            selection: 0,
            scroll_offset: 0,
            last_visible_rows: 20,
            screen: Screen::Register,
            status_message: None,
            status_ttl: 0,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.transactions().len();
        self.selection = if len == 0 {
            0
        } else {
            self.selection.min(len - 1)
        };
    }

    fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.status_ttl = 3;
    }

    fn ensure_visible(&mut self, visible_rows: usize) {
        if self.selection < self.scroll_offset {
            self.scroll_offset = self.selection;
        } else if self.selection >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selection - visible_rows + 1;
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    fn draw_register(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let border_style = Style::default().fg(Color::DarkGray);

        let [header_area, sep, totals_area, content_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(" Penny — personal ledger").style(HEADER_STYLE),
            header_area,
        );
        let sep_line = "\u{2501}".repeat(area.width as usize);
        frame.render_widget(Paragraph::new(sep_line.as_str()).style(border_style), sep);

        // Totals line
        let t = totals(self.store.transactions());
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" Income "),
                Span::styled(money(t.income), INCOME_STYLE),
                Span::raw("   Expenses "),
                Span::styled(money(t.expenses), EXPENSE_STYLE),
                Span::raw("   Balance "),
                balance_span(t.balance),
            ])),
            totals_area,
        );

        let [list_area, chart_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(content_area);

        self.draw_transaction_list(frame, list_area);
        draw_breakdown(frame, chart_area, self.store.transactions());

        // Hints / status
        if let Some(msg) = &self.status_message {
            frame.render_widget(
                Paragraph::new(format!(" {msg}")).style(Style::default().fg(Color::Yellow)),
                hints_area,
            );
        } else {
            let hints = match self.screen {
                Screen::ConfirmDelete | Screen::ConfirmClear => " y=confirm  n=cancel",
                _ => " a=add  d=delete  x=clear all  Esc=quit",
            };
            frame.render_widget(Paragraph::new(hints).style(FOOTER_STYLE), hints_area);
        }
    }

    fn draw_transaction_list(&mut self, frame: &mut Frame, area: Rect) {
        let transactions = self.store.transactions();

        // 2 lines title + 1 column header = 3 lines overhead
        let data_rows = (area.height as usize).saturating_sub(3);
        self.last_visible_rows = data_rows;

        let mut lines = vec![
            Line::from(Span::styled(
                format!(" Transactions ({})", transactions.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if transactions.is_empty() {
            lines.push(Line::from("   Nothing recorded. Press 'a' to add."));
        } else {
            lines.push(Line::from(Span::styled(
                format!(
                    "   {:<12} {:<26} {:<14} {:>12}",
                    "Date", "Description", "Category", "Amount"
                ),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));

            let end = (self.scroll_offset + data_rows).min(transactions.len());
            for i in self.scroll_offset..end {
                let tx = &transactions[i];
                let marker = if i == self.selection { " > " } else { "   " };
                let row_style = if i == self.selection {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(
                            "{marker}{:<12} {:<26} {:<14} ",
                            tx.date,
                            truncate(&tx.description, 24),
                            tx.category.label(),
                        ),
                        row_style,
                    ),
                    amount_span(tx.amount, tx.kind),
                ]));
            }
        }

        // Confirmation prompts inline, under the list
        match &self.screen {
            Screen::ConfirmDelete => {
                if let Some(tx) = transactions.get(self.selection) {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("   Delete '{}' ({})? (y/n)", tx.description, money(tx.amount)),
                        Style::default().fg(Color::Yellow),
                    )));
                }
            }
            Screen::ConfirmClear => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("   Delete all {} transactions? (y/n)", transactions.len()),
                    Style::default().fg(Color::Yellow),
                )));
            }
            _ => {}
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_form(&self, frame: &mut Frame) {
        let area = frame.area();
        let border_style = Style::default().fg(Color::DarkGray);

        let [header_area, sep, content_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(" Penny — personal ledger").style(HEADER_STYLE),
            header_area,
        );
        let sep_line = "\u{2501}".repeat(area.width as usize);
        frame.render_widget(Paragraph::new(sep_line.as_str()).style(border_style), sep);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " New Transaction",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        lines.push(self.text_field_line("Description", &self.draft.description, FIELD_DESCRIPTION));
        lines.push(self.text_field_line("Amount", &self.draft.amount, FIELD_AMOUNT));
        lines.push(self.selector_line(
            "Category",
            self.draft.category.label(),
            FIELD_CATEGORY,
        ));
        lines.push(self.selector_line("Type", self.draft.kind.label(), FIELD_KIND));
        lines.push(self.text_field_line("Date", &self.draft.date, FIELD_DATE));

        if let Some(msg) = &self.status_message {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("   {msg}"),
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(Paragraph::new(lines), content_area);
        frame.render_widget(
            Paragraph::new(" Tab=next field  \u{2190}\u{2192}=change  Enter=save  Del=reset  Esc=back")
                .style(FOOTER_STYLE),
            hints_area,
        );
    }

    fn text_field_line(&self, label: &'static str, value: &str, idx: usize) -> Line<'static> {
        let focused = idx == self.focused;
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("   {label:<14} "), label_style(focused)),
            Span::styled(format!("{value}{cursor}"), value_style(focused)),
        ])
    }

    fn selector_line(&self, label: &'static str, value: &str, idx: usize) -> Line<'static> {
        let focused = idx == self.focused;
        let arrows = if focused { ("< ", " >") } else { ("  ", "  ") };
        Line::from(vec![
            Span::styled(format!("   {label:<14} "), label_style(focused)),
            Span::styled(
                format!("{}{value}{}", arrows.0, arrows.1),
                value_style(focused),
            ),
        ])
    }

    // -----------------------------------------------------------------------
    // Keys
    // -----------------------------------------------------------------------

    fn handle_register_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Up => {
                self.selection = self.selection.saturating_sub(1);
                self.ensure_visible(self.last_visible_rows);
            }
            KeyCode::Down => {
                if !self.store.transactions().is_empty() {
                    self.selection =
                        (self.selection + 1).min(self.store.transactions().len() - 1);
                    self.ensure_visible(self.last_visible_rows);
                }
            }
            KeyCode::Char('a') => {
                self.focused = 0;
                self.screen = Screen::Add;
            }
            KeyCode::Char('d') => {
                if !self.store.transactions().is_empty() {
                    self.screen = Screen::ConfirmDelete;
                }
            }
            KeyCode::Char('x') => {
                if !self.store.transactions().is_empty() {
                    self.screen = Screen::ConfirmClear;
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => return ViewAction::Close,
            _ => {}
        }
        ViewAction::Continue
    }

    fn handle_form_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Esc => {
                self.screen = Screen::Register;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused = (self.focused + 1) % FIELD_COUNT;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = if self.focused == 0 {
                    FIELD_COUNT - 1
                } else {
                    self.focused - 1
                };
            }
            KeyCode::Left => match self.focused {
                FIELD_CATEGORY => self.cycle_category(-1),
                FIELD_KIND => self.toggle_kind(),
                _ => {}
            },
            KeyCode::Right => match self.focused {
                FIELD_CATEGORY => self.cycle_category(1),
                FIELD_KIND => self.toggle_kind(),
                _ => {}
            },
            KeyCode::Char(c) => {
                if let Some(value) = self.focused_text_field() {
                    value.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(value) = self.focused_text_field() {
                    value.pop();
                }
            }
            KeyCode::Delete => {
                self.draft.reset();
                self.focused = 0;
                self.set_status("Form cleared".to_string());
            }
            KeyCode::Enter => match self.draft.submit(new_id()) {
                Ok(tx) => {
                    let msg = format!("Recorded: {} {}", tx.description, money(tx.amount));
                    self.store.add(tx);
                    self.selection = 0;
                    self.scroll_offset = 0;
                    self.screen = Screen::Register;
                    self.set_status(msg);
                }
                Err(e) => {
                    self.set_status(e.to_string());
                }
            },
            _ => {}
        }
        ViewAction::Continue
    }

    /// The draft buffer behind the focused field, for free typing. Selector
    /// fields have no buffer.
    fn focused_text_field(&mut self) -> Option<&mut String> {
        match self.focused {
            FIELD_DESCRIPTION => Some(&mut self.draft.description),
            FIELD_AMOUNT => Some(&mut self.draft.amount),
            FIELD_DATE => Some(&mut self.draft.date),
            _ => None,
        }
    }

    fn cycle_category(&mut self, step: isize) {
        let all = Category::ALL;
        let pos = all
            .iter()
            .position(|c| *c == self.draft.category)
            .unwrap_or(0);
        let next = (pos as isize + step).rem_euclid(all.len() as isize) as usize;
        self.draft.category = all[next];
    }

    fn toggle_kind(&mut self) {
        self.draft.kind = match self.draft.kind {
            TxKind::Income => TxKind::Expense,
            TxKind::Expense => TxKind::Income,
        };
    }

    fn handle_confirm_delete_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Char('y') => {
                let target = self
                    .store
                    .transactions()
                    .get(self.selection)
                    .map(|tx| (tx.id.clone(), tx.description.clone()));
                if let Some((id, description)) = target {
                    self.store.remove(&id);
                    self.clamp_selection();
                    self.set_status(format!("Deleted: {description}"));
                }
                self.screen = Screen::Register;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.screen = Screen::Register;
            }
            _ => {}
        }
        ViewAction::Continue
    }

    fn handle_confirm_clear_key(&mut self, code: KeyCode) -> ViewAction {
        match code {
            KeyCode::Char('y') => {
                let count = self.store.transactions().len();
                self.store.clear();
                self.selection = 0;
                self.scroll_offset = 0;
                self.set_status(format!("Cleared {count} transactions"));
                self.screen = Screen::Register;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.screen = Screen::Register;
            }
            _ => {}
        }
        ViewAction::Continue
    }
}

impl View for Dashboard {
    fn draw(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Register | Screen::ConfirmDelete | Screen::ConfirmClear => {
                self.draw_register(frame)
            }
            Screen::Add => self.draw_form(frame),
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> ViewAction {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_message = None;
            }
        }

        match self.screen {
            Screen::Register => self.handle_register_key(code),
            Screen::Add => self.handle_form_key(code),
            Screen::ConfirmDelete => self.handle_confirm_delete_key(code),
            Screen::ConfirmClear => self.handle_confirm_clear_key(code),
        }
    }
}

/// Horizontal bars for per-category expense totals, widest bar scaled to the
/// available width.
fn draw_breakdown(frame: &mut Frame, area: Rect, transactions: &[crate::models::Transaction]) {
    let breakdown = category_breakdown(transactions);

    let mut lines = vec![
        Line::from(Span::styled(
            " Expenses by category",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if breakdown.is_empty() {
        lines.push(Line::from("   No expense data."));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let max_total = breakdown[0].total.max(0.01);
    // label + space + bar + space + amount must fit
    let label_width = 14usize;
    let amount_width = 12usize;
    let bar_space = (area.width as usize).saturating_sub(label_width + amount_width + 5);

    for group in &breakdown {
        let width = ((group.total / max_total) * bar_space as f64).round() as usize;
        let bar = "\u{2587}".repeat(width.max(1));
        lines.push(Line::from(vec![
            Span::raw(format!("   {:<label_width$}", group.category.label())),
            Span::styled(bar, EXPENSE_STYLE),
            Span::raw(format!(" {}", money(group.total))),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 1).collect();
        format!("{truncated}\u{2026}")
    }
}
