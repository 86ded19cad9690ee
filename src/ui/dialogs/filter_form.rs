//! Filter form dialog: one input per filterable field

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::events::{edit_key, EditKey};
use crate::engine::{Criterion, FilterCriteria};
use crate::models::{LocationScope, RecordField};
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::form::{SelectInput, TextInput};

const ANY: &str = "Any";

/// Kind of input offered for a field
#[derive(Debug, Clone, Copy)]
pub enum FieldInput {
    /// Free text, matched as a substring
    Text,
    /// One of a fixed vocabulary
    Choice(&'static [&'static str]),
    /// Scope plus specific location
    Location,
}

#[derive(Debug, Clone, Copy)]
pub struct FormField<F> {
    pub field: F,
    pub input: FieldInput,
}

impl<F> FormField<F> {
    pub fn text(field: F) -> Self {
        Self { field, input: FieldInput::Text }
    }

    pub fn choice(field: F, options: &'static [&'static str]) -> Self {
        Self { field, input: FieldInput::Choice(options) }
    }

    pub fn location(field: F) -> Self {
        Self { field, input: FieldInput::Location }
    }
}

enum Widget {
    Text(TextInput),
    Choice(SelectInput),
    Location {
        scope: SelectInput,
        specific: SelectInput,
        on_specific: bool,
    },
}

struct Row<F> {
    field: F,
    widget: Widget,
    /// Current criterion the widget cannot show; submitted unchanged until edited
    kept: Option<Criterion>,
    focused: bool,
}

fn with_any(options: &[&str]) -> Vec<String> {
    std::iter::once(ANY)
        .chain(options.iter().copied())
        .map(String::from)
        .collect()
}

/// Whether the widget for `input` can display `criterion` without loss
fn representable(input: FieldInput, criterion: &Criterion) -> bool {
    match (input, criterion) {
        (FieldInput::Text, Criterion::Contains(_)) => true,
        (FieldInput::Choice(options), Criterion::OneOf(values)) => {
            matches!(values.as_slice(), [only] if options.iter().any(|o| *o == only.as_str()))
        }
        (FieldInput::Location, Criterion::Location(scope, specific)) => {
            scope.options().iter().any(|o| *o == specific.as_str())
        }
        _ => false,
    }
}

fn specific_options(scope: Option<&str>) -> Vec<String> {
    scope
        .and_then(|s| s.parse::<LocationScope>().ok())
        .map(|s| s.options().iter().map(|o| o.to_string()).collect())
        .unwrap_or_default()
}

impl<F: RecordField> Row<F> {
    fn new(def: &FormField<F>, current: Option<&Criterion>) -> Self {
        let label = def.field.label();
        let kept = current.filter(|c| !representable(def.input, c)).cloned();
        let current = if kept.is_some() { None } else { current };
        let widget = match def.input {
            FieldInput::Text => {
                let value = match current {
                    Some(Criterion::Contains(s)) => s.as_str(),
                    _ => "",
                };
                Widget::Text(TextInput::new(label).with_value(value))
            }
            FieldInput::Choice(options) => {
                let mut select = SelectInput::new(label, with_any(options));
                if let Some(Criterion::OneOf(values)) = current {
                    if let Some(first) = values.first() {
                        select = select.with_selected(first);
                    }
                }
                Widget::Choice(select)
            }
            FieldInput::Location => {
                let scopes: Vec<&str> = LocationScope::all().iter().map(|s| s.as_str()).collect();
                let mut scope = SelectInput::new(label, with_any(&scopes));
                let mut specific = SelectInput::new("Specific", Vec::new());
                if let Some(Criterion::Location(s, value)) = current {
                    scope = scope.with_selected(s.as_str());
                    specific.set_options(specific_options(Some(s.as_str())));
                    specific = specific.with_selected(value);
                }
                Widget::Location {
                    scope,
                    specific,
                    on_specific: false,
                }
            }
        };

        Self {
            field: def.field,
            widget,
            kept,
            focused: false,
        }
    }

    fn criterion(&self) -> Option<Criterion> {
        if let Some(kept) = &self.kept {
            return Some(kept.clone());
        }

        match &self.widget {
            Widget::Text(input) => Some(Criterion::contains(input.value().trim())),
            Widget::Choice(select) => select
                .value()
                .filter(|v| *v != ANY)
                .map(|v| Criterion::one_of([v])),
            Widget::Location { scope, specific, .. } => {
                let scope = scope.value()?.parse::<LocationScope>().ok()?;
                Some(Criterion::location(scope, specific.value()?))
            }
        }
    }

    fn clear(&mut self) {
        self.kept = None;
        match &mut self.widget {
            Widget::Text(input) => input.editor.clear(),
            Widget::Choice(select) => select.selected = 0,
            Widget::Location { scope, specific, on_specific } => {
                scope.selected = 0;
                specific.set_options(Vec::new());
                *on_specific = false;
            }
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        match &mut self.widget {
            Widget::Text(input) => input.focused = focused,
            Widget::Choice(select) => select.focused = focused,
            Widget::Location { scope, specific, on_specific } => {
                scope.focused = focused && !*on_specific;
                specific.focused = focused && *on_specific;
            }
        }
    }

    /// Move focus inside the row; false when it should leave the row
    fn step_within(&mut self, forward: bool) -> bool {
        if let Widget::Location { on_specific, .. } = &mut self.widget {
            if forward && !*on_specific {
                *on_specific = true;
                return true;
            }
            if !forward && *on_specific {
                *on_specific = false;
                return true;
            }
        }
        false
    }

    fn enter(&mut self, forward: bool) {
        if let Widget::Location { on_specific, .. } = &mut self.widget {
            *on_specific = !forward;
        }
    }

    fn cycle(&mut self, forward: bool) {
        let step = |select: &mut SelectInput| {
            if forward {
                select.next()
            } else {
                select.prev()
            }
        };

        if self.kept.is_some() {
            if matches!(self.widget, Widget::Text(_)) {
                return;
            }
            self.kept = None;
        }

        match &mut self.widget {
            Widget::Text(input) => {
                input.editor.apply(if forward { EditKey::Right } else { EditKey::Left });
            }
            Widget::Choice(select) => step(select),
            Widget::Location { scope, specific, on_specific } => {
                if *on_specific {
                    step(specific);
                } else {
                    step(scope);
                    specific.set_options(specific_options(scope.value()));
                }
            }
        }
    }

    fn edit(&mut self, edit: EditKey) {
        if let Widget::Text(input) = &mut self.widget {
            self.kept = None;
            input.editor.apply(edit);
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some(kept) = &self.kept {
            let border = if self.focused { theme.border_focused() } else { theme.border() };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", self.field.label()));
            let line = Line::from(vec![
                Span::styled(kept.summary(), theme.warning()),
                Span::styled("  kept as saved; edit to replace", theme.dim()),
            ]);
            frame.render_widget(Paragraph::new(line).block(block), area);
            return;
        }

        match &self.widget {
            Widget::Text(input) => input.render(frame, area, theme.normal(), theme.border_focused()),
            Widget::Choice(select) => select.render(frame, area, theme.normal(), theme.border_focused()),
            Widget::Location { scope, specific, .. } => {
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(area);
                scope.render(frame, halves[0], theme.normal(), theme.border_focused());
                specific.render(frame, halves[1], theme.normal(), theme.border_focused());
            }
        }
    }
}

/// Modal form editing the criteria of one log page
pub struct FilterFormDialog<F: RecordField> {
    title: String,
    rows: Vec<Row<F>>,
    focus: usize,
    /// Criteria to apply, set when the form is submitted
    pub result: Option<FilterCriteria<F>>,
}

impl<F: RecordField> FilterFormDialog<F> {
    pub fn new(title: &str, fields: &[FormField<F>], current: &FilterCriteria<F>) -> Self {
        let rows = fields
            .iter()
            .map(|def| Row::new(def, current.get(def.field)))
            .collect();

        let mut dialog = Self {
            title: title.to_string(),
            rows,
            focus: 0,
            result: None,
        };
        dialog.refresh_focus();
        dialog
    }

    /// Criteria described by the current inputs; blank inputs are omitted
    pub fn criteria(&self) -> FilterCriteria<F> {
        let mut criteria = FilterCriteria::new();
        for row in &self.rows {
            if let Some(criterion) = row.criterion() {
                criteria.set(row.field, criterion);
            }
        }
        criteria
    }

    /// Returns true when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.rows.is_empty() {
            return true;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return true,
            (KeyCode::Enter, _) => {
                self.result = Some(self.criteria());
                return true;
            }
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                self.rows.iter_mut().for_each(Row::clear);
                self.refresh_focus();
            }
            (KeyCode::Tab, _) | (KeyCode::Down, _) => self.move_focus(true),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.move_focus(false),
            (KeyCode::Left, _) => self.rows[self.focus].cycle(false),
            (KeyCode::Right, _) => self.rows[self.focus].cycle(true),
            _ => {
                if let Some(edit) = edit_key(&key) {
                    self.rows[self.focus].edit(edit);
                }
            }
        }
        false
    }

    fn move_focus(&mut self, forward: bool) {
        if !self.rows[self.focus].step_within(forward) {
            let len = self.rows.len();
            self.focus = if forward {
                (self.focus + 1) % len
            } else {
                (self.focus + len - 1) % len
            };
            self.rows[self.focus].enter(forward);
        }
        self.refresh_focus();
    }

    fn refresh_focus(&mut self) {
        let focus = self.focus;
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_focus(i == focus);
        }
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let height = self.rows.len() as u16 * 3 + 4;
        let dialog_area = DialogLayout::centered(frame.area(), 70, height).dialog;

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(theme.border_focused());
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let mut constraints: Vec<Constraint> = self.rows.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Min(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (row, area) in self.rows.iter().zip(chunks.iter()) {
            row.render(frame, *area, theme);
        }

        let hint = Line::from(vec![
            Span::styled(" Tab/↑↓", theme.accent()),
            Span::styled(" move  ", theme.dim()),
            Span::styled("←→", theme.accent()),
            Span::styled(" choose  ", theme.dim()),
            Span::styled("Ctrl+R", theme.accent()),
            Span::styled(" clear  ", theme.dim()),
            Span::styled("Enter", theme.accent()),
            Span::styled(" search  ", theme.dim()),
            Span::styled("Esc", theme.accent()),
            Span::styled(" cancel", theme.dim()),
        ]);
        if let Some(area) = chunks.last() {
            frame.render_widget(Paragraph::new(hint), *area);
        }
    }
}
