pub mod favorites;
pub mod log_tab;
pub mod pages;

use ratatui::{layout::Constraint, widgets::Cell};
use tokio::sync::RwLock;

use crate::app::state::{AppState, Collection, PageKind};
use crate::engine::{FavoriteRole, FavoriteScope};
use crate::models::Record;
use crate::ui::dialogs::filter_form::FormField;
use crate::ui::theme::Theme;

pub use favorites::FavoritesTab;
pub use log_tab::LogTab;

/// Table column header and width
pub struct Column {
    pub title: &'static str,
    pub width: Constraint,
}

impl Column {
    pub const fn new(title: &'static str, width: Constraint) -> Self {
        Self { title, width }
    }
}

/// An IP of a record that can be favorited, with the role it played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteTarget {
    pub role: FavoriteRole,
    pub ip: String,
}

/// Presentation of one record type as a log tab
pub trait LogPage: Record {
    const KIND: PageKind;
    const TITLE: &'static str;

    fn columns() -> Vec<Column>;

    fn cells(&self, theme: &Theme) -> Vec<Cell<'static>>;

    /// Label/value pairs for the details dialog
    fn details(&self) -> Vec<(&'static str, String)>;

    /// Inputs of the filter form, in display order
    fn form_fields() -> Vec<FormField<Self::Field>>;

    /// Field the quick search matches against
    fn search_field() -> Self::Field;

    /// Favorites list this page writes to, if any
    fn favorite_scope() -> Option<FavoriteScope> {
        None
    }

    /// Favoritable IPs, the first one being the `*` shortcut target
    fn favorite_targets(&self) -> Vec<FavoriteTarget> {
        Vec::new()
    }

    fn collection(state: &AppState) -> &RwLock<Collection<Self>>;
}
