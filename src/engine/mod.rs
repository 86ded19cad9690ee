//! Client-side filter/search/pagination engine shared by the log pages

pub mod criteria;
pub mod favorites;
pub mod filter;
pub mod presets;
pub mod view;

pub use criteria::{Criterion, FilterCriteria};
pub use favorites::{FavoriteIp, FavoriteRole, FavoriteScope, FavoriteStore, ToggleOutcome};
pub use filter::{filter, paginate, Page, PageSize, PageWindow};
pub use presets::{PresetError, PresetStore, SavedFilterPreset};
pub use view::ListView;
