pub mod text;
pub mod time;

pub use text::truncate;
pub use time::format_time;
