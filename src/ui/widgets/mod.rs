pub mod form;
pub mod searchbar;
pub mod statusbar;
