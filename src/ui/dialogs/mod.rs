pub mod confirm;
pub mod filter_form;
pub mod preset_picker;
pub mod record_details;
pub mod text_prompt;
