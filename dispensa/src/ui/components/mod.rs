pub mod card_grid;
pub mod delete_confirmation;
pub mod edit_popup;
pub mod empty_state;
pub mod filter_input;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod logout_confirmation;
pub mod popup;
pub mod screen_title;
