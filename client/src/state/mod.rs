pub mod app_state;
pub mod banner_state;
pub mod modal_state;
