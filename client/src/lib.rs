//! Client side of the bank balance card demo.
//!
//! Talks to the external account server over its two JSON endpoints and
//! keeps the UI-facing application state (balance, dialog, error banner)
//! in one explicit struct so the request/response contracts stay testable
//! without any rendering layer attached.

pub mod coordinator;
pub mod services;
pub mod state;

pub use coordinator::AccountCoordinator;
pub use services::api::{ApiClient, ApiError};
pub use state::app_state::{AppEvent, AppState};
pub use state::banner_state::{BannerState, ErrorBanner, BANNER_DURATION};
pub use state::modal_state::DialogState;
