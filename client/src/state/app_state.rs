//! # Core Application State
//!
//! The per-session state behind the balance card, held in one explicit
//! struct instead of ambient component state.
//!
//! ## Responsibilities:
//! - Current balance tracking
//! - Dialog and error-banner state
//! - Latest chatbot reply and the human hand-off affordance
//!
//! ## Purpose:
//! All state changes funnel through [`AppState::apply`], one event at a
//! time, which keeps the caller obligations of the two endpoint contracts
//! (when the balance may move, when a banner shows) in a single place a
//! test can drive without any rendering layer.

use log::warn;
use shared::{
    error_message, Amount, BalanceAction, BalanceActionResponse, BalancePromptResponse,
};

use crate::state::banner_state::BannerState;
use crate::state::modal_state::DialogState;

/// Banner text for failures that never produced a server verdict.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Could not reach the server, please try again.";

/// Everything that can happen to the session state.
#[derive(Debug)]
pub enum AppEvent {
    /// User picked deposit or withdrawal from the card.
    DialogOpened(BalanceAction),
    /// User backed out of the open dialog.
    DialogClosed,
    /// The structured action endpoint answered.
    ActionCompleted(BalanceActionResponse),
    /// The prompt endpoint answered.
    PromptCompleted(BalancePromptResponse),
    /// The request never got a server verdict; detail is for the log only.
    TransportFailed(String),
    /// A banner hide timer fired.
    BannerExpired(u64),
    /// User dismissed the banner by hand.
    BannerDismissed,
}

/// Core application state for one session of the balance card.
#[derive(Debug)]
pub struct AppState {
    /// Last balance the server confirmed.
    pub balance: Amount,

    /// Which dialog (if any) is currently showing.
    pub dialog: DialogState,

    /// Transient error notification.
    pub banner: BannerState,

    /// Latest free-text reply from the prompt endpoint.
    pub chat_reply: Option<String>,

    /// Whether the UI should offer a human hand-off.
    pub offer_escalation: bool,
}

impl AppState {
    pub fn new(starting_balance: Amount) -> Self {
        Self {
            balance: starting_balance,
            dialog: DialogState::Closed,
            banner: BannerState::new(),
            chat_reply: None,
            offer_escalation: false,
        }
    }

    /// Apply one event to the state.
    ///
    /// Returns the generation of a newly shown banner so the caller can
    /// schedule its hide timer, or `None` if no banner appeared.
    pub fn apply(&mut self, event: AppEvent) -> Option<u64> {
        match event {
            AppEvent::DialogOpened(action) => {
                self.dialog.open(action);
                None
            }
            AppEvent::DialogClosed => {
                self.dialog.close();
                None
            }
            AppEvent::ActionCompleted(response) => {
                // Confirm always lands back on the closed card.
                self.dialog.close();
                if response.success {
                    self.balance = response.balance;
                    None
                } else {
                    // Balance stays untouched; the response's balance field
                    // is not trustworthy on failure.
                    self.show_error(response.error)
                }
            }
            AppEvent::PromptCompleted(response) => {
                self.chat_reply = Some(response.response);
                // Hand-off is the latest conversation verdict, independent
                // of whether any banking action happened.
                self.offer_escalation = response.escalate_user;
                if response.success {
                    self.balance = response.balance;
                }
                self.show_error(response.balance_action_error)
            }
            AppEvent::TransportFailed(detail) => {
                warn!("transport failure surfaced to user: {}", detail);
                Some(self.banner.show(TRANSPORT_ERROR_MESSAGE))
            }
            AppEvent::BannerExpired(generation) => {
                self.banner.expire(generation);
                None
            }
            AppEvent::BannerDismissed => {
                self.banner.dismiss();
                None
            }
        }
    }

    /// Show a banner for a business rejection, unless the code maps to no
    /// message (`NoError` and unrecognized codes stay silent).
    fn show_error(&mut self, error: shared::BalanceActionError) -> Option<u64> {
        let message = error_message(error);
        if message.is_empty() {
            None
        } else {
            Some(self.banner.show(message))
        }
    }
}
