//! # Account Coordinator Module
//!
//! Ties the application state to the API client.
//!
//! ## Responsibilities:
//! - Translate user-level operations (open dialog, confirm, send prompt)
//!   into at most one request each
//! - Fold endpoint outcomes back into [`AppState`] as events
//! - Surface transport failures as the generic error banner instead of
//!   swallowing them
//!
//! The rendering layer above this owns timers and widgets; it calls in
//! here for everything that touches the balance or the server.

use log::{error, info};

use shared::{Amount, BalanceAction, BalanceActionRequest, BalancePromptRequest};

use crate::services::api::ApiClient;
use crate::state::app_state::{AppEvent, AppState};

/// Drives the balance card: one coordinator per session.
pub struct AccountCoordinator {
    api: ApiClient,
    state: AppState,
}

impl AccountCoordinator {
    pub fn new(api: ApiClient, starting_balance: Amount) -> Self {
        Self {
            api,
            state: AppState::new(starting_balance),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn open_deposit(&mut self) {
        self.state.apply(AppEvent::DialogOpened(BalanceAction::Deposit));
    }

    pub fn open_withdrawal(&mut self) {
        self.state
            .apply(AppEvent::DialogOpened(BalanceAction::Withdrawal));
    }

    pub fn cancel_dialog(&mut self) {
        self.state.apply(AppEvent::DialogClosed);
    }

    /// Confirm the open dialog with the entered amount.
    ///
    /// Issues the structured request for whichever dialog is up; does
    /// nothing if no dialog is open. Returns the generation of a banner
    /// shown as a result, so the caller can schedule its hide timer.
    pub async fn confirm_dialog(&mut self, amount: Amount) -> Option<u64> {
        let Some(action) = self.state.dialog.pending_action() else {
            info!("confirm with no open dialog, ignoring");
            return None;
        };

        let request = BalanceActionRequest {
            action,
            amount,
            balance: self.state.balance,
        };

        match self.api.submit_balance_action(&request).await {
            Ok(response) => self.state.apply(AppEvent::ActionCompleted(response)),
            Err(e) => {
                error!("balance action failed: {}", e);
                // The dialog still closes; the verdict never arrived, so
                // the balance stays as it was.
                self.state.apply(AppEvent::DialogClosed);
                self.state.apply(AppEvent::TransportFailed(e.to_string()))
            }
        }
    }

    /// Send a free-text instruction to the chatbot entry point.
    ///
    /// Returns the generation of a banner shown as a result, if any.
    pub async fn send_prompt(&mut self, prompt: impl Into<String>) -> Option<u64> {
        let request = BalancePromptRequest {
            prompt: prompt.into(),
            balance: self.state.balance,
        };

        match self.api.submit_balance_prompt(&request).await {
            Ok(response) => self.state.apply(AppEvent::PromptCompleted(response)),
            Err(e) => {
                error!("balance prompt failed: {}", e);
                self.state.apply(AppEvent::TransportFailed(e.to_string()))
            }
        }
    }

    /// Forward a fired banner timer; stale generations are ignored.
    pub fn expire_banner(&mut self, generation: u64) {
        self.state.apply(AppEvent::BannerExpired(generation));
    }

    pub fn dismiss_banner(&mut self) {
        self.state.apply(AppEvent::BannerDismissed);
    }
}
