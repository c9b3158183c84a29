//! # Dialog State Module
//!
//! State for the deposit/withdrawal dialog.
//!
//! ## Responsibilities:
//! - Track which dialog (if any) is currently open
//! - Gate which balance action a confirm will issue
//!
//! The machine is deliberately small: the only transitions are opening a
//! dialog from closed and closing it again via confirm or cancel. There
//! is no direct path between the deposit and withdrawal dialogs.

use shared::BalanceAction;

/// Which balance dialog is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Deposit,
    Withdrawal,
}

impl DialogState {
    /// Open the dialog for the given action.
    ///
    /// Only legal from `Closed`; returns false (and stays put) if a
    /// dialog is already up.
    pub fn open(&mut self, action: BalanceAction) -> bool {
        if *self != DialogState::Closed {
            return false;
        }
        *self = match action {
            BalanceAction::Deposit => DialogState::Deposit,
            BalanceAction::Withdrawal => DialogState::Withdrawal,
        };
        true
    }

    /// Close the dialog (confirm and cancel both land here).
    pub fn close(&mut self) {
        *self = DialogState::Closed;
    }

    /// The action a confirm should issue, if a dialog is open.
    pub fn pending_action(&self) -> Option<BalanceAction> {
        match self {
            DialogState::Closed => None,
            DialogState::Deposit => Some(BalanceAction::Deposit),
            DialogState::Withdrawal => Some(BalanceAction::Withdrawal),
        }
    }

    pub fn is_open(&self) -> bool {
        *self != DialogState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_from_closed() {
        let mut dialog = DialogState::Closed;
        assert!(dialog.open(BalanceAction::Deposit));
        assert_eq!(dialog, DialogState::Deposit);
        assert_eq!(dialog.pending_action(), Some(BalanceAction::Deposit));

        let mut dialog = DialogState::Closed;
        assert!(dialog.open(BalanceAction::Withdrawal));
        assert_eq!(dialog, DialogState::Withdrawal);
    }

    #[test]
    fn test_no_direct_deposit_to_withdrawal() {
        let mut dialog = DialogState::Closed;
        dialog.open(BalanceAction::Deposit);

        // Opening again while up is ignored; closing first is required.
        assert!(!dialog.open(BalanceAction::Withdrawal));
        assert_eq!(dialog, DialogState::Deposit);

        dialog.close();
        assert!(dialog.open(BalanceAction::Withdrawal));
        assert_eq!(dialog, DialogState::Withdrawal);
    }

    #[test]
    fn test_close_from_anywhere() {
        let mut dialog = DialogState::Withdrawal;
        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
        assert_eq!(dialog.pending_action(), None);
        assert!(!dialog.is_open());

        // Closing an already-closed dialog is a no-op.
        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
    }
}
