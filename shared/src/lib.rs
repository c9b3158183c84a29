use serde::{Deserialize, Serialize};
use std::fmt;

/// A money value split into whole dollars and whole cents.
///
/// Currency is never held as a single fractional number; the two integer
/// fields are only combined into a decimal at the formatting boundary, so
/// no binary floating-point rounding can leak into stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub dollars: i64,
    pub cents: i64,
}

impl Amount {
    pub const fn new(dollars: i64, cents: i64) -> Self {
        Self { dollars, cents }
    }

    pub const fn zero() -> Self {
        Self { dollars: 0, cents: 0 }
    }

    /// Collapse both fields into a single cent count.
    pub fn total_cents(&self) -> i64 {
        self.dollars.saturating_mul(100).saturating_add(self.cents)
    }

    /// Build an amount from a cent count with cents normalized into [0, 99].
    ///
    /// The split is euclidean, so a negative total carries its sign in
    /// `dollars` (-50 cents becomes `{dollars: -1, cents: 50}`).
    pub fn from_total_cents(total: i64) -> Self {
        Self {
            dollars: total.div_euclid(100),
            cents: total.rem_euclid(100),
        }
    }

    /// Return a copy with excess cents carried into dollars.
    ///
    /// Amounts arriving over the wire are used as-is; normalization only
    /// happens through this call or the arithmetic below.
    pub fn normalized(&self) -> Self {
        Self::from_total_cents(self.total_cents())
    }

    /// Sum of two amounts as a new, normalized amount.
    pub fn plus(&self, other: Amount) -> Amount {
        Self::from_total_cents(self.total_cents() + other.total_cents())
    }

    /// Difference of two amounts as a new, normalized amount.
    ///
    /// Cents in the result are always in [0, 99], so a negative difference
    /// is visible in `dollars` alone.
    pub fn minus(&self, other: Amount) -> Amount {
        Self::from_total_cents(self.total_cents() - other.total_cents())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_currency(self))
    }
}

/// Render an amount as a US-dollar string: `$` prefix, thousands
/// separators, exactly two decimal digits (`{3, 5}` renders as "$3.05").
///
/// Total over all integer inputs; this renders, it never validates. A
/// negative value renders with a leading `-` before the `$` symbol
/// (`{-1, 50}` has the value -50 cents and renders as "-$0.50").
pub fn format_currency(amount: &Amount) -> String {
    let total = amount.total_cents();
    let sign = if total < 0 { "-" } else { "" };
    let magnitude = total.unsigned_abs();
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(magnitude / 100),
        magnitude % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// The two structured instructions a balance dialog can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceAction {
    Deposit,
    Withdrawal,
}

/// Business-level rejection codes produced by the account server.
///
/// The client only ever reads these and maps them to display text; it
/// never produces them. `Unknown` absorbs error codes added server-side
/// after this client shipped, so a response with a new code still
/// deserializes instead of failing the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceActionError {
    NoError,
    InsufficientFunds,
    NegativeDepositAmount,
    NegativeBalance,
    #[serde(other)]
    Unknown,
}

/// User-facing message for a business rejection code.
///
/// Total and pure: `NoError` and any unrecognized code map to the empty
/// string, which callers treat as "show no error banner".
pub fn error_message(error: BalanceActionError) -> &'static str {
    match error {
        BalanceActionError::InsufficientFunds => "Insufficient funds for withdrawal amount.",
        BalanceActionError::NegativeBalance => {
            "Negative balance given, contact customer service for help."
        }
        BalanceActionError::NegativeDepositAmount => {
            "Negative transfer amount given, dollars and cents must be positive."
        }
        BalanceActionError::NoError | BalanceActionError::Unknown => "",
    }
}

/// Request to apply a deposit or withdrawal against the account.
///
/// The client-side balance rides along for context only; the server
/// validates against its own source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceActionRequest {
    pub action: BalanceAction,
    pub amount: Amount,
    pub balance: Amount,
}

/// Outcome of a structured balance action.
///
/// `balance` is authoritative only when `success` is true; callers must
/// not read it on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceActionResponse {
    pub success: bool,
    pub error: BalanceActionError,
    pub balance: Amount,
}

/// A natural-language instruction plus the current balance for context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePromptRequest {
    pub prompt: String,
    pub balance: Amount,
}

/// Outcome of a prompt-driven request.
///
/// `response` is always display text, regardless of outcome. `success`
/// reports whether a balance mutation actually happened; `escalate_user`
/// is an independent "offer a human hand-off" signal; and
/// `balance_action_error` may be `NoError` even on failure (a prompt that
/// was simply not actionable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePromptResponse {
    pub success: bool,
    pub balance: Amount,
    pub balance_action_error: BalanceActionError,
    pub escalate_user: bool,
    pub response: String,
}
