use bitcoin::{Amount, Txid};
use serde::Serialize;

use crate::tracker::domain::confidence::INDICATOR_SIZE_DEFAULT;

/// Wallet mutation events, dispatched as one tagged enum through a single
/// handler instead of a multi-method listener interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    CoinsReceived { txid: Txid, new_balance: Amount },
    CoinsSent { txid: Txid, new_balance: Amount },
    ConfidenceChanged { txid: Txid },
    /// Accepted but intentionally produces no state change.
    Reorganized,
    /// Accepted but intentionally produces no state change.
    WalletChanged,
}

/// What one tracker instance follows. Fixed at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerMode {
    /// Track whichever transaction most recently touched the wallet.
    WholeWallet,
    /// Honor events for this exact transaction hash only.
    Pinned(Txid),
}

/// Side effects the engine asks the driver to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerCommand {
    /// Register with the wallet's event stream.
    Subscribe,
    /// Deregister from the wallet's event stream.
    Unsubscribe,
    /// Hand one complete view state to the UI sink.
    Publish(ViewState),
}

/// The tracker's sole output artifact: one immutable, display-ready record.
///
/// Always published whole, never as partial field updates, so the consumer
/// cannot observe a torn state. Invariant: `visible == false` implies an
/// empty `status_text` and `progress == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Projected balance, `None` before the first projection and after
    /// teardown.
    pub balance_text: Option<String>,
    /// User-facing confirmation status line.
    pub status_text: String,
    /// Fraction in `[0, 1]`, or `-1` for an indeterminate spinner.
    pub progress: f64,
    pub visible: bool,
    pub indicator_size_px: f64,
}

impl ViewState {
    /// The reset state used before first data and after teardown.
    pub fn neutral() -> Self {
        Self {
            balance_text: None,
            status_text: String::new(),
            progress: 0.0,
            visible: false,
            indicator_size_px: INDICATOR_SIZE_DEFAULT,
        }
    }
}
