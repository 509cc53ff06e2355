//! Transaction-confirmation status tracking for a wallet's event stream.
//!
//! The crate derives a user-facing confirmation state (pending, confirming,
//! confirmed, invalid) plus a bounded progress fraction from wallet
//! mutation events, either for whichever transaction most recently touched
//! the wallet or for one pinned transaction.

pub mod tracker;

pub use tracker::domain::confidence::{classify, Classification, ConfidenceSignal};
pub use tracker::engine::{ConfidenceTracker, TrackerCommand, TrackerMode, ViewState, WalletEvent};
pub use tracker::runtime::{ViewSink, WalletDriver};
pub use tracker::wallet::api::{ListenerId, TxSnapshot, WalletApi, WalletReader};
pub use tracker::wallet::mock::MockWallet;
