//! Confirmation-status tracking engine.
//!
//! This module is the **functional core** of the tracker. It acts as a pure
//! state machine over the wallet's serialized event stream:
//! - **Input**: [`WalletEvent`] plus read access to the wallet handle.
//! - **Output**: `Vec<TrackerCommand>` (side effects for the driver).
//!
//! # Architecture guarantees
//! * **No IO**: the engine never touches the UI or the subscription
//!   registry itself; it only emits commands.
//! * **No locking**: events are assumed already serialized by the caller.
//! * **Deterministic**: given the same wallet contents and event sequence,
//!   the emitted commands are always identical.

pub mod state;
mod logic;
pub mod types;


pub use crate::tracker::engine::types::{TrackerCommand, TrackerMode, ViewState, WalletEvent};

use crate::tracker::engine::state::{Lifecycle, TrackerState};
use crate::tracker::wallet::api::WalletReader;

/// The confirmation-status tracker.
///
/// Holds at most one logical subscription at a time; [`destroy`] is
/// idempotent and leaves the instance permanently inert.
///
/// [`destroy`]: ConfidenceTracker::destroy
#[derive(Debug)]
pub struct ConfidenceTracker {
    state: TrackerState,
}

impl ConfidenceTracker {
    /// Creates a tracker in the given mode and performs the synchronous
    /// catch-up pass over the wallet's current balance and transactions.
    ///
    /// The returned commands register the subscription and publish the
    /// catch-up view state; the driver must execute them before delivering
    /// any events.
    pub fn attach<W: WalletReader>(wallet: &W, mode: TrackerMode) -> (Self, Vec<TrackerCommand>) {
        let mut state = TrackerState::new(mode);
        logic::catch_up(&mut state, wallet);

        let cmds = vec![
            TrackerCommand::Subscribe,
            TrackerCommand::Publish(state.view()),
        ];
        (Self { state }, cmds)
    }

    /// The main event handler: consumes one wallet event and returns the
    /// commands the driver must execute.
    ///
    /// Events arriving after [`destroy`](Self::destroy) are ignored by
    /// contract.
    pub fn handle_event<W: WalletReader>(
        &mut self,
        wallet: &W,
        event: WalletEvent,
    ) -> Vec<TrackerCommand> {
        if self.state.lifecycle == Lifecycle::Detached {
            log::trace!("[TRACKER] event after detach ignored: {:?}", event);
            return Vec::new();
        }

        match event {
            WalletEvent::CoinsReceived { txid, new_balance }
            | WalletEvent::CoinsSent { txid, new_balance } => {
                logic::on_balance_changed(&mut self.state, wallet, txid, new_balance)
            }
            WalletEvent::ConfidenceChanged { txid } => {
                logic::on_confidence_changed(&mut self.state, wallet, txid)
            }
            // Accepted, deliberately inert.
            WalletEvent::Reorganized | WalletEvent::WalletChanged => Vec::new(),
        }
    }

    /// Tears the tracker down: deregisters the subscription and publishes
    /// the neutral view state. Safe to call any number of times; only the
    /// first call emits commands.
    pub fn destroy(&mut self) -> Vec<TrackerCommand> {
        if self.state.lifecycle == Lifecycle::Detached {
            return Vec::new();
        }
        self.state.lifecycle = Lifecycle::Detached;
        self.state.reset();

        vec![
            TrackerCommand::Unsubscribe,
            TrackerCommand::Publish(ViewState::neutral()),
        ]
    }
}
