use bitcoin::{Amount, Txid};

use crate::tracker::domain::{balance, confidence, selection};
use crate::tracker::domain::confidence::{ConfidenceSignal, PROGRESS_INDETERMINATE};
use crate::tracker::engine::state::TrackerState;
use crate::tracker::engine::types::{TrackerCommand, TrackerMode};
use crate::tracker::wallet::api::WalletReader;

/// Synchronous catch-up performed once at attach time: project the current
/// balance, and in pinned mode also classify the pinned transaction's
/// current confidence.
pub fn catch_up<W: WalletReader>(state: &mut TrackerState, wallet: &W) {
    update_balance(state, wallet, wallet.balance());

    if let TrackerMode::Pinned(pinned) = state.mode {
        let signal = pinned_signal(wallet, pinned);
        state.apply(confidence::classify(&signal));
    }
}

pub fn on_balance_changed<W: WalletReader>(
    state: &mut TrackerState,
    wallet: &W,
    txid: Txid,
    new_balance: Amount,
) -> Vec<TrackerCommand> {
    if let TrackerMode::Pinned(pinned) = state.mode {
        if txid != pinned {
            log::trace!(
                "[TRACKER] balance event for {} ignored, pinned to {}",
                txid,
                pinned
            );
            return Vec::new();
        }
    }

    update_balance(state, wallet, new_balance);
    vec![TrackerCommand::Publish(state.view())]
}

pub fn on_confidence_changed<W: WalletReader>(
    state: &mut TrackerState,
    wallet: &W,
    txid: Txid,
) -> Vec<TrackerCommand> {
    match state.mode {
        TrackerMode::WholeWallet => {
            let transactions = wallet.transactions();
            match selection::select_latest(&transactions) {
                Some(latest) => {
                    state.apply(confidence::classify(&latest.confidence));
                    vec![TrackerCommand::Publish(state.view())]
                }
                // Empty set: no status update this cycle.
                None => Vec::new(),
            }
        }
        TrackerMode::Pinned(pinned) => {
            if txid != pinned {
                log::trace!(
                    "[TRACKER] confidence event for {} ignored, pinned to {}",
                    txid,
                    pinned
                );
                return Vec::new();
            }
            // Classify the wallet's current view of the pinned transaction,
            // never the event payload.
            let signal = pinned_signal(wallet, pinned);
            state.apply(confidence::classify(&signal));
            vec![TrackerCommand::Publish(state.view())]
        }
    }
}

/// Shared balance pipeline for catch-up and coins-received/sent events.
///
/// A positive balance makes the view visible with indeterminate progress;
/// the latest-transaction scan then overwrites it with a real
/// classification when the winner is relevant to the tracker's mode.
fn update_balance<W: WalletReader>(state: &mut TrackerState, wallet: &W, new_balance: Amount) {
    state.balance_text = Some(balance::project(new_balance));

    if new_balance > Amount::ZERO {
        state.visible = true;
        state.progress = PROGRESS_INDETERMINATE;

        let transactions = wallet.transactions();
        if let Some(latest) = selection::select_latest(&transactions) {
            let relevant = match state.mode {
                TrackerMode::WholeWallet => true,
                TrackerMode::Pinned(pinned) => latest.txid == pinned,
            };
            if relevant {
                state.apply(confidence::classify(&latest.confidence));
            }
        }
    }
}

/// Re-reads the pinned transaction's current signal from the wallet. A
/// pinned transaction the wallet no longer reports degrades to `Unknown`
/// instead of failing, with a diagnostic record.
fn pinned_signal<W: WalletReader>(wallet: &W, pinned: Txid) -> ConfidenceSignal {
    match wallet.transactions().into_iter().find(|tx| tx.txid == pinned) {
        Some(tx) => tx.confidence,
        None => {
            log::warn!(
                "[TRACKER] pinned transaction {} not reported by wallet, classifying as unknown",
                pinned
            );
            ConfidenceSignal::Unknown
        }
    }
}
