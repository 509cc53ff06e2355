use bitcoin::{Amount, Txid};

use crate::tracker::domain::confidence::ConfidenceSignal;

/// Immutable snapshot of one wallet transaction at observation time.
///
/// The tracker never mutates a snapshot; a fresh set is read from the
/// wallet whenever an event makes it relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSnapshot {
    /// Stable transaction hash.
    pub txid: Txid,
    /// Unix timestamp (seconds) of the wallet's last update to this tx.
    pub last_updated: u64,
    /// Current confidence signal as reported by the wallet.
    pub confidence: ConfidenceSignal,
}

/// Handle returned by [`WalletApi::subscribe`], used to unsubscribe again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Read-only view of the wallet the tracker observes.
///
/// The handle is borrowed, never owned; several trackers may observe the
/// same handle independently. Callers must serialize access externally,
/// the tracker itself takes no locks.
pub trait WalletReader {
    /// Current spendable balance.
    fn balance(&self) -> Amount;

    /// Current snapshots of all known transactions. The collection is
    /// unordered from the tracker's point of view; whatever order the
    /// wallet yields is the order tie-breaks are resolved in.
    fn transactions(&self) -> Vec<TxSnapshot>;
}

/// Full wallet handle: reads plus the mutation-event subscription pair.
///
/// Event delivery itself is push-style: whoever runs the wallet's dispatch
/// loop hands each [`crate::tracker::engine::types::WalletEvent`] to the
/// driver. The subscription only records interest so the wallet knows the
/// tracker is listening.
pub trait WalletApi: WalletReader {
    fn subscribe(&self) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

impl<W: WalletReader + ?Sized> WalletReader for &W {
    fn balance(&self) -> Amount {
        (**self).balance()
    }

    fn transactions(&self) -> Vec<TxSnapshot> {
        (**self).transactions()
    }
}

impl<W: WalletApi + ?Sized> WalletApi for &W {
    fn subscribe(&self) -> ListenerId {
        (**self).subscribe()
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        (**self).unsubscribe(id)
    }
}
