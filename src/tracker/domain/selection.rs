use crate::tracker::wallet::api::TxSnapshot;

/// Picks the transaction with the greatest update timestamp.
///
/// Single left-to-right scan keeping the strictly greatest `last_updated`,
/// so among exact timestamp ties the *first* snapshot in iteration order
/// wins. The wallet hands the snapshots back in whatever order it keeps
/// them, so callers must not rely on a particular winner among exact ties.
///
/// `None` means "no status update this cycle", not an error.
pub fn select_latest(transactions: &[TxSnapshot]) -> Option<&TxSnapshot> {
    let mut latest: Option<&TxSnapshot> = None;
    for tx in transactions {
        match latest {
            Some(current) if tx.last_updated > current.last_updated => latest = Some(tx),
            None => latest = Some(tx),
            _ => {}
        }
    }
    latest
}
