use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use bitcoin::{Amount, Txid};

use crate::tracker::wallet::api::{ListenerId, TxSnapshot, WalletApi, WalletReader};

/// Pure in-memory wallet handle for tests and the demo binary.
///
/// Transactions keep insertion order, so tie-breaks in the latest-tx scan
/// are deterministic for a scripted scenario. Interior mutability lets the
/// handle be shared by reference, matching the single-threaded model.
pub struct MockWallet {
    balance: Cell<Amount>,
    transactions: RefCell<Vec<TxSnapshot>>,
    subscribers: RefCell<BTreeSet<ListenerId>>,
    next_listener: Cell<u64>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self {
            balance: Cell::new(Amount::ZERO),
            transactions: RefCell::new(Vec::new()),
            subscribers: RefCell::new(BTreeSet::new()),
            next_listener: Cell::new(0),
        }
    }

    pub fn set_balance(&self, balance: Amount) {
        self.balance.set(balance);
    }

    /// Inserts the snapshot, or replaces an existing one in place so the
    /// transaction keeps its position in the iteration order.
    pub fn upsert_tx(&self, tx: TxSnapshot) {
        let mut txs = self.transactions.borrow_mut();
        match txs.iter_mut().find(|t| t.txid == tx.txid) {
            Some(slot) => *slot = tx,
            None => txs.push(tx),
        }
    }

    pub fn remove_tx(&self, txid: Txid) {
        self.transactions.borrow_mut().retain(|t| t.txid != txid);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletReader for MockWallet {
    fn balance(&self) -> Amount {
        self.balance.get()
    }

    fn transactions(&self) -> Vec<TxSnapshot> {
        self.transactions.borrow().clone()
    }
}

impl WalletApi for MockWallet {
    fn subscribe(&self) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.subscribers.borrow_mut().insert(id);
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.subscribers.borrow_mut().remove(&id)
    }
}
