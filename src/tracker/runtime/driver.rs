use crate::tracker::engine::{ConfidenceTracker, TrackerCommand, TrackerMode, ViewState, WalletEvent};
use crate::tracker::wallet::api::{ListenerId, WalletApi};

/// Consumer of published view states. The tracker always hands over one
/// complete record per update, never partial fields.
pub trait ViewSink {
    fn publish(&mut self, state: ViewState);
}

impl<F: FnMut(ViewState)> ViewSink for F {
    fn publish(&mut self, state: ViewState) {
        self(state)
    }
}

/// Drives the [`ConfidenceTracker`] against a wallet handle and a UI sink.
///
/// The driver owns the imperative shell: it executes the engine's commands
/// (subscription bookkeeping, publishing) while the engine stays pure.
/// Dropping the driver detaches it; `detach` is also safe to call manually
/// any number of times.
pub struct WalletDriver<W: WalletApi, S: ViewSink> {
    tracker: ConfidenceTracker,
    wallet: W,
    sink: S,
    listener: Option<ListenerId>,
}

impl<W: WalletApi, S: ViewSink> WalletDriver<W, S> {
    /// Attaches a tracker to the wallet and runs its catch-up commands,
    /// so the sink receives the initial view state before this returns.
    pub fn attach(wallet: W, mode: TrackerMode, sink: S) -> Self {
        log::debug!("[DRIVER] attach, mode = {:?}", mode);
        let (tracker, cmds) = ConfidenceTracker::attach(&wallet, mode);
        let mut driver = Self {
            tracker,
            wallet,
            sink,
            listener: None,
        };
        driver.execute(cmds);
        driver
    }

    /// Delivers one wallet event. The wallet's dispatch loop calls this
    /// serially; handlers run to completion before the next event.
    pub fn dispatch(&mut self, event: WalletEvent) {
        log::trace!("[DRIVER] dispatch {:?}", event);
        let cmds = self.tracker.handle_event(&self.wallet, event);
        self.execute(cmds);
    }

    /// Tears the tracker down. Idempotent; the first call publishes the
    /// neutral view state and deregisters from the wallet.
    pub fn detach(&mut self) {
        let cmds = self.tracker.destroy();
        self.execute(cmds);
    }

    fn execute(&mut self, cmds: Vec<TrackerCommand>) {
        for cmd in cmds {
            match cmd {
                TrackerCommand::Subscribe => {
                    let id = self.wallet.subscribe();
                    log::trace!("[DRIVER] subscribed as {:?}", id);
                    self.listener = Some(id);
                }
                TrackerCommand::Unsubscribe => {
                    let was_subscribed = self
                        .listener
                        .take()
                        .map(|id| self.wallet.unsubscribe(id))
                        .unwrap_or(false);
                    log::trace!("[DRIVER] detach, was_subscribed = {}", was_subscribed);
                }
                TrackerCommand::Publish(state) => {
                    log::trace!("[DRIVER] publish {:?}", state);
                    self.sink.publish(state);
                }
            }
        }
    }
}

impl<W: WalletApi, S: ViewSink> Drop for WalletDriver<W, S> {
    fn drop(&mut self) {
        self.detach();
    }
}
