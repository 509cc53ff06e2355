use anyhow::Result;
use bitcoin::hashes::Hash;
use bitcoin::{Amount, Txid};
use clap::{Parser, ValueEnum};

use wallet_confidence::{
    ConfidenceSignal, MockWallet, TrackerMode, TxSnapshot, ViewState, WalletDriver, WalletEvent,
};

#[derive(ValueEnum, Clone, Debug)]
enum TrackMode {
    WholeWallet,
    Pinned,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = TrackMode::WholeWallet)]
    mode: TrackMode,

    /// How many confirmation blocks the scenario simulates.
    #[arg(long, default_value_t = 6)]
    confirmations: u32,

    /// Broadcast peer count while the deposit is still pending.
    #[arg(long, default_value_t = 2)]
    peers: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("[MAIN] Tracking mode: {:?}", args.mode);
    run_scenario(&args)
}

/// Replays a scripted deposit against the in-memory wallet: broadcast,
/// confirmation ladder, one chain reorg notification, teardown. Every
/// published view state is printed as one JSON line.
fn run_scenario(args: &Args) -> Result<()> {
    let deposit = txid(1);
    let noise = txid(2);

    let wallet = MockWallet::new();
    let mode = match args.mode {
        TrackMode::WholeWallet => TrackerMode::WholeWallet,
        TrackMode::Pinned => TrackerMode::Pinned(deposit),
    };

    let sink = |state: ViewState| match serde_json::to_string(&state) {
        Ok(line) => println!("{}", line),
        Err(err) => log::error!("[MAIN] failed to encode view state: {}", err),
    };
    let mut driver = WalletDriver::attach(&wallet, mode, sink);

    // Deposit is broadcast and seen by peers.
    let amount = Amount::from_btc(0.5)?;
    wallet.set_balance(amount);
    wallet.upsert_tx(TxSnapshot {
        txid: deposit,
        last_updated: 1,
        confidence: ConfidenceSignal::Pending { peers: args.peers },
    });
    driver.dispatch(WalletEvent::CoinsReceived {
        txid: deposit,
        new_balance: amount,
    });

    // An unrelated payment arrives; in pinned mode this leaves the
    // published state untouched.
    wallet.upsert_tx(TxSnapshot {
        txid: noise,
        last_updated: 2,
        confidence: ConfidenceSignal::Pending { peers: 1 },
    });
    driver.dispatch(WalletEvent::CoinsReceived {
        txid: noise,
        new_balance: amount,
    });

    // Confirmation ladder, fed as raw (code, peers, depth) triples the way
    // a node feed would report them.
    for depth in 1..=args.confirmations {
        wallet.upsert_tx(TxSnapshot {
            txid: deposit,
            last_updated: u64::from(2 + depth),
            confidence: ConfidenceSignal::from_raw(1, 0, depth),
        });
        driver.dispatch(WalletEvent::ConfidenceChanged { txid: deposit });
    }

    // A reorg notification is accepted but publishes nothing.
    driver.dispatch(WalletEvent::Reorganized);

    driver.detach();
    Ok(())
}

fn txid(tag: u8) -> Txid {
    Txid::from_byte_array([tag; 32])
}
