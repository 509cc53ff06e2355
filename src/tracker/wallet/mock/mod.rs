mod client;

pub use client::MockWallet;
