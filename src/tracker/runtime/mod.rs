mod driver;


pub use driver::{ViewSink, WalletDriver};
