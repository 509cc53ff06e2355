pub mod balance;
pub mod confidence;
pub mod selection;
