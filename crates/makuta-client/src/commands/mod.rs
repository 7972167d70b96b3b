mod common;
pub mod export;
pub mod stats;
pub mod transactions;
pub mod wallet;
