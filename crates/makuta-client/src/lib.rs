pub mod backend;
pub mod commands;
pub mod contracts;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod records;
pub mod snapshot;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
