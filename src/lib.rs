pub mod config;
pub mod error;
pub mod input;
pub mod inspector;
pub mod network;
pub mod setup_logger;

pub use error::{DecodeError, InitProcessError, InputError};
pub use inspector::TcpHeaderSummary;
pub use network::packet::{FlagSet, HeaderView, HEADER_LEN};
pub use network::HeaderBatch;
