pub mod tcp;

pub use tcp::{FlagSet, HeaderView, HEADER_LEN};
