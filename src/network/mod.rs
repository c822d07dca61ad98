pub mod batch;
pub mod packet;

pub use batch::HeaderBatch;
