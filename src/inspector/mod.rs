pub mod tcp_header;

pub use tcp_header::TcpHeaderSummary;
