use crate::network::packet::tcp::{FlagSet, HeaderView};
use serde::Serialize;
use std::fmt;

/// デコード済みTCPヘッダの表示用スナップショット
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcpHeaderSummary {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence_number: u32,
    pub ack_number: u32,
    pub data_offset: u8,
    pub reserved: u8,
    pub flags: FlagSet,
    pub window: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
    pub header_len: usize,
}

impl TcpHeaderSummary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&HeaderView<'_>> for TcpHeaderSummary {
    fn from(view: &HeaderView<'_>) -> Self {
        Self {
            source_port: view.source_port(),
            destination_port: view.destination_port(),
            sequence_number: view.sequence_number(),
            ack_number: view.ack_number(),
            data_offset: view.data_offset(),
            reserved: view.reserved(),
            flags: view.flags(),
            window: view.window(),
            checksum: view.checksum(),
            urgent_pointer: view.urgent_pointer(),
            header_len: view.header_len(),
        }
    }
}

impl fmt::Display for TcpHeaderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "送信元ポート: {}", self.source_port)?;
        writeln!(f, "宛先ポート: {}", self.destination_port)?;
        writeln!(f, "シーケンス番号: {}", self.sequence_number)?;
        writeln!(f, "確認応答番号: {}", self.ack_number)?;
        writeln!(f, "データオフセット: {} ({}バイト)", self.data_offset, self.header_len)?;
        writeln!(f, "予約: {}", self.reserved)?;
        writeln!(f, "フラグ: {}", self.flags)?;
        writeln!(f, "ウィンドウ: {}", self.window)?;
        writeln!(f, "チェックサム: {}", self.checksum)?;
        write!(f, "緊急ポインタ: {}", self.urgent_pointer)
    }
}
