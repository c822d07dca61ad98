// 0                   1                   2                   3
// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |          Source Port          |       Destination Port        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                        Sequence Number                        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    Acknowledgment Number                      |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |  Data | Res |S|A|R|F|P|U|     |                               |
// | Offset|     |Y|C|S|I|S|R|     |            Window             |
// |       |     |N|K|T|N|H|G|     |                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |           Checksum            |         Urgent Pointer        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
use crate::error::DecodeError;
use pnet::packet::tcp::TcpPacket;
use pnet::packet::Packet;
use serde::Serialize;
use std::fmt;

/// オプションを除いた固定長ヘッダのバイト数
pub const HEADER_LEN: usize = 20;

// バイト12: DO(4bit) | RSV(3bit) | SYN(1bit)
const DATA_OFFSET_SHIFT: u8 = 4;
const RESERVED_SHIFT: u8 = 1;
const RESERVED_MASK: u8 = 0b0000_0111;
const SYN_MASK: u8 = 0b0000_0001;

// バイト13: ACK | RST | FIN | PSH | URG | (未デコード3bit)
const ACK_MASK: u8 = 0b1000_0000;
const RST_MASK: u8 = 0b0100_0000;
const FIN_MASK: u8 = 0b0010_0000;
const PSH_MASK: u8 = 0b0001_0000;
const URG_MASK: u8 = 0b0000_1000;

/// 制御フラグ。各フィールドはヘッダの1ビットにそのまま対応する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlagSet {
    pub syn: bool,
    pub ack: bool,
    pub rst: bool,
    pub fin: bool,
    pub psh: bool,
    pub urg: bool,
}

impl FlagSet {
    fn from_control_bytes(b12: u8, b13: u8) -> Self {
        Self {
            syn: (b12 & SYN_MASK) != 0,
            ack: (b13 & ACK_MASK) != 0,
            rst: (b13 & RST_MASK) != 0,
            fin: (b13 & FIN_MASK) != 0,
            psh: (b13 & PSH_MASK) != 0,
            urg: (b13 & URG_MASK) != 0,
        }
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.syn, "SYN"),
            (self.ack, "ACK"),
            (self.rst, "RST"),
            (self.fin, "FIN"),
            (self.psh, "PSH"),
            (self.urg, "URG"),
        ];

        let mut first = true;
        for (set, name) in names {
            if set {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}

/// TCPヘッダの読み取り専用ビュー。
///
/// 構築時に長さを検査するため、以降のアクセサは失敗しない。
/// 読むのは先頭20バイトのみで、オプション領域は解釈しない。
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    bytes: &'a [u8],
}

impl<'a> HeaderView<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        if bytes.len() < HEADER_LEN {
            log::debug!("TCPヘッダの長さが不足しています: {}バイト", bytes.len());
            return Err(DecodeError::BufferTooShort {
                provided: bytes.len(),
                minimum: HEADER_LEN,
            });
        }

        Ok(Self { bytes })
    }

    /// 固定長部分(20バイト)のみを返す
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..HEADER_LEN]
    }

    pub fn source_port(&self) -> u16 {
        self.u16_at(0)
    }

    pub fn destination_port(&self) -> u16 {
        self.u16_at(2)
    }

    pub fn sequence_number(&self) -> u32 {
        self.u32_at(4)
    }

    pub fn ack_number(&self) -> u32 {
        self.u32_at(8)
    }

    /// ヘッダ長(4バイト単位)。0〜15。
    pub fn data_offset(&self) -> u8 {
        self.bytes[12] >> DATA_OFFSET_SHIFT
    }

    /// 予約ビット。0であるべきだが検証はせず値をそのまま返す。
    pub fn reserved(&self) -> u8 {
        (self.bytes[12] >> RESERVED_SHIFT) & RESERVED_MASK
    }

    pub fn flags(&self) -> FlagSet {
        FlagSet::from_control_bytes(self.bytes[12], self.bytes[13])
    }

    pub fn window(&self) -> u16 {
        self.u16_at(14)
    }

    pub fn checksum(&self) -> u16 {
        self.u16_at(16)
    }

    pub fn urgent_pointer(&self) -> u16 {
        self.u16_at(18)
    }

    /// データオフセットから求めたヘッダ長(バイト)。妥当性は検査しない。
    pub fn header_len(&self) -> usize {
        self.data_offset() as usize * 4
    }

    fn u16_at(&self, offset: usize) -> u16 {
        u16::from_be_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_be_bytes([
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ])
    }
}

impl<'a> TryFrom<&'a TcpPacket<'a>> for HeaderView<'a> {
    type Error = DecodeError;

    fn try_from(packet: &'a TcpPacket<'a>) -> Result<Self, Self::Error> {
        HeaderView::new(packet.packet())
    }
}
