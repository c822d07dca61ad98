use crate::error::DecodeError;
use crate::network::packet::tcp::{HeaderView, HEADER_LEN};
use bytes::Bytes;

/// 20バイトずつ連結されたTCPヘッダ群
#[derive(Debug, Clone)]
pub struct HeaderBatch {
    buf: Bytes,
}

impl HeaderBatch {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self { buf: buf.into() }
    }

    /// iter() が返す要素数。末尾の半端なチャンクも1件と数える。
    pub fn len(&self) -> usize {
        self.buf.len().div_ceil(HEADER_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 末尾に残った半端なバイト数
    pub fn remainder(&self) -> usize {
        self.buf.len() % HEADER_LEN
    }

    /// 末尾の半端なチャンクは BufferTooShort として返す
    pub fn iter(&self) -> impl Iterator<Item = Result<HeaderView<'_>, DecodeError>> {
        self.buf.chunks(HEADER_LEN).map(HeaderView::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    fn header(src_port: u16) -> [u8; 20] {
        let mut buf = [0u8; 20];
        buf[..2].copy_from_slice(&src_port.to_be_bytes());
        buf[12] = 0x50;
        buf
    }

    #[test]
    fn test_batch_decodes_each_header() {
        let mut buf = BytesMut::new();
        for port in [80u16, 443, 8080] {
            buf.extend_from_slice(&header(port));
        }

        let batch = HeaderBatch::new(buf.freeze());
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.remainder(), 0);

        let ports: Vec<u16> = batch
            .iter()
            .map(|view| view.unwrap().source_port())
            .collect();
        assert_eq!(ports, vec![80, 443, 8080]);
    }

    #[test]
    fn test_trailing_chunk_is_rejected() {
        let mut buf = header(22).to_vec();
        buf.extend_from_slice(&[0u8; 7]);

        let batch = HeaderBatch::new(buf);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.remainder(), 7);

        let results: Vec<_> = batch.iter().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().source_port(), 22);
        assert_eq!(
            results[1].as_ref().unwrap_err(),
            &DecodeError::BufferTooShort { provided: 7, minimum: HEADER_LEN }
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch = HeaderBatch::new(Bytes::new());
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(batch.iter().count(), 0);
    }

    #[test]
    fn test_tail_only_batch() {
        let batch = HeaderBatch::new(vec![0u8; 7]);

        assert!(!batch.is_empty());
        assert_eq!(batch.is_empty(), batch.len() == 0);
        assert_eq!(batch.len(), batch.iter().count());
        assert_eq!(batch.remainder(), 7);
        assert!(batch.iter().all(|view| view.is_err()));
    }
}
