//! A single compressed block (`ObjectType::LogContainer`).

use crate::codec;
use crate::error::{BlfError, Result};
use crate::header::{ObjectHeaderBase, BASE_HEADER_SIZE, OBJECT_SIGNATURE};
use crate::object_type::ObjectType;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Cursor, Read, Write};

pub const CONTAINER_HEADER_SIZE: u16 = 16;
pub const COMPRESSION_NONE: u16 = 0;
pub const COMPRESSION_ZLIB: u16 = 2;

/// One on-disk container: an `ObjectHeaderBase` followed by a 16-byte
/// container header and the (possibly compressed) payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContainer {
    pub compression_method: u16,
    /// Must round-trip (the reference layout treats it as opaque bytes, not padding).
    pub reserved: [u8; 6],
    pub uncompressed_file_size: u32,
    pub reserved2: u32,
    /// The raw bytes as they appear on disk (compressed if `compression_method == COMPRESSION_ZLIB`).
    pub compressed_data: Vec<u8>,
}

impl LogContainer {
    /// Builds a container holding already-inflated bytes, compressing them at `level`.
    /// `level == 0` stores the bytes uncompressed.
    pub fn from_plaintext(data: &[u8], level: u32) -> Result<Self> {
        let (method, bytes) = if level == 0 {
            (COMPRESSION_NONE, data.to_vec())
        } else {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
            encoder
                .write_all(data)
                .map_err(|e| BlfError::Compression(e.to_string()))?;
            let compressed = encoder
                .finish()
                .map_err(|e| BlfError::Compression(e.to_string()))?;
            (COMPRESSION_ZLIB, compressed)
        };
        Ok(Self {
            compression_method: method,
            reserved: [0; 6],
            uncompressed_file_size: data.len() as u32,
            reserved2: 0,
            compressed_data: bytes,
        })
    }

    /// Inflates the payload back to plaintext bytes.
    pub fn inflate(&self) -> Result<Vec<u8>> {
        match self.compression_method {
            COMPRESSION_NONE => {
                if self.compressed_data.len() != self.uncompressed_file_size as usize {
                    return Err(BlfError::Compression(format!(
                        "stored container size mismatch: {} bytes on disk, {} expected",
                        self.compressed_data.len(),
                        self.uncompressed_file_size
                    )));
                }
                Ok(self.compressed_data.clone())
            }
            COMPRESSION_ZLIB => {
                let mut decoder = ZlibDecoder::new(&self.compressed_data[..]);
                let mut out = Vec::with_capacity(self.uncompressed_file_size as usize);
                decoder
                    .read_to_end(&mut out)
                    .map_err(|e| BlfError::Compression(e.to_string()))?;
                Ok(out)
            }
            other => Err(BlfError::Compression(format!("unsupported compression method {other}"))),
        }
    }

    pub fn object_size(&self) -> u32 {
        BASE_HEADER_SIZE as u32 + CONTAINER_HEADER_SIZE as u32 + self.compressed_data.len() as u32
    }

    /// Reads a full container (base header already consumed) given its `object_size`.
    pub fn read(cursor: &mut Cursor<&[u8]>, base: ObjectHeaderBase) -> Result<Self> {
        let compression_method = codec::read_u16(cursor)?;
        let reserved = codec::read_array::<6>(cursor)?;
        let uncompressed_file_size = codec::read_u32(cursor)?;
        let reserved2 = codec::read_u32(cursor)?;

        let header_size = base.header_size.max(BASE_HEADER_SIZE + CONTAINER_HEADER_SIZE) as u32;
        let compressed_len = (base.object_size as usize).saturating_sub(header_size as usize);
        let compressed_data = codec::read_bytes(cursor, compressed_len)?;

        Ok(Self { compression_method, reserved, uncompressed_file_size, reserved2, compressed_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let base = ObjectHeaderBase {
            signature: OBJECT_SIGNATURE,
            header_size: BASE_HEADER_SIZE + CONTAINER_HEADER_SIZE,
            header_version: 1,
            object_size: self.object_size(),
            object_type: ObjectType::LogContainer,
        };
        base.write(writer)?;
        codec::write_u16(writer, self.compression_method)?;
        codec::write_bytes(writer, &self.reserved)?;
        codec::write_u32(writer, self.uncompressed_file_size)?;
        codec::write_u32(writer, self.reserved2)?;
        codec::write_bytes(writer, &self.compressed_data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_stored_container() {
        let payload = b"hello blf".to_vec();
        let container = LogContainer::from_plaintext(&payload, 0).unwrap();
        assert_eq!(container.compression_method, COMPRESSION_NONE);
        assert_eq!(container.inflate().unwrap(), payload);
    }

    #[test]
    fn round_trips_compressed_container() {
        let payload: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        let container = LogContainer::from_plaintext(&payload, 6).unwrap();
        assert_eq!(container.compression_method, COMPRESSION_ZLIB);
        assert!(container.compressed_data.len() < payload.len());
        assert_eq!(container.inflate().unwrap(), payload);
    }

    #[test]
    fn write_then_read_preserves_reserved_bytes() {
        let mut container = LogContainer::from_plaintext(b"abc", 0).unwrap();
        container.reserved = [1, 2, 3, 4, 5, 6];
        let mut buf = Vec::new();
        container.write(&mut buf).unwrap();

        let mut cursor = Cursor::new(&buf[..]);
        let base = ObjectHeaderBase::read(&mut cursor).unwrap();
        let parsed = LogContainer::read(&mut cursor, base).unwrap();
        assert_eq!(parsed.reserved, [1, 2, 3, 4, 5, 6]);
        assert_eq!(parsed.inflate().unwrap(), b"abc");
    }
}
