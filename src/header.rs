//! The object header protocol shared by every on-disk object:
//! `ObjectHeaderBase` (16 bytes) extended by either `ObjectHeader` v1 (+16 B)
//! or `ObjectHeader2` v2 (+24 B).

use crate::codec;
use crate::error::{BlfError, Result};
use crate::object_type::ObjectType;
use std::io::{Cursor, Write};

pub const OBJECT_SIGNATURE: u32 = 0x4A42_4F4C; // "LOBJ"

pub const BASE_HEADER_SIZE: u16 = 16;
pub const HEADER_V1_SIZE: u16 = BASE_HEADER_SIZE + 16;
pub const HEADER_V2_SIZE: u16 = BASE_HEADER_SIZE + 24;

/// Flag bits carried in `ObjectHeader::object_flags`.
pub mod object_flags {
    pub const TIME_TEN_MICS: u32 = 1 << 0;
    pub const TIME_ONE_NANS: u32 = 1 << 1;
}

/// The 16-byte prefix common to every on-disk object, including `LogContainer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectHeaderBase {
    pub signature: u32,
    pub header_size: u16,
    pub header_version: u16,
    pub object_size: u32,
    pub object_type: ObjectType,
}

impl ObjectHeaderBase {
    pub fn read(cursor: &mut Cursor<&[u8]>) -> Result<Self> {
        let signature = codec::read_u32(cursor)?;
        if signature != OBJECT_SIGNATURE {
            return Err(BlfError::BadSignature { expected: OBJECT_SIGNATURE, found: signature });
        }
        let header_size = codec::read_u16(cursor)?;
        let header_version = codec::read_u16(cursor)?;
        let object_size = codec::read_u32(cursor)?;
        let object_type = ObjectType::from(codec::read_u32(cursor)?);
        Ok(Self { signature, header_size, header_version, object_size, object_type })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        codec::write_u32(writer, self.signature)?;
        codec::write_u16(writer, self.header_size)?;
        codec::write_u16(writer, self.header_version)?;
        codec::write_u32(writer, self.object_size)?;
        codec::write_u32(writer, self.object_type.into())?;
        Ok(())
    }
}

/// The header of one event object: the base prefix plus the version-specific
/// timestamp fields. `header_version` on `base` selects which on-disk shape
/// was actually used, independent of what a given event variant nominally expects
/// (some producers write v1 headers on events documented as v2 — see `DESIGN.md`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectHeader {
    pub base: ObjectHeaderBase,
    pub object_flags: u32,
    /// v1 only; zero on v2.
    pub client_index: u16,
    pub object_version: u16,
    pub object_time_stamp: u64,
    /// v2 only.
    pub time_stamp_status: Option<u8>,
    /// v2 only.
    pub original_time_stamp: Option<u64>,
}

impl ObjectHeader {
    pub fn new_v1(object_type: ObjectType, object_time_stamp: u64, flags: u32) -> Self {
        Self {
            base: ObjectHeaderBase {
                signature: OBJECT_SIGNATURE,
                header_size: HEADER_V1_SIZE,
                header_version: 1,
                object_size: 0,
                object_type,
            },
            object_flags: flags,
            client_index: 0,
            object_version: 0,
            object_time_stamp,
            time_stamp_status: None,
            original_time_stamp: None,
        }
    }

    pub fn new_v2(object_type: ObjectType, object_time_stamp: u64, flags: u32) -> Self {
        Self {
            base: ObjectHeaderBase {
                signature: OBJECT_SIGNATURE,
                header_size: HEADER_V2_SIZE,
                header_version: 2,
                object_size: 0,
                object_type,
            },
            object_flags: flags,
            client_index: 0,
            object_version: 0,
            object_time_stamp,
            time_stamp_status: Some(0),
            original_time_stamp: Some(object_time_stamp),
        }
    }

    /// Reads the version-specific extension given an already-read base header.
    pub fn read(cursor: &mut Cursor<&[u8]>, base: ObjectHeaderBase) -> Result<Self> {
        match base.header_version {
            1 => {
                let object_flags = codec::read_u32(cursor)?;
                let client_index = codec::read_u16(cursor)?;
                let object_version = codec::read_u16(cursor)?;
                let object_time_stamp = codec::read_u64(cursor)?;
                Ok(Self {
                    base,
                    object_flags,
                    client_index,
                    object_version,
                    object_time_stamp,
                    time_stamp_status: None,
                    original_time_stamp: None,
                })
            }
            2 => {
                let object_flags = codec::read_u32(cursor)?;
                let time_stamp_status = codec::read_u8(cursor)?;
                codec::skip(cursor, 1)?; // reserved byte sharing the v1 client_index slot
                let object_version = codec::read_u16(cursor)?;
                let object_time_stamp = codec::read_u64(cursor)?;
                let original_time_stamp = codec::read_u64(cursor)?;
                Ok(Self {
                    base,
                    object_flags,
                    client_index: 0,
                    object_version,
                    object_time_stamp,
                    time_stamp_status: Some(time_stamp_status),
                    original_time_stamp: Some(original_time_stamp),
                })
            }
            other => Err(BlfError::UnknownType(other as u32)),
        }
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.base.write(writer)?;
        match self.base.header_version {
            1 => {
                codec::write_u32(writer, self.object_flags)?;
                codec::write_u16(writer, self.client_index)?;
                codec::write_u16(writer, self.object_version)?;
                codec::write_u64(writer, self.object_time_stamp)?;
            }
            2 => {
                codec::write_u32(writer, self.object_flags)?;
                codec::write_u8(writer, self.time_stamp_status.unwrap_or(0))?;
                codec::write_u8(writer, 0)?; // reserved
                codec::write_u16(writer, self.object_version)?;
                codec::write_u64(writer, self.object_time_stamp)?;
                codec::write_u64(writer, self.original_time_stamp.unwrap_or(0))?;
            }
            other => return Err(BlfError::UnknownType(other as u32)),
        }
        Ok(())
    }

    pub fn calculate_header_size(&self) -> u16 {
        match self.base.header_version {
            1 => HEADER_V1_SIZE,
            2 => HEADER_V2_SIZE,
            _ => self.base.header_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(header: ObjectHeader) {
        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        assert_eq!(buf.len(), header.calculate_header_size() as usize);
        let mut cursor = Cursor::new(&buf[..]);
        let base = ObjectHeaderBase::read(&mut cursor).unwrap();
        let parsed = ObjectHeader::read(&mut cursor, base).unwrap();
        assert_eq!(parsed.object_time_stamp, header.object_time_stamp);
        assert_eq!(parsed.base.object_type, header.base.object_type);
    }

    #[test]
    fn round_trips_v1_header() {
        round_trip(ObjectHeader::new_v1(ObjectType::CanMessage, 12345, object_flags::TIME_ONE_NANS));
    }

    #[test]
    fn round_trips_v2_header() {
        round_trip(ObjectHeader::new_v2(ObjectType::Most150Pkt, 5_708_800_000, object_flags::TIME_ONE_NANS));
    }

    #[test]
    fn rejects_bad_signature() {
        let mut buf = Vec::new();
        codec::write_u32(&mut buf, 0xDEAD_BEEF).unwrap();
        buf.extend_from_slice(&[0u8; 12]);
        let mut cursor = Cursor::new(&buf[..]);
        let err = ObjectHeaderBase::read(&mut cursor).unwrap_err();
        assert!(matches!(err, BlfError::BadSignature { .. }));
    }
}
