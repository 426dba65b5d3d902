//! The fixed 144-byte `FileStatistics` header at offset 0 of every BLF file.

use crate::codec;
use crate::error::{BlfError, Result};
use std::io::{Cursor, Write};

pub const FILE_SIGNATURE: u32 = 0x4747_4F4C; // "LOGG"
pub const STATISTICS_SIZE: u32 = 144;

/// The Windows `SYSTEMTIME` structure, as embedded twice in `FileStatistics`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemTime {
    pub year: u16,
    pub month: u16,
    pub day_of_week: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub milliseconds: u16,
}

impl SystemTime {
    pub fn read(cursor: &mut Cursor<&[u8]>) -> Result<Self> {
        Ok(Self {
            year: codec::read_u16(cursor)?,
            month: codec::read_u16(cursor)?,
            day_of_week: codec::read_u16(cursor)?,
            day: codec::read_u16(cursor)?,
            hour: codec::read_u16(cursor)?,
            minute: codec::read_u16(cursor)?,
            second: codec::read_u16(cursor)?,
            milliseconds: codec::read_u16(cursor)?,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        codec::write_u16(writer, self.year)?;
        codec::write_u16(writer, self.month)?;
        codec::write_u16(writer, self.day_of_week)?;
        codec::write_u16(writer, self.day)?;
        codec::write_u16(writer, self.hour)?;
        codec::write_u16(writer, self.minute)?;
        codec::write_u16(writer, self.second)?;
        codec::write_u16(writer, self.milliseconds)?;
        Ok(())
    }
}

/// The file-level header: application identity, sizes, counts, timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStatistics {
    pub statistics_size: u32,
    pub api_number: u32,
    pub application_id: u8,
    pub compression_level: u8,
    pub application_major: u8,
    pub application_minor: u8,
    pub file_size: u64,
    pub uncompressed_file_size: u64,
    pub object_count: u32,
    pub application_build: u32,
    pub measurement_start_time: SystemTime,
    pub last_object_time: SystemTime,
    /// File size before the `Unknown115` sentinel was appended at close.
    pub file_size_without_unknown115: u64,
}

impl Default for FileStatistics {
    fn default() -> Self {
        Self {
            statistics_size: STATISTICS_SIZE,
            api_number: 0,
            application_id: 0,
            compression_level: 6,
            application_major: 0,
            application_minor: 0,
            file_size: 0,
            uncompressed_file_size: 0,
            object_count: 0,
            application_build: 0,
            measurement_start_time: SystemTime::default(),
            last_object_time: SystemTime::default(),
            file_size_without_unknown115: 0,
        }
    }
}

impl FileStatistics {
    pub fn read(cursor: &mut Cursor<&[u8]>) -> Result<Self> {
        let signature = codec::read_u32(cursor)?;
        if signature != FILE_SIGNATURE {
            return Err(BlfError::BadSignature { expected: FILE_SIGNATURE, found: signature });
        }
        let statistics_size = codec::read_u32(cursor)?;
        let api_number = codec::read_u32(cursor)?;
        let application_id = codec::read_u8(cursor)?;
        let compression_level = codec::read_u8(cursor)?;
        let application_major = codec::read_u8(cursor)?;
        let application_minor = codec::read_u8(cursor)?;
        let file_size = codec::read_u64(cursor)?;
        let uncompressed_file_size = codec::read_u64(cursor)?;
        let object_count = codec::read_u32(cursor)?;
        let application_build = codec::read_u32(cursor)?;
        let measurement_start_time = SystemTime::read(cursor)?;
        let last_object_time = SystemTime::read(cursor)?;
        let file_size_without_unknown115 = codec::read_u64(cursor)?;

        let consumed = 4 + 4 + 4 + 1 + 1 + 1 + 1 + 8 + 8 + 4 + 4 + 16 + 16 + 8;
        let remaining = (statistics_size as usize).saturating_sub(consumed);
        codec::skip(cursor, remaining as u64)?;

        Ok(Self {
            statistics_size,
            api_number,
            application_id,
            compression_level,
            application_major,
            application_minor,
            file_size,
            uncompressed_file_size,
            object_count,
            application_build,
            measurement_start_time,
            last_object_time,
            file_size_without_unknown115,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        codec::write_u32(writer, FILE_SIGNATURE)?;
        codec::write_u32(writer, self.statistics_size)?;
        codec::write_u32(writer, self.api_number)?;
        codec::write_u8(writer, self.application_id)?;
        codec::write_u8(writer, self.compression_level)?;
        codec::write_u8(writer, self.application_major)?;
        codec::write_u8(writer, self.application_minor)?;
        codec::write_u64(writer, self.file_size)?;
        codec::write_u64(writer, self.uncompressed_file_size)?;
        codec::write_u32(writer, self.object_count)?;
        codec::write_u32(writer, self.application_build)?;
        self.measurement_start_time.write(writer)?;
        self.last_object_time.write(writer)?;
        codec::write_u64(writer, self.file_size_without_unknown115)?;

        let written = 4 + 4 + 4 + 1 + 1 + 1 + 1 + 8 + 8 + 4 + 4 + 16 + 16 + 8;
        let padding = (self.statistics_size as usize).saturating_sub(written);
        codec::write_bytes(writer, &vec![0u8; padding])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileStatistics {
        FileStatistics {
            statistics_size: STATISTICS_SIZE,
            api_number: 0x0304_0102,
            application_id: 5,
            compression_level: 6,
            application_major: 1,
            application_minor: 2,
            file_size: 4096,
            uncompressed_file_size: 8192,
            object_count: 42,
            application_build: 7,
            measurement_start_time: SystemTime { year: 2026, month: 1, day_of_week: 3, day: 2, hour: 3, minute: 4, second: 5, milliseconds: 6 },
            last_object_time: SystemTime { year: 2026, month: 1, day_of_week: 3, day: 2, hour: 4, minute: 0, second: 0, milliseconds: 0 },
            file_size_without_unknown115: 4000,
        }
    }

    #[test]
    fn round_trips() {
        let stats = sample();
        let mut buf = Vec::new();
        stats.write(&mut buf).unwrap();
        assert_eq!(buf.len(), STATISTICS_SIZE as usize);
        let mut cursor = Cursor::new(&buf[..]);
        let parsed = FileStatistics::read(&mut cursor).unwrap();
        assert_eq!(parsed, stats);
    }

    #[test]
    fn rejects_bad_signature() {
        let mut buf = vec![0u8; STATISTICS_SIZE as usize];
        buf[0..4].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        let mut cursor = Cursor::new(&buf[..]);
        let err = FileStatistics::read(&mut cursor).unwrap_err();
        assert!(matches!(err, BlfError::BadSignature { .. }));
    }
}
