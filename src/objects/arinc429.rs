//! ARINC-429 event family.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `A429_MESSAGE`: one 32-bit ARINC-429 word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct A429Message {
    pub header: ObjectHeader,
    pub channel: u16,
    pub label: u8,
    pub sdi: u8,
    pub data: u32,
    pub ssm: u8,
    pub parity_error: u8,
    pub reserved: u16,
    pub bit_rate: u32,
}

impl A429Message {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let label = codec::read_u8(cursor)?;
        let sdi = codec::read_u8(cursor)?;
        let data = codec::read_u32(cursor)?;
        let ssm = codec::read_u8(cursor)?;
        let parity_error = codec::read_u8(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let bit_rate = codec::read_u32(cursor)?;
        Ok(Self { header, channel, label, sdi, data, ssm, parity_error, reserved, bit_rate })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.label)?;
        codec::write_u8(writer, self.sdi)?;
        codec::write_u32(writer, self.data)?;
        codec::write_u8(writer, self.ssm)?;
        codec::write_u8(writer, self.parity_error)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u32(writer, self.bit_rate)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 1 + 1 + 2 + 4
    }
}

/// `A429_ERROR`: an ARINC-429 word that failed parity, timing, or gap checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct A429Error {
    pub header: ObjectHeader,
    pub channel: u16,
    pub error_code: u16,
    pub label: u8,
    pub sdi: u8,
    pub reserved: u16,
    pub data: u32,
}

impl A429Error {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let error_code = codec::read_u16(cursor)?;
        let label = codec::read_u8(cursor)?;
        let sdi = codec::read_u8(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let data = codec::read_u32(cursor)?;
        Ok(Self { header, channel, error_code, label, sdi, reserved, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.error_code)?;
        codec::write_u8(writer, self.label)?;
        codec::write_u8(writer, self.sdi)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u32(writer, self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 1 + 1 + 2 + 4
    }
}

/// `A429_STATUS`: per-channel link/parity-check status bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct A429Status {
    pub header: ObjectHeader,
    pub channel: u16,
    pub status: u32,
    pub reserved: u16,
}

impl A429Status {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let status = codec::read_u32(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        Ok(Self { header, channel, status, reserved })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u32(writer, self.status)?;
        codec::write_u16(writer, self.reserved)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 4 + 2
    }
}

/// `A429_BUS_STATISTIC`: cumulative word/error counters for one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct A429BusStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub words_received: u32,
    pub words_sent: u32,
    pub parity_errors: u32,
    pub gap_errors: u32,
}

impl A429BusStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let words_received = codec::read_u32(cursor)?;
        let words_sent = codec::read_u32(cursor)?;
        let parity_errors = codec::read_u32(cursor)?;
        let gap_errors = codec::read_u32(cursor)?;
        Ok(Self { header, channel, reserved, words_received, words_sent, parity_errors, gap_errors })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u32(writer, self.words_received)?;
        codec::write_u32(writer, self.words_sent)?;
        codec::write_u32(writer, self.parity_errors)?;
        codec::write_u32(writer, self.gap_errors)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 4
    }
}
