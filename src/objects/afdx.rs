//! AFDX (ARINC 664 / Avionics Full-Duplex Switched Ethernet) event family.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `AFDX_FRAME`: one AFDX frame on a virtual link, with redundancy-management info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfdxFrame {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u16,
    pub dst_addr: [u8; 6],
    pub src_addr: [u8; 6],
    pub ether_type: u16,
    pub vl_id: u16,
    pub sequence_counter: u8,
    pub reserved1: u8,
    pub frame_length: u16,
    pub reserved2: u16,
    pub frame_data: Vec<u8>,
}

impl AfdxFrame {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u16(cursor)?;
        let dst_addr = codec::read_array::<6>(cursor)?;
        let src_addr = codec::read_array::<6>(cursor)?;
        let ether_type = codec::read_u16(cursor)?;
        let vl_id = codec::read_u16(cursor)?;
        let sequence_counter = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let frame_length = codec::read_u16(cursor)?;
        let reserved2 = codec::read_u16(cursor)?;
        let frame_data = codec::read_bytes(cursor, frame_length as usize)?;
        Ok(Self { header, channel, dir, dst_addr, src_addr, ether_type, vl_id, sequence_counter, reserved1, frame_length, reserved2, frame_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.dir)?;
        codec::write_bytes(writer, &self.dst_addr)?;
        codec::write_bytes(writer, &self.src_addr)?;
        codec::write_u16(writer, self.ether_type)?;
        codec::write_u16(writer, self.vl_id)?;
        codec::write_u8(writer, self.sequence_counter)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u16(writer, self.frame_length)?;
        codec::write_u16(writer, self.reserved2)?;
        codec::write_bytes(writer, &self.frame_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 6 + 6 + 2 + 2 + 1 + 1 + 2 + 2 + self.frame_data.len() as u32
    }
}

/// `AFDX_STATISTIC`: per-virtual-link frame/byte counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfdxStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub statistics: [u32; 8],
}

impl AfdxStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let mut statistics = [0u32; 8];
        for slot in statistics.iter_mut() {
            *slot = codec::read_u32(cursor)?;
        }
        Ok(Self { header, channel, reserved, statistics })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        for v in self.statistics {
            codec::write_u32(writer, v)?;
        }
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 8
    }
}

/// `AFDX_STATUS`: line/connector status bits for one AFDX channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfdxStatus {
    pub header: ObjectHeader,
    pub channel: u16,
    pub status_a: u16,
    pub status_b: u16,
    pub reserved: u16,
}

impl AfdxStatus {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let status_a = codec::read_u16(cursor)?;
        let status_b = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        Ok(Self { header, channel, status_a, status_b, reserved })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.status_a)?;
        codec::write_u16(writer, self.status_b)?;
        codec::write_u16(writer, self.reserved)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2 + 2
    }
}

/// `AFDX_BUS_STATISTIC`: channel-wide (not per-VL) frame/error counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfdxBusStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub statistics: [u32; 6],
}

impl AfdxBusStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let mut statistics = [0u32; 6];
        for slot in statistics.iter_mut() {
            *slot = codec::read_u32(cursor)?;
        }
        Ok(Self { header, channel, reserved, statistics })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        for v in self.statistics {
            codec::write_u32(writer, v)?;
        }
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 6
    }
}

/// `AFDX_ERROR_EVENT`: a redundancy-management or integrity-check error on a VL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfdxErrorEvent {
    pub header: ObjectHeader,
    pub channel: u16,
    pub vl_id: u16,
    pub error_code: u32,
    pub reserved: u32,
}

impl AfdxErrorEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let vl_id = codec::read_u16(cursor)?;
        let error_code = codec::read_u32(cursor)?;
        let reserved = codec::read_u32(cursor)?;
        Ok(Self { header, channel, vl_id, error_code, reserved })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.vl_id)?;
        codec::write_u32(writer, self.error_code)?;
        codec::write_u32(writer, self.reserved)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4
    }
}
