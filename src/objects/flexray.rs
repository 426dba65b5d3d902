//! FlexRay event family: legacy V6 frame objects and the modern VFr
//! (Vector FlexRay) stack used by current loggers.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `FLEXRAY_DATA` (deprecated): a FlexRay data frame, V6 layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayData {
    pub header: ObjectHeader,
    pub channel: u16,
    pub mux: u8,
    pub len: u8,
    pub message_id: u16,
    pub crc: u16,
    pub dir: u8,
    pub data_bytes: [u8; 12],
}

impl FlexRayData {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let mux = codec::read_u8(cursor)?;
        let len = codec::read_u8(cursor)?;
        let message_id = codec::read_u16(cursor)?;
        let crc = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        codec::skip(cursor, 2)?;
        let data_bytes = codec::read_array::<12>(cursor)?;
        Ok(Self { header, channel, mux, len, message_id, crc, dir, data_bytes })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.mux)?;
        codec::write_u8(writer, self.len)?;
        codec::write_u16(writer, self.message_id)?;
        codec::write_u16(writer, self.crc)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, 0)?;
        codec::write_u16(writer, 0)?;
        codec::write_bytes(writer, &self.data_bytes)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 2 + 2 + 1 + 1 + 2 + 12
    }
}

/// `FLEXRAY_SYNC` (deprecated): a FlexRay sync frame, V6 layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRaySync {
    pub header: ObjectHeader,
    pub channel: u16,
    pub mux: u8,
    pub len: u8,
    pub message_id: u16,
    pub crc: u16,
    pub dir: u8,
    pub data_bytes: [u8; 11],
    pub cycle: u8,
}

impl FlexRaySync {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let mux = codec::read_u8(cursor)?;
        let len = codec::read_u8(cursor)?;
        let message_id = codec::read_u16(cursor)?;
        let crc = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        codec::skip(cursor, 2)?;
        let data_bytes = codec::read_array::<11>(cursor)?;
        let cycle = codec::read_u8(cursor)?;
        Ok(Self { header, channel, mux, len, message_id, crc, dir, data_bytes, cycle })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.mux)?;
        codec::write_u8(writer, self.len)?;
        codec::write_u16(writer, self.message_id)?;
        codec::write_u16(writer, self.crc)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, 0)?;
        codec::write_u16(writer, 0)?;
        codec::write_bytes(writer, &self.data_bytes)?;
        codec::write_u8(writer, self.cycle)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 2 + 2 + 1 + 1 + 2 + 11 + 1
    }
}

/// `FLEXRAY_MESSAGE`: a FlexRay V6 message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayV6Message {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub frame_id: u16,
    pub length: u8,
    pub cycle: u8,
    pub data_bytes: [u8; 64],
}

impl FlexRayV6Message {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        codec::skip(cursor, 4)?;
        codec::skip(cursor, 4)?;
        codec::skip(cursor, 4)?;
        codec::skip(cursor, 4)?;
        let frame_id = codec::read_u16(cursor)?;
        codec::skip(cursor, 2)?;
        codec::skip(cursor, 2)?;
        let length = codec::read_u8(cursor)?;
        let cycle = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        codec::skip(cursor, 1)?;
        codec::skip(cursor, 2)?;
        let data_bytes = codec::read_array::<64>(cursor)?;
        Ok(Self { header, channel, dir, frame_id, length, cycle, data_bytes })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u16(writer, self.frame_id)?;
        codec::write_u16(writer, 0)?;
        codec::write_u16(writer, 0)?;
        codec::write_u8(writer, self.length)?;
        codec::write_u8(writer, self.cycle)?;
        codec::write_u8(writer, 0)?;
        codec::write_u8(writer, 0)?;
        codec::write_u16(writer, 0)?;
        codec::write_bytes(writer, &self.data_bytes)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 4 + 4 + 2 + 2 + 2 + 1 + 1 + 1 + 1 + 2 + 64
    }
}

/// `FLEXRAY_CYCLE`: a FlexRay V6 start-cycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayV6StartCycleEvent {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub cluster_time: u32,
    pub data_bytes: [u8; 2],
}

impl FlexRayV6StartCycleEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        codec::skip(cursor, 4)?;
        codec::skip(cursor, 4)?;
        codec::skip(cursor, 4)?;
        let cluster_time = codec::read_u32(cursor)?;
        let data_bytes = codec::read_array::<2>(cursor)?;
        codec::skip(cursor, 2)?;
        Ok(Self { header, channel, dir, cluster_time, data_bytes })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u32(writer, 0)?;
        codec::write_u32(writer, self.cluster_time)?;
        codec::write_bytes(writer, &self.data_bytes)?;
        codec::write_u16(writer, 0)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 4 + 4 + 2 + 2
    }
}

/// `FLEXRAY_STATUS` (deprecated): a FlexRay controller status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayStatusEvent {
    pub header: ObjectHeader,
    pub channel: u16,
    pub version: u16,
    pub status_type: u16,
    pub info_mask1: u16,
    pub info_mask2: u16,
    pub info_mask3: u16,
}

impl FlexRayStatusEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let version = codec::read_u16(cursor)?;
        let status_type = codec::read_u16(cursor)?;
        let info_mask1 = codec::read_u16(cursor)?;
        let info_mask2 = codec::read_u16(cursor)?;
        let info_mask3 = codec::read_u16(cursor)?;
        codec::skip(cursor, 18 * 2)?;
        Ok(Self { header, channel, version, status_type, info_mask1, info_mask2, info_mask3 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.version)?;
        codec::write_u16(writer, self.status_type)?;
        codec::write_u16(writer, self.info_mask1)?;
        codec::write_u16(writer, self.info_mask2)?;
        codec::write_u16(writer, self.info_mask3)?;
        for _ in 0..18 {
            codec::write_u16(writer, 0)?;
        }
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 * 6 + 18 * 2
    }
}

/// `FR_RCVMESSAGE`: a received or transmitted FlexRay frame, modern (VFr) layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexRayVFrReceiveMsg {
    pub header: ObjectHeader,
    pub channel: u16,
    pub version: u16,
    pub channel_mask: u8,
    pub dir: u8,
    pub client_index: u32,
    pub cluster_no: u32,
    pub frame_id: u16,
    pub header_crc1: u16,
    pub header_crc2: u16,
    pub byte_count: u16,
    pub data_count: u16,
    pub cycle: u8,
    pub tag: u32,
    pub data: u32,
    pub frame_flags: u32,
    pub app_parameter: u32,
    pub data_bytes: [u8; 254],
}

impl FlexRayVFrReceiveMsg {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let version = codec::read_u16(cursor)?;
        let channel_mask = codec::read_u8(cursor)?;
        let dir = codec::read_u8(cursor)?;
        codec::skip(cursor, 2)?;
        let client_index = codec::read_u32(cursor)?;
        let cluster_no = codec::read_u32(cursor)?;
        let frame_id = codec::read_u16(cursor)?;
        let header_crc1 = codec::read_u16(cursor)?;
        let header_crc2 = codec::read_u16(cursor)?;
        let byte_count = codec::read_u16(cursor)?;
        let data_count = codec::read_u16(cursor)?;
        let cycle = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        let tag = codec::read_u32(cursor)?;
        let data = codec::read_u32(cursor)?;
        let frame_flags = codec::read_u32(cursor)?;
        let app_parameter = codec::read_u32(cursor)?;
        let data_bytes = codec::read_array::<254>(cursor)?;
        codec::skip(cursor, 2)?;
        codec::skip(cursor, 4)?;
        Ok(Self {
            header, channel, version, channel_mask, dir, client_index, cluster_no, frame_id,
            header_crc1, header_crc2, byte_count, data_count, cycle, tag, data, frame_flags,
            app_parameter, data_bytes,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.version)?;
        codec::write_u8(writer, self.channel_mask)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u16(writer, 0)?;
        codec::write_u32(writer, self.client_index)?;
        codec::write_u32(writer, self.cluster_no)?;
        codec::write_u16(writer, self.frame_id)?;
        codec::write_u16(writer, self.header_crc1)?;
        codec::write_u16(writer, self.header_crc2)?;
        codec::write_u16(writer, self.byte_count)?;
        codec::write_u16(writer, self.data_count)?;
        codec::write_u8(writer, self.cycle)?;
        codec::write_u8(writer, 0)?;
        codec::write_u32(writer, self.tag)?;
        codec::write_u32(writer, self.data)?;
        codec::write_u32(writer, self.frame_flags)?;
        codec::write_u32(writer, self.app_parameter)?;
        codec::write_bytes(writer, &self.data_bytes)?;
        codec::write_u16(writer, 0)?;
        codec::write_u32(writer, 0)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 1 + 1 + 2 + 4 + 4 + 2 + 2 + 2 + 2 + 2 + 1 + 1 + 4 + 4 + 4 + 4 + 254 + 2 + 4
    }
}

/// `FR_RCVMESSAGE_EX`: an extended FlexRay message or PDU, variable payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexRayVFrReceiveMsgEx {
    pub header: ObjectHeader,
    pub channel: u16,
    pub version: u16,
    pub channel_mask: u16,
    pub dir: u16,
    pub client_index: u32,
    pub cluster_no: u32,
    pub frame_id: u16,
    pub header_crc1: u16,
    pub header_crc2: u16,
    pub byte_count: u16,
    pub data_count: u16,
    pub cycle: u16,
    pub tag: u32,
    pub data: u32,
    pub frame_flags: u32,
    pub app_parameter: u32,
    pub frame_crc: u32,
    pub frame_length_ns: u32,
    pub frame_id1: u16,
    pub pdu_offset: u16,
    pub blf_log_mask: u16,
    pub data_bytes: Vec<u8>,
}

impl FlexRayVFrReceiveMsgEx {
    const FIXED_BODY_LEN: u32 = 2 + 2 + 2 + 2 + 4 + 4 + 2 + 2 + 2 + 2 + 2 + 2 + 4 + 4 + 4 + 4 + 4 + 4 + 2 + 2 + 2 + 13 * 2;

    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader, remaining: usize) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let version = codec::read_u16(cursor)?;
        let channel_mask = codec::read_u16(cursor)?;
        let dir = codec::read_u16(cursor)?;
        let client_index = codec::read_u32(cursor)?;
        let cluster_no = codec::read_u32(cursor)?;
        let frame_id = codec::read_u16(cursor)?;
        let header_crc1 = codec::read_u16(cursor)?;
        let header_crc2 = codec::read_u16(cursor)?;
        let byte_count = codec::read_u16(cursor)?;
        let data_count = codec::read_u16(cursor)?;
        let cycle = codec::read_u16(cursor)?;
        let tag = codec::read_u32(cursor)?;
        let data = codec::read_u32(cursor)?;
        let frame_flags = codec::read_u32(cursor)?;
        let app_parameter = codec::read_u32(cursor)?;
        let frame_crc = codec::read_u32(cursor)?;
        let frame_length_ns = codec::read_u32(cursor)?;
        let frame_id1 = codec::read_u16(cursor)?;
        let pdu_offset = codec::read_u16(cursor)?;
        let blf_log_mask = codec::read_u16(cursor)?;
        codec::skip(cursor, 13 * 2)?;

        let data_bytes = codec::read_bytes(cursor, data_count as usize)?;

        let consumed = Self::FIXED_BODY_LEN as usize + data_count as usize;
        let trailer = remaining.saturating_sub(consumed);
        codec::skip(cursor, trailer as u64)?;

        Ok(Self {
            header, channel, version, channel_mask, dir, client_index, cluster_no, frame_id,
            header_crc1, header_crc2, byte_count, data_count, cycle, tag, data, frame_flags,
            app_parameter, frame_crc, frame_length_ns, frame_id1, pdu_offset, blf_log_mask, data_bytes,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.version)?;
        codec::write_u16(writer, self.channel_mask)?;
        codec::write_u16(writer, self.dir)?;
        codec::write_u32(writer, self.client_index)?;
        codec::write_u32(writer, self.cluster_no)?;
        codec::write_u16(writer, self.frame_id)?;
        codec::write_u16(writer, self.header_crc1)?;
        codec::write_u16(writer, self.header_crc2)?;
        codec::write_u16(writer, self.byte_count)?;
        codec::write_u16(writer, self.data_count)?;
        codec::write_u16(writer, self.cycle)?;
        codec::write_u32(writer, self.tag)?;
        codec::write_u32(writer, self.data)?;
        codec::write_u32(writer, self.frame_flags)?;
        codec::write_u32(writer, self.app_parameter)?;
        codec::write_u32(writer, self.frame_crc)?;
        codec::write_u32(writer, self.frame_length_ns)?;
        codec::write_u16(writer, self.frame_id1)?;
        codec::write_u16(writer, self.pdu_offset)?;
        codec::write_u16(writer, self.blf_log_mask)?;
        for _ in 0..13 {
            codec::write_u16(writer, 0)?;
        }
        codec::write_bytes(writer, &self.data_bytes)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        Self::FIXED_BODY_LEN + self.data_bytes.len() as u32
    }
}

/// `FR_ERROR`: a FlexRay VFr controller error event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayVFrError {
    pub header: ObjectHeader,
    pub channel: u16,
    pub version: u16,
    pub channel_mask: u16,
    pub cycle: u8,
    pub client_index: u32,
    pub cluster_no: u32,
    pub tag: u32,
    pub data: [u32; 4],
}

impl FlexRayVFrError {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let version = codec::read_u16(cursor)?;
        let channel_mask = codec::read_u16(cursor)?;
        let cycle = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        let client_index = codec::read_u32(cursor)?;
        let cluster_no = codec::read_u32(cursor)?;
        let tag = codec::read_u32(cursor)?;
        let mut data = [0u32; 4];
        for d in data.iter_mut() {
            *d = codec::read_u32(cursor)?;
        }
        codec::skip(cursor, 4)?;
        Ok(Self { header, channel, version, channel_mask, cycle, client_index, cluster_no, tag, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.version)?;
        codec::write_u16(writer, self.channel_mask)?;
        codec::write_u8(writer, self.cycle)?;
        codec::write_u8(writer, 0)?;
        codec::write_u32(writer, self.client_index)?;
        codec::write_u32(writer, self.cluster_no)?;
        codec::write_u32(writer, self.tag)?;
        for d in self.data {
            codec::write_u32(writer, d)?;
        }
        codec::write_u32(writer, 0)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2 + 1 + 1 + 4 + 4 + 4 + 4 * 4 + 4
    }
}

/// `FR_STATUS`: a FlexRay VFr controller status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayVFrStatus {
    pub header: ObjectHeader,
    pub channel: u16,
    pub version: u16,
    pub channel_mask: u16,
    pub cycle: u8,
    pub client_index: u32,
    pub cluster_no: u32,
    pub wus: u32,
    pub cc_sync_state: u32,
    pub tag: u32,
    pub data: [u32; 2],
}

impl FlexRayVFrStatus {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let version = codec::read_u16(cursor)?;
        let channel_mask = codec::read_u16(cursor)?;
        let cycle = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        let client_index = codec::read_u32(cursor)?;
        let cluster_no = codec::read_u32(cursor)?;
        let wus = codec::read_u32(cursor)?;
        let cc_sync_state = codec::read_u32(cursor)?;
        let tag = codec::read_u32(cursor)?;
        let mut data = [0u32; 2];
        for d in data.iter_mut() {
            *d = codec::read_u32(cursor)?;
        }
        codec::skip(cursor, 18 * 2)?;
        Ok(Self { header, channel, version, channel_mask, cycle, client_index, cluster_no, wus, cc_sync_state, tag, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.version)?;
        codec::write_u16(writer, self.channel_mask)?;
        codec::write_u8(writer, self.cycle)?;
        codec::write_u8(writer, 0)?;
        codec::write_u32(writer, self.client_index)?;
        codec::write_u32(writer, self.cluster_no)?;
        codec::write_u32(writer, self.wus)?;
        codec::write_u32(writer, self.cc_sync_state)?;
        codec::write_u32(writer, self.tag)?;
        for d in self.data {
            codec::write_u32(writer, d)?;
        }
        for _ in 0..18 {
            codec::write_u16(writer, 0)?;
        }
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2 + 1 + 1 + 4 + 4 + 4 + 4 + 4 + 4 * 2 + 18 * 2
    }
}

/// `FR_STARTCYCLE`: a FlexRay VFr start-of-cycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexRayVFrStartCycle {
    pub header: ObjectHeader,
    pub channel: u16,
    pub version: u16,
    pub channel_mask: u16,
    pub dir: u8,
    pub cycle: u8,
    pub client_index: u32,
    pub cluster_no: u32,
    pub nm_size: u16,
    pub data_bytes: [u8; 12],
    pub tag: u32,
    pub data: [u32; 5],
}

impl FlexRayVFrStartCycle {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let version = codec::read_u16(cursor)?;
        let channel_mask = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let cycle = codec::read_u8(cursor)?;
        let client_index = codec::read_u32(cursor)?;
        let cluster_no = codec::read_u32(cursor)?;
        let nm_size = codec::read_u16(cursor)?;
        let data_bytes = codec::read_array::<12>(cursor)?;
        codec::skip(cursor, 2)?;
        let tag = codec::read_u32(cursor)?;
        let mut data = [0u32; 5];
        for d in data.iter_mut() {
            *d = codec::read_u32(cursor)?;
        }
        codec::skip(cursor, 8)?;
        Ok(Self { header, channel, version, channel_mask, dir, cycle, client_index, cluster_no, nm_size, data_bytes, tag, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.version)?;
        codec::write_u16(writer, self.channel_mask)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.cycle)?;
        codec::write_u32(writer, self.client_index)?;
        codec::write_u32(writer, self.cluster_no)?;
        codec::write_u16(writer, self.nm_size)?;
        codec::write_bytes(writer, &self.data_bytes)?;
        codec::write_u16(writer, 0)?;
        codec::write_u32(writer, self.tag)?;
        for d in self.data {
            codec::write_u32(writer, d)?;
        }
        codec::write_u64(writer, 0)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2 + 1 + 1 + 4 + 4 + 2 + 12 + 2 + 4 + 4 * 5 + 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_type::ObjectType;

    #[test]
    fn flexray_vfr_receive_msg_round_trip() {
        let header = ObjectHeader::new_v1(ObjectType::FrRcvMessage, 42, 0);
        let msg = FlexRayVFrReceiveMsg {
            header,
            channel: 1,
            version: 0,
            channel_mask: 3,
            dir: 0,
            client_index: 0,
            cluster_no: 0,
            frame_id: 17,
            header_crc1: 0,
            header_crc2: 0,
            byte_count: 8,
            data_count: 8,
            cycle: 5,
            tag: 0,
            data: 0,
            frame_flags: 0,
            app_parameter: 0,
            data_bytes: [0u8; 254],
        };
        let mut buf = Vec::new();
        msg.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[16..]);
        let parsed = FlexRayVFrReceiveMsg::read(&mut cursor, header).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn flexray_vfr_receive_msg_ex_round_trip_with_variable_payload() {
        let header = ObjectHeader::new_v1(ObjectType::FrRcvMessageEx, 42, 0);
        let msg = FlexRayVFrReceiveMsgEx {
            header,
            channel: 1,
            version: 7,
            channel_mask: 3,
            dir: 1,
            client_index: 0,
            cluster_no: 0,
            frame_id: 17,
            header_crc1: 0,
            header_crc2: 0,
            byte_count: 4,
            data_count: 4,
            cycle: 5,
            tag: 0,
            data: 0,
            frame_flags: 0,
            app_parameter: 0,
            frame_crc: 0,
            frame_length_ns: 0,
            frame_id1: 0,
            pdu_offset: 0,
            blf_log_mask: 0,
            data_bytes: vec![1, 2, 3, 4],
        };
        let mut buf = Vec::new();
        msg.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[16..]);
        let remaining = msg.body_len() as usize;
        let parsed = FlexRayVFrReceiveMsgEx::read(&mut cursor, header, remaining).unwrap();
        assert_eq!(parsed, msg);
    }
}
