//! CAN / CAN-FD event family.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `CAN_MESSAGE`: a classic CAN frame, 8-byte payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanMessage {
    pub header: ObjectHeader,
    pub channel: u16,
    pub flags: u8,
    pub dlc: u8,
    pub id: u32,
    pub data: [u8; 8],
}

impl CanMessage {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u8(cursor)?;
        let dlc = codec::read_u8(cursor)?;
        let id = codec::read_u32(cursor)?;
        let data = codec::read_array::<8>(cursor)?;
        Ok(Self { header, channel, flags, dlc, id, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.flags)?;
        codec::write_u8(writer, self.dlc)?;
        codec::write_u32(writer, self.id)?;
        codec::write_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 8
    }
}

/// `CAN_MESSAGE2`: `CanMessage` plus frame duration/bit-count accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanMessage2 {
    pub header: ObjectHeader,
    pub channel: u16,
    pub flags: u8,
    pub dlc: u8,
    pub id: u32,
    pub data: [u8; 8],
    pub frame_length: u32,
    pub bit_count: u8,
    pub reserved1: u8,
    pub reserved2: u16,
}

impl CanMessage2 {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u8(cursor)?;
        let dlc = codec::read_u8(cursor)?;
        let id = codec::read_u32(cursor)?;
        let data = codec::read_array::<8>(cursor)?;
        let frame_length = codec::read_u32(cursor)?;
        let bit_count = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let reserved2 = codec::read_u16(cursor)?;
        Ok(Self { header, channel, flags, dlc, id, data, frame_length, bit_count, reserved1, reserved2 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.flags)?;
        codec::write_u8(writer, self.dlc)?;
        codec::write_u32(writer, self.id)?;
        codec::write_bytes(writer, &self.data)?;
        codec::write_u32(writer, self.frame_length)?;
        codec::write_u8(writer, self.bit_count)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u16(writer, self.reserved2)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 8 + 4 + 1 + 1 + 2
    }
}

/// `CAN_ERROR`: a CAN error frame indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanErrorFrame {
    pub header: ObjectHeader,
    pub channel: u16,
    pub length: u16,
}

impl CanErrorFrame {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let length = codec::read_u16(cursor)?;
        Ok(Self { header, channel, length })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.length)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2
    }
}

/// `CAN_ERROR_EXT`: extended CAN error frame with bus-state diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanErrorFrameExt {
    pub header: ObjectHeader,
    pub channel: u16,
    pub length: u16,
    pub flags: u32,
    pub ecc: u8,
    pub position: u8,
    pub dlc: u8,
    pub reserved1: u8,
    pub frame_length: u32,
    pub id: u32,
    pub flags_ext: u16,
    pub reserved2: u16,
    pub data: [u8; 8],
}

impl CanErrorFrameExt {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let length = codec::read_u16(cursor)?;
        let flags = codec::read_u32(cursor)?;
        let ecc = codec::read_u8(cursor)?;
        let position = codec::read_u8(cursor)?;
        let dlc = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let frame_length = codec::read_u32(cursor)?;
        let id = codec::read_u32(cursor)?;
        let flags_ext = codec::read_u16(cursor)?;
        let reserved2 = codec::read_u16(cursor)?;
        let data = codec::read_array::<8>(cursor)?;
        Ok(Self { header, channel, length, flags, ecc, position, dlc, reserved1, frame_length, id, flags_ext, reserved2, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.length)?;
        codec::write_u32(writer, self.flags)?;
        codec::write_u8(writer, self.ecc)?;
        codec::write_u8(writer, self.position)?;
        codec::write_u8(writer, self.dlc)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.frame_length)?;
        codec::write_u32(writer, self.id)?;
        codec::write_u16(writer, self.flags_ext)?;
        codec::write_u16(writer, self.reserved2)?;
        codec::write_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 1 + 1 + 1 + 1 + 4 + 4 + 2 + 2 + 8
    }
}

/// `CAN_OVERLOAD`: a CAN bus overload frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanOverloadFrame {
    pub header: ObjectHeader,
    pub channel: u16,
}

impl CanOverloadFrame {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        codec::skip(cursor, 2 + 4)?; // reserved u16, reserved u32
        Ok(Self { header, channel })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, 0)?;
        codec::write_u32(writer, 0)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4
    }
}

/// `CAN_STATISTIC`: periodic per-channel bus load counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanDriverStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub bus_load: u16,
    pub standard_data_frames: u32,
    pub extended_data_frames: u32,
    pub standard_remote_frames: u32,
    pub extended_remote_frames: u32,
    pub error_frames: u32,
    pub overload_frames: u32,
}

impl CanDriverStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let bus_load = codec::read_u16(cursor)?;
        let standard_data_frames = codec::read_u32(cursor)?;
        let extended_data_frames = codec::read_u32(cursor)?;
        let standard_remote_frames = codec::read_u32(cursor)?;
        let extended_remote_frames = codec::read_u32(cursor)?;
        let error_frames = codec::read_u32(cursor)?;
        let overload_frames = codec::read_u32(cursor)?;
        codec::skip(cursor, 4)?;
        Ok(Self { header, channel, bus_load, standard_data_frames, extended_data_frames, standard_remote_frames, extended_remote_frames, error_frames, overload_frames })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.bus_load)?;
        codec::write_u32(writer, self.standard_data_frames)?;
        codec::write_u32(writer, self.extended_data_frames)?;
        codec::write_u32(writer, self.standard_remote_frames)?;
        codec::write_u32(writer, self.extended_remote_frames)?;
        codec::write_u32(writer, self.error_frames)?;
        codec::write_u32(writer, self.overload_frames)?;
        codec::write_u32(writer, 0)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 6 + 4
    }
}

/// `CAN_DRIVER_ERROR`: a driver/transceiver-level error count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanDriverError {
    pub header: ObjectHeader,
    pub channel: u16,
    pub tx_errors: u8,
    pub rx_errors: u8,
    pub error_code: u32,
}

impl CanDriverError {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let tx_errors = codec::read_u8(cursor)?;
        let rx_errors = codec::read_u8(cursor)?;
        let error_code = codec::read_u32(cursor)?;
        Ok(Self { header, channel, tx_errors, rx_errors, error_code })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.tx_errors)?;
        codec::write_u8(writer, self.rx_errors)?;
        codec::write_u32(writer, self.error_code)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4
    }
}

/// `CAN_DRIVER_ERROR_EXT`: `CanDriverError` plus controller bus-state and TX/RX
/// error-counter breakdown the plain variant doesn't carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanDriverErrorExt {
    pub header: ObjectHeader,
    pub channel: u16,
    pub tx_errors: u8,
    pub rx_errors: u8,
    pub error_code: u32,
    pub flags: u32,
    pub state: u8,
    pub reserved1: [u8; 3],
    pub rx_errors_ext: u32,
    pub tx_errors_ext: u32,
    pub reserved2: [u32; 2],
}

impl CanDriverErrorExt {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let tx_errors = codec::read_u8(cursor)?;
        let rx_errors = codec::read_u8(cursor)?;
        let error_code = codec::read_u32(cursor)?;
        let flags = codec::read_u32(cursor)?;
        let state = codec::read_u8(cursor)?;
        let reserved1 = codec::read_array::<3>(cursor)?;
        let rx_errors_ext = codec::read_u32(cursor)?;
        let tx_errors_ext = codec::read_u32(cursor)?;
        let reserved2 = [codec::read_u32(cursor)?, codec::read_u32(cursor)?];
        Ok(Self { header, channel, tx_errors, rx_errors, error_code, flags, state, reserved1, rx_errors_ext, tx_errors_ext, reserved2 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.tx_errors)?;
        codec::write_u8(writer, self.rx_errors)?;
        codec::write_u32(writer, self.error_code)?;
        codec::write_u32(writer, self.flags)?;
        codec::write_u8(writer, self.state)?;
        codec::write_bytes(writer, &self.reserved1)?;
        codec::write_u32(writer, self.rx_errors_ext)?;
        codec::write_u32(writer, self.tx_errors_ext)?;
        codec::write_u32(writer, self.reserved2[0])?;
        codec::write_u32(writer, self.reserved2[1])?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 1 + 3 + 4 + 4 + 4 + 4
    }
}

/// `CAN_DRIVER_SYNC`: a hardware-synchronisation pulse on a CAN channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanDriverHwSync {
    pub header: ObjectHeader,
    pub channel: u16,
    pub flags: u8,
    pub reserved1: u8,
    pub reserved2: [u8; 4],
}

impl CanDriverHwSync {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let reserved2 = codec::read_array::<4>(cursor)?;
        Ok(Self { header, channel, flags, reserved1, reserved2 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.flags)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_bytes(writer, &self.reserved2)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4
    }
}

/// `CAN_FD_MESSAGE`: CAN FD frame, up to 64-byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanFdMessage {
    pub header: ObjectHeader,
    pub channel: u16,
    pub flags: u8,
    pub dlc: u8,
    pub id: u32,
    pub frame_length: u32,
    pub arb_bit_count: u8,
    pub can_fd_flags: u8,
    pub valid_data_bytes: u8,
    pub reserved1: u8,
    pub reserved2: u32,
    pub data: Vec<u8>,
    pub reserved3: u32,
}

impl CanFdMessage {
    pub const FLAG_TX: u8 = 1 << 0;
    pub const FLAG_NERR: u8 = 1 << 5;
    pub const FLAG_WU: u8 = 1 << 6;
    pub const FLAG_RTR: u8 = 1 << 7;
    pub const FD_FLAG_EDL: u8 = 1 << 0;
    pub const FD_FLAG_BRS: u8 = 1 << 1;
    pub const FD_FLAG_ESI: u8 = 1 << 2;

    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u8(cursor)?;
        let dlc = codec::read_u8(cursor)?;
        let id = codec::read_u32(cursor)?;
        let frame_length = codec::read_u32(cursor)?;
        let arb_bit_count = codec::read_u8(cursor)?;
        let can_fd_flags = codec::read_u8(cursor)?;
        let valid_data_bytes = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let reserved2 = codec::read_u32(cursor)?;
        let data = codec::read_bytes(cursor, valid_data_bytes as usize)?;
        codec::skip(cursor, 64 - valid_data_bytes as u64)?;
        let reserved3 = codec::read_u32(cursor)?;
        Ok(Self { header, channel, flags, dlc, id, frame_length, arb_bit_count, can_fd_flags, valid_data_bytes, reserved1, reserved2, data, reserved3 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.flags)?;
        codec::write_u8(writer, self.dlc)?;
        codec::write_u32(writer, self.id)?;
        codec::write_u32(writer, self.frame_length)?;
        codec::write_u8(writer, self.arb_bit_count)?;
        codec::write_u8(writer, self.can_fd_flags)?;
        codec::write_u8(writer, self.valid_data_bytes)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.reserved2)?;
        codec::write_bytes(writer, &self.data)?;
        codec::write_bytes(writer, &vec![0u8; 64 - self.data.len()])?;
        codec::write_u32(writer, self.reserved3)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 1 + 1 + 1 + 1 + 4 + 64 + 4
    }
}

/// `CAN_FD_MESSAGE_64`: newer CAN FD layout with bit-timing metadata and
/// optional trailing extended frame data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanFdMessage64 {
    pub header: ObjectHeader,
    pub channel: u8,
    pub dlc: u8,
    pub valid_data_bytes: u8,
    pub tx_count: u8,
    pub id: u32,
    pub frame_length: u32,
    pub flags: u32,
    pub btr_cfg_arb: u32,
    pub btr_cfg_data: u32,
    pub time_offset_brs_ns: u32,
    pub time_offset_crc_del_ns: u32,
    pub bit_count: u16,
    pub dir: u8,
    pub ext_data_offset: u8,
    pub crc: u32,
    pub data: Vec<u8>,
    pub ext_data: Vec<u8>,
}

impl CanFdMessage64 {
    pub const FLAG_NERR: u32 = 0x0004;
    pub const FLAG_HIGH_VOLTAGE_WAKEUP: u32 = 0x0008;
    pub const FLAG_REMOTE_FRAME: u32 = 0x0010;
    pub const FLAG_TX_ACK: u32 = 0x0040;
    pub const FLAG_TX_REQUEST: u32 = 0x0080;
    pub const FLAG_SRR: u32 = 0x0200;
    pub const FLAG_EDL: u32 = 0x1000;
    pub const FLAG_BRS: u32 = 0x2000;
    pub const FLAG_ESI: u32 = 0x4000;
    pub const FLAG_BURST: u32 = 0x2_0000;

    const FIXED_BODY_LEN: u32 = 1 + 1 + 1 + 1 + 4 + 4 + 4 + 4 + 4 + 4 + 4 + 2 + 1 + 1 + 4;

    pub fn is_fd_frame(&self) -> bool {
        self.flags & Self::FLAG_EDL != 0
    }
    pub fn has_brs(&self) -> bool {
        self.flags & Self::FLAG_BRS != 0
    }
    pub fn has_esi(&self) -> bool {
        self.flags & Self::FLAG_ESI != 0
    }

    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u8(cursor)?;
        let dlc = codec::read_u8(cursor)?;
        let valid_data_bytes = codec::read_u8(cursor)?;
        let tx_count = codec::read_u8(cursor)?;
        let id = codec::read_u32(cursor)?;
        let frame_length = codec::read_u32(cursor)?;
        let flags = codec::read_u32(cursor)?;
        let btr_cfg_arb = codec::read_u32(cursor)?;
        let btr_cfg_data = codec::read_u32(cursor)?;
        let time_offset_brs_ns = codec::read_u32(cursor)?;
        let time_offset_crc_del_ns = codec::read_u32(cursor)?;
        let bit_count = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let ext_data_offset = codec::read_u8(cursor)?;
        let crc = codec::read_u32(cursor)?;
        let data = codec::read_bytes(cursor, valid_data_bytes as usize)?;

        let header_size = header.calculate_header_size() as u32;
        let ext_data = if ext_data_offset != 0 {
            let consumed_from_header_start = header_size + Self::FIXED_BODY_LEN + valid_data_bytes as u32;
            let remaining = header.base.object_size.saturating_sub(consumed_from_header_start);
            codec::read_bytes(cursor, remaining as usize)?
        } else {
            Vec::new()
        };

        Ok(Self { header, channel, dlc, valid_data_bytes, tx_count, id, frame_length, flags, btr_cfg_arb, btr_cfg_data, time_offset_brs_ns, time_offset_crc_del_ns, bit_count, dir, ext_data_offset, crc, data, ext_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u8(writer, self.channel)?;
        codec::write_u8(writer, self.dlc)?;
        codec::write_u8(writer, self.valid_data_bytes)?;
        codec::write_u8(writer, self.tx_count)?;
        codec::write_u32(writer, self.id)?;
        codec::write_u32(writer, self.frame_length)?;
        codec::write_u32(writer, self.flags)?;
        codec::write_u32(writer, self.btr_cfg_arb)?;
        codec::write_u32(writer, self.btr_cfg_data)?;
        codec::write_u32(writer, self.time_offset_brs_ns)?;
        codec::write_u32(writer, self.time_offset_crc_del_ns)?;
        codec::write_u16(writer, self.bit_count)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.ext_data_offset)?;
        codec::write_u32(writer, self.crc)?;
        codec::write_bytes(writer, &self.data)?;
        codec::write_bytes(writer, &self.ext_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        Self::FIXED_BODY_LEN + self.data.len() as u32 + self.ext_data.len() as u32
    }
}

/// `CAN_FD_ERROR_64`: CAN FD error frame, the FD counterpart of `CanErrorFrameExt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanFdErrorFrame64 {
    pub header: ObjectHeader,
    pub channel: u8,
    pub dlc: u8,
    pub valid_data_bytes: u8,
    pub ecc: u8,
    pub flags: u16,
    pub error_code_ext: u16,
    pub ext_flags: u16,
    pub ext_data_offset: u8,
    pub reserved1: u8,
    pub id: u32,
    pub frame_length: u32,
    pub btr_cfg_arb: u32,
    pub btr_cfg_data: u32,
    pub time_offset_brs_ns: u32,
    pub time_offset_crc_del_ns: u32,
    pub crc: u32,
    pub data: Vec<u8>,
}

impl CanFdErrorFrame64 {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u8(cursor)?;
        let dlc = codec::read_u8(cursor)?;
        let valid_data_bytes = codec::read_u8(cursor)?;
        let ecc = codec::read_u8(cursor)?;
        let flags = codec::read_u16(cursor)?;
        let error_code_ext = codec::read_u16(cursor)?;
        let ext_flags = codec::read_u16(cursor)?;
        let ext_data_offset = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let id = codec::read_u32(cursor)?;
        let frame_length = codec::read_u32(cursor)?;
        let btr_cfg_arb = codec::read_u32(cursor)?;
        let btr_cfg_data = codec::read_u32(cursor)?;
        let time_offset_brs_ns = codec::read_u32(cursor)?;
        let time_offset_crc_del_ns = codec::read_u32(cursor)?;
        let crc = codec::read_u32(cursor)?;
        let data = codec::read_bytes(cursor, valid_data_bytes as usize)?;
        Ok(Self { header, channel, dlc, valid_data_bytes, ecc, flags, error_code_ext, ext_flags, ext_data_offset, reserved1, id, frame_length, btr_cfg_arb, btr_cfg_data, time_offset_brs_ns, time_offset_crc_del_ns, crc, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u8(writer, self.channel)?;
        codec::write_u8(writer, self.dlc)?;
        codec::write_u8(writer, self.valid_data_bytes)?;
        codec::write_u8(writer, self.ecc)?;
        codec::write_u16(writer, self.flags)?;
        codec::write_u16(writer, self.error_code_ext)?;
        codec::write_u16(writer, self.ext_flags)?;
        codec::write_u8(writer, self.ext_data_offset)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.id)?;
        codec::write_u32(writer, self.frame_length)?;
        codec::write_u32(writer, self.btr_cfg_arb)?;
        codec::write_u32(writer, self.btr_cfg_data)?;
        codec::write_u32(writer, self.time_offset_brs_ns)?;
        codec::write_u32(writer, self.time_offset_crc_del_ns)?;
        codec::write_u32(writer, self.crc)?;
        codec::write_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        1 + 1 + 1 + 1 + 2 + 2 + 2 + 1 + 1 + 4 + 4 + 4 + 4 + 4 + 4 + 4 + self.data.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_type::ObjectType;

    fn v1_header(ty: ObjectType) -> ObjectHeader {
        ObjectHeader::new_v1(ty, 1000, 0)
    }

    #[test]
    fn can_message_round_trip() {
        let msg = CanMessage { header: v1_header(ObjectType::CanMessage), channel: 1, flags: 0, dlc: 8, id: 0x123, data: [1, 2, 3, 4, 5, 6, 7, 8] };
        let mut buf = Vec::new();
        msg.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[16..]);
        let parsed = CanMessage::read(&mut cursor, msg.header).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn can_fd_message_round_trip() {
        let msg = CanFdMessage {
            header: v1_header(ObjectType::CanFdMessage),
            channel: 2,
            flags: CanFdMessage::FLAG_TX,
            dlc: 15,
            id: 0x1FFFFFFF,
            frame_length: 500,
            arb_bit_count: 20,
            can_fd_flags: CanFdMessage::FD_FLAG_EDL | CanFdMessage::FD_FLAG_BRS,
            valid_data_bytes: 16,
            reserved1: 0,
            reserved2: 0,
            data: (0u8..16).collect(),
            reserved3: 0,
        };
        let mut buf = Vec::new();
        msg.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[16..]);
        let parsed = CanFdMessage::read(&mut cursor, msg.header).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn can_fd_message64_flags() {
        let msg = CanFdMessage64 {
            header: v1_header(ObjectType::CanFdMessage64),
            channel: 1,
            dlc: 12,
            valid_data_bytes: 32,
            tx_count: 0,
            id: 0x100,
            frame_length: 900,
            flags: CanFdMessage64::FLAG_EDL | CanFdMessage64::FLAG_BRS | CanFdMessage64::FLAG_ESI,
            btr_cfg_arb: 0,
            btr_cfg_data: 0,
            time_offset_brs_ns: 0,
            time_offset_crc_del_ns: 0,
            bit_count: 64,
            dir: 1,
            ext_data_offset: 0,
            crc: 0,
            data: vec![0xAB; 32],
            ext_data: Vec::new(),
        };
        assert!(msg.is_fd_frame());
        assert!(msg.has_brs());
        assert!(msg.has_esi());

        let mut buf = Vec::new();
        msg.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[16..]);
        let parsed = CanFdMessage64::read(&mut cursor, msg.header).unwrap();
        assert_eq!(parsed, msg);
    }
}
