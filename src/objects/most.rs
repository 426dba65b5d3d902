//! MOST event family (25/50/150 Mbit variants).

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `MOST_SPY`: a sniffed MOST control-channel message.
#[derive(Debug, Clone, PartialEq)]
pub struct MostSpy {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub reserved1: u8,
    pub src_addr: u32,
    pub dest_addr: u32,
    pub msg: [u8; 17],
    pub reserved2: u8,
    pub rtabos: u8,
    pub ack1: u8,
    pub ack2: u8,
    pub crc: u16,
}

impl MostSpy {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let src_addr = codec::read_u32(cursor)?;
        let dest_addr = codec::read_u32(cursor)?;
        let msg = codec::read_array::<17>(cursor)?;
        let reserved2 = codec::read_u8(cursor)?;
        let rtabos = codec::read_u8(cursor)?;
        let ack1 = codec::read_u8(cursor)?;
        let ack2 = codec::read_u8(cursor)?;
        let crc = codec::read_u16(cursor)?;
        Ok(Self { header, channel, dir, reserved1, src_addr, dest_addr, msg, reserved2, rtabos, ack1, ack2, crc })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.src_addr)?;
        codec::write_u32(writer, self.dest_addr)?;
        codec::write_bytes(writer, &self.msg)?;
        codec::write_u8(writer, self.reserved2)?;
        codec::write_u8(writer, self.rtabos)?;
        codec::write_u8(writer, self.ack1)?;
        codec::write_u8(writer, self.ack2)?;
        codec::write_u16(writer, self.crc)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 17 + 1 + 1 + 1 + 1 + 2
    }
}

/// `MOST_CTRL`: a MOST control-channel frame (master-to-slave or reverse).
#[derive(Debug, Clone, PartialEq)]
pub struct MostCtrl {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub reserved1: u8,
    pub src_addr: u32,
    pub dest_addr: u32,
    pub msg: [u8; 17],
    pub reserved2: u8,
    pub rtabos: u8,
    pub ack1: u8,
    pub ack2: u8,
}

impl MostCtrl {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let src_addr = codec::read_u32(cursor)?;
        let dest_addr = codec::read_u32(cursor)?;
        let msg = codec::read_array::<17>(cursor)?;
        let reserved2 = codec::read_u8(cursor)?;
        let rtabos = codec::read_u8(cursor)?;
        let ack1 = codec::read_u8(cursor)?;
        let ack2 = codec::read_u8(cursor)?;
        Ok(Self { header, channel, dir, reserved1, src_addr, dest_addr, msg, reserved2, rtabos, ack1, ack2 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.src_addr)?;
        codec::write_u32(writer, self.dest_addr)?;
        codec::write_bytes(writer, &self.msg)?;
        codec::write_u8(writer, self.reserved2)?;
        codec::write_u8(writer, self.rtabos)?;
        codec::write_u8(writer, self.ack1)?;
        codec::write_u8(writer, self.ack2)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 17 + 1 + 1 + 1 + 1
    }
}

/// `MOST_PKT2`: a MOST25/50 asynchronous packet, modern layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MostPkt2 {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub reserved1: u8,
    pub src_addr: u32,
    pub dest_addr: u32,
    pub arb: u8,
    pub reserved2: u8,
    pub crc: u16,
    pub priority: u8,
    pub transfer_type: u8,
    pub state: u8,
    pub pkt_data_length: u16,
    pub pkt_data: Vec<u8>,
}

impl MostPkt2 {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let src_addr = codec::read_u32(cursor)?;
        let dest_addr = codec::read_u32(cursor)?;
        let arb = codec::read_u8(cursor)?;
        let reserved2 = codec::read_u8(cursor)?;
        let crc = codec::read_u16(cursor)?;
        let priority = codec::read_u8(cursor)?;
        let transfer_type = codec::read_u8(cursor)?;
        let state = codec::read_u8(cursor)?;
        let pkt_data_length = codec::read_u16(cursor)?;
        codec::skip(cursor, 1)?;
        let pkt_data = codec::read_bytes(cursor, pkt_data_length as usize)?;
        Ok(Self { header, channel, dir, reserved1, src_addr, dest_addr, arb, reserved2, crc, priority, transfer_type, state, pkt_data_length, pkt_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.src_addr)?;
        codec::write_u32(writer, self.dest_addr)?;
        codec::write_u8(writer, self.arb)?;
        codec::write_u8(writer, self.reserved2)?;
        codec::write_u16(writer, self.crc)?;
        codec::write_u8(writer, self.priority)?;
        codec::write_u8(writer, self.transfer_type)?;
        codec::write_u8(writer, self.state)?;
        codec::write_u16(writer, self.pkt_data_length)?;
        codec::write_u8(writer, 0)?;
        codec::write_bytes(writer, &self.pkt_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 1 + 1 + 2 + 1 + 1 + 1 + 2 + 1 + self.pkt_data.len() as u32
    }
}

/// `MOST_PKT`: a MOST25/50 asynchronous packet, legacy layout (no arbitration
/// byte, 16-byte inline payload window predates `MostPkt2`'s length-prefixed form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostPkt {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub reserved1: u8,
    pub src_addr: u32,
    pub dest_addr: u32,
    pub transfer_type: u8,
    pub state: u8,
    pub ack_nack: u8,
    pub crc: u16,
    pub pkt_data_length: u8,
    pub pkt_data: [u8; 16],
}

impl MostPkt {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let src_addr = codec::read_u32(cursor)?;
        let dest_addr = codec::read_u32(cursor)?;
        let transfer_type = codec::read_u8(cursor)?;
        let state = codec::read_u8(cursor)?;
        let ack_nack = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        let crc = codec::read_u16(cursor)?;
        let pkt_data_length = codec::read_u8(cursor)?;
        codec::skip(cursor, 1)?;
        let pkt_data = codec::read_array::<16>(cursor)?;
        Ok(Self { header, channel, dir, reserved1, src_addr, dest_addr, transfer_type, state, ack_nack, crc, pkt_data_length, pkt_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.src_addr)?;
        codec::write_u32(writer, self.dest_addr)?;
        codec::write_u8(writer, self.transfer_type)?;
        codec::write_u8(writer, self.state)?;
        codec::write_u8(writer, self.ack_nack)?;
        codec::write_u8(writer, 0)?;
        codec::write_u16(writer, self.crc)?;
        codec::write_u8(writer, self.pkt_data_length)?;
        codec::write_u8(writer, 0)?;
        codec::write_bytes(writer, &self.pkt_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 4 + 1 + 1 + 1 + 1 + 2 + 1 + 1 + 16
    }
}

/// `MOST_LIGHTLOCK`: optical lock-state changes on a MOST channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostLightLock {
    pub header: ObjectHeader,
    pub channel: u16,
    pub state: u16,
    pub reserved: [u16; 2],
}

impl MostLightLock {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let state = codec::read_u16(cursor)?;
        let reserved = [codec::read_u16(cursor)?, codec::read_u16(cursor)?];
        Ok(Self { header, channel, state, reserved })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.state)?;
        for v in self.reserved {
            codec::write_u16(writer, v)?;
        }
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2 * 2
    }
}

/// `MOST_STATISTIC`: periodic per-ring MOST counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub code_errors: u32,
    pub bus_load: u32,
    pub bypass_state: u32,
}

impl MostStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        codec::skip(cursor, 2)?;
        let code_errors = codec::read_u32(cursor)?;
        let bus_load = codec::read_u32(cursor)?;
        let bypass_state = codec::read_u32(cursor)?;
        Ok(Self { header, channel, code_errors, bus_load, bypass_state })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, 0)?;
        codec::write_u32(writer, self.code_errors)?;
        codec::write_u32(writer, self.bus_load)?;
        codec::write_u32(writer, self.bypass_state)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4 + 4
    }
}

/// `MOST_HWMODE`: hardware operating mode of the MOST interface card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostHwMode {
    pub header: ObjectHeader,
    pub channel: u16,
    pub hw_mode: u16,
    pub hw_mode_mask: u16,
}

impl MostHwMode {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let hw_mode = codec::read_u16(cursor)?;
        let hw_mode_mask = codec::read_u16(cursor)?;
        Ok(Self { header, channel, hw_mode, hw_mode_mask })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.hw_mode)?;
        codec::write_u16(writer, self.hw_mode_mask)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2
    }
}

/// `MOST_REG`: a single-register read/write on the MOST transceiver.
#[derive(Debug, Clone, PartialEq)]
pub struct MostReg {
    pub header: ObjectHeader,
    pub channel: u16,
    pub sub_type: u16,
    pub handle: u32,
    pub offset: u16,
    pub chip: u16,
    pub reg_data_len: u32,
    pub reg_data: Vec<u8>,
}

impl MostReg {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let sub_type = codec::read_u16(cursor)?;
        let handle = codec::read_u32(cursor)?;
        let offset = codec::read_u16(cursor)?;
        let chip = codec::read_u16(cursor)?;
        let reg_data_len = codec::read_u32(cursor)?;
        let reg_data = codec::read_bytes(cursor, reg_data_len as usize)?;
        Ok(Self { header, channel, sub_type, handle, offset, chip, reg_data_len, reg_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.sub_type)?;
        codec::write_u32(writer, self.handle)?;
        codec::write_u16(writer, self.offset)?;
        codec::write_u16(writer, self.chip)?;
        codec::write_u32(writer, self.reg_data_len)?;
        codec::write_bytes(writer, &self.reg_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 2 + 2 + 4 + self.reg_data.len() as u32
    }
}

/// `MOST_GENREG`: a generic addressed register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostGenReg {
    pub header: ObjectHeader,
    pub channel: u16,
    pub sub_type: u16,
    pub handle: u32,
    pub reg_id: u32,
    pub reg_value: u32,
}

impl MostGenReg {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let sub_type = codec::read_u16(cursor)?;
        let handle = codec::read_u32(cursor)?;
        let reg_id = codec::read_u32(cursor)?;
        let reg_value = codec::read_u32(cursor)?;
        Ok(Self { header, channel, sub_type, handle, reg_id, reg_value })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.sub_type)?;
        codec::write_u32(writer, self.handle)?;
        codec::write_u32(writer, self.reg_id)?;
        codec::write_u32(writer, self.reg_value)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4 + 4
    }
}

/// `MOST_NETSTATE`: ring/network state change (`NotOk`, `Stable`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostNetState {
    pub header: ObjectHeader,
    pub channel: u16,
    pub state_new: u16,
    pub state_old: u16,
}

impl MostNetState {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let state_new = codec::read_u16(cursor)?;
        let state_old = codec::read_u16(cursor)?;
        Ok(Self { header, channel, state_new, state_old })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.state_new)?;
        codec::write_u16(writer, self.state_old)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 2
    }
}

/// `MOST_DATALOST`: frames dropped due to an internal buffer overrun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostDataLost {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub info: u32,
    pub lost_msgs_ctrl: u32,
    pub lost_msgs_async: u32,
}

impl MostDataLost {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let info = codec::read_u32(cursor)?;
        let lost_msgs_ctrl = codec::read_u32(cursor)?;
        let lost_msgs_async = codec::read_u32(cursor)?;
        Ok(Self { header, channel, reserved, info, lost_msgs_ctrl, lost_msgs_async })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u32(writer, self.info)?;
        codec::write_u32(writer, self.lost_msgs_ctrl)?;
        codec::write_u32(writer, self.lost_msgs_async)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4 + 4
    }
}

/// `MOST_TRIGGER`: a trigger condition fired by the logger's MOST frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostTrigger {
    pub header: ObjectHeader,
    pub channel: u16,
    pub mode: u16,
    pub hw: u32,
    pub previous_trigger_value: u32,
    pub current_trigger_value: u32,
}

impl MostTrigger {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let mode = codec::read_u16(cursor)?;
        let hw = codec::read_u32(cursor)?;
        let previous_trigger_value = codec::read_u32(cursor)?;
        let current_trigger_value = codec::read_u32(cursor)?;
        Ok(Self { header, channel, mode, hw, previous_trigger_value, current_trigger_value })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.mode)?;
        codec::write_u32(writer, self.hw)?;
        codec::write_u32(writer, self.previous_trigger_value)?;
        codec::write_u32(writer, self.current_trigger_value)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4 + 4
    }
}

/// `MOST_150PKT`: MOST150 asynchronous packet. Field order follows the
/// reference `Most150Pkt::parse`.
#[derive(Debug, Clone, PartialEq)]
pub struct Most150Pkt {
    pub header: ObjectHeader,
    pub channel: u16,
    pub dir: u8,
    pub reserved1: u8,
    pub source_adr: u32,
    pub dest_adr: u16,
    pub transfer_type: u8,
    pub state: u8,
    pub ack_nack: u8,
    pub reserved2: u8,
    pub crc: u16,
    pub p_ack: u8,
    pub c_ack: u8,
    pub priority: u8,
    pub p_index: u8,
    pub pkt_data_length: u16,
    pub reserved3: u32,
    pub pkt_data: Vec<u8>,
}

impl Most150Pkt {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let source_adr = codec::read_u32(cursor)?;
        let dest_adr = codec::read_u16(cursor)?;
        let transfer_type = codec::read_u8(cursor)?;
        let state = codec::read_u8(cursor)?;
        let ack_nack = codec::read_u8(cursor)?;
        let reserved2 = codec::read_u8(cursor)?;
        let crc = codec::read_u16(cursor)?;
        let p_ack = codec::read_u8(cursor)?;
        let c_ack = codec::read_u8(cursor)?;
        let priority = codec::read_u8(cursor)?;
        let p_index = codec::read_u8(cursor)?;
        let pkt_data_length = codec::read_u16(cursor)?;
        let reserved3 = codec::read_u32(cursor)?;
        let pkt_data = codec::read_bytes(cursor, pkt_data_length as usize)?;
        Ok(Self {
            header, channel, dir, reserved1, source_adr, dest_adr, transfer_type, state, ack_nack, reserved2,
            crc, p_ack, c_ack, priority, p_index, pkt_data_length, reserved3, pkt_data,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_u32(writer, self.source_adr)?;
        codec::write_u16(writer, self.dest_adr)?;
        codec::write_u8(writer, self.transfer_type)?;
        codec::write_u8(writer, self.state)?;
        codec::write_u8(writer, self.ack_nack)?;
        codec::write_u8(writer, self.reserved2)?;
        codec::write_u16(writer, self.crc)?;
        codec::write_u8(writer, self.p_ack)?;
        codec::write_u8(writer, self.c_ack)?;
        codec::write_u8(writer, self.priority)?;
        codec::write_u8(writer, self.p_index)?;
        codec::write_u16(writer, self.pkt_data_length)?;
        codec::write_u32(writer, self.reserved3)?;
        codec::write_bytes(writer, &self.pkt_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 1 + 1 + 4 + 2 + 1 + 1 + 1 + 1 + 2 + 1 + 1 + 1 + 1 + 2 + 4 + self.pkt_data.len() as u32
    }
}

/// `MOST_STATISTICEX`: `MostStatistic` plus asynchronous/streaming packet counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostStatisticEx {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: [u8; 2],
    pub code_errors: u32,
    pub bus_load: u32,
    pub asc_packets: u32,
    pub asc_packets_err: u32,
    pub spy_packets: u32,
    pub spy_packets_err: u32,
    pub ctrl_packets: u32,
    pub ctrl_packets_err: u32,
    pub async_packets: u32,
    pub async_packets_err: u32,
}

impl MostStatisticEx {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_array::<2>(cursor)?;
        let code_errors = codec::read_u32(cursor)?;
        let bus_load = codec::read_u32(cursor)?;
        let asc_packets = codec::read_u32(cursor)?;
        let asc_packets_err = codec::read_u32(cursor)?;
        let spy_packets = codec::read_u32(cursor)?;
        let spy_packets_err = codec::read_u32(cursor)?;
        let ctrl_packets = codec::read_u32(cursor)?;
        let ctrl_packets_err = codec::read_u32(cursor)?;
        let async_packets = codec::read_u32(cursor)?;
        let async_packets_err = codec::read_u32(cursor)?;
        Ok(Self { header, channel, reserved, code_errors, bus_load, asc_packets, asc_packets_err, spy_packets, spy_packets_err, ctrl_packets, ctrl_packets_err, async_packets, async_packets_err })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_bytes(writer, &self.reserved)?;
        codec::write_u32(writer, self.code_errors)?;
        codec::write_u32(writer, self.bus_load)?;
        codec::write_u32(writer, self.asc_packets)?;
        codec::write_u32(writer, self.asc_packets_err)?;
        codec::write_u32(writer, self.spy_packets)?;
        codec::write_u32(writer, self.spy_packets_err)?;
        codec::write_u32(writer, self.ctrl_packets)?;
        codec::write_u32(writer, self.ctrl_packets_err)?;
        codec::write_u32(writer, self.async_packets)?;
        codec::write_u32(writer, self.async_packets_err)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 10
    }
}

/// `MOST_SYSTEMEVENT`: a MOST-NetServices system event notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostSystemEvent {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub id: u32,
    pub value: u32,
    pub value_mask: u32,
    pub source: u32,
    pub source_mask: u32,
}

impl MostSystemEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let id = codec::read_u32(cursor)?;
        let value = codec::read_u32(cursor)?;
        let value_mask = codec::read_u32(cursor)?;
        let source = codec::read_u32(cursor)?;
        let source_mask = codec::read_u32(cursor)?;
        Ok(Self { header, channel, reserved, id, value, value_mask, source, source_mask })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u32(writer, self.id)?;
        codec::write_u32(writer, self.value)?;
        codec::write_u32(writer, self.value_mask)?;
        codec::write_u32(writer, self.source)?;
        codec::write_u32(writer, self.source_mask)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 5
    }
}

/// `MOST_ECL`: electrical control line level transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MostEcl {
    pub header: ObjectHeader,
    pub channel: u16,
    pub mode: u16,
    pub ecl_state: u8,
    pub reserved1: u8,
    pub reserved2: [u8; 2],
}

impl MostEcl {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let mode = codec::read_u16(cursor)?;
        let ecl_state = codec::read_u8(cursor)?;
        let reserved1 = codec::read_u8(cursor)?;
        let reserved2 = codec::read_array::<2>(cursor)?;
        Ok(Self { header, channel, mode, ecl_state, reserved1, reserved2 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.mode)?;
        codec::write_u8(writer, self.ecl_state)?;
        codec::write_u8(writer, self.reserved1)?;
        codec::write_bytes(writer, &self.reserved2)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 1 + 1 + 2
    }
}

/// Variants whose practical content is a channel plus a raw trailing payload:
/// allocation table snapshots, Tx-light state, stress-test markers, and the
/// Ethernet-over-MOST packet carrier. These share one shape because the
/// reference format gives each only a length-prefixed blob beyond the channel.
macro_rules! most_blob_event {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub header: ObjectHeader,
            pub channel: u16,
            pub reserved: u16,
            pub data_len: u32,
            pub data: Vec<u8>,
        }

        impl $name {
            pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
                let channel = codec::read_u16(cursor)?;
                let reserved = codec::read_u16(cursor)?;
                let data_len = codec::read_u32(cursor)?;
                let data = codec::read_bytes(cursor, data_len as usize)?;
                Ok(Self { header, channel, reserved, data_len, data })
            }

            pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
                self.header.write(writer)?;
                codec::write_u16(writer, self.channel)?;
                codec::write_u16(writer, self.reserved)?;
                codec::write_u32(writer, self.data_len)?;
                codec::write_bytes(writer, &self.data)?;
                Ok(())
            }

            pub fn body_len(&self) -> u32 {
                2 + 2 + 4 + self.data.len() as u32
            }
        }
    };
}

most_blob_event!(MostAllocTab, "`MOST_ALLOCTAB`: a MOST25/50 bandwidth allocation table snapshot.");
most_blob_event!(Most150AllocTab, "`MOST_150ALLOCTAB`: a MOST150 bandwidth allocation table snapshot.");
most_blob_event!(MostTxLight, "`MOST_TXLIGHT`: transmit-light on/off state with driver payload.");
most_blob_event!(MostStress, "`MOST_STRESS`: a MOST stress-test pattern marker.");
most_blob_event!(MostEthernetPkt, "`MOST_ETHERNET_PKT`: an Ethernet frame tunnelled over MOST150.");
most_blob_event!(Most150Message, "`MOST_150MESSAGE`: a MOST150 control-channel message.");
most_blob_event!(Most50Message, "`MOST_50MESSAGE`: a MOST50 control-channel message.");
most_blob_event!(Most50Pkt, "`MOST_50PKT`: a MOST50 asynchronous packet.");
most_blob_event!(Most150MessageFragment, "`MOST_150MESSAGE_FRAGMENT`: one fragment of a reassembled MOST150 message.");
most_blob_event!(Most150PktFragment, "`MOST_150PKT_FRAGMENT`: one fragment of a reassembled MOST150 packet.");
most_blob_event!(MostEthernetPktFragment, "`MOST_ETHERNET_PKT_FRAGMENT`: one fragment of a tunnelled Ethernet frame.");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_type::ObjectType;

    #[test]
    fn most150_pkt_round_trip_matches_scenario_fixture() {
        let header = ObjectHeader::new_v2(ObjectType::Most150Pkt, 5_708_800_000, 0);
        let pkt = Most150Pkt {
            header,
            channel: 1,
            dir: 1,
            reserved1: 0,
            source_adr: 0x0172,
            dest_adr: 0x03C8,
            transfer_type: 1,
            state: 0x02,
            ack_nack: 0x11,
            reserved2: 0,
            crc: 0xAABB,
            p_ack: 0x00,
            c_ack: 0x44,
            priority: 0,
            p_index: 0x33,
            pkt_data_length: 8,
            reserved3: 0,
            pkt_data: vec![0x11, 0x22, 0x33, 0x34, 0x00, 0x02, 0x11, 0x22],
        };
        let mut buf = Vec::new();
        pkt.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[header.calculate_header_size() as usize..]);
        let parsed = Most150Pkt::read(&mut cursor, header).unwrap();
        assert_eq!(parsed, pkt);
    }

    #[test]
    fn most_statistic_round_trip() {
        let header = ObjectHeader::new_v1(ObjectType::MostStatistic, 10, 0);
        let stats = MostStatistic { header, channel: 2, code_errors: 1, bus_load: 2, bypass_state: 0 };
        let mut buf = Vec::new();
        stats.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[16..]);
        assert_eq!(MostStatistic::read(&mut cursor, header).unwrap(), stats);
    }
}
