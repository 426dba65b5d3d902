//! Ethernet/AFDX-adjacent event family: raw and forwarded frames, Rx errors,
//! link status, and cumulative counters.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `ETHERNET_FRAME`: a raw captured Ethernet frame with a validated,
/// length-prefixed payload (not a fixed inline window).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    pub header: ObjectHeader,
    pub source_address: [u8; 6],
    pub destination_address: [u8; 6],
    pub channel: u16,
    pub dir: u16,
    pub ether_type: u16,
    pub tpid: u16,
    pub tci: u16,
    pub pay_load_length: u16,
    pub pay_load: Vec<u8>,
}

impl EthernetFrame {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let source_address = codec::read_array::<6>(cursor)?;
        let destination_address = codec::read_array::<6>(cursor)?;
        let channel = codec::read_u16(cursor)?;
        let dir = codec::read_u16(cursor)?;
        let ether_type = codec::read_u16(cursor)?;
        let tpid = codec::read_u16(cursor)?;
        let tci = codec::read_u16(cursor)?;
        let pay_load_length = codec::read_u16(cursor)?;
        let pay_load = codec::read_bytes(cursor, pay_load_length as usize)?;
        Ok(Self {
            header, source_address, destination_address, channel, dir,
            ether_type, tpid, tci, pay_load_length, pay_load,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_bytes(writer, &self.source_address)?;
        codec::write_bytes(writer, &self.destination_address)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.dir)?;
        codec::write_u16(writer, self.ether_type)?;
        codec::write_u16(writer, self.tpid)?;
        codec::write_u16(writer, self.tci)?;
        codec::write_u16(writer, self.pay_load_length)?;
        codec::write_bytes(writer, &self.pay_load)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        6 + 6 + 2 + 2 + 2 + 2 + 2 + 2 + self.pay_load.len() as u32
    }
}

/// `ETHERNET_RXERROR`: a frame the MAC received but could not validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetRxError {
    pub header: ObjectHeader,
    pub channel: u16,
    pub hw_channel: u16,
    pub error_code: u32,
    pub flags: u32,
    pub frame_duration: u32,
    pub dummy: [u32; 3],
    pub frame_length: u16,
    pub reserved: u16,
    pub frame_data: Vec<u8>,
}

impl EthernetRxError {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let hw_channel = codec::read_u16(cursor)?;
        let error_code = codec::read_u32(cursor)?;
        let flags = codec::read_u32(cursor)?;
        let frame_duration = codec::read_u32(cursor)?;
        let dummy = [codec::read_u32(cursor)?, codec::read_u32(cursor)?, codec::read_u32(cursor)?];
        let frame_length = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let frame_data = codec::read_bytes(cursor, frame_length as usize)?;
        Ok(Self { header, channel, hw_channel, error_code, flags, frame_duration, dummy, frame_length, reserved, frame_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.hw_channel)?;
        codec::write_u32(writer, self.error_code)?;
        codec::write_u32(writer, self.flags)?;
        codec::write_u32(writer, self.frame_duration)?;
        for v in self.dummy {
            codec::write_u32(writer, v)?;
        }
        codec::write_u16(writer, self.frame_length)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_bytes(writer, &self.frame_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4 + 4 + 4 * 3 + 2 + 2 + self.frame_data.len() as u32
    }
}

/// `ETHERNET_STATUS`: link-layer state snapshot for one Ethernet channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetStatus {
    pub header: ObjectHeader,
    pub channel: u16,
    pub flags: u16,
    pub link_status: u8,
    pub ethernet_phy: u8,
    pub duplex: u8,
    pub mdi: u8,
    pub connector: u8,
    pub clock_mode: u8,
    pub pairs: u8,
    pub hardware_channel: u8,
    pub bit_rate: u32,
}

impl EthernetStatus {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u16(cursor)?;
        let link_status = codec::read_u8(cursor)?;
        let ethernet_phy = codec::read_u8(cursor)?;
        let duplex = codec::read_u8(cursor)?;
        let mdi = codec::read_u8(cursor)?;
        let connector = codec::read_u8(cursor)?;
        let clock_mode = codec::read_u8(cursor)?;
        let pairs = codec::read_u8(cursor)?;
        let hardware_channel = codec::read_u8(cursor)?;
        let bit_rate = codec::read_u32(cursor)?;
        Ok(Self { header, channel, flags, link_status, ethernet_phy, duplex, mdi, connector, clock_mode, pairs, hardware_channel, bit_rate })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.flags)?;
        codec::write_u8(writer, self.link_status)?;
        codec::write_u8(writer, self.ethernet_phy)?;
        codec::write_u8(writer, self.duplex)?;
        codec::write_u8(writer, self.mdi)?;
        codec::write_u8(writer, self.connector)?;
        codec::write_u8(writer, self.clock_mode)?;
        codec::write_u8(writer, self.pairs)?;
        codec::write_u8(writer, self.hardware_channel)?;
        codec::write_u32(writer, self.bit_rate)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 1 * 8 + 4
    }
}

/// `ETHERNET_STATISTIC`: cumulative frame/byte/error counters for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub rcv_ok: u64,
    pub xmit_ok: u64,
    pub rcv_error: u64,
    pub xmit_error: u64,
    pub rcv_bytes: u64,
    pub xmit_bytes: u64,
}

impl EthernetStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let rcv_ok = codec::read_u64(cursor)?;
        let xmit_ok = codec::read_u64(cursor)?;
        let rcv_error = codec::read_u64(cursor)?;
        let xmit_error = codec::read_u64(cursor)?;
        let rcv_bytes = codec::read_u64(cursor)?;
        let xmit_bytes = codec::read_u64(cursor)?;
        Ok(Self { header, channel, reserved, rcv_ok, xmit_ok, rcv_error, xmit_error, rcv_bytes, xmit_bytes })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u64(writer, self.rcv_ok)?;
        codec::write_u64(writer, self.xmit_ok)?;
        codec::write_u64(writer, self.rcv_error)?;
        codec::write_u64(writer, self.xmit_error)?;
        codec::write_u64(writer, self.rcv_bytes)?;
        codec::write_u64(writer, self.xmit_bytes)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 8 * 6
    }
}

/// One of the `ETHERNET_FRAME_EX` / `ETHERNET_FRAME_FORWARDED` / `ETHERNET_ERROR_EX`
/// / `ETHERNET_ERROR_FORWARDED` variants. They share a layout: a leading
/// `structLength`/`flags` pair, a channel/hardware-channel/direction triple,
/// a 64-bit frame duration, and a length-prefixed raw frame. The `ObjectType`
/// tag alone picks which of the four an encoder writes; the on-disk shape is
/// identical across them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrameEvent {
    pub header: ObjectHeader,
    pub struct_length: u16,
    pub flags: u16,
    pub channel: u16,
    pub hw_channel: u16,
    pub frame_duration: u64,
    pub frame_checksum: u32,
    pub dir: u16,
    pub frame_length: u16,
    pub frame_handle: u32,
    pub reserved: u32,
    pub frame_data: Vec<u8>,
}

impl EthernetFrameEvent {
    /// Size of the fixed fields preceding `frame_data`, including `struct_length` itself.
    pub const FIXED_STRUCT_LENGTH: u16 = 2 + 2 + 2 + 2 + 8 + 4 + 2 + 2 + 4 + 4;

    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let struct_length = codec::read_u16(cursor)?;
        let flags = codec::read_u16(cursor)?;
        let channel = codec::read_u16(cursor)?;
        let hw_channel = codec::read_u16(cursor)?;
        let frame_duration = codec::read_u64(cursor)?;
        let frame_checksum = codec::read_u32(cursor)?;
        let dir = codec::read_u16(cursor)?;
        let frame_length = codec::read_u16(cursor)?;
        let frame_handle = codec::read_u32(cursor)?;
        let reserved = codec::read_u32(cursor)?;
        let frame_data = codec::read_bytes(cursor, frame_length as usize)?;
        Ok(Self {
            header, struct_length, flags, channel, hw_channel, frame_duration,
            frame_checksum, dir, frame_length, frame_handle, reserved, frame_data,
        })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, Self::FIXED_STRUCT_LENGTH)?;
        codec::write_u16(writer, self.flags)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.hw_channel)?;
        codec::write_u64(writer, self.frame_duration)?;
        codec::write_u32(writer, self.frame_checksum)?;
        codec::write_u16(writer, self.dir)?;
        codec::write_u16(writer, self.frame_length)?;
        codec::write_u32(writer, self.frame_handle)?;
        codec::write_u32(writer, self.reserved)?;
        codec::write_bytes(writer, &self.frame_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        Self::FIXED_STRUCT_LENGTH as u32 + self.frame_data.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ObjectHeader;
    use crate::object_type::ObjectType;

    #[test]
    fn ethernet_frame_forwarded_scenario_round_trips() {
        let header = ObjectHeader::new_v1(ObjectType::EthernetFrameForwarded, 1000, 0);
        let event = EthernetFrameEvent {
            header,
            struct_length: EthernetFrameEvent::FIXED_STRUCT_LENGTH,
            flags: 0,
            channel: 1,
            hw_channel: 0,
            frame_duration: 0,
            frame_checksum: 0,
            dir: 0,
            frame_length: 3,
            frame_handle: 0,
            reserved: 0,
            frame_data: vec![0xAA, 0xBB, 0xCC],
        };
        let mut buf = Vec::new();
        event.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[event.header.calculate_header_size() as usize..]);
        let parsed = EthernetFrameEvent::read(&mut cursor, event.header).unwrap();
        assert_eq!(parsed.struct_length, EthernetFrameEvent::FIXED_STRUCT_LENGTH);
        assert_eq!(parsed.frame_data, vec![0xAA, 0xBB, 0xCC]);
    }
}
