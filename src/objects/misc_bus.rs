//! The smaller single-purpose bus families: GPS, J1708, WLAN, and K-Line.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

/// `GPS_EVENT`: a position/velocity fix from the logger's GPS receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsEvent {
    pub header: ObjectHeader,
    pub flags: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f32,
    pub course: f32,
}

impl GpsEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let flags = codec::read_u32(cursor)?;
        let latitude = codec::read_f64(cursor)?;
        let longitude = codec::read_f64(cursor)?;
        let altitude = codec::read_f64(cursor)?;
        let speed = codec::read_f32(cursor)?;
        let course = codec::read_f32(cursor)?;
        Ok(Self { header, flags, latitude, longitude, altitude, speed, course })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u32(writer, self.flags)?;
        codec::write_f64(writer, self.latitude)?;
        codec::write_f64(writer, self.longitude)?;
        codec::write_f64(writer, self.altitude)?;
        codec::write_f32(writer, self.speed)?;
        codec::write_f32(writer, self.course)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + 8 + 8 + 8 + 4 + 4
    }
}

/// `J1708_MESSAGE` / `J1708_VIRTUAL_MSG`: a heavy-duty-vehicle J1708 message.
/// The "virtual" tag marks a message the logger synthesised rather than sniffed;
/// the on-disk shape is identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct J1708Message {
    pub header: ObjectHeader,
    pub dir: u8,
    pub reserved: u8,
    pub data_len: u16,
    pub data: Vec<u8>,
}

impl J1708Message {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let dir = codec::read_u8(cursor)?;
        let reserved = codec::read_u8(cursor)?;
        let data_len = codec::read_u16(cursor)?;
        let data = codec::read_bytes(cursor, data_len as usize)?;
        Ok(Self { header, dir, reserved, data_len, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u8(writer, self.dir)?;
        codec::write_u8(writer, self.reserved)?;
        codec::write_u16(writer, self.data_len)?;
        codec::write_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        1 + 1 + 2 + self.data.len() as u32
    }
}

/// `WLAN_FRAME`: one captured 802.11 frame plus radio metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlanFrame {
    pub header: ObjectHeader,
    pub channel: u16,
    pub flags: u16,
    pub signal_strength: i32,
    pub signal_quality: i32,
    pub frame_length: u16,
    pub reserved: u16,
    pub frame_data: Vec<u8>,
}

impl WlanFrame {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u16(cursor)?;
        let signal_strength = codec::read_i32(cursor)?;
        let signal_quality = codec::read_i32(cursor)?;
        let frame_length = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let frame_data = codec::read_bytes(cursor, frame_length as usize)?;
        Ok(Self { header, channel, flags, signal_strength, signal_quality, frame_length, reserved, frame_data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.flags)?;
        codec::write_i32(writer, self.signal_strength)?;
        codec::write_i32(writer, self.signal_quality)?;
        codec::write_u16(writer, self.frame_length)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_bytes(writer, &self.frame_data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + 4 + 2 + 2 + self.frame_data.len() as u32
    }
}

/// `WLAN_STATISTIC`: cumulative frame/retry counters for one WLAN channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WlanStatistic {
    pub header: ObjectHeader,
    pub channel: u16,
    pub reserved: u16,
    pub dropped_frames: u32,
    pub received_frames: u32,
    pub sent_frames: u32,
}

impl WlanStatistic {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let reserved = codec::read_u16(cursor)?;
        let dropped_frames = codec::read_u32(cursor)?;
        let received_frames = codec::read_u32(cursor)?;
        let sent_frames = codec::read_u32(cursor)?;
        Ok(Self { header, channel, reserved, dropped_frames, received_frames, sent_frames })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.reserved)?;
        codec::write_u32(writer, self.dropped_frames)?;
        codec::write_u32(writer, self.received_frames)?;
        codec::write_u32(writer, self.sent_frames)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 * 3
    }
}

/// `KLINE_STATUS_EVENT`: a K-Line (ISO 9141/14230) transport status notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlineStatusEvent {
    pub header: ObjectHeader,
    pub event_type: u16,
    pub data_len: u16,
    pub data: Vec<u8>,
}

impl KlineStatusEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let event_type = codec::read_u16(cursor)?;
        let data_len = codec::read_u16(cursor)?;
        let data = codec::read_bytes(cursor, data_len as usize)?;
        Ok(Self { header, event_type, data_len, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.event_type)?;
        codec::write_u16(writer, self.data_len)?;
        codec::write_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + self.data.len() as u32
    }
}
