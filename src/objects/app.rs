//! Application- and system-level events: triggers, environment variables,
//! free-text markers, diagnostic metadata, and the end-of-file sentinel.

use crate::codec;
use crate::error::Result;
use crate::header::ObjectHeader;
use std::io::{Cursor, Write};

fn read_counted_bytes(cursor: &mut Cursor<&[u8]>) -> Result<Vec<u8>> {
    let len = codec::read_u32(cursor)?;
    codec::read_bytes(cursor, len as usize)
}

fn write_counted_bytes<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    codec::write_u32(writer, data.len() as u32)?;
    codec::write_bytes(writer, data)?;
    Ok(())
}

/// `APP_TRIGGER`: a named pre/post-trigger window bracketing a measurement event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppTrigger {
    pub header: ObjectHeader,
    pub pre_trigger_time: u64,
    pub post_trigger_time: u64,
    pub channel: u16,
    pub flags: u16,
    pub app_specific2: u32,
}

impl AppTrigger {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let pre_trigger_time = codec::read_u64(cursor)?;
        let post_trigger_time = codec::read_u64(cursor)?;
        let channel = codec::read_u16(cursor)?;
        let flags = codec::read_u16(cursor)?;
        let app_specific2 = codec::read_u32(cursor)?;
        Ok(Self { header, pre_trigger_time, post_trigger_time, channel, flags, app_specific2 })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u64(writer, self.pre_trigger_time)?;
        codec::write_u64(writer, self.post_trigger_time)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.flags)?;
        codec::write_u32(writer, self.app_specific2)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        8 + 8 + 2 + 2 + 4
    }
}

/// One of the four `EnvironmentVariable` flavours (`ENV_INTEGER`, `ENV_DOUBLE`,
/// `ENV_STRING`, `ENV_DATA`): a named value the test tool sampled alongside the
/// bus traffic. The value shape differs per flavour but the name prefix is shared.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentValue {
    Integer(i64),
    Double(f64),
    String(Vec<u8>),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentVariable {
    pub header: ObjectHeader,
    pub name: Vec<u8>,
    pub value: EnvironmentValue,
}

impl EnvironmentVariable {
    pub fn read_integer(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let name = read_counted_bytes(cursor)?;
        let value = codec::read_i64(cursor)?;
        Ok(Self { header, name, value: EnvironmentValue::Integer(value) })
    }

    pub fn read_double(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let name = read_counted_bytes(cursor)?;
        let value = codec::read_f64(cursor)?;
        Ok(Self { header, name, value: EnvironmentValue::Double(value) })
    }

    pub fn read_string(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let name = read_counted_bytes(cursor)?;
        let value = read_counted_bytes(cursor)?;
        Ok(Self { header, name, value: EnvironmentValue::String(value) })
    }

    pub fn read_data(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let name = read_counted_bytes(cursor)?;
        let value = read_counted_bytes(cursor)?;
        Ok(Self { header, name, value: EnvironmentValue::Data(value) })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        write_counted_bytes(writer, &self.name)?;
        match &self.value {
            EnvironmentValue::Integer(v) => codec::write_i64(writer, *v)?,
            EnvironmentValue::Double(v) => codec::write_f64(writer, *v)?,
            EnvironmentValue::String(v) | EnvironmentValue::Data(v) => write_counted_bytes(writer, v)?,
        }
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        let name_len = 4 + self.name.len() as u32;
        name_len
            + match &self.value {
                EnvironmentValue::Integer(_) => 8,
                EnvironmentValue::Double(_) => 8,
                EnvironmentValue::String(v) | EnvironmentValue::Data(v) => 4 + v.len() as u32,
            }
    }
}

/// `REALTIME_CLOCK`: wall-clock/tick correlation sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealtimeClock {
    pub header: ObjectHeader,
    pub local_time: i64,
    pub ns_per_tick: u32,
    pub flags: u32,
}

impl RealtimeClock {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let local_time = codec::read_i64(cursor)?;
        let ns_per_tick = codec::read_u32(cursor)?;
        let flags = codec::read_u32(cursor)?;
        Ok(Self { header, local_time, ns_per_tick, flags })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_i64(writer, self.local_time)?;
        codec::write_u32(writer, self.ns_per_tick)?;
        codec::write_u32(writer, self.flags)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        8 + 4 + 4
    }
}

/// `APP_TEXT`: a free-text marker from the recording application, tagged with
/// a source (comment, channel name, trigger name, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppText {
    pub header: ObjectHeader,
    pub source: u32,
    pub reserved: [u32; 3],
    pub text: Vec<u8>,
}

impl AppText {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let source = codec::read_u32(cursor)?;
        let reserved = [codec::read_u32(cursor)?, codec::read_u32(cursor)?, codec::read_u32(cursor)?];
        let text = read_counted_bytes(cursor)?;
        Ok(Self { header, source, reserved, text })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u32(writer, self.source)?;
        for v in self.reserved {
            codec::write_u32(writer, v)?;
        }
        write_counted_bytes(writer, &self.text)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + 4 * 3 + 4 + self.text.len() as u32
    }
}

/// `SYS_VARIABLE`: a named system (tool-internal, not bus) variable sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysVariable {
    pub header: ObjectHeader,
    pub var_type: u32,
    pub representation: u32,
    pub reserved: [u32; 3],
    pub name: Vec<u8>,
    pub data: Vec<u8>,
}

impl SysVariable {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let var_type = codec::read_u32(cursor)?;
        let representation = codec::read_u32(cursor)?;
        let reserved = [codec::read_u32(cursor)?, codec::read_u32(cursor)?, codec::read_u32(cursor)?];
        let name = read_counted_bytes(cursor)?;
        let data = read_counted_bytes(cursor)?;
        Ok(Self { header, var_type, representation, reserved, name, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u32(writer, self.var_type)?;
        codec::write_u32(writer, self.representation)?;
        for v in self.reserved {
            codec::write_u32(writer, v)?;
        }
        write_counted_bytes(writer, &self.name)?;
        write_counted_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + 4 + 4 * 3 + 4 + self.name.len() as u32 + 4 + self.data.len() as u32
    }
}

/// `EVENT_COMMENT`: a free-text annotation attached to the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventComment {
    pub header: ObjectHeader,
    pub commented_event_type: u32,
    pub text: Vec<u8>,
}

impl EventComment {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let commented_event_type = codec::read_u32(cursor)?;
        let text = read_counted_bytes(cursor)?;
        Ok(Self { header, commented_event_type, text })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u32(writer, self.commented_event_type)?;
        write_counted_bytes(writer, &self.text)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + 4 + self.text.len() as u32
    }
}

/// `GLOBAL_MARKER`: a named, colour-tagged bookmark placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalMarker {
    pub header: ObjectHeader,
    pub commented_event_type: u32,
    pub foreground_color: u32,
    pub background_color: u32,
    pub is_relocatable: u8,
    pub reserved: [u8; 3],
    pub group_name: Vec<u8>,
    pub marker_name: Vec<u8>,
    pub description: Vec<u8>,
}

impl GlobalMarker {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let commented_event_type = codec::read_u32(cursor)?;
        let foreground_color = codec::read_u32(cursor)?;
        let background_color = codec::read_u32(cursor)?;
        let is_relocatable = codec::read_u8(cursor)?;
        let reserved = codec::read_array::<3>(cursor)?;
        let group_name = read_counted_bytes(cursor)?;
        let marker_name = read_counted_bytes(cursor)?;
        let description = read_counted_bytes(cursor)?;
        Ok(Self { header, commented_event_type, foreground_color, background_color, is_relocatable, reserved, group_name, marker_name, description })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u32(writer, self.commented_event_type)?;
        codec::write_u32(writer, self.foreground_color)?;
        codec::write_u32(writer, self.background_color)?;
        codec::write_u8(writer, self.is_relocatable)?;
        codec::write_bytes(writer, &self.reserved)?;
        write_counted_bytes(writer, &self.group_name)?;
        write_counted_bytes(writer, &self.marker_name)?;
        write_counted_bytes(writer, &self.description)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + 4 + 4 + 1 + 3
            + 4 + self.group_name.len() as u32
            + 4 + self.marker_name.len() as u32
            + 4 + self.description.len() as u32
    }
}

/// `SERIAL_EVENT`: an RS-232/UART byte stream sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialEvent {
    pub header: ObjectHeader,
    pub port: u16,
    pub state_event: u16,
    pub data: Vec<u8>,
}

impl SerialEvent {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let port = codec::read_u16(cursor)?;
        let state_event = codec::read_u16(cursor)?;
        let data = read_counted_bytes(cursor)?;
        Ok(Self { header, port, state_event, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.port)?;
        codec::write_u16(writer, self.state_event)?;
        write_counted_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2 + 4 + self.data.len() as u32
    }
}

/// `DRIVER_OVERRUN`: the logger dropped events because a channel's internal
/// queue overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrunError {
    pub header: ObjectHeader,
    pub channel: u16,
    pub overrun_count: u16,
}

impl OverrunError {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let channel = codec::read_u16(cursor)?;
        let overrun_count = codec::read_u16(cursor)?;
        Ok(Self { header, channel, overrun_count })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u16(writer, self.channel)?;
        codec::write_u16(writer, self.overrun_count)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        2 + 2
    }
}

/// `TEST_STRUCTURE`: a test-management-tool step/verdict record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStructure {
    pub header: ObjectHeader,
    pub flags: u32,
    pub struct_name: Vec<u8>,
    pub data: Vec<u8>,
}

impl TestStructure {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let flags = codec::read_u32(cursor)?;
        let struct_name = read_counted_bytes(cursor)?;
        let data = read_counted_bytes(cursor)?;
        Ok(Self { header, flags, struct_name, data })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        codec::write_u32(writer, self.flags)?;
        write_counted_bytes(writer, &self.struct_name)?;
        write_counted_bytes(writer, &self.data)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + 4 + self.struct_name.len() as u32 + 4 + self.data.len() as u32
    }
}

/// `DIAG_REQUEST_INTERPRETATION`: a CDD/ODX-derived human-readable rendering
/// of one diagnostic request/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagRequestInterpretation {
    pub header: ObjectHeader,
    pub diag_description: Vec<u8>,
    pub ecu_qualifier: Vec<u8>,
    pub request_response: Vec<u8>,
}

impl DiagRequestInterpretation {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let diag_description = read_counted_bytes(cursor)?;
        let ecu_qualifier = read_counted_bytes(cursor)?;
        let request_response = read_counted_bytes(cursor)?;
        Ok(Self { header, diag_description, ecu_qualifier, request_response })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)?;
        write_counted_bytes(writer, &self.diag_description)?;
        write_counted_bytes(writer, &self.ecu_qualifier)?;
        write_counted_bytes(writer, &self.request_response)?;
        Ok(())
    }

    pub fn body_len(&self) -> u32 {
        4 + self.diag_description.len() as u32 + 4 + self.ecu_qualifier.len() as u32 + 4 + self.request_response.len() as u32
    }
}

/// `UNKNOWN115`: the zero-payload sentinel written at clean close, beyond the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unknown115 {
    pub header: ObjectHeader,
}

impl Unknown115 {
    pub fn read(cursor: &mut Cursor<&[u8]>, header: ObjectHeader) -> Result<Self> {
        let _ = cursor;
        Ok(Self { header })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write(writer)
    }

    pub fn body_len(&self) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_type::ObjectType;

    #[test]
    fn environment_variants_round_trip() {
        let header = ObjectHeader::new_v1(ObjectType::EnvString, 0, 0);
        let original = EnvironmentVariable { header, name: b"Speed".to_vec(), value: EnvironmentValue::String(b"fast".to_vec()) };
        let mut buf = Vec::new();
        original.write(&mut buf).unwrap();
        let mut cursor = Cursor::new(&buf[header.calculate_header_size() as usize..]);
        let parsed = EnvironmentVariable::read_string(&mut cursor, header).unwrap();
        assert_eq!(parsed.name, original.name);
        assert_eq!(parsed.value, original.value);
    }

    #[test]
    fn unknown115_has_zero_body() {
        let header = ObjectHeader::new_v1(ObjectType::Unknown115, 0, 0);
        let event = Unknown115 { header };
        assert_eq!(event.body_len(), 0);
    }
}
