//! Bounds-checked little-endian primitives over a byte cursor.
//!
//! Every BLF field is little-endian regardless of host. `byteorder`'s
//! `ReadBytesExt`/`WriteBytesExt` already do the byte-swapping; this module
//! adds the bounds check the format's error taxonomy requires ([`BlfError::Truncated`]
//! / [`BlfError::BufferOverflow`]) instead of letting a short read surface as a bare
//! I/O error.

use crate::error::{BlfError, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Write};

fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    cursor.get_ref().len().saturating_sub(cursor.position() as usize)
}

fn need(cursor: &Cursor<&[u8]>, n: usize) -> Result<()> {
    let avail = remaining(cursor);
    if avail < n {
        return Err(BlfError::Truncated { needed: n, available: avail });
    }
    Ok(())
}

macro_rules! checked_read {
    ($name:ident, $width:expr, $read:ident, $ty:ty) => {
        pub fn $name(cursor: &mut Cursor<&[u8]>) -> Result<$ty> {
            need(cursor, $width)?;
            Ok(cursor.$read::<LittleEndian>()?)
        }
    };
}

pub fn read_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8> {
    need(cursor, 1)?;
    Ok(cursor.read_u8()?)
}

pub fn read_i8(cursor: &mut Cursor<&[u8]>) -> Result<i8> {
    need(cursor, 1)?;
    Ok(cursor.read_i8()?)
}

checked_read!(read_u16, 2, read_u16, u16);
checked_read!(read_i16, 2, read_i16, i16);
checked_read!(read_u32, 4, read_u32, u32);
checked_read!(read_i32, 4, read_i32, i32);
checked_read!(read_u64, 8, read_u64, u64);
checked_read!(read_i64, 8, read_i64, i64);
checked_read!(read_f32, 4, read_f32, f32);
checked_read!(read_f64, 8, read_f64, f64);

pub fn read_bytes(cursor: &mut Cursor<&[u8]>, len: usize) -> Result<Vec<u8>> {
    need(cursor, len)?;
    let mut buf = vec![0u8; len];
    std::io::Read::read_exact(cursor, &mut buf)?;
    Ok(buf)
}

pub fn read_array<const N: usize>(cursor: &mut Cursor<&[u8]>) -> Result<[u8; N]> {
    need(cursor, N)?;
    let mut buf = [0u8; N];
    std::io::Read::read_exact(cursor, &mut buf)?;
    Ok(buf)
}

/// Advances the cursor by `n` bytes without inspecting them (reserved/padding fields).
pub fn skip(cursor: &mut Cursor<&[u8]>, n: u64) -> Result<()> {
    need(cursor, n as usize)?;
    cursor.set_position(cursor.position() + n);
    Ok(())
}

pub fn write_u8<W: Write>(writer: &mut W, v: u8) -> Result<()> {
    writer.write_u8(v)?;
    Ok(())
}
pub fn write_i8<W: Write>(writer: &mut W, v: i8) -> Result<()> {
    writer.write_i8(v)?;
    Ok(())
}
pub fn write_u16<W: Write>(writer: &mut W, v: u16) -> Result<()> {
    writer.write_u16::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_i16<W: Write>(writer: &mut W, v: i16) -> Result<()> {
    writer.write_i16::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_u32<W: Write>(writer: &mut W, v: u32) -> Result<()> {
    writer.write_u32::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_i32<W: Write>(writer: &mut W, v: i32) -> Result<()> {
    writer.write_i32::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_u64<W: Write>(writer: &mut W, v: u64) -> Result<()> {
    writer.write_u64::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_i64<W: Write>(writer: &mut W, v: i64) -> Result<()> {
    writer.write_i64::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_f32<W: Write>(writer: &mut W, v: f32) -> Result<()> {
    writer.write_f32::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_f64<W: Write>(writer: &mut W, v: f64) -> Result<()> {
    writer.write_f64::<LittleEndian>(v)?;
    Ok(())
}
pub fn write_bytes<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    writer.write_all(data)?;
    Ok(())
}

/// Rounds `n` up to the next multiple of 4 (the BLF trailing-alignment rule).
pub fn align4(n: u64) -> u64 {
    (n + 3) & !3
}
