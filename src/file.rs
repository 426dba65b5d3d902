//! The public facade: `BlfFile::open`/`create`/`read`/`write`/`close`.
//!
//! Owns the two-stage buffering pipeline from `SPEC_FULL.md` §4.6. The
//! uncompressed byte FIFO ([`ByteFifo`]) decouples the on-disk compressed
//! stream from the decoded event queue; exactly one of the two directions
//! (read or write) is active for the lifetime of a given `BlfFile`, mirroring
//! the reference implementation's single-writer/single-reader discipline per
//! buffer.

use crate::byte_fifo::ByteFifo;
use crate::catalogue::{read_object, Event};
use crate::codec;
use crate::config::BlfConfig;
use crate::error::{BlfError, Result};
use crate::file_statistics::{FileStatistics, STATISTICS_SIZE};
use crate::header::{ObjectHeader, ObjectHeaderBase, BASE_HEADER_SIZE};
use crate::log_container::LogContainer;
use crate::object_type::ObjectType;
use crate::objects::Unknown115;
use std::collections::VecDeque;
use std::fs;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Read,
    Write,
}

/// A BLF file opened for either sequential reading or sequential writing.
///
/// Not reentrant: `open`, `read`, `write`, `close` on the same instance must
/// not be called concurrently from multiple threads. Distinct instances over
/// distinct files are independent.
pub struct BlfFile {
    mode: Mode,
    handle: fs::File,
    stats: FileStatistics,
    config: BlfConfig,
    uncompressed: ByteFifo,
    queue: VecDeque<Event>,
    /// Count of non-container, non-sentinel objects written (write mode only).
    written_object_count: u32,
    /// Running total of plaintext bytes flushed into containers (write mode only).
    uncompressed_total: u64,
    /// Bytes consumed from (read mode) or emitted to (write mode) the compressed stream.
    compressed_pos: u64,
    closed: bool,
}

impl BlfFile {
    /// Opens an existing file for sequential reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut handle = fs::File::open(path)?;
        let mut stats_buf = [0u8; STATISTICS_SIZE as usize];
        handle.read_exact(&mut stats_buf)?;
        let mut cursor = Cursor::new(&stats_buf[..]);
        let stats = FileStatistics::read(&mut cursor)?;
        tracing::debug!(
            object_count = stats.object_count,
            file_size = stats.file_size,
            "opened BLF file for reading"
        );
        Ok(Self {
            mode: Mode::Read,
            handle,
            stats,
            config: BlfConfig::default(),
            uncompressed: ByteFifo::new(),
            queue: VecDeque::new(),
            written_object_count: 0,
            uncompressed_total: 0,
            compressed_pos: STATISTICS_SIZE as u64,
            closed: false,
        })
    }

    /// Creates (or truncates) a file for sequential writing with the given
    /// writer configuration. Emits a placeholder `FileStatistics` immediately;
    /// [`Self::close`] backpatches it with the final counts and sizes.
    pub fn create<P: AsRef<Path>>(path: P, config: BlfConfig) -> Result<Self> {
        let mut handle = fs::File::create(path)?;
        let stats = FileStatistics {
            compression_level: config.compression_level.min(u32::from(u8::MAX)) as u8,
            ..FileStatistics::default()
        };
        let mut buf = Vec::new();
        stats.write(&mut buf)?;
        handle.write_all(&buf)?;
        tracing::debug!(
            compression_level = config.compression_level,
            default_log_container_size = config.default_log_container_size,
            "opened BLF file for writing"
        );
        Ok(Self {
            mode: Mode::Write,
            handle,
            stats,
            config,
            uncompressed: ByteFifo::new(),
            queue: VecDeque::new(),
            written_object_count: 0,
            uncompressed_total: 0,
            compressed_pos: buf.len() as u64,
            closed: false,
        })
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// True once the compressed stream and the uncompressed buffer are both
    /// drained. Only meaningful in read mode.
    pub fn eof(&self) -> bool {
        self.mode == Mode::Read
            && self.queue.is_empty()
            && self.uncompressed.unread_len() == 0
            && self.compressed_pos >= self.stats.file_size
    }

    pub fn config(&self) -> &BlfConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BlfConfig {
        &mut self.config
    }

    pub fn statistics(&self) -> &FileStatistics {
        &self.stats
    }

    /// Returns the next decoded event, or `Ok(None)` at end of file.
    /// Drives the pipeline (inflating containers as needed) until an event
    /// is available or the compressed stream is exhausted.
    pub fn read(&mut self) -> Result<Option<Event>> {
        if self.mode != Mode::Read {
            return Err(BlfError::WrongMode { expected: "read" });
        }
        if self.queue.is_empty() {
            self.uncompressed_file_to_read_write()?;
        }
        Ok(self.queue.pop_front())
    }

    /// Enqueues `event`, encodes it into the uncompressed buffer, and flushes
    /// a container if the buffer has grown past `default_log_container_size`.
    pub fn write(&mut self, event: Event) -> Result<()> {
        if self.mode != Mode::Write {
            return Err(BlfError::WrongMode { expected: "write" });
        }
        self.queue.push_back(event);
        self.read_write_to_uncompressed_file()
    }

    /// Idempotent. In write mode, flushes any buffered bytes, appends the
    /// `Unknown115` sentinel (unless disabled), and backpatches the file
    /// statistics header. Must be called (or the value dropped) to finalise a
    /// file opened for writing.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        if self.mode == Mode::Write {
            self.flush_remaining_uncompressed()?;

            self.stats.file_size_without_unknown115 = self.compressed_pos;

            if self.config.write_unknown115 {
                let header = ObjectHeader::new_v1(ObjectType::Unknown115, 0, 0);
                let sentinel = Event::Unknown115(Unknown115 { header });
                let mut buf = Vec::new();
                sentinel.encode(&mut buf)?;
                self.uncompressed.write(&buf);
                self.flush_remaining_uncompressed()?;
            }

            self.stats.file_size = self.compressed_pos;
            self.stats.uncompressed_file_size = u64::from(STATISTICS_SIZE) + self.uncompressed_total;
            self.stats.object_count = self.written_object_count;

            self.handle.seek(SeekFrom::Start(0))?;
            let mut buf = Vec::new();
            self.stats.write(&mut buf)?;
            self.handle.write_all(&buf)?;
            self.handle.flush()?;
            tracing::debug!(
                file_size = self.stats.file_size,
                object_count = self.stats.object_count,
                "closed BLF file, statistics backpatched"
            );
        }
        self.closed = true;
        Ok(())
    }

    // ---- read-path pipeline ----

    /// `uncompressedFile2ReadWrite`: ensures at least one decoded event sits
    /// at the front of `queue`, pulling and inflating containers as needed.
    /// A no-op once the compressed stream and uncompressed buffer are both
    /// exhausted (EOF).
    fn uncompressed_file_to_read_write(&mut self) -> Result<()> {
        loop {
            while self.uncompressed.unread_len() < BASE_HEADER_SIZE as usize {
                if !self.compressed_file_to_uncompressed_file()? {
                    return Ok(());
                }
            }
            let object_size = peek_object_size(&self.uncompressed.unread()[..BASE_HEADER_SIZE as usize])?;
            let aligned_size = codec::align4(object_size as u64) as usize;
            while self.uncompressed.unread_len() < aligned_size {
                if !self.compressed_file_to_uncompressed_file()? {
                    return Err(BlfError::Truncated {
                        needed: aligned_size,
                        available: self.uncompressed.unread_len(),
                    });
                }
            }

            let event = {
                let slice = &self.uncompressed.unread()[..object_size];
                let mut cursor = Cursor::new(slice);
                read_object(&mut cursor)?.0
            };
            self.uncompressed.advance(aligned_size);
            self.uncompressed.drop_consumed();

            match event {
                Some(ev) => {
                    self.queue.push_back(ev);
                    return Ok(());
                }
                // Reserved or unrecognised tag: skipped, not an error. Keep draining.
                None => continue,
            }
        }
    }

    /// `compressedFile2UncompressedFile`: reads exactly one `LogContainer`
    /// object from the compressed stream and appends its inflated payload to
    /// the uncompressed buffer. Returns `Ok(false)` at a clean end of stream.
    fn compressed_file_to_uncompressed_file(&mut self) -> Result<bool> {
        let mut header_buf = [0u8; BASE_HEADER_SIZE as usize];
        match self.handle.read_exact(&mut header_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(false),
            Err(e) => return Err(e.into()),
        }
        self.compressed_pos += header_buf.len() as u64;

        let mut cursor = Cursor::new(&header_buf[..]);
        let base = ObjectHeaderBase::read(&mut cursor)?;
        if base.object_type != ObjectType::LogContainer {
            return Err(BlfError::ContainerExpected(u32::from(base.object_type)));
        }

        let rest_len = (base.object_size as usize).saturating_sub(BASE_HEADER_SIZE as usize);
        let mut rest = vec![0u8; rest_len];
        self.handle.read_exact(&mut rest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                BlfError::Truncated { needed: rest_len, available: 0 }
            } else {
                BlfError::from(e)
            }
        })?;
        self.compressed_pos += rest.len() as u64;

        let mut body_cursor = Cursor::new(&rest[..]);
        let container = LogContainer::read(&mut body_cursor, base)?;
        let plaintext = container.inflate()?;
        tracing::trace!(
            compressed_bytes = container.compressed_data.len(),
            uncompressed_bytes = plaintext.len(),
            "inflated log container"
        );
        self.uncompressed.write(&plaintext);
        Ok(true)
    }

    // ---- write-path pipeline ----

    /// `readWrite2UncompressedFile`: drains the event queue into the
    /// uncompressed buffer, flushing a container whenever the buffer's
    /// unread size reaches `default_log_container_size`.
    fn read_write_to_uncompressed_file(&mut self) -> Result<()> {
        while let Some(event) = self.queue.pop_front() {
            let mut buf = Vec::new();
            event.encode(&mut buf)?;
            self.uncompressed.write(&buf);
            self.written_object_count += 1;

            if self.uncompressed.unread_len() as u32 >= self.config.default_log_container_size {
                self.uncompressed_file_to_compressed_file()?;
            }
        }
        Ok(())
    }

    /// `uncompressedFile2CompressedFile`: takes up to `default_log_container_size`
    /// unread bytes from the uncompressed buffer, compresses them, and writes
    /// the resulting `LogContainer` to the compressed stream.
    fn uncompressed_file_to_compressed_file(&mut self) -> Result<()> {
        let take_len = (self.config.default_log_container_size as usize).min(self.uncompressed.unread_len());
        if take_len == 0 {
            return Ok(());
        }
        let chunk = self.uncompressed.take(take_len);
        let container = LogContainer::from_plaintext(&chunk, self.config.compression_level)?;
        let mut buf = Vec::new();
        container.write(&mut buf)?;
        self.handle.write_all(&buf)?;
        self.compressed_pos += buf.len() as u64;
        self.uncompressed_total += chunk.len() as u64;
        tracing::trace!(
            uncompressed_bytes = chunk.len(),
            compressed_bytes = container.compressed_data.len(),
            "flushed log container"
        );
        self.uncompressed.drop_consumed();
        Ok(())
    }

    /// Flushes every remaining unread byte, even if short of a full container
    /// (used at close to emit the final partial container).
    fn flush_remaining_uncompressed(&mut self) -> Result<()> {
        while self.uncompressed.unread_len() > 0 {
            self.uncompressed_file_to_compressed_file()?;
        }
        Ok(())
    }
}

/// Reads `object_size` out of an already-buffered 16-byte base header without
/// consuming it from the pipeline's point of view.
fn peek_object_size(header_bytes: &[u8]) -> Result<usize> {
    let mut cursor = Cursor::new(header_bytes);
    let base = ObjectHeaderBase::read(&mut cursor)?;
    Ok(base.object_size as usize)
}

impl Drop for BlfFile {
    /// Backstop close: errors are discarded. Callers that need to observe a
    /// close failure must call [`Self::close`] explicitly before dropping.
    fn drop(&mut self) {
        if !self.closed {
            let _ = self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::object_flags;
    use crate::objects::{CanMessage, EthernetFrameEvent};
    use tempfile::NamedTempFile;

    fn can_message(timestamp: u64, id: u32) -> Event {
        let header = ObjectHeader::new_v1(ObjectType::CanMessage, timestamp, object_flags::TIME_ONE_NANS);
        Event::CanMessage(CanMessage { header, channel: 1, flags: 0, dlc: 8, id, data: [1, 2, 3, 4, 5, 6, 7, 8] })
    }

    #[test]
    fn write_then_read_single_event_round_trips() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
        writer.write(can_message(1000, 0x123)).unwrap();
        writer.close().unwrap();

        let mut reader = BlfFile::open(file.path()).unwrap();
        let event = reader.read().unwrap().expect("one event");
        match event {
            Event::CanMessage(msg) => {
                assert_eq!(msg.id, 0x123);
                assert_eq!(msg.header.object_time_stamp, 1000);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        // The close-time sentinel is a real decoded event, not swallowed by the pipeline.
        assert!(matches!(reader.read().unwrap(), Some(Event::Unknown115(_))));
        assert!(reader.read().unwrap().is_none());
        assert!(reader.eof());
    }

    #[test]
    fn single_small_event_produces_one_container_plus_sentinel() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
        writer.write(can_message(1, 1)).unwrap();
        writer.close().unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        let mut cursor = Cursor::new(&bytes[STATISTICS_SIZE as usize..]);
        let body_len = bytes.len() - STATISTICS_SIZE as usize;
        let mut container_count = 0;
        while (cursor.position() as usize) < body_len {
            let base = ObjectHeaderBase::read(&mut cursor).unwrap();
            assert_eq!(base.object_type, ObjectType::LogContainer);
            let skip = base.object_size as u64 - BASE_HEADER_SIZE as u64;
            cursor.set_position(cursor.position() + skip);
            container_count += 1;
        }
        assert_eq!(container_count, 2);
    }

    #[test]
    fn ethernet_forwarded_then_sentinel_multi_object_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
        for ts in [100u64, 200] {
            let header = ObjectHeader::new_v1(ObjectType::EthernetFrameForwarded, ts, 0);
            let frame = EthernetFrameEvent {
                header,
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
            writer.write(Event::EthernetFrameForwarded(frame)).unwrap();
        }
        writer.close().unwrap();

        let mut reader = BlfFile::open(file.path()).unwrap();
        let mut seen = 0;
        while let Some(event) = reader.read().unwrap() {
            match event {
                Event::EthernetFrameForwarded(f) => {
                    assert_eq!(f.frame_data, vec![0xAA, 0xBB, 0xCC]);
                    seen += 1;
                }
                Event::Unknown115(_) => {}
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert_eq!(seen, 2);
        assert!(reader.eof());
    }

    #[test]
    fn many_events_span_multiple_containers() {
        let file = NamedTempFile::new().unwrap();
        let mut config = BlfConfig::default();
        config.default_log_container_size = 512; // force multiple small containers
        let mut writer = BlfFile::create(file.path(), config).unwrap();
        for i in 0..200u32 {
            writer.write(can_message(i as u64, i)).unwrap();
        }
        writer.close().unwrap();
        assert_eq!(writer.statistics().object_count, 200);

        let mut reader = BlfFile::open(file.path()).unwrap();
        let mut count = 0;
        let mut last_id = None;
        while let Some(event) = reader.read().unwrap() {
            if let Event::CanMessage(msg) = event {
                if let Some(last) = last_id {
                    assert!(msg.id > last, "events must stay in original order");
                }
                last_id = Some(msg.id);
                count += 1;
            }
        }
        assert_eq!(count, 200);
        assert_eq!(reader.statistics().object_count, 200);
    }

    #[test]
    fn rejects_bad_top_level_signature() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), vec![0u8; STATISTICS_SIZE as usize]).unwrap();
        let err = BlfFile::open(file.path()).unwrap_err();
        assert!(matches!(err, BlfError::BadSignature { .. }));
    }

    #[test]
    fn truncated_container_fails_instead_of_silently_succeeding() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
        writer.write(can_message(1, 1)).unwrap();
        writer.close().unwrap();

        let mut bytes = std::fs::read(file.path()).unwrap();
        bytes.pop();
        std::fs::write(file.path(), &bytes).unwrap();

        let mut reader = BlfFile::open(file.path()).unwrap();
        let err = loop {
            match reader.read() {
                Ok(Some(_)) => continue,
                Ok(None) => panic!("truncated file must not silently report EOF"),
                Err(e) => break e,
            }
        };
        assert!(matches!(err, BlfError::Truncated { .. } | BlfError::Compression(_)));
    }
}
