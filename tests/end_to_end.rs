//! End-to-end scenarios driven entirely through the public `BlfFile` API.

use blf::{object_flags, BlfConfig, BlfError, BlfFile, Event, ObjectHeader, ObjectType};
use tempfile::NamedTempFile;

#[test]
fn most150_packet_round_trips_byte_identical() {
    use blf::Most150Pkt;

    let file = NamedTempFile::new().unwrap();
    let header = ObjectHeader::new_v2(ObjectType::Most150Pkt, 5_708_800_000, object_flags::TIME_ONE_NANS);
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

    let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
    writer.write(Event::Most150Pkt(pkt.clone())).unwrap();
    writer.close().unwrap();

    let mut reader = BlfFile::open(file.path()).unwrap();
    let event = reader.read().unwrap().expect("one event");
    match event {
        Event::Most150Pkt(parsed) => {
            assert_eq!(parsed.source_adr, pkt.source_adr);
            assert_eq!(parsed.dest_adr, pkt.dest_adr);
            assert_eq!(parsed.crc, pkt.crc);
            assert_eq!(parsed.pkt_data, pkt.pkt_data);
            assert_eq!(parsed.header.object_time_stamp, 5_708_800_000);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn lin_statistic_round_trips() {
    use blf::LinStatistic;

    let file = NamedTempFile::new().unwrap();
    let header = ObjectHeader::new_v1(ObjectType::LinStatistic, 0, 0);
    let stat = LinStatistic {
        header,
        channel: 1,
        reserved1: 0,
        reserved2: 0,
        bus_load: 0.903_601,
        bursts_total: 0,
        bursts_overrun: 0,
        frames_sent: 0,
        frames_received: 73,
        frames_unanswered: 0,
        reserved3: 0,
    };

    let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
    writer.write(Event::LinStatistic(stat)).unwrap();
    writer.close().unwrap();

    let mut reader = BlfFile::open(file.path()).unwrap();
    let event = reader.read().unwrap().expect("one event");
    match event {
        Event::LinStatistic(parsed) => {
            assert_eq!(parsed.channel, 1);
            assert_eq!(parsed.frames_received, 73);
            assert!((parsed.bus_load - 0.903_601).abs() < f64::EPSILON);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn ethernet_frame_forwarded_multi_object_then_sentinel() {
    use blf::EthernetFrameEvent;

    let file = NamedTempFile::new().unwrap();
    let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
    for timestamp in [1_000u64, 2_000] {
        let header = ObjectHeader::new_v1(ObjectType::EthernetFrameForwarded, timestamp, 0);
        let frame = EthernetFrameEvent {
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
        writer.write(Event::EthernetFrameForwarded(frame)).unwrap();
    }
    writer.close().unwrap();

    let mut reader = BlfFile::open(file.path()).unwrap();
    let mut frames_seen = 0;
    let mut saw_sentinel = false;
    while let Some(event) = reader.read().unwrap() {
        match event {
            Event::EthernetFrameForwarded(frame) => {
                assert_eq!(frame.frame_data, vec![0xAA, 0xBB, 0xCC]);
                frames_seen += 1;
            }
            Event::Unknown115(_) => saw_sentinel = true,
            other => panic!("unexpected event: {other:?}"),
        }
    }
    assert_eq!(frames_seen, 2);
    assert!(saw_sentinel);
    assert!(reader.eof());
}

#[test]
fn large_payload_crosses_container_boundary() {
    use blf::CanMessage;

    let file = NamedTempFile::new().unwrap();
    let writer_config = BlfConfig::default();
    let mut writer = BlfFile::create(file.path(), writer_config).unwrap();
    for i in 0u32..200 {
        let header = ObjectHeader::new_v1(ObjectType::CanMessage, i as u64, 0);
        let msg = CanMessage { header, channel: 1, flags: 0, dlc: 8, id: i, data: [0; 8] };
        writer.write(Event::CanMessage(msg)).unwrap();
    }
    writer.close().unwrap();
    assert_eq!(writer.statistics().object_count, 200);

    let bytes = std::fs::read(file.path()).unwrap();
    assert!(bytes.len() > 200 * 48, "encoded stream should be substantial");

    let mut reader = BlfFile::open(file.path()).unwrap();
    let mut count = 0;
    while let Some(event) = reader.read().unwrap() {
        if let Event::CanMessage(msg) = event {
            assert_eq!(msg.id, count);
            count += 1;
        }
    }
    assert_eq!(count, 200);
    assert_eq!(reader.statistics().object_count, 200);
}

#[test]
fn truncating_last_container_fails_instead_of_returning_wrong_data() {
    use blf::CanMessage;

    let file = NamedTempFile::new().unwrap();
    let mut writer = BlfFile::create(file.path(), BlfConfig::default()).unwrap();
    let header = ObjectHeader::new_v1(ObjectType::CanMessage, 1, 0);
    writer.write(Event::CanMessage(CanMessage { header, channel: 1, flags: 0, dlc: 8, id: 1, data: [0; 8] })).unwrap();
    writer.close().unwrap();

    let mut bytes = std::fs::read(file.path()).unwrap();
    bytes.pop();
    std::fs::write(file.path(), &bytes).unwrap();

    let mut reader = BlfFile::open(file.path()).unwrap();
    let err = loop {
        match reader.read() {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("truncated file must not silently report a clean EOF"),
            Err(e) => break e,
        }
    };
    assert!(matches!(err, BlfError::Truncated { .. } | BlfError::Compression(_)));
}

#[test]
fn reserved_tag_is_skipped_not_an_error() {
    use blf::{CanMessage, FileStatistics, LogContainer};
    use std::io::Write as _;

    // Hand-build the plaintext event stream: a valid CanMessage, then a
    // Reserved52 object with no body, then another valid CanMessage. The
    // reader must emit exactly the two valid events and silently skip the
    // reserved one rather than treating it as an error.
    let mut plaintext = Vec::new();
    let first = ObjectHeader::new_v1(ObjectType::CanMessage, 1, 0);
    Event::CanMessage(CanMessage { header: first, channel: 1, flags: 0, dlc: 8, id: 1, data: [1; 8] })
        .encode(&mut plaintext)
        .unwrap();

    let mut reserved_header = ObjectHeader::new_v1(ObjectType::Reserved52, 0, 0);
    reserved_header.base.object_size = reserved_header.calculate_header_size() as u32;
    reserved_header.write(&mut plaintext).unwrap();

    let second = ObjectHeader::new_v1(ObjectType::CanMessage, 2, 0);
    Event::CanMessage(CanMessage { header: second, channel: 1, flags: 0, dlc: 8, id: 2, data: [2; 8] })
        .encode(&mut plaintext)
        .unwrap();

    let container = LogContainer::from_plaintext(&plaintext, 6).unwrap();
    let mut container_bytes = Vec::new();
    container.write(&mut container_bytes).unwrap();

    let stats = FileStatistics {
        file_size: (144 + container_bytes.len()) as u64,
        uncompressed_file_size: 144 + plaintext.len() as u64,
        object_count: 2,
        ..FileStatistics::default()
    };
    let mut file_bytes = Vec::new();
    stats.write(&mut file_bytes).unwrap();
    file_bytes.extend_from_slice(&container_bytes);

    let file = NamedTempFile::new().unwrap();
    file.as_file().write_all(&file_bytes).unwrap();

    let mut reader = BlfFile::open(file.path()).unwrap();
    let mut seen = Vec::new();
    while let Some(event) = reader.read().unwrap() {
        if let Event::CanMessage(msg) = event {
            seen.push(msg.id);
        }
    }
    assert_eq!(seen, vec![1, 2]);
    assert!(reader.eof());
}
