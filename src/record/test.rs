use super::*;

#[test]
fn record_is_exactly_16_bytes() {
    assert_eq!(RECORD_SIZE, 16);
    let s = Sample::new(1, 44010, false);
    assert_eq!(s.to_bytes().len(), 16);
}

#[test]
fn new_sample_bit_always_set() {
    let s = Sample::new(0, 44010, false);
    assert_eq!(s.flags & flags::NEW_SAMPLE, flags::NEW_SAMPLE);
    let s = Sample::new(0, 44010, true);
    assert_eq!(s.flags & flags::NEW_SAMPLE, flags::NEW_SAMPLE);
}

#[test]
fn threshold_bit_matches_alert() {
    let below = Sample::new(0, 44010, false);
    assert!(!below.threshold_crossed());
    assert_eq!(below.flags, flags::NEW_SAMPLE);

    let above = Sample::new(0, 44020, true);
    assert!(above.threshold_crossed());
    assert_eq!(above.flags, flags::NEW_SAMPLE | flags::THRESHOLD_CROSSED);
}

#[test]
fn round_trips_through_bytes() {
    let s = Sample::new(123_456_789, -12345, true);
    let bytes = s.to_bytes();
    let back = Sample::from_bytes(&bytes);
    assert_eq!(s, back);
}

#[test]
fn little_endian_layout() {
    let s = Sample {
        timestamp_ns: 0x0102030405060708,
        temp_mc: 0x11223344,
        flags: 0x1,
    };
    let bytes = s.to_bytes();
    assert_eq!(&bytes[0..8], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[8..12], &[0x44, 0x33, 0x22, 0x11]);
    assert_eq!(&bytes[12..16], &[0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn write_into_rejects_small_buffer() {
    let s = Sample::new(1, 44010, false);
    let mut buf = [0u8; 15];
    assert_eq!(s.write_into(&mut buf), Err(Error::BufferTooSmall));
}

#[test]
fn write_into_fills_exact_buffer() {
    let s = Sample::new(1, 44010, false);
    let mut buf = [0u8; 16];
    s.write_into(&mut buf).unwrap();
    assert_eq!(buf, s.to_bytes());
}
