use super::*;

const CLASS_A: &[u8] = b"15RTgt0PAso;90TKcjM8h6g208CQ";

fn static_and_voyage_payload() -> (String, u32) {
    PayloadBuilder::new()
        .unsigned(5, 6)
        .unsigned(0, 2)
        .unsigned(235_009_802, 30)
        .unsigned(1, 2)
        .unsigned(9_134_270, 30)
        .text("MXRB3", 7)
        .text("NORDIC STAR", 20)
        .unsigned(70, 8)
        .unsigned(150, 9)
        .unsigned(40, 9)
        .unsigned(12, 6)
        .unsigned(14, 6)
        .unsigned(1, 4)
        .unsigned(6, 4)
        .unsigned(21, 5)
        .unsigned(14, 5)
        .unsigned(30, 6)
        .unsigned(92, 8)
        .text("ROTTERDAM", 20)
        .flag(false)
        .unsigned(0, 1)
        .build()
}

#[test]
fn test_decode_class_a_reference_payload() {
    let record = AisDecoder::new().decode(CLASS_A, 0).unwrap();
    let AisRecord::PositionReportClassA(report) = record else {
        panic!("expected class A, got {record:?}");
    };

    assert_eq!(report.message_type, 1);
    assert_eq!(report.mmsi, 371_798_000);
    assert_eq!(report.navigation_status, 0);
    assert_eq!(report.rate_of_turn, -127);
    assert_eq!(report.speed_over_ground_tenths, 123);
    assert!(report.position_accuracy);
    assert_eq!(report.longitude_10000th_mins, -74_037_230);
    assert_eq!(report.latitude_10000th_mins, 29_028_980);
    assert_eq!(report.course_over_ground_10th_degrees, 2240);
    assert_eq!(report.true_heading_degrees, 215);
    assert_eq!(report.time_stamp_second, 33);
    assert_eq!(report.radio_slot_timeout, 2);
    assert_eq!(report.radio_sub_message, 1249);
}

#[test]
fn test_peek_message_type() {
    assert_eq!(peek_message_type(CLASS_A, 0).unwrap(), 1);
    let (payload, padding) = static_and_voyage_payload();
    assert_eq!(peek_message_type(payload.as_bytes(), padding).unwrap(), 5);
}

#[test]
fn test_decode_static_and_voyage() {
    let (payload, padding) = static_and_voyage_payload();
    assert_eq!(payload.len(), 71);
    assert_eq!(padding, 2);

    let record = AisDecoder.decode(payload.as_bytes(), padding).unwrap();
    let AisRecord::StaticAndVoyage(voyage) = record else {
        panic!("expected type 5");
    };

    assert_eq!(voyage.mmsi, 235_009_802);
    assert_eq!(voyage.imo_number, 9_134_270);
    assert_eq!(voyage.call_sign.character_count(), 7);
    assert_eq!(voyage.call_sign.to_trimmed_string(), "MXRB3");
    assert_eq!(voyage.vessel_name.to_trimmed_string(), "NORDIC STAR");
    assert_eq!(voyage.destination.to_trimmed_string(), "ROTTERDAM");
    assert_eq!(voyage.draught_10th_metres, 92);
    assert_eq!((voyage.eta_month, voyage.eta_day), (6, 21));
    assert_eq!(voyage.is_dte_not_ready, Some(false));
    assert_eq!(voyage.spare_423, Some(0));
}

#[test]
fn test_truncated_static_and_voyage_keeps_partial_destination() {
    // Drop the flags and half the destination
    let builder = PayloadBuilder::new()
        .unsigned(5, 6)
        .unsigned(0, 2)
        .unsigned(235_009_802, 30)
        .unsigned(0, 2)
        .unsigned(0, 30)
        .text("CALL", 7)
        .text("SHIP", 20)
        .unsigned(0, 32)
        .unsigned(0, 32)
        .unsigned(0, 6)
        .text("HULL", 10);
    let (payload, padding) = builder.build();

    let record = AisDecoder.decode(payload.as_bytes(), padding).unwrap();
    let AisRecord::StaticAndVoyage(voyage) = record else {
        panic!("expected type 5");
    };
    assert_eq!(voyage.destination.character_count(), 10);
    assert_eq!(voyage.destination.to_trimmed_string(), "HULL");
    assert_eq!(voyage.is_dte_not_ready, None);
}

#[test]
fn test_decode_class_b_and_extended() {
    let (payload, padding) = PayloadBuilder::new()
        .unsigned(18, 6)
        .unsigned(0, 2)
        .unsigned(338_087_471, 30)
        .unsigned(0, 8)
        .unsigned(1, 10)
        .flag(false)
        .signed(-44_226_116, 28)
        .signed(24_411_680, 27)
        .unsigned(1690, 12)
        .unsigned(511, 9)
        .unsigned(49, 6)
        .unsigned(0, 2)
        .unsigned(1, 1)
        .flag(false)
        .flag(true)
        .flag(true)
        .flag(true)
        .flag(false)
        .flag(false)
        .unsigned(1, 1)
        .unsigned(0, 19)
        .build();
    let record = AisDecoder.decode(payload.as_bytes(), padding).unwrap();
    let AisRecord::PositionReportClassB(report) = record else {
        panic!("expected type 18");
    };
    assert_eq!(report.mmsi, 338_087_471);
    assert_eq!(report.longitude_10000th_mins, -44_226_116);
    assert_eq!(report.latitude_10000th_mins, 24_411_680);
    assert_eq!(report.cs_unit, 1);
    assert!(report.is_dsc_attached);
    assert!(!report.is_assigned);
    assert_eq!(report.radio_status_type, 1);

    let (payload, padding) = PayloadBuilder::new()
        .unsigned(19, 6)
        .unsigned(0, 2)
        .unsigned(367_059_850, 30)
        .unsigned(0, 8)
        .unsigned(87, 10)
        .flag(true)
        .signed(-73_000_000, 28)
        .signed(17_000_000, 27)
        .unsigned(3310, 12)
        .unsigned(331, 9)
        .unsigned(46, 6)
        .unsigned(0, 4)
        .text("CAPT.J.RIMES", 20)
        .unsigned(70, 8)
        .unsigned(5, 9)
        .unsigned(21, 9)
        .unsigned(4, 6)
        .unsigned(4, 6)
        .unsigned(1, 4)
        .flag(false)
        .flag(true)
        .flag(false)
        .unsigned(0, 4)
        .build();
    let record = AisDecoder.decode(payload.as_bytes(), padding).unwrap();
    assert_eq!(record.message_type(), 19);
    assert_eq!(record.mmsi(), 367_059_850);
    let AisRecord::ExtendedPositionReportClassB(report) = record else {
        panic!("expected type 19");
    };
    assert_eq!(report.ship_name.to_trimmed_string(), "CAPT.J.RIMES");
    assert_eq!(report.ship_type, 70);
    assert!(report.is_dte_not_ready);
}

#[test]
fn test_unsupported_and_malformed_payloads() {
    let (payload, padding) = PayloadBuilder::new().unsigned(24, 6).unsigned(0, 162).build();
    assert_eq!(
        AisDecoder.decode(payload.as_bytes(), padding).unwrap_err(),
        DecodeError::UnsupportedMessageType(24)
    );

    // Class A cut short after the position fields
    assert!(matches!(
        AisDecoder.decode(&CLASS_A[..16], 0),
        Err(DecodeError::PayloadTooShort { .. })
    ));

    assert!(matches!(
        AisDecoder.decode(b"15RT~t0P", 0),
        Err(DecodeError::InvalidCharacter { position: 4, byte: b'~' })
    ));
    assert_eq!(AisDecoder.decode(b"", 0).unwrap_err(), DecodeError::EmptyPayload);
    assert_eq!(
        AisDecoder.decode(CLASS_A, 6).unwrap_err(),
        DecodeError::InvalidPadding(6)
    );
}

#[test]
fn test_armoring_round_trips_alphabet() {
    for value in 0u8..64 {
        assert_eq!(armor_value(armor_byte(value)), Some(value));
    }
    assert_eq!(armor_value(b'X'), None);
    assert_eq!(sixbit_to_ascii(ascii_to_sixbit(b'a')), b'A');
    assert_eq!(sixbit_to_ascii(0), b'@');
    assert_eq!(sixbit_to_ascii(32), b' ');
}

#[test]
fn test_signed_fields_sign_extend() {
    let (payload, padding) = PayloadBuilder::new().signed(-1, 8).signed(100, 8).build();
    let bits = SixBitPayload::new(payload.as_bytes(), padding).unwrap();
    assert_eq!(bits.bit_len(), 16);
    assert_eq!(bits.signed(0, 8).unwrap(), -1);
    assert_eq!(bits.signed(8, 8).unwrap(), 100);
    assert_eq!(bits.unsigned(0, 8).unwrap(), 255);
}
