//! Typed records for the supported AIS message kinds.
//!
//! Bit offsets follow ITU-R M.1371. Each record carries exactly the fields its
//! message kind defines; integers keep their raw wire units (1/10000 minute
//! positions, 1/10 knot speeds, 1/10 degree courses).

use super::bits::SixBitPayload;
use super::error::DecodeError;
use super::text::SixBitText;

/// Position report, class A (message types 1, 2 and 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReportClassA {
    /// 1, 2 or 3
    pub message_type: u8,
    /// Repeat indicator
    pub repeat_indicator: u32,
    /// Maritime Mobile Service Identity
    pub mmsi: u32,
    /// Navigation status
    pub navigation_status: u32,
    /// Raw rate of turn (ROT_AIS)
    pub rate_of_turn: i32,
    /// Speed over ground in 1/10 knots
    pub speed_over_ground_tenths: u32,
    /// Position accuracy flag
    pub position_accuracy: bool,
    /// Longitude in 1/10000 minutes
    pub longitude_10000th_mins: i32,
    /// Latitude in 1/10000 minutes
    pub latitude_10000th_mins: i32,
    /// Course over ground in 1/10 degrees
    pub course_over_ground_10th_degrees: u32,
    /// True heading in degrees (511 = not available)
    pub true_heading_degrees: u32,
    /// UTC second
    pub time_stamp_second: u32,
    /// Special manoeuvre indicator
    pub manoeuvre_indicator: u32,
    /// Spare bits at offset 145
    pub spare_bits_145: u32,
    /// RAIM flag
    pub raim_flag: bool,
    /// SOTDMA sync state
    pub radio_sync_state: u32,
    /// SOTDMA slot timeout
    pub radio_slot_timeout: u32,
    /// SOTDMA sub message
    pub radio_sub_message: u32,
}

impl PositionReportClassA {
    /// Decode a class A position report.
    pub fn parse(payload: &SixBitPayload<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            message_type: payload.unsigned(0, 6)? as u8,
            repeat_indicator: payload.unsigned(6, 2)?,
            mmsi: payload.unsigned(8, 30)?,
            navigation_status: payload.unsigned(38, 4)?,
            rate_of_turn: payload.signed(42, 8)?,
            speed_over_ground_tenths: payload.unsigned(50, 10)?,
            position_accuracy: payload.flag(60)?,
            longitude_10000th_mins: payload.signed(61, 28)?,
            latitude_10000th_mins: payload.signed(89, 27)?,
            course_over_ground_10th_degrees: payload.unsigned(116, 12)?,
            true_heading_degrees: payload.unsigned(128, 9)?,
            time_stamp_second: payload.unsigned(137, 6)?,
            manoeuvre_indicator: payload.unsigned(143, 2)?,
            spare_bits_145: payload.unsigned(145, 3)?,
            raim_flag: payload.flag(148)?,
            radio_sync_state: payload.unsigned(149, 2)?,
            radio_slot_timeout: payload.unsigned(151, 3)?,
            radio_sub_message: payload.unsigned(154, 14)?,
        })
    }
}

/// Static and voyage related data (message type 5)
#[derive(Debug, Clone, Copy)]
pub struct StaticAndVoyage<'a> {
    /// Repeat indicator
    pub repeat_indicator: u32,
    /// Maritime Mobile Service Identity
    pub mmsi: u32,
    /// AIS version indicator
    pub ais_version: u32,
    /// IMO ship number
    pub imo_number: u32,
    /// Call sign, 7 characters
    pub call_sign: SixBitText<'a>,
    /// Vessel name, 20 characters
    pub vessel_name: SixBitText<'a>,
    /// Ship and cargo type
    pub ship_type: u32,
    /// Dimension to bow in metres
    pub dimension_to_bow: u32,
    /// Dimension to stern in metres
    pub dimension_to_stern: u32,
    /// Dimension to port in metres
    pub dimension_to_port: u32,
    /// Dimension to starboard in metres
    pub dimension_to_starboard: u32,
    /// EPFD fix type
    pub position_fix_type: u32,
    /// ETA month
    pub eta_month: u32,
    /// ETA day
    pub eta_day: u32,
    /// ETA hour
    pub eta_hour: u32,
    /// ETA minute
    pub eta_minute: u32,
    /// Draught in 1/10 metres
    pub draught_10th_metres: u32,
    /// Destination, 20 characters
    pub destination: SixBitText<'a>,
    /// DTE flag; absent when the sender truncated the final bits
    pub is_dte_not_ready: Option<bool>,
    /// Spare bit at offset 423; absent when truncated
    pub spare_423: Option<u32>,
}

impl<'a> StaticAndVoyage<'a> {
    /// Decode a static and voyage report.
    ///
    /// Many transmitters drop the trailing bits, so the destination is read as
    /// far as the payload goes and the last two flags are optional.
    pub fn parse(payload: &SixBitPayload<'a>) -> Result<Self, DecodeError> {
        Ok(Self {
            repeat_indicator: payload.unsigned(6, 2)?,
            mmsi: payload.unsigned(8, 30)?,
            ais_version: payload.unsigned(38, 2)?,
            imo_number: payload.unsigned(40, 30)?,
            call_sign: SixBitText::new(*payload, 70, 42),
            vessel_name: SixBitText::new(*payload, 112, 120),
            ship_type: payload.unsigned(232, 8)?,
            dimension_to_bow: payload.unsigned(240, 9)?,
            dimension_to_stern: payload.unsigned(249, 9)?,
            dimension_to_port: payload.unsigned(258, 6)?,
            dimension_to_starboard: payload.unsigned(264, 6)?,
            position_fix_type: payload.unsigned(270, 4)?,
            eta_month: payload.unsigned(274, 4)?,
            eta_day: payload.unsigned(278, 5)?,
            eta_hour: payload.unsigned(283, 5)?,
            eta_minute: payload.unsigned(288, 6)?,
            draught_10th_metres: payload.unsigned(294, 8)?,
            destination: SixBitText::new(*payload, 302, 120),
            is_dte_not_ready: payload.flag(422).ok(),
            spare_423: payload.unsigned(423, 1).ok(),
        })
    }
}

/// Standard class B position report (message type 18)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionReportClassB {
    /// Repeat indicator
    pub repeat_indicator: u32,
    /// Maritime Mobile Service Identity
    pub mmsi: u32,
    /// Regional reserved bits at offset 38
    pub regional_reserved_38: u32,
    /// Speed over ground in 1/10 knots
    pub speed_over_ground_tenths: u32,
    /// Position accuracy flag
    pub position_accuracy: bool,
    /// Longitude in 1/10000 minutes
    pub longitude_10000th_mins: i32,
    /// Latitude in 1/10000 minutes
    pub latitude_10000th_mins: i32,
    /// Course over ground in 1/10 degrees
    pub course_over_ground_10th_degrees: u32,
    /// True heading in degrees
    pub true_heading_degrees: u32,
    /// UTC second
    pub time_stamp_second: u32,
    /// Regional reserved bits at offset 139
    pub regional_reserved_139: u32,
    /// Carrier sense unit (1) or SOTDMA unit (0)
    pub cs_unit: u32,
    /// Unit has a display
    pub has_display: bool,
    /// Unit has DSC
    pub is_dsc_attached: bool,
    /// Unit can switch bands
    pub can_switch_bands: bool,
    /// Unit accepts message 22 channel assignments
    pub can_accept_message_22_channel_assignment: bool,
    /// Assigned mode flag
    pub is_assigned: bool,
    /// RAIM flag
    pub raim_flag: bool,
    /// Communication state selector (0 SOTDMA, 1 ITDMA)
    pub radio_status_type: u32,
}

impl PositionReportClassB {
    /// Decode a standard class B position report.
    pub fn parse(payload: &SixBitPayload<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            repeat_indicator: payload.unsigned(6, 2)?,
            mmsi: payload.unsigned(8, 30)?,
            regional_reserved_38: payload.unsigned(38, 8)?,
            speed_over_ground_tenths: payload.unsigned(46, 10)?,
            position_accuracy: payload.flag(56)?,
            longitude_10000th_mins: payload.signed(57, 28)?,
            latitude_10000th_mins: payload.signed(85, 27)?,
            course_over_ground_10th_degrees: payload.unsigned(112, 12)?,
            true_heading_degrees: payload.unsigned(124, 9)?,
            time_stamp_second: payload.unsigned(133, 6)?,
            regional_reserved_139: payload.unsigned(139, 2)?,
            cs_unit: payload.unsigned(141, 1)?,
            has_display: payload.flag(142)?,
            is_dsc_attached: payload.flag(143)?,
            can_switch_bands: payload.flag(144)?,
            can_accept_message_22_channel_assignment: payload.flag(145)?,
            is_assigned: payload.flag(146)?,
            raim_flag: payload.flag(147)?,
            radio_status_type: payload.unsigned(148, 1)?,
        })
    }
}

/// Extended class B position report (message type 19)
#[derive(Debug, Clone, Copy)]
pub struct ExtendedPositionReportClassB<'a> {
    /// Repeat indicator
    pub repeat_indicator: u32,
    /// Maritime Mobile Service Identity
    pub mmsi: u32,
    /// Regional reserved bits at offset 38
    pub regional_reserved_38: u32,
    /// Speed over ground in 1/10 knots
    pub speed_over_ground_tenths: u32,
    /// Position accuracy flag
    pub position_accuracy: bool,
    /// Longitude in 1/10000 minutes
    pub longitude_10000th_mins: i32,
    /// Latitude in 1/10000 minutes
    pub latitude_10000th_mins: i32,
    /// Course over ground in 1/10 degrees
    pub course_over_ground_10th_degrees: u32,
    /// True heading in degrees
    pub true_heading_degrees: u32,
    /// UTC second
    pub time_stamp_second: u32,
    /// Regional reserved bits at offset 139
    pub regional_reserved_139: u32,
    /// Ship name, 20 characters
    pub ship_name: SixBitText<'a>,
    /// Ship and cargo type
    pub ship_type: u32,
    /// Dimension to bow in metres
    pub dimension_to_bow: u32,
    /// Dimension to stern in metres
    pub dimension_to_stern: u32,
    /// Dimension to port in metres
    pub dimension_to_port: u32,
    /// Dimension to starboard in metres
    pub dimension_to_starboard: u32,
    /// EPFD fix type
    pub position_fix_type: u32,
    /// RAIM flag
    pub raim_flag: bool,
    /// DTE flag
    pub is_dte_not_ready: bool,
    /// Assigned mode flag
    pub is_assigned: bool,
    /// Spare bits at offset 308
    pub spare_308: u32,
}

impl<'a> ExtendedPositionReportClassB<'a> {
    /// Decode an extended class B position report.
    pub fn parse(payload: &SixBitPayload<'a>) -> Result<Self, DecodeError> {
        Ok(Self {
            repeat_indicator: payload.unsigned(6, 2)?,
            mmsi: payload.unsigned(8, 30)?,
            regional_reserved_38: payload.unsigned(38, 8)?,
            speed_over_ground_tenths: payload.unsigned(46, 10)?,
            position_accuracy: payload.flag(56)?,
            longitude_10000th_mins: payload.signed(57, 28)?,
            latitude_10000th_mins: payload.signed(85, 27)?,
            course_over_ground_10th_degrees: payload.unsigned(112, 12)?,
            true_heading_degrees: payload.unsigned(124, 9)?,
            time_stamp_second: payload.unsigned(133, 6)?,
            regional_reserved_139: payload.unsigned(139, 4)?,
            ship_name: SixBitText::new(*payload, 143, 120),
            ship_type: payload.unsigned(263, 8)?,
            dimension_to_bow: payload.unsigned(271, 9)?,
            dimension_to_stern: payload.unsigned(280, 9)?,
            dimension_to_port: payload.unsigned(289, 6)?,
            dimension_to_starboard: payload.unsigned(295, 6)?,
            position_fix_type: payload.unsigned(301, 4)?,
            raim_flag: payload.flag(305)?,
            is_dte_not_ready: payload.flag(306)?,
            is_assigned: payload.flag(307)?,
            spare_308: payload.unsigned(308, 4)?,
        })
    }
}

/// A decoded message of one of the supported kinds.
#[derive(Debug, Clone, Copy)]
pub enum AisRecord<'a> {
    /// Types 1, 2, 3
    PositionReportClassA(PositionReportClassA),
    /// Type 5
    StaticAndVoyage(StaticAndVoyage<'a>),
    /// Type 18
    PositionReportClassB(PositionReportClassB),
    /// Type 19
    ExtendedPositionReportClassB(ExtendedPositionReportClassB<'a>),
}

impl AisRecord<'_> {
    /// The AIS message type number.
    pub fn message_type(&self) -> u8 {
        match self {
            AisRecord::PositionReportClassA(r) => r.message_type,
            AisRecord::StaticAndVoyage(_) => 5,
            AisRecord::PositionReportClassB(_) => 18,
            AisRecord::ExtendedPositionReportClassB(_) => 19,
        }
    }

    /// The transmitting station's MMSI.
    pub fn mmsi(&self) -> u32 {
        match self {
            AisRecord::PositionReportClassA(r) => r.mmsi,
            AisRecord::StaticAndVoyage(r) => r.mmsi,
            AisRecord::PositionReportClassB(r) => r.mmsi,
            AisRecord::ExtendedPositionReportClassB(r) => r.mmsi,
        }
    }
}
