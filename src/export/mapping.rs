//! Per-kind field-to-column table.
//!
//! Each supported record kind writes exactly the columns it carries. Columns it
//! does not mention stay null (scalars) or zero-filled (text) because the row
//! is cleared before it is written.

use crate::ais::{
    AisRecord, ExtendedPositionReportClassB, PositionReportClassA, PositionReportClassB,
    StaticAndVoyage,
};
use crate::schema::Column;

use super::buffers::{ColumnBufferSet, Scalar};
use super::error::ExportError;
use super::text::{normalize_text, TextSource};

/// Writes the cells of one row.
pub(crate) struct RowSlot<'b> {
    buffers: &'b mut ColumnBufferSet,
    row: usize,
}

impl<'b> RowSlot<'b> {
    pub(crate) fn new(buffers: &'b mut ColumnBufferSet, row: usize) -> Self {
        Self { buffers, row }
    }

    pub(crate) fn int(&mut self, column: Column, value: i32) -> Result<(), ExportError> {
        self.buffers.set(self.row, column, Scalar::Int32(value))
    }

    /// Unsigned wire fields are at most 30 bits wide, so they fit an `i32`.
    pub(crate) fn uint(&mut self, column: Column, value: u32) -> Result<(), ExportError> {
        self.int(column, value as i32)
    }

    pub(crate) fn flag(&mut self, column: Column, value: bool) -> Result<(), ExportError> {
        self.buffers.set(self.row, column, Scalar::Boolean(value))
    }

    pub(crate) fn timestamp(&mut self, value: i64) -> Result<(), ExportError> {
        self.buffers.set(self.row, Column::Timestamp, Scalar::Timestamp(value))
    }

    pub(crate) fn text<T: TextSource + ?Sized>(
        &mut self,
        column: Column,
        value: &T,
    ) -> Result<(), ExportError> {
        normalize_text(value, self.buffers.text_buffer(self.row, column)?);
        Ok(())
    }
}

/// Write the kind-specific columns of `record`.
pub(crate) fn write_record(slot: &mut RowSlot<'_>, record: &AisRecord<'_>) -> Result<(), ExportError> {
    match record {
        AisRecord::PositionReportClassA(r) => write_class_a(slot, r),
        AisRecord::StaticAndVoyage(r) => write_static_and_voyage(slot, r),
        AisRecord::PositionReportClassB(r) => write_class_b(slot, r),
        AisRecord::ExtendedPositionReportClassB(r) => write_extended_class_b(slot, r),
    }
}

fn write_class_a(slot: &mut RowSlot<'_>, r: &PositionReportClassA) -> Result<(), ExportError> {
    slot.uint(Column::Mmsi, r.mmsi)?;
    slot.uint(Column::RepeatIndicator, r.repeat_indicator)?;
    slot.uint(Column::NavigationStatus, r.navigation_status)?;
    slot.int(Column::RateOfTurn, r.rate_of_turn)?;
    slot.uint(Column::SpeedOverGroundTenths, r.speed_over_ground_tenths)?;
    slot.flag(Column::PositionAccuracy, r.position_accuracy)?;
    slot.int(Column::Longitude, r.longitude_10000th_mins)?;
    slot.int(Column::Latitude, r.latitude_10000th_mins)?;
    slot.uint(Column::CourseOverGround, r.course_over_ground_10th_degrees)?;
    slot.uint(Column::TrueHeading, r.true_heading_degrees)?;
    slot.uint(Column::TimeStampSecond, r.time_stamp_second)?;
    slot.uint(Column::ManoeuvreIndicator, r.manoeuvre_indicator)?;
    slot.uint(Column::SpareBits, r.spare_bits_145)?;
    slot.flag(Column::RaimFlag, r.raim_flag)?;
    slot.uint(Column::RadioSyncState, r.radio_sync_state)?;
    slot.uint(Column::RadioSlotTimeout, r.radio_slot_timeout)?;
    slot.uint(Column::RadioSubMessage, r.radio_sub_message)
}

fn write_static_and_voyage(slot: &mut RowSlot<'_>, r: &StaticAndVoyage<'_>) -> Result<(), ExportError> {
    slot.uint(Column::Mmsi, r.mmsi)?;
    slot.uint(Column::RepeatIndicator, r.repeat_indicator)?;
    slot.uint(Column::AisVersion, r.ais_version)?;
    slot.uint(Column::ImoNumber, r.imo_number)?;
    slot.text(Column::CallSign, &r.call_sign)?;
    slot.text(Column::VesselName, &r.vessel_name)?;
    slot.uint(Column::ShipType, r.ship_type)?;
    slot.uint(Column::DimensionToBow, r.dimension_to_bow)?;
    slot.uint(Column::DimensionToStern, r.dimension_to_stern)?;
    slot.uint(Column::DimensionToPort, r.dimension_to_port)?;
    slot.uint(Column::DimensionToStarboard, r.dimension_to_starboard)?;
    slot.uint(Column::PositionFixType, r.position_fix_type)?;
    slot.uint(Column::EtaMonth, r.eta_month)?;
    slot.uint(Column::EtaDay, r.eta_day)?;
    slot.uint(Column::EtaHour, r.eta_hour)?;
    slot.uint(Column::EtaMinute, r.eta_minute)?;
    slot.uint(Column::Draught10thMetres, r.draught_10th_metres)?;
    slot.text(Column::Destination, &r.destination)?;
    if let Some(dte) = r.is_dte_not_ready {
        slot.flag(Column::IsDteNotReady, dte)?;
    }
    if let Some(spare) = r.spare_423 {
        slot.uint(Column::Spare423, spare)?;
    }
    Ok(())
}

fn write_class_b(slot: &mut RowSlot<'_>, r: &PositionReportClassB) -> Result<(), ExportError> {
    slot.uint(Column::Mmsi, r.mmsi)?;
    slot.uint(Column::RepeatIndicator, r.repeat_indicator)?;
    slot.uint(Column::RegionalReserved38, r.regional_reserved_38)?;
    slot.uint(Column::SpeedOverGroundTenths, r.speed_over_ground_tenths)?;
    slot.flag(Column::PositionAccuracy, r.position_accuracy)?;
    slot.int(Column::Longitude, r.longitude_10000th_mins)?;
    slot.int(Column::Latitude, r.latitude_10000th_mins)?;
    slot.uint(Column::CourseOverGround, r.course_over_ground_10th_degrees)?;
    slot.uint(Column::TrueHeading, r.true_heading_degrees)?;
    slot.uint(Column::TimeStampSecond, r.time_stamp_second)?;
    slot.uint(Column::RegionalReserved139, r.regional_reserved_139)?;
    slot.uint(Column::CsUnit, r.cs_unit)?;
    slot.flag(Column::HasDisplay, r.has_display)?;
    slot.flag(Column::IsDscAttached, r.is_dsc_attached)?;
    slot.flag(Column::CanSwitchBands, r.can_switch_bands)?;
    slot.flag(
        Column::CanAcceptMessage22ChannelAssignments,
        r.can_accept_message_22_channel_assignment,
    )?;
    slot.flag(Column::IsAssigned, r.is_assigned)?;
    slot.flag(Column::RaimFlag, r.raim_flag)?;
    slot.uint(Column::RadioStatusType, r.radio_status_type)
}

fn write_extended_class_b(
    slot: &mut RowSlot<'_>,
    r: &ExtendedPositionReportClassB<'_>,
) -> Result<(), ExportError> {
    slot.uint(Column::Mmsi, r.mmsi)?;
    slot.uint(Column::RepeatIndicator, r.repeat_indicator)?;
    slot.uint(Column::RegionalReserved38, r.regional_reserved_38)?;
    slot.uint(Column::SpeedOverGroundTenths, r.speed_over_ground_tenths)?;
    slot.flag(Column::PositionAccuracy, r.position_accuracy)?;
    slot.int(Column::Longitude, r.longitude_10000th_mins)?;
    slot.int(Column::Latitude, r.latitude_10000th_mins)?;
    slot.uint(Column::CourseOverGround, r.course_over_ground_10th_degrees)?;
    slot.uint(Column::TrueHeading, r.true_heading_degrees)?;
    slot.uint(Column::TimeStampSecond, r.time_stamp_second)?;
    slot.uint(Column::RegionalReserved139, r.regional_reserved_139)?;
    slot.text(Column::ShipName, &r.ship_name)?;
    slot.uint(Column::ShipType, r.ship_type)?;
    slot.uint(Column::DimensionToBow, r.dimension_to_bow)?;
    slot.uint(Column::DimensionToStern, r.dimension_to_stern)?;
    slot.uint(Column::DimensionToPort, r.dimension_to_port)?;
    slot.uint(Column::DimensionToStarboard, r.dimension_to_starboard)?;
    slot.uint(Column::PositionFixType, r.position_fix_type)?;
    slot.flag(Column::RaimFlag, r.raim_flag)?;
    slot.flag(Column::IsDteNotReady, r.is_dte_not_ready)?;
    slot.flag(Column::IsAssigned, r.is_assigned)?;
    slot.uint(Column::Spare308, r.spare_308)
}
