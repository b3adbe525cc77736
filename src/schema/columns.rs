//! Column identifiers for the AIS export table.
//!
//! The order of [`Column::ALL`] is the on-disk column order. Downstream
//! consumers address columns by name and position, so neither may change.

/// Storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Nullable 32-bit signed integer
    Int32,
    /// Nullable 64-bit Unix timestamp
    Timestamp,
    /// Nullable boolean
    Boolean,
    /// Non-null fixed-width ASCII text, zero-filled when absent
    FixedText,
}

/// One column of the AIS export table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Receiver/source id from the tag block
    Source,
    /// AIS message type (1-27)
    MessageType,
    /// Unix timestamp from the tag block
    Timestamp,
    /// Maritime Mobile Service Identity
    Mmsi,
    /// Latitude in 1/10000 minutes
    Latitude,
    /// Longitude in 1/10000 minutes
    Longitude,
    /// Course over ground in 1/10 degrees
    CourseOverGround,
    /// True heading in degrees
    TrueHeading,
    /// SOTDMA sync state
    RadioSyncState,
    /// Receiver autonomous integrity monitoring flag
    RaimFlag,
    /// Spare bits at offset 145 (class A)
    SpareBits,
    /// Special manoeuvre indicator
    ManoeuvreIndicator,
    /// SOTDMA slot timeout
    RadioSlotTimeout,
    /// Position accuracy flag
    PositionAccuracy,
    /// Raw rate of turn
    RateOfTurn,
    /// Navigation status
    NavigationStatus,
    /// Repeat indicator
    RepeatIndicator,
    /// SOTDMA/ITDMA sub message
    RadioSubMessage,
    /// Class B: can accept message 22 channel assignments
    CanAcceptMessage22ChannelAssignments,
    /// Class B: can switch bands
    CanSwitchBands,
    /// Class B: DSC attached
    IsDscAttached,
    /// Class B: has display
    HasDisplay,
    /// Class B: carrier sense unit
    CsUnit,
    /// Regional reserved bits at offset 139
    RegionalReserved139,
    /// Class B: communication state selector
    RadioStatusType,
    /// Assigned mode flag
    IsAssigned,
    /// UTC second of the position fix
    TimeStampSecond,
    /// Speed over ground in 1/10 knots
    SpeedOverGroundTenths,
    /// Regional reserved bits at offset 38
    RegionalReserved38,
    /// EPFD fix type
    PositionFixType,
    /// Dimension to starboard in metres
    DimensionToStarboard,
    /// Dimension to port in metres
    DimensionToPort,
    /// Dimension to stern in metres
    DimensionToStern,
    /// Dimension to bow in metres
    DimensionToBow,
    /// Ship and cargo type
    ShipType,
    /// Spare bits at offset 308 (message 19)
    Spare308,
    /// Draught in 1/10 metres
    Draught10thMetres,
    /// ETA minute
    EtaMinute,
    /// ETA hour
    EtaHour,
    /// ETA day
    EtaDay,
    /// ETA month
    EtaMonth,
    /// IMO number
    ImoNumber,
    /// AIS version indicator
    AisVersion,
    /// Data terminal not ready flag
    IsDteNotReady,
    /// Spare bit at offset 423 (message 5)
    Spare423,
    /// Ship name (message 19)
    ShipName,
    /// Destination (message 5)
    Destination,
    /// Vessel name (message 5)
    VesselName,
    /// Call sign (message 5)
    CallSign,
}

/// Number of columns in the export table.
pub const COLUMN_COUNT: usize = 49;

impl Column {
    /// All columns in on-disk order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Source,
        Column::MessageType,
        Column::Timestamp,
        Column::Mmsi,
        Column::Latitude,
        Column::Longitude,
        Column::CourseOverGround,
        Column::TrueHeading,
        Column::RadioSyncState,
        Column::RaimFlag,
        Column::SpareBits,
        Column::ManoeuvreIndicator,
        Column::RadioSlotTimeout,
        Column::PositionAccuracy,
        Column::RateOfTurn,
        Column::NavigationStatus,
        Column::RepeatIndicator,
        Column::RadioSubMessage,
        Column::CanAcceptMessage22ChannelAssignments,
        Column::CanSwitchBands,
        Column::IsDscAttached,
        Column::HasDisplay,
        Column::CsUnit,
        Column::RegionalReserved139,
        Column::RadioStatusType,
        Column::IsAssigned,
        Column::TimeStampSecond,
        Column::SpeedOverGroundTenths,
        Column::RegionalReserved38,
        Column::PositionFixType,
        Column::DimensionToStarboard,
        Column::DimensionToPort,
        Column::DimensionToStern,
        Column::DimensionToBow,
        Column::ShipType,
        Column::Spare308,
        Column::Draught10thMetres,
        Column::EtaMinute,
        Column::EtaHour,
        Column::EtaDay,
        Column::EtaMonth,
        Column::ImoNumber,
        Column::AisVersion,
        Column::IsDteNotReady,
        Column::Spare423,
        Column::ShipName,
        Column::Destination,
        Column::VesselName,
        Column::CallSign,
    ];

    /// The text columns, in on-disk order.
    pub const TEXT: [Column; 4] = [
        Column::ShipName,
        Column::Destination,
        Column::VesselName,
        Column::CallSign,
    ];

    /// Position of this column in the table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name as written to the file.
    pub fn name(self) -> &'static str {
        match self {
            Column::Source => "source",
            Column::MessageType => "messageType",
            Column::Timestamp => "timestamp",
            Column::Mmsi => "mmsi",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::CourseOverGround => "courseOverGround",
            Column::TrueHeading => "trueHeading",
            Column::RadioSyncState => "radioSyncState",
            Column::RaimFlag => "raimFlag",
            Column::SpareBits => "spareBits",
            Column::ManoeuvreIndicator => "manoeuvreIndicator",
            Column::RadioSlotTimeout => "radioSlotTimeout",
            Column::PositionAccuracy => "positionAccuracy",
            Column::RateOfTurn => "rateOfTurn",
            Column::NavigationStatus => "navigationStatus",
            Column::RepeatIndicator => "repeatIndicator",
            Column::RadioSubMessage => "radioSubMessage",
            Column::CanAcceptMessage22ChannelAssignments => "canAcceptMessage22ChannelAssignments",
            Column::CanSwitchBands => "canSwitchBands",
            Column::IsDscAttached => "isDscAttached",
            Column::HasDisplay => "hasDisplay",
            Column::CsUnit => "csUnit",
            Column::RegionalReserved139 => "regionalReserved139",
            Column::RadioStatusType => "radioStatusType",
            Column::IsAssigned => "isAssigned",
            // Existing datasets use this spelling
            Column::TimeStampSecond => "timeStampSecondstatic",
            Column::SpeedOverGroundTenths => "speedOverGroundTenths",
            Column::RegionalReserved38 => "regionalReserved38",
            Column::PositionFixType => "positionFixType",
            Column::DimensionToStarboard => "dimensionToStarboard",
            Column::DimensionToPort => "dimensionToPort",
            Column::DimensionToStern => "dimensionToStern",
            Column::DimensionToBow => "dimensionToBow",
            Column::ShipType => "shipType",
            Column::Spare308 => "spare308",
            Column::Draught10thMetres => "draught10thMetres",
            Column::EtaMinute => "etaMinute",
            Column::EtaHour => "etaHour",
            Column::EtaDay => "etaDay",
            Column::EtaMonth => "etaMonth",
            Column::ImoNumber => "imoNumber",
            Column::AisVersion => "aisVersion",
            Column::IsDteNotReady => "isDteNotReady",
            Column::Spare423 => "spare423",
            Column::ShipName => "shipName",
            Column::Destination => "destination",
            Column::VesselName => "vesselName",
            Column::CallSign => "callSign",
        }
    }

    /// Storage class of this column.
    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Timestamp => ColumnKind::Timestamp,
            Column::RaimFlag
            | Column::PositionAccuracy
            | Column::CanAcceptMessage22ChannelAssignments
            | Column::CanSwitchBands
            | Column::IsDscAttached
            | Column::HasDisplay
            | Column::IsAssigned
            | Column::IsDteNotReady => ColumnKind::Boolean,
            Column::ShipName | Column::Destination | Column::VesselName | Column::CallSign => {
                ColumnKind::FixedText
            }
            _ => ColumnKind::Int32,
        }
    }

    /// Look a column up by its file name.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
