//! Read-only platform telemetry consumed by the page renderers.
//!
//! The platform implements [`Telemetry`]; every query is independent and
//! may fail on its own. Renderers degrade a failed query to a placeholder
//! without affecting the other rows of the page.

use crate::error::Result;

/// Fixed-capacity identifier strings (serial number, battery lot).
pub type IdString = heapless::String<24>;

/// Free-form description text (DRAM part).
pub type DescString = heapless::String<64>;

/// Host name as reported by the network stack.
pub type HostName = heapless::String<128>;

/// A 6-byte hardware address (Bluetooth BD_ADDR, WLAN MAC).
pub type HwAddress = [u8; 6];

/// System firmware version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub micro: u8,
    pub revision_major: u8,
    pub revision_minor: u8,
}

/// Console hardware revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardwareType {
    Icosa,
    Copper,
    Hoag,
    Iowa,
    Calcio,
    Aula,
    Unknown,
}

impl HardwareType {
    pub fn label(self) -> &'static str {
        match self {
            HardwareType::Icosa => "Icosa",
            HardwareType::Copper => "Copper",
            HardwareType::Hoag => "Hoag",
            HardwareType::Iowa => "Iowa",
            HardwareType::Calcio => "Calcio",
            HardwareType::Aula => "Aula",
            HardwareType::Unknown => "Unknown",
        }
    }
}

/// Retail or development unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitType {
    Retail,
    Development,
}

impl UnitType {
    pub fn label(self) -> &'static str {
        match self {
            UnitType::Retail => "Retail",
            UnitType::Development => "Development",
        }
    }
}

/// Sales region the console was configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Japan,
    Usa,
    Europe,
    Australia,
    HongKongTaiwanKorea,
    China,
    Unknown,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Japan => "JPN",
            Region::Usa => "USA",
            Region::Europe => "EUR",
            Region::Australia => "AUS",
            Region::HongKongTaiwanKorea => "HTK",
            Region::China => "CHN",
            Region::Unknown => "Unknown",
        }
    }
}

/// Clock domains whose frequency is shown on the System page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDomain {
    Cpu,
    Gpu,
    Emc,
}

/// Battery voltage state as reported by the power service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoltageState {
    NeedsShutdown,
    NeedsSleep,
    NoBoost,
    Normal,
}

impl VoltageState {
    pub fn label(self) -> &'static str {
        match self {
            VoltageState::NeedsShutdown => "Needs shutdown",
            VoltageState::NeedsSleep => "Needs sleep",
            VoltageState::NoBoost => "Boost unavailable",
            VoltageState::Normal => "Normal",
        }
    }
}

/// What kind of charger is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChargerType {
    Unconnected,
    EnoughPower,
    LowPower,
    NotSupported,
}

impl ChargerType {
    pub fn label(self) -> &'static str {
        match self {
            ChargerType::Unconnected => "None",
            ChargerType::EnoughPower => "Official charger or dock",
            ChargerType::LowPower => "USB-C charger",
            ChargerType::NotSupported => "Unsupported charger",
        }
    }
}

/// Storage partitions shown on the Storage page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageId {
    SdCard,
    BuiltInUser,
    BuiltInSystem,
}

impl StorageId {
    pub const ALL: [StorageId; 3] = [
        StorageId::SdCard,
        StorageId::BuiltInUser,
        StorageId::BuiltInSystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StorageId::SdCard => "SD",
            StorageId::BuiltInUser => "NAND User",
            StorageId::BuiltInSystem => "NAND System",
        }
    }
}

/// Byte counts for one storage partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StorageUsage {
    pub used: u64,
    pub total: u64,
    pub free: u64,
}

/// Detachable controllers shown on the Joy-Con page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Controller {
    Left,
    Right,
}

impl Controller {
    pub const ALL: [Controller; 2] = [Controller::Left, Controller::Right];
}

/// Controller battery state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerPower {
    /// Battery level in quarter steps, `0..=4`.
    pub battery_level: u8,
    pub is_charging: bool,
}

impl ControllerPower {
    /// Battery level as a percentage; levels above 4 read as full.
    pub fn percentage(&self) -> u32 {
        u32::from(self.battery_level.min(4)) * 25
    }
}

/// Handheld or docked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMode {
    Handheld,
    Docked,
}

impl OperationMode {
    pub fn label(self) -> &'static str {
        match self {
            OperationMode::Handheld => "Handheld",
            OperationMode::Docked => "Docked",
        }
    }
}

/// Read-only platform telemetry.
///
/// Implementations must not write to the device. Queries are made every
/// frame for the visible page, so they should be cheap.
pub trait Telemetry {
    // Kernel
    fn firmware_version(&self) -> Result<FirmwareVersion>;
    fn hardware_type(&self) -> Result<HardwareType>;
    fn unit_type(&self) -> Result<UnitType>;
    fn serial_number(&self) -> Result<IdString>;
    fn dram_description(&self) -> Result<DescString>;
    fn device_id(&self) -> Result<u64>;

    // System
    fn region(&self) -> Result<Region>;
    /// Current clock frequency in MHz.
    fn clock_mhz(&self, domain: ClockDomain) -> Result<u32>;
    fn wireless_lan_enabled(&self) -> Result<bool>;
    fn wlan_rssi(&self) -> Result<i32>;
    fn bluetooth_enabled(&self) -> Result<bool>;
    fn nfc_enabled(&self) -> Result<bool>;

    // Power
    fn battery_percentage(&self) -> Result<u32>;
    fn is_charging(&self) -> Result<bool>;
    fn voltage_state(&self) -> Result<VoltageState>;
    fn charger_type(&self) -> Result<ChargerType>;
    fn charging_enabled(&self) -> Result<bool>;
    fn enough_power_supplied(&self) -> Result<bool>;
    fn battery_lot(&self) -> Result<IdString>;

    // Storage
    fn storage_usage(&self, id: StorageId) -> Result<StorageUsage>;
    fn sd_card_inserted(&self) -> Result<bool>;
    fn game_card_inserted(&self) -> Result<bool>;

    // Controllers
    fn controller_power(&self, controller: Controller) -> Result<ControllerPower>;

    // Misc
    fn hostname(&self) -> Result<HostName>;
    fn operation_mode(&self) -> Result<OperationMode>;
    fn auto_update_enabled(&self) -> Result<bool>;
    fn console_info_upload_enabled(&self) -> Result<bool>;
    fn bluetooth_address(&self) -> Result<HwAddress>;
    fn wlan_mac_address(&self) -> Result<HwAddress>;
}

/// Link quality percentage derived from RSSI (dBm).
pub fn wlan_quality(rssi: i32) -> u32 {
    if rssi <= -100 {
        0
    } else if rssi >= -50 {
        100
    } else {
        (2 * (rssi + 100)) as u32
    }
}
