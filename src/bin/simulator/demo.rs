//! Demo telemetry for the desktop simulator.
//!
//! Values are fixed apart from the battery, which drains slowly while
//! the simulator runs. The host name comes from `$HOSTNAME` so the
//! placeholder path is visible when it is unset; the right Joy-Con is
//! reported as disconnected.

use std::env;
use std::time::Instant;

use devident::error::Result;
use devident::telemetry::{
    ChargerType, ClockDomain, Controller, ControllerPower, DescString, FirmwareVersion,
    HardwareType, HostName, HwAddress, IdString, OperationMode, Region, StorageId, StorageUsage,
    UnitType, VoltageState,
};
use devident::ui::format::format_bounded;
use devident::{Telemetry, TelemetryError};

const GIB: u64 = 1024 * 1024 * 1024;

pub struct DemoTelemetry {
    started: Instant,
}

impl DemoTelemetry {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Telemetry for DemoTelemetry {
    fn firmware_version(&self) -> Result<FirmwareVersion> {
        Ok(FirmwareVersion {
            major: 17,
            minor: 0,
            micro: 1,
            revision_major: 0,
            revision_minor: 0,
        })
    }

    fn hardware_type(&self) -> Result<HardwareType> {
        Ok(HardwareType::Iowa)
    }

    fn unit_type(&self) -> Result<UnitType> {
        Ok(UnitType::Retail)
    }

    fn serial_number(&self) -> Result<IdString> {
        Ok(format_bounded(format_args!("XAW10012345678")))
    }

    fn dram_description(&self) -> Result<DescString> {
        Ok(format_bounded(format_args!("Samsung K4F6E3S4HM-MGCJ 4GB LPDDR4X")))
    }

    fn device_id(&self) -> Result<u64> {
        Ok(0x0123_4567_89AB_CDEF)
    }

    fn region(&self) -> Result<Region> {
        Ok(Region::Europe)
    }

    fn clock_mhz(&self, domain: ClockDomain) -> Result<u32> {
        Ok(match domain {
            ClockDomain::Cpu => 1020,
            ClockDomain::Gpu => 384,
            ClockDomain::Emc => 1600,
        })
    }

    fn wireless_lan_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    fn wlan_rssi(&self) -> Result<i32> {
        Ok(-62)
    }

    fn bluetooth_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    fn nfc_enabled(&self) -> Result<bool> {
        Ok(false)
    }

    fn battery_percentage(&self) -> Result<u32> {
        let drained = (self.started.elapsed().as_secs() / 30) as u32;
        Ok(100u32.saturating_sub(drained))
    }

    fn is_charging(&self) -> Result<bool> {
        Ok(false)
    }

    fn voltage_state(&self) -> Result<VoltageState> {
        Ok(VoltageState::Normal)
    }

    fn charger_type(&self) -> Result<ChargerType> {
        Ok(ChargerType::Unconnected)
    }

    fn charging_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    fn enough_power_supplied(&self) -> Result<bool> {
        Ok(false)
    }

    fn battery_lot(&self) -> Result<IdString> {
        Ok(format_bounded(format_args!("L0T4D3M0")))
    }

    fn storage_usage(&self, id: StorageId) -> Result<StorageUsage> {
        let (total, used) = match id {
            StorageId::SdCard => (119 * GIB, 47 * GIB),
            StorageId::BuiltInUser => (26 * GIB, 9 * GIB),
            StorageId::BuiltInSystem => (2 * GIB + GIB / 2, GIB),
        };
        Ok(StorageUsage {
            used,
            total,
            free: total - used,
        })
    }

    fn sd_card_inserted(&self) -> Result<bool> {
        Ok(true)
    }

    fn game_card_inserted(&self) -> Result<bool> {
        Ok(false)
    }

    fn controller_power(&self, controller: Controller) -> Result<ControllerPower> {
        match controller {
            Controller::Left => Ok(ControllerPower {
                battery_level: 3,
                is_charging: false,
            }),
            Controller::Right => Err(TelemetryError::DeviceAbsent),
        }
    }

    fn hostname(&self) -> Result<HostName> {
        env::var("HOSTNAME")
            .map(|name| format_bounded(format_args!("{}", name)))
            .map_err(|_| TelemetryError::Unsupported)
    }

    fn operation_mode(&self) -> Result<OperationMode> {
        Ok(OperationMode::Handheld)
    }

    fn auto_update_enabled(&self) -> Result<bool> {
        Ok(true)
    }

    fn console_info_upload_enabled(&self) -> Result<bool> {
        Ok(false)
    }

    fn bluetooth_address(&self) -> Result<HwAddress> {
        Ok([0x98, 0xB6, 0xE9, 0x12, 0x34, 0x56])
    }

    fn wlan_mac_address(&self) -> Result<HwAddress> {
        Ok([0x98, 0xB6, 0xE9, 0x65, 0x43, 0x21])
    }
}
