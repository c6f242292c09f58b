//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;

use devident::error::Result;
use devident::telemetry::{
    ChargerType, ClockDomain, Controller, ControllerPower, DescString, FirmwareVersion,
    HardwareType, HostName, HwAddress, IdString, OperationMode, Region, StorageId, StorageUsage,
    UnitType, VoltageState,
};
use devident::{Asset, ButtonEdges, Canvas, Input, Lifecycle, Telemetry, TelemetryError};
use embedded_graphics::pixelcolor::Rgb888;

/// Width of one character in the fake font.
pub const CHAR_WIDTH: u32 = 10;
/// Height of every line in the fake font.
pub const LINE_HEIGHT: u32 = 20;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgb888),
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb888,
    },
    Text {
        x: i32,
        y: i32,
        size: u32,
        color: Rgb888,
        text: String,
    },
    Image {
        asset: Asset,
        x: i32,
        y: i32,
    },
    Present,
}

/// Canvas that records every call; text is `CHAR_WIDTH` per char.
#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls of frame `n` (0-based), up to and including its `Present`.
    pub fn frame(&self, n: usize) -> &[DrawCall] {
        let mut start = 0;
        let mut seen = 0;
        for (i, call) in self.calls.iter().enumerate() {
            if *call == DrawCall::Present {
                if seen == n {
                    return &self.calls[start..=i];
                }
                seen += 1;
                start = i + 1;
            }
        }
        panic!("frame {n} was never presented");
    }

    /// Calls of the most recent presented frame.
    pub fn last_frame(&self) -> &[DrawCall] {
        let frames = self.frames();
        assert!(frames > 0, "no frame presented");
        self.frame(frames - 1)
    }

    pub fn frames(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgb888) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb888) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(&mut self, x: i32, y: i32, size: u32, color: Rgb888, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            size,
            color,
            text: text.to_string(),
        });
    }

    fn draw_image(&mut self, asset: Asset, x: i32, y: i32) {
        self.calls.push(DrawCall::Image { asset, x, y });
    }

    fn text_dimensions(&self, _size: u32, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}

/// Text calls in `calls` as `(x, y, text)`.
pub fn texts(calls: &[DrawCall]) -> Vec<(i32, i32, &str)> {
    calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
            _ => None,
        })
        .collect()
}

/// Position of the text call drawing exactly `label`.
pub fn find_text(calls: &[DrawCall], label: &str) -> Option<(i32, i32)> {
    texts(calls)
        .into_iter()
        .find(|(_, _, t)| *t == label)
        .map(|(x, y, _)| (x, y))
}

/// Value drawn beside `label` by the row layout, if any.
pub fn value_of(calls: &[DrawCall], label: &str) -> Option<String> {
    let (x, y) = find_text(calls, label)?;
    let value_x = x + (label.chars().count() as u32 * CHAR_WIDTH) as i32 + 20;
    texts(calls)
        .into_iter()
        .find(|(tx, ty, _)| *tx == value_x && *ty == y)
        .map(|(_, _, t)| t.to_string())
}

/// Input that replays a fixed script, then reports nothing.
pub struct ScriptedInput {
    script: VecDeque<ButtonEdges>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = ButtonEdges>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Input for ScriptedInput {
    fn poll(&mut self) -> ButtonEdges {
        self.script.pop_front().unwrap_or_default()
    }
}

/// Host that allows a fixed number of frames.
pub struct FrameBudget {
    remaining: usize,
}

impl FrameBudget {
    pub fn new(frames: usize) -> Self {
        Self { remaining: frames }
    }
}

impl Lifecycle for FrameBudget {
    fn should_continue(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Telemetry with healthy defaults; each field can be overridden.
pub struct FakeTelemetry {
    pub firmware: Result<FirmwareVersion>,
    pub hardware: Result<HardwareType>,
    pub unit: Result<UnitType>,
    pub serial: Result<IdString>,
    pub dram: Result<DescString>,
    pub device_id: Result<u64>,
    pub region: Result<Region>,
    pub clock_mhz: Result<u32>,
    pub wlan_enabled: Result<bool>,
    pub wlan_rssi: Result<i32>,
    pub bluetooth_enabled: Result<bool>,
    pub nfc_enabled: Result<bool>,
    pub battery_percentage: Result<u32>,
    pub charging: Result<bool>,
    pub voltage: Result<VoltageState>,
    pub charger: Result<ChargerType>,
    pub charging_enabled: Result<bool>,
    pub enough_power: Result<bool>,
    pub battery_lot: Result<IdString>,
    pub storage: Cell<[Result<StorageUsage>; 3]>,
    pub sd_inserted: Cell<Result<bool>>,
    pub game_card_inserted: Cell<Result<bool>>,
    pub left_controller: Result<ControllerPower>,
    pub right_controller: Result<ControllerPower>,
    pub hostname: Result<HostName>,
    pub operation_mode: Result<OperationMode>,
    pub auto_update: Result<bool>,
    pub console_upload: Result<bool>,
    pub bt_address: Result<HwAddress>,
    pub wlan_address: Result<HwAddress>,
}

pub fn id(s: &str) -> IdString {
    IdString::try_from(s).expect("id fits")
}

impl Default for FakeTelemetry {
    fn default() -> Self {
        Self {
            firmware: Ok(FirmwareVersion {
                major: 10,
                minor: 2,
                micro: 0,
                revision_major: 0,
                revision_minor: 0,
            }),
            hardware: Ok(HardwareType::Icosa),
            unit: Ok(UnitType::Retail),
            serial: Ok(id("XAW70012345678")),
            dram: Ok(DescString::try_from("Samsung 4GB LPDDR4").expect("fits")),
            device_id: Ok(1234567890),
            region: Ok(Region::Usa),
            clock_mhz: Ok(1020),
            wlan_enabled: Ok(true),
            wlan_rssi: Ok(-60),
            bluetooth_enabled: Ok(true),
            nfc_enabled: Ok(false),
            battery_percentage: Ok(87),
            charging: Ok(true),
            voltage: Ok(VoltageState::Normal),
            charger: Ok(ChargerType::EnoughPower),
            charging_enabled: Ok(true),
            enough_power: Ok(true),
            battery_lot: Ok(id("LOT42")),
            storage: Cell::new([
                Ok(StorageUsage {
                    used: 16 * GIB,
                    total: 64 * GIB,
                    free: 48 * GIB,
                }),
                Ok(StorageUsage {
                    used: 10 * GIB,
                    total: 20 * GIB,
                    free: 10 * GIB,
                }),
                Ok(StorageUsage {
                    used: GIB,
                    total: 4 * GIB,
                    free: 3 * GIB,
                }),
            ]),
            sd_inserted: Cell::new(Ok(true)),
            game_card_inserted: Cell::new(Ok(false)),
            left_controller: Ok(ControllerPower {
                battery_level: 2,
                is_charging: true,
            }),
            right_controller: Ok(ControllerPower {
                battery_level: 4,
                is_charging: false,
            }),
            hostname: Ok(HostName::try_from("192.168.1.20").expect("fits")),
            operation_mode: Ok(OperationMode::Handheld),
            auto_update: Ok(true),
            console_upload: Ok(false),
            bt_address: Ok([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            wlan_address: Ok([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0x0F]),
        }
    }
}

impl FakeTelemetry {
    pub fn set_storage(&self, id: StorageId, usage: Result<StorageUsage>) {
        let mut all = self.storage.get();
        all[id as usize] = usage;
        self.storage.set(all);
    }
}

impl Telemetry for FakeTelemetry {
    fn firmware_version(&self) -> Result<FirmwareVersion> {
        self.firmware
    }
    fn hardware_type(&self) -> Result<HardwareType> {
        self.hardware
    }
    fn unit_type(&self) -> Result<UnitType> {
        self.unit
    }
    fn serial_number(&self) -> Result<IdString> {
        self.serial.clone()
    }
    fn dram_description(&self) -> Result<DescString> {
        self.dram.clone()
    }
    fn device_id(&self) -> Result<u64> {
        self.device_id
    }
    fn region(&self) -> Result<Region> {
        self.region
    }
    fn clock_mhz(&self, domain: ClockDomain) -> Result<u32> {
        // Distinct values per domain so rows can be told apart.
        self.clock_mhz.map(|mhz| match domain {
            ClockDomain::Cpu => mhz,
            ClockDomain::Gpu => mhz / 2,
            ClockDomain::Emc => mhz + 580,
        })
    }
    fn wireless_lan_enabled(&self) -> Result<bool> {
        self.wlan_enabled
    }
    fn wlan_rssi(&self) -> Result<i32> {
        self.wlan_rssi
    }
    fn bluetooth_enabled(&self) -> Result<bool> {
        self.bluetooth_enabled
    }
    fn nfc_enabled(&self) -> Result<bool> {
        self.nfc_enabled
    }
    fn battery_percentage(&self) -> Result<u32> {
        self.battery_percentage
    }
    fn is_charging(&self) -> Result<bool> {
        self.charging
    }
    fn voltage_state(&self) -> Result<VoltageState> {
        self.voltage
    }
    fn charger_type(&self) -> Result<ChargerType> {
        self.charger
    }
    fn charging_enabled(&self) -> Result<bool> {
        self.charging_enabled
    }
    fn enough_power_supplied(&self) -> Result<bool> {
        self.enough_power
    }
    fn battery_lot(&self) -> Result<IdString> {
        self.battery_lot.clone()
    }
    fn storage_usage(&self, id: StorageId) -> Result<StorageUsage> {
        self.storage.get()[id as usize]
    }
    fn sd_card_inserted(&self) -> Result<bool> {
        self.sd_inserted.get()
    }
    fn game_card_inserted(&self) -> Result<bool> {
        self.game_card_inserted.get()
    }
    fn controller_power(&self, controller: Controller) -> Result<ControllerPower> {
        match controller {
            Controller::Left => self.left_controller,
            Controller::Right => self.right_controller,
        }
    }
    fn hostname(&self) -> Result<HostName> {
        self.hostname.clone()
    }
    fn operation_mode(&self) -> Result<OperationMode> {
        self.operation_mode
    }
    fn auto_update_enabled(&self) -> Result<bool> {
        self.auto_update
    }
    fn console_info_upload_enabled(&self) -> Result<bool> {
        self.console_upload
    }
    fn bluetooth_address(&self) -> Result<HwAddress> {
        self.bt_address
    }
    fn wlan_mac_address(&self) -> Result<HwAddress> {
        self.wlan_address
    }
}

/// Shorthand for a failed query.
pub const UNSUPPORTED: TelemetryError = TelemetryError::Unsupported;
