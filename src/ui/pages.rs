//! Page renderers.
//!
//! Each renderer queries telemetry and lays its rows out on the shared
//! content grid (see [`TextMetrics::row_y`]). A failed query only
//! affects its own row, which shows [`PLACEHOLDER`].

use crate::config::{
    BACKGROUND_COLOUR, BODY_HEIGHT, CONTENT_WIDTH, FONT_SIZE, MENU_INFO_DESC_COLOUR,
    MENU_RAIL_WIDTH, PLACEHOLDER, START_X, STATUS_BAR_HEIGHT, STORAGE_BAR_OFFSET,
    STORAGE_BLOCK_STEP, STORAGE_HEADING_OFFSET, STORAGE_ICON_X, STORAGE_ICON_Y, STORAGE_ROW_STEP,
    STORAGE_TEXT_X, STORAGE_TEXT_Y,
};
use crate::dashboard::DevicePresence;
use crate::draw_itemf;
use crate::error::{Result, TelemetryError};
use crate::platform::{Asset, Canvas};
use crate::telemetry::{
    wlan_quality, ChargerType, ClockDomain, Controller, HardwareType, OperationMode, Region,
    StorageId, Telemetry, UnitType, VoltageState,
};
use crate::ui::format::{enabled_label, format_address, format_size, inserted_label, yes_no_label};
use crate::ui::layout::{draw_item, TextMetrics};
use crate::ui::widgets::draw_usage_bar;
use crate::ui::Page;

/// Everything a renderer reads besides the canvas.
pub struct PageContext<'a, T: ?Sized> {
    pub telemetry: &'a T,
    pub presence: DevicePresence,
    pub metrics: TextMetrics,
}

/// Draw the content of `page`. `Exit` has no content.
pub fn render<C, T>(page: Page, canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    match page {
        Page::Kernel => kernel_info(canvas, ctx),
        Page::System => system_info(canvas, ctx),
        Page::Power => power_info(canvas, ctx),
        Page::Storage => storage_info(canvas, ctx),
        Page::Joycon => joycon_info(canvas, ctx),
        Page::Misc => misc_info(canvas, ctx),
        Page::Exit => {}
    }
}

/// Unwrap a query result, logging the failure.
fn ok<T>(field: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("telemetry: {} unavailable ({})", field, e);
            None
        }
    }
}

/// Row on the standard grid with a literal value or the placeholder.
fn row<C: Canvas + ?Sized>(canvas: &mut C, metrics: &TextMetrics, n: i32, label: &str, value: Option<&str>) {
    draw_item(canvas, START_X, metrics.row_y(n), label, Some(value.unwrap_or(PLACEHOLDER)));
}

fn kernel_info<C, T>(canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    let t = ctx.telemetry;
    let m = &ctx.metrics;

    match ok("firmware version", t.firmware_version()) {
        Some(v) => draw_itemf!(
            canvas,
            START_X,
            m.row_y(1),
            "Firmware version:",
            "{}.{}.{}-{}{}",
            v.major,
            v.minor,
            v.micro,
            v.revision_major,
            v.revision_minor
        ),
        None => row(canvas, m, 1, "Firmware version:", None),
    }

    let hardware = ok("hardware type", t.hardware_type()).map(HardwareType::label);
    row(canvas, m, 2, "Hardware:", hardware);

    let unit = ok("unit type", t.unit_type()).map(UnitType::label);
    row(canvas, m, 3, "Unit:", unit);

    let serial = ok("serial number", t.serial_number());
    row(canvas, m, 4, "Serial:", serial.as_deref());

    let dram = ok("dram description", t.dram_description());
    row(canvas, m, 5, "DRAM ID:", dram.as_deref());

    match ok("device id", t.device_id()) {
        Some(id) => draw_itemf!(canvas, START_X, m.row_y(6), "Device ID:", "{}", id),
        None => row(canvas, m, 6, "Device ID:", None),
    }
}

fn system_info<C, T>(canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    let t = ctx.telemetry;
    let m = &ctx.metrics;

    let region = ok("region", t.region()).map(Region::label);
    row(canvas, m, 1, "Region:", region);

    let clocks = [
        (ClockDomain::Cpu, "CPU clock:"),
        (ClockDomain::Gpu, "GPU clock:"),
        (ClockDomain::Emc, "EMC clock:"),
    ];
    for (n, (domain, label)) in (2..).zip(clocks) {
        match ok("clock", t.clock_mhz(domain)) {
            Some(mhz) => draw_itemf!(canvas, START_X, m.row_y(n), label, "{} MHz", mhz),
            None => row(canvas, m, n, label, None),
        }
    }

    let wlan = ok("wireless lan flag", t.wireless_lan_enabled());
    let rssi = ok("wlan rssi", t.wlan_rssi());
    match (wlan, rssi) {
        (Some(enabled), Some(rssi)) => draw_itemf!(
            canvas,
            START_X,
            m.row_y(5),
            "Wireless LAN:",
            "{} (RSSI: {}) (Quality: {})",
            enabled_label(enabled),
            rssi,
            wlan_quality(rssi)
        ),
        (enabled, _) => row(canvas, m, 5, "Wireless LAN:", enabled.map(enabled_label)),
    }

    let bluetooth = ok("bluetooth flag", t.bluetooth_enabled()).map(enabled_label);
    row(canvas, m, 6, "Bluetooth:", bluetooth);

    let nfc = ok("nfc flag", t.nfc_enabled()).map(enabled_label);
    row(canvas, m, 7, "NFC:", nfc);
}

fn power_info<C, T>(canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    let t = ctx.telemetry;
    let m = &ctx.metrics;

    let percentage = ok("battery percentage", t.battery_percentage());
    let charging = ok("charging state", t.is_charging());
    match (percentage, charging) {
        (Some(pct), Some(charging)) => draw_itemf!(
            canvas,
            START_X,
            m.row_y(1),
            "Battery percentage:",
            "{} % ({})",
            pct,
            if charging { "charging" } else { "not charging" }
        ),
        (Some(pct), None) => draw_itemf!(canvas, START_X, m.row_y(1), "Battery percentage:", "{} %", pct),
        (None, _) => row(canvas, m, 1, "Battery percentage:", None),
    }

    let voltage = ok("voltage state", t.voltage_state()).map(VoltageState::label);
    row(canvas, m, 2, "Battery voltage state:", voltage);

    let charger = ok("charger type", t.charger_type()).map(ChargerType::label);
    row(canvas, m, 3, "Battery charger type:", charger);

    let enabled = ok("charging enabled", t.charging_enabled()).map(yes_no_label);
    row(canvas, m, 4, "Battery charging enabled:", enabled);

    let ample = ok("power supply", t.enough_power_supplied()).map(yes_no_label);
    row(canvas, m, 5, "Battery ample power supplied:", ample);

    let lot = ok("battery lot", t.battery_lot());
    row(canvas, m, 6, "Battery lot number:", lot.as_deref());
}

fn storage_info<C, T>(canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    let t = ctx.telemetry;

    // The storage blocks overlap the banner.
    canvas.draw_rect(
        MENU_RAIL_WIDTH as i32,
        STATUS_BAR_HEIGHT as i32,
        CONTENT_WIDTH,
        BODY_HEIGHT,
        BACKGROUND_COLOUR,
    );

    for (i, id) in StorageId::ALL.into_iter().enumerate() {
        let block = i as i32 * STORAGE_BLOCK_STEP;
        let usage = ok("storage usage", t.storage_usage(id));

        let icon_y = STORAGE_ICON_Y + block;
        canvas.draw_image(Asset::DriveIcon, STORAGE_ICON_X, icon_y);
        let (used, total) = usage.map(|u| (u.used, u.total)).unwrap_or((0, 0));
        draw_usage_bar(canvas, STORAGE_ICON_X, icon_y + STORAGE_BAR_OFFSET, used, total);

        let heading_y = STORAGE_TEXT_Y + block + ctx.metrics.centre_offset() + STORAGE_HEADING_OFFSET;
        canvas.draw_text(STORAGE_TEXT_X, heading_y, FONT_SIZE, MENU_INFO_DESC_COLOUR, id.label());

        let sizes = usage.map(|u| [format_size(u.total), format_size(u.free), format_size(u.used)]);
        let labels = [
            "Total storage capacity:",
            "Free storage capacity:",
            "Used storage capacity:",
        ];
        for (k, label) in labels.into_iter().enumerate() {
            let y = heading_y + STORAGE_ROW_STEP * (k as i32 + 1);
            let value = sizes.as_ref().map(|s| s[k].as_str());
            draw_item(canvas, STORAGE_TEXT_X, y, label, Some(value.unwrap_or(PLACEHOLDER)));
        }
    }
}

fn joycon_info<C, T>(canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    let t = ctx.telemetry;
    let m = &ctx.metrics;

    for (i, controller) in Controller::ALL.into_iter().enumerate() {
        let (battery_label, charging_label) = match controller {
            Controller::Left => ("Left Joy-Con battery:", "Left Joy-Con charging:"),
            Controller::Right => ("Right Joy-Con battery:", "Right Joy-Con charging:"),
        };
        let n = 2 * i as i32 + 1;

        match t.controller_power(controller) {
            Ok(power) => {
                draw_itemf!(canvas, START_X, m.row_y(n), battery_label, "{} %", power.percentage());
                let state = if power.is_charging { "Charging" } else { "Not charging" };
                row(canvas, m, n + 1, charging_label, Some(state));
            }
            Err(TelemetryError::DeviceAbsent) => {
                row(canvas, m, n, battery_label, Some("Not connected"));
                row(canvas, m, n + 1, charging_label, Some("Not connected"));
            }
            Err(e) => {
                debug!("telemetry: controller power unavailable ({})", e);
                row(canvas, m, n, battery_label, None);
                row(canvas, m, n + 1, charging_label, None);
            }
        }
    }
}

fn misc_info<C, T>(canvas: &mut C, ctx: &PageContext<'_, T>)
where
    C: Canvas + ?Sized,
    T: Telemetry + ?Sized,
{
    let t = ctx.telemetry;
    let m = &ctx.metrics;

    let hostname = ok("hostname", t.hostname());
    row(canvas, m, 1, "IP:", hostname.as_deref());

    let mode = ok("operation mode", t.operation_mode()).map(OperationMode::label);
    row(canvas, m, 2, "State:", mode);

    let auto_update = ok("auto update flag", t.auto_update_enabled()).map(enabled_label);
    row(canvas, m, 3, "Automatic update:", auto_update);

    let upload = ok("console upload flag", t.console_info_upload_enabled()).map(enabled_label);
    row(canvas, m, 4, "Console information upload:", upload);

    row(canvas, m, 5, "SD card status:", Some(inserted_label(ctx.presence.sd_card)));
    row(canvas, m, 6, "Game card status:", Some(inserted_label(ctx.presence.game_card)));

    let bt = ok("bluetooth address", t.bluetooth_address()).map(|a| format_address(&a));
    row(canvas, m, 7, "BT address:", bt.as_deref());

    let wlan = ok("wlan address", t.wlan_mac_address()).map(|a| format_address(&a));
    row(canvas, m, 8, "WLAN address:", wlan.as_deref());
}
