/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use semver::Version;

/// USB link speed a U3V device has negotiated with its host controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusSpeed {
    LowSpeed,
    FullSpeed,
    HighSpeed,
    SuperSpeed,
    SuperSpeedPlus,
}

/// Information embedded in the U3V-specific device info descriptor, read once at enumeration
/// time and cached for the lifetime of the [`super::Device`].
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub gencp_version: Version,
    pub u3v_version: Version,
    pub guid: String,
    pub vendor_name: String,
    pub model_name: String,
    pub family_name: Option<String>,
    pub device_version: String,
    pub manufacturer_info: String,
    pub serial_number: String,
    pub user_defined_name: Option<String>,
    pub supported_speed: BusSpeed,
}
