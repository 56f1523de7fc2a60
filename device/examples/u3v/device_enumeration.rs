/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lists every USB3 Vision device currently attached to the host.

use gencam_device::u3v::enumerate_devices;

fn main() {
    let devices = enumerate_devices().expect("failed to enumerate U3V devices");

    if devices.is_empty() {
        println!("no U3V device found");
        return;
    }

    for device in &devices {
        let info = device.device_info();
        println!(
            "{} {} (serial: {})",
            info.vendor_name, info.model_name, info.serial_number
        );
    }
}
