/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Opens the first USB3 Vision device found and reads its timestamp register
//! through a raw `ReadMem` command.

use std::convert::TryInto;
use std::time::Duration;

use gencam_device::u3v::{enumerate_devices, prelude::*, protocol::cmd, register_map};

const TIMEOUT: Duration = Duration::from_millis(100);

fn main() {
    let mut devices = enumerate_devices().expect("failed to enumerate U3V devices");
    let Some(device) = devices.pop() else {
        println!("no U3V device found");
        return;
    };

    let mut control_channel = device
        .control_channel()
        .expect("failed to open control channel");
    control_channel.open().expect("failed to open device");

    let (addr, len) = register_map::abrm::TIMESTAMP;
    let read = cmd::ReadMem::new(addr, len).finalize(0);

    let mut request = Vec::new();
    read.serialize(&mut request).expect("failed to serialize ReadMem");
    control_channel
        .send(&request, TIMEOUT)
        .expect("failed to send ReadMem");

    let mut response = vec![0; read.maximum_ack_len()];
    control_channel
        .recv(&mut response, TIMEOUT)
        .expect("failed to receive ack");

    let ack = gencam_device::u3v::protocol::ack::AckPacket::parse(&response)
        .expect("failed to parse ack");
    let scd: gencam_device::u3v::protocol::ack::ReadMem = ack.scd_as().expect("unexpected ack kind");
    let timestamp = u64::from_le_bytes(scd.data[..8].try_into().unwrap());
    println!("device timestamp: {timestamp}");
}
