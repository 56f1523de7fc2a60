/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::time::Duration;

use gencam_impl::bytes_io::ReadBytes;
use nusb::transfer::{Direction, EndpointType};
use nusb::MaybeFuture;
use semver::Version;

use crate::u3v::{BusSpeed, DeviceInfo, Error, Result};

use super::{
    channel::{ControlIfaceInfo, ReceiveIfaceInfo},
    device::Device,
};

const MISCELLANEOUS_CLASS: u8 = 0xEF;

const DEVICE_SUBCLASS: u8 = 0x02;
const DEVICE_PROTOCOL: u8 = 0x01;

const IAD_DESC_TYPE: u8 = 0x0B;
const IAD_FUNCTION_PROTOCOL: u8 = 0x00;

const USB3V_SUBCLASS: u8 = 0x05;

const GET_DESCRIPTOR_TIMEOUT: Duration = Duration::from_secs(1);

/// Enumerate every USB3 Vision device currently attached to the host.
///
/// Devices that claim the miscellaneous/IAD class triple but don't carry a U3V function, or
/// whose descriptors don't follow the specification, are silently skipped rather than surfaced
/// as an enumeration-wide error.
pub fn enumerate_devices() -> Result<Vec<Device>> {
    let devices = nusb::list_devices().wait().map_err(Error::from)?;
    let builders = devices.filter_map(|dev| DeviceBuilder::new(dev).ok().flatten());

    Ok(builders
        .filter_map(|builder| builder.build().ok())
        .collect())
}

struct DeviceBuilder {
    info: nusb::DeviceInfo,
}

impl DeviceBuilder {
    fn new(info: nusb::DeviceInfo) -> Result<Option<Self>> {
        if info.class() == MISCELLANEOUS_CLASS
            && info.sub_class() == DEVICE_SUBCLASS
            && info.protocol() == DEVICE_PROTOCOL
        {
            Ok(Some(Self { info }))
        } else {
            Ok(None)
        }
    }

    fn build(self) -> Result<Device> {
        let device = self.info.open().wait().map_err(Error::from)?;

        let config_desc = device
            .active_configuration()
            .map_err(|_| Error::InvalidDevice)?;
        let raw = config_desc.as_bytes();

        let u3v_iad = Self::find_u3v_iad(raw).ok_or(Error::InvalidDevice)?;

        let mut interfaces: Vec<_> = config_desc
            .interfaces()
            .filter(|iface| iface.interface_number() >= u3v_iad.first_interface)
            .collect();
        interfaces.sort_by_key(nusb::descriptors::InterfaceGroup::interface_number);

        let mut interfaces = interfaces.into_iter();

        let ctrl_iface = interfaces.next().ok_or(Error::InvalidDevice)?;
        let ctrl_alt = ctrl_iface.first_alt_setting();
        let ctrl_iface_info = ControlIfaceInfo::from_alt_setting(&ctrl_alt)?;

        let device_info_desc = DeviceInfoDescriptor::from_bytes(raw)?;
        let device_info = device_info_desc.interpret(&device)?;

        let mut receive_ifaces: Vec<(ReceiveIfaceInfo, ReceiveIfaceKind)> = interfaces
            .filter_map(|iface| ReceiveIfaceInfo::from_group(&iface))
            .collect();

        if receive_ifaces.len() > 2 {
            return Err(Error::InvalidDevice);
        }

        let (event_iface, stream_iface) = match receive_ifaces.pop() {
            Some((event_iface, ReceiveIfaceKind::Event)) => match receive_ifaces.pop() {
                Some((stream_iface, ReceiveIfaceKind::Stream)) => {
                    (Some(event_iface), Some(stream_iface))
                }
                None => (Some(event_iface), None),
                Some(_) => return Err(Error::InvalidDevice),
            },
            Some((stream_iface, ReceiveIfaceKind::Stream)) => match receive_ifaces.pop() {
                Some((event_iface, ReceiveIfaceKind::Event)) => {
                    (Some(event_iface), Some(stream_iface))
                }
                None => (None, Some(stream_iface)),
                Some(_) => return Err(Error::InvalidDevice),
            },
            None => (None, None),
        };

        Ok(Device::new(
            device,
            ctrl_iface_info,
            event_iface,
            stream_iface,
            device_info,
        ))
    }

    /// Scan the raw configuration descriptor for the interface association descriptor that
    /// marks the start of the U3V function.
    fn find_u3v_iad(raw: &[u8]) -> Option<Iad> {
        let mut cursor = 0;
        while cursor + 1 < raw.len() {
            let desc_length = raw[cursor];
            if desc_length < 2 {
                break;
            }
            let descriptor_type = raw[cursor + 1];
            if descriptor_type == IAD_DESC_TYPE && cursor + 8 <= raw.len() {
                if let Some(iad) = Iad::from_bytes(&raw[cursor..cursor + 8]) {
                    if Self::is_u3v_iad(&iad) {
                        return Some(iad);
                    }
                }
            }
            cursor += desc_length as usize;
        }
        None
    }

    fn is_u3v_iad(iad: &Iad) -> bool {
        iad.function_class == MISCELLANEOUS_CLASS
            && iad.function_subclass == USB3V_SUBCLASS
            && iad.function_protocol == IAD_FUNCTION_PROTOCOL
    }
}

/// Interface Association Descriptor.
#[allow(unused)]
struct Iad {
    first_interface: u8,
    interface_count: u8,
    function_class: u8,
    function_subclass: u8,
    function_protocol: u8,
}

impl Iad {
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 8 {
            return None;
        }
        Some(Self {
            first_interface: bytes[2],
            interface_count: bytes[3],
            function_class: bytes[4],
            function_subclass: bytes[5],
            function_protocol: bytes[6],
        })
    }
}

struct DeviceInfoDescriptor {
    gencp_version_major: u16,
    gencp_version_minor: u16,
    u3v_version_major: u16,
    u3v_version_minor: u16,
    guid_idx: u8,
    vendor_name_idx: u8,
    model_name_idx: u8,
    family_name_idx: u8,
    device_version_idx: u8,
    manufacturer_info_idx: u8,
    serial_number_idx: u8,
    user_defined_name_idx: u8,
    supported_speed_mask: u8,
}

impl DeviceInfoDescriptor {
    const MINIMUM_DESC_LENGTH: u8 = 20;
    const DESCRIPTOR_TYPE: u8 = 0x24;
    const DESCRIPTOR_SUBTYPE: u8 = 0x1;

    /// Find and parse the U3V device info descriptor anywhere within the raw configuration
    /// descriptor bytes.
    fn from_bytes(raw: &[u8]) -> Result<Self> {
        let mut cursor = 0;
        while cursor + 1 < raw.len() {
            let desc_length = raw[cursor];
            if desc_length < 2 {
                break;
            }
            if desc_length >= Self::MINIMUM_DESC_LENGTH
                && cursor + desc_length as usize <= raw.len()
                && raw[cursor + 1] == Self::DESCRIPTOR_TYPE
                && raw[cursor + 2] == Self::DESCRIPTOR_SUBTYPE
            {
                return Self::parse(&raw[cursor..cursor + desc_length as usize]);
            }
            cursor += desc_length as usize;
        }

        Err(Error::InvalidDevice)
    }

    fn parse(mut bytes: &[u8]) -> Result<Self> {
        let _length: u8 = bytes.read_bytes_le()?;
        let _descriptor_type: u8 = bytes.read_bytes_le()?;
        let _descriptor_subtype: u8 = bytes.read_bytes_le()?;

        let gencp_version_minor = bytes.read_bytes_le()?;
        let gencp_version_major = bytes.read_bytes_le()?;
        let u3v_version_minor = bytes.read_bytes_le()?;
        let u3v_version_major = bytes.read_bytes_le()?;
        let guid_idx = bytes.read_bytes_le()?;
        let vendor_name_idx = bytes.read_bytes_le()?;
        let model_name_idx = bytes.read_bytes_le()?;
        let family_name_idx = bytes.read_bytes_le()?;
        let device_version_idx = bytes.read_bytes_le()?;
        let manufacturer_info_idx = bytes.read_bytes_le()?;
        let serial_number_idx = bytes.read_bytes_le()?;
        let user_defined_name_idx = bytes.read_bytes_le()?;
        let supported_speed_mask = bytes.read_bytes_le()?;

        Ok(Self {
            gencp_version_major,
            gencp_version_minor,
            u3v_version_major,
            u3v_version_minor,
            guid_idx,
            vendor_name_idx,
            model_name_idx,
            family_name_idx,
            device_version_idx,
            manufacturer_info_idx,
            serial_number_idx,
            user_defined_name_idx,
            supported_speed_mask,
        })
    }

    fn interpret(&self, device: &nusb::Device) -> Result<DeviceInfo> {
        let gencp_version = Version::new(
            self.gencp_version_major.into(),
            self.gencp_version_minor.into(),
            0,
        );

        let u3v_version = Version::new(
            self.u3v_version_major.into(),
            self.u3v_version_minor.into(),
            0,
        );

        let guid = Self::read_string(device, self.guid_idx)?.ok_or(Error::InvalidDevice)?;
        let vendor_name =
            Self::read_string(device, self.vendor_name_idx)?.ok_or(Error::InvalidDevice)?;
        let model_name =
            Self::read_string(device, self.model_name_idx)?.ok_or(Error::InvalidDevice)?;
        let family_name = Self::read_string(device, self.family_name_idx)?;
        let device_version =
            Self::read_string(device, self.device_version_idx)?.ok_or(Error::InvalidDevice)?;
        let manufacturer_info =
            Self::read_string(device, self.manufacturer_info_idx)?.ok_or(Error::InvalidDevice)?;
        let serial_number =
            Self::read_string(device, self.serial_number_idx)?.ok_or(Error::InvalidDevice)?;
        let user_defined_name = Self::read_string(device, self.user_defined_name_idx)?;

        let supported_speed = if self.supported_speed_mask >> 4 & 0b1 == 1 {
            BusSpeed::SuperSpeedPlus
        } else if self.supported_speed_mask >> 3 & 0b1 == 1 {
            BusSpeed::SuperSpeed
        } else if self.supported_speed_mask >> 2 & 0b1 == 1 {
            BusSpeed::HighSpeed
        } else if self.supported_speed_mask >> 1 & 0b1 == 1 {
            BusSpeed::FullSpeed
        } else if self.supported_speed_mask & 0b1 == 1 {
            BusSpeed::LowSpeed
        } else {
            return Err(Error::InvalidDevice);
        };

        Ok(DeviceInfo {
            gencp_version,
            u3v_version,
            guid,
            vendor_name,
            model_name,
            family_name,
            device_version,
            manufacturer_info,
            serial_number,
            user_defined_name,
            supported_speed,
        })
    }

    fn read_string(device: &nusb::Device, index: u8) -> Result<Option<String>> {
        if index == 0 {
            return Ok(None);
        }

        device
            .get_string_descriptor(index, 0, GET_DESCRIPTOR_TIMEOUT)
            .wait()
            .map(Some)
            .map_err(Error::from)
    }
}

impl ControlIfaceInfo {
    const CONTROL_IFACE_PROTOCOL: u8 = 0x00;

    fn from_alt_setting(alt: &nusb::descriptors::InterfaceAltSetting<'_>) -> Result<Self> {
        let iface_number = alt.interface_number();

        if alt.class() != MISCELLANEOUS_CLASS
            || alt.subclass() != USB3V_SUBCLASS
            || alt.protocol() != Self::CONTROL_IFACE_PROTOCOL
        {
            return Err(Error::InvalidDevice);
        }

        let eps: Vec<_> = alt.endpoints().collect();
        if eps.len() != 2 {
            return Err(Error::InvalidDevice);
        }
        let ep_in = eps
            .iter()
            .find(|ep| ep.direction() == Direction::In)
            .ok_or(Error::InvalidDevice)?;
        let ep_out = eps
            .iter()
            .find(|ep| ep.direction() == Direction::Out)
            .ok_or(Error::InvalidDevice)?;
        if ep_in.transfer_type() != EndpointType::Bulk
            || ep_out.transfer_type() != EndpointType::Bulk
        {
            return Err(Error::InvalidDevice);
        }

        Ok(Self {
            iface_number,
            bulk_in_ep: ep_in.address(),
            bulk_out_ep: ep_out.address(),
        })
    }
}

impl ReceiveIfaceInfo {
    const EVENT_IFACE_PROTOCOL: u8 = 0x01;
    const STREAM_IFACE_PROTOCOL: u8 = 0x02;

    fn from_group(group: &nusb::descriptors::InterfaceGroup<'_>) -> Option<(Self, ReceiveIfaceKind)> {
        let iface_number = group.interface_number();
        let alt = group.first_alt_setting();

        if alt.class() != MISCELLANEOUS_CLASS || alt.subclass() != USB3V_SUBCLASS {
            return None;
        }

        let iface_kind = match alt.protocol() {
            Self::EVENT_IFACE_PROTOCOL => ReceiveIfaceKind::Event,
            Self::STREAM_IFACE_PROTOCOL => ReceiveIfaceKind::Stream,
            _ => return None,
        };

        let eps: Vec<_> = alt.endpoints().collect();
        if eps.len() != 1 {
            return None;
        }
        let ep = &eps[0];
        if ep.transfer_type() != EndpointType::Bulk || ep.direction() != Direction::In {
            return None;
        }

        let iface_info = ReceiveIfaceInfo {
            iface_number,
            alt_setting: alt.alternate_setting(),
            bulk_in_ep: ep.address(),
        };

        Some((iface_info, iface_kind))
    }
}

#[derive(PartialEq)]
enum ReceiveIfaceKind {
    Stream,
    Event,
}
