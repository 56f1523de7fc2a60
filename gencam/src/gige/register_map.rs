/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! GigE device register structs.
//!
//! This module abstracts physical configuration of the device and provides an easy access to
//! its registers.
//!
pub use gencam_device::gige::register_map::{
    ControlChannelPriviledge, DeviceMode, GvcpCapability, GvspCapability, MessageChannelCapability,
    NicCapability, NicConfiguration,
};

use std::{convert::TryInto, net::Ipv4Addr, time};

use gencam_device::gige::register_map::{bootstrap, stream};
use gencam_impl::{
    bit_op::BitOp,
    bytes_io::{BytesConvertible, ReadBytes, StaticString, WriteBytes},
};
use semver::Version;

use crate::{genapi::CompressionType, ControlError, ControlResult, DeviceControl};

/// Represents Bootstrap register map of a `GigE` device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bootstrap;

impl Bootstrap {
    pub fn new() -> Self {
        Self
    }

    pub fn version<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<Version> {
        let version: u32 = self.read_reg(device, bootstrap::VERSION)?;
        let major = version >> 16;
        let minor = version & 0xffff;
        Ok(Version::new(major as u64, minor as u64, 0))
    }

    pub fn device_mode<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<DeviceMode> {
        let mode = DeviceMode::from_raw(self.read_reg(device, bootstrap::DEVICE_MODE)?);
        Ok(mode)
    }

    pub fn mac_addr<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<[u8; 6]> {
        let high: [u8; 4] = self.read_reg(device, bootstrap::DEVICE_MAC_ADDRESS_HIGH_0)?;
        let low: [u8; 4] = self.read_reg(device, bootstrap::DEVICE_MAC_ADDRESS_LOW_0)?;
        let mut result = [0; 6];
        result[..2].copy_from_slice(&high[2..]);
        result[2..].copy_from_slice(&low);

        Ok(result)
    }

    pub fn nic_capability<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<NicCapability> {
        let cap = NicCapability::from_raw(
            self.read_reg(device, bootstrap::NETWORK_INTERFACE_CAPABILITY_0)?,
        );
        Ok(cap)
    }

    pub fn nic_configuration<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<NicConfiguration> {
        let cfg = NicConfiguration::from_raw(
            self.read_reg(device, bootstrap::NETWORK_INTERFACE_CONFIGURATION_0)?,
        );
        Ok(cfg)
    }

    pub fn set_nic_configuration<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        config: NicConfiguration,
    ) -> ControlResult<()> {
        self.write_reg(
            device,
            bootstrap::NETWORK_INTERFACE_CONFIGURATION_0,
            config.as_raw(),
        )
    }

    pub fn ip_addr<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<Ipv4Addr> {
        self.read_reg(device, bootstrap::CURRENT_IP_ADDRESS_0)
    }

    pub fn subnet_mask<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<[u8; 4]> {
        self.read_reg(device, bootstrap::CURRENT_SUBNET_MASK_0)
    }

    pub fn default_gateway<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<Ipv4Addr> {
        self.read_reg(device, bootstrap::CURRENT_DEFAULT_GATEWAY_0)
    }

    pub fn manufacturer_name<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        const LEN: usize = bootstrap::MANUFACTURER_NAME.1 as usize;
        let name: StaticString<LEN> = self.read_mem(device, bootstrap::MANUFACTURER_NAME)?;
        Ok(name.into_string())
    }

    pub fn model_name<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        const LEN: usize = bootstrap::MODEL_NAME.1 as usize;
        let name: StaticString<LEN> = self.read_mem(device, bootstrap::MODEL_NAME)?;
        Ok(name.into_string())
    }

    pub fn manufacturer_info<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        const LEN: usize = bootstrap::MANUFACTURER_INFO.1 as usize;
        let name: StaticString<LEN> = self.read_mem(device, bootstrap::MANUFACTURER_INFO)?;
        Ok(name.into_string())
    }

    pub fn serial_number<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        if self.gvcp_capability(device)?.is_serial_number_supported() {
            const LEN: usize = bootstrap::SERIAL_NUMBER.1 as usize;
            let name: StaticString<LEN> = self.read_mem(device, bootstrap::SERIAL_NUMBER)?;
            Ok(name.into_string())
        } else {
            Ok("".to_string())
        }
    }

    pub fn user_defined_name<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        if self.gvcp_capability(device)?.is_user_defined_name_supported() {
            const LEN: usize = bootstrap::USER_DEFINED_NAME.1 as usize;
            let name: StaticString<LEN> = self.read_mem(device, bootstrap::USER_DEFINED_NAME)?;
            Ok(name.into_string())
        } else {
            Ok("".to_string())
        }
    }

    pub fn set_user_defined_name<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        name: &str,
    ) -> ControlResult<()> {
        if self.gvcp_capability(device)?.is_user_defined_name_supported() {
            const LEN: usize = bootstrap::USER_DEFINED_NAME.1 as usize;
            let name: StaticString<LEN> = StaticString::from_string(name.to_string())?;
            self.write_mem(device, bootstrap::USER_DEFINED_NAME, name)
        } else {
            Ok(())
        }
    }

    pub fn first_url<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        const LEN: usize = bootstrap::FIRST_URL.1 as usize;
        let url: StaticString<LEN> = self.read_mem(device, bootstrap::FIRST_URL)?;
        Ok(url.into_string())
    }

    pub fn second_url<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        const LEN: usize = bootstrap::SECOND_URL.1 as usize;
        let url: StaticString<LEN> = self.read_mem(device, bootstrap::SECOND_URL)?;
        Ok(url.into_string())
    }

    pub fn number_of_nic<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<u32> {
        self.read_mem(device, bootstrap::NUMBER_OF_NETWORK_INTERFACES)
    }

    pub fn number_of_message_channel<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<u32> {
        self.read_mem(device, bootstrap::NUMBER_OF_MESSAGE_CHANNELS)
    }

    pub fn number_of_stream_channel<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<u32> {
        self.read_mem(device, bootstrap::NUMBER_OF_STREAM_CHANNELS)
    }

    /// Reads the header of the `GenICam` XML manifest table.
    ///
    /// Only meaningful when [`GvcpCapability::is_manifest_table_supported`] is set; devices
    /// that don't support the manifest table only publish their XML through [`Self::first_url`]
    /// and [`Self::second_url`].
    pub fn manifest_header<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<ManifestHeader> {
        let entry_count: u32 = self.read_reg(device, (bootstrap::MANIFEST_TABLE.0, 4))?;
        Ok(ManifestHeader { entry_count })
    }

    pub fn gvcp_capability<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<GvcpCapability> {
        let cap = GvcpCapability::from_raw(self.read_reg(device, bootstrap::GVCP_CAPABILITY)?);
        Ok(cap)
    }

    pub fn gvsp_capability<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<GvspCapability> {
        let cap = GvspCapability::from_raw(self.read_mem(device, bootstrap::GVSP_CAPABILITY)?);
        Ok(cap)
    }

    pub fn message_channel_capability<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<MessageChannelCapability> {
        let cap = MessageChannelCapability::from_raw(
            self.read_mem(device, bootstrap::MESSAGE_CHANNEL_CAPABILITY)?,
        );
        Ok(cap)
    }

    pub fn heartbeat_timeout<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<time::Duration> {
        let time_raw: u32 = self.read_mem(device, bootstrap::HEARTBEAT_TIMEOUT)?;
        let time = time::Duration::from_millis(time_raw as u64);
        Ok(time)
    }

    pub fn set_heartbeat_timeout<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        value: time::Duration,
    ) -> ControlResult<()> {
        let time_raw: u32 =
            unwrap_or_log!(value
                .as_millis()
                .try_into()
                .map_err(|_| ControlError::InvalidData(
                    format!(
                        "too long time is specified for heartbeat timeout: {:?}",
                        value
                    )
                    .into()
                )));

        self.write_mem(device, bootstrap::HEARTBEAT_TIMEOUT, time_raw)
    }

    pub fn pending_timeout<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<time::Duration> {
        let time_raw: u32 = self.read_mem(device, bootstrap::PENDING_TIMEOUT)?;
        let time = time::Duration::from_millis(time_raw as u64);
        Ok(time)
    }

    pub fn control_channel_priviledge<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<ControlChannelPriviledge> {
        let priviledge = ControlChannelPriviledge::from_raw(
            self.read_mem(device, bootstrap::CONTROL_CHANNEL_PRIVILEDGE)?,
        );
        Ok(priviledge)
    }

    pub fn set_control_channel_priviledge<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        priviledge: ControlChannelPriviledge,
    ) -> ControlResult<()> {
        self.write_mem(
            device,
            bootstrap::CONTROL_CHANNEL_PRIVILEDGE,
            priviledge.as_raw(),
        )
    }

    fn read_reg<Ctrl, T>(self, device: &mut Ctrl, register: (u32, u16)) -> ControlResult<T>
    where
        Ctrl: DeviceControl + ?Sized,
        T: BytesConvertible,
    {
        read_reg(device, register)
    }

    fn write_reg<Ctrl, T>(
        self,
        device: &mut Ctrl,
        register: (u32, u16),
        value: T,
    ) -> ControlResult<()>
    where
        Ctrl: DeviceControl + ?Sized,
        T: BytesConvertible,
    {
        write_reg(device, register, value)
    }

    fn read_mem<Ctrl, T>(self, device: &mut Ctrl, register: (u32, u16)) -> ControlResult<T>
    where
        Ctrl: DeviceControl + ?Sized,
        T: BytesConvertible,
    {
        read_mem(device, register)
    }

    fn write_mem<Ctrl, T>(
        self,
        device: &mut Ctrl,
        register: (u32, u16),
        value: T,
    ) -> ControlResult<()>
    where
        Ctrl: DeviceControl + ?Sized,
        T: BytesConvertible,
    {
        write_mem(device, register, value)
    }
}

fn read_reg<Ctrl, T>(device: &mut Ctrl, register: (u32, u16)) -> ControlResult<T>
where
    Ctrl: DeviceControl + ?Sized,
    T: BytesConvertible,
{
    let data = device.read_reg(register.0 as u64)?;
    data.as_ref().read_bytes_be().map_err(Into::into)
}

fn write_reg<Ctrl, T>(device: &mut Ctrl, register: (u32, u16), data: T) -> ControlResult<()>
where
    Ctrl: DeviceControl + ?Sized,
    T: BytesConvertible,
{
    let mut buf = [0; 4];
    buf.as_mut().write_bytes_be(data)?;
    device.write_reg(register.0 as u64, buf)
}

fn read_mem<Ctrl, T>(device: &mut Ctrl, register: (u32, u16)) -> ControlResult<T>
where
    Ctrl: DeviceControl + ?Sized,
    T: BytesConvertible,
{
    let mut buf = vec![0; register.1 as usize];
    device.read(register.0 as u64, &mut buf)?;
    buf.as_slice().read_bytes_be().map_err(Into::into)
}

fn write_mem<Ctrl, T>(device: &mut Ctrl, register: (u32, u16), data: T) -> ControlResult<()>
where
    Ctrl: DeviceControl + ?Sized,
    T: BytesConvertible,
{
    let mut buf = vec![0; register.1 as usize];
    buf.write_bytes_be(data)?;
    device.write(register.0 as u64, &buf)
}

/// `StreamChannelPort` register value: whether the device should push `GVSP` packets to a
/// host port at all, and if so, which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPort(u32);

impl ChannelPort {
    #[must_use]
    pub fn as_raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn is_host_port_enabled(self) -> bool {
        self.0.is_set(0)
    }

    #[must_use]
    pub fn host_port(self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    /// Sets the host port the device should stream to. A port of `0` disables streaming to a
    /// host port entirely.
    #[must_use]
    pub fn set_host_port(self, port: u16) -> Self {
        let raw = u32::from(port);
        if port == 0 {
            Self(raw.clear_bit(0))
        } else {
            Self(raw.set_bit(0))
        }
    }
}

/// Per-channel stream registers, based at `0x0D00 + 0x0040 * channel_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamRegister {
    channel_index: u32,
}

impl StreamRegister {
    #[must_use]
    pub fn new(channel_index: u32) -> Self {
        Self { channel_index }
    }

    fn offset(self, register: (u32, u16)) -> (u32, u16) {
        (stream::base_address(self.channel_index) + register.0, register.1)
    }

    pub fn packet_size<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<u32> {
        read_reg(device, self.offset(stream::STREAM_CHANNEL_PACKET_SIZE))
    }

    pub fn set_packet_size<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        packet_size: u32,
    ) -> ControlResult<()> {
        write_reg(
            device,
            self.offset(stream::STREAM_CHANNEL_PACKET_SIZE),
            packet_size,
        )
    }

    pub fn channel_port<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> ControlResult<ChannelPort> {
        let raw: u32 = read_reg(device, self.offset(stream::STREAM_CHANNEL_PORT))?;
        Ok(ChannelPort::from_raw(raw))
    }

    pub fn set_channel_port<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        port: ChannelPort,
    ) -> ControlResult<()> {
        write_reg(device, self.offset(stream::STREAM_CHANNEL_PORT), port.as_raw())
    }

    pub fn set_destination_address<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
        addr: Ipv4Addr,
    ) -> ControlResult<()> {
        write_reg(
            device,
            self.offset(stream::STREAM_CHANNEL_DESTINATION_ADDRESS),
            addr,
        )
    }
}

/// Size in bytes of a single entry of the `GenICam` XML manifest table, including its 4-byte
/// version field and the URL string that follows it.
const MANIFEST_ENTRY_SIZE: u32 = 512;
const MANIFEST_URL_OFFSET: u32 = 8;
const MANIFEST_URL_LEN: usize = 504;

/// Header of the manifest table at [`bootstrap::MANIFEST_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestHeader {
    entry_count: u32,
}

impl ManifestHeader {
    /// Enumerates the manifest's entries.
    ///
    /// Every entry's `GenICam` XML version is read up front so callers can pick the newest one
    /// without holding a borrow of `device` across the returned iterator.
    pub fn entries<Ctrl: DeviceControl + ?Sized>(
        self,
        device: &mut Ctrl,
    ) -> impl Iterator<Item = ControlResult<ManifestEntry>> {
        let first_entry_addr = bootstrap::MANIFEST_TABLE.0 + 8;

        (0..self.entry_count)
            .map(move |i| ManifestEntry::read(device, first_entry_addr + i * MANIFEST_ENTRY_SIZE))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// A single manifest entry: a `GenICam` XML file version paired with its [`XmlFileLocation`]
/// `URL` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    entry_addr: u32,
    xml_file_version: Version,
}

impl ManifestEntry {
    fn read<Ctrl: DeviceControl + ?Sized>(
        device: &mut Ctrl,
        entry_addr: u32,
    ) -> ControlResult<Self> {
        let raw_version: u32 = read_reg(device, (entry_addr, 4))?;
        let major = raw_version >> 16;
        let minor = raw_version & 0xffff;
        let xml_file_version = Version::new(u64::from(major), u64::from(minor), 0);

        Ok(Self {
            entry_addr,
            xml_file_version,
        })
    }

    #[must_use]
    pub fn xml_file_version(&self) -> Version {
        self.xml_file_version.clone()
    }

    pub fn url_string<Ctrl: DeviceControl + ?Sized>(
        &self,
        device: &mut Ctrl,
    ) -> ControlResult<String> {
        let url: StaticString<MANIFEST_URL_LEN> = read_mem(
            device,
            (self.entry_addr + MANIFEST_URL_OFFSET, MANIFEST_URL_LEN as u16),
        )?;
        Ok(url.into_string())
    }
}

/// Where a device's `GenICam` XML file can be retrieved from, as encoded in its
/// `FirstUrl`/`SecondUrl` bootstrap registers or in a [`ManifestEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlFileLocation {
    /// The XML file lives in the device's own memory space.
    Device {
        address: u64,
        size: u32,
        compression_type: CompressionType,
    },
    /// The XML file is hosted at a URL reachable over the network.
    Net {
        url: String,
        compression_type: CompressionType,
    },
    /// The XML file lives on the host's local filesystem. `cameleon` has no way to resolve
    /// this on its own; it's surfaced so callers can decide what to do with it.
    Host { path: String },
}

impl XmlFileLocation {
    /// Parses a `FirstUrl`/`SecondUrl`-style location string.
    ///
    /// The formats recognized are `Local:<address>;<size>[;<compression>]` for device memory,
    /// `http://` / `https://` for network locations, and `File:<path>` for host-local files.
    pub fn parse(url: &str) -> ControlResult<Self> {
        let url = url.trim_end_matches('\0').trim();

        if let Some(rest) = strip_scheme(url, "local") {
            let mut parts = rest.split(';');

            let address = parse_hex_field(parts.next(), url)?;
            let size = parse_hex_field(parts.next(), url)? as u32;
            let compression_type = match parts.next().map(str::to_ascii_lowercase).as_deref() {
                Some("zip") => CompressionType::Zip,
                _ => CompressionType::Uncompressed,
            };

            Ok(Self::Device {
                address,
                size,
                compression_type,
            })
        } else if url.starts_with("http://") || url.starts_with("https://") {
            Ok(Self::Net {
                url: url.to_string(),
                compression_type: CompressionType::Uncompressed,
            })
        } else if let Some(rest) = strip_scheme(url, "file") {
            Ok(Self::Host {
                path: rest.to_string(),
            })
        } else {
            Err(ControlError::InvalidDevice(
                format!("unrecognized GenICam url scheme: {}", url).into(),
            ))
        }
    }
}

fn strip_scheme<'a>(url: &'a str, scheme: &str) -> Option<&'a str> {
    let prefix_len = scheme.len() + 1;
    if url.len() >= prefix_len && url[..scheme.len()].eq_ignore_ascii_case(scheme) && url.as_bytes()[scheme.len()] == b':'
    {
        Some(&url[prefix_len..])
    } else {
        None
    }
}

fn parse_hex_field(field: Option<&str>, url: &str) -> ControlResult<u64> {
    let field = field.ok_or_else(|| {
        ControlError::InvalidDevice(format!("malformed GenICam url: {}", url).into())
    })?;
    let field = field.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(field, 16)
        .map_err(|_| ControlError::InvalidDevice(format!("malformed GenICam url: {}", url).into()))
}
