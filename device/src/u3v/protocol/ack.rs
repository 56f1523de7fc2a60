/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::{io, time};

use gencam_impl::bytes_io::ReadBytes;

use crate::u3v::{Error, Result};

const PREFIX_MAGIC: u32 = 0x4356_3355;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AckPacket<'a> {
    ccd: AckCcd,
    raw_scd: &'a [u8],
}

impl<'a> AckPacket<'a> {
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        let mut cursor = io::Cursor::new(buf);
        let magic: u32 = cursor.read_bytes_le()?;
        if magic != PREFIX_MAGIC {
            return Err(Error::InvalidPacket("invalid ack magic".into()));
        }

        let ccd = AckCcd::parse(&mut cursor)?;

        let scd_start = cursor.position() as usize;
        let scd_end = scd_start + ccd.scd_len as usize;
        if buf.len() < scd_end {
            return Err(Error::InvalidPacket(
                "ack data is shorter than the scd length specified in its ccd".into(),
            ));
        }

        Ok(Self {
            ccd,
            raw_scd: &buf[scd_start..scd_end],
        })
    }

    pub fn ccd(&self) -> &AckCcd {
        &self.ccd
    }

    pub fn scd_kind(&self) -> ScdKind {
        self.ccd.scd_kind
    }

    pub fn raw_scd(&self) -> &'a [u8] {
        self.raw_scd
    }

    pub fn scd_as<T: ParseScd<'a>>(&self) -> Result<T> {
        T::parse(self.raw_scd, &self.ccd)
    }

    pub fn status(&self) -> Status {
        self.ccd.status
    }

    pub fn request_id(&self) -> u16 {
        self.ccd.request_id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckCcd {
    status: Status,
    scd_kind: ScdKind,
    scd_len: u16,
    request_id: u16,
}

impl AckCcd {
    fn parse(cursor: &mut io::Cursor<&[u8]>) -> Result<Self> {
        let status = Status::parse(cursor)?;
        let scd_kind = ScdKind::parse(cursor)?;
        let scd_len = cursor.read_bytes_le()?;
        let request_id = cursor.read_bytes_le()?;
        Ok(Self {
            status,
            scd_kind,
            scd_len,
            request_id,
        })
    }

    #[must_use]
    pub fn scd_len(&self) -> u16 {
        self.scd_len
    }

    #[must_use]
    pub fn request_id(&self) -> u16 {
        self.request_id
    }
}

pub trait ParseScd<'a>: Sized {
    fn parse(buf: &'a [u8], ccd: &AckCcd) -> Result<Self>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    code: u16,
    kind: StatusKind,
}

impl Status {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self.kind, StatusKind::GenCp(GenCpStatus::Success))
    }

    /// Top bit of the status code marks it as an error rather than a warning/info status.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        self.code & 0x8000 != 0
    }

    #[must_use]
    pub fn code(self) -> u16 {
        self.code
    }

    #[must_use]
    pub fn kind(self) -> StatusKind {
        self.kind
    }

    fn parse(cursor: &mut io::Cursor<&[u8]>) -> Result<Self> {
        let code: u16 = cursor.read_bytes_le()?;
        let namespace = (code >> 13) & 0b11;
        let kind = match namespace {
            0b00 => StatusKind::GenCp(parse_gencp_status(code)?),
            0b01 => StatusKind::Usb(parse_usb_status(code)?),
            0b10 => StatusKind::DeviceSpecific,
            _ => {
                return Err(Error::InvalidPacket(
                    format!("invalid ack status code {code:#X}").into(),
                ))
            }
        };
        Ok(Self { code, kind })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    GenCp(GenCpStatus),
    Usb(UsbSpecificStatus),
    DeviceSpecific,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenCpStatus {
    Success,
    NotImplemented,
    InvalidParameter,
    InvalidAddress,
    WriteProtect,
    BadAlignment,
    AccessDenied,
    Busy,
    Timeout,
    InvalidHeader,
    WrongConfig,
    GenericError,
}

fn parse_gencp_status(code: u16) -> Result<GenCpStatus> {
    Ok(match code {
        0x0000 => GenCpStatus::Success,
        0x8001 => GenCpStatus::NotImplemented,
        0x8002 => GenCpStatus::InvalidParameter,
        0x8003 => GenCpStatus::InvalidAddress,
        0x8004 => GenCpStatus::WriteProtect,
        0x8005 => GenCpStatus::BadAlignment,
        0x8006 => GenCpStatus::AccessDenied,
        0x8007 => GenCpStatus::Busy,
        0x800b => GenCpStatus::Timeout,
        0x800e => GenCpStatus::InvalidHeader,
        0x800f => GenCpStatus::WrongConfig,
        0x8fff => GenCpStatus::GenericError,
        _ => {
            return Err(Error::InvalidPacket(
                format!("unknown gencp status code {code:#X}").into(),
            ))
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsbSpecificStatus {
    ResendNotSupported,
    StreamEndpointHalted,
    PayloadSizeNotAligned,
    InvalidSiState,
    EventEndpointHalted,
}

fn parse_usb_status(code: u16) -> Result<UsbSpecificStatus> {
    Ok(match code {
        0xa001 => UsbSpecificStatus::ResendNotSupported,
        0xa002 => UsbSpecificStatus::StreamEndpointHalted,
        0xa003 => UsbSpecificStatus::PayloadSizeNotAligned,
        0xa004 => UsbSpecificStatus::InvalidSiState,
        0xa005 => UsbSpecificStatus::EventEndpointHalted,
        _ => {
            return Err(Error::InvalidPacket(
                format!("unknown usb3 vision status code {code:#X}").into(),
            ))
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScdKind {
    ReadMem,
    WriteMem,
    ReadMemStacked,
    WriteMemStacked,
    Pending,
}

impl ScdKind {
    fn parse(cursor: &mut io::Cursor<&[u8]>) -> Result<Self> {
        let id: u16 = cursor.read_bytes_le()?;
        Ok(match id {
            0x0801 => ScdKind::ReadMem,
            0x0803 => ScdKind::WriteMem,
            0x0805 => ScdKind::ReadMemStacked,
            0x0807 => ScdKind::WriteMemStacked,
            0x0809 => ScdKind::Pending,
            _ => {
                return Err(Error::InvalidPacket(
                    format!("unknown ack scd kind id {id:#X}").into(),
                ))
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadMem<'a> {
    pub data: &'a [u8],
}

impl<'a> ParseScd<'a> for ReadMem<'a> {
    fn parse(buf: &'a [u8], ccd: &AckCcd) -> Result<Self> {
        expect_kind(ccd, ScdKind::ReadMem)?;
        Ok(Self { data: buf })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteMem {
    pub length: u16,
}

impl<'a> ParseScd<'a> for WriteMem {
    fn parse(buf: &'a [u8], ccd: &AckCcd) -> Result<Self> {
        expect_kind(ccd, ScdKind::WriteMem)?;

        let mut cursor = io::Cursor::new(buf);
        let reserved: u16 = cursor.read_bytes_le()?;
        expect_zero_reserved(reserved)?;
        let length = cursor.read_bytes_le()?;
        Ok(Self { length })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    pub timeout: time::Duration,
}

impl<'a> ParseScd<'a> for Pending {
    fn parse(buf: &'a [u8], ccd: &AckCcd) -> Result<Self> {
        expect_kind(ccd, ScdKind::Pending)?;

        let mut cursor = io::Cursor::new(buf);
        let reserved: u16 = cursor.read_bytes_le()?;
        expect_zero_reserved(reserved)?;
        let timeout_ms: u16 = cursor.read_bytes_le()?;
        Ok(Self {
            timeout: time::Duration::from_millis(u64::from(timeout_ms)),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadMemStacked<'a> {
    pub data: &'a [u8],
}

impl<'a> ParseScd<'a> for ReadMemStacked<'a> {
    fn parse(buf: &'a [u8], ccd: &AckCcd) -> Result<Self> {
        expect_kind(ccd, ScdKind::ReadMemStacked)?;
        Ok(Self { data: buf })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteMemStacked {
    pub lengths: Vec<u16>,
}

impl<'a> ParseScd<'a> for WriteMemStacked {
    fn parse(buf: &'a [u8], ccd: &AckCcd) -> Result<Self> {
        expect_kind(ccd, ScdKind::WriteMemStacked)?;

        let mut cursor = io::Cursor::new(buf);
        let mut lengths = Vec::new();
        while (cursor.position() as usize) < buf.len() {
            let reserved: u16 = cursor.read_bytes_le()?;
            expect_zero_reserved(reserved)?;
            lengths.push(cursor.read_bytes_le()?);
        }
        Ok(Self { lengths })
    }
}

/// Ack scd for a vendor-defined or otherwise unrecognized command, kept as raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomAck<'a> {
    pub data: &'a [u8],
}

impl<'a> ParseScd<'a> for CustomAck<'a> {
    fn parse(buf: &'a [u8], _ccd: &AckCcd) -> Result<Self> {
        Ok(Self { data: buf })
    }
}

fn expect_kind(ccd: &AckCcd, expected: ScdKind) -> Result<()> {
    if ccd.scd_kind == expected {
        Ok(())
    } else {
        Err(Error::InvalidPacket(
            format!("invalid ack kind: expected `{:?}` but {:?}", expected, ccd.scd_kind).into(),
        ))
    }
}

fn expect_zero_reserved(reserved: u16) -> Result<()> {
    if reserved == 0 {
        Ok(())
    } else {
        Err(Error::InvalidPacket("reserved field of ack scd must be zero".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gencam_impl::bytes_io::WriteBytes;

    fn serialize_header(status: u16, scd_kind: u16, scd_len: u16, request_id: u16) -> Vec<u8> {
        let mut buf = vec![];
        buf.write_bytes_le(PREFIX_MAGIC).unwrap();
        buf.write_bytes_le(status).unwrap();
        buf.write_bytes_le(scd_kind).unwrap();
        buf.write_bytes_le(scd_len).unwrap();
        buf.write_bytes_le(request_id).unwrap();
        buf
    }

    #[test]
    fn read_mem_ack() {
        let mut buf = serialize_header(0x0000, 0x0801, 4, 1);
        buf.extend([0x01, 0x02, 0x03, 0x04]);

        let ack = AckPacket::parse(&buf).unwrap();
        assert_eq!(ack.scd_kind(), ScdKind::ReadMem);
        assert_eq!(ack.request_id(), 1);
        assert!(ack.status().is_success());

        let scd: ReadMem = ack.scd_as().unwrap();
        assert_eq!(scd.data, &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn write_mem_ack() {
        let buf = {
            let mut buf = serialize_header(0x0000, 0x0803, 4, 2);
            buf.write_bytes_le(0_u16).unwrap();
            buf.write_bytes_le(16_u16).unwrap();
            buf
        };

        let ack = AckPacket::parse(&buf).unwrap();
        let scd: WriteMem = ack.scd_as().unwrap();
        assert_eq!(scd.length, 16);
    }

    #[test]
    fn read_mem_stacked_ack() {
        let mut buf = serialize_header(0x0000, 0x0805, 8, 3);
        buf.extend([0x11, 0x12, 0x13, 0x14, 0x21, 0x22, 0x23, 0x24]);

        let ack = AckPacket::parse(&buf).unwrap();
        let scd: ReadMemStacked = ack.scd_as().unwrap();
        assert_eq!(scd.data, &[0x11, 0x12, 0x13, 0x14, 0x21, 0x22, 0x23, 0x24]);
    }

    #[test]
    fn write_mem_stacked_ack() {
        let buf = {
            let mut buf = serialize_header(0x0000, 0x0807, 8, 4);
            buf.write_bytes_le(0_u16).unwrap();
            buf.write_bytes_le(4_u16).unwrap();
            buf.write_bytes_le(0_u16).unwrap();
            buf.write_bytes_le(8_u16).unwrap();
            buf
        };

        let ack = AckPacket::parse(&buf).unwrap();
        let scd: WriteMemStacked = ack.scd_as().unwrap();
        assert_eq!(scd.lengths, vec![4, 8]);
    }

    #[test]
    fn pending_ack() {
        let buf = {
            let mut buf = serialize_header(0x0000, 0x0809, 4, 5);
            buf.write_bytes_le(0_u16).unwrap();
            buf.write_bytes_le(100_u16).unwrap();
            buf
        };

        let ack = AckPacket::parse(&buf).unwrap();
        let scd: Pending = ack.scd_as().unwrap();
        assert_eq!(scd.timeout, time::Duration::from_millis(100));
    }

    #[test]
    fn gencp_error_status() {
        let buf = serialize_header(0x8006, 0x0801, 0, 6);
        let ack = AckPacket::parse(&buf).unwrap();
        assert!(!ack.status().is_success());
        assert!(ack.status().is_fatal());
        assert_eq!(ack.status().kind(), StatusKind::GenCp(GenCpStatus::AccessDenied));
    }

    #[test]
    fn usb_error_status() {
        let buf = serialize_header(0xa002, 0x0801, 0, 7);
        let ack = AckPacket::parse(&buf).unwrap();
        assert_eq!(
            ack.status().kind(),
            StatusKind::Usb(UsbSpecificStatus::StreamEndpointHalted)
        );
    }
}
