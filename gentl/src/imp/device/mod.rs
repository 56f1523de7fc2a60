use std::convert::TryFrom;

use crate::GenTlResult;

pub(crate) mod u3v;

mod u3v_genapi;

/// The current accessibility of the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub(crate) enum DeviceAccessStatus {
    /// The current availability of the device is unknown.
    Unknown = 0,

    /// The device is available to be opened for Read/Write access but it is currently not opened.
    ReadWrite = 1,

    /// The device is available to be opened for Read access but is currently not opened.
    ReadOnly = 2,

    /// The device is seen by the producer but is not available for access because it is not
    /// reachable.
    NoAccess = 3,

    /// The device is already owned/opened by another entity.
    Busy = 4,

    /// The device is already owned/opened by this GenTL Producer with RW access.
    OpenReadWrite = 5,

    /// The device is already owned/opened by this GenTL Producer with RO access.
    OpenReadOnly = 6,
}

/// This enum defines different modes how a device is to be opened with the `IFOpenDevice`
/// function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeviceAccessFlag {
    /// Opens the device read only. All Port functions can only read from the device.
    ReadOnly,
    /// Opens the device in a way that other hosts/processes can have read only access to
    /// the device. Device access level is read/write for this process.
    Control,
    /// Open the device in a way that only this host/process can have access to the device.
    /// Device access level is read/write for this process.
    Exclusive,
}

impl DeviceAccessStatus {
    pub(crate) fn is_opened(self) -> bool {
        use DeviceAccessStatus::*;

        matches!(self, OpenReadOnly | OpenReadWrite)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::ReadWrite => "ReadWrite",
            Self::ReadOnly => "ReadOnly",
            Self::NoAccess => "NoAccess",
            Self::Busy => "Busy",
            Self::OpenReadWrite => "OpenReadWrite",
            Self::OpenReadOnly => "OpenReadOnly",
        }
    }
}

impl TryFrom<i32> for DeviceAccessStatus {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::ReadWrite),
            2 => Ok(Self::ReadOnly),
            3 => Ok(Self::NoAccess),
            4 => Ok(Self::Busy),
            5 => Ok(Self::OpenReadWrite),
            6 => Ok(Self::OpenReadOnly),
            _ => Err(()),
        }
    }
}

pub(crate) trait Device {
    fn open(&mut self, access_flag: DeviceAccessFlag) -> GenTlResult<()>;

    fn close(&mut self) -> GenTlResult<()>;

    fn device_id(&self) -> &str;
}
