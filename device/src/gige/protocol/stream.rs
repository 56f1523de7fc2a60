/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! This module provides parser for GVSP stream protocol.
use std::{convert::TryInto, io};

use gencam_impl::{bit_op::BitOp, bytes_io::ReadBytes};

use crate::{
    gige::{Error, Result},
    PixelFormat,
};

use super::PacketStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketHeader {
    pub status: PacketStatus,
    pub ei_flag: bool,
    pub packet_type: PacketType,
    pub block_id: u64,
    pub packet_id: u32,
    pub stream_flag: StreamFlag,
}

impl PacketHeader {
    pub fn parse(cursor: &mut io::Cursor<&[u8]>) -> Result<Self> {
        let status = PacketStatus::parse(cursor)?;
        let bid_sflag: u16 = cursor.read_bytes_be()?;
        let ei_ptype_pid: u32 = cursor.read_bytes_be()?;
        let ei_flag = (ei_ptype_pid >> 31) == 1;
        let packet_type = PacketType::parse((ei_ptype_pid >> 24) as u8)?;

        let (block_id, packet_id, stream_flag) = if ei_flag {
            (
                cursor.read_bytes_be()?,
                cursor.read_bytes_be()?,
                StreamFlag(bid_sflag),
            )
        } else {
            (bid_sflag as u64, ei_ptype_pid & 0xffff_ff, StreamFlag(0))
        };

        Ok(Self {
            status,
            ei_flag,
            packet_type,
            block_id,
            packet_id,
            stream_flag,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    Leader,
    Trailer,
    GenericPayload,
    H264Payload,
    MultiZonePayload,
}

impl PacketType {
    fn parse(raw: u8) -> Result<Self> {
        Ok(match raw & 0b1111 {
            1 => Self::Leader,
            2 => Self::Trailer,
            3 => Self::GenericPayload,
            5 => Self::H264Payload,
            6 => Self::MultiZonePayload,
            other => {
                return Err(Error::InvalidPacket(
                    format!("invalid GVSP packet type: {}", other).into(),
                ))
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFlag(u16);

impl StreamFlag {
    pub fn is_resend_range_error(self) -> bool {
        self.0.is_set(13)
    }

    pub fn is_previous_block_dropped(self) -> bool {
        self.0.is_set(14)
    }

    pub fn is_packet_resend(self) -> bool {
        self.0.is_set(15)
    }
}

/// Payload content of a GVSP data packet.
///
/// This is distinct from [`PacketType`]: [`PacketType`] names the three packet roles
/// (leader/trailer/payload) that bracket a block's data, while [`PayloadType`] names what kind
/// of image/data the leader describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadType(u16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadTypeKind {
    Image,
    RawData,
    File,
    ChunkData,
    Jpeg,
    Jpeg2000,
    H264,
    MultiZone,
    MultiPart,
    DeviceSpecific(u16),
}

impl PayloadType {
    pub fn kind(self) -> PayloadTypeKind {
        match self.0 & 0x00ff {
            1 => PayloadTypeKind::Image,
            2 => PayloadTypeKind::RawData,
            3 => PayloadTypeKind::File,
            4 => PayloadTypeKind::ChunkData,
            6 => PayloadTypeKind::Jpeg,
            7 => PayloadTypeKind::Jpeg2000,
            8 => PayloadTypeKind::H264,
            9 => PayloadTypeKind::MultiZone,
            0x0a => PayloadTypeKind::MultiPart,
            _ => PayloadTypeKind::DeviceSpecific(self.0),
        }
    }

    pub fn is_extended_chunk(self) -> bool {
        self.0.is_set(14)
    }

    fn parse(cursor: &mut io::Cursor<&[u8]>) -> Result<Self> {
        cursor.read_bytes_be().map(Self).map_err(Into::into)
    }
}

/// Leader packet of a GVSP block, containing the generic leader prefix plus a borrowed view
/// over the payload-type-specific part that follows it.
///
/// # Example
/// ```no_run
/// use gencam_device::gige::protocol::stream::{Leader, PayloadTypeKind, ImageLeader};
///
/// let buf: Vec<u8> = Vec::new();
/// let leader = Leader::parse(&buf).unwrap();
/// match leader.payload_type().kind() {
///     PayloadTypeKind::Image => {
///         let image_leader: ImageLeader = leader.specific_leader_as().unwrap();
///     }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Leader<'a> {
    field_id: u8,
    field_count: u8,
    payload_type: PayloadType,
    raw_specific_leader: &'a [u8],
}

impl<'a> Leader<'a> {
    /// Parse the generic leader prefix. The payload-type-specific part is left unparsed until
    /// [`Self::specific_leader_as`] is called with a concrete type.
    pub fn parse(buf: &'a (impl AsRef<[u8]> + ?Sized)) -> Result<Self> {
        let mut cursor = io::Cursor::new(buf.as_ref());

        let field: u8 = cursor.read_bytes_be()?;
        let field_id = field >> 4;
        let field_count = field & 0x0f;
        let _reserved: u8 = cursor.read_bytes_be()?;
        let payload_type = PayloadType::parse(&mut cursor)?;

        let raw_specific_leader = &cursor.get_ref()[cursor.position() as usize..];

        Ok(Self {
            field_id,
            field_count,
            payload_type,
            raw_specific_leader,
        })
    }

    /// Interlace field id the leader belongs to, when the device reports interlaced video.
    #[must_use]
    pub fn field_id(&self) -> u8 {
        self.field_id
    }

    /// Total number of interlace fields making up one frame.
    #[must_use]
    pub fn field_count(&self) -> u8 {
        self.field_count
    }

    /// Type of the payload the leader describes.
    #[must_use]
    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    /// Parse the payload-type-specific part of the leader.
    pub fn specific_leader_as<T: SpecificLeader>(&self) -> Result<T> {
        T::from_bytes(self.raw_specific_leader)
    }
}

/// Types that are a payload-type-specific leader part.
pub trait SpecificLeader {
    fn from_bytes(buf: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

/// Specific leader part of an `Image` or `ImageExtendedChunk` payload.
pub struct ImageLeader {
    timestamp: u64,
    pixel_format: PixelFormat,
    width: u32,
    height: u32,
    x_offset: u32,
    y_offset: u32,
    x_padding: u16,
    y_padding: u16,
}

impl ImageLeader {
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    #[must_use]
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn x_offset(&self) -> u32 {
        self.x_offset
    }

    #[must_use]
    pub fn y_offset(&self) -> u32 {
        self.y_offset
    }

    #[must_use]
    pub fn x_padding(&self) -> u16 {
        self.x_padding
    }

    #[must_use]
    pub fn y_padding(&self) -> u16 {
        self.y_padding
    }
}

impl SpecificLeader for ImageLeader {
    fn from_bytes(buf: &[u8]) -> Result<Self> {
        let mut cursor = io::Cursor::new(buf);
        let timestamp = cursor.read_bytes_be()?;
        let pixel_format = cursor
            .read_bytes_be::<u32>()?
            .try_into()
            .map_err(|e: String| Error::InvalidPacket(e.into()))?;
        let width = cursor.read_bytes_be()?;
        let height = cursor.read_bytes_be()?;
        let x_offset = cursor.read_bytes_be()?;
        let y_offset = cursor.read_bytes_be()?;
        let x_padding = cursor.read_bytes_be()?;
        let y_padding = cursor.read_bytes_be()?;

        Ok(Self {
            timestamp,
            pixel_format,
            width,
            height,
            x_offset,
            y_offset,
            x_padding,
            y_padding,
        })
    }
}

/// One part's geometry within a `MultiPart`/`MultiZone` leader.
#[derive(Debug, Clone, Copy)]
pub struct PartInfo {
    part_id: u16,
    data_type: u16,
    pixel_format: u32,
    width: u32,
    height: u32,
    x_offset: u32,
    y_offset: u32,
    x_padding: u16,
    y_padding: u16,
}

impl PartInfo {
    #[must_use]
    pub fn part_id(&self) -> u16 {
        self.part_id
    }

    #[must_use]
    pub fn data_type(&self) -> u16 {
        self.data_type
    }

    #[must_use]
    pub fn pixel_format(&self) -> u32 {
        self.pixel_format
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn x_offset(&self) -> u32 {
        self.x_offset
    }

    #[must_use]
    pub fn y_offset(&self) -> u32 {
        self.y_offset
    }
}

/// Specific leader part of a `MultiPart`/`MultiZone` payload: a timestamp followed by one
/// [`PartInfo`] block per part declared by the device.
pub struct MultiPartLeader {
    timestamp: u64,
    parts: Vec<PartInfo>,
}

impl MultiPartLeader {
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    #[must_use]
    pub fn parts(&self) -> &[PartInfo] {
        &self.parts
    }
}

impl SpecificLeader for MultiPartLeader {
    fn from_bytes(buf: &[u8]) -> Result<Self> {
        let mut cursor = io::Cursor::new(buf);
        let timestamp = cursor.read_bytes_be()?;
        let part_count: u16 = cursor.read_bytes_be()?;
        let _reserved: u16 = cursor.read_bytes_be()?;

        let mut parts = Vec::with_capacity(part_count as usize);
        for part_id in 0..part_count {
            let data_type: u16 = cursor.read_bytes_be()?;
            let _reserved: u16 = cursor.read_bytes_be()?;
            let pixel_format = cursor.read_bytes_be()?;
            let width = cursor.read_bytes_be()?;
            let height = cursor.read_bytes_be()?;
            let x_offset = cursor.read_bytes_be()?;
            let y_offset = cursor.read_bytes_be()?;
            let x_padding = cursor.read_bytes_be()?;
            let y_padding = cursor.read_bytes_be()?;

            parts.push(PartInfo {
                part_id,
                data_type,
                pixel_format,
                width,
                height,
                x_offset,
                y_offset,
                x_padding,
                y_padding,
            });
        }

        Ok(Self { timestamp, parts })
    }
}

/// Trailer packet of a GVSP block, declaring the actually-transferred size of the payload that
/// preceded it.
#[derive(Debug, Clone)]
pub struct Trailer<'a> {
    payload_type: PayloadType,
    raw_specific_trailer: &'a [u8],
}

impl<'a> Trailer<'a> {
    pub fn parse(buf: &'a (impl AsRef<[u8]> + ?Sized)) -> Result<Self> {
        let mut cursor = io::Cursor::new(buf.as_ref());

        let _reserved: u16 = cursor.read_bytes_be()?;
        let payload_type = PayloadType::parse(&mut cursor)?;

        let raw_specific_trailer = &cursor.get_ref()[cursor.position() as usize..];

        Ok(Self {
            payload_type,
            raw_specific_trailer,
        })
    }

    #[must_use]
    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    pub fn specific_trailer_as<T: SpecificTrailer>(&self) -> Result<T> {
        T::from_bytes(self.raw_specific_trailer)
    }
}

/// Types that are a payload-type-specific trailer part.
pub trait SpecificTrailer {
    fn from_bytes(buf: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

/// Specific trailer part of an `Image`/`ImageExtendedChunk` payload.
pub struct ImageTrailer {
    actual_height: u32,
}

impl ImageTrailer {
    /// The actual height of the payload image.
    ///
    /// Some GigE Vision cameras support variable frame size; in that case the height of the
    /// image may be less than or equal to the height reported in the leader.
    #[must_use]
    pub fn actual_height(&self) -> u32 {
        self.actual_height
    }
}

impl SpecificTrailer for ImageTrailer {
    fn from_bytes(mut buf: &[u8]) -> Result<Self> {
        let actual_height = buf.read_bytes_be()?;
        Ok(Self { actual_height })
    }
}

/// Specific trailer part of a `MultiPart`/`MultiZone` payload: one actual-size entry per part.
pub struct MultiPartTrailer {
    part_sizes: Vec<u32>,
}

impl MultiPartTrailer {
    #[must_use]
    pub fn part_sizes(&self) -> &[u32] {
        &self.part_sizes
    }
}

impl SpecificTrailer for MultiPartTrailer {
    fn from_bytes(buf: &[u8]) -> Result<Self> {
        let mut cursor = io::Cursor::new(buf);
        let part_count: u16 = cursor.read_bytes_be()?;
        let _reserved: u16 = cursor.read_bytes_be()?;

        let mut part_sizes = Vec::with_capacity(part_count as usize);
        for _ in 0..part_count {
            part_sizes.push(cursor.read_bytes_be()?);
        }

        Ok(Self { part_sizes })
    }
}

/// Specific trailer part with no additional fields, used by payload types (`RawData`, `File`,
/// `ChunkData`, ...) that don't report anything beyond the generic trailer.
pub struct GenericTrailer;

impl SpecificTrailer for GenericTrailer {
    fn from_bytes(_buf: &[u8]) -> Result<Self> {
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gencam_impl::bytes_io::WriteBytes;

    fn generic_leader_bytes(payload_type: u16) -> Vec<u8> {
        let mut buf = vec![];
        // Field id/count.
        buf.write_bytes_be(0_u8).unwrap();
        // Reserved.
        buf.write_bytes_be(0_u8).unwrap();
        // Payload type.
        buf.write_bytes_be(payload_type).unwrap();
        buf
    }

    fn generic_trailer_bytes(payload_type: u16) -> Vec<u8> {
        let mut buf = vec![];
        // Reserved.
        buf.write_bytes_be(0_u16).unwrap();
        // Payload type.
        buf.write_bytes_be(payload_type).unwrap();
        buf
    }

    #[test]
    fn test_parse_image_leader() {
        let mut buf = generic_leader_bytes(0x0001);
        buf.write_bytes_be(100_u64).unwrap();
        buf.write_bytes_be::<u32>(PixelFormat::Mono8s.into())
            .unwrap();
        buf.write_bytes_be(3840_u32).unwrap();
        buf.write_bytes_be(2160_u32).unwrap();
        buf.write_bytes_be(0_u32).unwrap();
        buf.write_bytes_be(0_u32).unwrap();
        buf.write_bytes_be(0_u16).unwrap();
        buf.write_bytes_be(0_u16).unwrap();

        let leader = Leader::parse(&buf).unwrap();
        assert_eq!(leader.payload_type().kind(), PayloadTypeKind::Image);
        let image_leader: ImageLeader = leader.specific_leader_as().unwrap();
        assert_eq!(image_leader.timestamp(), 100);
        assert_eq!(image_leader.pixel_format(), PixelFormat::Mono8s);
        assert_eq!(image_leader.width(), 3840);
        assert_eq!(image_leader.height(), 2160);
    }

    #[test]
    fn test_parse_multipart_leader() {
        let mut buf = generic_leader_bytes(0x000a);
        buf.write_bytes_be(100_u64).unwrap();
        // Part count.
        buf.write_bytes_be(2_u16).unwrap();
        buf.write_bytes_be(0_u16).unwrap();
        for _ in 0..2 {
            buf.write_bytes_be(1_u16).unwrap(); // data_type
            buf.write_bytes_be(0_u16).unwrap(); // reserved
            buf.write_bytes_be::<u32>(PixelFormat::Mono8s.into())
                .unwrap();
            buf.write_bytes_be(640_u32).unwrap();
            buf.write_bytes_be(480_u32).unwrap();
            buf.write_bytes_be(0_u32).unwrap();
            buf.write_bytes_be(0_u32).unwrap();
            buf.write_bytes_be(0_u16).unwrap();
            buf.write_bytes_be(0_u16).unwrap();
        }

        let leader = Leader::parse(&buf).unwrap();
        assert_eq!(leader.payload_type().kind(), PayloadTypeKind::MultiPart);
        let multi: MultiPartLeader = leader.specific_leader_as().unwrap();
        assert_eq!(multi.parts().len(), 2);
        assert_eq!(multi.parts()[0].width(), 640);
        assert_eq!(multi.parts()[1].part_id(), 1);
    }

    #[test]
    fn test_parse_image_trailer() {
        let mut buf = generic_trailer_bytes(0x0001);
        buf.write_bytes_be(2160_u32).unwrap();

        let trailer = Trailer::parse(&buf).unwrap();
        assert_eq!(trailer.payload_type().kind(), PayloadTypeKind::Image);
        let specific: ImageTrailer = trailer.specific_trailer_as().unwrap();
        assert_eq!(specific.actual_height(), 2160);
    }
}
