/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! This module contains low level streaming implementation for `GigE Vision` devices.

use std::{
    io,
    net::{Ipv4Addr, SocketAddrV4, UdpSocket},
    sync::{mpsc, mpsc::TryRecvError, Arc, Mutex},
    time::Duration,
};

use gencam_device::gige::protocol::stream as gvsp;
use gencam_device::stream::{Buffer, BufferStatus, PayloadPart, StreamQueues, StreamStatsSnapshot};
use tracing::{error, info, warn};

use crate::{
    camera::PayloadStream,
    payload::{ImageInfo, Payload, PayloadSender, PayloadType},
    DeviceControl, StreamError, StreamResult,
};

macro_rules! unwrap_or_poisoned {
    ($res:expr) => {{
        $res.map_err(|cause| {
            let err = StreamError::Poisoned(cause.to_string().into());
            error!(?err);
            err
        })
    }};
}

/// Parameters controlling how the host receives `GVSP` packets.
///
/// Mirrors [`crate::u3v::stream_handle::StreamParams`]'s role for the USB3 Vision transport:
/// the control handle fills this in from the device's stream channel registers before
/// [`StreamHandle::start_streaming_loop`] is called.
#[derive(Debug, Clone)]
pub struct StreamParams {
    /// Host-side UDP port the device should push packets to. `0` lets the OS pick an ephemeral
    /// port once the socket is opened; the resolved port is written back here.
    pub host_port: u16,

    /// Host-side address the device should push packets to.
    pub host_addr: Ipv4Addr,

    /// Negotiated packet size, in bytes, including the `GVSP` header.
    pub packet_size: u32,

    /// How long to wait for the next packet of an in-flight frame before giving up on it.
    pub timeout: Duration,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            host_port: 0,
            host_addr: Ipv4Addr::UNSPECIFIED,
            packet_size: 1500,
            timeout: Duration::from_millis(500),
        }
    }
}

/// Number of buffers kept circulating between the input and output queues of a streaming
/// session. Capacity grows on demand via `Vec::extend_from_slice`, so this only bounds how many
/// frames can be in flight between the receive thread and the consumer at once.
const STREAM_BUFFER_COUNT: usize = 4;

/// This type is used to receive stream packets from a `GigE Vision` device over `GVSP`.
pub struct StreamHandle {
    sock: Arc<Mutex<Option<UdpSocket>>>,
    params: StreamParams,
    cancellation_tx: Option<mpsc::SyncSender<()>>,
    queues: Arc<StreamQueues>,
}

impl StreamHandle {
    #[must_use]
    pub(super) fn new(params: StreamParams) -> Self {
        Self {
            sock: Arc::new(Mutex::new(None)),
            params,
            cancellation_tx: None,
            queues: Arc::new(StreamQueues::new()),
        }
    }

    /// Returns params.
    #[must_use]
    pub fn params(&self) -> &StreamParams {
        &self.params
    }

    /// Returns mutable params.
    pub fn params_mut(&mut self) -> &mut StreamParams {
        &mut self.params
    }

    /// Local address the socket ended up bound to, once [`Self::open`] has run.
    pub fn local_addr(&self) -> StreamResult<Option<SocketAddrV4>> {
        let guard = unwrap_or_poisoned!(self.sock.lock())?;
        Ok(match &*guard {
            Some(sock) => match sock.local_addr()? {
                std::net::SocketAddr::V4(addr) => Some(addr),
                std::net::SocketAddr::V6(_) => None,
            },
            None => None,
        })
    }
}

impl PayloadStream for StreamHandle {
    fn open(&mut self) -> StreamResult<()> {
        let mut guard = unwrap_or_poisoned!(self.sock.lock())?;
        if guard.is_some() {
            return Ok(());
        }

        let bind_addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, self.params.host_port);
        let sock = UdpSocket::bind(bind_addr)?;
        sock.set_read_timeout(Some(self.params.timeout))?;

        if let std::net::SocketAddr::V4(addr) = sock.local_addr()? {
            self.params.host_port = addr.port();
        }

        *guard = Some(sock);
        Ok(())
    }

    fn close(&mut self) -> StreamResult<()> {
        if self.is_loop_running() {
            self.stop_streaming_loop()?;
        }
        unwrap_or_poisoned!(self.sock.lock())?.take();
        Ok(())
    }

    fn start_streaming_loop(
        &mut self,
        sender: PayloadSender,
        _ctrl: &mut dyn DeviceControl,
    ) -> StreamResult<()> {
        if self.is_loop_running() {
            return Err(StreamError::InStreaming);
        }

        let sock = {
            let guard = unwrap_or_poisoned!(self.sock.lock())?;
            guard
                .as_ref()
                .ok_or(StreamError::Disconnected)?
                .try_clone()?
        };

        if self.queues.input_len() == 0 && self.queues.output_len() == 0 {
            self.queues.preallocate(STREAM_BUFFER_COUNT, 0);
        }

        let (cancellation_tx, cancellation_rx) = mpsc::sync_channel(0);
        self.cancellation_tx = Some(cancellation_tx);

        let strm_loop = StreamingLoop {
            sock,
            packet_size: self.params.packet_size as usize,
            sender,
            cancellation_rx,
            queues: self.queues.clone(),
        };
        std::thread::spawn(|| {
            strm_loop.run();
        });

        info!("start streaming loop successfully");
        Ok(())
    }

    fn stop_streaming_loop(&mut self) -> StreamResult<()> {
        if self.is_loop_running() {
            let cancellation_tx = self.cancellation_tx.take().unwrap();
            cancellation_tx.send(()).map_err(|_| {
                StreamError::Poisoned("failed to send cancellation signal to streaming loop".into())
            })?;
        }
        info!("stop streaming loop successfully");
        Ok(())
    }

    fn is_loop_running(&self) -> bool {
        self.cancellation_tx.is_some()
    }

    fn stats(&self) -> StreamStatsSnapshot {
        self.queues.stats.snapshot()
    }
}

impl Drop for StreamHandle {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            error!(?e);
        }
    }
}

impl From<StreamHandle> for Box<dyn PayloadStream> {
    fn from(strm: StreamHandle) -> Self {
        Box::new(strm)
    }
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> Self {
        StreamError::Io(err.into())
    }
}

/// State of the single in-flight frame the receive thread is currently assembling.
///
/// Only one frame is ever open at a time: a leader for a new `block_id` preempts whatever frame
/// was previously in flight. Packet loss is detected by gaps in `packet_id`; this implementation
/// does not issue `GVSP` resend requests, so a dropped packet always costs the whole frame.
/// `missing_packets` and `size_mismatch` are tracked independently so the completed frame reports
/// the specific outcome `§4.4.1` asks for rather than a single pass/fail flag.
struct InFlightFrame {
    block_id: u64,
    leader: Vec<u8>,
    buffer: Buffer,
    next_offset: usize,
    per_packet_len: usize,
    missing_packets: bool,
    size_mismatch: bool,
}

struct StreamingLoop {
    sock: UdpSocket,
    packet_size: usize,
    sender: PayloadSender,
    cancellation_rx: mpsc::Receiver<()>,
    queues: Arc<StreamQueues>,
}

impl StreamingLoop {
    fn run(self) {
        let mut recv_buf = vec![0u8; self.packet_size.max(1500)];
        let mut frame: Option<InFlightFrame> = None;

        loop {
            match self.cancellation_rx.try_recv() {
                Ok(()) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            let n = match self.sock.recv(&mut recv_buf) {
                Ok(n) => n,
                Err(e)
                    if e.kind() == io::ErrorKind::WouldBlock
                        || e.kind() == io::ErrorKind::TimedOut =>
                {
                    continue;
                }
                Err(e) => {
                    warn!(?e, "gvsp socket read failed");
                    self.sender.try_send(Err(e.into())).ok();
                    continue;
                }
            };

            if let Err(e) = self.handle_packet(&recv_buf[..n], &mut frame) {
                warn!(?e, "failed to process gvsp packet");
            }
        }
    }

    fn handle_packet(&self, buf: &[u8], frame: &mut Option<InFlightFrame>) -> StreamResult<()> {
        let mut cursor = io::Cursor::new(buf);
        let header = gvsp::PacketHeader::parse(&mut cursor)
            .map_err(|e| StreamError::InvalidPayload(format!("{}", e).into()))?;
        let body = &buf[cursor.position() as usize..];

        match header.packet_type {
            gvsp::PacketType::Leader => {
                if let Some(prev) = frame.take() {
                    self.finalize_preempted(prev);
                }
                let Some(mut buffer) = self.queues.pop_input() else {
                    self.queues.record_underrun();
                    warn!(
                        block_id = header.block_id,
                        "no free buffer in input queue, dropping frame"
                    );
                    return Ok(());
                };
                buffer.id = header.block_id;
                buffer.data.clear();
                buffer.parts.clear();
                *frame = Some(InFlightFrame {
                    block_id: header.block_id,
                    leader: body.to_vec(),
                    buffer,
                    next_offset: 0,
                    per_packet_len: 0,
                    missing_packets: false,
                    size_mismatch: false,
                });
                Ok(())
            }
            gvsp::PacketType::GenericPayload
            | gvsp::PacketType::H264Payload
            | gvsp::PacketType::MultiZonePayload => {
                let Some(current) = frame else {
                    return Ok(());
                };
                if current.block_id != header.block_id || current.missing_packets {
                    return Ok(());
                }
                if current.per_packet_len == 0 {
                    // Stride is derived from the negotiated GVSP packet size, not from
                    // whichever packet happens to arrive first: a short final packet (or
                    // reordering) must not corrupt the expected-offset computation below.
                    let header_len = buf.len() - body.len();
                    current.per_packet_len = self.packet_size.saturating_sub(header_len).max(1);
                }
                if body.len() > current.per_packet_len {
                    warn!(
                        block_id = current.block_id,
                        packet_id = header.packet_id,
                        "gvsp payload packet larger than negotiated packet size"
                    );
                    current.size_mismatch = true;
                }
                let expected_offset =
                    (header.packet_id.saturating_sub(1)) as usize * current.per_packet_len;
                if current.next_offset != expected_offset {
                    warn!(
                        block_id = current.block_id,
                        packet_id = header.packet_id,
                        "gap in gvsp payload sequence, frame will report missing packets"
                    );
                    current.missing_packets = true;
                    return Ok(());
                }
                current.buffer.data.extend_from_slice(body);
                current.next_offset += body.len();
                Ok(())
            }
            gvsp::PacketType::Trailer => {
                let Some(mut current) = frame.take() else {
                    return Ok(());
                };
                if current.block_id != header.block_id {
                    *frame = Some(current);
                    return Ok(());
                }

                let block_id = current.block_id;
                let valid_payload_size = current.buffer.data.len();
                current.buffer.valid_payload_size = valid_payload_size;

                if current.missing_packets || current.size_mismatch {
                    let status = if current.missing_packets {
                        BufferStatus::MissingPackets
                    } else {
                        BufferStatus::SizeMismatch
                    };
                    current.buffer.status = status;
                    self.queues.push_output(current.buffer);
                    self.recycle_output();
                    self.sender
                        .try_send(Err(StreamError::InvalidPayload(
                            format!("frame {} incomplete: {:?}", block_id, status).into(),
                        )))
                        .ok();
                    return Ok(());
                }

                let trailer = gvsp::Trailer::parse(body)
                    .map_err(|e| StreamError::InvalidPayload(format!("{}", e).into()))?;
                let leader = gvsp::Leader::parse(&current.leader)
                    .map_err(|e| StreamError::InvalidPayload(format!("{}", e).into()))?;

                let payload_bytes = std::mem::take(&mut current.buffer.data);
                let result = PayloadBuilder {
                    block_id,
                    leader,
                    trailer,
                    payload: payload_bytes,
                }
                .build();

                current.buffer.status = match &result {
                    Ok(_) => BufferStatus::Success,
                    Err(_) => BufferStatus::Unknown,
                };
                if current.buffer.status == BufferStatus::Success {
                    current.buffer.parts.push(PayloadPart {
                        part_id: 0,
                        offset: 0,
                        size: valid_payload_size,
                    });
                }
                self.queues.push_output(current.buffer);
                self.recycle_output();

                match result {
                    Ok(payload) => {
                        if let Err(err) = self.sender.try_send(Ok(payload)) {
                            warn!(?err);
                        }
                    }
                    Err(err) => {
                        self.sender.try_send(Err(err)).ok();
                    }
                }
                Ok(())
            }
        }
    }

    /// Complete a frame that was still being assembled when a new leader arrived, pushing its
    /// buffer to the output queue as `MissingPackets` (counted in `n_failures`) instead of
    /// silently dropping it. `n_aborted` is reserved for buffers still open at shutdown.
    fn finalize_preempted(&self, mut prev: InFlightFrame) {
        warn!(block_id = prev.block_id, "frame preempted by new leader");
        prev.buffer.status = BufferStatus::MissingPackets;
        prev.buffer.valid_payload_size = prev.buffer.data.len();
        let block_id = prev.block_id;
        self.queues.push_output(prev.buffer);
        self.recycle_output();
        self.sender
            .try_send(Err(StreamError::InvalidPayload(
                format!("frame {} preempted before completion", block_id).into(),
            )))
            .ok();
    }

    /// Pop the buffer just pushed to the output queue back off, recycle it, and return it to the
    /// input queue. The receive thread is this queue pair's only consumer, so the buffer popped
    /// here is always the one just pushed.
    fn recycle_output(&self) {
        if let Some(mut buf) = self.queues.pop_output() {
            buf.recycle();
            self.queues.push_input(buf);
        }
    }
}

struct PayloadBuilder<'a> {
    block_id: u64,
    leader: gvsp::Leader<'a>,
    trailer: gvsp::Trailer<'a>,
    payload: Vec<u8>,
}

impl<'a> PayloadBuilder<'a> {
    fn build(self) -> StreamResult<Payload> {
        use gencam_device::gige::protocol::stream::PayloadTypeKind;

        let valid_payload_size = self.payload.len();
        let is_extended_chunk = self.leader.payload_type().is_extended_chunk();

        match self.leader.payload_type().kind() {
            PayloadTypeKind::Image if !is_extended_chunk => {
                self.build_image_payload(valid_payload_size)
            }
            _ => Ok(Payload {
                id: self.block_id,
                payload_type: PayloadType::Chunk,
                image_info: None,
                payload: self.payload,
                valid_payload_size,
                timestamp: Duration::default(),
            }),
        }
    }

    fn build_image_payload(self, valid_payload_size: usize) -> StreamResult<Payload> {
        let leader: gvsp::ImageLeader = self
            .leader
            .specific_leader_as()
            .map_err(|e| StreamError::InvalidPayload(format!("{}", e).into()))?;
        let trailer: gvsp::ImageTrailer = self
            .trailer
            .specific_trailer_as()
            .map_err(|e| StreamError::InvalidPayload(format!("{}", e).into()))?;

        let image_info = Some(ImageInfo {
            width: leader.width() as usize,
            height: trailer.actual_height() as usize,
            x_offset: leader.x_offset() as usize,
            y_offset: leader.y_offset() as usize,
            pixel_format: leader.pixel_format(),
            image_size: valid_payload_size,
        });

        Ok(Payload {
            id: self.block_id,
            payload_type: PayloadType::Image,
            image_info,
            payload: self.payload,
            valid_payload_size,
            timestamp: Duration::from_micros(leader.timestamp()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_params_default_binds_ephemeral_port() {
        let params = StreamParams::default();
        assert_eq!(params.host_port, 0);
        assert_eq!(params.host_addr, Ipv4Addr::UNSPECIFIED);
    }
}
