/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Transport-agnostic buffer queue shared by the GigE and USB3 Vision stream
//! receive threads.
//!
//! A [`Buffer`] moves from the input queue (empty, owned by the receive
//! thread) to the output queue (filled, owned by the consumer) exactly once
//! per delivered frame. Lock order is always input queue before output
//! queue, matching the order a receive thread acquires them in: pop an empty
//! buffer from input, fill it, push it to output.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Outcome recorded on a [`Buffer`] once its receive attempt finishes.
///
/// A buffer with a received leader transitions `Filling` →
/// `{Success|MissingPackets|SizeMismatch|Aborted}` exactly once; `Timeout` is
/// recorded directly against the stats counters when no leader arrives at
/// all, without a buffer ever being claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferStatus {
    /// The buffer is owned by the receive thread and being written into.
    /// Never recorded as a completion outcome — only a buffer's in-flight
    /// state between claiming it and pushing it to the output queue.
    Filling,
    /// Every expected packet/transfer for the frame arrived and passed
    /// validation.
    Success,
    /// The trailer arrived (or a new leader preempted the frame) before
    /// every expected packet/transfer did.
    MissingPackets,
    /// The declared or received payload size didn't match what the
    /// transport negotiated.
    SizeMismatch,
    /// The receive thread was stopped before the frame completed.
    Aborted,
    /// No data arrived for the frame within the configured timeout.
    Timeout,
    /// Data arrived but failed a check not covered by the other variants.
    Unknown,
}

/// One contiguous region of a [`Buffer`]'s payload, as delivered by a single
/// packet (GVSP) or bulk transfer (U3V). Multipart/multizone GVSP payloads
/// fill more than one part per buffer; everything else fills exactly one.
#[derive(Debug, Clone)]
pub struct PayloadPart {
    pub part_id: u32,
    pub offset: usize,
    pub size: usize,
}

/// A single frame's worth of payload storage, recycled between the input and
/// output queues for the lifetime of a streaming session.
#[derive(Debug, Clone)]
pub struct Buffer {
    pub id: u64,
    pub status: BufferStatus,
    pub data: Vec<u8>,
    pub parts: Vec<PayloadPart>,
    pub valid_payload_size: usize,
    pub timestamp: Duration,
}

impl Buffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            id: 0,
            status: BufferStatus::Unknown,
            data: vec![0; capacity],
            parts: Vec::new(),
            valid_payload_size: 0,
            timestamp: Duration::default(),
        }
    }

    /// Reset bookkeeping fields while keeping the underlying allocation, so
    /// the buffer can be handed back to the receive thread for reuse.
    pub fn recycle(&mut self) {
        self.status = BufferStatus::Unknown;
        self.parts.clear();
        self.valid_payload_size = 0;
        self.timestamp = Duration::default();
    }
}

/// Lock-free counters exposed to callers without taking the queue locks.
#[derive(Debug, Default)]
pub struct StreamStats {
    pub n_completed_buffers: AtomicU64,
    pub n_failures: AtomicU64,
    pub n_underruns: AtomicU64,
    pub n_aborted: AtomicU64,
    pub n_transferred_bytes: AtomicU64,
    pub n_ignored_bytes: AtomicU64,
}

impl StreamStats {
    #[must_use]
    pub fn snapshot(&self) -> StreamStatsSnapshot {
        StreamStatsSnapshot {
            n_completed_buffers: self.n_completed_buffers.load(Ordering::Relaxed),
            n_failures: self.n_failures.load(Ordering::Relaxed),
            n_underruns: self.n_underruns.load(Ordering::Relaxed),
            n_aborted: self.n_aborted.load(Ordering::Relaxed),
            n_transferred_bytes: self.n_transferred_bytes.load(Ordering::Relaxed),
            n_ignored_bytes: self.n_ignored_bytes.load(Ordering::Relaxed),
        }
    }

    pub fn record(&self, status: BufferStatus, transferred: u64, ignored: u64) {
        match status {
            // A buffer in `Filling` hasn't completed yet and is never pushed to the
            // output queue in that state; nothing to count.
            BufferStatus::Filling => {}
            BufferStatus::Success => {
                self.n_completed_buffers.fetch_add(1, Ordering::Relaxed);
            }
            BufferStatus::Aborted => {
                self.n_aborted.fetch_add(1, Ordering::Relaxed);
            }
            BufferStatus::Timeout => {
                self.n_underruns.fetch_add(1, Ordering::Relaxed);
            }
            BufferStatus::MissingPackets | BufferStatus::SizeMismatch | BufferStatus::Unknown => {
                self.n_failures.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.n_transferred_bytes.fetch_add(transferred, Ordering::Relaxed);
        self.n_ignored_bytes.fetch_add(ignored, Ordering::Relaxed);
    }
}

/// Plain-value copy of [`StreamStats`] for display/reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamStatsSnapshot {
    pub n_completed_buffers: u64,
    pub n_failures: u64,
    pub n_underruns: u64,
    pub n_aborted: u64,
    pub n_transferred_bytes: u64,
    pub n_ignored_bytes: u64,
}

/// Input/output FIFO pair backing a streaming session, plus shared
/// statistics. The receive thread pops from `input`, fills a buffer, and
/// pushes it onto `output`; the consumer does the reverse once it's done
/// with a delivered buffer.
#[derive(Default)]
pub struct StreamQueues {
    input: Mutex<VecDeque<Buffer>>,
    output: Mutex<VecDeque<Buffer>>,
    pub stats: StreamStats,
}

impl StreamQueues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the input queue with `count` empty buffers of `capacity` bytes.
    pub fn preallocate(&self, count: usize, capacity: usize) {
        let mut input = self.input.lock().unwrap();
        for _ in 0..count {
            input.push_back(Buffer::new(capacity));
        }
    }

    pub fn push_input(&self, buf: Buffer) {
        self.input.lock().unwrap().push_back(buf);
    }

    pub fn pop_input(&self) -> Option<Buffer> {
        self.input.lock().unwrap().pop_front()
    }

    pub fn push_output(&self, buf: Buffer) {
        let (transferred, ignored) = match buf.status {
            BufferStatus::Success => (buf.valid_payload_size as u64, 0),
            _ => (0, buf.valid_payload_size as u64),
        };
        self.stats.record(buf.status, transferred, ignored);
        self.output.lock().unwrap().push_back(buf);
    }

    pub fn pop_output(&self) -> Option<Buffer> {
        self.output.lock().unwrap().pop_front()
    }

    #[must_use]
    pub fn input_len(&self) -> usize {
        self.input.lock().unwrap().len()
    }

    #[must_use]
    pub fn output_len(&self) -> usize {
        self.output.lock().unwrap().len()
    }

    /// Record a backpressure underrun: a receive thread needed a free buffer from `input` but
    /// found none available. Counted separately from `n_failures`, which is reserved for buffers
    /// that were claimed but failed to complete.
    pub fn record_underrun(&self) {
        self.stats.n_underruns.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preallocate_fills_input_queue() {
        let queues = StreamQueues::new();
        queues.preallocate(4, 16);
        assert_eq!(queues.input_len(), 4);
        assert_eq!(queues.output_len(), 0);
    }

    #[test]
    fn completed_buffer_updates_stats_and_moves_to_output() {
        let queues = StreamQueues::new();
        let mut buf = Buffer::new(8);
        buf.status = BufferStatus::Success;
        buf.valid_payload_size = 8;
        queues.push_output(buf);

        assert_eq!(queues.output_len(), 1);
        let snapshot = queues.stats.snapshot();
        assert_eq!(snapshot.n_completed_buffers, 1);
        assert_eq!(snapshot.n_transferred_bytes, 8);
    }

    #[test]
    fn recycled_buffer_can_return_to_input_queue() {
        let queues = StreamQueues::new();
        let mut buf = queues.pop_input();
        assert!(buf.is_none());

        queues.preallocate(1, 4);
        let mut buf = queues.pop_input().unwrap();
        buf.status = BufferStatus::MissingPackets;
        buf.parts.push(PayloadPart { part_id: 0, offset: 0, size: 4 });
        queues.push_output(buf);

        let mut buf = queues.pop_output().unwrap();
        buf.recycle();
        queues.push_input(buf);
        assert_eq!(queues.input_len(), 1);
    }
}
