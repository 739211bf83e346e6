//! Lock-free bridge between the scheduler and a device callback.
//!
//! The scheduler thread writes interleaved stereo frames into an `rtrb`
//! ring; the device callback drains it and counts what it played, which is
//! the playback position the scheduler sees.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use rtrb::{Consumer, Producer, RingBuffer};

use crate::io::sink::AudioSink;

/// Create a ring holding `frames` stereo frames.
pub fn ring(frames: usize) -> (RingSink, RingSource) {
    let (producer, consumer) = RingBuffer::new(frames * 2);
    let played = Arc::new(AtomicU64::new(0));

    (
        RingSink {
            producer,
            played: played.clone(),
        },
        RingSource {
            consumer,
            played,
            underruns: 0,
        },
    )
}

/// Scheduler side of the ring.
pub struct RingSink {
    producer: Producer<f32>,
    played: Arc<AtomicU64>,
}

impl AudioSink for RingSink {
    fn playback_position(&self) -> u64 {
        self.played.load(Ordering::Acquire)
    }

    fn available(&self) -> usize {
        self.producer.slots() / 2
    }

    fn write(&mut self, samples: &[f32]) -> usize {
        let frames = (samples.len() / 2).min(self.available());
        for &sample in &samples[..frames * 2] {
            if self.producer.push(sample).is_err() {
                break;
            }
        }
        frames
    }
}

/// Device side of the ring.
pub struct RingSource {
    consumer: Consumer<f32>,
    played: Arc<AtomicU64>,
    underruns: u64,
}

impl RingSource {
    /// Fill a device buffer of `channels` interleaved channels.
    ///
    /// Channel 0 gets left and channel 1 right; a mono device gets their
    /// average and any extra channels stay silent. Frames missing from the
    /// ring are written as silence and counted as an underrun.
    pub fn fill(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let mut played = 0;

        for frame in data.chunks_mut(channels) {
            frame.fill(0.0);
            if self.consumer.slots() < 2 {
                continue;
            }
            let (Ok(left), Ok(right)) = (self.consumer.pop(), self.consumer.pop()) else {
                continue;
            };
            played += 1;

            match frame {
                [mono] => *mono = 0.5 * (left + right),
                [l, r, ..] => {
                    *l = left;
                    *r = right;
                }
                [] => {}
            }
        }

        if played < data.len() / channels {
            self.underruns += 1;
        }
        self.played.fetch_add(played as u64, Ordering::Release);
    }

    /// Device callbacks that ran out of frames.
    pub fn underruns(&self) -> u64 {
        self.underruns
    }
}
