/// Destination for interleaved stereo frames.
///
/// The scheduler asks how far playback has progressed and how much room is
/// left, renders that many frames, and hands them over.
pub trait AudioSink {
    /// Frames the consumer has played so far.
    fn playback_position(&self) -> u64;

    /// Frames that can be written without blocking.
    fn available(&self) -> usize;

    /// Write interleaved stereo `samples`, returning the frames accepted.
    fn write(&mut self, samples: &[f32]) -> usize;
}

/// Sink that keeps everything written to it.
///
/// Playback is simulated with [`advance`](MemorySink::advance); nothing plays
/// on its own.
#[derive(Debug, Default)]
pub struct MemorySink {
    samples: Vec<f32>,
    position: u64,
    capacity: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that holds at most `frames` unplayed frames.
    pub fn bounded(frames: usize) -> Self {
        Self {
            capacity: Some(frames),
            ..Self::default()
        }
    }

    /// Mark `frames` more frames as played, capped at what was written.
    pub fn advance(&mut self, frames: u64) {
        self.position = (self.position + frames).min(self.frames() as u64);
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    pub fn left(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().step_by(2).copied()
    }

    pub fn right(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().skip(1).step_by(2).copied()
    }
}

impl AudioSink for MemorySink {
    fn playback_position(&self) -> u64 {
        self.position
    }

    fn available(&self) -> usize {
        match self.capacity {
            Some(capacity) => {
                let queued = self.frames() - self.position as usize;
                capacity.saturating_sub(queued)
            }
            None => usize::MAX,
        }
    }

    fn write(&mut self, samples: &[f32]) -> usize {
        let frames = (samples.len() / 2).min(self.available());
        self.samples.extend_from_slice(&samples[..frames * 2]);
        frames
    }
}
