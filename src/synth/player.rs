use crate::{
    error::PullError,
    graph::Graph,
    io::sink::AudioSink,
};

/*
Playback Scheduling
===================

The scheduler keeps a fixed amount of audio queued ahead of the device.
Every fill it works out how far behind that target it is:

    needed = playback_position + pre_buffer - written

    written   ├──────────────────────────────┤
    played    ├────────────────┤
                               └─ pre_buffer ─┘   nothing to do

    played    ├──────────────────────┤
                                     └─ pre_buffer ─┘
    written   ├──────────────────────────────┤←────→ needed

The missing frames are rendered in chunks of `control_rate` frames (at most
`MAX_BLOCK_SIZE`), each chunk written at its own offset of one interleaved
buffer, and the buffer goes to the sink in one write. A timed play stops
once the requested number of frames has been written.
*/

/// Drives a graph's output stage into an [`AudioSink`].
pub struct Synth {
    graph: Graph,
    scratch: Vec<f32>,
    written: u64,
    end: Option<u64>,
    playing: bool,
}

impl Synth {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            scratch: Vec::new(),
            written: 0,
            end: None,
            playing: false,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The graph, for addressing and rewiring between fills.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Start playing, for `duration_secs` seconds or until stopped.
    pub fn play(&mut self, duration_secs: Option<f64>) {
        let sample_rate = self.graph.sample_rate() as f64;
        self.end = duration_secs.map(|secs| self.written + (secs.max(0.0) * sample_rate).round() as u64);
        self.playing = self.end != Some(self.written);
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Frames handed to sinks so far.
    pub fn frames_written(&self) -> u64 {
        self.written
    }

    /// Top up `sink` to the pre-buffer target, returning the frames written.
    pub fn fill(&mut self, sink: &mut dyn AudioSink) -> Result<usize, PullError> {
        if !self.playing {
            return Ok(0);
        }

        let config = self.graph.config();
        let chunk = config.control_rate.min(crate::MAX_BLOCK_SIZE);
        let target = sink.playback_position() + config.pre_buffer_frames();

        let mut needed = target.saturating_sub(self.written);
        if let Some(end) = self.end {
            needed = needed.min(end.saturating_sub(self.written));
        }
        let needed = (needed as usize).min(sink.available());
        if needed == 0 {
            return Ok(0);
        }

        self.scratch.clear();
        self.scratch.resize(needed * 2, 0.0);

        let mut frame = 0;
        while frame < needed {
            let frames = chunk.min(needed - frame);
            self.graph.write_output(&mut self.scratch, frames, frame * 2)?;
            frame += frames;
        }

        let accepted = sink.write(&self.scratch);
        self.written += accepted as u64;

        if self.end.is_some_and(|end| self.written >= end) {
            self.playing = false;
        }
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::EngineConfig,
        graph::{build, Registry, UGenDef},
        io::MemorySink,
    };

    fn synth(def: UGenDef) -> Synth {
        let config = EngineConfig {
            sample_rate: 1000,
            control_rate: 16,
            min_latency_ms: 100,
            ..EngineConfig::default()
        };
        Synth::new(build(&def, &Registry::default(), config).unwrap())
    }

    fn tone() -> Synth {
        synth(UGenDef::new("out").input("source", UGenDef::new("sinOsc").input("freq", 10.0)))
    }

    #[test]
    fn test_idle_until_played() {
        let mut synth = tone();
        let mut sink = MemorySink::new();
        assert_eq!(synth.fill(&mut sink).unwrap(), 0);
        assert!(!synth.is_playing());
    }

    #[test]
    fn test_fill_tops_up_pre_buffer() {
        let mut synth = tone();
        let mut sink = MemorySink::new();
        synth.play(None);

        // 100 ms at 1 kHz
        assert_eq!(synth.fill(&mut sink).unwrap(), 100);
        assert_eq!(synth.fill(&mut sink).unwrap(), 0);

        sink.advance(30);
        assert_eq!(synth.fill(&mut sink).unwrap(), 30);
        assert_eq!(sink.frames(), 130);
    }

    #[test]
    fn test_chunks_match_one_continuous_render() {
        // 100 frames = six 16-frame chunks and a 4-frame tail
        let mut chunked = tone();
        let mut sink = MemorySink::new();
        chunked.play(None);
        chunked.fill(&mut sink).unwrap();

        let def = UGenDef::new("out").input("source", UGenDef::new("sinOsc").input("freq", 10.0));
        let config = EngineConfig::default().with_sample_rate(1000);
        let mut graph = build(&def, &Registry::default(), config).unwrap();
        let mut expected = vec![0.0; 200];
        graph.write_output(&mut expected, 100, 0).unwrap();

        for (a, b) in sink.samples().iter().zip(&expected) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_timed_play_stops() {
        let mut synth = tone();
        let mut sink = MemorySink::new();
        synth.play(Some(0.05));

        assert_eq!(synth.fill(&mut sink).unwrap(), 50);
        assert!(!synth.is_playing());
        assert_eq!(synth.fill(&mut sink).unwrap(), 0);
    }

    #[test]
    fn test_bounded_sink_limits_render() {
        let mut synth = tone();
        let mut sink = MemorySink::bounded(40);
        synth.play(None);

        assert_eq!(synth.fill(&mut sink).unwrap(), 40);
        assert_eq!(synth.frames_written(), 40);
    }

    #[test]
    fn test_stop_halts_fills() {
        let mut synth = tone();
        let mut sink = MemorySink::new();
        synth.play(None);
        synth.stop();
        assert_eq!(synth.fill(&mut sink).unwrap(), 0);
    }

    #[test]
    fn test_graph_without_output_stage_fails() {
        let mut synth = synth(UGenDef::new("sinOsc").input("freq", 10.0));
        let mut sink = MemorySink::new();
        synth.play(None);
        assert!(matches!(synth.fill(&mut sink), Err(PullError::NotAnOutputStage)));
    }
}
