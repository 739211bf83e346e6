//! Player - loads a definition and streams it to the default device

use std::{fs, path::Path, thread, time::Duration};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use ugen_dsp::{
    graph::{build, Registry, UGenDef},
    io::{ring, AudioSink},
    synth::Synth,
    EngineConfig,
};

pub struct Player {
    def: UGenDef,
    config: EngineConfig,
}

impl Player {
    pub fn load(definition: &Path, config: Option<&Path>) -> EyreResult<Self> {
        let text = fs::read_to_string(definition)
            .wrap_err_with(|| format!("failed to read {}", definition.display()))?;
        let def = UGenDef::from_json(&text)
            .wrap_err_with(|| format!("failed to parse {}", definition.display()))?;

        let config = match config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                EngineConfig::from_json(&text)
                    .wrap_err_with(|| format!("invalid config {}", path.display()))?
            }
            None => EngineConfig::default(),
        };

        Ok(Self { def, config })
    }

    /// Build the graph at the device rate and play it (takes over until done).
    pub fn run(self, duration: Option<f64>) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let stream_config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let channels = stream_config.channels() as usize;
        let config = self.config.with_sample_rate(stream_config.sample_rate().0);
        let write_interval = Duration::from_millis(config.write_interval_ms);
        let ring_frames = (config.pre_buffer_frames() as usize).max(config.control_rate) * 2;

        let graph = build(&self.def, &Registry::default(), config.clone())
            .wrap_err("failed to build graph")?;

        println!("=== ugen ===");
        println!("Sample rate: {} Hz", config.sample_rate);
        println!("Channels: {}", channels);
        println!("Nodes: {}", graph.len());
        match duration {
            Some(secs) => println!("Playing for {secs} s..."),
            None => println!("Playing... Press Ctrl+C to stop"),
        }
        println!();

        let (mut sink, mut source) = ring(ring_frames);
        let mut synth = Synth::new(graph);
        synth.play(duration);
        synth.fill(&mut sink)?;

        let stream = device.build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| source.fill(data, channels),
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;
        stream.play()?;

        while synth.is_playing() {
            thread::sleep(write_interval);
            synth.fill(&mut sink)?;
        }

        // Let the device drain what is still queued
        while sink.playback_position() < synth.frames_written() {
            thread::sleep(write_interval);
        }

        println!("Done ({} frames)", synth.frames_written());
        Ok(())
    }
}
