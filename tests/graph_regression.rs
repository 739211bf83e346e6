use ugen_dsp::{
    graph::{build, Graph, Registry, Target, UGenDef},
    io::MemorySink,
    synth::Synth,
    EngineConfig,
};

fn graph(json: &str, config: EngineConfig) -> Graph {
    let def = UGenDef::from_json(json).unwrap();
    build(&def, &Registry::default(), config).unwrap()
}

fn render(graph: &mut Graph, frames: usize) -> Vec<f32> {
    let mut dest = vec![0.0; frames * 2];
    graph.write_output(&mut dest, frames, 0).unwrap();
    dest
}

#[test]
fn renders_demo_tone_within_range() {
    let mut graph = graph(include_str!("../demos/tone.json"), EngineConfig::default());
    let samples = render(&mut graph, 1024);

    assert!(samples.iter().any(|s| s.abs() > 0.0));
    assert!(samples.iter().all(|s| s.abs() <= 0.25 + 1e-6));
}

#[test]
fn demos_build_with_default_registry() {
    for json in [
        include_str!("../demos/tone.json"),
        include_str!("../demos/vibrato.json"),
        include_str!("../demos/stereo.json"),
        include_str!("../demos/crackle.json"),
    ] {
        let config = EngineConfig::from_json(include_str!("../demos/config.json")).unwrap();
        let mut graph = graph(json, config);
        let samples = render(&mut graph, 256);
        assert!(samples.iter().all(|s| s.is_finite()));
    }
}

#[test]
fn shared_oscillator_advances_once_per_block() {
    // Both channels read the same node; if it ran twice per block the right
    // channel would lag a block behind the left
    let shared = r#"{
        "type": "out",
        "inputs": { "source": { "type": "stereo", "inputs": {
            "left":  { "id": "osc", "type": "sinOsc", "inputs": { "freq": 3 } },
            "right": { "ref": "osc" }
        } } }
    }"#;
    let single = r#"{
        "type": "out",
        "inputs": { "source": { "type": "sinOsc", "inputs": { "freq": 3 } } }
    }"#;

    let config = EngineConfig::default().with_sample_rate(1000);
    let mut shared = graph(shared, config.clone());
    let mut single = graph(single, config);

    for _ in 0..4 {
        let a = render(&mut shared, 100);
        let b = render(&mut single, 100);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-6);
        }
    }
}

#[test]
fn block_size_does_not_change_output() {
    let json = include_str!("../demos/vibrato.json");
    let config = EngineConfig::default().with_sample_rate(8000);

    let mut whole = graph(json, config.clone());
    let expected = render(&mut whole, 512);

    let mut pieces = graph(json, config);
    let mut actual = vec![0.0; 1024];
    let mut offset = 0;
    for frames in [1, 63, 64, 128, 256] {
        pieces.write_output(&mut actual, frames, offset * 2).unwrap();
        offset += frames;
    }

    for (x, y) in actual.iter().zip(&expected) {
        assert!((x - y).abs() < 1e-4);
    }
}

#[test]
fn seeded_dust_is_reproducible() {
    let json = include_str!("../demos/crackle.json");
    let config = EngineConfig::default().with_seed(7);

    let a = render(&mut graph(json, config.clone()), 4096);
    let b = render(&mut graph(json, config), 4096);
    assert_eq!(a, b);
    assert!(a.iter().any(|&s| s != 0.0));
}

#[test]
fn live_rewiring_between_pulls() {
    let mut graph = graph(include_str!("../demos/tone.json"), EngineConfig::default());
    render(&mut graph, 64);

    graph.set_input("carrier.mul", 0.0).unwrap();
    assert!(matches!(graph.input("carrier.mul"), Ok(Target::Scalar(v)) if v == 0.0));
    assert!(render(&mut graph, 64).iter().all(|&s| s == 0.0));

    let lfo = graph
        .attach(
            &UGenDef::new("sinOsc").id("tremolo").input("freq", 4.0).input("mul", 0.5),
            &Registry::default(),
        )
        .unwrap();
    graph.set_input("carrier.mul", lfo).unwrap();
    assert!(render(&mut graph, 2048).iter().any(|&s| s != 0.0));
}

#[test]
fn synth_streams_timed_playback() {
    let config = EngineConfig {
        sample_rate: 8000,
        min_latency_ms: 50,
        ..EngineConfig::default()
    };
    let mut synth = Synth::new(graph(include_str!("../demos/stereo.json"), config));
    let mut sink = MemorySink::new();
    synth.play(Some(0.25));

    while synth.is_playing() {
        synth.fill(&mut sink).unwrap();
        sink.advance(200);
    }

    assert_eq!(sink.frames(), 2000);
    assert!(sink.samples().iter().all(|s| s.abs() <= 1.0));
}
