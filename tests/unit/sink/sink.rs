use super::*;
use crate::{config::ImportConfig, pipeline::import::import_csv};

fn outcome() -> ImportOutcome {
    let cfg = ImportConfig {
        display_name: Some("take".to_string()),
        target_rate: Some(24.0),
        ..ImportConfig::default()
    };
    import_csv("jawOpen,fps\n0.1,30\n0.4,30\n".as_bytes(), &cfg).unwrap()
}

#[test]
fn json_sink_writes_parseable_outcome() {
    let mut sink = JsonSink::new(Vec::new());
    sink.accept(&outcome()).unwrap();
    let bytes = sink.into_inner();
    let back: ImportOutcome = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(back.track.name, "take_30");
    assert_eq!(back.track.channel_names(), vec!["jawOpen"]);
    let baked = back.baked.unwrap();
    assert_eq!(baked.name, "take_24");
    let frames: Vec<f64> = baked.samples().map(|s| s.frame).collect();
    assert_eq!(frames, vec![0.8, 1.6]);
}

#[test]
fn memory_sink_keeps_last_outcome() {
    let mut sink = MemorySink::new();
    assert!(sink.last().is_none());
    sink.accept(&outcome()).unwrap();
    assert_eq!(sink.last().unwrap().track.name, "take_30");
    assert!(sink.take().is_some());
    assert!(sink.last().is_none());
}
