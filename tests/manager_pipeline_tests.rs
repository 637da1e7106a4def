// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-backend tests for probe routing through the trace manager.

mod helpers;

use helpers::{capturing_attach, read_output};
use simtrace::{
    HintBag, Level, LogHints, ProbeTarget, SignalHints, SimClock, TraceConfigBuilder,
    TraceManager, TraceValue,
};

#[test]
fn test_one_value_fans_out_to_both_backends() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("run.log");
    let vcd_path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new()
        .enable_log()
        .log_file(&log_path)
        .log_level(Level::Probe)
        .enable_signal(&vcd_path)
        .build();
    let clock = SimClock::new();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, clock.clone(), attach).unwrap();

    let hints = HintBag::new()
        .with_log(LogHints::new())
        .with_signal(SignalHints::new());
    manager
        .auto_probe("sim.queue.depth", &ProbeTarget::bounded_buffer(3, Some(16)), &hints)
        .unwrap();
    assert_eq!(record.borrow().bundles.len(), 1);
    assert_eq!(record.borrow().bundles[0].callbacks.len(), 2);

    clock.set(10.0);
    record.borrow_mut().fire(0, TraceValue::Int(5)).unwrap();
    manager.close().unwrap();

    assert!(read_output(&log_path).contains("sim.queue.depth: 5"));
    let vcd = read_output(&vcd_path);
    assert!(vcd.contains("#10"));
    assert!(vcd.contains("b101 !"));
}

#[test]
fn test_hint_presence_gates_each_backend() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("run.log");
    let config = TraceConfigBuilder::new()
        .enable_log()
        .log_file(&log_path)
        .log_level(Level::Probe)
        .enable_signal(dir.path().join("dump.vcd"))
        .build();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();

    // Log-only hints keep the signal backend out even though it is enabled
    // and its filter admits the scope.
    let hints = HintBag::new().with_log(LogHints::new());
    manager
        .auto_probe("sim.q.depth", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();

    assert_eq!(record.borrow().bundles.len(), 1);
    assert_eq!(record.borrow().bundles[0].callbacks.len(), 1);
    manager.close().unwrap();
}

#[test]
fn test_hints_for_disabled_backends_attach_nothing() {
    let config = TraceConfigBuilder::new().build();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();

    let hints = HintBag::new()
        .with_log(LogHints::new())
        .with_signal(SignalHints::new());
    manager
        .auto_probe("sim.q.depth", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();

    assert!(record.borrow().bundles.is_empty());
    manager.close().unwrap();
}

#[test]
fn test_per_backend_filters_apply_independently() {
    let dir = tempfile::tempdir().unwrap();
    let config = TraceConfigBuilder::new()
        .enable_log()
        .log_file(dir.path().join("run.log"))
        .log_level(Level::Probe)
        .log_include("sim\\.net")
        .enable_signal(dir.path().join("dump.vcd"))
        .signal_include("sim\\.cpu")
        .build();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();

    let hints = HintBag::new()
        .with_log(LogHints::new())
        .with_signal(SignalHints::new());
    manager
        .auto_probe("sim.net.backlog", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();
    manager
        .auto_probe("sim.cpu.load", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();

    // One backend each; neither scope reaches both.
    let record = record.borrow();
    assert_eq!(record.bundles.len(), 2);
    assert_eq!(record.bundles[0].scope, "sim.net.backlog");
    assert_eq!(record.bundles[0].callbacks.len(), 1);
    assert_eq!(record.bundles[1].scope, "sim.cpu.load");
    assert_eq!(record.bundles[1].callbacks.len(), 1);
}

#[test]
fn test_drop_flushes_open_backends() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("run.log");
    let vcd_path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new()
        .enable_log()
        .log_file(&log_path)
        .enable_signal(&vcd_path)
        .build();
    let (_, attach) = capturing_attach();
    {
        let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();
        manager.log_fn("sim", Level::Info).emit("abandoned").unwrap();
    }

    assert!(read_output(&log_path).contains("abandoned"));
    assert!(read_output(&vcd_path).contains("$enddefinitions"));
}

#[test]
fn test_malformed_pattern_fails_only_when_enabled() {
    let dir = tempfile::tempdir().unwrap();

    let disabled = TraceConfigBuilder::new().log_include("sim.(queue").build();
    let (_, attach) = capturing_attach();
    assert!(TraceManager::new(&disabled, SimClock::new(), attach).is_ok());

    let enabled = TraceConfigBuilder::new()
        .enable_log()
        .log_file(dir.path().join("run.log"))
        .log_include("sim.(queue")
        .build();
    let (_, attach) = capturing_attach();
    let err = TraceManager::new(&enabled, SimClock::new(), attach).unwrap_err();
    assert!(matches!(err, simtrace::TraceError::Config(_)));
}
