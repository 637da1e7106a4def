// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the waveform pipeline, driven through the manager.

mod helpers;

use helpers::{capturing_attach, read_output};
use simtrace::{
    HintBag, ProbeTarget, SignalHints, SimClock, TimeUnit, Timescale, TraceConfigBuilder,
    TraceManager, TraceValue,
};

#[test]
fn test_gauge_dump_structure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new()
        .timescale(Timescale::new(1, TimeUnit::Ns).unwrap())
        .enable_signal(&path)
        .build();
    let clock = SimClock::new();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, clock.clone(), attach).unwrap();

    let hints = HintBag::new().with_signal(SignalHints::new());
    manager
        .auto_probe("sim.tank.level", &ProbeTarget::level_gauge(3i64), &hints)
        .unwrap();

    clock.set(10.0);
    record.borrow_mut().fire(0, TraceValue::Int(5)).unwrap();
    manager.close().unwrap();

    let out = read_output(&path);
    let declarations_end = out.find("$enddefinitions").unwrap();
    let header = &out[..declarations_end];
    assert!(header.contains("$timescale 1 ns $end"));
    assert!(header.contains("$scope module sim $end"));
    assert!(header.contains("$scope module tank $end"));
    assert!(header.contains("$var integer 64 ! level $end"));

    let body = &out[declarations_end..];
    assert!(body.contains("$dumpvars"));
    assert!(body.contains("b11 !"));
    assert!(body.contains("#10"));
    assert!(body.contains("b101 !"));
}

#[test]
fn test_sibling_signals_share_parent_scope() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new().enable_signal(&path).build();
    let (_, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();

    let hints = HintBag::new().with_signal(SignalHints::new());
    manager
        .auto_probe("sim.cpu.active", &ProbeTarget::counted_resource(0, Some(1)), &hints)
        .unwrap();
    manager
        .auto_probe("sim.cpu.queue", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();
    manager.close().unwrap();

    let out = read_output(&path);
    assert_eq!(out.matches("$scope module cpu $end").count(), 1);
    assert!(out.contains("$var integer 64 ! active $end"));
    assert!(out.contains("$var integer 64 \" queue $end"));
}

#[test]
fn test_real_gauge_changes_use_real_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new().enable_signal(&path).build();
    let clock = SimClock::new();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, clock.clone(), attach).unwrap();

    let hints = HintBag::new().with_signal(SignalHints::new());
    manager
        .auto_probe("sim.tank.level", &ProbeTarget::level_gauge(0.0), &hints)
        .unwrap();

    clock.set(2.0);
    record.borrow_mut().fire(0, TraceValue::Real(7.5)).unwrap();
    manager.close().unwrap();

    let out = read_output(&path);
    assert!(out.contains("$var real 64 ! level $end"));
    assert!(out.contains("r7.5 !"));
}

#[test]
fn test_scope_filter_limits_dumped_signals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new()
        .enable_signal(&path)
        .signal_include("sim\\.net")
        .build();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();

    let hints = HintBag::new().with_signal(SignalHints::new());
    manager
        .auto_probe("sim.cpu.load", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();
    manager
        .auto_probe("sim.net.backlog", &ProbeTarget::bounded_buffer(2, None), &hints)
        .unwrap();
    manager.close().unwrap();

    assert_eq!(record.borrow().bundles.len(), 1);
    let out = read_output(&path);
    assert!(!out.contains("load"));
    assert!(out.contains("$var integer 64 ! backlog $end"));
}

#[test]
fn test_out_of_order_change_rejected_when_checked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new().enable_signal(&path).build();
    let clock = SimClock::new();
    let (record, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, clock.clone(), attach).unwrap();

    let hints = HintBag::new().with_signal(SignalHints::new());
    manager
        .auto_probe("sim.q.depth", &ProbeTarget::bounded_buffer(0, None), &hints)
        .unwrap();

    clock.set(10.0);
    record.borrow_mut().fire(0, TraceValue::Int(1)).unwrap();
    clock.set(4.0);
    let err = record.borrow_mut().fire(0, TraceValue::Int(2)).unwrap_err();
    assert!(matches!(err, simtrace::TraceError::Writer(_)));
    manager.close().unwrap();
}

#[test]
fn test_empty_dump_still_gets_header_on_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.vcd");
    let config = TraceConfigBuilder::new().enable_signal(&path).build();
    let (_, attach) = capturing_attach();
    let mut manager = TraceManager::new(&config, SimClock::new(), attach).unwrap();
    manager.close().unwrap();

    let out = read_output(&path);
    assert!(out.contains("$timescale"));
    assert!(out.contains("$enddefinitions"));
}
