// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for simtrace integration tests
//!
//! Provides a capturing probe-attachment collaborator so scenarios can drive
//! attached callback bundles by hand, standing in for the external
//! change-detection mechanism.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use simtrace::{HintBag, ProbeAttach, ProbeCallback, ProbeTarget, TraceError, TraceValue};

/// One attached callback bundle.
pub struct Bundle {
    pub scope: String,
    pub callbacks: Vec<ProbeCallback>,
}

/// Probe-attachment collaborator that captures bundles for inspection.
///
/// Real attachment machinery invokes a bundle whenever its target changes;
/// tests call [`CapturingAttach::fire`] to simulate exactly that.
#[derive(Default)]
pub struct CapturingAttach {
    pub bundles: Vec<Bundle>,
}

impl CapturingAttach {
    /// Invoke every callback of bundle `index`, in registration order, with
    /// the observed value.
    pub fn fire(&mut self, index: usize, value: TraceValue) -> Result<(), TraceError> {
        for callback in &mut self.bundles[index].callbacks {
            callback(value)?;
        }
        Ok(())
    }
}

impl ProbeAttach for CapturingAttach {
    fn attach(
        &mut self,
        scope: &str,
        _target: &ProbeTarget,
        callbacks: Vec<ProbeCallback>,
        _hints: &HintBag,
    ) {
        self.bundles.push(Bundle {
            scope: scope.to_string(),
            callbacks,
        });
    }
}

/// Install a tracing subscriber so backend diagnostics surface under
/// `--nocapture`. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

/// A shared capturing attach: one handle for the manager, one for the test.
pub fn capturing_attach() -> (Rc<RefCell<CapturingAttach>>, Box<dyn ProbeAttach>) {
    init_tracing();
    let attach = Rc::new(RefCell::new(CapturingAttach::default()));
    (Rc::clone(&attach), Box::new(attach))
}

/// Read a whole output file to a string.
pub fn read_output(path: &std::path::Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
