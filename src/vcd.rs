// SPDX-FileCopyrightText: 2026 simtrace contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Value-change-dump (VCD) waveform writer.
//!
//! One signal record per unique (parent scope, leaf name) pair, each with a
//! kind, bit width, and initial value. Declarations are buffered until the
//! first recorded change, at which point the header (timescale, nested scope
//! tree, variable declarations, and the initial `$dumpvars` block) is
//! flushed; changes then stream with time-scaled timestamps.
//!
//! When value checking is enabled the writer rejects out-of-order timestamps
//! and integer values wider than their declared signal.

use std::collections::HashSet;
use std::io::Write;

use crate::errors::WriterError;
use crate::timescale::Timescale;
use crate::value::TraceValue;

/// Variable type names admitted by the dump format, beyond the three the
/// tracing layer infers.
const KNOWN_VAR_TYPES: &[&str] = &[
    "event",
    "integer",
    "parameter",
    "real",
    "realtime",
    "reg",
    "supply0",
    "supply1",
    "time",
    "tri",
    "tri0",
    "tri1",
    "triand",
    "trior",
    "trireg",
    "wand",
    "wire",
    "wor",
];

/// Kind of a registered signal.
///
/// `Integer`, `Real`, and `Event` are the kinds the tracing layer infers
/// from target shapes; `Other` covers the rest of the dump format's
/// vocabulary and always requires an explicit width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarKind {
    /// Whole-number signal, dumped in binary vector form
    Integer,
    /// Floating signal
    Real,
    /// Momentary event marker
    Event,
    /// Any other recognized variable type (e.g. `wire`, `reg`)
    Other(String),
}

impl VarKind {
    /// Parse a kind name against the writer's vocabulary.
    ///
    /// Returns `None` for names the dump format does not admit.
    pub fn parse(name: &str) -> Option<VarKind> {
        match name {
            "integer" => Some(VarKind::Integer),
            "real" => Some(VarKind::Real),
            "event" => Some(VarKind::Event),
            other if KNOWN_VAR_TYPES.contains(&other) => Some(VarKind::Other(other.to_string())),
            _ => None,
        }
    }

    /// Keyword written into `$var` declarations.
    pub fn keyword(&self) -> &str {
        match self {
            VarKind::Integer => "integer",
            VarKind::Real => "real",
            VarKind::Event => "event",
            VarKind::Other(name) => name,
        }
    }

    /// Default bit width, for kinds that have one.
    pub fn default_width(&self) -> Option<u32> {
        match self {
            VarKind::Integer | VarKind::Real => Some(64),
            VarKind::Event => Some(1),
            VarKind::Other(_) => None,
        }
    }
}

/// Handle on one registered signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarId(usize);

#[derive(Debug)]
struct VarRecord {
    parent: String,
    name: String,
    kind: VarKind,
    width: u32,
    ident: String,
    init: TraceValue,
}

/// Streaming VCD writer over any byte sink.
///
/// # Examples
///
/// ```rust,ignore
/// let file = File::create("dump.vcd")?;
/// let mut writer = VcdWriter::new(BufWriter::new(file), timescale, true);
/// let depth = writer.register("sim.queue", "depth", VarKind::Integer, 64,
///                             TraceValue::Int(0), None)?;
/// writer.change(depth, 10, TraceValue::Int(5))?;
/// writer.finish()?;
/// ```
#[derive(Debug)]
pub struct VcdWriter<W: Write> {
    out: W,
    timescale: Timescale,
    check_values: bool,
    vars: Vec<VarRecord>,
    keys: HashSet<(String, String)>,
    header_written: bool,
    finished: bool,
    current_time: Option<u64>,
}

impl<W: Write> VcdWriter<W> {
    /// Create a writer over `out`.
    ///
    /// With `check_values`, out-of-order timestamps and over-wide integer
    /// values are rejected instead of written.
    pub fn new(out: W, timescale: Timescale, check_values: bool) -> Self {
        VcdWriter {
            out,
            timescale,
            check_values,
            vars: Vec::new(),
            keys: HashSet::new(),
            header_written: false,
            finished: false,
            current_time: None,
        }
    }

    /// Register one signal under (parent scope, leaf name).
    ///
    /// Each key may be registered exactly once, and only before the first
    /// change is recorded. When `ident` is `None` a short identifier code is
    /// generated.
    pub fn register(
        &mut self,
        parent: &str,
        name: &str,
        kind: VarKind,
        width: u32,
        init: TraceValue,
        ident: Option<String>,
    ) -> Result<VarId, WriterError> {
        let dotted = join_scope(parent, name);
        if self.header_written {
            return Err(WriterError::registration_closed(dotted));
        }
        if !self.keys.insert((parent.to_string(), name.to_string())) {
            return Err(WriterError::duplicate_signal(dotted));
        }
        if self.check_values {
            self.check_fits(name, width, &kind, init)?;
        }
        let ident = ident.unwrap_or_else(|| make_ident(self.vars.len()));
        self.vars.push(VarRecord {
            parent: parent.to_string(),
            name: name.to_string(),
            kind,
            width,
            ident,
            init,
        });
        Ok(VarId(self.vars.len() - 1))
    }

    /// Record a timestamped value change for a registered signal.
    ///
    /// The first change flushes the header and closes registration.
    pub fn change(&mut self, var: VarId, time: u64, value: TraceValue) -> Result<(), WriterError> {
        if self.check_values {
            let record = &self.vars[var.0];
            if let Some(last) = self.current_time {
                if time < last {
                    return Err(WriterError::OutOfOrder {
                        name: record.name.clone(),
                        time,
                        last,
                    });
                }
            }
            let (name, width, kind) = (record.name.clone(), record.width, record.kind.clone());
            self.check_fits(&name, width, &kind, value)?;
        }
        if !self.header_written {
            self.write_header()?;
        }
        if self.current_time != Some(time) {
            writeln!(self.out, "#{time}")?;
            self.current_time = Some(time);
        }
        let line = encode_change(&self.vars[var.0], value);
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Flush all output, writing the header first if no change was ever
    /// recorded. Idempotent.
    pub fn finish(&mut self) -> Result<(), WriterError> {
        if self.finished {
            return Ok(());
        }
        if !self.header_written {
            self.write_header()?;
        }
        self.out.flush()?;
        self.finished = true;
        Ok(())
    }

    fn check_fits(
        &self,
        name: &str,
        width: u32,
        kind: &VarKind,
        value: TraceValue,
    ) -> Result<(), WriterError> {
        if matches!(kind, VarKind::Real | VarKind::Event) {
            return Ok(());
        }
        if let TraceValue::Int(v) = value {
            if !int_fits(v, width) {
                return Err(WriterError::ValueOutOfRange {
                    name: name.to_string(),
                    value: v,
                    width,
                });
            }
        }
        Ok(())
    }

    fn write_header(&mut self) -> Result<(), WriterError> {
        writeln!(self.out, "$timescale {} $end", self.timescale)?;

        // Emit variables grouped under their nested scope tree. Sorting by
        // path segments keeps each scope's children contiguous.
        let mut order: Vec<usize> = (0..self.vars.len()).collect();
        order.sort_by_key(|&i| segments(&self.vars[i].parent));

        let mut stack: Vec<String> = Vec::new();
        for &i in &order {
            let record = &self.vars[i];
            let segs = segments(&record.parent);
            let common = stack
                .iter()
                .zip(&segs)
                .take_while(|(a, b)| a == b)
                .count();
            while stack.len() > common {
                writeln!(self.out, "$upscope $end")?;
                stack.pop();
            }
            for seg in &segs[common..] {
                writeln!(self.out, "$scope module {seg} $end")?;
                stack.push(seg.clone());
            }
            let record = &self.vars[i];
            writeln!(
                self.out,
                "$var {} {} {} {} $end",
                record.kind.keyword(),
                record.width,
                record.ident,
                record.name
            )?;
        }
        while stack.pop().is_some() {
            writeln!(self.out, "$upscope $end")?;
        }

        writeln!(self.out, "$enddefinitions $end")?;
        writeln!(self.out, "$dumpvars")?;
        for record in &self.vars {
            // Events have no standing value to dump
            if record.kind != VarKind::Event {
                writeln!(self.out, "{}", encode_change(record, record.init))?;
            }
        }
        writeln!(self.out, "$end")?;
        self.header_written = true;
        Ok(())
    }
}

impl<W: Write> Drop for VcdWriter<W> {
    /// Best-effort finish so a dropped writer still leaves a well-formed
    /// dump behind.
    fn drop(&mut self) {
        if !self.finished && self.finish().is_err() {
            tracing::warn!("waveform writer flush failed during drop");
        }
    }
}

fn join_scope(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn segments(path: &str) -> Vec<String> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('.').map(str::to_string).collect()
    }
}

/// Generate a short printable identifier code from a registration index.
fn make_ident(index: usize) -> String {
    const FIRST: u8 = b'!';
    const COUNT: usize = 94; // printable ASCII '!' through '~'
    let mut ident = String::new();
    let mut n = index;
    loop {
        ident.push((FIRST + (n % COUNT) as u8) as char);
        n /= COUNT;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    ident
}

fn int_fits(value: i64, width: u32) -> bool {
    // A zero-bit signal holds no value at all
    if width == 0 {
        return false;
    }
    if width >= 64 {
        return true;
    }
    if value >= 0 {
        (value as u64) < (1u64 << width)
    } else {
        value >= -(1i64 << (width - 1))
    }
}

/// Two's-complement binary rendering truncated to the signal width.
fn to_binary(value: i64, width: u32) -> String {
    if value >= 0 {
        format!("{value:b}")
    } else {
        let w = width.min(64);
        let mask = if w >= 64 { u64::MAX } else { (1u64 << w) - 1 };
        format!("{:b}", (value as u64) & mask)
    }
}

fn encode_change(record: &VarRecord, value: TraceValue) -> String {
    let ident = &record.ident;
    match &record.kind {
        VarKind::Real => {
            let v = match value {
                TraceValue::Real(v) => v,
                TraceValue::Int(v) => v as f64,
                TraceValue::Unknown => 0.0,
            };
            format!("r{v} {ident}")
        }
        VarKind::Event => format!("1{ident}"),
        VarKind::Integer | VarKind::Other(_) if record.width == 1 => match value {
            TraceValue::Unknown => format!("z{ident}"),
            TraceValue::Int(v) => format!("{}{ident}", u8::from(v != 0)),
            TraceValue::Real(v) => format!("{}{ident}", u8::from(v != 0.0)),
        },
        VarKind::Integer | VarKind::Other(_) => match value {
            TraceValue::Unknown => format!("bz {ident}"),
            TraceValue::Int(v) => format!("b{} {ident}", to_binary(v, record.width)),
            TraceValue::Real(v) => format!("b{} {ident}", to_binary(v as i64, record.width)),
        },
    }
}
