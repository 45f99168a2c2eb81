//! Trace writers for external plotting tools.
//!
//! CSV: header `time,setpoint,pose,output`, one row per tick.
//! JSON: one object with the x-axis labels and the four series.

use std::io::Write;

use serde::Serialize;

use crate::error::EngineError;
use crate::simulation::analysis::TraceSummary;
use crate::simulation::trace::SimulationTrace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Serialize)]
struct TraceDocument<'a> {
    labels: Vec<String>,
    #[serde(flatten)]
    trace: &'a SimulationTrace,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a TraceSummary>,
}

pub fn write_csv<W: Write>(trace: &SimulationTrace, out: &mut W) -> Result<(), EngineError> {
    writeln!(out, "time,setpoint,pose,output")?;
    for s in trace.samples() {
        writeln!(out, "{:.1},{},{},{}", s.time, s.setpoint, s.pose, s.output)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(
    trace: &SimulationTrace,
    summary: Option<&TraceSummary>,
    out: &mut W,
) -> Result<(), EngineError> {
    let doc = TraceDocument {
        labels: trace.time_labels(),
        trace,
        summary,
    };
    serde_json::to_writer(&mut *out, &doc)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write `trace` in `format`. The summary is only embedded in JSON.
pub fn write_trace<W: Write>(
    trace: &SimulationTrace,
    summary: Option<&TraceSummary>,
    format: TraceFormat,
    out: &mut W,
) -> Result<(), EngineError> {
    match format {
        TraceFormat::Csv => write_csv(trace, out),
        TraceFormat::Json => write_json(trace, summary, out),
    }
}
