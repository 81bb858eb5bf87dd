//! JSON emission of histogram reports

use crate::report::{AxesReport, HistogramReport, SingleReport};
use freqhist_core::{Result, Sample};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Encoding of a report as a JSON document
///
/// Keys keep their declaration order: axes come out as X, Y, Z followed by
/// NBins, both in text and in [`Value`] form.
pub trait ReportJson: Serialize {
    /// Convert into a JSON value
    fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encode as compact JSON text
    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON text
    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write compact JSON text followed by a newline
    fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl<T: Sample> ReportJson for HistogramReport<T> {}
impl<T: Sample> ReportJson for SingleReport<T> {}
impl<T: Sample> ReportJson for AxesReport<T> {}
