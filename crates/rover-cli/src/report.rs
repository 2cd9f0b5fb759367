//! JSON rendering of a navigation result.

use std::io::{self, Write};

use rover_core::NavigationResult;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

/// Wire shape of a result. Field order is the output key order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    /// `[x, y]` of the final cell.
    pub final_position: [i32; 2],
    /// One-letter heading code.
    pub final_direction: char,
    /// Human-readable terminal status.
    pub status: &'static str,
}

impl From<&NavigationResult> for Report {
    fn from(r: &NavigationResult) -> Self {
        Self {
            final_position: [r.final_position.x, r.final_position.y],
            final_direction: r.final_direction.code(),
            status: r.status.as_str(),
        }
    }
}

/// Single-line formatter separating items with `", "` and keys from
/// values with `": "`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Write `report` followed by a newline.
pub fn write_report<W: Write>(out: &mut W, report: &Report, pretty: bool) -> serde_json::Result<()> {
    if pretty {
        let mut ser = Serializer::with_formatter(&mut *out, PrettyFormatter::new());
        report.serialize(&mut ser)?;
    } else {
        let mut ser = Serializer::with_formatter(&mut *out, SpacedFormatter);
        report.serialize(&mut ser)?;
    }
    out.write_all(b"\n").map_err(serde_json::Error::io)
}
