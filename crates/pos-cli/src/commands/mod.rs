use std::error::Error;
use std::io::Write;

use serde::Serialize;

pub mod closure;
pub mod le_diagram;
pub mod le_diagrams;
pub mod matroids;
pub mod necklace;

/// Writes `value` as one compact JSON line.
pub fn write_json_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes `value` as indented JSON followed by a newline.
pub fn write_json_pretty<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
