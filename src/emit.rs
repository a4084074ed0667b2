//! Renders a generated table as a source-code literal.

use std::io::{self, Write};

use crate::Params;

/// Values printed per line of the array literal.
const VALUES_PER_LINE: usize = 5;

/// Write `table` to `out` as a self-contained source literal: a header
/// comment recording the generation parameters, the stride constant, and the
/// table itself. Each value uses the shortest decimal form that re-parses to
/// the same f64.
pub fn write_table<W: Write>(out: &mut W, params: &Params, table: &[f64]) -> io::Result<()> {
    writeln!(out, "// CDF table for a discrete Gaussian sampler")?;
    writeln!(out, "//    generated by {}", env!("CARGO_PKG_NAME"))?;
    writeln!(out, "// sigma = {}", params.sigma)?;
    writeln!(out, "// print every {} entries", params.skip)?;
    writeln!(out)?;
    writeln!(out, "pub const CDF_SKIP64: usize = {};", params.skip)?;
    writeln!(out)?;
    writeln!(out, "pub const CDF_TABLE64: [f64; {}] = [", table.len())?;
    for chunk in table.chunks(VALUES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(f64::to_string).collect();
        writeln!(out, "  {},", line.join(", "))?;
    }
    writeln!(out, "];")?;
    Ok(())
}
