// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Persisted suite format.
//!
//! ```text
//! <row count>
//!
//! <level> <level> ... <level>
//! ...
//! ```
//!
//! Rows appear in insertion order, one per line, levels separated by single
//! spaces. Unassigned positions never occur in committed rows and are
//! skipped.

use crate::error::AetgResult;
use crate::model::TestCase;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `rows` to `writer`.
pub fn write_suite<W: Write>(writer: &mut W, rows: &[TestCase]) -> io::Result<()> {
    writeln!(writer, "{}", rows.len())?;
    writeln!(writer)?;
    for row in rows {
        let mut first = true;
        for level in row.levels() {
            if !first {
                write!(writer, " ")?;
            }
            write!(writer, "{}", level)?;
            first = false;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write `rows` to the file at `path`, replacing it.
pub fn write_suite_to_path(path: impl AsRef<Path>, rows: &[TestCase]) -> AetgResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_suite(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}
