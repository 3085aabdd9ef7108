//! Numeric series I/O and the scale transform
//!
//! A series is an ordered list of `f64` values stored one per line in a plain
//! text file. Blank lines are ignored on read; every value is written on its
//! own newline-terminated line.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Scale factor used when none is supplied
pub const DEFAULT_SCALE: f64 = 1.0;

/// Read a newline-delimited numeric series from `path`
///
/// Lines may end in `\n`, `\r\n` or a bare `\r`. Each line is trimmed;
/// blank lines are skipped. Every other line must be a
/// floating-point literal (`3`, `-2.5`, `+1e-3`, `inf`, `nan`, ...). The read
/// aborts at the first line that does not parse and no values are returned.
///
/// # Errors
///
/// - [`Error::DataNotFound`] if `path` does not exist
/// - [`Error::InvalidData`] for the first non-numeric line
/// - [`Error::Io`] if the file cannot be read or is not valid UTF-8
pub fn read_series<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::DataNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(std::fs::File::open(path)?);
    let mut values = Vec::new();
    let mut line_number = 0;

    for line in reader.lines() {
        let line = line?;
        // Bare carriage returns also end a line
        for piece in line.split('\r') {
            line_number += 1;
            let trimmed = piece.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(source) => {
                    let err = Error::InvalidData {
                        line: line_number,
                        value: trimmed.to_string(),
                        source,
                    };
                    tracing::error!("Invalid data in file: {}", err);
                    return Err(err);
                }
            }
        }
    }

    Ok(values)
}

/// Multiply every value by `factor`, returning a new series
///
/// The factor is not range-checked: zero, negative, infinite and NaN factors
/// follow ordinary IEEE 754 arithmetic.
pub fn scale(values: &[f64], factor: f64) -> Vec<f64> {
    tracing::debug!("Processing data with scale factor: {}", factor);
    values.iter().map(|value| value * factor).collect()
}

/// Render a value the way it is written to the results file
///
/// Integral values keep a fractional part (`5.0`, not `5`) and very large or
/// small magnitudes use exponent notation, so every line reads back as a float.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

/// Write `values` to `path`, one per line, replacing any existing file
///
/// The series is written to a temporary file next to the destination and moved
/// into place once complete, so a failed write never leaves a truncated file
/// behind. A symlinked destination is written through to its target and an
/// existing file keeps its permissions. Destinations that are not regular
/// files, such as `/dev/stdout`, are written directly.
pub fn write_series<P: AsRef<Path>>(values: &[f64], path: P) -> Result<()> {
    let path = path.as_ref();

    let (target, permissions) = match std::fs::canonicalize(path) {
        Ok(resolved) => {
            let metadata = std::fs::metadata(&resolved)?;
            if !metadata.is_file() {
                write_lines(values, std::fs::File::create(&resolved)?)?;
                tracing::info!("Results saved to {}", path.display());
                return Ok(());
            }
            (resolved, Some(metadata.permissions()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if path.symlink_metadata().is_ok() {
                // Dangling symlink: let the OS create the file it points to
                write_lines(values, std::fs::File::create(path)?)?;
                tracing::info!("Results saved to {}", path.display());
                return Ok(());
            }
            (path.to_path_buf(), None)
        }
        Err(e) => return Err(e.into()),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".numscale-").suffix(".tmp");
    match permissions {
        Some(permissions) => {
            builder.permissions(permissions);
        }
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                builder.permissions(std::fs::Permissions::from_mode(0o644));
            }
        }
    }
    let mut tmp = builder.tempfile_in(dir)?;

    write_lines(values, &mut tmp)?;
    tmp.persist(&target).map_err(|e| e.error)?;

    tracing::info!("Results saved to {}", path.display());
    Ok(())
}

fn write_lines<W: Write>(values: &[f64], out: W) -> std::io::Result<()> {
    let mut writer = BufWriter::new(out);
    for value in values {
        writeln!(writer, "{}", format_value(*value))?;
    }
    writer.flush()
}
