use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::Report;

/// Path value meaning stdin or stdout.
pub const STDIO: &str = "-";

pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new(STDIO) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("opening input {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Files are appended to, so repeated runs accumulate one document per line.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path == Path::new(STDIO) {
        return Ok(Box::new(io::stdout().lock()));
    }
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let file = options
        .open(path)
        .with_context(|| format!("opening output {}", path.display()))?;
    Ok(Box::new(file))
}

pub fn write_report<W: Write>(mut out: W, report: &Report, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, report)?;
    } else {
        serde_json::to_writer(&mut out, report)?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
