mod error;
mod mapping;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

pub use error::Error;
pub use mapping::{substitutions, Substitution};

/// Caption data file, relative to the site's checkout.
pub const SOURCE_PATH: &str = "src/data/photos.ts";

/// Lines printed after a successful read, in order.
pub const GUIDANCE: [&str; 2] = [
    "Script to help add traditional Chinese translations",
    "This is just a helper - manual verification needed",
];

/// Reads the whole file and decodes it as strict UTF-8.
///
/// A leading BOM is kept as U+FEFF. Invalid sequences are an error, never
/// replaced.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();

    let mut buffer = Vec::new();
    {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut reader = BufReader::new(file);
        reader
            .read_to_end(&mut buffer)
            .map_err(|e| io_error(path, e))?;
    }
    debug!(path = %path.display(), bytes = buffer.len(), "read caption file");

    match UTF_8.decode_without_bom_handling_and_without_replacement(&buffer) {
        Some(text) => Ok(text.into_owned()),
        None => Err(Error::Decode {
            path: path.to_path_buf(),
            valid_up_to: Encoding::utf8_valid_up_to(&buffer),
        }),
    }
}

fn io_error(path: &Path, source: io::Error) -> Error {
    match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Writes each `GUIDANCE` line followed by `\n`.
pub fn write_guidance(out: &mut impl Write) -> io::Result<()> {
    for line in GUIDANCE {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Loads the caption file, then prints the guidance lines.
///
/// Nothing is written to `out` if the file cannot be read. The content and
/// the substitution table are held but not applied.
pub fn run(path: impl AsRef<Path>, out: &mut impl Write) -> Result<(), Error> {
    let content = read_source(path)?;
    debug!(
        chars = content.chars().count(),
        substitutions = substitutions().len(),
        "caption file loaded"
    );

    write_guidance(out).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)
}
