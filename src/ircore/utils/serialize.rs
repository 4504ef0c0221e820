use std::path::Path;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use bincode::Options;
use serde::{Serialize, de::DeserializeOwned};
use crate::ircore::error::{GatewayError, Result};

// same wire format as bincode::serialize_into
fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
}

pub fn write_file<T: Serialize>(filepath: &Path, obj: &T) -> Result<()> {
    if let Some(dir) = filepath.parent() {
        fs::create_dir_all(dir).map_err(|e| GatewayError::io(filepath, e))?;
    }
    let file = File::create(filepath).map_err(|e| GatewayError::io(filepath, e))?;
    let mut writer = BufWriter::new(file);
    options().serialize_into(&mut writer, obj)
        .map_err(|e| GatewayError::Index(format!("{}: {}", filepath.display(), e)))?;
    writer.flush().map_err(|e| GatewayError::io(filepath, e))?;
    Ok(())
}

/// Reads never claim more bytes than the file holds, so a corrupt length
/// prefix is an error rather than an allocation.
pub fn read_file<T: DeserializeOwned>(filepath: &Path) -> Result<T> {
    let file = File::open(filepath).map_err(|e| GatewayError::io(filepath, e))?;
    let len = file.metadata().map_err(|e| GatewayError::io(filepath, e))?.len();
    options()
        .with_limit(len)
        .deserialize_from(BufReader::new(file))
        .map_err(|e| GatewayError::Index(format!("{}: {}", filepath.display(), e)))
}
