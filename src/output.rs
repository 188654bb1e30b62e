use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Writes `data` to `path`, replacing whatever was there before.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    info!("Writing output: {}", path.display());

    write(path, data).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })
}

fn write(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}
