// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = Self::write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
            return result;
        }

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }
}
