// crates/infra/src/delivery.rs
use std::{
    io::{self, Write},
    path::PathBuf,
};

use textutils_ports::delivery::{Delivered, DeliveryRequest, PayloadSink};
use textutils_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Saves payloads under a directory using their suggested file names.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PayloadSink for DirectorySink {
    fn deliver(&self, request: &DeliveryRequest<'_>) -> Result<Delivered> {
        let path = self.dir.join(request.filename);
        FileWriter::atomic_write(&path, request.bytes)
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        log::info!("wrote {} ({} bytes)", path.display(), request.bytes.len());
        Ok(Delivered::File(path))
    }
}

/// Writes payload bytes to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl PayloadSink for StdoutSink {
    fn deliver(&self, request: &DeliveryRequest<'_>) -> Result<Delivered> {
        let mut out = io::stdout().lock();
        out.write_all(request.bytes)?;
        out.flush()?;
        Ok(Delivered::Stdout { bytes: request.bytes.len() })
    }
}
