// src/presentation/structured.rs
use std::io::Write;

use anyhow::{Context, Result};
use textutils_domain::Report;

pub fn write_json(out: &mut impl Write, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("serializing report as JSON")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_yaml(out: &mut impl Write, report: &Report) -> Result<()> {
    serde_yaml::to_writer(out, report).context("serializing report as YAML")?;
    Ok(())
}
