// src/app.rs
use std::io::{self, Write};

use anyhow::Result;
use textutils_infra::{DirectorySink, StdoutSink, SystemClock};
use textutils_ports::delivery::{Delivered, PayloadSink};
use textutils_usecase::{ReportExporter, TextSession};

use crate::{
    config::{Command, Config, Destination},
    presentation,
};

/// Execute one configured command, writing results to stdout.
pub fn run(config: &Config) -> Result<()> {
    let text = config.input.read()?;
    let mut session = TextSession::new(text);
    let mut out = io::stdout().lock();

    match &config.command {
        Command::Analyze { format, top } => {
            let report = session.report();
            presentation::write_report(&mut out, &report, *format, *top)?;
        }
        Command::Export { kind, destination } => {
            let clock = SystemClock;
            let exporter = ReportExporter::new(&clock);
            let payload = session.export(&exporter, *kind)?;
            let sink: Box<dyn PayloadSink> = match destination {
                Destination::Directory(dir) => Box::new(DirectorySink::new(dir.clone())),
                Destination::Stdout => Box::new(StdoutSink),
            };
            if let Delivered::File(path) = exporter.deliver(&payload, &*sink)? {
                writeln!(out, "exported {}", path.display())?;
            }
        }
        Command::Transform(transform) => {
            session.apply(*transform);
            out.write_all(session.text().as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}
