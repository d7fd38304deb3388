use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A command result that can be printed for humans or as JSON.
pub trait Report: Serialize {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub fn emit<R: Report>(report: &R, format: OutputFormat) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(report, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn write_report<R: Report>(
    report: &R,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        nodes: usize,
    }

    impl Report for Sample {
        fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
            writeln!(out, "nodes {}", self.nodes)
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_report(&Sample { nodes: 3 }, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text() {
        assert_eq!(render(OutputFormat::Text), "nodes 3\n");
    }

    #[test]
    fn test_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["nodes"], 3);
    }
}
