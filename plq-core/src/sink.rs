//! Where finished filters go.
//!
//! The form hands each payload to a [`QuerySink`] and forgets about it. Transport and
//! results are the sink's business.

use anyhow::{Context, Result};
use std::io::Write;

use crate::filter::FilterPayload;

pub trait QuerySink {
    fn send(&mut self, payload: FilterPayload) -> Result<()>;
}

/// Writes each payload as one JSON document followed by a newline.
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> QuerySink for JsonSink<W> {
    fn send(&mut self, payload: FilterPayload) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&payload)
        } else {
            serde_json::to_string(&payload)
        }
        .context("serializing filter")?;
        writeln!(self.writer, "{json}").context("writing filter")?;
        self.writer.flush().context("flushing filter output")?;
        Ok(())
    }
}

/// Keeps every payload it receives. Handy for embedding the form without a transport.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub sent: Vec<FilterPayload>,
}

impl QuerySink for CollectSink {
    fn send(&mut self, payload: FilterPayload) -> Result<()> {
        self.sent.push(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_payload() -> FilterPayload {
        FilterPayload {
            license_plates: vec!["XYZ".into()],
            colors: vec![],
            models: vec![],
            makes: vec![],
            start_time: None,
            end_time: None,
        }
    }

    #[test]
    fn json_sink_writes_one_line_per_payload() {
        let mut sink = JsonSink::new(Vec::new(), false);
        sink.send(empty_payload()).unwrap();
        sink.send(empty_payload()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(r#"{"licensePlates":["XYZ"]"#));
        assert!(lines[0].ends_with(r#""startTime":null,"endTime":null}"#));
    }

    #[test]
    fn json_sink_pretty() {
        let mut sink = JsonSink::new(Vec::new(), true);
        sink.send(empty_payload()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.contains("\n  \"licensePlates\": [\n    \"XYZ\"\n  ],"));
    }

    #[test]
    fn collect_sink_keeps_payloads() {
        let mut sink = CollectSink::default();
        sink.send(empty_payload()).unwrap();
        assert_eq!(sink.sent, vec![empty_payload()]);
    }
}
