//! Boundary to the host application that materializes tracks.
//!
//! The pipeline never touches scene or UI types. A host implements
//! [`TrackSink`] to turn an [`ImportOutcome`] into shape keys and keyframes.

use std::io::Write;

use crate::{
    foundation::error::{FacepipeError, FacepipeResult},
    pipeline::import::ImportOutcome,
};

/// Receiver for finished import runs.
pub trait TrackSink {
    fn accept(&mut self, outcome: &ImportOutcome) -> FacepipeResult<()>;
}

/// Writes each outcome as pretty-printed JSON.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TrackSink for JsonSink<W> {
    fn accept(&mut self, outcome: &ImportOutcome) -> FacepipeResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, outcome)
            .map_err(|e| FacepipeError::serde(format!("write track json: {e}")))?;
        self.writer
            .write_all(b"\n")
            .and_then(|()| self.writer.flush())
            .map_err(|e| FacepipeError::io(format!("write track json: {e}")))
    }
}

/// Keeps the most recent outcome in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    last: Option<ImportOutcome>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ImportOutcome> {
        self.last.as_ref()
    }

    pub fn take(&mut self) -> Option<ImportOutcome> {
        self.last.take()
    }
}

impl TrackSink for MemorySink {
    fn accept(&mut self, outcome: &ImportOutcome) -> FacepipeResult<()> {
        self.last = Some(outcome.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sink/sink.rs"]
mod tests;
