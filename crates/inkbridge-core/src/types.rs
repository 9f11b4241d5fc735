// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Core domain types for the Inkbridge printer bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Unique identifier for a published printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrinterId(pub Uuid);

impl PrinterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PrinterId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PrinterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Printer status as advertised to the host registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterStatus {
    /// Reachable and ready to accept jobs.
    Idle,
    /// Configured but not reachable at probe time.
    Unavailable,
}

/// Colour output mode for a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    Color,
    Monochrome,
}

/// Duplex printing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplexMode {
    /// Single-sided.
    Simplex,
    LongEdge,
    ShortEdge,
}

/// Paper sizes the WorkCentre upload form recognizes, plus an `Unknown`
/// sentinel for anything the host hands us outside that set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    B4,
    B5,
    Letter,
    Legal,
    Unknown,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height). `None` for `Unknown`.
    pub fn dimensions_mm(&self) -> Option<(u32, u32)> {
        match self {
            Self::A4 => Some((210, 297)),
            Self::A3 => Some((297, 420)),
            Self::A5 => Some((148, 210)),
            Self::B4 => Some((250, 353)),
            Self::B5 => Some((176, 250)),
            Self::Letter => Some((216, 279)),
            Self::Legal => Some((216, 356)),
            Self::Unknown => None,
        }
    }
}

/// Print resolution in dots per inch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Human-readable label shown by the host (e.g. "Normal").
    pub label: String,
    pub x_dpi: u32,
    pub y_dpi: u32,
}

impl Resolution {
    pub fn new(label: impl Into<String>, x_dpi: u32, y_dpi: u32) -> Self {
        Self {
            label: label.into(),
            x_dpi,
            y_dpi,
        }
    }
}

/// The fixed capability set advertised for a printer at discovery time.
///
/// Built once when the printer is published and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub media: Vec<PaperSize>,
    pub default_media: PaperSize,
    pub resolution: Resolution,
    pub color_modes: Vec<ColorMode>,
    pub default_color: ColorMode,
    pub duplex_modes: Vec<DuplexMode>,
    pub default_duplex: DuplexMode,
}

impl CapabilitySet {
    /// Whether a given paper size is advertised as supported.
    pub fn supports_media(&self, size: PaperSize) -> bool {
        self.media.contains(&size)
    }

    /// Whether a given colour mode is advertised as supported.
    pub fn supports_color(&self, mode: ColorMode) -> bool {
        self.color_modes.contains(&mode)
    }

    /// Whether a given duplex mode is advertised as supported.
    pub fn supports_duplex(&self, mode: DuplexMode) -> bool {
        self.duplex_modes.contains(&mode)
    }
}

/// A printer as published to the host registry.
///
/// Created once per discovery session and never mutated; the descriptor is
/// discarded when the session is destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterDescriptor {
    pub id: PrinterId,
    /// Human-readable name shown in the host's printer list.
    pub name: String,
    pub status: PrinterStatus,
    pub capabilities: CapabilitySet,
}

/// Host-side lifecycle states of a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    /// Queued by the host, waiting to be submitted.
    Queued,
    /// Submission has begun; irreversible.
    Started,
    /// The printer accepted the upload.
    Completed,
    /// Terminal failure — see the reason passed to the host.
    Failed,
}

/// Generic print attributes attached to a job by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAttributes {
    pub color: ColorMode,
    pub duplex: DuplexMode,
    pub media: PaperSize,
}

impl Default for JobAttributes {
    fn default() -> Self {
        Self {
            color: ColorMode::Monochrome,
            duplex: DuplexMode::Simplex,
            media: PaperSize::A4,
        }
    }
}

/// The document payload of a print job.
///
/// The payload is opaque binary, expected to be a printable document format
/// (the upload declares `application/pdf`). Reading a `File` variant can
/// fail, which is the job's document-read failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentSource {
    /// Already-materialized document bytes.
    Bytes(Vec<u8>),
    /// A file to be read at submission time.
    File(PathBuf),
}

/// A print job handed to the submitter by the host.
///
/// Consumed exactly once; the terminal state is reported back through the
/// host's job handle and the request is then discarded, never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJobRequest {
    pub id: JobId,
    /// Human-readable job name for logging.
    pub name: String,
    pub attributes: JobAttributes,
    pub document: DocumentSource,
    pub created_at: DateTime<Utc>,
}

impl PrintJobRequest {
    pub fn new(name: impl Into<String>, attributes: JobAttributes, document: DocumentSource) -> Self {
        Self {
            id: JobId::new(),
            name: name.into(),
            attributes,
            document,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_attributes_match_capability_defaults() {
        let attrs = JobAttributes::default();
        assert_eq!(attrs.color, ColorMode::Monochrome);
        assert_eq!(attrs.duplex, DuplexMode::Simplex);
        assert_eq!(attrs.media, PaperSize::A4);
    }

    #[test]
    fn unknown_paper_size_has_no_dimensions() {
        assert!(PaperSize::Unknown.dimensions_mm().is_none());
        assert_eq!(PaperSize::A4.dimensions_mm(), Some((210, 297)));
    }

    #[test]
    fn job_ids_are_unique() {
        assert_ne!(JobId::new(), JobId::new());
    }
}
