// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Host printing framework surface consumed by this crate.
//
// The host owns the printer registry, the job queue, and each job's
// lifecycle; we only publish descriptors into the registry and deliver
// per-job terminal signals back through a handle.

use inkbridge_core::types::{JobState, PrinterDescriptor, PrinterId};

/// The host's printer registry.
pub trait PrinterRegistry: Send + Sync {
    /// Mint a stable printer id for a local printer name.
    fn generate_printer_id(&self, local_name: &str) -> PrinterId;

    /// Publish a discovered printer to the host.
    fn add_printer(&self, printer: PrinterDescriptor);
}

/// Per-job lifecycle signals owned by the host's queue manager.
///
/// The submitter reads the current state through this handle and reports
/// exactly one terminal transition (complete or fail) per job.
pub trait JobHandle: Send + Sync {
    /// Current host-side state of the job.
    fn state(&self) -> JobState;

    /// Signal that processing has begun. Irreversible.
    fn start(&self);

    /// Signal that the printer accepted the document.
    fn complete(&self);

    /// Signal terminal failure with a human-readable reason.
    fn fail(&self, reason: &str);
}
