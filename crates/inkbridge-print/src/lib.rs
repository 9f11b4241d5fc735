// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Inkbridge Print — the host-facing discovery session, the WorkCentre
// vendor upload protocol, and the job submitter.  This crate bridges
// between the core domain types defined in `inkbridge-core` and the
// printer's proprietary HTTP form upload endpoint.

pub mod client;
pub mod discovery;
pub mod host;
pub mod submit;
pub mod vendor;

pub use client::WorkCentreClient;
pub use discovery::{DiscoverySession, SessionState, WorkCentreSession};
pub use host::{JobHandle, PrinterRegistry};
pub use submit::{JobSubmitter, SubmitOutcome, SubmitTicket};
