// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Discovery session for the single configured WorkCentre printer.
//
// There is no network browsing here: the printer host is manually
// configured, so "discovery" is one synchronous reachability probe
// followed by publishing one descriptor with a fixed capability set.
// The remaining lifecycle hooks exist to satisfy the host framework's
// session contract and carry no behaviour beyond diagnostics.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

use inkbridge_core::config::ConfigStore;
use inkbridge_core::types::{
    CapabilitySet, ColorMode, DuplexMode, PaperSize, PrinterDescriptor, PrinterId, PrinterStatus,
    Resolution,
};

use crate::client::WorkCentreClient;
use crate::host::PrinterRegistry;

/// Stable local name used to mint the printer id.
pub const PRINTER_LOCAL_NAME: &str = "xerox-workcentre-7425";

/// Name shown in the host's printer list.
pub const PRINTER_DISPLAY_NAME: &str = "Xerox WorkCentre 7425";

/// Observable lifecycle of a discovery session.
///
/// `Unavailable` is how an embedding host can tell "configured but
/// unreachable" apart from "nothing configured": the registry sees no
/// printer in either case, but the session state differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Probing,
    Available,
    Unavailable,
    Destroyed,
}

/// Host-facing discovery session contract.
///
/// One implementation per printer family; only `start_discovery` carries
/// business logic for the WorkCentre bridge.
#[async_trait]
pub trait DiscoverySession: Send + Sync {
    /// Probe the configured printer and publish it if reachable.
    ///
    /// Never raises: an unreachable printer publishes nothing and
    /// terminates silently.
    async fn start_discovery(&self, requested: &[PrinterId]);

    fn stop_discovery(&self);

    fn validate_printers(&self, printer_ids: &[PrinterId]);

    fn start_printer_state_tracking(&self, printer_id: PrinterId);

    fn stop_printer_state_tracking(&self, printer_id: PrinterId);

    /// End the session. The published descriptor is discarded by the host.
    fn destroy(&self);
}

/// The fixed capability set advertised for the WorkCentre 7425.
pub fn workcentre_capabilities() -> CapabilitySet {
    CapabilitySet {
        media: vec![PaperSize::A4],
        default_media: PaperSize::A4,
        resolution: Resolution::new("Normal", 600, 600),
        color_modes: vec![ColorMode::Color, ColorMode::Monochrome],
        default_color: ColorMode::Monochrome,
        duplex_modes: vec![
            DuplexMode::Simplex,
            DuplexMode::LongEdge,
            DuplexMode::ShortEdge,
        ],
        default_duplex: DuplexMode::Simplex,
    }
}

/// Discovery session for the single configured WorkCentre printer.
pub struct WorkCentreSession {
    registry: Arc<dyn PrinterRegistry>,
    config: Arc<dyn ConfigStore>,
    state: Mutex<SessionState>,
}

impl WorkCentreSession {
    pub fn new(registry: Arc<dyn PrinterRegistry>, config: Arc<dyn ConfigStore>) -> Self {
        Self {
            registry,
            config,
            state: Mutex::new(SessionState::Created),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.state.lock().expect("session state lock poisoned")
    }

    fn set_state(&self, state: SessionState) {
        *self.state.lock().expect("session state lock poisoned") = state;
    }
}

#[async_trait]
impl DiscoverySession for WorkCentreSession {
    #[instrument(skip(self, requested), fields(requested = requested.len()))]
    async fn start_discovery(&self, requested: &[PrinterId]) {
        self.set_state(SessionState::Probing);

        // Fresh read — the host may have been changed since the last attempt.
        let config = self.config.current();

        let client = match WorkCentreClient::new(&config) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "could not build the probe client");
                self.set_state(SessionState::Unavailable);
                return;
            }
        };

        if !client.probe().await {
            warn!(host = %config.host, "printer configured but unreachable; publishing nothing");
            self.set_state(SessionState::Unavailable);
            return;
        }

        let descriptor = PrinterDescriptor {
            id: self.registry.generate_printer_id(PRINTER_LOCAL_NAME),
            name: PRINTER_DISPLAY_NAME.to_string(),
            status: PrinterStatus::Idle,
            capabilities: workcentre_capabilities(),
        };

        info!(host = %config.host, printer = %descriptor.id, "printer available; publishing");
        self.registry.add_printer(descriptor);
        self.set_state(SessionState::Available);
    }

    fn stop_discovery(&self) {
        debug!("stop_discovery");
    }

    fn validate_printers(&self, printer_ids: &[PrinterId]) {
        debug!(count = printer_ids.len(), "validate_printers");
    }

    fn start_printer_state_tracking(&self, printer_id: PrinterId) {
        debug!(printer = %printer_id, "start_printer_state_tracking");
    }

    fn stop_printer_state_tracking(&self, printer_id: PrinterId) {
        debug!(printer = %printer_id, "stop_printer_state_tracking");
    }

    fn destroy(&self) {
        debug!("destroy");
        self.set_state(SessionState::Destroyed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkbridge_core::config::{PrinterConfig, SharedConfig};

    /// Registry double that records published printers.
    #[derive(Default)]
    struct RecordingRegistry {
        printers: Mutex<Vec<PrinterDescriptor>>,
    }

    impl RecordingRegistry {
        fn published(&self) -> Vec<PrinterDescriptor> {
            self.printers.lock().unwrap().clone()
        }
    }

    impl PrinterRegistry for RecordingRegistry {
        fn generate_printer_id(&self, _local_name: &str) -> PrinterId {
            PrinterId::new()
        }

        fn add_printer(&self, printer: PrinterDescriptor) {
            self.printers.lock().unwrap().push(printer);
        }
    }

    fn session_for(host: String) -> (Arc<RecordingRegistry>, WorkCentreSession) {
        let registry = Arc::new(RecordingRegistry::default());
        let config = Arc::new(SharedConfig::new(PrinterConfig {
            host,
            probe_timeout_secs: Some(5),
            upload_timeout_secs: Some(5),
        }));
        let session = WorkCentreSession::new(registry.clone(), config);
        (registry, session)
    }

    #[tokio::test]
    async fn reachable_printer_is_published_once_with_fixed_capabilities() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/print.htm")
            .with_status(200)
            .create_async()
            .await;

        let (registry, session) = session_for(server.host_with_port());
        session.start_discovery(&[]).await;

        let published = registry.published();
        assert_eq!(published.len(), 1);

        let printer = &published[0];
        assert_eq!(printer.name, PRINTER_DISPLAY_NAME);
        assert_eq!(printer.status, PrinterStatus::Idle);
        assert_eq!(printer.capabilities, workcentre_capabilities());
        assert_eq!(printer.capabilities.default_media, PaperSize::A4);
        assert_eq!(printer.capabilities.default_color, ColorMode::Monochrome);
        assert_eq!(printer.capabilities.default_duplex, DuplexMode::Simplex);
        assert_eq!(printer.capabilities.resolution, Resolution::new("Normal", 600, 600));

        assert_eq!(session.state(), SessionState::Available);
    }

    #[tokio::test]
    async fn unreachable_printer_publishes_nothing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/print.htm")
            .with_status(500)
            .create_async()
            .await;

        let (registry, session) = session_for(server.host_with_port());
        session.start_discovery(&[]).await;

        assert!(registry.published().is_empty());
        assert_eq!(session.state(), SessionState::Unavailable);
    }

    #[tokio::test]
    async fn connection_refused_degrades_silently() {
        let (registry, session) = session_for("127.0.0.1:1".into());
        session.start_discovery(&[]).await;

        assert!(registry.published().is_empty());
        assert_eq!(session.state(), SessionState::Unavailable);
    }

    #[tokio::test]
    async fn lifecycle_hooks_have_no_side_effects() {
        let (registry, session) = session_for("127.0.0.1:1".into());

        session.stop_discovery();
        session.validate_printers(&[PrinterId::new()]);
        session.start_printer_state_tracking(PrinterId::new());
        session.stop_printer_state_tracking(PrinterId::new());

        assert!(registry.published().is_empty());
        assert_eq!(session.state(), SessionState::Created);

        session.destroy();
        assert_eq!(session.state(), SessionState::Destroyed);
    }
}
