// SPDX-License-Identifier: PMPL-1.0-or-later
//
// HTTP client for the WorkCentre web upload interface.
//
// One instance per operation: callers construct a client from a fresh
// `PrinterConfig` read so host changes made between operations are always
// picked up.  Timeouts are applied per request; when the config leaves
// them unset the transport default applies.

use std::time::Duration;

use reqwest::RequestBuilder;
use tracing::{debug, error, info, instrument};

use inkbridge_core::config::PrinterConfig;
use inkbridge_core::error::{InkbridgeError, Result};
use inkbridge_core::types::JobAttributes;

use crate::vendor;

/// Async client bound to one printer host.
pub struct WorkCentreClient {
    http: reqwest::Client,
    host: String,
    probe_timeout: Option<Duration>,
    upload_timeout: Option<Duration>,
}

impl WorkCentreClient {
    /// Create a client from the current connection settings.
    pub fn new(config: &PrinterConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| InkbridgeError::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            host: config.host.clone(),
            probe_timeout: config.probe_timeout_secs.map(Duration::from_secs),
            upload_timeout: config.upload_timeout_secs.map(Duration::from_secs),
        })
    }

    /// The host this client is targeting.
    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.host, path)
    }

    fn with_timeout(request: RequestBuilder, timeout: Option<Duration>) -> RequestBuilder {
        match timeout {
            Some(t) => request.timeout(t),
            None => request,
        }
    }

    /// Probe printer reachability.
    ///
    /// GETs the printer's status page; any 2xx means reachable.  Probing
    /// never raises — every transport error or bad status degrades to
    /// `false`.
    #[instrument(skip(self), fields(host = %self.host))]
    pub async fn probe(&self) -> bool {
        let request = Self::with_timeout(self.http.get(self.url(vendor::PROBE_PATH)), self.probe_timeout);

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                debug!("printer is reachable");
                true
            }
            Ok(response) => {
                error!(status = %response.status(), "printer answered with a non-2xx status");
                false
            }
            Err(e) => {
                error!(error = %e, "could not reach the printer");
                false
            }
        }
    }

    /// Upload one document to the printer.
    ///
    /// POSTs the complete `UPLPRT.cmd` multipart form.  Exactly one
    /// attempt; non-2xx responses and transport errors both resolve to
    /// [`InkbridgeError::Upload`].
    #[instrument(skip(self, document), fields(host = %self.host, bytes = document.len()))]
    pub async fn upload(&self, attrs: &JobAttributes, document: Vec<u8>) -> Result<()> {
        let form = vendor::upload_form(attrs, document)?;

        let request = Self::with_timeout(
            self.http.post(self.url(vendor::UPLOAD_PATH)).multipart(form),
            self.upload_timeout,
        );

        let response = request
            .send()
            .await
            .map_err(|e| InkbridgeError::Upload(format!("send: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            error!(status = %status, "printer rejected the upload");
            return Err(InkbridgeError::Upload(format!(
                "printer answered HTTP {status}"
            )));
        }

        info!("document accepted by the printer");
        Ok(())
    }
}
