//! Programmatic client options.
//!
//! [`ClientOptions`] mirrors the connection string options as a typed,
//! all-optional override set. During resolution, a set field always wins
//! over the connection string's value for the same option.

use crate::types::{Compressor, Credential, ReadConcern, ReadPreference, WriteConcern};

/// Typed overrides applied on top of a connection string.
///
/// Every field is optional; unset fields leave the connection string's
/// value (if any) authoritative. The legacy `ssl` alias and the
/// unsupported pool options have no programmatic surface here on purpose.
///
/// # Examples
///
/// ```rust
/// use mongodb_uri::ClientOptions;
///
/// let options = ClientOptions::new()
///     .app_name("inventory-service")
///     .retry_writes(true)
///     .max_pool_size(50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Application name reported to the server.
    pub app_name: Option<String>,
    /// Wire compressors; an empty list clears any connection string setting.
    pub compressors: Option<Vec<Compressor>>,
    /// Authentication credential.
    pub credential: Option<Credential>,
    /// Bypass topology discovery and connect to a single endpoint.
    pub direct_connection: Option<bool>,
    /// Interval between topology heartbeats, in milliseconds.
    pub heartbeat_frequency_ms: Option<u64>,
    /// Latency window for selecting among suitable servers, in milliseconds.
    pub local_threshold_ms: Option<u64>,
    /// Maximum connection pool size.
    pub max_pool_size: Option<u32>,
    /// Default read concern.
    pub read_concern: Option<ReadConcern>,
    /// Default read preference.
    pub read_preference: Option<ReadPreference>,
    /// Replica set name to require.
    pub replica_set: Option<String>,
    /// Retry eligible reads once on transient failures.
    pub retry_reads: Option<bool>,
    /// Retry eligible writes once on transient failures.
    pub retry_writes: Option<bool>,
    /// Time limit for server selection, in milliseconds.
    pub server_selection_timeout_ms: Option<u64>,
    /// Require TLS.
    pub tls: Option<bool>,
    /// Relax all TLS verification.
    pub tls_insecure: Option<bool>,
    /// Accept invalid server certificates.
    pub tls_allow_invalid_certificates: Option<bool>,
    /// Accept certificate hostname mismatches.
    pub tls_allow_invalid_hostnames: Option<bool>,
    /// Path to the CA bundle.
    pub tls_ca_file: Option<String>,
    /// Path to the client certificate/key file.
    pub tls_certificate_key_file: Option<String>,
    /// Passphrase for the client key file.
    pub tls_certificate_key_file_password: Option<String>,
    /// Default write concern.
    pub write_concern: Option<WriteConcern>,
}

impl ClientOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application name.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the compressor list. An empty list clears any compressors
    /// configured via the connection string.
    pub fn compressors(mut self, compressors: Vec<Compressor>) -> Self {
        self.compressors = Some(compressors);
        self
    }

    /// Set the authentication credential.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Enable or disable direct connection.
    pub fn direct_connection(mut self, enabled: bool) -> Self {
        self.direct_connection = Some(enabled);
        self
    }

    /// Set the heartbeat frequency in milliseconds.
    pub fn heartbeat_frequency_ms(mut self, ms: u64) -> Self {
        self.heartbeat_frequency_ms = Some(ms);
        self
    }

    /// Set the local threshold in milliseconds.
    pub fn local_threshold_ms(mut self, ms: u64) -> Self {
        self.local_threshold_ms = Some(ms);
        self
    }

    /// Set the maximum pool size.
    pub fn max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = Some(size);
        self
    }

    /// Set the default read concern.
    pub fn read_concern(mut self, read_concern: ReadConcern) -> Self {
        self.read_concern = Some(read_concern);
        self
    }

    /// Set the default read preference.
    pub fn read_preference(mut self, read_preference: ReadPreference) -> Self {
        self.read_preference = Some(read_preference);
        self
    }

    /// Set the replica set name.
    pub fn replica_set(mut self, name: impl Into<String>) -> Self {
        self.replica_set = Some(name.into());
        self
    }

    /// Enable or disable read retries.
    pub fn retry_reads(mut self, enabled: bool) -> Self {
        self.retry_reads = Some(enabled);
        self
    }

    /// Enable or disable write retries.
    pub fn retry_writes(mut self, enabled: bool) -> Self {
        self.retry_writes = Some(enabled);
        self
    }

    /// Set the server selection timeout in milliseconds.
    pub fn server_selection_timeout_ms(mut self, ms: u64) -> Self {
        self.server_selection_timeout_ms = Some(ms);
        self
    }

    /// Enable or disable TLS.
    pub fn tls(mut self, enabled: bool) -> Self {
        self.tls = Some(enabled);
        self
    }

    /// Enable or disable insecure TLS.
    pub fn tls_insecure(mut self, enabled: bool) -> Self {
        self.tls_insecure = Some(enabled);
        self
    }

    /// Accept or reject invalid server certificates.
    pub fn tls_allow_invalid_certificates(mut self, enabled: bool) -> Self {
        self.tls_allow_invalid_certificates = Some(enabled);
        self
    }

    /// Accept or reject certificate hostname mismatches.
    pub fn tls_allow_invalid_hostnames(mut self, enabled: bool) -> Self {
        self.tls_allow_invalid_hostnames = Some(enabled);
        self
    }

    /// Set the CA bundle path.
    pub fn tls_ca_file(mut self, path: impl Into<String>) -> Self {
        self.tls_ca_file = Some(path.into());
        self
    }

    /// Set the client certificate/key file path.
    pub fn tls_certificate_key_file(mut self, path: impl Into<String>) -> Self {
        self.tls_certificate_key_file = Some(path.into());
        self
    }

    /// Set the client key passphrase.
    pub fn tls_certificate_key_file_password(mut self, password: impl Into<String>) -> Self {
        self.tls_certificate_key_file_password = Some(password.into());
        self
    }

    /// Set the default write concern.
    pub fn write_concern(mut self, write_concern: WriteConcern) -> Self {
        self.write_concern = Some(write_concern);
        self
    }
}
