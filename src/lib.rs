//! # mongodb-uri
//!
//! MongoDB connection string parsing and client configuration resolution.
//!
//! This crate turns a connection string plus an optional set of typed
//! programmatic overrides into a single validated, immutable
//! [`ClientConfig`]. It enforces the cross-field and bounds invariants the
//! transport layer does not enforce itself — TLS flag aliasing, DNS
//! seedlist incompatibilities, rejected legacy options, compressor
//! negotiation — and exposes the merged result through read-only
//! accessors. It performs no I/O: no sockets are opened, no DNS seedlist
//! is resolved, and nothing is cached between invocations.
//!
//! ## Supported connection string formats
//!
//! ```text
//! mongodb://[user:password@]host[:port][,host:port,...][/database][?options]
//! mongodb+srv://[user:password@]host[/database][?options]
//! ```
//!
//! The `mongodb+srv` scheme names a single logical domain that is resolved
//! externally; endpoint enumeration is reported as not applicable rather
//! than as an empty list.
//!
//! ## Resolving a configuration
//!
//! ```rust
//! use mongodb_uri::{ClientConfig, ClientOptions, Compressor};
//!
//! let config = ClientConfig::with_options(
//!     "mongodb://db1.example.com:27017,db2.example.com:27017/inventory?replicaSet=rs0",
//!     &ClientOptions::new()
//!         .app_name("inventory-service")
//!         .compressors(vec![Compressor::zlib_with_level(6)])
//!         .retry_writes(true),
//! )?;
//!
//! assert_eq!(config.database(), Some("inventory"));
//! assert_eq!(config.replica_set(), Some("rs0"));
//! assert_eq!(config.compressor_names(), Some(vec!["zlib".to_string()]));
//! # Ok::<(), mongodb_uri::UriError>(())
//! ```
//!
//! ## Precedence and validation
//!
//! When an option is supplied both in the connection string and in
//! [`ClientOptions`], the programmatic value wins. Validation always reads
//! the effective value after the merge, so an out-of-bounds value fails
//! construction even when it was supplied only by the connection string:
//!
//! ```rust
//! use mongodb_uri::ClientConfig;
//!
//! // serverSelectionTimeoutMS must be positive, no override involved
//! assert!(ClientConfig::new("mongodb://localhost/?serverSelectionTimeoutMS=0").is_err());
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod types;
pub mod uri;

pub use config::ClientConfig;
pub use error::{UriError, UriResult};
pub use options::ClientOptions;
pub use types::{
    Acknowledgment, AuthMechanism, Compressor, Credential, ReadConcern, ReadConcernLevel,
    ReadPreference, ReadPreferenceMode, WriteConcern,
};
pub use uri::{ParsedUri, Scheme, ServerAddress};

pub use bson::{doc, Bson, Document};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::error::{UriError, UriResult};
    pub use crate::options::ClientOptions;
    pub use crate::types::{
        Acknowledgment, AuthMechanism, Compressor, Credential, ReadConcern, ReadConcernLevel,
        ReadPreference, ReadPreferenceMode, WriteConcern,
    };
    pub use crate::uri::{ParsedUri, Scheme, ServerAddress};
    pub use bson::{doc, Bson, Document};
}
