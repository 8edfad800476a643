//! Credential, compression, and concern/preference value types.

use bson::Document;
use serde::{Deserialize, Serialize};

use crate::error::{UriError, UriResult};

/// Authentication mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMechanism {
    /// SCRAM-SHA-1 challenge/response.
    #[serde(rename = "SCRAM-SHA-1")]
    ScramSha1,
    /// SCRAM-SHA-256 challenge/response.
    #[serde(rename = "SCRAM-SHA-256")]
    ScramSha256,
    /// X.509 client certificate authentication.
    #[serde(rename = "MONGODB-X509")]
    MongodbX509,
    /// AWS IAM credentials.
    #[serde(rename = "MONGODB-AWS")]
    MongodbAws,
    /// Kerberos via GSSAPI.
    #[serde(rename = "GSSAPI")]
    Gssapi,
    /// SASL PLAIN (used for LDAP).
    #[serde(rename = "PLAIN")]
    Plain,
}

impl AuthMechanism {
    /// Get the canonical wire name of this mechanism.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScramSha1 => "SCRAM-SHA-1",
            Self::ScramSha256 => "SCRAM-SHA-256",
            Self::MongodbX509 => "MONGODB-X509",
            Self::MongodbAws => "MONGODB-AWS",
            Self::Gssapi => "GSSAPI",
            Self::Plain => "PLAIN",
        }
    }

    /// Parse a mechanism from its wire name, case-insensitively.
    pub fn parse(name: &str) -> UriResult<Self> {
        match name.to_uppercase().as_str() {
            "SCRAM-SHA-1" => Ok(Self::ScramSha1),
            "SCRAM-SHA-256" => Ok(Self::ScramSha256),
            "MONGODB-X509" => Ok(Self::MongodbX509),
            "MONGODB-AWS" => Ok(Self::MongodbAws),
            "GSSAPI" => Ok(Self::Gssapi),
            "PLAIN" => Ok(Self::Plain),
            other => Err(UriError::invalid_option(
                "authMechanism",
                format!("unknown authentication mechanism '{other}'"),
            )),
        }
    }
}

impl std::fmt::Display for AuthMechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Authentication credential resolved from the connection string and
/// programmatic overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Username.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Database to authenticate against.
    pub source: Option<String>,
    /// Authentication mechanism.
    pub mechanism: Option<AuthMechanism>,
    /// Mechanism-specific properties (e.g. `SERVICE_NAME`).
    pub mechanism_properties: Option<Document>,
}

impl Credential {
    /// Create an empty credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the database to authenticate against.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the authentication mechanism.
    pub fn mechanism(mut self, mechanism: AuthMechanism) -> Self {
        self.mechanism = Some(mechanism);
        self
    }

    /// Set the mechanism properties document.
    pub fn mechanism_properties(mut self, properties: Document) -> Self {
        self.mechanism_properties = Some(properties);
        self
    }

    /// Check whether no credential field is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.source.is_none()
            && self.mechanism.is_none()
            && self.mechanism_properties.is_none()
    }
}

/// Wire compressor specification.
///
/// The supported set is currently closed over zlib; a resolved
/// configuration carries at most one compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compressor {
    /// zlib compression with an optional level.
    Zlib {
        /// Compression level, `-1` (library default) through `9`.
        level: Option<i32>,
    },
}

impl Compressor {
    /// zlib with the library-default level.
    pub fn zlib() -> Self {
        Self::Zlib { level: None }
    }

    /// zlib with an explicit compression level.
    pub fn zlib_with_level(level: i32) -> Self {
        Self::Zlib { level: Some(level) }
    }

    /// Get the compressor's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Zlib { .. } => "zlib",
        }
    }

    /// Parse a compressor from its wire name.
    pub fn parse(name: &str) -> UriResult<Self> {
        match name {
            "zlib" => Ok(Self::Zlib { level: None }),
            other => Err(UriError::invalid_option(
                "compressors",
                format!("unsupported compressor '{other}'"),
            )),
        }
    }
}

/// Read concern level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadConcernLevel {
    /// Local reads.
    Local,
    /// Available reads.
    Available,
    /// Majority-committed reads.
    Majority,
    /// Linearizable reads.
    Linearizable,
    /// Snapshot reads.
    Snapshot,
    /// A server-defined level this crate does not know about.
    #[serde(untagged)]
    Other(String),
}

impl ReadConcernLevel {
    /// Construct a level from its wire string.
    pub fn from_str(level: &str) -> Self {
        match level {
            "local" => Self::Local,
            "available" => Self::Available,
            "majority" => Self::Majority,
            "linearizable" => Self::Linearizable,
            "snapshot" => Self::Snapshot,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the wire string for this level.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Available => "available",
            Self::Majority => "majority",
            Self::Linearizable => "linearizable",
            Self::Snapshot => "snapshot",
            Self::Other(level) => level,
        }
    }
}

/// Read concern — the isolation policy for reads.
///
/// Stored and retrieved as an opaque value; this crate does not implement
/// read isolation itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadConcern {
    /// Concern level, if one was chosen.
    pub level: Option<ReadConcernLevel>,
}

impl ReadConcern {
    /// Local read concern.
    pub fn local() -> Self {
        Self {
            level: Some(ReadConcernLevel::Local),
        }
    }

    /// Available read concern.
    pub fn available() -> Self {
        Self {
            level: Some(ReadConcernLevel::Available),
        }
    }

    /// Majority read concern.
    pub fn majority() -> Self {
        Self {
            level: Some(ReadConcernLevel::Majority),
        }
    }

    /// Linearizable read concern.
    pub fn linearizable() -> Self {
        Self {
            level: Some(ReadConcernLevel::Linearizable),
        }
    }

    /// Snapshot read concern.
    pub fn snapshot() -> Self {
        Self {
            level: Some(ReadConcernLevel::Snapshot),
        }
    }

    /// A custom, server-defined read concern level.
    pub fn custom(level: impl Into<String>) -> Self {
        Self {
            level: Some(ReadConcernLevel::from_str(&level.into())),
        }
    }
}

/// Write acknowledgment requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acknowledgment {
    /// Acknowledged by the given number of nodes.
    Nodes(u32),
    /// Acknowledged by a majority of nodes.
    Majority,
    /// Acknowledged by nodes matching a custom tag.
    Custom(String),
}

/// Write concern — the durability policy for writes.
///
/// Stored and retrieved as an opaque value; this crate does not implement
/// write durability itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteConcern {
    /// Acknowledgment requirement.
    pub w: Option<Acknowledgment>,
    /// Whether writes must be journaled before acknowledgment.
    pub journal: Option<bool>,
    /// Time limit in milliseconds for achieving the requirement.
    pub w_timeout_ms: Option<i64>,
}

impl WriteConcern {
    /// Majority write concern.
    pub fn majority() -> Self {
        Self {
            w: Some(Acknowledgment::Majority),
            ..Self::default()
        }
    }

    /// Write concern acknowledged by `n` nodes.
    pub fn nodes(n: u32) -> Self {
        Self {
            w: Some(Acknowledgment::Nodes(n)),
            ..Self::default()
        }
    }

    /// Set the journaling requirement.
    pub fn journal(mut self, journal: bool) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Set the acknowledgment time limit in milliseconds.
    pub fn w_timeout_ms(mut self, timeout: i64) -> Self {
        self.w_timeout_ms = Some(timeout);
        self
    }
}

/// Read preference mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadPreferenceMode {
    /// Read from the primary only.
    #[default]
    Primary,
    /// Read from the primary, falling back to secondaries.
    PrimaryPreferred,
    /// Read from secondaries only.
    Secondary,
    /// Read from secondaries, falling back to the primary.
    SecondaryPreferred,
    /// Read from the nearest member.
    Nearest,
}

impl ReadPreferenceMode {
    /// Get the wire name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryPreferred => "primaryPreferred",
            Self::Secondary => "secondary",
            Self::SecondaryPreferred => "secondaryPreferred",
            Self::Nearest => "nearest",
        }
    }

    /// Parse a mode from its wire name, case-insensitively.
    pub fn parse(mode: &str) -> UriResult<Self> {
        match mode.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "primarypreferred" => Ok(Self::PrimaryPreferred),
            "secondary" => Ok(Self::Secondary),
            "secondarypreferred" => Ok(Self::SecondaryPreferred),
            "nearest" => Ok(Self::Nearest),
            other => Err(UriError::invalid_option(
                "readPreference",
                format!("unknown read preference mode '{other}'"),
            )),
        }
    }
}

/// Read preference — the routing policy for reads.
///
/// Stored and retrieved as an opaque value; this crate does not perform
/// server selection itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadPreference {
    /// Routing mode.
    pub mode: ReadPreferenceMode,
    /// Tag sets restricting eligible members, in preference order.
    pub tag_sets: Option<Vec<Document>>,
    /// Maximum replication lag in seconds for eligible secondaries.
    pub max_staleness_seconds: Option<i32>,
}

impl ReadPreference {
    /// Read from the primary only.
    pub fn primary() -> Self {
        Self::default()
    }

    /// Read from the nearest member.
    pub fn nearest() -> Self {
        Self {
            mode: ReadPreferenceMode::Nearest,
            ..Self::default()
        }
    }

    /// Read from secondaries only.
    pub fn secondary() -> Self {
        Self {
            mode: ReadPreferenceMode::Secondary,
            ..Self::default()
        }
    }

    /// Create a read preference with the given mode.
    pub fn with_mode(mode: ReadPreferenceMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the tag sets.
    pub fn tag_sets(mut self, tag_sets: Vec<Document>) -> Self {
        self.tag_sets = Some(tag_sets);
        self
    }

    /// Set the staleness bound in seconds.
    pub fn max_staleness_seconds(mut self, seconds: i32) -> Self {
        self.max_staleness_seconds = Some(seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_auth_mechanism_names() {
        assert_eq!(AuthMechanism::ScramSha256.name(), "SCRAM-SHA-256");
        assert_eq!(AuthMechanism::parse("scram-sha-1").unwrap(), AuthMechanism::ScramSha1);
        assert_eq!(AuthMechanism::parse("MONGODB-X509").unwrap(), AuthMechanism::MongodbX509);
        assert!(AuthMechanism::parse("KERBEROS").is_err());
    }

    #[test]
    fn test_credential_builder() {
        let credential = Credential::new()
            .username("alice")
            .password("secret")
            .source("admin")
            .mechanism(AuthMechanism::ScramSha256);

        assert_eq!(credential.username.as_deref(), Some("alice"));
        assert_eq!(credential.source.as_deref(), Some("admin"));
        assert!(!credential.is_empty());
        assert!(Credential::new().is_empty());
    }

    #[test]
    fn test_compressor() {
        assert_eq!(Compressor::zlib().name(), "zlib");
        assert_eq!(Compressor::zlib_with_level(6), Compressor::Zlib { level: Some(6) });
        assert_eq!(Compressor::parse("zlib").unwrap(), Compressor::zlib());
        assert!(Compressor::parse("snappy").is_err());
    }

    #[test]
    fn test_read_concern_levels() {
        assert_eq!(ReadConcern::majority().level.unwrap().as_str(), "majority");
        assert_eq!(
            ReadConcernLevel::from_str("linearizable"),
            ReadConcernLevel::Linearizable
        );
        assert_eq!(
            ReadConcernLevel::from_str("custom-level"),
            ReadConcernLevel::Other("custom-level".to_string())
        );
        assert_eq!(ReadConcern::default().level, None);
    }

    #[test]
    fn test_write_concern_builder() {
        let wc = WriteConcern::majority().journal(true).w_timeout_ms(5000);
        assert_eq!(wc.w, Some(Acknowledgment::Majority));
        assert_eq!(wc.journal, Some(true));
        assert_eq!(wc.w_timeout_ms, Some(5000));

        assert_eq!(WriteConcern::nodes(2).w, Some(Acknowledgment::Nodes(2)));
    }

    #[test]
    fn test_read_preference_modes() {
        assert_eq!(ReadPreferenceMode::SecondaryPreferred.as_str(), "secondaryPreferred");
        assert_eq!(
            ReadPreferenceMode::parse("secondaryPreferred").unwrap(),
            ReadPreferenceMode::SecondaryPreferred
        );
        assert!(ReadPreferenceMode::parse("sometimes").is_err());
    }

    #[test]
    fn test_read_preference_builder() {
        let rp = ReadPreference::nearest()
            .tag_sets(vec![doc! { "dc": "ny" }])
            .max_staleness_seconds(120);
        assert_eq!(rp.mode, ReadPreferenceMode::Nearest);
        assert_eq!(rp.tag_sets.as_ref().unwrap().len(), 1);
        assert_eq!(rp.max_staleness_seconds, Some(120));
    }
}
