//! What runs an app: dynos, formation, releases, slugs, logging and SSL
//! endpoints.

use super::{AccountRef, IdRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A running process of an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dyno {
    /// Rendezvous URL for attached dynos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_url: Option<String>,
    /// Command the dyno runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// When the dyno was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name, e.g. `web.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release the dyno runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<DynoRelease>,
    /// Dyno size, e.g. `1X`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Current state (crashed, down, idle, starting, up).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Process type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub process_type: Option<String>,
    /// When the dyno was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Release a dyno belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DynoRelease {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Release version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// One-off dyno to run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DynoCreateOpts {
    /// Attach to the dyno's console.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach: Option<bool>,
    /// Command to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Extra environment variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,
    /// Dyno size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Scale and size of one process type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    /// Command the process type runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// When the formation was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Number of dynos to run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Dyno size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Process type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub process_type: Option<String>,
    /// When the formation was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Scale or resize a single process type.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FormationUpdateOpts {
    /// Number of dynos to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Dyno size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// One entry of a batch formation update.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FormationBatchUpdate {
    /// Process type id or name.
    pub process: String,
    /// Number of dynos to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Dyno size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Scale several process types at once.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FormationBatchUpdateOpts {
    /// Updates to apply.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<FormationBatchUpdate>,
}

/// Forwarding of an app's logs to a syslog endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogDrain {
    /// Add-on that created the drain; such drains go away with the add-on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addon: Option<IdRef>,
    /// When the drain was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Token identifying the drain in log lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// When the drain was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Syslog endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// New log drain.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LogDrainCreateOpts {
    /// Syslog endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Reference to an HTTP log stream of an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LogSession {
    /// When the session was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// URL to stream the logs from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logplex_url: Option<String>,
    /// When the session was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New log session.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct LogSessionCreateOpts {
    /// Only logs of this dyno.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dyno: Option<String>,
    /// Number of past lines to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<i64>,
    /// Only logs from this source, e.g. `app`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Keep the stream open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<bool>,
}

/// A combination of code, config vars and add-ons for an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Release {
    /// When the release was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Description of the changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Slug running in the release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<IdRef>,
    /// When the release was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Account that created the release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountRef>,
    /// Sequential version number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// New release from an existing slug.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReleaseCreateOpts {
    /// Description of the changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slug id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Rollback to an earlier release.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReleaseRollbackOpts {
    /// Release id or version to roll back to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
}

/// Snapshot of application code ready to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Slug {
    /// Where to fetch or store the slug archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<SlugBlob>,
    /// Description from the buildpack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildpack_provided_description: Option<String>,
    /// Source commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// When the slug was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Commands per process type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_types: Option<HashMap<String, String>>,
    /// When the slug was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Location of a slug archive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlugBlob {
    /// HTTP method to use against `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Signed URL of the archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// New slug.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SlugCreateOpts {
    /// Description from the buildpack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildpack_provided_description: Option<String>,
    /// Source commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Commands per process type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_types: Option<HashMap<String, String>>,
}

/// Public address serving a custom certificate for an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SslEndpoint {
    /// PEM certificate chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_chain: Option<String>,
    /// Canonical name record to point the domain at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    /// When the endpoint was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the endpoint was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New SSL endpoint.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SslEndpointCreateOpts {
    /// PEM certificate chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_chain: Option<String>,
    /// PEM private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

/// Changes to an SSL endpoint.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SslEndpointUpdateOpts {
    /// PEM certificate chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_chain: Option<String>,
    /// PEM private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Roll back to the previous certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback: Option<bool>,
}
