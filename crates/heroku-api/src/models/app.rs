//! Apps and the resources hanging directly off them: features, config vars,
//! collaborators and domains.

use super::{AccountRef, ResourceRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A program deployed and run on the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct App {
    /// When the app was archived, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    /// Description from the buildpack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildpack_provided_description: Option<String>,
    /// When the app was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Git repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether maintenance mode is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<bool>,
    /// Unique name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AccountRef>,
    /// Region the app runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<ResourceRef>,
    /// When the app was last released.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<DateTime<Utc>>,
    /// Git repository size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_size: Option<i64>,
    /// Slug size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug_size: Option<i64>,
    /// Stack the app runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<ResourceRef>,
    /// When the app was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Web URL of the app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// New app.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AppCreateOpts {
    /// Unique name; generated when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Region id or name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Stack id or name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Changes to an app.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AppUpdateOpts {
    /// Maintenance mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<bool>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A labs capability that can be enabled or disabled for an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppFeature {
    /// When the feature was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Description of the feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Documentation URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_url: Option<String>,
    /// Whether the feature is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release status (alpha, beta, ga).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// When the feature was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Toggle for an app feature.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AppFeatureUpdateOpts {
    /// Whether the feature should be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Config vars of an app.
pub type ConfigVars = HashMap<String, String>;

/// Config var changes; a `None` value removes the var.
///
/// Entries are always serialized, so `None` goes over the wire as `null`.
pub type ConfigVarUpdate = HashMap<String, Option<String>>;

/// An account given access to an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Collaborator {
    /// When the collaborator was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the collaborator was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Collaborating account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountRef>,
}

/// New collaborator.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CollaboratorCreateOpts {
    /// Skip the notification email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    /// Account id or email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// A hostname routed to an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    /// When the domain was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Full hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the domain was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New domain.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DomainCreateOpts {
    /// Full hostname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}
