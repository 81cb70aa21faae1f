//! Account level resources: the account itself, its features, SSH keys,
//! rate limits and app transfers.

use super::{AccountRef, ResourceRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An individual signed up to use the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Whether to allow third party web activity tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_tracking: Option<bool>,
    /// Whether the account is enrolled in beta features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<bool>,
    /// When the account was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the account last authorized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// When the account was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether the account has been verified with billing information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Changes accepted by `PATCH /account`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AccountUpdateOpts {
    /// Whether to allow third party web activity tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_tracking: Option<bool>,
    /// Whether to enroll in beta features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<bool>,
    /// Full name of the account owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current password, required to confirm the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Email change for the account.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AccountChangeEmailOpts {
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Current password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Password change for the account.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AccountChangePasswordOpts {
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    /// Current password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A labs capability that can be enabled or disabled for an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountFeature {
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

/// Toggle for an account feature.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AccountFeatureUpdateOpts {
    /// Whether the feature should be enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Public SSH key used to authorize git operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Key {
    /// When the key was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Deprecated; the comment part of the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Fingerprint of the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// When the key was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New SSH key.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct KeyCreateOpts {
    /// Full public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Request tokens left for the account.
///
/// Reading it does not consume a token.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimit {
    /// Allowed requests remaining in the current window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i64>,
}

/// Two party interaction for transferring ownership of an app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppTransfer {
    /// App involved in the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<ResourceRef>,
    /// When the transfer was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Current owner of the app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AccountRef>,
    /// Account the app is being transferred to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<AccountRef>,
    /// Transfer state (pending, accepted, declined).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// When the transfer was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New app transfer.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AppTransferCreateOpts {
    /// App id or name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    /// Recipient account id or email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// Answer to a pending app transfer.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AppTransferUpdateOpts {
    /// New state (accepted, declined).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
