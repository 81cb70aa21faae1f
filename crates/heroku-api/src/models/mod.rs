//! Request and response shapes for Platform API resources.
//!
//! Response records keep every attribute optional: the platform omits
//! attributes freely and the dispatcher decodes error payloads into the
//! same types. Request option structs skip unset fields when serialized.

mod account;
mod addon;
mod app;
mod oauth;
mod platform;
mod runtime;

pub use account::{
    Account, AccountChangeEmailOpts, AccountChangePasswordOpts, AccountFeature,
    AccountFeatureUpdateOpts, AccountUpdateOpts, AppTransfer, AppTransferCreateOpts,
    AppTransferUpdateOpts, Key, KeyCreateOpts, RateLimit,
};
pub use addon::{Addon, AddonCreateOpts, AddonService, AddonUpdateOpts, Plan, PlanPrice};
pub use app::{
    App, AppCreateOpts, AppFeature, AppFeatureUpdateOpts, AppUpdateOpts, Collaborator,
    CollaboratorCreateOpts, ConfigVarUpdate, ConfigVars, Domain, DomainCreateOpts,
};
pub use oauth::{
    OAuthAuthorization, OAuthAuthorizationCreateOpts, OAuthClient, OAuthClientCreateOpts,
    OAuthClientRef, OAuthClientSecret, OAuthClientUpdateOpts, OAuthGrant, OAuthGrantRef,
    OAuthRefreshTokenRef, OAuthToken, OAuthTokenCreateOpts, OAuthTokenRef,
};
pub use platform::{Region, Stack};
pub use runtime::{
    Dyno, DynoCreateOpts, DynoRelease, Formation, FormationBatchUpdate,
    FormationBatchUpdateOpts, FormationUpdateOpts, LogDrain, LogDrainCreateOpts, LogSession,
    LogSessionCreateOpts, Release, ReleaseCreateOpts, ReleaseRollbackOpts, Slug, SlugBlob,
    SlugCreateOpts, SslEndpoint, SslEndpointCreateOpts, SslEndpointUpdateOpts,
};

use serde::{Deserialize, Serialize};

/// Reference to another resource by id and name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reference to an account by id and email.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountRef {
    /// Unique identifier of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Email address of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Reference to a resource by id only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
