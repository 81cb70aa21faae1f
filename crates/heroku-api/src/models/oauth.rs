//! OAuth clients, authorizations and tokens.

use super::IdRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An access or refresh token as embedded in other OAuth records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthTokenRef {
    /// Seconds until the token expires; `None` for tokens that never expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Token value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Client that obtained an authorization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthClientRef {
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoint for redirection after authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// Grant issued for an authorization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthGrantRef {
    /// Grant code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Seconds until the grant expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Grant exchanged for a token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthGrant {
    /// Grant code received from the authorization flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Grant type, e.g. `authorization_code` or `refresh_token`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
}

/// Client secret presented when exchanging a grant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthClientSecret {
    /// Secret shared by the client and the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Refresh token presented when exchanging a grant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthRefreshTokenRef {
    /// Refresh token value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A client a user has authorized to act on their behalf.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OAuthAuthorization {
    /// Current access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<OAuthTokenRef>,
    /// Client that obtained the authorization, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<OAuthClientRef>,
    /// When the authorization was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Grant for the authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<OAuthGrantRef>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Refresh token for the authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<OAuthTokenRef>,
    /// Granted scopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    /// When the authorization was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New OAuth authorization.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OAuthAuthorizationCreateOpts {
    /// Client id to authorize.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    /// Human readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Seconds until the access token expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Requested scopes, e.g. `["global"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
}

/// An application users can authorize against their account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OAuthClient {
    /// When the client was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether the client may be used by delinquent accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignores_delinquent: Option<bool>,
    /// Client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoint for redirection after authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Client secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// When the client was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// New OAuth client.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OAuthClientCreateOpts {
    /// Client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoint for redirection after authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// Changes to an OAuth client.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OAuthClientUpdateOpts {
    /// Client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Endpoint for redirection after authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// Tokens an authorized client acts with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OAuthToken {
    /// Current access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<OAuthTokenRef>,
    /// Authorization the tokens belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<IdRef>,
    /// Client secret used to obtain the tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<OAuthClientSecret>,
    /// When the tokens were created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Grant used on the underlying authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<OAuthGrant>,
    /// Unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Refresh token for the authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<OAuthTokenRef>,
    /// OAuth session using the tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<IdRef>,
    /// When the tokens were last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// User the tokens act for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<IdRef>,
}

/// Grant or refresh token exchange.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OAuthTokenCreateOpts {
    /// Client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<OAuthClientSecret>,
    /// Grant to exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant: Option<OAuthGrant>,
    /// Refresh token to exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<OAuthRefreshTokenRef>,
}
