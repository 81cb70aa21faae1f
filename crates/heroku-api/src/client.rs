//! Asynchronous Platform API client.
//!
//! Every method maps to exactly one endpoint and goes through the shared
//! [`Service`] dispatcher. Identities in paths are ids or names, whichever
//! the endpoint accepts.

use crate::models::{
    Account, AccountChangeEmailOpts, AccountChangePasswordOpts, AccountFeature,
    AccountFeatureUpdateOpts, AccountUpdateOpts, Addon, AddonCreateOpts, AddonService,
    AddonUpdateOpts, App, AppCreateOpts, AppFeature, AppFeatureUpdateOpts, AppTransfer,
    AppTransferCreateOpts, AppTransferUpdateOpts, AppUpdateOpts, Collaborator,
    CollaboratorCreateOpts, ConfigVarUpdate, ConfigVars, Domain, DomainCreateOpts, Dyno,
    DynoCreateOpts, Formation, FormationBatchUpdateOpts, FormationUpdateOpts, Key, KeyCreateOpts,
    LogDrain, LogDrainCreateOpts, LogSession, LogSessionCreateOpts, OAuthAuthorization,
    OAuthAuthorizationCreateOpts, OAuthClient, OAuthClientCreateOpts, OAuthClientUpdateOpts,
    OAuthToken, OAuthTokenCreateOpts, Plan, RateLimit, Region, Release, ReleaseCreateOpts,
    ReleaseRollbackOpts, Slug, SlugCreateOpts, SslEndpoint, SslEndpointCreateOpts,
    SslEndpointUpdateOpts, Stack,
};
use crate::Result;
use heroku_core::{ListRange, Service, ServiceConfig, StatusPolicy, Transport};
use std::sync::Arc;
use tracing::debug;

/// Builder for [`HerokuClient`].
#[derive(Clone)]
pub struct HerokuClientBuilder {
    config: ServiceConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for HerokuClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HerokuClientBuilder {
    /// Create a builder targeting the production API.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ServiceConfig::default())
    }

    /// Create a builder from an existing configuration.
    #[must_use]
    pub fn from_config(config: ServiceConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Point the client at another origin, e.g. a mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Attach an API token to the default transport.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.with_api_token(token);
        self
    }

    /// Override the request timeout of the default transport.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config = self.config.with_timeout(seconds);
        self
    }

    /// Override how non-success statuses are handled.
    #[must_use]
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config = self.config.with_status_policy(policy);
        self
    }

    /// Use a preconfigured `reqwest` client as transport.
    #[must_use]
    pub fn with_http_client(self, client: reqwest::Client) -> Self {
        self.with_transport(client)
    }

    /// Use a custom transport.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the default
    /// transport cannot be built.
    pub fn build(self) -> Result<HerokuClient> {
        debug!(base_url = %self.config.base_url, "building platform API client");
        let mut builder = Service::builder(self.config);
        if let Some(transport) = self.transport {
            builder = builder.with_shared_transport(transport);
        }
        Ok(HerokuClient {
            service: builder.build()?,
        })
    }
}

/// Asynchronous Platform API client.
#[derive(Debug, Clone)]
pub struct HerokuClient {
    service: Service,
}

impl HerokuClient {
    /// Client for the production API with the default transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the default transport cannot be built.
    pub fn new() -> Result<Self> {
        HerokuClientBuilder::new().build()
    }

    /// Start a builder targeting the production API.
    #[must_use]
    pub fn builder() -> HerokuClientBuilder {
        HerokuClientBuilder::new()
    }

    /// Wrap an existing dispatcher.
    #[must_use]
    pub fn from_service(service: Service) -> Self {
        Self { service }
    }

    /// The underlying dispatcher, for endpoints without a typed method.
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    // Account

    /// Info for the account.
    pub async fn get_account(&self) -> Result<Account> {
        self.service.get_json("/account", None).await
    }

    /// Update the account.
    pub async fn update_account(&self, opts: &AccountUpdateOpts) -> Result<Account> {
        self.service.patch_json("/account", opts).await
    }

    /// Change the account email.
    pub async fn change_account_email(&self, opts: &AccountChangeEmailOpts) -> Result<Account> {
        self.service.patch_json("/account", opts).await
    }

    /// Change the account password.
    pub async fn change_account_password(
        &self,
        opts: &AccountChangePasswordOpts,
    ) -> Result<Account> {
        self.service.patch_json("/account", opts).await
    }

    /// Info for an account feature.
    pub async fn get_account_feature(&self, feature: &str) -> Result<AccountFeature> {
        let path = format!("/account/features/{feature}");
        self.service.get_json(&path, None).await
    }

    /// List account features.
    pub async fn list_account_features(
        &self,
        range: Option<&ListRange>,
    ) -> Result<Vec<AccountFeature>> {
        self.service.get_json("/account/features", range).await
    }

    /// Enable or disable an account feature.
    pub async fn update_account_feature(
        &self,
        feature: &str,
        opts: &AccountFeatureUpdateOpts,
    ) -> Result<AccountFeature> {
        let path = format!("/account/features/{feature}");
        self.service.patch_json(&path, opts).await
    }

    /// Remaining request tokens. Does not count against the limit.
    pub async fn get_rate_limit(&self) -> Result<RateLimit> {
        self.service.get_json("/account/rate-limits", None).await
    }

    // Keys

    /// Upload an SSH key.
    pub async fn create_key(&self, opts: &KeyCreateOpts) -> Result<Key> {
        self.service.post_json("/account/keys", opts).await
    }

    /// Remove an SSH key.
    pub async fn delete_key(&self, key: &str) -> Result<()> {
        let path = format!("/account/keys/{key}");
        self.service.delete(&path).await
    }

    /// Info for an SSH key.
    pub async fn get_key(&self, key: &str) -> Result<Key> {
        let path = format!("/account/keys/{key}");
        self.service.get_json(&path, None).await
    }

    /// List SSH keys.
    pub async fn list_keys(&self, range: Option<&ListRange>) -> Result<Vec<Key>> {
        self.service.get_json("/account/keys", range).await
    }

    // App transfers

    /// Offer an app to another account.
    pub async fn create_app_transfer(&self, opts: &AppTransferCreateOpts) -> Result<AppTransfer> {
        self.service.post_json("/account/app-transfers", opts).await
    }

    /// Cancel an app transfer.
    pub async fn delete_app_transfer(&self, transfer: &str) -> Result<()> {
        let path = format!("/account/app-transfers/{transfer}");
        self.service.delete(&path).await
    }

    /// Info for an app transfer.
    pub async fn get_app_transfer(&self, transfer: &str) -> Result<AppTransfer> {
        let path = format!("/account/app-transfers/{transfer}");
        self.service.get_json(&path, None).await
    }

    /// List app transfers.
    pub async fn list_app_transfers(&self, range: Option<&ListRange>) -> Result<Vec<AppTransfer>> {
        self.service.get_json("/account/app-transfers", range).await
    }

    /// Accept or decline an app transfer.
    pub async fn update_app_transfer(
        &self,
        transfer: &str,
        opts: &AppTransferUpdateOpts,
    ) -> Result<AppTransfer> {
        let path = format!("/account/app-transfers/{transfer}");
        self.service.patch_json(&path, opts).await
    }

    // Apps

    /// Create an app.
    pub async fn create_app(&self, opts: &AppCreateOpts) -> Result<App> {
        self.service.post_json("/apps", opts).await
    }

    /// Delete an app.
    pub async fn delete_app(&self, app: &str) -> Result<()> {
        let path = format!("/apps/{app}");
        self.service.delete(&path).await
    }

    /// Info for an app.
    pub async fn get_app(&self, app: &str) -> Result<App> {
        let path = format!("/apps/{app}");
        self.service.get_json(&path, None).await
    }

    /// List apps.
    pub async fn list_apps(&self, range: Option<&ListRange>) -> Result<Vec<App>> {
        self.service.get_json("/apps", range).await
    }

    /// Update an app.
    pub async fn update_app(&self, app: &str, opts: &AppUpdateOpts) -> Result<App> {
        let path = format!("/apps/{app}");
        self.service.patch_json(&path, opts).await
    }

    /// Info for an app feature.
    pub async fn get_app_feature(&self, app: &str, feature: &str) -> Result<AppFeature> {
        let path = format!("/apps/{app}/features/{feature}");
        self.service.get_json(&path, None).await
    }

    /// List app features.
    pub async fn list_app_features(
        &self,
        app: &str,
        range: Option<&ListRange>,
    ) -> Result<Vec<AppFeature>> {
        let path = format!("/apps/{app}/features");
        self.service.get_json(&path, range).await
    }

    /// Enable or disable an app feature.
    pub async fn update_app_feature(
        &self,
        app: &str,
        feature: &str,
        opts: &AppFeatureUpdateOpts,
    ) -> Result<AppFeature> {
        let path = format!("/apps/{app}/features/{feature}");
        self.service.patch_json(&path, opts).await
    }

    /// Config vars of an app.
    pub async fn get_config_vars(&self, app: &str) -> Result<ConfigVars> {
        let path = format!("/apps/{app}/config-vars");
        self.service.get_json(&path, None).await
    }

    /// Set or remove config vars; returns the resulting set.
    pub async fn update_config_vars(
        &self,
        app: &str,
        changes: &ConfigVarUpdate,
    ) -> Result<ConfigVars> {
        let path = format!("/apps/{app}/config-vars");
        self.service.patch_json(&path, changes).await
    }

    // Collaborators

    /// Give an account access to an app.
    pub async fn create_collaborator(
        &self,
        app: &str,
        opts: &CollaboratorCreateOpts,
    ) -> Result<Collaborator> {
        let path = format!("/apps/{app}/collaborators");
        self.service.post_json(&path, opts).await
    }

    /// Revoke a collaborator.
    pub async fn delete_collaborator(&self, app: &str, collaborator: &str) -> Result<()> {
        let path = format!("/apps/{app}/collaborators/{collaborator}");
        self.service.delete(&path).await
    }

    /// Info for a collaborator.
    pub async fn get_collaborator(&self, app: &str, collaborator: &str) -> Result<Collaborator> {
        let path = format!("/apps/{app}/collaborators/{collaborator}");
        self.service.get_json(&path, None).await
    }

    /// List collaborators.
    pub async fn list_collaborators(
        &self,
        app: &str,
        range: Option<&ListRange>,
    ) -> Result<Vec<Collaborator>> {
        let path = format!("/apps/{app}/collaborators");
        self.service.get_json(&path, range).await
    }

    // Domains

    /// Route a hostname to an app.
    pub async fn create_domain(&self, app: &str, opts: &DomainCreateOpts) -> Result<Domain> {
        let path = format!("/apps/{app}/domains");
        self.service.post_json(&path, opts).await
    }

    /// Remove a domain.
    pub async fn delete_domain(&self, app: &str, domain: &str) -> Result<()> {
        let path = format!("/apps/{app}/domains/{domain}");
        self.service.delete(&path).await
    }

    /// Info for a domain.
    pub async fn get_domain(&self, app: &str, domain: &str) -> Result<Domain> {
        let path = format!("/apps/{app}/domains/{domain}");
        self.service.get_json(&path, None).await
    }

    /// List domains.
    pub async fn list_domains(&self, app: &str, range: Option<&ListRange>) -> Result<Vec<Domain>> {
        let path = format!("/apps/{app}/domains");
        self.service.get_json(&path, range).await
    }

    // Dynos

    /// Run a one-off dyno.
    pub async fn create_dyno(&self, app: &str, opts: &DynoCreateOpts) -> Result<Dyno> {
        let path = format!("/apps/{app}/dynos");
        self.service.post_json(&path, opts).await
    }

    /// Restart a dyno.
    pub async fn restart_dyno(&self, app: &str, dyno: &str) -> Result<()> {
        let path = format!("/apps/{app}/dynos/{dyno}");
        self.service.delete(&path).await
    }

    /// Restart every dyno of an app.
    pub async fn restart_all_dynos(&self, app: &str) -> Result<()> {
        let path = format!("/apps/{app}/dynos");
        self.service.delete(&path).await
    }

    /// Info for a dyno.
    pub async fn get_dyno(&self, app: &str, dyno: &str) -> Result<Dyno> {
        let path = format!("/apps/{app}/dynos/{dyno}");
        self.service.get_json(&path, None).await
    }

    /// List dynos.
    pub async fn list_dynos(&self, app: &str, range: Option<&ListRange>) -> Result<Vec<Dyno>> {
        let path = format!("/apps/{app}/dynos");
        self.service.get_json(&path, range).await
    }

    // Formation

    /// Info for a process type.
    pub async fn get_formation(&self, app: &str, process_type: &str) -> Result<Formation> {
        let path = format!("/apps/{app}/formation/{process_type}");
        self.service.get_json(&path, None).await
    }

    /// List process types.
    pub async fn list_formation(
        &self,
        app: &str,
        range: Option<&ListRange>,
    ) -> Result<Vec<Formation>> {
        let path = format!("/apps/{app}/formation");
        self.service.get_json(&path, range).await
    }

    /// Scale or resize several process types at once.
    pub async fn batch_update_formation(
        &self,
        app: &str,
        opts: &FormationBatchUpdateOpts,
    ) -> Result<Vec<Formation>> {
        let path = format!("/apps/{app}/formation");
        self.service.patch_json(&path, opts).await
    }

    /// Scale or resize a process type.
    pub async fn update_formation(
        &self,
        app: &str,
        process_type: &str,
        opts: &FormationUpdateOpts,
    ) -> Result<Formation> {
        let path = format!("/apps/{app}/formation/{process_type}");
        self.service.patch_json(&path, opts).await
    }

    // Logging

    /// Add a log drain.
    pub async fn create_log_drain(&self, app: &str, opts: &LogDrainCreateOpts) -> Result<LogDrain> {
        let path = format!("/apps/{app}/log-drains");
        self.service.post_json(&path, opts).await
    }

    /// Remove a log drain. Drains added by add-ons go away with the add-on only.
    pub async fn delete_log_drain(&self, app: &str, drain: &str) -> Result<()> {
        let path = format!("/apps/{app}/log-drains/{drain}");
        self.service.delete(&path).await
    }

    /// Info for a log drain.
    pub async fn get_log_drain(&self, app: &str, drain: &str) -> Result<LogDrain> {
        let path = format!("/apps/{app}/log-drains/{drain}");
        self.service.get_json(&path, None).await
    }

    /// List log drains.
    pub async fn list_log_drains(
        &self,
        app: &str,
        range: Option<&ListRange>,
    ) -> Result<Vec<LogDrain>> {
        let path = format!("/apps/{app}/log-drains");
        self.service.get_json(&path, range).await
    }

    /// Open a log session.
    pub async fn create_log_session(
        &self,
        app: &str,
        opts: &LogSessionCreateOpts,
    ) -> Result<LogSession> {
        let path = format!("/apps/{app}/log-sessions");
        self.service.post_json(&path, opts).await
    }

    // Releases and slugs

    /// Info for a release.
    pub async fn get_release(&self, app: &str, release: &str) -> Result<Release> {
        let path = format!("/apps/{app}/releases/{release}");
        self.service.get_json(&path, None).await
    }

    /// List releases.
    pub async fn list_releases(
        &self,
        app: &str,
        range: Option<&ListRange>,
    ) -> Result<Vec<Release>> {
        let path = format!("/apps/{app}/releases");
        self.service.get_json(&path, range).await
    }

    /// Release an existing slug.
    pub async fn create_release(&self, app: &str, opts: &ReleaseCreateOpts) -> Result<Release> {
        let path = format!("/apps/{app}/releases");
        self.service.post_json(&path, opts).await
    }

    /// Roll back to an earlier release.
    pub async fn rollback_release(
        &self,
        app: &str,
        opts: &ReleaseRollbackOpts,
    ) -> Result<Release> {
        let path = format!("/apps/{app}/releases");
        self.service.post_json(&path, opts).await
    }

    /// Info for a slug.
    pub async fn get_slug(&self, app: &str, slug: &str) -> Result<Slug> {
        let path = format!("/apps/{app}/slugs/{slug}");
        self.service.get_json(&path, None).await
    }

    /// Register a slug; upload the archive to the returned blob URL.
    pub async fn create_slug(&self, app: &str, opts: &SlugCreateOpts) -> Result<Slug> {
        let path = format!("/apps/{app}/slugs");
        self.service.post_json(&path, opts).await
    }

    // SSL endpoints

    /// Add an SSL endpoint.
    pub async fn create_ssl_endpoint(
        &self,
        app: &str,
        opts: &SslEndpointCreateOpts,
    ) -> Result<SslEndpoint> {
        let path = format!("/apps/{app}/ssl-endpoints");
        self.service.post_json(&path, opts).await
    }

    /// Remove an SSL endpoint.
    pub async fn delete_ssl_endpoint(&self, app: &str, endpoint: &str) -> Result<()> {
        let path = format!("/apps/{app}/ssl-endpoints/{endpoint}");
        self.service.delete(&path).await
    }

    /// Info for an SSL endpoint.
    pub async fn get_ssl_endpoint(&self, app: &str, endpoint: &str) -> Result<SslEndpoint> {
        let path = format!("/apps/{app}/ssl-endpoints/{endpoint}");
        self.service.get_json(&path, None).await
    }

    /// List SSL endpoints.
    pub async fn list_ssl_endpoints(
        &self,
        app: &str,
        range: Option<&ListRange>,
    ) -> Result<Vec<SslEndpoint>> {
        let path = format!("/apps/{app}/ssl-endpoints");
        self.service.get_json(&path, range).await
    }

    /// Update or roll back an SSL endpoint's certificate.
    pub async fn update_ssl_endpoint(
        &self,
        app: &str,
        endpoint: &str,
        opts: &SslEndpointUpdateOpts,
    ) -> Result<SslEndpoint> {
        let path = format!("/apps/{app}/ssl-endpoints/{endpoint}");
        self.service.patch_json(&path, opts).await
    }

    // Add-ons

    /// Provision an add-on.
    pub async fn create_addon(&self, app: &str, opts: &AddonCreateOpts) -> Result<Addon> {
        let path = format!("/apps/{app}/addons");
        self.service.post_json(&path, opts).await
    }

    /// Deprovision an add-on.
    pub async fn delete_addon(&self, app: &str, addon: &str) -> Result<()> {
        let path = format!("/apps/{app}/addons/{addon}");
        self.service.delete(&path).await
    }

    /// Info for an add-on.
    pub async fn get_addon(&self, app: &str, addon: &str) -> Result<Addon> {
        let path = format!("/apps/{app}/addons/{addon}");
        self.service.get_json(&path, None).await
    }

    /// List add-ons.
    pub async fn list_addons(&self, app: &str, range: Option<&ListRange>) -> Result<Vec<Addon>> {
        let path = format!("/apps/{app}/addons");
        self.service.get_json(&path, range).await
    }

    /// Change an add-on's plan.
    pub async fn update_addon(
        &self,
        app: &str,
        addon: &str,
        opts: &AddonUpdateOpts,
    ) -> Result<Addon> {
        let path = format!("/apps/{app}/addons/{addon}");
        self.service.patch_json(&path, opts).await
    }

    /// Info for an add-on service.
    pub async fn get_addon_service(&self, service: &str) -> Result<AddonService> {
        let path = format!("/addon-services/{service}");
        self.service.get_json(&path, None).await
    }

    /// List add-on services.
    pub async fn list_addon_services(
        &self,
        range: Option<&ListRange>,
    ) -> Result<Vec<AddonService>> {
        self.service.get_json("/addon-services", range).await
    }

    /// Info for a plan of an add-on service.
    pub async fn get_plan(&self, service: &str, plan: &str) -> Result<Plan> {
        let path = format!("/addon-services/{service}/plans/{plan}");
        self.service.get_json(&path, None).await
    }

    /// List plans of an add-on service.
    pub async fn list_plans(&self, service: &str, range: Option<&ListRange>) -> Result<Vec<Plan>> {
        let path = format!("/addon-services/{service}/plans");
        self.service.get_json(&path, range).await
    }

    // OAuth

    /// Create an OAuth authorization.
    pub async fn create_oauth_authorization(
        &self,
        opts: &OAuthAuthorizationCreateOpts,
    ) -> Result<OAuthAuthorization> {
        self.service.post_json("/oauth/authorizations", opts).await
    }

    /// Revoke an OAuth authorization.
    pub async fn delete_oauth_authorization(&self, authorization: &str) -> Result<()> {
        let path = format!("/oauth/authorizations/{authorization}");
        self.service.delete(&path).await
    }

    /// Info for an OAuth authorization.
    pub async fn get_oauth_authorization(&self, authorization: &str) -> Result<OAuthAuthorization> {
        let path = format!("/oauth/authorizations/{authorization}");
        self.service.get_json(&path, None).await
    }

    /// List OAuth authorizations.
    pub async fn list_oauth_authorizations(
        &self,
        range: Option<&ListRange>,
    ) -> Result<Vec<OAuthAuthorization>> {
        self.service.get_json("/oauth/authorizations", range).await
    }

    /// Register an OAuth client.
    pub async fn create_oauth_client(&self, opts: &OAuthClientCreateOpts) -> Result<OAuthClient> {
        self.service.post_json("/oauth/clients", opts).await
    }

    /// Delete an OAuth client.
    pub async fn delete_oauth_client(&self, client: &str) -> Result<()> {
        let path = format!("/oauth/clients/{client}");
        self.service.delete(&path).await
    }

    /// Info for an OAuth client.
    pub async fn get_oauth_client(&self, client: &str) -> Result<OAuthClient> {
        let path = format!("/oauth/clients/{client}");
        self.service.get_json(&path, None).await
    }

    /// List OAuth clients.
    pub async fn list_oauth_clients(&self, range: Option<&ListRange>) -> Result<Vec<OAuthClient>> {
        self.service.get_json("/oauth/clients", range).await
    }

    /// Update an OAuth client.
    pub async fn update_oauth_client(
        &self,
        client: &str,
        opts: &OAuthClientUpdateOpts,
    ) -> Result<OAuthClient> {
        let path = format!("/oauth/clients/{client}");
        self.service.patch_json(&path, opts).await
    }

    /// Exchange a grant or refresh token for tokens.
    pub async fn create_oauth_token(&self, opts: &OAuthTokenCreateOpts) -> Result<OAuthToken> {
        self.service.post_json("/oauth/tokens", opts).await
    }

    // Catalogue

    /// Info for a region.
    pub async fn get_region(&self, region: &str) -> Result<Region> {
        let path = format!("/regions/{region}");
        self.service.get_json(&path, None).await
    }

    /// List regions.
    pub async fn list_regions(&self, range: Option<&ListRange>) -> Result<Vec<Region>> {
        self.service.get_json("/regions", range).await
    }

    /// Info for a stack.
    pub async fn get_stack(&self, stack: &str) -> Result<Stack> {
        let path = format!("/stacks/{stack}");
        self.service.get_json(&path, None).await
    }

    /// List stacks.
    pub async fn list_stacks(&self, range: Option<&ListRange>) -> Result<Vec<Stack>> {
        self.service.get_json("/stacks", range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormationBatchUpdate;
    use heroku_core::Error;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> HerokuClient {
        HerokuClient::builder()
            .with_base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn get_app_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/my-app"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "01234567-89ab-cdef-0123-456789abcdef",
                "name": "my-app",
                "maintenance": false,
                "owner": {"email": "owner@example.com", "id": "owner-id"},
                "region": {"id": "region-id", "name": "us"},
                "created_at": "2012-01-01T12:00:00Z",
                "archived_at": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let app = client.get_app("my-app").await.unwrap();
        assert_eq!(app.name.as_deref(), Some("my-app"));
        assert_eq!(app.maintenance, Some(false));
        assert_eq!(
            app.region.and_then(|region| region.name).as_deref(),
            Some("us")
        );
        assert!(app.archived_at.is_none());
        assert!(app.created_at.is_some());
    }

    #[tokio::test]
    async fn list_apps_with_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps"))
            .respond_with(ResponseTemplate::new(206).set_body_json(json!([
                {"id": "1", "name": "a"},
                {"id": "2", "name": "b"}
            ])))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let range = ListRange::new().with_field("name").with_max(2);
        let apps = client.list_apps(Some(&range)).await.unwrap();
        assert_eq!(apps.len(), 2);

        let received = server.received_requests().await.unwrap();
        let sent = received[0]
            .headers
            .get("range")
            .and_then(|value| value.to_str().ok());
        assert_eq!(sent, Some("name ..; max=2"));
    }

    #[tokio::test]
    async fn create_app_omits_unset_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/apps"))
            .and(body_json(json!({"region": "eu"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": "1", "name": "gen-123"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let opts = AppCreateOpts {
            region: Some("eu".to_string()),
            ..AppCreateOpts::default()
        };
        let app = client.create_app(&opts).await.unwrap();
        assert_eq!(app.name.as_deref(), Some("gen-123"));
    }

    #[tokio::test]
    async fn update_config_vars_sends_null_for_removal() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/apps/my-app/config-vars"))
            .and(body_json(json!({"OLD": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"KEPT": "1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let mut changes = ConfigVarUpdate::new();
        changes.insert("OLD".to_string(), None);
        let vars = client.update_config_vars("my-app", &changes).await.unwrap();
        assert_eq!(vars.get("KEPT").map(String::as_str), Some("1"));
        assert!(!vars.contains_key("OLD"));
    }

    #[tokio::test]
    async fn restart_dyno_discards_response() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/apps/my-app/dynos/web.1"))
            .respond_with(ResponseTemplate::new(202).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.restart_dyno("my-app", "web.1").await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn restart_all_dynos_targets_collection() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/apps/my-app/dynos"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.restart_all_dynos("my-app").await.unwrap();
    }

    #[tokio::test]
    async fn batch_update_formation_returns_list() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/apps/my-app/formation"))
            .and(body_json(json!({
                "updates": [
                    {"process": "web", "quantity": 2},
                    {"process": "worker", "size": "2X"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"type": "web", "quantity": 2, "size": "1X"},
                {"type": "worker", "quantity": 1, "size": "2X"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let opts = FormationBatchUpdateOpts {
            updates: vec![
                FormationBatchUpdate {
                    process: "web".to_string(),
                    quantity: Some(2),
                    size: None,
                },
                FormationBatchUpdate {
                    process: "worker".to_string(),
                    quantity: None,
                    size: Some("2X".to_string()),
                },
            ],
        };
        let formation = client.batch_update_formation("my-app", &opts).await.unwrap();
        assert_eq!(formation.len(), 2);
        assert_eq!(formation[0].process_type.as_deref(), Some("web"));
        assert_eq!(formation[1].size.as_deref(), Some("2X"));
    }

    #[tokio::test]
    async fn rate_limit_reads_remaining() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account/rate-limits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"remaining": 2399})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let limit = client.get_rate_limit().await.unwrap();
        assert_eq!(limit.remaining, Some(2399));
    }

    #[tokio::test]
    async fn error_payload_decodes_into_record_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "id": "not_found",
                "message": "Couldn't find that app."
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let app = client.get_app("missing").await.unwrap();
        assert_eq!(app.id.as_deref(), Some("not_found"));
        assert_eq!(app.name, None);
    }

    #[tokio::test]
    async fn strict_client_reports_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "id": "not_found",
                "message": "Couldn't find that app."
            })))
            .mount(&server)
            .await;

        let client = HerokuClient::builder()
            .with_base_url(server.uri())
            .with_status_policy(StatusPolicy::Strict)
            .build()
            .unwrap();
        let err = client.get_app("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, Error::Api { ref id, .. } if id == "not_found"));
    }

    #[tokio::test]
    async fn create_oauth_token_nests_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/tokens"))
            .and(body_json(json!({
                "client": {"secret": "s3cret"},
                "grant": {"code": "abc", "type": "authorization_code"}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "access_token": {"expires_in": 28800, "id": "tok-id", "token": "tok"},
                "grant": {"code": "abc", "type": "authorization_code"},
                "user": {"id": "user-id"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let opts = OAuthTokenCreateOpts {
            client: Some(crate::models::OAuthClientSecret {
                secret: Some("s3cret".to_string()),
            }),
            grant: Some(crate::models::OAuthGrant {
                code: Some("abc".to_string()),
                grant_type: Some("authorization_code".to_string()),
            }),
            refresh_token: None,
        };
        let token = client.create_oauth_token(&opts).await.unwrap();
        let access = token.access_token.unwrap();
        assert_eq!(access.expires_in, Some(28800));
        assert_eq!(access.token.as_deref(), Some("tok"));
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = HerokuClient::builder()
            .with_base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn default_client_targets_production() {
        let client = HerokuClient::new().unwrap();
        assert_eq!(client.service().base_url(), "https://api.heroku.com");
    }
}
