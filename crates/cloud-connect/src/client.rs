//! Client for the Cloud Connect web API

use std::fmt;

use cloud_connect_http::{ApiResponse, HttpClient, Params, Verb};
use serde_json::Value;
use tracing::instrument;

use crate::auth::BasicAuth;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::request::ApiBase;

/// One endpoint invocation: verb, path and optional parameters.
///
/// Every public operation reduces to one of these; [`CloudConnectClient::execute`]
/// is the single place requests are assembled, authenticated and dispatched.
#[derive(Debug, Clone)]
struct Endpoint {
    verb: Verb,
    path: String,
    query: Option<Params>,
    body: Option<Params>,
}

impl Endpoint {
    fn get(path: impl Into<String>) -> Self {
        Self {
            verb: Verb::Get,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    fn post(path: impl Into<String>) -> Self {
        Self {
            verb: Verb::Post,
            ..Self::get(path)
        }
    }

    fn put(path: impl Into<String>) -> Self {
        Self {
            verb: Verb::Put,
            ..Self::get(path)
        }
    }

    fn query(mut self, query: Option<&Params>) -> Self {
        self.query = query.cloned();
        self
    }

    fn body(mut self, body: Params) -> Self {
        self.body = Some(body);
        self
    }
}

/// Merge caller-supplied options over a fixed body skeleton
fn merged(mut skeleton: Params, options: Option<&Params>) -> Params {
    if let Some(options) = options {
        for (key, value) in options {
            skeleton.insert(key.clone(), value.clone());
        }
    }
    skeleton
}

/// Main client for the Cloud Connect web API.
///
/// Owns the credential store and the HTTP client; every operation builds a
/// request from the configured [`ApiBase`], injects Basic auth from the
/// stored user token and dispatches it, yielding a normalized
/// [`ApiResponse`] or error.
#[derive(Clone)]
pub struct CloudConnectClient {
    credentials: Credentials,
    auth: BasicAuth,
    base: ApiBase,
    http: HttpClient,
}

impl fmt::Debug for CloudConnectClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudConnectClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl CloudConnectClient {
    /// Create a client for the vendor dashboard with the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            auth: BasicAuth::default(),
            base: ApiBase::default(),
            http: HttpClient::new(),
        }
    }

    /// Point the client at a different base address (e.g. a mock server)
    pub fn with_base(mut self, base: ApiBase) -> Self {
        self.base = base;
        self
    }

    /// Use a non-default Basic-auth derivation
    pub fn with_auth(mut self, auth: BasicAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.http = http;
        self
    }

    /// The client's credential store
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Merge key/value pairs into the credential store
    pub fn set_credentials<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.credentials.set(values);
    }

    /// The stored user token, if any
    pub fn user_token(&self) -> Option<&str> {
        self.credentials.user_token()
    }

    /// List existing configurations
    #[instrument(skip(self))]
    pub async fn get_configurations(&self) -> Result<ApiResponse> {
        self.execute(Endpoint::get("/configurations")).await
    }

    /// Show details for a specific configuration
    pub async fn get_configuration(&self, config_id: impl fmt::Display) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/configurations/{config_id}")))
            .await
    }

    /// Create a new configuration; `options` become the configuration's
    /// `data` payload
    pub async fn create_configuration(
        &self,
        name: &str,
        version: impl Into<Value>,
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut body = Params::new();
        body.insert("name".to_string(), Value::from(name));
        body.insert("version".to_string(), version.into());
        body.insert(
            "data".to_string(),
            Value::Object(options.cloned().unwrap_or_default()),
        );

        self.execute(Endpoint::post("/configurations").body(body))
            .await
    }

    /// Update an existing configuration
    pub async fn update_configuration(
        &self,
        config_id: impl fmt::Display,
        name: &str,
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut body = Params::new();
        body.insert("name".to_string(), Value::from(name));
        body.insert(
            "data".to_string(),
            Value::Object(options.cloned().unwrap_or_default()),
        );

        self.execute(Endpoint::put(format!("/configurations/{config_id}")).body(body))
            .await
    }

    /// List all assets linked to a specific configuration
    pub async fn get_configuration_assets(
        &self,
        config_id: impl fmt::Display,
    ) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/configurations/{config_id}/assets")))
            .await
    }

    /// List all assets compatible with a specific configuration
    pub async fn get_configuration_compatible_assets(
        &self,
        config_id: impl fmt::Display,
    ) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!(
            "/configurations/{config_id}/compatible_assets"
        )))
        .await
    }

    /// List visible assets; `options` pass through as query parameters
    pub async fn get_assets(&self, options: Option<&Params>) -> Result<ApiResponse> {
        self.execute(Endpoint::get("/assets").query(options)).await
    }

    /// Get a specific asset by IMEI
    pub async fn get_asset(&self, imei: &str, options: Option<&Params>) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/assets/{imei}")).query(options))
            .await
    }

    /// Show the vehicle information declared on an asset
    pub async fn get_asset_vehicle_info(&self, imei: &str) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/assets/{imei}/vehicle_informations")))
            .await
    }

    /// Update the vehicle information declared on an asset
    pub async fn update_asset_vehicle_info(
        &self,
        imei: &str,
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        self.execute(
            Endpoint::put(format!("/assets/{imei}/vehicle_informations"))
                .body(merged(Params::new(), options)),
        )
        .await
    }

    /// Show the configuration currently installed on an asset
    pub async fn get_asset_configuration(&self, imei: &str) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/assets/{imei}/current_configuration")))
            .await
    }

    /// List visible asset groups
    #[instrument(skip(self))]
    pub async fn get_assets_groups(&self) -> Result<ApiResponse> {
        self.execute(Endpoint::get("/assets_groups")).await
    }

    /// Show details for a specific asset group
    pub async fn get_assets_group(&self, group_id: impl fmt::Display) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/assets_groups/{group_id}")))
            .await
    }

    /// Create a new asset group (`name`, `asset_imeis`, ...)
    pub async fn create_assets_group(&self, options: Option<&Params>) -> Result<ApiResponse> {
        self.execute(Endpoint::post("/assets_groups").body(merged(Params::new(), options)))
            .await
    }

    /// Update an existing asset group
    pub async fn update_assets_group(
        &self,
        group_id: impl fmt::Display,
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        self.execute(
            Endpoint::put(format!("/assets_groups/{group_id}"))
                .body(merged(Params::new(), options)),
        )
        .await
    }

    /// List visible campaigns
    #[instrument(skip(self))]
    pub async fn get_campaigns(&self) -> Result<ApiResponse> {
        self.execute(Endpoint::get("/campaigns")).await
    }

    /// List archived campaigns
    #[instrument(skip(self))]
    pub async fn get_campaigns_archive(&self) -> Result<ApiResponse> {
        self.execute(Endpoint::get("/campaigns?archived=true")).await
    }

    /// Show details for a specific campaign
    pub async fn get_campaign(&self, campaign_id: impl fmt::Display) -> Result<ApiResponse> {
        self.execute(Endpoint::get(format!("/campaigns/{campaign_id}")))
            .await
    }

    /// Create a campaign updating the configuration of its targets;
    /// `options` may override the `update_type: 0` skeleton
    pub async fn create_campaign_to_update_config(
        &self,
        config_ids: &[u64],
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut skeleton = Params::new();
        skeleton.insert("config_ids".to_string(), Value::from(config_ids.to_vec()));
        skeleton.insert("update_type".to_string(), Value::from(0));

        self.execute(Endpoint::post("/campaigns").body(merged(skeleton, options)))
            .await
    }

    /// Create a campaign updating the software of its targets;
    /// `options` may override the `update_type: 1` skeleton
    pub async fn create_campaign_to_update_software(
        &self,
        to_version: impl Into<Value>,
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        let mut skeleton = Params::new();
        skeleton.insert("to_version".to_string(), to_version.into());
        skeleton.insert("update_type".to_string(), Value::from(1));

        self.execute(Endpoint::post("/campaigns").body(merged(skeleton, options)))
            .await
    }

    /// Edit a campaign: rename it, provide a new list of assets or change
    /// configurations
    pub async fn update_campaign(
        &self,
        campaign_id: impl fmt::Display,
        options: Option<&Params>,
    ) -> Result<ApiResponse> {
        self.execute(
            Endpoint::put(format!("/campaigns/{campaign_id}/edit"))
                .body(merged(Params::new(), options)),
        )
        .await
    }

    /// Launch a campaign, targeting all compatible assets not already being
    /// updated by another campaign
    pub async fn launch_campaign(&self, campaign_id: impl fmt::Display) -> Result<ApiResponse> {
        self.execute(Endpoint::put(format!("/campaigns/{campaign_id}/launch")).body(Params::new()))
            .await
    }

    /// Build, authenticate and dispatch one endpoint invocation.
    ///
    /// A body (even an empty one) implies `Content-Type: application/json`;
    /// every listed operation that carries a body is JSON-encoded.
    async fn execute(&self, endpoint: Endpoint) -> Result<ApiResponse> {
        let Endpoint {
            verb,
            path,
            query,
            body,
        } = endpoint;

        let mut builder = self.base.builder().path(path);
        if let Some(query) = query {
            builder = builder.query_parameters(query);
        }
        if let Some(body) = body {
            builder = builder
                .headers([("Content-Type", "application/json")])
                .body_parameters(body);
        }
        let builder = self.auth.apply(builder, self.user_token());

        let request = builder.build();
        let response = self.http.dispatch(verb, &request).await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merged_options_override_skeleton_keys() {
        let mut skeleton = Params::new();
        skeleton.insert("update_type".to_string(), json!(0));
        skeleton.insert("config_ids".to_string(), json!([1, 2]));

        let mut options = Params::new();
        options.insert("update_type".to_string(), json!(1));
        options.insert("name".to_string(), json!("rollout"));

        let body = merged(skeleton, Some(&options));

        assert_eq!(body["update_type"], json!(1));
        assert_eq!(body["config_ids"], json!([1, 2]));
        assert_eq!(body["name"], json!("rollout"));
    }

    #[test]
    fn client_debug_does_not_leak_credentials() {
        let client = CloudConnectClient::new(Credentials::from_user_token("secret-token"));
        let printed = format!("{client:?}");

        assert!(!printed.contains("secret-token"));
    }
}
