//! Main client entry point.

use std::sync::Arc;

use tracing::info;

use crate::api::auth::AuthApi;
use crate::api::profile::ProfileApi;
use crate::config::Config;
use crate::error::Result;
use crate::transport::http::HttpClient;

/// Callback producing the bearer token, invoked exactly once at build time.
pub type TokenResolver = Box<dyn Fn() -> String + Send + Sync>;

/// Servimav API client.
///
/// Groups the remote API into typed namespaces; every call is a single
/// HTTP round trip through the shared transport.
///
/// # Examples
///
/// ```rust,no_run
/// use servimav_client::ServimavClient;
///
/// # async fn example() -> servimav_client::Result<()> {
/// let client = ServimavClient::builder()
///     .token("secret-token")
///     .build()?;
///
/// let profile = client.profile().get_profile().await?;
/// println!("hello {}", profile.data.first_name);
/// # Ok(())
/// # }
/// ```
pub struct ServimavClient {
    http: Arc<HttpClient>,
}

impl ServimavClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> ServimavClientBuilder {
        ServimavClientBuilder::new()
    }

    /// Build a client straight from a configuration.
    pub fn new(config: Config) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Authentication operations.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    /// Profile operations.
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(&self.http)
    }

    /// The underlying transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

impl std::fmt::Debug for ServimavClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServimavClient")
            .field("http", &self.http)
            .finish()
    }
}

/// Builder for [`ServimavClient`].
pub struct ServimavClientBuilder {
    config: Config,
    token_resolver: Option<TokenResolver>,
    http: Option<HttpClient>,
    reqwest_client: Option<reqwest::Client>,
}

impl ServimavClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            token_resolver: None,
            http: None,
            reqwest_client: None,
        }
    }

    /// Set the whole configuration at once.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the API host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    /// Set the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Set a token resolver.
    ///
    /// Its return value becomes the client's token for its whole lifetime,
    /// taking precedence over [`Config::token`] even when both are set.
    pub fn token_resolver(mut self, resolver: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.token_resolver = Some(Box::new(resolver));
        self
    }

    /// Use a pre-built transport as-is.
    ///
    /// Host, token, and header injection are whatever that transport was
    /// built with; all other builder settings are ignored.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Set a custom reqwest client.
    ///
    /// It is wrapped with this crate's base-URL binding and header
    /// injection, but keeps its own timeout and cookie settings.
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// The token is resolved exactly once here: the resolver's return
    /// value if one was supplied, otherwise [`Config::token`].
    pub fn build(self) -> Result<ServimavClient> {
        if let Some(http) = self.http {
            return Ok(ServimavClient {
                http: Arc::new(http),
            });
        }

        let token = match &self.token_resolver {
            Some(resolve) => Some(resolve()),
            None => self.config.token.clone(),
        };

        let http = match self.reqwest_client {
            Some(client) => HttpClient::with_client(client, &self.config, token),
            None => HttpClient::new(&self.config, token)?,
        };

        info!(base_url = http.base_url(), "ServimavClient initialized");
        Ok(ServimavClient {
            http: Arc::new(http),
        })
    }
}

impl Default for ServimavClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
