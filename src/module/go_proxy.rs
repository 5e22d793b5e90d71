//! Go module proxy `@latest` lookup

use reqwest::Response;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error};

use crate::config::LATEST_SUFFIX;
use crate::module::classify::ResponseKind;
use crate::module::error::LookupError;
use crate::module::source::ModuleSource;
use crate::module::types::ModuleInfo;

/// `ModuleSource` backed by the GOPROXY HTTP protocol
#[derive(Debug, Clone)]
pub struct GoProxyClient {
    client: reqwest::Client,
}

impl GoProxyClient {
    pub fn new() -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(LookupError::Client)?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ModuleSource for GoProxyClient {
    async fn fetch_latest(&self, endpoint: &str, module: &str) -> Result<ModuleInfo, LookupError> {
        let url = latest_url(endpoint, module);
        debug!("HTTP GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| LookupError::Fetch {
            module: module.to_string(),
            url: url.clone(),
            source: e,
        })?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        let kind = ResponseKind::classify(response.status(), content_type);
        debug!("{} classified as {:?}", url, kind);

        match kind {
            ResponseKind::SuccessJson => parse_info(module, &url, response).await,
            ResponseKind::ErrorJson => parse_error_json(module, &url, response).await,
            ResponseKind::Unrecognized => parse_unrecognized(module, &url, response).await,
        }
    }
}

/// Builds `{endpoint}/{escaped module}/@v/@latest`
pub fn latest_url(endpoint: &str, module: &str) -> String {
    format!(
        "{}/{}/{}",
        endpoint.trim_end_matches('/'),
        encode_module_path(module),
        LATEST_SUFFIX
    )
}

/// Encodes a Go module path for use in proxy URLs.
/// Uppercase letters are escaped as !{lowercase}.
pub fn encode_module_path(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            result.push('!');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Reads the whole body, releasing the connection
async fn read_body(module: &str, url: &str, response: Response) -> Result<String, LookupError> {
    response.text().await.map_err(|e| LookupError::Fetch {
        module: module.to_string(),
        url: url.to_string(),
        source: e,
    })
}

async fn parse_info(
    module: &str,
    url: &str,
    response: Response,
) -> Result<ModuleInfo, LookupError> {
    let body = read_body(module, url, response).await?;

    let mut info = ModuleInfo::from_proxy_json(&body).map_err(|e| {
        debug!("{}\n{}", url, body);
        LookupError::Parse {
            url: url.to_string(),
            source: e,
        }
    })?;
    info.name = module.to_string();

    debug!("{:?}", info);
    Ok(info)
}

async fn parse_error_json(
    module: &str,
    url: &str,
    response: Response,
) -> Result<ModuleInfo, LookupError> {
    let status = response.status().as_u16();
    let body = read_body(module, url, response).await?;

    let payload = serde_json::from_str::<serde_json::Value>(&body).ok();
    match &payload {
        Some(value) => error!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        ),
        None => error!("{}", body),
    }

    Err(LookupError::Upstream {
        url: url.to_string(),
        status,
        payload,
    })
}

async fn parse_unrecognized(
    module: &str,
    url: &str,
    response: Response,
) -> Result<ModuleInfo, LookupError> {
    let status = response.status().as_u16();
    let body = read_body(module, url, response).await?;

    Err(LookupError::UnexpectedResponse {
        module: module.to_string(),
        url: url.to_string(),
        status,
        body,
    })
}
