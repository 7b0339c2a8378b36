//! HTTP client for the toggle endpoints (REST).

use crate::core::config::UiConfig;
use crate::core::csrf::resolve_token;
use crate::core::error::ToggleError;
use crate::flows::StatusClient;
use async_trait::async_trait;
use cardvault_api_models::ToggleStatusResponse;
use gloo::utils::document;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[derive(Clone, Debug)]
pub(crate) struct HttpStatusClient {
    config: UiConfig,
}

impl HttpStatusClient {
    pub(crate) const fn new(config: UiConfig) -> Self {
        Self { config }
    }

    /// Token read fresh from the page on every request.
    fn csrf_token(&self) -> String {
        let doc = document();
        let meta = doc
            .query_selector(&format!("meta[name=\"{}\"]", self.config.csrf_meta_name))
            .ok()
            .flatten()
            .map(|meta| meta.get_attribute("content"));
        let field = doc
            .query_selector(&format!("[name=\"{}\"]", self.config.csrf_field_name))
            .ok()
            .flatten()
            .and_then(|field| field.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());
        resolve_token(meta, field)
    }
}

#[async_trait(?Send)]
impl StatusClient for HttpStatusClient {
    async fn toggle(&self, path: &str) -> Result<ToggleStatusResponse, ToggleError> {
        // Error statuses still carry the JSON envelope, so the status code is not inspected.
        let response = Request::post(&self.config.url_for(path))
            .header("Content-Type", "application/json")
            .header(&self.config.csrf_header, &self.csrf_token())
            .send()
            .await
            .map_err(|err| ToggleError::Transport {
                detail: err.to_string(),
            })?;
        response
            .json::<ToggleStatusResponse>()
            .await
            .map_err(|err| ToggleError::Decode {
                detail: err.to_string(),
            })
    }
}
