use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("failed to decode site content: {0}")]
    Content(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        SiteError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
