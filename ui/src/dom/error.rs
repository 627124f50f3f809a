use wasm_bindgen::JsValue;

/// Reasons the controller could not be attached to the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

impl BindError {
    pub fn js(context: &'static str, err: JsValue) -> Self {
        Self::Js {
            context,
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}
