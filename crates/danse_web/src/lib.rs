//! Browser entry point. The page fetches the character document itself and
//! passes its text here; nothing is rendered if loading fails.

use danse_core::core_api::Engine;
use danse_render::{
    HtmlRenderOptions, JsonStyle, render_html_with_options, render_json_full,
    render_json_string, render_text,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WebRenderOptions {
    pub json_output: bool,
    pub text_output: bool,
    pub stylesheet: Option<String>,
}

#[derive(Debug, Clone)]
struct WebError {
    code: &'static str,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
struct WebErrorPayload {
    code: String,
    message: String,
}

impl WebError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn to_js_value(&self) -> JsValue {
        let payload = WebErrorPayload {
            code: self.code.to_string(),
            message: self.message.clone(),
        };
        serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| {
            JsValue::from_str(&format!("{}: {}", payload.code, payload.message))
        })
    }
}

#[wasm_bindgen]
pub fn render_sheet(document: &str, options: JsValue) -> Result<String, JsValue> {
    let parsed_options = parse_options(options).map_err(|err| err.to_js_value())?;
    render_sheet_impl(document, &parsed_options).map_err(|err| err.to_js_value())
}

fn render_sheet_impl(document: &str, options: &WebRenderOptions) -> Result<String, WebError> {
    if document.trim().is_empty() {
        return Err(WebError::new(
            "empty_document",
            "The character document is empty.",
        ));
    }

    let session = Engine::new().open_str(document).map_err(|err| {
        tracing::error!(error = %err, "aborting render");
        WebError::new("load_failed", err.to_string())
    })?;

    if options.json_output {
        let value = render_json_full(&session, JsonStyle::CanonicalV1);
        return render_json_string(&value).map_err(|err| {
            WebError::new(
                "render_failed",
                format!("failed to serialize rendered JSON output: {err}"),
            )
        });
    }

    if options.text_output {
        return Ok(render_text(&session));
    }

    let html_options = HtmlRenderOptions {
        stylesheet: options.stylesheet.clone(),
    };
    Ok(render_html_with_options(&session, &html_options))
}

fn parse_options(options: JsValue) -> Result<WebRenderOptions, WebError> {
    if options.is_null() || options.is_undefined() {
        return Ok(WebRenderOptions::default());
    }

    serde_wasm_bindgen::from_value(options).map_err(|err| {
        WebError::new(
            "invalid_options",
            format!("Failed to parse web render options: {err}"),
        )
    })
}
