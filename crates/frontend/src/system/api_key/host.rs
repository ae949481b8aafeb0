//! Host capability object: credential query and selection flow.
//!
//! The hosting page may inject `window.aistudio` with two async methods,
//! `hasSelectedApiKey()` and `openSelectKey()`. `KeyHost` abstracts over it so
//! the gate can run against the real host, an explicit "no host" choice, or a
//! scripted host in tests.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Name of the global injected by the host page
pub const HOST_GLOBAL: &str = "aistudio";
pub const HAS_SELECTED_API_KEY: &str = "hasSelectedApiKey";
pub const OPEN_SELECT_KEY: &str = "openSelectKey";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host method `{0}` is not available")]
    MissingMethod(&'static str),

    #[error("host call `{method}` failed: {message}")]
    Rejected {
        method: &'static str,
        message: String,
    },

    #[error("host returned a non-boolean value from `{0}`")]
    UnexpectedValue(&'static str),
}

pub type HostFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, HostError>> + 'a>>;

/// Credential capability provided by the hosting environment.
pub trait KeyHost {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether a usable API key is currently selected.
    fn has_selected_api_key(&self) -> HostFuture<'_, bool>;

    /// Runs the host-side key selection UI to completion. Its outcome is not
    /// reported back; callers treat settlement as success.
    fn open_select_key(&self) -> HostFuture<'_, ()>;
}

/// Used when the page has no `window.aistudio`: the key counts as present and
/// the gate never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl KeyHost for NoHost {
    fn name(&self) -> &'static str {
        "none"
    }

    fn has_selected_api_key(&self) -> HostFuture<'_, bool> {
        Box::pin(async { Ok(true) })
    }

    fn open_select_key(&self) -> HostFuture<'_, ()> {
        Box::pin(async { Ok(()) })
    }
}

/// `window.aistudio` bridge.
#[derive(Debug, Clone)]
pub struct AiStudioHost {
    handle: js_sys::Object,
}

impl AiStudioHost {
    /// Looks up `window.aistudio`; `None` when the page does not provide it.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(HOST_GLOBAL)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let handle = value.dyn_into::<js_sys::Object>().ok()?;
        Some(Self { handle })
    }

    /// Calls `method` with no arguments and awaits the result if it is a promise.
    async fn call(&self, method: &'static str) -> Result<JsValue, HostError> {
        let function = js_sys::Reflect::get(&self.handle, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(HostError::MissingMethod(method))?;

        let returned = function
            .call0(&self.handle)
            .map_err(|e| rejected(method, &e))?;

        // Promise::resolve also accepts plain values
        let promise = js_sys::Promise::resolve(&returned);
        JsFuture::from(promise)
            .await
            .map_err(|e| rejected(method, &e))
    }
}

impl KeyHost for AiStudioHost {
    fn name(&self) -> &'static str {
        "aistudio"
    }

    fn has_selected_api_key(&self) -> HostFuture<'_, bool> {
        Box::pin(async move {
            let value = self.call(HAS_SELECTED_API_KEY).await?;
            value
                .as_bool()
                .ok_or(HostError::UnexpectedValue(HAS_SELECTED_API_KEY))
        })
    }

    fn open_select_key(&self) -> HostFuture<'_, ()> {
        Box::pin(async move {
            self.call(OPEN_SELECT_KEY).await?;
            Ok(())
        })
    }
}

fn rejected(method: &'static str, value: &JsValue) -> HostError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    HostError::Rejected { method, message }
}

/// Picks the host for this page: `window.aistudio` when injected, otherwise `NoHost`.
pub fn detect_host() -> Rc<dyn KeyHost> {
    match AiStudioHost::from_window() {
        Some(host) => {
            log::info!("api key host: window.{} detected", HOST_GLOBAL);
            Rc::new(host)
        }
        None => {
            log::info!("api key host: window.{} not found, gate disabled", HOST_GLOBAL);
            Rc::new(NoHost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_no_host_reports_key_present() {
        let host = NoHost;
        assert_eq!(block_on(host.has_selected_api_key()), Ok(true));
        assert_eq!(block_on(host.open_select_key()), Ok(()));
    }

    #[test]
    fn test_host_error_messages() {
        assert_eq!(
            HostError::MissingMethod(OPEN_SELECT_KEY).to_string(),
            "host method `openSelectKey` is not available"
        );
        assert_eq!(
            HostError::Rejected {
                method: HAS_SELECTED_API_KEY,
                message: "boom".to_string()
            }
            .to_string(),
            "host call `hasSelectedApiKey` failed: boom"
        );
    }
}
