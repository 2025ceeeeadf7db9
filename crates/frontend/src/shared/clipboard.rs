//! Clipboard copy service with a synchronous fallback.
//!
//! The preferred path is the async Clipboard API; environments without it
//! (feature-detected once, at construction) get the legacy
//! `execCommand("copy")` technique with an off-screen textarea. Either way
//! the caller fires and forgets: the outcome is reported through a toast,
//! never as an error.

use crate::shared::toast::Toaster;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// The two observable outcomes of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn message(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Command copied to clipboard!",
            CopyOutcome::Failed => "Copy failed",
        }
    }
}

/// Which clipboard mechanism this environment gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// `navigator.clipboard`, permission-gated and async.
    AsyncApi,
    /// Off-screen textarea + `document.execCommand("copy")`.
    ExecCommand,
}

/// Copy-to-clipboard service, provided via context.
#[derive(Clone, Copy)]
pub struct CopyService {
    backend: Backend,
    toaster: Toaster,
}

impl CopyService {
    /// Probes the environment once; the chosen backend never changes.
    pub fn new(toaster: Toaster) -> Self {
        let backend = if async_clipboard_available() {
            Backend::AsyncApi
        } else {
            Backend::ExecCommand
        };
        Self { backend, toaster }
    }

    /// Copy `text`, reporting the outcome through the toaster.
    ///
    /// Fire-and-forget: a rejected Clipboard API write falls back to the
    /// legacy path before anything is reported, so the caller never sees
    /// an intermediate failure.
    pub fn copy(&self, text: &str) {
        let text = text.to_owned();
        let this = *self;
        spawn_local(async move {
            let outcome = match this.backend {
                Backend::AsyncApi => match write_via_clipboard_api(&text).await {
                    CopyOutcome::Copied => CopyOutcome::Copied,
                    CopyOutcome::Failed => write_via_exec_command(&text),
                },
                Backend::ExecCommand => write_via_exec_command(&text),
            };
            match outcome {
                CopyOutcome::Copied => this.toaster.success(outcome.message()),
                CopyOutcome::Failed => this.toaster.error(outcome.message()),
            }
        });
    }
}

/// `navigator.clipboard` is absent on insecure origins and old engines.
fn async_clipboard_available() -> bool {
    web_sys::window()
        .map(|w| {
            let navigator = w.navigator();
            js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard"))
                .map(|value| !value.is_undefined())
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

async fn write_via_clipboard_api(text: &str) -> CopyOutcome {
    let Some(window) = web_sys::window() else {
        return CopyOutcome::Failed;
    };
    let promise = window.navigator().clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => CopyOutcome::Copied,
        Err(err) => {
            log::warn!("clipboard API write rejected, falling back: {err:?}");
            CopyOutcome::Failed
        }
    }
}

/// Legacy path: select the text inside an off-screen textarea and issue the
/// synchronous copy command. The textarea is removed again on every exit
/// path once it has been attached.
fn write_via_exec_command(text: &str) -> CopyOutcome {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return CopyOutcome::Failed;
    };
    let Ok(area) = document
        .create_element("textarea")
        .map(|el| el.unchecked_into::<HtmlTextAreaElement>())
    else {
        return CopyOutcome::Failed;
    };

    area.set_value(text);
    let style = area.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "0");

    let Some(body) = document.body() else {
        return CopyOutcome::Failed;
    };
    if body.append_child(&area).is_err() {
        return CopyOutcome::Failed;
    }
    let _ = area.focus();
    area.select();

    // A throwing execCommand surfaces as Err and counts as failure.
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);

    area.remove();

    if copied {
        CopyOutcome::Copied
    } else {
        log::warn!("execCommand copy failed");
        CopyOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_map_to_their_messages() {
        assert_eq!(CopyOutcome::Copied.message(), "Command copied to clipboard!");
        assert_eq!(CopyOutcome::Failed.message(), "Copy failed");
    }
}
