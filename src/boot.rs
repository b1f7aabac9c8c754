//! Application Bootstrap
//!
//! One-shot startup wiring: locate the mount anchor, construct the app with
//! its router, and attach it to the document. There are no ambient singletons
//! here; `create_application` is the only entry point and callers decide what
//! a startup failure means.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::app::App;

/// Anchor element id used by `main`. Hosting documents provide
/// `<div id="app">`.
pub const DEFAULT_ANCHOR_ID: &str = "app";

/// Fatal startup errors. None of these are recoverable: bootstrap either
/// completes or the page fails to initialize.
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    /// No `window.document` available (not running in a browser context).
    #[error("no document available in this context")]
    NoDocument,
    /// The hosting document has no element with the configured anchor id.
    #[error("mount anchor #{0} not found in document")]
    MissingAnchor(String),
    /// The anchor exists but is not an HTML element the app can mount onto.
    #[error("mount anchor #{0} is not a mountable HTML element")]
    UnmountableAnchor(String),
}

/// Build and mount the application onto the element with the given id.
///
/// The anchor may be given as a bare id (`"app"`) or in selector form
/// (`"#app"`). Steps run in a fixed order: resolve the document, resolve the
/// anchor, then mount — mounting constructs the router (history-based
/// navigation) around the root shell and replaces the anchor's content with
/// the rendered tree. Mounting is the terminal step; on success the app owns
/// the anchor for the rest of the page session.
pub fn create_application(anchor_id: &str) -> Result<(), BootError> {
    let id = normalize_anchor(anchor_id);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::NoDocument)?;

    let target = document
        .get_element_by_id(id)
        .ok_or_else(|| BootError::MissingAnchor(id.to_string()))?;

    let target: web_sys::HtmlElement = target
        .dyn_into()
        .map_err(|_| BootError::UnmountableAnchor(id.to_string()))?;

    mount_to(target, || view! { <App /> });

    Ok(())
}

/// Strip a leading `#` so both `"app"` and `"#app"` name the same element.
fn normalize_anchor(anchor_id: &str) -> &str {
    anchor_id.strip_prefix('#').unwrap_or(anchor_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_anchor_strips_selector_prefix() {
        assert_eq!(normalize_anchor("#app"), "app");
        assert_eq!(normalize_anchor("app"), "app");
    }

    #[test]
    fn test_normalize_anchor_strips_single_hash_only() {
        assert_eq!(normalize_anchor("##app"), "#app");
        assert_eq!(normalize_anchor(""), "");
    }
}

// DOM-bound tests, run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn insert_anchor(id: &str) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_mount_replaces_anchor_content() {
        let anchor = insert_anchor("mount-ok");
        create_application("mount-ok").expect("bootstrap should succeed");
        assert!(!anchor.inner_html().is_empty(), "anchor should hold the rendered tree");
    }

    #[wasm_bindgen_test]
    fn test_selector_form_anchor_is_accepted() {
        insert_anchor("mount-selector");
        create_application("#mount-selector").expect("selector-form anchor should mount");
    }

    #[wasm_bindgen_test]
    fn test_missing_anchor_is_a_fatal_error() {
        match create_application("no-such-anchor") {
            Err(BootError::MissingAnchor(id)) => assert_eq!(id, "no-such-anchor"),
            other => panic!("expected MissingAnchor, got {other:?}"),
        }
    }
}
