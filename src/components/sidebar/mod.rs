//! Sidebar component.
//!
//! Renders the vertical icon bar: home/logo navigation, clear, layout
//! cycling, persisted-setting toggles, JSON file import, and external links.
//! Receives the write half of the JSON document signal from the app shell;
//! the persisted configuration is reached through [`AppContext`].

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::hooks::{ReadGuard, use_page_loaded};
use crate::components::icons as ic;
use crate::config::{
    APP_NAME, EMPTY_DOCUMENT, GITHUB_URL, JSON_FILE_ACCEPT, LEGACY_JSON_STORAGE_KEY, TWITTER_URL,
};
use crate::models::{LayoutDirection, UiConfig};
use crate::utils::{read_file_text, storage};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Icon for the layout button as a function of the current layout.
///
/// The arrow points where the graph will flow after the next click's target
/// is applied: LEFT shows a right arrow, UP a down arrow, and so on.
fn layout_icon(layout: LayoutDirection) -> icondata::Icon {
    match layout {
        LayoutDirection::Left => ic::ARROW_RIGHT,
        LayoutDirection::Up => ic::ARROW_DOWN,
        LayoutDirection::Right => ic::ARROW_LEFT,
        LayoutDirection::Down => ic::ARROW_UP,
    }
}

/// Reset the document to the empty JSON array.
fn clear_document(set_json: WriteSignal<String>) {
    set_json.set(EMPTY_DOCUMENT.to_string());
}

/// Deliver a completed import, unless a newer selection superseded it.
fn deliver_import(guard: ReadGuard, generation: u64, text: String, set_json: WriteSignal<String>) {
    if guard.is_current(generation) {
        set_json.set(text);
    }
}

/// Sidebar icon bar.
///
/// # Props
/// - `set_json`: write half of the JSON document signal, invoked with `"[]"`
///   on clear or the file contents on a successful import
///
/// Renders nothing until the page-loaded signal is true, so the persisted
/// configuration never appears in a pre-hydration frame.
#[component]
pub fn Sidebar(set_json: WriteSignal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let page_loaded = use_page_loaded();

    // Each selection starts a read tagged with a fresh generation; a
    // completion whose generation is stale is discarded, so the last
    // selection wins even if reads finish out of order.
    let read_guard = ReadGuard::new();

    let import_file = move |file: web_sys::File| {
        let generation = read_guard.begin();

        spawn_local(async move {
            match read_file_text(&file).await {
                Ok(text) => deliver_import(read_guard, generation, text, set_json),
                Err(err) => {
                    web_sys::console::warn_1(&format!("JSON import failed: {}", err).into());
                }
            }
        });
    };

    let on_file_change = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        if let Some(file) = input.files().and_then(|files| files.item(0)) {
            import_file(file);
        }
        // Reset so re-selecting the same file fires another change event.
        input.set_value("");
    };

    let on_clear = move |_: ev::MouseEvent| {
        clear_document(set_json);
        // Compatibility cleanup for the old unscoped storage scheme.
        let _ = storage::remove(LEGACY_JSON_STORAGE_KEY);
    };

    let on_layout = move |_: ev::MouseEvent| {
        ctx.config.update(UiConfig::cycle_layout);
    };

    let on_controls = move |_: ev::MouseEvent| {
        ctx.config.update(UiConfig::toggle_controls);
    };

    let on_expand = move |_: ev::MouseEvent| {
        ctx.config.update(UiConfig::toggle_expand);
    };

    view! {
        <Show when=move || page_loaded.get()>
            <aside class=css::sidebar>
                <nav class=css::topNav>
                    <a class=format!("{} {}", css::element, css::logo) href="/" title=APP_NAME>
                        <span class=css::logoAccent>"J"</span>
                        <span>"S"</span>
                    </a>
                    <a class=css::element href="/" title="Home">
                        <Icon icon=ic::HOME />
                    </a>
                    <button class=css::element on:click=on_clear title="Clear JSON">
                        <Icon icon=ic::CLEAR />
                    </button>
                    <button class=css::element on:click=on_layout title="Change Layout">
                        {move || view! { <Icon icon=layout_icon(ctx.config.get().layout) /> }}
                    </button>
                    <button class=css::element on:click=on_controls title="Toggle Controls">
                        {move || if ctx.config.get().controls {
                            view! { <Icon icon=ic::CONTROLS_ON /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CONTROLS_OFF /> }.into_any()
                        }}
                    </button>
                    <button class=css::element on:click=on_expand title="Toggle Expand/Collapse">
                        {move || if ctx.config.get().expand {
                            view! { <Icon icon=ic::EXPAND /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::COLLAPSE /> }.into_any()
                        }}
                    </button>
                    <label class=format!("{} {}", css::element, css::importLabel) title="Import JSON File">
                        <input
                            type="file"
                            accept=JSON_FILE_ACCEPT
                            on:change=on_file_change
                        />
                        <Icon icon=ic::IMPORT />
                    </label>
                </nav>
                <nav class=css::bottomNav>
                    <a
                        class=css::element
                        href=TWITTER_URL
                        target="_blank"
                        rel="me noopener noreferrer"
                        title="Twitter"
                    >
                        <Icon icon=ic::TWITTER />
                    </a>
                    <a
                        class=css::element
                        href=GITHUB_URL
                        target="_blank"
                        rel="me noopener noreferrer"
                        title="GitHub"
                    >
                        <Icon icon=ic::GITHUB />
                    </a>
                </nav>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_icon_mapping() {
        // The arrow shown is the flow direction, not the direction name.
        assert!(std::ptr::eq(
            layout_icon(LayoutDirection::Left),
            ic::ARROW_RIGHT
        ));
        assert!(std::ptr::eq(
            layout_icon(LayoutDirection::Up),
            ic::ARROW_DOWN
        ));
        assert!(std::ptr::eq(
            layout_icon(LayoutDirection::Right),
            ic::ARROW_LEFT
        ));
        assert!(std::ptr::eq(
            layout_icon(LayoutDirection::Down),
            ic::ARROW_UP
        ));
    }

    #[test]
    fn test_clear_writes_empty_array() {
        let json = RwSignal::new(String::from(r#"{"kept":true}"#));
        clear_document(json.write_only());
        assert_eq!(json.get_untracked(), "[]");
    }

    #[test]
    fn test_stale_read_delivers_nothing() {
        let json = RwSignal::new(String::from("[]"));
        let guard = ReadGuard::new();

        let stale = guard.begin();
        let current = guard.begin();

        // The superseded read completes first; the document is untouched.
        deliver_import(guard, stale, String::from(r#"{"old":true}"#), json.write_only());
        assert_eq!(json.get_untracked(), "[]");

        deliver_import(guard, current, String::from(r#"{"a":1}"#), json.write_only());
        assert_eq!(json.get_untracked(), r#"{"a":1}"#);
    }

    #[test]
    fn test_out_of_order_completions_keep_last_selection() {
        let json = RwSignal::new(String::from("[]"));
        let guard = ReadGuard::new();

        let first = guard.begin();
        let second = guard.begin();

        // Completions arrive in selection order; the stale one is still
        // ignored even though it lands after the current one.
        deliver_import(guard, second, String::from(r#"{"b":2}"#), json.write_only());
        deliver_import(guard, first, String::from(r#"{"a":1}"#), json.write_only());
        assert_eq!(json.get_untracked(), r#"{"b":2}"#);
    }
}
