//! Root application module.
//!
//! Contains the main App component, AppContext definition, ConfigStore,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Sidebar;
use crate::config::{CONFIG_STORAGE_KEY, EMPTY_DOCUMENT};
use crate::models::UiConfig;
use crate::utils::storage;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// ConfigStore
// ============================================================================

/// Reactive store for the persisted UI configuration record.
///
/// Wraps the record in a signal so the UI re-renders on change, and writes
/// every update back through to localStorage synchronously. Reads happen
/// once at load; localStorage is not watched for external writers.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which is
/// cheap to copy (it's just a pointer to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ConfigStore {
    state: RwSignal<UiConfig>,
}

impl ConfigStore {
    /// Load the configuration record from localStorage.
    ///
    /// A missing or malformed entry falls back to [`UiConfig::default`], and
    /// the default record is written back so the entry exists from the first
    /// load onwards.
    pub fn load() -> Self {
        let config = storage::get::<UiConfig>(CONFIG_STORAGE_KEY).unwrap_or_else(|| {
            let defaults = UiConfig::default();
            if let Err(err) = storage::set(CONFIG_STORAGE_KEY, &defaults) {
                web_sys::console::warn_1(&format!("config not persisted: {}", err).into());
            }
            defaults
        });

        Self {
            state: RwSignal::new(config),
        }
    }

    /// Get the current configuration record (reactive).
    pub fn get(&self) -> UiConfig {
        self.state.get()
    }

    /// Mutate the record and write it back to storage.
    pub fn update(&self, f: impl FnOnce(&mut UiConfig)) {
        self.state.update(f);
        let config = self.state.get_untracked();
        if let Err(err) = storage::set(CONFIG_STORAGE_KEY, &config) {
            web_sys::console::warn_1(&format!("config not persisted: {}", err).into());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::models::LayoutDirection;

    #[wasm_bindgen_test]
    fn test_first_load_materializes_defaults() {
        let _ = storage::remove(CONFIG_STORAGE_KEY);

        let store = ConfigStore::load();
        assert_eq!(store.get(), UiConfig::default());

        // The default record is written back on first load.
        let persisted: Option<UiConfig> = storage::get(CONFIG_STORAGE_KEY);
        assert_eq!(persisted, Some(UiConfig::default()));
    }

    #[wasm_bindgen_test]
    fn test_update_writes_through() {
        let _ = storage::remove(CONFIG_STORAGE_KEY);

        let store = ConfigStore::load();
        store.update(UiConfig::cycle_layout);

        let persisted: Option<UiConfig> = storage::get(CONFIG_STORAGE_KEY);
        assert_eq!(persisted.unwrap().layout, LayoutDirection::Up);

        let _ = storage::remove(CONFIG_STORAGE_KEY);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The JSON document text feeding the visualization view.
    pub json: RwSignal<String>,

    /// Persisted UI configuration store.
    pub config: ConfigStore,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// The JSON text starts as the empty document; the configuration store
    /// is loaded from localStorage (or defaults).
    pub fn new() -> Self {
        Self {
            json: RwSignal::new(EMPTY_DOCUMENT.to_string()),
            config: ConfigStore::load(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Sidebar next to the main view area
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    let set_json = ctx.json.write_only();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorScreen>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::app>
                <Sidebar set_json=set_json />
                // The graph/tree view mounts here; until then, show the raw
                // document so imports and clears are visible.
                <main class=css::main>
                    <pre class=css::document>{move || ctx.json.get()}</pre>
                </main>
            </div>
        </ErrorBoundary>
    }
}
