//! Router service over the browser History API.
//!
//! All `window.history` access is confined to this module. The current route
//! lives in a signal; `navigate` pushes a history entry and updates it, and a
//! `popstate` listener keeps back/forward in sync.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Signal-driven router. Provided once at the app root via context.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);
        Self {
            current_route,
            set_route,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Client-side transition: push a history entry and swap the view.
    /// No full page reload.
    pub fn navigate(&self, path: &str) {
        let target_route = AppRoute::from_path(path);
        if target_route == AppRoute::NotFound {
            web_sys::console::warn_1(&format!("[Router] Unknown path: {path}").into());
        }
        push_history_state(target_route.to_path());
        self.set_route.set(target_route);
    }

    /// Keeps the route signal in sync with browser back/forward.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure so the listener stays alive for the app lifetime.
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// The navigate capability as a plain closure, so submit handlers can take it
/// without touching the router (or any ambient global) directly.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

/// Router root component. Provides the routing context; use at the app root.
#[component]
pub fn Router(
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router();
    children()
}

/// Renders the view matching the current route.
#[component]
pub fn RouterOutlet(
    /// Maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
