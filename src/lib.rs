//! Admin login frontend.
//!
//! A single-purpose CSR app: collect email and password, validate locally,
//! POST to the login endpoint, and move to `/admin` on success.
//!
//! - `domain`: credentials and pure validation
//! - `api`: the login endpoint client, behind the `AuthApi` trait
//! - `auth`: one login attempt, request to outcome
//! - `web::route` / `web::router`: client-side routing over the History API
//! - `components`: UI layer

pub mod api;
pub mod auth;
pub mod domain;

mod components {
    pub mod admin;
    pub mod login;
}

pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use crate::components::admin::AdminPage;
use crate::components::login::LoginPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps the current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
