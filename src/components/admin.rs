use leptos::prelude::*;

/// Landing page after a successful login. The admin console itself is served
/// by the backend application; this route only confirms the transition.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-3xl font-bold">"Admin"</h1>
                    <p class="mt-4 text-base-content/70">"You are signed in."</p>
                </div>
            </div>
        </div>
    }
}
