use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpAuthApi;
use crate::auth::{LoginAttempt, SubmitOutcome, submit_login};
use crate::domain::ValidationErrors;
use crate::web::route::AppRoute;
use crate::web::router::use_navigate;

/// Display state of the form, one `RwSignal` per piece so the struct stays
/// `Copy` and can move into event handlers freely.
#[derive(Clone, Copy)]
struct LoginFormState {
    email: RwSignal<String>,
    password: RwSignal<String>,
    field_errors: RwSignal<ValidationErrors>,
    submit_error: RwSignal<Option<&'static str>>,
    is_submitting: RwSignal<bool>,
}

impl LoginFormState {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            field_errors: RwSignal::new(ValidationErrors::default()),
            submit_error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Folds one submit outcome into the displayed state.
    ///
    /// Field errors and the submission error are independent: a validation
    /// failure replaces the field messages but leaves any submission error
    /// from an earlier attempt on screen, so both can show at once. Only a
    /// completed request overwrites the submission error.
    fn apply(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                self.field_errors.set(errors.clone());
            }
            SubmitOutcome::Completed(attempt) => {
                self.field_errors.set(ValidationErrors::default());
                self.submit_error.set(attempt.error_message());
            }
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let api = Rc::new(HttpAuthApi::default());
    let state = LoginFormState::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.is_submitting.get_untracked() {
            return;
        }
        state.is_submitting.set(true);

        let api = Rc::clone(&api);
        let navigate = navigate.clone();
        let email = state.email.get_untracked();
        let password = state.password.get_untracked();
        spawn_local(async move {
            let outcome = submit_login(api.as_ref(), &email, &password).await;
            state.apply(&outcome);
            if outcome == SubmitOutcome::Completed(LoginAttempt::Authenticated) {
                navigate(AppRoute::Admin.to_path());
            }
            state.is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate=true>
                        <h2 class="text-xl font-bold mb-4">"Admin Login"</h2>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="your@email.com"
                                on:input=move |ev| state.email.set(event_target_value(&ev))
                                prop:value=state.email
                                class="input input-bordered"
                            />
                            <Show when=move || state.field_errors.get().email.is_some()>
                                <p class="mt-2 text-sm text-error font-medium">
                                    {move || state.field_errors.get().email.unwrap_or_default()}
                                </p>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| state.password.set(event_target_value(&ev))
                                prop:value=state.password
                                class="input input-bordered"
                            />
                            <Show when=move || state.field_errors.get().password.is_some()>
                                <p class="mt-2 text-sm text-error font-medium">
                                    {move || state.field_errors.get().password.unwrap_or_default()}
                                </p>
                            </Show>
                            <Show when=move || state.submit_error.get().is_some()>
                                <p class="mt-2 text-sm text-error font-medium">
                                    {move || state.submit_error.get().unwrap_or_default()}
                                </p>
                            </Show>
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || state.is_submitting.get()>
                                {move || if state.is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign In".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MSG_LOGIN_REJECTED, MSG_NETWORK_ERROR};
    use crate::domain::{Credentials, MSG_PASSWORD_TOO_SHORT};

    fn rejected(email: &str, password: &str) -> SubmitOutcome {
        SubmitOutcome::Rejected(Credentials::parse(email, password).unwrap_err())
    }

    #[test]
    fn a_validation_failure_keeps_the_previous_submission_error() {
        let state = LoginFormState::new();

        state.apply(&SubmitOutcome::Completed(LoginAttempt::Denied));
        assert_eq!(state.submit_error.get_untracked(), Some(MSG_LOGIN_REJECTED));

        state.apply(&rejected("a@b.com", "short"));
        assert_eq!(
            state.field_errors.get_untracked().password,
            Some(MSG_PASSWORD_TOO_SHORT)
        );
        // Both messages stay visible at once; the two are independent.
        assert_eq!(state.submit_error.get_untracked(), Some(MSG_LOGIN_REJECTED));
    }

    #[test]
    fn a_completed_attempt_overwrites_the_submission_error() {
        let state = LoginFormState::new();

        state.apply(&SubmitOutcome::Completed(LoginAttempt::Unreachable));
        assert_eq!(state.submit_error.get_untracked(), Some(MSG_NETWORK_ERROR));

        state.apply(&SubmitOutcome::Completed(LoginAttempt::Authenticated));
        assert_eq!(state.submit_error.get_untracked(), None);
        assert!(state.field_errors.get_untracked().is_empty());
    }

    #[test]
    fn a_completed_attempt_clears_stale_field_errors() {
        let state = LoginFormState::new();

        state.apply(&rejected("nope", "short"));
        assert!(!state.field_errors.get_untracked().is_empty());

        state.apply(&SubmitOutcome::Completed(LoginAttempt::Denied));
        assert!(state.field_errors.get_untracked().is_empty());
        assert_eq!(state.submit_error.get_untracked(), Some(MSG_LOGIN_REJECTED));
    }
}
