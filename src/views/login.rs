use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{RouteLink, Spinner};
use crate::hooks::session_context::use_session_context;
use crate::router::{self, Route};
use crate::services::api_client::ApiError;
use crate::services::auth_service;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let handle = use_session_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let expired_notice = use_state(|| session_expired_requested(&router::current_search()));

    // El aviso de sesión caducada se esconde solo al rato
    {
        let expired_notice = expired_notice.clone();
        use_effect_with((), move |_| {
            if *expired_notice {
                Timeout::new(6_000, move || expired_notice.set(false)).forget();
            }
            || ()
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let login = handle.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inputs = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            );
            if let (Some(email_input), Some(password_input)) = inputs {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    error.set(Some("Please fill in all fields".to_string()));
                    return;
                }

                submitting.set(true);
                error.set(None);

                let submitting = submitting.clone();
                let error = error.clone();
                let login = login.clone();
                spawn_local(async move {
                    match auth_service::login(&email, &password).await {
                        Ok(response) => match response.role {
                            // El redirect por rol lo hace el hook de sesión
                            Some(role) => login.emit((role, response.user)),
                            None => {
                                let message = response
                                    .message
                                    .unwrap_or_else(|| "Login failed".to_string());
                                error.set(Some(message));
                            }
                        },
                        Err(e) => {
                            log::error!("❌ [LOGIN] {}", e);
                            error.set(Some(friendly_login_error(&e)));
                        }
                    }
                    submitting.set(false);
                });
            }
        })
    };

    // Igual que el resto de vistas: nada de decidir con la sesión a medio cargar
    if handle.is_loading() {
        return html! { <main class="login-page"><Spinner message="Loading..." /></main> };
    }

    html! {
        <main class="login-page">
            <div class="login-card">
                <h1>{"Welcome to "}<span>{"PhotoRide"}</span></h1>
                <p>{"Sign in to continue"}</p>

                if *expired_notice {
                    <div class="notice warning">
                        {"Your session expired. Please login again."}
                    </div>
                }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{"Email"}</label>
                        <input
                            ref={email_ref}
                            type="email"
                            placeholder="you@example.com"
                            required={true}
                            disabled={*submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Password"}</label>
                        <input
                            ref={password_ref}
                            type="password"
                            placeholder="••••••••"
                            required={true}
                            disabled={*submitting}
                        />
                    </div>

                    if let Some(message) = &*error {
                        <div class="error-text">
                            <strong>{"Error: "}</strong>{message.clone()}
                        </div>
                    }

                    <button type="submit" class="btn" disabled={*submitting}>
                        {if *submitting { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <div class="form-footer">
                    {"Don't have an account? "}
                    <RouteLink to={Route::Register}>{"Register"}</RouteLink>
                </div>
            </div>
        </main>
    }
}

/// Mapea errores del backend a mensajes cortos para el formulario.
fn friendly_login_error(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Cannot connect to server".to_string(),
        ApiError::Server { message, .. } if message.to_lowercase().contains("invalid") => {
            "Invalid email or password".to_string()
        }
        ApiError::Server { status: 400 | 401, .. } => "Invalid email or password".to_string(),
        other => other.to_string(),
    }
}

/// ¿La URL trae ?session=expired? (lo pone el api client tras un 401)
fn session_expired_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "session=expired")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_read_nicely() {
        let error = ApiError::Server { status: 401, message: "Invalid credentials".to_string() };
        assert_eq!(friendly_login_error(&error), "Invalid email or password");

        let bare_401 = ApiError::Server { status: 401, message: "HTTP 401".to_string() };
        assert_eq!(friendly_login_error(&bare_401), "Invalid email or password");
    }

    #[test]
    fn connectivity_failures_get_a_generic_message() {
        let error = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(friendly_login_error(&error), "Cannot connect to server");
    }

    #[test]
    fn other_server_messages_pass_through() {
        let error = ApiError::Server { status: 429, message: "Too many attempts".to_string() };
        assert_eq!(friendly_login_error(&error), "Too many attempts");
    }

    #[test]
    fn detects_the_session_expired_flag() {
        assert!(session_expired_requested("?session=expired"));
        assert!(session_expired_requested("?registered=true&session=expired"));
        assert!(!session_expired_requested("?session=expired2"));
        assert!(!session_expired_requested(""));
    }
}
