use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{AuthCard, RouteLink};
use crate::hooks::session_context::use_session_context;
use crate::models::auth::{RegisterRequest, Role};
use crate::router::{self, Route};
use crate::services::auth_service;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let handle = use_session_context();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let role_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let role_ref = role_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let login = handle.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                role_ref.cast::<HtmlSelectElement>(),
            );
            let (Some(name), Some(email), Some(password), Some(role_select)) = fields else {
                return;
            };

            let Some(role) = Role::parse(&role_select.value()) else {
                error.set(Some("Please choose a role".to_string()));
                return;
            };

            let request = RegisterRequest {
                name: name.value(),
                email: email.value(),
                password: password.value(),
                role,
            };

            submitting.set(true);
            error.set(None);

            let submitting = submitting.clone();
            let error = error.clone();
            let login = login.clone();
            spawn_local(async move {
                match auth_service::register(&request).await {
                    // Si el backend ya abre sesión, entrar directamente;
                    // si no, al login con el aviso de registro
                    Ok(response) => match response.role {
                        Some(role) => login.emit((role, response.user)),
                        None => router::push_path("/login?registered=true"),
                    },
                    Err(e) => {
                        log::error!("❌ [REGISTER] {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <AuthCard title="Create Your Account">
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Full Name"}</label>
                    <input ref={name_ref} type="text" placeholder="Avinash Kumar" required={true} />
                </div>

                <div class="form-group">
                    <label>{"Email"}</label>
                    <input ref={email_ref} type="email" placeholder="you@example.com" required={true} />
                </div>

                <div class="form-group">
                    <label>{"Password"}</label>
                    <input
                        ref={password_ref}
                        type="password"
                        placeholder="••••••••"
                        required={true}
                        minlength="6"
                    />
                </div>

                <div class="form-group">
                    <label>{"Register As"}</label>
                    <select ref={role_ref} required={true}>
                        <option value="customer">{"Customer"}</option>
                        <option value="photographer">{"Photographer"}</option>
                    </select>
                </div>

                if let Some(message) = &*error {
                    <p class="error-text">{message.clone()}</p>
                }

                <button class="btn" type="submit" disabled={*submitting}>
                    {if *submitting { "Creating Account..." } else { "Register" }}
                </button>

                <div class="form-footer">
                    {"Already have an account? "}
                    <RouteLink to={Route::Login}>{"Login"}</RouteLink>
                </div>
            </form>
        </AuthCard>
    }
}
