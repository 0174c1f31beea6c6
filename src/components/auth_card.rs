use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: String,
    pub children: Children,
}

/// Tarjeta contenedora de los formularios de login y registro.
#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="auth-wrapper">
            <div class="auth-card">
                <h2>{props.title.clone()}</h2>
                {props.children.clone()}
            </div>
        </div>
    }
}
