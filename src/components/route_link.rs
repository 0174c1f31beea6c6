use yew::prelude::*;

use crate::router::{self, Route};

#[derive(Properties, PartialEq)]
pub struct RouteLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
    pub children: Children,
}

/// Enlace interno: deja el href real para el navegador pero navega in-app.
#[function_component(RouteLink)]
pub fn route_link(props: &RouteLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        let extra = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(extra) = &extra {
                extra.emit(());
            }
            router::navigate(&to);
        })
    };

    html! {
        <a href={props.to.path()} class={props.class.clone()} onclick={onclick}>
            {props.children.clone()}
        </a>
    }
}
