use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::router::{current_path, Route};
use crate::utils::constants::ROUTE_CHANGED_EVENT;

/// Ruta actual, re-parseada con popstate (atrás/adelante) y con las
/// navegaciones propias del router.
#[hook]
pub fn use_route() -> Route {
    let route = use_state(|| Route::parse(&current_path()));

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let on_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
                route.set(Route::parse(&current_path()));
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win
                    .add_event_listener_with_callback("popstate", on_change.as_ref().unchecked_ref());
                let _ = win.add_event_listener_with_callback(
                    ROUTE_CHANGED_EVENT,
                    on_change.as_ref().unchecked_ref(),
                );
            }
            // Listener global único por carga de página
            on_change.forget();
            || ()
        });
    }

    (*route).clone()
}
