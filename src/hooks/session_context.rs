// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre componentes
// ============================================================================
// Usa la Context API de Yew para que navbar, guard y páginas lean el mismo
// UseSessionHandle.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app; use_session() se ejecuta una sola vez aquí.
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[hook]
pub fn use_session_context() -> UseSessionHandle {
    use_context::<UseSessionHandle>().expect("SessionContextProvider no está montado")
}
