use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    #[prop_or_default]
    pub placeholder: String,
    pub on_search: Callback<String>,
}

/// Caja de búsqueda con debounce: se emite a los 250 ms sin teclear.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let debounce = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let on_search = on_search.clone();
            let timeout = Timeout::new(250, move || on_search.emit(value));
            // El Timeout anterior se cancela al soltarlo
            *debounce.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <div class="search-box">
            <input
                type="text"
                placeholder={props.placeholder.clone()}
                oninput={oninput}
            />
        </div>
    }
}
