use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const SEARCH_PLACEHOLDER: &str = "Search username, email, bank name, IFSC, account number";

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub summary: Option<AttrValue>,
    pub on_change: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="flex flex-wrap items-center gap-4 mb-4">
            <input
                type="search"
                class="input input-bordered w-full max-w-xl"
                placeholder={SEARCH_PLACEHOLDER}
                value={props.value.clone()}
                {oninput}
            />
            <div class="flex-1"></div>
            if let Some(summary) = &props.summary {
                <span class="text-sm text-gray-500">{summary}</span>
            }
        </div>
    }
}
