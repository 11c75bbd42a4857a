use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

/// Centered page shell with a heading.
#[function_component(Page)]
pub fn page(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <main class="container mx-auto max-w-6xl p-6">
                <h1 class="text-3xl font-bold mb-6">{&props.title}</h1>
                { for props.children.iter() }
            </main>
        </div>
    }
}
