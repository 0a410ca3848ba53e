use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoRowProps {
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub stacked: bool,
}

#[function_component(InfoRow)]
pub fn info_row(props: &InfoRowProps) -> Html {
    html! {
        <div class={classes!("info-row", props.stacked.then(|| "stacked"))}>
            <span class="info-label">{props.label.clone()}</span>
            <span class="info-value">{props.value.clone()}</span>
        </div>
    }
}
