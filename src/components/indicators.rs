use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IndicatorsProps {
    pub labels: Vec<String>,
    pub current: usize,
    pub on_select: Callback<usize>,
}

#[function_component(Indicators)]
pub fn indicators(props: &IndicatorsProps) -> Html {
    html! {
        <div class="slide-indicators">
            { for props.labels.iter().enumerate().map(|(index, label)| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(index))
                };
                html! {
                    <button
                        class={classes!("indicator", (index == props.current).then_some("active"))}
                        data-slide={index.to_string()}
                        title={label.clone()}
                        aria-label={format!("Go to {}", label)}
                        {onclick}
                    ></button>
                }
            }) }
            <style>
                {r#"
                    .slide-indicators {
                        position: fixed;
                        right: 2rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 90;
                        display: flex;
                        flex-direction: column;
                        gap: 0.9rem;
                    }
                    .indicator {
                        width: 10px;
                        height: 10px;
                        padding: 0;
                        border-radius: 50%;
                        border: 1px solid #d4af37;
                        background: transparent;
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .indicator.active {
                        background: #d4af37;
                        transform: scale(1.3);
                    }
                    @media (max-width: 600px) {
                        .slide-indicators { right: 0.75rem; }
                    }
                "#}
            </style>
        </div>
    }
}
