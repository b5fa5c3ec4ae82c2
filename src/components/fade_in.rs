use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{REVEAL_BASE_MS, REVEAL_DELAY_STEP_MS, REVEAL_STAGGER_MS};

/// Provided by each slide; true while that slide is the one on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    pub active: bool,
}

pub fn reveal_delay_ms(delay: u32, order: u32) -> u32 {
    REVEAL_BASE_MS + delay * REVEAL_DELAY_STEP_MS + order * REVEAL_STAGGER_MS
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    /// Position of the element within its slide.
    pub order: u32,
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let reveal = use_context::<Reveal>().unwrap_or_default();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let wait = reveal_delay_ms(props.delay, props.order);
        use_effect_with_deps(
            move |active: &bool| {
                visible.set(false);
                let timeout = active.then(|| Timeout::new(wait, move || visible.set(true)));
                move || drop(timeout)
            },
            reveal.active,
        );
    }

    html! {
        <div class={classes!("fade-in", (*visible).then_some("visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_delays() {
        assert_eq!(reveal_delay_ms(0, 0), 150);
        assert_eq!(reveal_delay_ms(0, 3), 390);
        assert_eq!(reveal_delay_ms(2, 1), 430);
    }
}
