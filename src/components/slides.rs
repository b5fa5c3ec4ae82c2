use chrono::Datelike;
use yew::prelude::*;

use crate::catalog::{Piece, SlideInfo};
use crate::components::fade_in::FadeIn;
use crate::components::sparkles::{Sparkle, Sparkles};
use crate::config::BRAND_NAME;

#[derive(Properties, PartialEq)]
pub struct HeroSlideProps {
    pub info: SlideInfo,
    pub sparkles: Vec<Sparkle>,
    /// Slide the "explore" button jumps to.
    pub explore_index: usize,
    pub on_navigate: Callback<usize>,
}

#[function_component(HeroSlide)]
pub fn hero_slide(props: &HeroSlideProps) -> Html {
    let explore = {
        let on_navigate = props.on_navigate.clone();
        let index = props.explore_index;
        Callback::from(move |_: MouseEvent| on_navigate.emit(index))
    };

    html! {
        <div class="slide-inner hero-inner">
            <Sparkles sparkles={props.sparkles.clone()} />
            <FadeIn order={0}>
                <p class="eyebrow">{"Est. 1962 · Handcrafted Fine Jewellery"}</p>
            </FadeIn>
            <FadeIn order={1} delay={1}>
                <h1 class="hero-title">{&props.info.title}</h1>
            </FadeIn>
            <FadeIn order={2} delay={2}>
                <p class="hero-subtitle">{&props.info.subtitle}</p>
            </FadeIn>
            <FadeIn order={3} delay={3}>
                <button class="cta-button" onclick={explore}>{"Explore Collections"}</button>
            </FadeIn>
            <div class="scroll-hint">{"Scroll"}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PieceImageProps {
    pub src: String,
    pub alt: String,
}

/// Catalogue photo that disappears instead of showing a broken image.
#[function_component(PieceImage)]
pub fn piece_image(props: &PieceImageProps) -> Html {
    let broken = use_state(|| false);
    let onerror = {
        let broken = broken.clone();
        Callback::from(move |_: Event| broken.set(true))
    };

    html! {
        <div class="item-image">
            if !*broken {
                <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" {onerror} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CollectionSlideProps {
    pub info: SlideInfo,
    pub pieces: Vec<Piece>,
    pub on_order: Callback<String>,
}

#[function_component(CollectionSlide)]
pub fn collection_slide(props: &CollectionSlideProps) -> Html {
    html! {
        <div class="slide-inner">
            <FadeIn order={0}>
                <h2 class="section-title">{&props.info.title}</h2>
                <p class="section-subtitle">{&props.info.subtitle}</p>
            </FadeIn>
            <div class="collection-grid">
                { for props.pieces.iter().enumerate().map(|(i, piece)| {
                    let order = {
                        let on_order = props.on_order.clone();
                        let name = piece.name.clone();
                        Callback::from(move |_: MouseEvent| on_order.emit(name.clone()))
                    };
                    html! {
                        <FadeIn order={i as u32 + 1} delay={1} class="collection-item">
                            <PieceImage src={piece.image.clone()} alt={piece.name.clone()} />
                            <div class="item-details">
                                <h3>{&piece.name}</h3>
                                <p>{&piece.description}</p>
                                if let Some(price) = &piece.price {
                                    <span class="item-price">{price}</span>
                                }
                                <button class="order-button" onclick={order}>{"Order Now"}</button>
                            </div>
                        </FadeIn>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CustomSlideProps {
    pub info: SlideInfo,
    pub on_open: Callback<()>,
}

#[function_component(CustomSlide)]
pub fn custom_slide(props: &CustomSlideProps) -> Html {
    let open = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };
    let steps = [
        ("Share", "Upload sketches or photos and tell us about the occasion."),
        ("Sketch", "Our designers send drawings and a transparent estimate."),
        ("Craft", "Your piece is handmade, hallmarked and delivered."),
    ];

    html! {
        <div class="slide-inner">
            <FadeIn order={0}>
                <h2 class="section-title">{&props.info.title}</h2>
                <p class="section-subtitle">{&props.info.subtitle}</p>
            </FadeIn>
            <div class="steps-grid">
                { for steps.iter().enumerate().map(|(i, (title, text))| html! {
                    <FadeIn order={i as u32 + 1} delay={1} class="step">
                        <span class="step-number">{format!("0{}", i + 1)}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </FadeIn>
                }) }
            </div>
            <FadeIn order={4} delay={2}>
                <button class="cta-button" onclick={open}>{"Start Your Design \u{2726}"}</button>
            </FadeIn>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StorySlideProps {
    pub info: SlideInfo,
}

#[function_component(StorySlide)]
pub fn story_slide(props: &StorySlideProps) -> Html {
    let stats = [("60+", "Years of craft"), ("3", "Generations"), ("12k", "Families adorned")];

    html! {
        <div class="slide-inner">
            <FadeIn order={0}>
                <h2 class="section-title">{&props.info.title}</h2>
            </FadeIn>
            <FadeIn order={1} delay={1}>
                <p class="story-text">{&props.info.subtitle}</p>
            </FadeIn>
            <div class="stats-row">
                { for stats.iter().enumerate().map(|(i, (value, label))| html! {
                    <FadeIn order={i as u32 + 2} delay={2} class="stat">
                        <span class="stat-value">{*value}</span>
                        <span class="stat-label">{*label}</span>
                    </FadeIn>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSlideProps {
    pub info: SlideInfo,
    pub on_inquiry: Callback<String>,
}

#[function_component(ContactSlide)]
pub fn contact_slide(props: &ContactSlideProps) -> Html {
    let inquiry = {
        let on_inquiry = props.on_inquiry.clone();
        Callback::from(move |_: MouseEvent| on_inquiry.emit("General Inquiry".to_string()))
    };
    let year = chrono::Local::now().year();

    html! {
        <div class="slide-inner">
            <FadeIn order={0}>
                <h2 class="section-title">{&props.info.title}</h2>
                <p class="section-subtitle">{&props.info.subtitle}</p>
            </FadeIn>
            <div class="contact-grid">
                <FadeIn order={1} delay={1} class="contact-card">
                    <h3>{"Showroom"}</h3>
                    <p>{"14 Johari Bazaar, Jaipur, Rajasthan"}</p>
                    <p>{"Mon - Sat, 11am - 8pm"}</p>
                </FadeIn>
                <FadeIn order={2} delay={1} class="contact-card">
                    <h3>{"Talk to Us"}</h3>
                    <p>{"+91 141 256 0199"}</p>
                    <p>{"hello@pkheritage.in"}</p>
                </FadeIn>
            </div>
            <FadeIn order={3} delay={2}>
                <button class="cta-button" onclick={inquiry}>{"Send an Inquiry"}</button>
            </FadeIn>
            <footer class="site-footer">
                {format!("© {} {} Jewellery. All rights reserved.", year, BRAND_NAME)}
            </footer>
        </div>
    }
}
