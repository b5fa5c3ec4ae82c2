use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::catalog::{Catalog, Piece, SlideKind};
use crate::components::custom_design_modal::CustomDesignModal;
use crate::components::fade_in::Reveal;
use crate::components::indicators::Indicators;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::{NavEntry, Navbar};
use crate::components::order_modal::OrderModal;
use crate::components::slides::{CollectionSlide, ContactSlide, CustomSlide, HeroSlide, StorySlide};
use crate::components::sparkles::{scatter, Sparkle};
use crate::config::{SPARKLE_COUNT, TRANSITION_LOCK_MS};
use crate::deck::{Deck, KeyOutcome, Transition};
use crate::dom;

/// Shared handle the window listeners use to drive the deck.
#[derive(Clone)]
struct DeckDriver {
    deck: Rc<RefCell<Deck>>,
    slides: Rc<Vec<NodeRef>>,
    current: UseStateSetter<usize>,
    navigated: UseStateSetter<bool>,
    modal_open: Rc<RefCell<bool>>,
    ready: Rc<RefCell<bool>>,
    on_escape: Callback<()>,
}

impl DeckDriver {
    fn active_slide(&self) -> Option<&NodeRef> {
        self.slides.get(self.deck.borrow().current())
    }

    fn metrics(&self) -> crate::deck::SlideMetrics {
        self.active_slide().map(dom::slide_metrics).unwrap_or_default()
    }

    fn modal_open(&self) -> bool {
        *self.modal_open.borrow()
    }

    /// Input is ignored until the loading screen starts to fade.
    fn ready(&self) -> bool {
        *self.ready.borrow()
    }

    fn apply(&self, transition: Option<Transition>) {
        let Some(transition) = transition else {
            return;
        };
        info!("slide {} -> {}", transition.from, transition.to);
        if let Some(node) = self.slides.get(transition.to) {
            dom::reset_scroll(node);
        }
        self.current.set(transition.to);
        self.navigated.set(true);

        let deck = self.deck.clone();
        Timeout::new(TRANSITION_LOCK_MS, move || {
            deck.borrow_mut().finish_animation();
        })
        .forget();
    }

    fn go_to(&self, index: usize) {
        let transition = self.deck.borrow_mut().go_to(index);
        self.apply(transition);
    }

    fn wheel(&self, e: &WheelEvent) {
        let metrics = self.metrics();
        let modal_open = self.modal_open();
        let outcome = self.deck.borrow_mut().wheel(e.delta_y(), metrics, modal_open);
        if outcome.prevent_default {
            e.prevent_default();
        }
        self.apply(outcome.transition);
    }

    fn key(&self, e: &KeyboardEvent) {
        let metrics = self.metrics();
        let modal_open = self.modal_open();
        let outcome = self.deck.borrow_mut().key(&e.key(), metrics, modal_open);
        match outcome {
            KeyOutcome::Ignore | KeyOutcome::Scroll => {}
            KeyOutcome::Navigate(transition) => {
                e.prevent_default();
                self.apply(transition);
            }
            KeyOutcome::CloseModal => self.on_escape.emit(()),
        }
    }

    fn swipe(&self, start_y: f64, end_y: f64) {
        let metrics = self.metrics();
        let modal_open = self.modal_open();
        let transition = self.deck.borrow_mut().swipe(start_y, end_y, metrics, modal_open);
        self.apply(transition);
    }
}

/// A slide animates in once it is on screen. Until the first transition that
/// waits for the loading screen to leave; after it, entering a slide is enough.
fn slide_reveal(on_screen: bool, loading_removed: bool, navigated: bool) -> Reveal {
    Reveal {
        active: on_screen && (loading_removed || navigated),
    }
}

fn touch_y(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| touch.screen_y() as f64)
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let catalog = props.catalog.clone();
    let slide_count = catalog.slides.len();

    let deck = use_mut_ref(|| Deck::new(slide_count));
    let slides = use_memo(|count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(), slide_count);
    let current = use_state(|| 0usize);
    let booted = use_state(|| false);
    let revealed = use_state(|| false);
    let navigated = use_state(|| false);
    let sparkles = use_state(Vec::<Sparkle>::new);
    let order_item = use_state(|| None::<String>);
    let custom_open = use_state(|| false);
    let modal_open = use_mut_ref(|| false);
    let ready = use_mut_ref(|| false);
    let touch_start = use_mut_ref(|| 0.0_f64);

    let close_modals = {
        let order_item = order_item.clone();
        let custom_open = custom_open.clone();
        Callback::from(move |_: ()| {
            order_item.set(None);
            custom_open.set(false);
        })
    };

    let driver = DeckDriver {
        deck: deck.clone(),
        slides: slides.clone(),
        current: current.setter(),
        navigated: navigated.setter(),
        modal_open: modal_open.clone(),
        ready: ready.clone(),
        on_escape: close_modals.clone(),
    };

    {
        let modal_open = modal_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                *modal_open.borrow_mut() = *open;
                || ()
            },
            order_item.is_some() || *custom_open,
        );
    }

    {
        let ready = ready.clone();
        use_effect_with_deps(
            move |booted: &bool| {
                *ready.borrow_mut() = *booted;
                || ()
            },
            *booted,
        );
    }

    // Wheel has to be non-passive so edge scrolls can be cancelled.
    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |booted: &bool| {
                let mut destructor: Box<dyn FnOnce()> = Box::new(|| ());
                if *booted {
                    if let Some(document) = window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(WheelEvent)>::new(move |e: WheelEvent| driver.wheel(&e));
                        let options = AddEventListenerOptions::new();
                        options.set_passive(false);
                        match document.add_event_listener_with_callback_and_add_event_listener_options(
                            "wheel",
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(()) => {
                                destructor = Box::new(move || {
                                    let _ = document.remove_event_listener_with_callback(
                                        "wheel",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                });
                            }
                            Err(_) => warn!("could not attach wheel listener"),
                        }
                    }
                }
                destructor
            },
            *booted,
        );
    }

    {
        let driver = driver.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if driver.ready() {
                driver.key(&e);
            }
        });
    }

    {
        let touch_start = touch_start.clone();
        use_event_with_window("touchstart", move |e: TouchEvent| {
            if let Some(y) = touch_y(&e) {
                *touch_start.borrow_mut() = y;
            }
        });
    }

    {
        let driver = driver.clone();
        let touch_start = touch_start.clone();
        use_event_with_window("touchend", move |e: TouchEvent| {
            if !driver.ready() {
                return;
            }
            if let Some(end_y) = touch_y(&e) {
                let start_y = *touch_start.borrow();
                driver.swipe(start_y, end_y);
            }
        });
    }

    let on_loading_hidden = {
        let booted = booted.clone();
        let sparkles = sparkles.clone();
        Callback::from(move |_: ()| {
            let seed = web_sys::js_sys::Date::now() as u64;
            let mut rng = SmallRng::seed_from_u64(seed);
            sparkles.set(scatter(&mut rng, SPARKLE_COUNT));
            booted.set(true);
            debug!("deck ready");
        })
    };

    let on_loading_removed = {
        let revealed = revealed.clone();
        Callback::from(move |_: ()| revealed.set(true))
    };

    let go_to = {
        let driver = driver.clone();
        Callback::from(move |index: usize| driver.go_to(index))
    };

    let open_order = {
        let order_item = order_item.clone();
        Callback::from(move |item: String| order_item.set(Some(item)))
    };

    let open_custom = {
        let custom_open = custom_open.clone();
        Callback::from(move |_: ()| custom_open.set(true))
    };

    let entries: Vec<NavEntry> = catalog
        .slides
        .iter()
        .map(|slide| NavEntry {
            id: slide.id.clone(),
            label: slide.label.clone(),
        })
        .collect();
    let labels: Vec<String> = entries.iter().map(|entry| entry.label.clone()).collect();
    let explore_index = catalog
        .slides
        .iter()
        .position(|slide| slide.kind == SlideKind::Collection)
        .unwrap_or(0);

    html! {
        <div class="deck">
            <LoadingScreen on_hidden={on_loading_hidden} on_removed={on_loading_removed} />
            <Navbar entries={entries} current={*current} on_select={go_to.clone()} />
            <Indicators labels={labels} current={*current} on_select={go_to.clone()} />
            <main class="slides">
                { for catalog.slides.iter().enumerate().map(|(index, slide)| {
                    let active = *booted && index == *current;
                    let reveal = slide_reveal(active, *revealed, *navigated);
                    let content = match slide.kind {
                        SlideKind::Hero => html! {
                            <HeroSlide
                                info={slide.clone()}
                                sparkles={(*sparkles).clone()}
                                {explore_index}
                                on_navigate={go_to.clone()}
                            />
                        },
                        SlideKind::Collection => {
                            let pieces: Vec<Piece> = slide
                                .category
                                .as_deref()
                                .map(|category| catalog.pieces_in(category).cloned().collect())
                                .unwrap_or_default();
                            html! {
                                <CollectionSlide info={slide.clone()} {pieces} on_order={open_order.clone()} />
                            }
                        }
                        SlideKind::Custom => html! {
                            <CustomSlide info={slide.clone()} on_open={open_custom.clone()} />
                        },
                        SlideKind::Story => html! { <StorySlide info={slide.clone()} /> },
                        SlideKind::Contact => html! {
                            <ContactSlide info={slide.clone()} on_inquiry={open_order.clone()} />
                        },
                    };
                    html! {
                        <section
                            id={slide.id.clone()}
                            class={classes!("slide", format!("slide-{}", slide.id), active.then_some("active"))}
                            ref={slides[index].clone()}
                        >
                            <ContextProvider<Reveal> context={reveal}>
                                {content}
                            </ContextProvider<Reveal>>
                        </section>
                    }
                }) }
            </main>
            <OrderModal item={(*order_item).clone()} on_close={close_modals.clone()} />
            <CustomDesignModal open={*custom_open} on_close={close_modals} />
            <style>{PAGE_STYLES}</style>
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    body {
        margin: 0;
        overflow: hidden;
        background: #0f0d0a;
        color: #f5efe0;
        font-family: 'Montserrat', -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    }
    .slides {
        position: relative;
        height: 100vh;
        width: 100%;
    }
    .slide {
        position: absolute;
        inset: 0;
        overflow-y: auto;
        opacity: 0;
        visibility: hidden;
        transform: translateY(30px);
        transition: opacity 0.9s ease, transform 0.9s ease, visibility 0.9s;
        scrollbar-width: none;
    }
    .slide::-webkit-scrollbar { display: none; }
    .slide.active {
        opacity: 1;
        visibility: visible;
        transform: translateY(0);
    }
    .slide-inner {
        min-height: 100vh;
        box-sizing: border-box;
        padding: 7rem 8vw 4rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-inner {
        position: relative;
        overflow: hidden;
        background: radial-gradient(ellipse at center, #2a2116 0%, #0f0d0a 70%);
    }
    .eyebrow {
        letter-spacing: 0.3em;
        text-transform: uppercase;
        font-size: 0.75rem;
        color: #d4af37;
    }
    .hero-title, .section-title {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 400;
        color: #f5efe0;
    }
    .hero-title { font-size: clamp(2.5rem, 6vw, 5rem); margin: 1rem 0; }
    .section-title { font-size: clamp(2rem, 4vw, 3.2rem); margin: 0 0 0.5rem; }
    .hero-subtitle, .section-subtitle, .story-text {
        max-width: 640px;
        margin: 0 auto 2rem;
        color: rgba(245, 239, 224, 0.7);
        line-height: 1.7;
    }
    .fade-in {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .fade-in.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .cta-button, .order-button, .submit-button {
        border: 1px solid #d4af37;
        background: transparent;
        color: #d4af37;
        padding: 0.9rem 2.2rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        font-size: 0.8rem;
        cursor: pointer;
        transition: background 0.3s ease, color 0.3s ease;
    }
    .cta-button:hover, .order-button:hover, .submit-button:hover {
        background: #d4af37;
        color: #0f0d0a;
    }
    .submit-button:disabled { opacity: 0.6; cursor: wait; }
    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        font-size: 0.7rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: rgba(212, 175, 55, 0.7);
    }
    .collection-grid, .steps-grid, .contact-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 2rem;
        width: 100%;
        max-width: 1100px;
        margin-top: 2rem;
    }
    .collection-item, .step, .contact-card {
        background: rgba(255, 255, 255, 0.03);
        border: 1px solid rgba(212, 175, 55, 0.15);
        padding: 1.5rem;
        text-align: left;
    }
    .item-image {
        aspect-ratio: 4 / 3;
        background: linear-gradient(135deg, #2a2116, #17130d);
        margin-bottom: 1rem;
        overflow: hidden;
    }
    .item-image img { width: 100%; height: 100%; object-fit: cover; }
    .item-price { display: block; color: #d4af37; margin: 0.5rem 0 1rem; }
    .step-number { color: #d4af37; font-family: 'Cormorant Garamond', serif; font-size: 2rem; }
    .stats-row { display: flex; gap: 4rem; justify-content: center; flex-wrap: wrap; }
    .stat { display: flex; flex-direction: column; }
    .stat-value { font-family: 'Cormorant Garamond', serif; font-size: 3rem; color: #d4af37; }
    .stat-label { font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; }
    .site-footer { margin-top: 3rem; font-size: 0.75rem; color: rgba(245, 239, 224, 0.4); }

    .modal {
        position: fixed;
        inset: 0;
        z-index: 500;
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        visibility: hidden;
        transition: opacity 0.4s ease, visibility 0.4s ease;
    }
    .modal.active { opacity: 1; visibility: visible; }
    .modal-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.75); }
    .modal-content {
        position: relative;
        width: min(520px, 92vw);
        max-height: 90vh;
        overflow-y: auto;
        background: #17130d;
        border: 1px solid rgba(212, 175, 55, 0.3);
        padding: 2.5rem;
        box-sizing: border-box;
    }
    .modal-wide { width: min(760px, 94vw); }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: #d4af37;
        font-size: 1.8rem;
        cursor: pointer;
    }
    .modal-title { font-family: 'Cormorant Garamond', serif; font-weight: 400; margin-top: 0; }
    .order-form, .custom-form { display: flex; flex-direction: column; gap: 1.1rem; }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    .form-group { display: flex; flex-direction: column; gap: 0.4rem; text-align: left; }
    .form-group label { font-size: 0.75rem; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(245, 239, 224, 0.7); }
    .form-group input, .form-group select, .form-group textarea {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(212, 175, 55, 0.25);
        color: #f5efe0;
        padding: 0.75rem;
        font: inherit;
    }
    .error-message { min-height: 1em; font-size: 0.75rem; color: #e57373; opacity: 0; transition: opacity 0.2s ease; }
    .error-message.visible { opacity: 1; }
    .success-message { display: none; text-align: center; }
    .success-message.visible { display: block; }
    .success-icon { font-size: 2.5rem; color: #d4af37; }
    .upload-zone {
        border: 1px dashed rgba(212, 175, 55, 0.5);
        padding: 1.5rem;
        text-align: center;
        cursor: pointer;
        transition: background 0.2s ease, border-color 0.2s ease;
    }
    .upload-zone.drag-over { background: rgba(212, 175, 55, 0.08); border-color: #d4af37; }
    .upload-hint { font-size: 0.75rem; color: rgba(245, 239, 224, 0.5); }
    .upload-preview { display: flex; flex-wrap: wrap; gap: 0.75rem; }
    .preview-item { position: relative; width: 80px; height: 80px; border: 1px solid rgba(212, 175, 55, 0.3); }
    .preview-item img { width: 100%; height: 100%; object-fit: cover; }
    .preview-name { font-size: 0.65rem; word-break: break-all; padding: 0.25rem; display: block; }
    .preview-remove {
        position: absolute;
        top: -8px;
        right: -8px;
        width: 22px;
        height: 22px;
        border-radius: 50%;
        border: none;
        background: #d4af37;
        color: #0f0d0a;
        cursor: pointer;
    }
    @media (max-width: 700px) {
        .form-row { grid-template-columns: 1fr; }
        .slide-inner { padding: 6rem 1.5rem 3rem; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slide_waits_for_loading_screen() {
        assert!(!slide_reveal(true, false, false).active);
        assert!(slide_reveal(true, true, false).active);
    }

    #[test]
    fn slides_entered_during_fade_reveal_at_once() {
        assert!(slide_reveal(true, false, true).active);
        assert!(!slide_reveal(false, false, true).active);
        assert!(!slide_reveal(false, true, true).active);
    }
}
