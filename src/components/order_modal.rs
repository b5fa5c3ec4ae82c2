use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{MODAL_RESET_MS, ORDER_SUBMIT_MS};
use crate::dom;
use crate::submission::SubmitPhase;
use crate::validation::{check_order_field_on_blur, validate_order, FieldErrors, OrderField, OrderInput};

const SUBMIT_LABEL: &str = "Submit Order";
const SUBMITTING_LABEL: &str = "Processing...";

#[derive(Properties, PartialEq)]
pub struct OrderModalProps {
    /// The piece being ordered; `None` keeps the modal closed.
    pub item: Option<String>,
    pub on_close: Callback<()>,
}

#[function_component(OrderModal)]
pub fn order_modal(props: &OrderModalProps) -> Html {
    let input = use_state(OrderInput::default);
    let errors = use_state(FieldErrors::<OrderField>::default);
    let phase = use_state(SubmitPhase::default);
    let pending = use_mut_ref(|| None::<Timeout>);

    // Opening starts from a clean form; closing clears it once the fade is done.
    {
        let input = input.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let pending = pending.clone();
        use_effect_with_deps(
            move |item: &Option<String>| {
                let reset = move |item_name: String| {
                    pending.borrow_mut().take();
                    input.set(OrderInput {
                        item_name,
                        ..OrderInput::default()
                    });
                    errors.set(FieldErrors::default());
                    phase.set(SubmitPhase::Editing);
                };
                let delayed = match item {
                    Some(name) => {
                        dom::set_body_scroll_locked(true);
                        reset(name.clone());
                        None
                    }
                    None => {
                        dom::set_body_scroll_locked(false);
                        Some(Timeout::new(MODAL_RESET_MS, move || reset(String::new())))
                    }
                };
                move || drop(delayed)
            },
            props.item.clone(),
        );
    }

    let on_field_input = |field: OrderField| {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next_errors = (*errors).clone();
            next_errors.clear_if_filled(field, &value);
            errors.set(next_errors);
            let mut next = (*input).clone();
            match field {
                OrderField::Name => next.name = value,
                OrderField::Email => next.email = value,
                OrderField::Phone => next.phone = value,
            }
            input.set(next);
        })
    };

    let on_field_blur = |field: OrderField| {
        let errors = errors.clone();
        Callback::from(move |e: FocusEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next_errors = (*errors).clone();
            check_order_field_on_blur(&mut next_errors, field, &value);
            errors.set(next_errors);
        })
    };

    let on_message_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*input).clone();
            next.message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            input.set(next);
        })
    };

    let onsubmit = {
        let input = input.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = validate_order(&input);
            let valid = result.is_valid();
            errors.set(result);
            if !valid {
                return;
            }
            let mut next = *phase;
            if !next.begin() {
                return;
            }
            phase.set(next);
            info!("order submitted for {:?}", input.item_name);
            let phase = phase.setter();
            *pending.borrow_mut() = Some(Timeout::new(ORDER_SUBMIT_MS, move || {
                phase.set(SubmitPhase::Submitted);
            }));
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let render_field = |field: OrderField, id: &'static str, kind: &'static str, error_id: &'static str, value: &str| {
        html! {
            <div class="form-group">
                <label for={id}>{format!("{} *", field.label())}</label>
                <input
                    type={kind}
                    id={id}
                    value={value.to_string()}
                    oninput={on_field_input(field)}
                    onblur={on_field_blur(field)}
                />
                <span id={error_id} class={classes!("error-message", errors.get(field).is_some().then_some("visible"))}>
                    {errors.get(field).unwrap_or_default()}
                </span>
            </div>
        }
    };

    html! {
        <div id="orderModal" class={classes!("modal", props.item.is_some().then_some("active"))}>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-content">
                <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal-title">{"Place an Order"}</h2>
                if phase.shows_form() {
                    <form id="orderForm" class="order-form" novalidate=true {onsubmit}>
                        <div class="form-group">
                            <label for="itemName">{"Selected Piece"}</label>
                            <input type="text" id="itemName" readonly=true value={input.item_name.clone()} />
                        </div>
                        { render_field(OrderField::Name, "customerName", "text", "nameError", &input.name) }
                        { render_field(OrderField::Email, "customerEmail", "email", "emailError", &input.email) }
                        { render_field(OrderField::Phone, "customerPhone", "tel", "phoneError", &input.phone) }
                        <div class="form-group">
                            <label for="customerMessage">{"Message"}</label>
                            <textarea
                                id="customerMessage"
                                rows="3"
                                placeholder="Size, engraving, preferred visit date..."
                                value={input.message.clone()}
                                oninput={on_message_input}
                            ></textarea>
                        </div>
                        <button type="submit" class="submit-button" disabled={phase.is_busy()}>
                            {phase.button_label(SUBMIT_LABEL, SUBMITTING_LABEL)}
                        </button>
                    </form>
                }
                <div id="successMessage" class={classes!("success-message", phase.shows_success().then_some("visible"))}>
                    <div class="success-icon">{"✦"}</div>
                    <h3>{"Thank You!"}</h3>
                    <p>{"Your order request has been received. Our team will contact you within 24 hours to confirm the details."}</p>
                    <button class="submit-button" onclick={close}>{"Close"}</button>
                </div>
            </div>
        </div>
    }
}
