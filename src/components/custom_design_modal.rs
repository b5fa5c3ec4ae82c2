use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{FileList, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{CUSTOM_SUBMIT_MS, MAX_UPLOAD_FILES, MAX_UPLOAD_SIZE_MB, MODAL_RESET_MS};
use crate::dom;
use crate::submission::SubmitPhase;
use crate::uploads::UploadSlots;
use crate::validation::{validate_custom, CustomField, CustomInput, FieldErrors};

const SUBMIT_LABEL: &str = "Submit Custom Request \u{2726}";
const SUBMITTING_LABEL: &str = "Submitting...";

const JEWELLERY_TYPES: [(&str, &str); 6] = [
    ("ring", "Ring"),
    ("necklace", "Necklace"),
    ("earrings", "Earrings"),
    ("bangles", "Bangles / Bracelet"),
    ("bridal-set", "Bridal Set"),
    ("other", "Something else"),
];

#[derive(Properties, PartialEq)]
pub struct CustomDesignModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Runs a picked or dropped file list through the upload rules, alerting for
/// every rejected file.
fn take_files(uploads: &UseStateHandle<UploadSlots>, files: FileList) {
    let picked = (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| (dom::upload_from_file(&file), file));
    let mut next = (**uploads).clone();
    let result = next.add_batch(picked, dom::create_preview);
    for rejection in &result.rejected {
        dom::alert(&rejection.to_string());
    }
    if !result.added.is_empty() {
        uploads.set(next);
    }
}

#[function_component(CustomDesignModal)]
pub fn custom_design_modal(props: &CustomDesignModalProps) -> Html {
    let input = use_state(CustomInput::default);
    let errors = use_state(FieldErrors::<CustomField>::default);
    let phase = use_state(SubmitPhase::default);
    let uploads = use_state(UploadSlots::default);
    let drag_over = use_state(|| false);
    let file_input = use_node_ref();
    let pending = use_mut_ref(|| None::<Timeout>);

    let reset = {
        let input = input.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let uploads = uploads.clone();
        let pending = pending.clone();
        Callback::from(move |_: ()| {
            pending.borrow_mut().take();
            for upload in (*uploads).clone().clear() {
                dom::revoke_preview(&upload);
            }
            uploads.set(UploadSlots::default());
            input.set(CustomInput::default());
            errors.set(FieldErrors::default());
            phase.set(SubmitPhase::Editing);
        })
    };

    // A sent request is cleared after the modal closes; a half-written one is kept.
    {
        let reset = reset.clone();
        let submitted = phase.shows_success();
        use_effect_with_deps(
            move |open: &bool| {
                dom::set_body_scroll_locked(*open);
                let delayed = (!*open && submitted)
                    .then(|| Timeout::new(MODAL_RESET_MS, move || reset.emit(())));
                move || drop(delayed)
            },
            props.open,
        );
    }

    let on_text_input = |field: CustomField| {
        let input = input.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                CustomField::Description => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next_errors = (*errors).clone();
            next_errors.clear_if_filled(field, &value);
            errors.set(next_errors);
            let mut next = (*input).clone();
            match field {
                CustomField::Name => next.name = value,
                CustomField::Contact => next.contact = value,
                CustomField::Description => next.description = value,
                CustomField::JewelleryType => next.jewellery_type = value,
            }
            input.set(next);
        })
    };

    let on_type_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let mut next = (*input).clone();
            next.jewellery_type = e.target_unchecked_into::<HtmlSelectElement>().value();
            input.set(next);
        })
    };

    let on_budget_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*input).clone();
            next.budget = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(next);
        })
    };

    let open_picker = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(el) = file_input.cast::<HtmlInputElement>() {
                el.click();
            }
        })
    };

    let on_files_picked = {
        let uploads = uploads.clone();
        Callback::from(move |e: Event| {
            let el: HtmlInputElement = e.target_unchecked_into();
            if let Some(files) = el.files() {
                take_files(&uploads, files);
            }
            // Cleared so picking the same file again still fires `change`.
            el.set_value("");
        })
    };

    let on_drag_enter = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            drag_over.set(true);
        })
    };

    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            drag_over.set(false);
        })
    };

    let on_drop = {
        let drag_over = drag_over.clone();
        let uploads = uploads.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            drag_over.set(false);
            if let Some(files) = e.data_transfer().and_then(|dt| dt.files()) {
                take_files(&uploads, files);
            }
        })
    };

    let remove_upload = |index: usize| {
        let uploads = uploads.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = (*uploads).clone();
            if let Some(removed) = next.remove(index) {
                dom::revoke_preview(&removed);
                uploads.set(next);
            }
        })
    };

    let onsubmit = {
        let input = input.clone();
        let errors = errors.clone();
        let phase = phase.clone();
        let uploads = uploads.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = validate_custom(&input);
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
            info!(
                "custom design request submitted: type={} images={}",
                input.jewellery_type,
                uploads.active_count()
            );
            let phase = phase.setter();
            *pending.borrow_mut() = Some(Timeout::new(CUSTOM_SUBMIT_MS, move || {
                phase.set(SubmitPhase::Submitted);
            }));
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let start_over = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let error_span = |field: CustomField, id: &'static str| {
        html! {
            <span id={id} class={classes!("error-message", errors.get(field).is_some().then_some("visible"))}>
                {errors.get(field).unwrap_or_default()}
            </span>
        }
    };

    html! {
        <div id="customDesignModal" class={classes!("modal", props.open.then_some("active"))}>
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-content modal-wide">
                <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal-title">{"Design Your Own"}</h2>
                if phase.shows_form() {
                    <form id="customDesignForm" class="custom-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="customName">{"Your Name *"}</label>
                                <input type="text" id="customName" value={input.name.clone()} oninput={on_text_input(CustomField::Name)} />
                                { error_span(CustomField::Name, "customNameError") }
                            </div>
                            <div class="form-group">
                                <label for="customContact">{"Phone or Email *"}</label>
                                <input type="text" id="customContact" value={input.contact.clone()} oninput={on_text_input(CustomField::Contact)} />
                                { error_span(CustomField::Contact, "customContactError") }
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="jewelleryType">{"Jewellery Type *"}</label>
                                <select id="jewelleryType" required=true onchange={on_type_change}>
                                    <option value="" selected={input.jewellery_type.is_empty()}>{"Select a type"}</option>
                                    { for JEWELLERY_TYPES.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={input.jewellery_type == *value}>{*label}</option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="budgetRange">{"Budget (optional)"}</label>
                                <input type="text" id="budgetRange" placeholder="e.g. ₹50,000 - ₹1,00,000" value={input.budget.clone()} oninput={on_budget_input} />
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="designDescription">{"Describe Your Design *"}</label>
                            <textarea
                                id="designDescription"
                                rows="4"
                                placeholder="Metal, stones, occasion, any details you have in mind..."
                                value={input.description.clone()}
                                oninput={on_text_input(CustomField::Description)}
                            ></textarea>
                            { error_span(CustomField::Description, "designDescError") }
                        </div>
                        <div
                            id="uploadZone"
                            class={classes!("upload-zone", (*drag_over).then_some("drag-over"))}
                            onclick={open_picker}
                            ondragenter={on_drag_enter.clone()}
                            ondragover={on_drag_enter}
                            ondragleave={on_drag_leave}
                            ondrop={on_drop}
                        >
                            <div class="upload-icon">{"⤒"}</div>
                            <div class="upload-title">{uploads.zone_title()}</div>
                            <div class="upload-hint">
                                {format!("Drag & drop or click. Up to {} images, {}MB each.", MAX_UPLOAD_FILES, MAX_UPLOAD_SIZE_MB)}
                            </div>
                        </div>
                        <input
                            type="file"
                            id="customFileInput"
                            accept="image/*"
                            multiple=true
                            hidden=true
                            ref={file_input}
                            onchange={on_files_picked}
                        />
                        <div id="uploadPreview" class="upload-preview">
                            { for uploads.iter().map(|(index, upload)| html! {
                                <div class="preview-item" key={index} data-index={index.to_string()}>
                                    if let Some(url) = upload.preview_url.clone() {
                                        <img src={url} alt={upload.name.clone()} />
                                    } else {
                                        <span class="preview-name">{&upload.name}</span>
                                    }
                                    <button type="button" class="preview-remove" title="Remove" onclick={remove_upload(index)}>{"×"}</button>
                                </div>
                            }) }
                        </div>
                        <button type="submit" id="customSubmitBtn" class="submit-button" disabled={phase.is_busy()}>
                            <span class="btn-text">{phase.button_label(SUBMIT_LABEL, SUBMITTING_LABEL)}</span>
                        </button>
                    </form>
                }
                <div id="customSuccessMessage" class={classes!("success-message", phase.shows_success().then_some("visible"))}>
                    <div class="success-icon">{"✦"}</div>
                    <h3>{"Request Received"}</h3>
                    <p>{"Our design team will review your idea and reach out with sketches and an estimate within 2-3 working days."}</p>
                    <button class="submit-button" onclick={start_over}>{"Submit Another Design"}</button>
                </div>
            </div>
        </div>
    }
}
