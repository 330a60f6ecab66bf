use std::collections::{HashMap, HashSet};

use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{FORM_INVALID_MESSAGE, FORM_SUCCESS_MESSAGE};
use crate::dom;
use crate::interaction::form::{validate, FieldKind, FieldSpec, FormError, CONSULTATION_FIELDS};

fn event_value(e: &Event) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        return Some(select.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value())
}

fn notify(message: &str) {
    if let Err(e) = dom::alert(message) {
        warn!("{}", e);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let values = use_state(HashMap::<&'static str, String>::new);
    let errors = use_state(HashSet::<&'static str>::new);

    let onsubmit = {
        let values = values.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate(CONSULTATION_FIELDS, &values) {
                Ok(()) => {
                    info!("Consultation form passed validation");
                    errors.set(HashSet::new());
                    notify(FORM_SUCCESS_MESSAGE);
                    values.set(HashMap::new());
                }
                Err(FormError::MissingRequired(missing)) => {
                    info!("Consultation form rejected, missing {:?}", missing);
                    errors.set(missing.into_iter().collect());
                    notify(FORM_INVALID_MESSAGE);
                }
            }
        })
    };

    let render_field = |field: &FieldSpec| {
        let name = field.name;
        let id = field.id();
        let value = values.get(name).cloned().unwrap_or_default();
        let class = classes!("form-control", errors.contains(name).then(|| "error"));
        let onchange = {
            let values = values.clone();
            Callback::from(move |e: Event| {
                if let Some(value) = event_value(&e) {
                    let mut next = (*values).clone();
                    next.insert(name, value);
                    values.set(next);
                }
            })
        };
        let oninput = {
            let onchange = onchange.clone();
            Callback::from(move |e: InputEvent| onchange.emit(e.into()))
        };

        let control = match field.kind {
            FieldKind::Select(options) => html! {
                <select {id} {name} {class} required={field.required} {onchange}>
                    <option value="" selected={value.is_empty()}>{"Choose a service"}</option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{*option}</option>
                    }) }
                </select>
            },
            FieldKind::TextArea => html! {
                <textarea {id} {name} {class} rows="5" required={field.required} {value} {oninput} />
            },
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let input_type = match field.kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                html! {
                    <input type={input_type} {id} {name} {class} required={field.required} {value} {oninput} />
                }
            }
        };

        html! {
            <div class="form-group">
                <label for={id}>{ field.label }</label>
                { control }
            </div>
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="container">
                <h2>{"Book a free consultation"}</h2>
                // Browser validation is off so required fields are checked and highlighted here
                <form id="consultationForm" novalidate=true {onsubmit}>
                    { for CONSULTATION_FIELDS.iter().map(render_field) }
                    <button type="submit" class="btn btn-primary">{"Send message"}</button>
                </form>
            </div>
            <style>
                {r#"
                    .error {
                        border-color: red !important;
                    }
                "#}
            </style>
        </section>
    }
}
