use std::collections::BTreeMap;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_console::log;
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::theme::Theme;

pub const FIELD_NAMES: [&str; 6] = [
    "name",
    "businessName",
    "email",
    "phone",
    "location",
    "message",
];

pub const REQUIRED_FIELDS: [&str; 4] = ["name", "businessName", "email", "location"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("application already submitted")]
    AlreadySubmitted,
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Controlled state of the dealer application: one value per field plus
/// the Editing/Submitted phase. Submitted is terminal for the mount.
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryFormState {
    fields: BTreeMap<String, String>,
    phase: FormPhase,
}

impl InquiryFormState {
    pub fn new() -> Self {
        let fields = FIELD_NAMES
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        Self { fields, phase: FormPhase::Editing }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or_default()
    }

    /// Replaces exactly one field's value. No validation happens here;
    /// unknown field names are ignored. Rejected once submitted.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        if self.phase == FormPhase::Submitted {
            return Err(FormError::AlreadySubmitted);
        }
        if let Some(slot) = self.fields.get_mut(field) {
            *slot = value.to_string();
        }
        Ok(())
    }

    /// Forwards the current field mapping to `handler` and, only if it
    /// succeeds, moves the form into its terminal Submitted phase. Required
    /// fields must be non-empty at this moment; the rendered inputs also
    /// carry the native `required` attribute.
    pub fn submit<F>(&mut self, handler: F) -> Result<(), FormError>
    where
        F: FnOnce(&BTreeMap<String, String>) -> Result<(), String>,
    {
        if self.phase == FormPhase::Submitted {
            return Err(FormError::AlreadySubmitted);
        }
        for field in REQUIRED_FIELDS {
            if self.value(field).is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        handler(&self.fields).map_err(FormError::Rejected)?;
        self.phase = FormPhase::Submitted;
        Ok(())
    }
}

#[derive(Serialize)]
struct SubmissionRecord<'a> {
    theme: &'a str,
    #[serde(flatten)]
    fields: &'a BTreeMap<String, String>,
}

// There is no dealer backend; an accepted application is written to the
// browser console for diagnostics.
fn log_submission(theme: &'static str, fields: &BTreeMap<String, String>) -> Result<(), String> {
    let record = SubmissionRecord { theme, fields };
    let payload = serde_json::to_string(&record).map_err(|err| err.to_string())?;
    log!("dealer application received:", payload);
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct InquiryFormProps {
    pub theme: &'static Theme,
    /// Receives the submitted field mapping; an Err keeps the form
    /// editable so the applicant can correct and resubmit.
    #[prop_or_default]
    pub on_submit: Option<Callback<BTreeMap<String, String>, Result<(), String>>>,
}

#[function_component(InquiryForm)]
pub fn inquiry_form(props: &InquiryFormProps) -> Html {
    let form = use_state(InquiryFormState::new);
    let error = use_state(|| None::<String>);

    let edit_field = {
        let form = form.clone();
        move |field: &'static str| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                if next.set_field(field, &input.value()).is_ok() {
                    form.set(next);
                }
            })
        }
    };

    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            if next.set_field("message", &area.value()).is_ok() {
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let theme_slug = props.theme.slug;
        let handler = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next.submit(|fields| match &handler {
                Some(callback) => callback.emit(fields.clone()),
                None => log_submission(theme_slug, fields),
            });
            match outcome {
                Ok(()) => {
                    info!("dealer application submitted");
                    error.set(None);
                    form.set(next);
                }
                Err(err) => {
                    warn!("dealer application not submitted: {err}");
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let copy = &props.theme.form;

    if form.phase() == FormPhase::Submitted {
        return html! {
            <div class="inquiry-confirmation">
                <div class="confirmation-glyph">{copy.confirm_glyph}</div>
                <h3>{copy.confirm_heading}</h3>
                <p>{copy.confirm_body}</p>
            </div>
        };
    }

    html! {
        <form class="inquiry-form" onsubmit={onsubmit}>
            {
                if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-error">{message}</div> }
                } else {
                    html! {}
                }
            }
            <div class="field-row">
                <div class="field">
                    <label for="dealer-name">{copy.name.label}</label>
                    <input
                        id="dealer-name"
                        type="text"
                        name="name"
                        required=true
                        placeholder={copy.name.placeholder}
                        value={form.value("name").to_string()}
                        oninput={edit_field("name")}
                    />
                </div>
                <div class="field">
                    <label for="dealer-business">{copy.business.label}</label>
                    <input
                        id="dealer-business"
                        type="text"
                        name="businessName"
                        required=true
                        placeholder={copy.business.placeholder}
                        value={form.value("businessName").to_string()}
                        oninput={edit_field("businessName")}
                    />
                </div>
            </div>
            <div class="field-row">
                <div class="field">
                    <label for="dealer-email">{copy.email.label}</label>
                    <input
                        id="dealer-email"
                        type="email"
                        name="email"
                        required=true
                        placeholder={copy.email.placeholder}
                        value={form.value("email").to_string()}
                        oninput={edit_field("email")}
                    />
                </div>
                <div class="field">
                    <label for="dealer-phone">{copy.phone.label}</label>
                    <input
                        id="dealer-phone"
                        type="tel"
                        name="phone"
                        placeholder={copy.phone.placeholder}
                        value={form.value("phone").to_string()}
                        oninput={edit_field("phone")}
                    />
                </div>
            </div>
            <div class="field">
                <label for="dealer-location">{copy.location.label}</label>
                <input
                    id="dealer-location"
                    type="text"
                    name="location"
                    required=true
                    placeholder={copy.location.placeholder}
                    value={form.value("location").to_string()}
                    oninput={edit_field("location")}
                />
            </div>
            <div class="field">
                <label for="dealer-message">{copy.message.label}</label>
                <textarea
                    id="dealer-message"
                    name="message"
                    rows="4"
                    placeholder={copy.message.placeholder}
                    value={form.value("message").to_string()}
                    oninput={edit_message}
                />
            </div>
            <button type="submit" class="submit-button">{copy.submit_label}</button>
            {
                if copy.fine_print.is_empty() {
                    html! {}
                } else {
                    html! { <p class="fine-print">{copy.fine_print}</p> }
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn filled() -> InquiryFormState {
        let mut state = InquiryFormState::new();
        state.set_field("name", "Jane Doe").unwrap();
        state.set_field("businessName", "Acme Cycles").unwrap();
        state.set_field("email", "jane@acme.com").unwrap();
        state.set_field("location", "Austin, TX").unwrap();
        state
    }

    #[test]
    fn starts_editing_with_all_fields_empty() {
        let state = InquiryFormState::new();
        assert_eq!(state.phase(), FormPhase::Editing);
        for field in FIELD_NAMES {
            assert_eq!(state.value(field), "");
        }
    }

    #[test]
    fn field_change_replaces_only_that_field() {
        let mut state = InquiryFormState::new();
        state.set_field("email", "a@b.com").unwrap();
        state.set_field("email", "c@d.com").unwrap();
        assert_eq!(state.value("email"), "c@d.com");
        for field in FIELD_NAMES.iter().filter(|field| **field != "email") {
            assert_eq!(state.value(field), "");
        }
    }

    #[test]
    fn repeated_identical_edit_is_idempotent() {
        let mut state = InquiryFormState::new();
        state.set_field("phone", "(555) 123-4567").unwrap();
        let snapshot = state.clone();
        state.set_field("phone", "(555) 123-4567").unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn submit_with_empty_required_field_is_blocked() {
        let mut state = filled();
        state.set_field("location", "").unwrap();
        let called = Cell::new(false);
        let outcome = state.submit(|_| {
            called.set(true);
            Ok(())
        });
        assert_eq!(outcome, Err(FormError::MissingField("location")));
        assert_eq!(state.phase(), FormPhase::Editing);
        assert!(!called.get());
    }

    #[test]
    fn submit_forwards_the_exact_field_mapping() {
        let mut state = filled();
        let seen = RefCell::new(None);
        state
            .submit(|fields| {
                *seen.borrow_mut() = Some(fields.clone());
                Ok(())
            })
            .unwrap();
        assert_eq!(state.phase(), FormPhase::Submitted);

        let fields = seen.into_inner().unwrap();
        assert_eq!(fields.len(), FIELD_NAMES.len());
        assert_eq!(fields["name"], "Jane Doe");
        assert_eq!(fields["businessName"], "Acme Cycles");
        assert_eq!(fields["email"], "jane@acme.com");
        assert_eq!(fields["location"], "Austin, TX");
        assert_eq!(fields["phone"], "");
        assert_eq!(fields["message"], "");
    }

    #[test]
    fn submitted_is_terminal() {
        let mut state = filled();
        let calls = Cell::new(0);
        state
            .submit(|_| {
                calls.set(calls.get() + 1);
                Ok(())
            })
            .unwrap();

        assert_eq!(
            state.set_field("name", "Someone Else"),
            Err(FormError::AlreadySubmitted)
        );
        assert_eq!(state.value("name"), "Jane Doe");

        let second = state.submit(|_| {
            calls.set(calls.get() + 1);
            Ok(())
        });
        assert_eq!(second, Err(FormError::AlreadySubmitted));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn handler_failure_keeps_the_form_editable() {
        let mut state = filled();
        let outcome = state.submit(|_| Err("connection lost".to_string()));
        assert_eq!(
            outcome,
            Err(FormError::Rejected("connection lost".to_string()))
        );
        assert_eq!(state.phase(), FormPhase::Editing);

        // The applicant can retry after the handler recovers.
        state.submit(|_| Ok(())).unwrap();
        assert_eq!(state.phase(), FormPhase::Submitted);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut state = InquiryFormState::new();
        state.set_field("fax", "555-0100").unwrap();
        assert_eq!(state.value("fax"), "");
        let snapshot = InquiryFormState::new();
        assert_eq!(state, snapshot);
    }
}
