// src/templates/links.rs
//! URLs the views link to. Query values are form-encoded.

use crate::domain::ModalState;
use url::form_urlencoded::Serializer;

pub const RESULTS: &str = "/listings/results";

pub fn list(term: &str, shown: usize) -> String {
    let query = Serializer::new(String::new())
        .append_pair("q", term)
        .append_pair("shown", &shown.to_string())
        .finish();
    format!("/?{query}")
}

pub fn more(term: &str, shown: usize) -> String {
    let query = Serializer::new(String::new())
        .append_pair("q", term)
        .append_pair("shown", &shown.to_string())
        .finish();
    format!("/listings/more?{query}")
}

pub fn details(id: i64) -> String {
    format!("/details/{id}")
}

/// Full details page with the given modal open and description state.
pub fn details_with(id: i64, modal: ModalState, full_description: bool) -> String {
    let mut query = Serializer::new(String::new());
    if modal.is_open() {
        query.append_pair("m", &modal.to_string());
    }
    if full_description {
        query.append_pair("full", "1");
    }
    let query = query.finish();

    if query.is_empty() {
        details(id)
    } else {
        format!("/details/{id}?{query}")
    }
}

/// What the modal endpoint should apply to the state it is given.
#[derive(Debug, Clone, Copy)]
pub enum ModalInput<'a> {
    /// Render the state as is.
    Show,
    /// A DOM key name, e.g. `ArrowRight`.
    Key(&'a str),
    /// A control: `next`, `prev`, `close`, `outside` or `video`.
    Action(&'a str),
}

/// Modal fragment endpoint applying `input` to `modal`.
pub fn modal(id: i64, modal: ModalState, input: ModalInput) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("m", &modal.to_string());
    match input {
        ModalInput::Show => {}
        ModalInput::Key(key) => {
            query.append_pair("key", key);
        }
        ModalInput::Action(action) => {
            query.append_pair("action", action);
        }
    }
    format!("/details/{id}/modal?{}", query.finish())
}
