use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::{
    contact::{ContactForm, FormState},
    state::AppState,
};

use super::layout::{HtmlError, Layout, render};

pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub static OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours {
        days: "Lundi - Vendredi",
        hours: "9h00 - 18h00",
    },
    OpeningHours {
        days: "Samedi",
        hours: "10h00 - 16h00",
    },
    OpeningHours {
        days: "Dimanche",
        hours: "Fermé",
    },
];

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    layout: Layout,
    form: ContactForm,
    errors: Vec<String>,
    confirmation: Option<&'static str>,
    max_message_len: usize,
    opening_hours: &'static [OpeningHours],
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contact", get(contact_view).post(contact_submit))
        .with_state(state)
}

async fn contact_view(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    render_form(&state, &FormState::Empty).map(Html)
}

async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Result<Response, HtmlError> {
    let outcome = FormState::from(form).submit(state.config.contact.max_message_len);
    let status = match outcome {
        FormState::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };
    let rendered = render_form(&state, &outcome)?;
    Ok((status, Html(rendered)).into_response())
}

fn render_form(state: &AppState, outcome: &FormState) -> Result<String, HtmlError> {
    render(
        ContactTemplate {
            layout: Layout::new(&state.config, "contact"),
            form: outcome.form(),
            errors: outcome.errors().iter().map(ToString::to_string).collect(),
            confirmation: outcome.confirmation(),
            max_message_len: state.config.contact.max_message_len,
            opening_hours: OPENING_HOURS,
        },
        "contact",
    )
}
