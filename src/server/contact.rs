use std::collections::BTreeMap;

use anyhow::anyhow;
use askama::Template;
use axum::{
    extract::Form,
    response::{Html, IntoResponse, Response},
};

use crate::server::{Flash, ServerError};

const TITLE: &str = "Contact Us";

pub async fn contact(flash: Flash) -> Result<Response, ServerError> {
    let (jar, notice) = flash.take();

    let page = ContactPage {
        title: TITLE,
        numbers: [1, 2, 3],
        notice,
    };

    Ok((jar, Html(page.render()?)).into_response())
}

pub async fn submit(
    flash: Flash,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Result<Response, ServerError> {
    // The email field is read without a default, so its absence surfaces
    // as a server error rather than an empty value.
    let email = fields
        .get("email")
        .ok_or_else(|| anyhow!("Form field email missing"))?;

    let name = fields.get("name").cloned().unwrap_or_default();

    tracing::debug!("Contact submission from {:?} <{}>", name, email);

    let flash = flash.notice(format!("Thanks {name}, we have received your message!"));

    let (jar, notice) = flash.take();

    let page = ContactPage {
        title: TITLE,
        numbers: [1, 2, 3],
        notice,
    };

    Ok((jar, Html(page.render()?)).into_response())
}

#[derive(Template)]
#[template(path = "contact-us.html")]
struct ContactPage {
    title: &'static str,
    numbers: [u32; 3],
    notice: Option<String>,
}
