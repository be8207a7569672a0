use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::server::{Flash, ServerError};

pub async fn index(flash: Flash) -> Result<Response, ServerError> {
    let (jar, notice) = flash.take();

    let page = IndexPage { notice };

    Ok((jar, Html(page.render()?)).into_response())
}

pub async fn careers(flash: Flash) -> Result<Response, ServerError> {
    let (jar, notice) = flash.take();

    let page = CareersPage {
        title: "Careers",
        notice,
    };

    Ok((jar, Html(page.render()?)).into_response())
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    notice: Option<String>,
}

#[derive(Template)]
#[template(path = "careers.html")]
struct CareersPage {
    title: &'static str,
    notice: Option<String>,
}
