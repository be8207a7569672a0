use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use cap_std::fs::Dir;

use crate::{
    member::Member,
    server::{Flash, ServerError},
};

pub async fn about(
    flash: Flash,
    State(dir): State<&'static Dir>,
) -> Result<Response, ServerError> {
    let members = Member::read_all(dir)?;

    tracing::debug!("Loaded {} member records", members.len());

    let (jar, notice) = flash.take();

    let page = AboutPage {
        title: "About Us",
        members,
        notice,
    };

    Ok((jar, Html(page.render()?)).into_response())
}

pub async fn member(
    Path(slug): Path<String>,
    flash: Flash,
    State(dir): State<&'static Dir>,
) -> Result<Response, ServerError> {
    let member = Member::by_slug(Member::read_all(dir)?, &slug);

    let (jar, notice) = flash.take();

    let page = MemberPage { member, notice };

    Ok((jar, Html(page.render()?)).into_response())
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage {
    title: &'static str,
    members: Vec<Member>,
    notice: Option<String>,
}

#[derive(Template)]
#[template(path = "member.html")]
struct MemberPage {
    member: Member,
    notice: Option<String>,
}
