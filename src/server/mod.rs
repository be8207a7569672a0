mod about;
mod contact;
mod pages;

use std::convert::Infallible;

use anyhow::Error;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};
use cap_std::fs::Dir;

/// State shared by all handlers, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub dir: &'static Dir,
    pub key: Key,
}

impl FromRef<AppState> for &'static Dir {
    fn from_ref(state: &AppState) -> Self {
        state.dir
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(about::about))
        .route("/about/:slug", get(about::member))
        .route("/contact", get(contact::contact).post(contact::submit))
        .route("/careers", get(pages::careers))
        .with_state(state)
}

const FLASH_COOKIE: &str = "flash";

/// One-shot notice carried in a signed cookie between page views.
///
/// A handler queues a message via [`Flash::notice`] and the next render
/// takes it via [`Flash::take`], which also removes the cookie so the
/// message is displayed exactly once.
pub struct Flash {
    jar: SignedCookieJar,
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_request_parts(parts, state).await?;

        Ok(Self { jar })
    }
}

impl Flash {
    pub fn notice(self, message: String) -> Self {
        let cookie = Cookie::build((FLASH_COOKIE, message)).path("/").build();

        Self {
            jar: self.jar.add(cookie),
        }
    }

    pub fn take(self) -> (SignedCookieJar, Option<String>) {
        match self.jar.get(FLASH_COOKIE) {
            Some(cookie) => {
                let message = cookie.value().to_owned();
                let removal = Cookie::build(FLASH_COOKIE).path("/").build();

                (self.jar.remove(removal), Some(message))
            }
            None => (self.jar, None),
        }
    }
}

pub struct ServerError(Error);

impl<E> From<E> for ServerError
where
    Error: From<E>,
{
    fn from(err: E) -> Self {
        Self(Error::from(err))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
