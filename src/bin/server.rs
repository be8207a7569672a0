use std::env::var;
use std::net::{IpAddr, SocketAddr};

use anyhow::Error;
use axum_extra::extract::cookie::Key;
use cap_std::{ambient_authority, fs::Dir};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teamsite::{
    data_dir,
    server::{router, AppState},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ip = var("IP")
        .unwrap_or_else(|_| "0.0.0.0".to_owned())
        .parse::<IpAddr>()
        .expect("Environment variable IP invalid");

    let port = var("PORT")
        .unwrap_or_else(|_| "4000".to_owned())
        .parse::<u16>()
        .expect("Environment variable PORT invalid");

    let secret_key = var("SECRET_KEY").expect("Environment variable SECRET_KEY not set");

    let dir = &*Box::leak(Box::new(Dir::open_ambient_dir(
        data_dir(),
        ambient_authority(),
    )?));

    let state = AppState {
        dir,
        key: Key::derive_from(secret_key.as_bytes()),
    };

    let router = router(state).layer(
        TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)),
    );

    let bind_addr = SocketAddr::new(ip, port);

    tracing::info!("Listening on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
