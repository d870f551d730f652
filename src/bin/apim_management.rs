// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! Main API management executable.
//!
//! This is the entry point of the `apim-management` binary.

use axum::extract::DefaultBodyLimit;
use axum::http::{self, HeaderName, Request, header};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use sea_orm::{ConnectOptions, Database};
use secrecy::ExposeSecret;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    LatencyUnit, ServiceBuilderExt,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span, error, info, info_span};
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    prelude::*,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use apim_management::api;
use apim_management::config::Config;
use apim_management::provider::Provider;
use apim_management::service::{Service, ServiceState};

// Default body limit 256kB
const DEFAULT_BODY_LIMIT: usize = 1024 * 256;

/// API management service.
///
/// Serves the configuration API of the environments: the identity providers
/// the users log in with.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the config file.
    #[arg(short, long, default_value = "/etc/apim/management.conf")]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    pub verbose: u8,

    /// Print the `OpenAPI` schema instead of running the service.
    #[arg(long)]
    pub dump_openapi: Option<OpenApiFormat>,
}

#[derive(Clone, Debug, Default, PartialEq, ValueEnum)]
enum OpenApiFormat {
    /// Json.
    Json,
    #[default]
    /// Yaml.
    Yaml,
}

/// `MakeRequestId` generating a random request id.
#[derive(Clone, Default)]
struct ManagementRequestId {}

impl MakeRequestId for ManagementRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let req_id = Uuid::new_v4().simple().to_string();

        http::HeaderValue::from_str(&format!("req-{req_id}"))
            .ok()
            .map(RequestId::new)
    }
}

/// Log level selected by the `-v` occurrences, raised to `DEBUG` by the
/// `[DEFAULT] debug` option.
fn log_level(verbose: u8, debug: bool) -> LevelFilter {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if debug {
        level.max(LevelFilter::DEBUG)
    } else {
        level
    }
}

/// Span of the HTTP request carrying the id assigned by [`ManagementRequestId`].
fn request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default();
    info_span!(
        "apim_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id,
    )
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();

    let (router, api) = OpenApiRouter::with_openapi(api::ApiDoc::openapi())
        .merge(api::openapi_router())
        .split_for_parts();

    if let Some(dump_format) = &args.dump_openapi {
        println!(
            "{}",
            match dump_format {
                OpenApiFormat::Yaml => api.to_yaml()?,
                OpenApiFormat::Json => api.to_pretty_json()?,
            }
        );
        return Ok(());
    }

    let cfg = Config::new(args.config)?;
    let debug = cfg.default.as_ref().and_then(|x| x.debug).unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_writer(io::stderr).with_filter(
                Targets::new()
                    .with_default(log_level(args.verbose, debug))
                    .with_target("sqlx", Level::WARN),
            ),
        )
        .init();

    let conn = Database::connect(
        ConnectOptions::new(cfg.database.get_connection().expose_secret())
            // Prevent dumping the password in plaintext.
            .sqlx_logging(false)
            .to_owned(),
    )
    .await
    .wrap_err("Database connection failed")?;

    let provider = Provider::new(cfg.clone())?;
    let listen = cfg.api.listen.clone();
    let shared_state = Arc::new(Service::new(cfg, conn, provider));

    let x_request_id = HeaderName::from_static("x-request-id");
    let sensitive_headers: Arc<[_]> = vec![
        header::AUTHORIZATION,
        header::COOKIE,
        header::SET_COOKIE,
    ]
    .into();

    let middleware = ServiceBuilder::new()
        // request ids are set before the request reaches `TraceLayer`
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            ManagementRequestId::default(),
        ))
        .sensitive_request_headers(sensitive_headers.clone())
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| request_span(request))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .compression()
        .sensitive_response_headers(sensitive_headers)
        .layer(PropagateRequestIdLayer::new(x_request_id));

    let app = router
        .layer(middleware)
        .with_state(shared_state.clone());

    let listener = TcpListener::bind(&listen)
        .await
        .wrap_err_with(|| format!("Failed to bind {listen}"))?;
    info!(%listen, "API management service started");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal(shared_state))
        .await?;

    Ok(())
}

/// Install shutdown and interrupt signal handler
async fn shutdown_signal(state: ServiceState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .inspect_err(|e| error!("failed to install Ctrl+C handler: {e}"))
            .ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) = signal::unix::signal(signal::unix::SignalKind::terminate())
            .inspect_err(|e| error!("failed to install signal handler: {e}"))
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {state.terminate().await.ok();},
        () = terminate => {state.terminate().await.ok();},
    }
}
