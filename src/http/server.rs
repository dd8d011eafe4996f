//! HTTP server setup and route application.
//!
//! # Responsibilities
//! - Apply binding plans to an Axum Router
//! - Chain same-prefix directories so the first match wins
//! - Wire up middleware (tracing, timeouts)
//! - Bind the server to a listener

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, Response},
    response::Redirect,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::{util::BoxCloneSyncService, Service, ServiceBuilder, ServiceExt};
use tower_http::{
    services::fs::ServeFileSystemResponseBody,
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::AppConfig;
use crate::routes::{self, CacheOptions, RedirectBinding, RoutesError, StaticBinding};

/// File-serving service type used for every static binding chain.
type AssetService = BoxCloneSyncService<Request<Body>, Response<Body>, Infallible>;

/// HTTP server for versioned static resources.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &AppConfig) -> Result<Self, RoutesError> {
        let router = routes::configure(
            Router::new(),
            config,
            &config.asset_dirs,
            &config.bundles,
        )?
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(TraceLayer::new_for_http());

        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router).await
    }
}

/// Register static bindings on the router.
///
/// Bindings sharing a URL prefix are chained in plan order: each directory
/// falls back to the next on a miss, so the first directory containing a
/// requested file wins. Prefixes nested inside another prefix (the debug
/// `css` exception) take precedence through Axum's path routing.
pub fn apply_static_bindings(mut app: Router, bindings: &[StaticBinding]) -> Router {
    let mut groups: Vec<(&str, Vec<&StaticBinding>)> = Vec::new();
    for binding in bindings {
        match groups.iter_mut().find(|(prefix, _)| *prefix == binding.url_prefix) {
            Some((_, group)) => group.push(binding),
            None => groups.push((binding.url_prefix.as_str(), vec![binding])),
        }
    }

    for (prefix, group) in groups {
        tracing::debug!(prefix, dirs = group.len(), "registering static prefix");
        app = app.nest_service(prefix, fallback_chain(&group));
    }
    app
}

/// Register i18n redirect bindings on the router.
pub fn apply_redirect_bindings(mut app: Router, bindings: &[RedirectBinding]) -> Router {
    for binding in bindings {
        tracing::debug!(path = %binding.path, target = %binding.target, "registering i18n redirect");
        let target = binding.target.clone();
        app = app.route(
            &binding.path,
            get(move || async move { Redirect::temporary(&target) }),
        );
    }
    app
}

/// Build the fallback chain for one prefix group, innermost binding last.
fn fallback_chain(group: &[&StaticBinding]) -> AssetService {
    let mut chain: Option<AssetService> = None;
    for binding in group.iter().rev() {
        let service = match chain.take() {
            Some(next) => cached(binding.cache, ServeDir::new(&binding.dir).fallback(next)),
            None => cached(binding.cache, ServeDir::new(&binding.dir)),
        };
        chain = Some(service);
    }
    chain.expect("binding groups are never empty")
}

/// Wrap a file-serving service with its `Cache-Control` header and box it so
/// chains of any length share one type.
fn cached<S>(cache: CacheOptions, serve: S) -> AssetService
where
    S: Service<Request<Body>, Response = Response<ServeFileSystemResponseBody>, Error = Infallible>
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache.cache_control(),
        ))
        .service(serve)
        .map_response(|response| response.map(Body::new));

    BoxCloneSyncService::new(service)
}
