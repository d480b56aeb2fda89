//! `stockwatch serve`: the HTML dashboard.
//!
//! `tiny_http` blocks on `incoming_requests`, so the accept loop runs under
//! `spawn_blocking` and drives each pipeline run to completion with the
//! runtime handle. Requests are served one at a time.

use std::sync::Arc;

use sw_catalog::query::DEFAULT_PROBE_LIMIT;
use sw_catalog::{CatalogSource, ReconcileError, Reconciler};
use sw_core::{AlertPage, CategoryRegistry};
use tokio::runtime::Handle;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::output::html;

/// A fully rendered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    const fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }
}

/// Handle `stockwatch serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| ctx.config.server.bind.clone());

    let server = tiny_http::Server::http(bind.as_str())
        .map_err(|error| anyhow::anyhow!("failed to bind {bind}: {error}"))?;

    tracing::info!(%bind, "dashboard listening");
    eprintln!("Stockwatch dashboard on http://{bind}/");

    let reconciler = Arc::clone(&ctx.reconciler);
    let handle = Handle::current();
    tokio::task::spawn_blocking(move || serve_forever(&server, reconciler.as_ref(), &handle)).await?;
    Ok(())
}

fn serve_forever<S: CatalogSource>(server: &tiny_http::Server, reconciler: &Reconciler<S>, handle: &Handle) {
    for request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();

        let reply = handle.block_on(route(&method, &url, reconciler));
        tracing::debug!(%method, %url, status = reply.status, "served request");

        let mut response = tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = tiny_http::Header::from_bytes("Content-Type", reply.content_type) {
            response = response.with_header(header);
        }
        if let Err(error) = request.respond(response) {
            tracing::warn!(%error, %url, "failed to write response");
        }
    }
}

/// Map one request to a reply.
///
/// `GET /` is the urgent page, `GET /testall` the probe, `GET /healthz` a
/// liveness check and `GET /<slug>` a category page. The query string is
/// ignored.
pub async fn route<S: CatalogSource>(method: &str, url: &str, reconciler: &Reconciler<S>) -> Reply {
    if method != "GET" {
        return Reply::text(405, "method not allowed");
    }

    let path = url.split(['?', '#']).next().unwrap_or("/");
    let registry = reconciler.registry();

    match path {
        "/" => page_reply(reconciler.urgent().await, "", registry),
        "/testall" => {
            let page = reconciler.probe(DEFAULT_PROBE_LIMIT).await;
            Reply::html(200, html::probe_page(&page, registry))
        }
        "/healthz" => Reply::text(200, "ok"),
        _ => {
            let raw = path.trim_start_matches('/');
            let slug = match urlencoding::decode(raw) {
                Ok(slug) if !slug.contains('/') => slug.into_owned(),
                _ => return Reply::html(404, html::not_found(raw, registry)),
            };
            page_reply(reconciler.category(&slug).await, &slug, registry)
        }
    }
}

fn page_reply(
    result: Result<AlertPage, ReconcileError>,
    slug: &str,
    registry: &CategoryRegistry,
) -> Reply {
    match result {
        Ok(page) => Reply::html(200, html::alert_page(&page, registry)),
        Err(error) if error.is_not_found() => Reply::html(404, html::not_found(slug, registry)),
        Err(error) => {
            tracing::error!(%error, slug, "could not build page");
            Reply::html(500, html::server_error(registry))
        }
    }
}
