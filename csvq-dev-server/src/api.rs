use std::collections::BTreeMap;

use actix_cors::Cors;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use csvq_router::{RouteAction, Router};

use crate::alias::apply_alias;
use crate::browser::open_browser;
use crate::proxy::{forward_url, strip_prefix, ProxyRule};
use crate::state::ApiState;
use crate::views::render_view;

pub struct DevServerConfig {
    pub port: u16,
    pub open: bool,
    pub router: Router,
    pub proxy_rules: Vec<ProxyRule>,
    pub aliases: BTreeMap<String, String>,
}

pub async fn run_server(config: DevServerConfig) {
    let state = ApiState::new(config.router, config.proxy_rules, config.aliases);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .default_service(web::route().to(dispatch))
    })
    .bind(("127.0.0.1", config.port))
    .unwrap()
    .run();

    // The socket is listening once bind succeeds; only then is the
    // address announced and a browser tab pointed at it.
    let url = format!("http://127.0.0.1:{}", config.port);
    log::info!("dev server listening on {}", url);
    if config.open {
        open_browser(&url);
    }

    server.await.unwrap();
}

/// Single entry point: proxy rules first, then source-alias lookups,
/// then the route table. Anything left over is a 404; the route table
/// has no catch-all.
async fn dispatch(req: HttpRequest, body: web::Bytes, state: web::Data<ApiState>) -> HttpResponse {
    let path = req.path().to_string();

    for rule in &state.proxy_rules {
        if let Some(rest) = strip_prefix(&path, &rule.prefix) {
            return forward(&req, body, &state, rule, &rest).await;
        }
    }

    if req.method() != actix_web::http::Method::GET {
        return HttpResponse::NotFound().finish();
    }

    if let Some(file_path) = apply_alias(path.trim_start_matches('/'), &state.aliases) {
        return match std::fs::read(&file_path) {
            Ok(bytes) => HttpResponse::Ok()
                .content_type(content_type_for(&path))
                .body(bytes),
            Err(_) => HttpResponse::NotFound().finish(),
        };
    }

    match state.router.action(&path) {
        Some(RouteAction::Redirect(to)) => HttpResponse::Found()
            .insert_header(("Location", to.as_str()))
            .finish(),
        Some(RouteAction::Render(view)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_view(*view)),
        None => HttpResponse::NotFound().finish(),
    }
}

async fn forward(
    req: &HttpRequest,
    body: web::Bytes,
    state: &ApiState,
    rule: &ProxyRule,
    stripped_path: &str,
) -> HttpResponse {
    let url = forward_url(rule, stripped_path, req.query_string());
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes()).unwrap();

    let mut upstream = state.http.request(method, &url).body(body.to_vec());
    if let Some(content_type) = req.headers().get(CONTENT_TYPE) {
        if let Ok(content_type) = content_type.to_str() {
            upstream = upstream.header(reqwest::header::CONTENT_TYPE, content_type);
        }
    }

    let res = match upstream.send().await {
        Ok(res) => res,
        Err(e) => {
            log::warn!("proxy request to {} failed: {}", url, e);
            return HttpResponse::BadGateway().finish();
        }
    };

    let status = StatusCode::from_u16(res.status().as_u16()).unwrap();
    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let bytes = match res.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("proxy response from {} failed: {}", url, e);
            return HttpResponse::BadGateway().finish();
        }
    };

    let mut builder = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        builder.content_type(content_type);
    }
    builder.body(bytes.to_vec())
}

fn content_type_for(path: &str) -> &'static str {
    if path.ends_with(".js") {
        "text/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".html") {
        "text/html; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}
