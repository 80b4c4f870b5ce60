// HTTP 層：每個運算在自己的路徑上回應 GET，其餘一律交給 JSON 404

pub mod error;
pub mod handlers;

use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower::util::MapRequestLayer;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::domain::model::Operation;
use handlers::{add, divide, modulo, multiply, not_found, power, sqrt, subtract, welcome};

/// 路由前先正規化路徑的完整服務
pub type App = NormalizePath<tower::util::MapRequest<Router, fn(Request) -> Request>>;

pub fn router() -> Router {
    Operation::ALL
        .into_iter()
        .fold(
            Router::new().route("/", get(welcome).fallback(not_found)),
            |router, operation| router.route(operation.path(), operation_route(operation)),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// 路徑不分大小寫，結尾斜線忽略（`/ADD/` 等同 `/add`）
pub fn app() -> App {
    let lowercase: fn(Request) -> Request = lowercase_path;
    let service = MapRequestLayer::new(lowercase).layer(router());
    NormalizePathLayer::trim_trailing_slash().layer(service)
}

fn operation_route(operation: Operation) -> MethodRouter {
    let route = match operation {
        Operation::Addition => get(add),
        Operation::Subtraction => get(subtract),
        Operation::Multiplication => get(multiply),
        Operation::Division => get(divide),
        Operation::Exponentiation => get(power),
        Operation::SquareRoot => get(sqrt),
        Operation::Modulo => get(modulo),
    };
    route.fallback(not_found)
}

// 只改路徑，查詢字串保持原樣（例如 Infinity）
fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri().clone();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let mut path_and_query = uri.path().to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = uri.into_parts();
    match PathAndQuery::try_from(path_and_query) {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(error) => {
            tracing::debug!(%error, "Could not lowercase request path");
            return request;
        }
    }
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}
