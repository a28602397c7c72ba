use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// The real seed catalog; tests assert against its known contents.
pub fn seed_catalog() -> Catalog {
    Catalog::seed().unwrap_or_else(|e| panic!("Seed catalog failed to load: {e}"))
}

pub fn request(method: Method, uri: &str, body: Body) -> Request {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Run a GET through the router.
pub fn get(catalog: &Catalog, uri: &str) -> Result<Response, ServerError> {
    handle(request(Method::GET, uri, Body::empty()), catalog)
}

/// Run a urlencoded form POST through the router.
pub fn post_form(catalog: &Catalog, uri: &str, form: &str) -> Result<Response, ServerError> {
    let mut req = request(Method::POST, uri, Body::from(form.to_string()));
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    handle(req, catalog)
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Ids linked from property cards, in page order.
pub fn card_ids(html: &str) -> Vec<u32> {
    html.split("href=\"/properties/")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter_map(|id| id.parse().ok())
        .collect()
}
