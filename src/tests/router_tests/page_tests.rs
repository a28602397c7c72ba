// src/tests/router_tests/page_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::tests::utils::{body_string, card_ids, get, seed_catalog};

#[test]
fn home_page_shows_featured_properties() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("Featured Flip Opportunities"));
    assert_eq!(card_ids(&body), vec![1, 2, 4]);
}

#[test]
fn static_pages_render() {
    let catalog = seed_catalog();
    let pages = [
        ("/about", "Our Story"),
        ("/education", "Featured Courses"),
        ("/success-stories", "Tips from Successful Flippers"),
        ("/contact", "Send Us a Message"),
    ];

    for (uri, marker) in pages {
        let mut resp = get(&catalog, uri).unwrap();
        assert_eq!(resp.status(), 200, "{uri}");
        assert!(body_string(&mut resp).contains(marker), "{uri} missing {marker}");
    }
}

#[test]
fn nav_highlights_current_section() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/about").unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains(r#"<a href="/about" class="active">About Us</a>"#));
}

#[test]
fn stylesheet_is_served() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/static/main.css").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(&mut resp).contains(".property-card"));
}

#[test]
fn unknown_path_is_not_found() {
    let catalog = seed_catalog();
    assert!(matches!(
        get(&catalog, "/admin"),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn errors_render_as_html_pages_with_status() {
    let mut resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));

    let mut resp = error_to_response(ServerError::BadRequest("Bad form".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("Bad form"));

    let mut resp = error_to_response(ServerError::InternalError);
    assert_eq!(resp.status(), 500);
    let body = body_string(&mut resp);
    assert!(body.contains("Something went wrong on our side."));
    assert!(!body.contains("Internal Server Error"));
}
