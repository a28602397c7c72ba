// src/tests/router_tests/contact_tests.rs

use crate::errors::ServerError;
use crate::router::MAX_FORM_BYTES;
use crate::tests::utils::{body_string, post_form, seed_catalog};

const FORM_PREFIX: &str = "name=Jane&email=jane%40example.com&subject=General+Inquiry&message=";

/// A valid form padded with message text to exactly `len` bytes.
fn form_of_len(len: usize) -> String {
    format!("{FORM_PREFIX}{}", "a".repeat(len - FORM_PREFIX.len()))
}

#[test]
fn valid_inquiry_is_acknowledged() {
    let catalog = seed_catalog();
    let mut resp = post_form(
        &catalog,
        "/contact",
        "name=Jane+Doe&email=jane%40example.com&phone=&subject=Property+Question&message=Is+the+duplex+still+available%3F",
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Thanks, Jane Doe!"));
    assert!(!body.contains("form-errors"));
}

#[test]
fn invalid_inquiry_re_renders_form_with_values() {
    let catalog = seed_catalog();
    let mut resp = post_form(
        &catalog,
        "/contact",
        "name=Jane&email=not-an-email&subject=Partnership+Request&message=",
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(&mut resp);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("Please include a message."));
    assert!(!body.contains("Please tell us your name."));
    assert!(body.contains(r#"value="Jane""#));
    assert!(body.contains("<option selected>Partnership Request</option>"));
}

#[test]
fn empty_post_reports_every_field() {
    let catalog = seed_catalog();
    let mut resp = post_form(&catalog, "/contact", "").unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(&mut resp);
    assert!(body.contains("Please tell us your name."));
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("Please include a message."));
}

#[test]
fn oversized_form_is_rejected() {
    let catalog = seed_catalog();
    let form = form_of_len(20 * 1024);
    let result = post_form(&catalog, "/contact", &form);
    assert!(matches!(result, Err(ServerError::BadRequest(ref msg)) if msg == "Form too large"));

    // Fields after the limit must not be silently dropped either.
    let form = format!("junk={}&email=j%40x.com", "a".repeat(17 * 1024));
    let result = post_form(&catalog, "/contact", &form);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn form_at_the_limit_is_accepted() {
    let catalog = seed_catalog();
    let limit = MAX_FORM_BYTES as usize;

    let mut resp = post_form(&catalog, "/contact", &form_of_len(limit)).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Thanks, Jane!"));

    let result = post_form(&catalog, "/contact", &form_of_len(limit + 1));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
