// src/tests/router_tests/properties_tests.rs

use crate::errors::ServerError;
use crate::tests::utils::{body_string, card_ids, get, seed_catalog};

#[test]
fn listing_defaults_to_roi_order_first_page() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert_eq!(card_ids(&body), vec![15, 8, 2, 1, 12, 6]);
    assert!(body.contains("Showing 1 to 6 of 16 properties"));
    assert!(body.contains("Available Properties"));
}

#[test]
fn listing_second_page_continues_the_sequence() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?page=2").unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_ids(&body), vec![11, 5, 9, 3, 14, 4]);
    assert!(body.contains("Showing 7 to 12 of 16 properties"));
}

#[test]
fn listing_applies_price_filter_from_query() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?price=200k-300k").unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_ids(&body), vec![12, 5, 3, 16, 10]);
    assert!(body.contains("Showing 1 to 5 of 5 properties"));
}

#[test]
fn listing_combines_type_filter_and_price_sort() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?type=townhouse&sort=price-asc").unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_ids(&body), vec![14, 4, 10]);
}

#[test]
fn listing_bedroom_filter_keeps_filters_in_pagination_links() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?beds=4&sort=price-desc").unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_ids(&body), vec![7, 13, 6, 12, 3, 11]);
    assert!(body.contains("Showing 1 to 6 of 7 properties"));
    assert!(body.contains("/properties?price=any&amp;type=all&amp;beds=4&amp;sort=price-desc&amp;page=2"));
}

#[test]
fn listing_marks_selected_filters() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?sort=recent").unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains(r#"<option value="recent" selected>Recently Added</option>"#));
    assert_eq!(card_ids(&body), vec![13, 9, 5, 12, 3, 8]);
}

#[test]
fn listing_clamps_page_past_the_end() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?page=9").unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_ids(&body), vec![7, 16, 10, 13]);
    assert!(body.contains("Showing 13 to 16 of 16 properties"));
}

#[test]
fn listing_clamps_page_zero_to_first() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?page=0").unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_ids(&body), vec![15, 8, 2, 1, 12, 6]);
}

#[test]
fn listing_with_no_matches_says_so() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?price=100k-200k&type=townhouse&beds=4").unwrap();
    let body = body_string(&mut resp);

    assert!(card_ids(&body).is_empty());
    assert!(body.contains("No properties match these filters."));
}

#[test]
fn unknown_filter_values_are_ignored() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties?price=free&sort=best").unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(card_ids(&body_string(&mut resp)), vec![15, 8, 2, 1, 12, 6]);
}

#[test]
fn detail_page_shows_investment_analysis() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties/1").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Vintage Charm Revival"));
    assert!(body.contains("$180,000"));
    assert!(body.contains("$45,000"));
    assert!(body.contains("$55,000"));
    assert!(body.contains("Complete kitchen remodel with modern appliances"));
    assert!(body.contains("Appreciating"));
}

#[test]
fn detail_page_without_detail_record_still_renders() {
    let catalog = seed_catalog();
    let mut resp = get(&catalog, "/properties/13").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Colonial Two-Story"));
    assert!(body.contains("coming soon"));
}

#[test]
fn detail_page_unknown_or_bad_id_is_not_found() {
    let catalog = seed_catalog();
    for uri in ["/properties/999", "/properties/abc", "/properties/", "/properties/-1"] {
        let result = get(&catalog, uri);
        assert!(
            matches!(result, Err(ServerError::NotFound)),
            "{uri} should be not found"
        );
    }
}
