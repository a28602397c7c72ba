// Filter and pagination controls for the properties page.

use crate::domain::listing::{
    page_numbers, FilterCriteria, ListingView, MinBedrooms, PriceRange, SortBy, TypeFilter,
    MAX_VISIBLE_PAGES,
};
use maud::{html, Markup};

/// GET form with one select per criterion. Submitting always lands on page 1.
pub fn filter_bar(criteria: &FilterCriteria) -> Markup {
    html! {
        section class="filters" {
            div class="container" {
                form method="get" action="/properties" {
                    div {
                        label for="price" { "Price Range:" }
                        select name="price" id="price" onchange="this.form.submit()" {
                            @for range in PriceRange::ALL {
                                option value=(range.param()) selected[range == criteria.price_range] { (range.label()) }
                            }
                        }
                    }
                    div {
                        label for="type" { "Property Type:" }
                        select name="type" id="type" onchange="this.form.submit()" {
                            @for t in TypeFilter::all() {
                                option value=(t.param()) selected[t == criteria.property_type] { (t.label()) }
                            }
                        }
                    }
                    div {
                        label for="beds" { "Bedrooms:" }
                        select name="beds" id="beds" onchange="this.form.submit()" {
                            @for beds in MinBedrooms::ALL {
                                option value=(beds.param()) selected[beds == criteria.min_bedrooms] { (beds.label()) }
                            }
                        }
                    }
                    div {
                        label for="sort" { "Sort By:" }
                        select name="sort" id="sort" onchange="this.form.submit()" {
                            @for sort in SortBy::ALL {
                                option value=(sort.param()) selected[sort == criteria.sort_by] { (sort.label()) }
                            }
                        }
                    }
                    noscript { button type="submit" class="btn" { "Apply" } }
                }
            }
        }
    }
}

fn page_href(criteria: &FilterCriteria, page: usize) -> String {
    format!("/properties?{}", criteria.query_for_page(page))
}

pub fn pagination(view: &ListingView<'_>, criteria: &FilterCriteria) -> Markup {
    html! {
        nav class="pagination" aria-label="Pagination" {
            @if view.has_previous() {
                a href=(page_href(criteria, view.page - 1)) rel="prev" { "Previous" }
            } @else {
                span class="disabled" { "Previous" }
            }

            @for n in page_numbers(view.page, view.total_pages, MAX_VISIBLE_PAGES) {
                @if n == view.page {
                    span class="current" aria-current="page" { (n) }
                } @else {
                    a href=(page_href(criteria, n)) { (n) }
                }
            }

            @if view.has_next() {
                a href=(page_href(criteria, view.page + 1)) rel="next" { "Next" }
            } @else {
                span class="disabled" { "Next" }
            }
        }
        p class="showing" {
            @match view.showing_range() {
                Some((first, last)) => {
                    "Showing " (first) " to " (last) " of " (view.total_count) " properties"
                }
                None => { "No properties match these filters." }
            }
        }
    }
}
