use crate::domain::listing::{FilterCriteria, ListingView};
use crate::templates::components::{filter_bar, hero, pagination, property_card};
use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

pub fn properties_page(view: &ListingView<'_>, criteria: &FilterCriteria) -> Markup {
    site_layout(
        "Properties",
        NavItem::Properties,
        html! {
            (hero(
                "Available Properties",
                "Browse our curated selection of high-potential properties ready for transformation.",
            ))

            (filter_bar(criteria))

            section class="section" {
                div class="container" {
                    div class="grid" id="property-grid" {
                        @for property in &view.page_items {
                            (property_card(property))
                        }
                    }
                    (pagination(view, criteria))
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "Not Finding What You're Looking For?" }
                    p {
                        "Let us know your criteria and we'll notify you when matching "
                        "properties become available."
                    }
                    a href="/contact" class="btn" { "Set Property Alerts" }
                }
            }
        },
    )
}
