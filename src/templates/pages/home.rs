// templates/pages/home.rs

use crate::domain::property::Property;
use crate::templates::{components::property_card, site_layout, NavItem};
use maud::{html, Markup};

pub fn home_page(featured: &[&Property]) -> Markup {
    site_layout(
        "Home",
        NavItem::Home,
        html! {
            section class="hero" {
                div class="container" {
                    h1 { "Transform Houses " br; "Into Dream Homes " br; "With Us." }
                    p {
                        "Join successful house flippers earning 25-40% ROI per project. "
                        "Start your real estate flipping journey today."
                    }
                    a href="/properties" class="btn" { "Browse Properties" }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Expert Guidance, Every Step" }
                    p {
                        "Get expert guidance on property selection, renovation planning, "
                        "and market analysis for maximum profits."
                    }
                    p class="facts" { "500+ successful flips completed by our community" }
                    p {
                        "See how our investors transformed a $200K property into a "
                        "$350K dream home in just 4 months."
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Featured Flip Opportunities" }
                    p class="facts" { "Discover high-potential properties ready for transformation" }
                    @if featured.is_empty() {
                        p { "New opportunities are on the way. Check back soon." }
                    } @else {
                        div class="grid" {
                            @for property in featured {
                                (property_card(property))
                            }
                        }
                    }
                    p { a href="/properties" { "View all properties →" } }
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "Ready to Start Flipping?" }
                    p { "Talk to our team about your first (or next) project." }
                    a href="/contact" class="btn" { "Contact Us" }
                }
            }
        },
    )
}
