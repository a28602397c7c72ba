use crate::domain::property::{Property, PropertyDetail};
use crate::templates::components::format::{format_signed_usd, format_thousands, format_usd};
use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

pub fn property_detail_page(property: &Property, detail: Option<&PropertyDetail>) -> Markup {
    site_layout(
        &property.title,
        NavItem::Properties,
        html! {
            section class="hero" {
                div class="container" {
                    p { a href="/properties" { "← Back to Properties" } }
                    h1 { (property.title) }
                    p { (property.address) }
                    p { "Current Price" br; strong { (format_usd(property.price)) } }
                }
            }

            section class="section" {
                div class="container" {
                    (gallery(property, detail))
                }
            }

            section class="section" {
                div class="container detail-grid" {
                    div {
                        @if let Some(detail) = detail {
                            h2 { "Property Overview" }
                            p { (detail.description) }
                        }

                        h2 { "Property Details" }
                        div class="facts-grid" {
                            (fact("Bedrooms", property.bedrooms.to_string()))
                            (fact("Bathrooms", property.bathrooms.to_string()))
                            (fact("Sqft", format_thousands(u64::from(property.sqft))))
                            (fact("Property Type", property.property_type.label().to_string()))
                            (fact("Status", property.status.clone()))
                            @if let Some(detail) = detail {
                                (fact("Lot Size", detail.lot_size.clone()))
                                (fact("Year Built", detail.year_built.to_string()))
                            }
                        }

                        @if let Some(detail) = detail {
                            h2 { "Renovation Plan" }
                            ul {
                                @for item in &detail.renovation_plan {
                                    li { "✓ " (item) }
                                }
                            }

                            h2 { "Neighborhood" }
                            div class="facts-grid" {
                                (fact("School Rating", detail.neighborhood.school_rating.clone()))
                                (fact("Crime Rate", detail.neighborhood.crime_rate.clone()))
                                (fact("Walk Score", detail.neighborhood.walk_score.to_string()))
                                (fact("Median Home Value", format_usd(detail.neighborhood.median_home_value)))
                                (fact("Market Trend", detail.neighborhood.market_trend.clone()))
                            }
                        } @else {
                            p class="facts" { "A full renovation plan for this property is coming soon." }
                        }
                    }

                    aside class="analysis" {
                        h3 { "Investment Analysis" }
                        (analysis_row("Current Price", format_usd(property.price)))
                        @if let Some(detail) = detail {
                            (analysis_row("Estimated Repair Cost", format_usd(detail.estimated_repair_cost)))
                        }
                        (analysis_row("After Repair Value", format_usd(property.after_repair_value)))
                        @if let Some(detail) = detail {
                            (analysis_row("Potential Profit", format_signed_usd(detail.potential_profit(property))))
                        }
                        (analysis_row("Estimated ROI", format!("{}%", property.estimated_roi)))
                        a href="/contact" class="btn block" { "Ask About This Property" }
                    }
                }
            }
        },
    )
}

fn gallery(property: &Property, detail: Option<&PropertyDetail>) -> Markup {
    let images: Vec<&str> = match detail {
        Some(d) if !d.images.is_empty() => d.images.iter().map(String::as_str).collect(),
        _ => vec![property.image.as_str()],
    };

    html! {
        div class="grid" {
            @for (i, src) in images.iter().enumerate() {
                @if i == 0 {
                    img src=(src) alt="Main Property View";
                } @else {
                    img src=(src) alt=(format!("Property View {}", i + 1));
                }
            }
        }
    }
}

fn fact(name: &str, value: String) -> Markup {
    html! {
        div class="fact" {
            p class="name" { (name) }
            p class="val" { (value) }
        }
    }
}

fn analysis_row(name: &str, value: String) -> Markup {
    html! {
        div class="row" {
            span { (name) }
            strong { (value) }
        }
    }
}
