use crate::domain::property::Property;
use crate::templates::components::format::{format_thousands, format_usd};
use maud::{html, Markup};

pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="card property-card" {
            div class="photo" {
                img src=(property.image) alt=(property.title);
                span class="badge" { (property.status) }
            }
            div class="card-body" {
                h3 { (property.title) }
                p class="facts" {
                    (property.bedrooms) " bed • " (property.bathrooms) " bath • "
                    (format_thousands(u64::from(property.sqft))) " sqft"
                }
                div class="prices" {
                    div {
                        p class="facts" { "Current Price" }
                        p class="value" { (format_usd(property.price)) }
                    }
                    div {
                        p class="facts" { "After Repair Value" }
                        p class="value arv" { (format_usd(property.after_repair_value)) }
                    }
                }
                p class="facts" { (property.address) }
                p class="facts" { "Estimated ROI: " (property.estimated_roi) "%" }
                a class="btn block" href=(format!("/properties/{}", property.id)) { "View Details" }
            }
        }
    }
}
