use maud::{html, Markup};

pub mod format;
pub mod listing;
pub mod property_card;

pub use format::format_usd;
pub use listing::{filter_bar, pagination};
pub use property_card::property_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            div class="card-body" {
                h3 { (title) }
                (body)
            }
        }
    }
}

/// Dark banner at the top of most pages.
pub fn hero(title: &str, tagline: &str) -> Markup {
    html! {
        section class="hero" {
            div class="container" {
                h1 { (title) }
                p { (tagline) }
            }
        }
    }
}
