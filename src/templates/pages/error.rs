use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

/// Error page shown for any failed request.
pub fn error_page(status: u16, message: &str) -> Markup {
    site_layout(
        &format!("Error {status}"),
        NavItem::None,
        html! {
            section class="section" {
                div class="container" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        },
    )
}
