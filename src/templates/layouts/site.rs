use maud::{html, Markup, DOCTYPE};

/// Top-level sections linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Properties,
    SuccessStories,
    Education,
    Contact,
    /// Pages that don't highlight any link, e.g. errors.
    None,
}

const NAV_LINKS: [(NavItem, &str, &str); 6] = [
    (NavItem::Home, "/", "Home"),
    (NavItem::About, "/about", "About Us"),
    (NavItem::Properties, "/properties", "Properties"),
    (NavItem::SuccessStories, "/success-stories", "Success Stories"),
    (NavItem::Education, "/education", "Education"),
    (NavItem::Contact, "/contact", "Contact"),
];

pub fn site_layout(title: &str, active: NavItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | FixFlip" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    div class="container" {
                        a href="/" class="brand" { "FIXFLIP" }
                        nav class="site-nav" {
                            ul {
                                @for (item, href, label) in NAV_LINKS {
                                    li {
                                        a href=(href) class=[(item == active).then_some("active")] { (label) }
                                    }
                                }
                            }
                        }
                        a href="/contact" class="btn" { "Get Started" }
                    }
                }
                main { (content) }
                footer class="site-footer" {
                    div class="container" {
                        p { "© FixFlip. Transforming houses into dream homes." }
                    }
                }
            }
        }
    }
}
