use crate::templates::components::{card, hero};
use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

const STATS: [(&str, &str); 4] = [
    ("350+", "Successful Flips"),
    ("35%", "Average ROI"),
    ("1200+", "Happy Investors"),
    ("50+", "Cities Served"),
];

const VALUES: [(&str, &str, &str); 3] = [
    (
        "🔍",
        "Transparency",
        "We believe in complete honesty about property conditions, costs, and potential returns.",
    ),
    (
        "📚",
        "Education",
        "We empower our community with knowledge and tools to make informed investment decisions.",
    ),
    (
        "🏘️",
        "Community",
        "We focus on transformations that benefit both investors and neighborhoods.",
    ),
];

const TEAM: [(&str, &str, &str); 4] = [
    ("John Smith", "Founder & CEO", "/images/4.jpg"),
    ("Sarah Johnson", "Head of Acquisitions", "/images/5.jpg"),
    ("Michael Brown", "Market Analyst", "/images/6.jpg"),
    ("Emily Davis", "Investment Advisor", "/images/7.jpg"),
];

pub fn about_page() -> Markup {
    site_layout(
        "About",
        NavItem::About,
        html! {
            (hero(
                "About FixFlip",
                "We're on a mission to make property flipping accessible, profitable, and transformative for communities across the nation.",
            ))

            section class="section" {
                div class="container stats" {
                    @for (number, label) in STATS {
                        div {
                            p class="number" { (number) }
                            p class="facts" { (label) }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Our Story" }
                    p {
                        "Founded in 2020, FixFlip emerged from a simple observation: the real estate "
                        "flipping market needed more transparency, education, and community support."
                    }
                    p {
                        "Our team of real estate professionals, market analysts, and experienced flippers "
                        "came together to create a platform that would make property flipping more "
                        "accessible while maintaining high standards of quality and profitability."
                    }
                    p {
                        "Today, we're proud to have helped hundreds of investors achieve their financial "
                        "goals while contributing to the revitalization of communities across the country."
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Our Values" }
                    div class="grid" {
                        @for (icon, title, description) in VALUES {
                            (card(title, html! {
                                p { (icon) }
                                p class="facts" { (description) }
                            }))
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Our Team" }
                    div class="grid" {
                        @for (name, role, image) in TEAM {
                            div class="card" {
                                img src=(image) alt=(name);
                                div class="card-body" {
                                    h3 { (name) }
                                    p class="facts" { (role) }
                                }
                            }
                        }
                    }
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "Join Our Community" }
                    p { "Start your flipping journey with a team that has done it hundreds of times." }
                    a href="/contact" class="btn" { "Get in Touch" }
                }
            }
        },
    )
}
