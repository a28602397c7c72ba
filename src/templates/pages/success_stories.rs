use crate::templates::components::{format_usd, hero};
use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

const STATS: [(&str, &str); 4] = [
    ("350+", "Successful Flips"),
    ("$50M+", "Total Property Value"),
    ("35%", "Average ROI"),
    ("4mo", "Average Flip Time"),
];

struct Story {
    title: &'static str,
    investor: &'static str,
    purchase_price: u64,
    sold_price: u64,
    roi: u32,
    quote: &'static str,
}

const STORIES: [Story; 3] = [
    Story {
        title: "Victorian Revival",
        investor: "Jessica T.",
        purchase_price: 180_000,
        sold_price: 280_000,
        roi: 55,
        quote: "This Victorian-style home needed significant updates, but I saw its potential. \
                With FixFlip's guidance on renovation planning and contractor selection, we \
                completed the project under budget and ahead of schedule. The property sold \
                within a week of listing!",
    },
    Story {
        title: "Duplex Turnaround",
        investor: "Marcus L.",
        purchase_price: 240_000,
        sold_price: 365_000,
        roi: 41,
        quote: "Splitting the utilities and refreshing both units turned a tired duplex into \
                the best-performing rental on the block.",
    },
    Story {
        title: "First Flip, Big Win",
        investor: "Priya S.",
        purchase_price: 120_000,
        sold_price: 195_000,
        roi: 38,
        quote: "I had never swung a hammer before. The education courses and the FixFlip \
                team walked me through every step.",
    },
];

const TIPS: [(&str, &str, &str); 3] = [
    (
        "Always get a thorough inspection before purchasing",
        "Mike R.",
        "10+ Successful Flips",
    ),
    (
        "Build strong relationships with reliable contractors",
        "Lisa M.",
        "Property Renovation Expert",
    ),
    (
        "Research the neighborhood thoroughly before investing",
        "David K.",
        "Real Estate Investor",
    ),
];

pub fn success_stories_page() -> Markup {
    site_layout(
        "Success Stories",
        NavItem::SuccessStories,
        html! {
            (hero(
                "Success Stories",
                "Real results from our community of successful house flippers. Get inspired by their journeys and learn from their experiences.",
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
                    h2 { "Featured Success Stories" }
                    @for (i, story) in STORIES.iter().enumerate() {
                        article class="card" {
                            div class="grid" {
                                div {
                                    img src=(format!("/images/{}.jpg", i + 1)) alt="Before Renovation";
                                    p { strong { "BEFORE" } " Purchase Price: " (format_usd(story.purchase_price)) }
                                }
                                div {
                                    img src=(format!("/images/{}.jpg", i + 4)) alt="After Renovation";
                                    p { strong { "AFTER" } " Sold Price: " (format_usd(story.sold_price)) }
                                }
                            }
                            div class="card-body" {
                                h3 { (story.title) }
                                p class="facts" { (story.investor) " • " (story.roi) "% ROI" }
                                blockquote { "“" (story.quote) "”" }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Tips from Successful Flippers" }
                    div class="grid" {
                        @for (tip, author, role) in TIPS {
                            div class="card" {
                                div class="card-body" {
                                    p { "“" (tip) "”" }
                                    p { strong { (author) } }
                                    p class="facts" { (role) }
                                }
                            }
                        }
                    }
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "Write Your Own Success Story" }
                    p { "Find your first project in our current listings." }
                    a href="/properties" class="btn" { "Browse Properties" }
                }
            }
        },
    )
}
