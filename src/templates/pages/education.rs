use crate::templates::components::hero;
use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

struct Course {
    title: &'static str,
    description: &'static str,
    lessons: u32,
    duration: &'static str,
    level: &'static str,
}

const COURSES: [Course; 3] = [
    Course {
        title: "Flipping Fundamentals",
        description: "Learn the basics of house flipping, from property selection to final sale.",
        lessons: 12,
        duration: "6 hours",
        level: "Beginner",
    },
    Course {
        title: "Advanced Renovation Strategies",
        description: "Master advanced renovation techniques and maximize your property's value.",
        lessons: 15,
        duration: "8 hours",
        level: "Advanced",
    },
    Course {
        title: "Market Analysis Mastery",
        description: "Develop skills to analyze markets and identify profitable opportunities.",
        lessons: 10,
        duration: "5 hours",
        level: "Intermediate",
    },
];

const RESOURCES: [(&str, &str, &str); 4] = [
    (
        "📋",
        "Property Evaluation Checklist",
        "A comprehensive checklist for evaluating potential flip properties.",
    ),
    (
        "🧮",
        "Renovation Cost Calculator",
        "Estimate renovation costs accurately with our detailed calculator.",
    ),
    (
        "👷",
        "Contractor Interview Guide",
        "Key questions to ask when hiring contractors for your flip.",
    ),
    (
        "📊",
        "Market Research Template",
        "Template for analyzing local real estate markets and trends.",
    ),
];

// (title, expert, date, time)
const WORKSHOPS: [(&str, &str, &str, &str); 2] = [
    (
        "Finding Hidden Gems in Competitive Markets",
        "Michael Roberts",
        "Jan 15, 2024",
        "2:00 PM EST",
    ),
    (
        "Renovation Budgeting Masterclass",
        "Sarah Thompson",
        "Jan 22, 2024",
        "3:00 PM EST",
    ),
];

pub fn education_page() -> Markup {
    site_layout(
        "Education",
        NavItem::Education,
        html! {
            (hero(
                "Learn to Flip",
                "Master the art of house flipping with our comprehensive educational resources, expert guidance, and practical tips.",
            ))

            section class="section" {
                div class="container" {
                    h2 { "Featured Courses" }
                    div class="grid" {
                        @for (i, course) in COURSES.iter().enumerate() {
                            div class="card" {
                                img src=(format!("/images/{}.jpg", i + 1)) alt=(course.title);
                                div class="card-body" {
                                    span class="facts" { (course.level) }
                                    h3 { (course.title) }
                                    p class="facts" { (course.description) }
                                    p { (course.lessons) " lessons • " (course.duration) }
                                    a href="/contact" class="btn block" { "Start Learning" }
                                }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Free Resources" }
                    div class="grid" {
                        @for (icon, title, description) in RESOURCES {
                            div class="card" {
                                div class="card-body" {
                                    p { (icon) }
                                    h3 { (title) }
                                    p class="facts" { (description) }
                                    a href="/contact" { "Download Now →" }
                                }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    h2 { "Upcoming Expert Workshops" }
                    div class="grid" {
                        @for (title, expert, date, time) in WORKSHOPS {
                            div class="card" {
                                div class="card-body" {
                                    h3 { (title) }
                                    p { "with " (expert) }
                                    p class="facts" { (date) " • " (time) }
                                    a href="/contact" class="btn" { "Register Now" }
                                }
                            }
                        }
                    }
                }
            }

            section class="cta" {
                div class="container" {
                    h2 { "Start Your Learning Journey Today" }
                    p { "Get access to all our premium courses and resources" }
                    a href="/contact" class="btn" { "Join Premium" }
                }
            }
        },
    )
}
