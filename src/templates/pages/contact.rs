use crate::domain::contact::{ContactInquiry, SUBJECTS};
use crate::templates::components::hero;
use crate::templates::{site_layout, NavItem};
use maud::{html, Markup};

/// Where the visitor is in the contact flow.
#[derive(Debug, Clone)]
pub enum ContactFormState {
    Blank,
    Invalid {
        inquiry: ContactInquiry,
        problems: Vec<&'static str>,
    },
    Sent {
        name: String,
    },
}

pub fn contact_page(state: &ContactFormState) -> Markup {
    let blank = ContactInquiry::default();
    let values = match state {
        ContactFormState::Invalid { inquiry, .. } => inquiry,
        _ => &blank,
    };

    site_layout(
        "Contact",
        NavItem::Contact,
        html! {
            (hero(
                "Contact Us",
                "Have questions about a property or interested in working with us? We're here to help you with your fix and flip journey.",
            ))

            section class="section" {
                div class="container grid" {
                    div class="card" {
                        div class="card-body" {
                            h3 { "Phone" }
                            p { "+1 (555) 123-4567" }
                            p class="facts" { "Mon-Fri: 9AM-6PM EST" }
                        }
                    }
                    div class="card" {
                        div class="card-body" {
                            h3 { "Email" }
                            p { "info@fixflip.com" }
                            p { "support@fixflip.com" }
                        }
                    }
                    div class="card" {
                        div class="card-body" {
                            h3 { "Office" }
                            p { "123 Flip Street" }
                            p class="facts" { "Columbus, OH" }
                        }
                    }
                }
            }

            section class="section" id="inquiry" {
                div class="container" {
                    h2 { "Send Us a Message" }

                    @match state {
                        ContactFormState::Sent { name } => {
                            p class="form-success" {
                                "Thanks, " (name) "! We received your message and will get back to you within one business day."
                            }
                        }
                        ContactFormState::Invalid { problems, .. } => {
                            ul class="form-errors" {
                                @for problem in problems {
                                    li { (problem) }
                                }
                            }
                        }
                        ContactFormState::Blank => {}
                    }

                    form class="contact-form" method="post" action="/contact#inquiry" {
                        label for="name" { "Full Name" }
                        input type="text" id="name" name="name" value=(values.name) placeholder="John Doe" required;

                        label for="email" { "Email" }
                        input type="email" id="email" name="email" value=(values.email) placeholder="john@example.com" required;

                        label for="phone" { "Phone" }
                        input type="tel" id="phone" name="phone" value=(values.phone.as_deref().unwrap_or_default()) placeholder="(555) 123-4567";

                        label for="subject" { "Subject" }
                        select id="subject" name="subject" {
                            @for subject in SUBJECTS {
                                option selected[subject == values.subject] { (subject) }
                            }
                        }

                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" required { (values.message) }

                        button type="submit" class="btn" { "Send Message" }
                    }
                }
            }
        },
    )
}
