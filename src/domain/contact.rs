// src/domain/contact.rs

pub const SUBJECTS: [&str; 4] = [
    "General Inquiry",
    "Property Question",
    "Investment Opportunity",
    "Partnership Request",
];

const DEFAULT_SUBJECT: &str = SUBJECTS[0];

/// What the visitor typed into the contact form, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: &'static str,
    pub message: String,
}

impl Default for ContactInquiry {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: None,
            subject: DEFAULT_SUBJECT,
            message: String::new(),
        }
    }
}

impl ContactInquiry {
    /// Builds an inquiry from urlencoded form pairs. Unknown keys are ignored.
    pub fn from_form<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut inquiry = Self::default();
        for (key, value) in pairs {
            let value = value.trim();
            match key {
                "name" => inquiry.name = value.to_string(),
                "email" => inquiry.email = value.to_string(),
                "phone" => {
                    inquiry.phone = Some(value.to_string()).filter(|v| !v.is_empty())
                }
                "subject" => {
                    inquiry.subject = SUBJECTS
                        .into_iter()
                        .find(|s| *s == value)
                        .unwrap_or(DEFAULT_SUBJECT)
                }
                "message" => inquiry.message = value.to_string(),
                _ => {}
            }
        }
        inquiry
    }

    /// Returns the problems with this inquiry; empty means it can be accepted.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.name.is_empty() {
            problems.push("Please tell us your name.");
        }
        if !looks_like_email(&self.email) {
            problems.push("Please enter a valid email address.");
        }
        if self.message.is_empty() {
            problems.push("Please include a message.");
        }
        problems
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
