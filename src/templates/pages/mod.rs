pub mod about;
pub mod contact;
pub mod education;
pub mod error;
pub mod home;
pub mod properties;
pub mod property_detail;
pub mod success_stories;

pub use about::about_page;
pub use contact::{contact_page, ContactFormState};
pub use education::education_page;
pub use error::error_page;
pub use home::home_page;
pub use properties::properties_page;
pub use property_detail::property_detail_page;
pub use success_stories::success_stories_page;
