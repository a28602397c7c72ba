pub mod contact;
pub mod listing;
pub mod property;
