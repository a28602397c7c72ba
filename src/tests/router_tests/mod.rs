mod contact_tests;
mod page_tests;
mod properties_tests;
