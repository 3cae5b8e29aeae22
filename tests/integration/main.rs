mod admin_tests;
mod client_tests;
