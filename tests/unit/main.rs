mod application;
mod support;
mod utils;
