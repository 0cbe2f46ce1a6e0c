pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod parsing;
pub mod services;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
