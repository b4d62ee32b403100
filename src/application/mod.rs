pub mod builder;
pub mod cache;
pub mod cleanup;
pub mod dto;
pub mod errors;
pub mod labels;
pub mod ports;
pub mod use_cases;
pub mod validation;
