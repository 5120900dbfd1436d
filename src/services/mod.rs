//! Business logic services

pub mod constructor;
pub mod geo;
pub mod optimize;
pub mod sample_data;
pub mod validation;
pub mod workspace;
