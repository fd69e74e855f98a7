pub mod geo;
pub mod school_service;
pub mod validation;
