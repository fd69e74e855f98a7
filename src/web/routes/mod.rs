pub mod root;
pub mod schools;
