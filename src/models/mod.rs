pub mod schools;

pub use schools::{RankedSchool, SchoolRow};
