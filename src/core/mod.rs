pub mod calculators;
pub mod datetime;
pub mod exceptions;
pub mod objects;
pub mod runner;
pub mod square;

pub use crate::domain::ports::{value_or_prompt, Console, Drill};
pub use crate::utils::error::Result;
