pub mod command;

#[cfg(test)]
pub mod fake;

pub use command::*;
