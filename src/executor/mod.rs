pub mod install;
pub mod resolve;
pub mod status;

pub use install::*;
pub use resolve::*;
pub use status::*;
