mod builder;
mod options;

pub use builder::*;
pub use options::*;
