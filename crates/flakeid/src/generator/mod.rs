mod global;
mod snowflake;

pub use global::*;
pub use snowflake::*;
