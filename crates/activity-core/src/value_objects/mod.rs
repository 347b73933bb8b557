//! Value objects - immutable types that represent domain concepts

mod snowflake;
mod window;

pub use snowflake::{Snowflake, SnowflakeParseError};
pub use window::ActivityWindow;
