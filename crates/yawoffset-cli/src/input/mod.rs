pub mod parser;

pub use parser::{ImuParser, VelocityParser};
