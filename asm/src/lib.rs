pub mod assemble;
pub mod encode;
pub mod error;
pub mod parser;
pub mod pass;
pub mod symbol;
pub mod util;

pub use assemble::{assemble, Config, Output};
pub use error::Error;
