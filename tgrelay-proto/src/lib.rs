mod constants;
mod route;

pub mod dto;
pub use constants::*;
pub use route::*;
