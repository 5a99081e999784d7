pub mod combination;
pub mod denomination;

pub use combination::*;
pub use denomination::*;
