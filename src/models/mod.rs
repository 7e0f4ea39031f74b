pub mod card;
pub mod metric;

pub use card::*;
pub use metric::*;
