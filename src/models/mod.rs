pub mod rubric;
pub mod scores;

pub use rubric::*;
pub use scores::*;
