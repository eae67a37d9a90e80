mod matrices;

pub use aircraft::*;
pub use matrices::*;
