pub mod create;
pub mod points;
pub mod stake;
pub mod unstake;
pub mod vault;

pub use create::*;
pub use points::*;
pub use stake::*;
pub use unstake::*;
pub use vault::*;
