pub mod stake_record;

pub use stake_record::*;
