//! SeaORM entities mirroring the domain records.

pub mod author;
pub mod post;
