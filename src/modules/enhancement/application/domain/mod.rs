pub mod admission;
pub mod entities;
