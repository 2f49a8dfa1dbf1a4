pub mod compute;
pub mod entities;
