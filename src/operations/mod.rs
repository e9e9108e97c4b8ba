pub mod analysis;
pub mod source;
