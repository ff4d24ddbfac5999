pub mod label;
pub mod normalize;
