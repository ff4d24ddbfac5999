pub mod builder;
pub mod handles;
pub mod model;
pub mod rescale;
