pub mod backend;
pub mod normalize;
