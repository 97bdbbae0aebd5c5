pub mod grid;
pub mod sunshine;
pub mod weather;
