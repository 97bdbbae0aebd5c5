pub mod city_picker;
pub mod current;
pub mod graph;
mod shared;
