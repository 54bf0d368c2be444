pub mod json;
pub mod renderer;
pub mod txt;
