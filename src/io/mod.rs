pub mod cli;
pub mod input;
pub mod interrupt;
pub mod json;
pub mod logger;
pub mod render;
pub mod validation;
