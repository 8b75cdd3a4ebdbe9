pub mod board;
pub mod demo;
