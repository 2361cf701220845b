pub mod dump;
pub mod grid;
pub mod score;
