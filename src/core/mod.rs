pub mod calculator;
pub mod logic;
pub mod merge;
pub mod parser;
pub mod predictor;
