pub mod filter;
pub mod similarity;
