pub mod catalog;
pub mod handlers;
pub mod listing;
pub mod scheduler;
pub mod search;
