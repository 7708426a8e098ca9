// Strategies that keep equal elements in their original relative order.

pub mod insertion;
pub mod merge;
