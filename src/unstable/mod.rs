// Strategies that may reorder equal elements.

pub mod quicksort;
pub mod selection;
