pub mod elitist;
pub mod selection_strategy;

pub use elitist::ElitistSelection;
pub use selection_strategy::SelectionStrategy;
