pub mod launcher;
pub mod options;

pub use launcher::EvolutionLauncher;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
