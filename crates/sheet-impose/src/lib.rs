pub mod constants;
mod engine;
mod layout;
mod options;
mod presets;
mod stats;
mod types;

pub use engine::{calculate, candidates, update_in_place};
pub use layout::{Placement, cell_size, placements, used_extent};
pub use presets::*;
pub use stats::calculate_run;
pub use types::*;
