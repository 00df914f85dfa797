// Grid layout: turns a validated puzzle into a render-ready grid.
// Pure and synchronous; callers may run it directly on the request task.

pub mod engine;
pub mod grid;

// Re-export the public API consumed by the generator and solving sessions.
pub use engine::{build_layout, find_intersection, Layout, LayoutError, Placement};
pub use grid::{Cell, CellId, Grid};
