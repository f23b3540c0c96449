//! The in-memory catalog: group and feature entries plus the
//! process-wide registry facade.

pub mod feature;
pub mod group;
pub mod registry;

pub use feature::Feature;
pub use group::Group;
pub use registry::Registry;
