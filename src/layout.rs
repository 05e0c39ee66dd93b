//! Region layout tree and split geometry.

pub mod region;
pub mod split;

pub use region::{Region, SplitSpec};
pub use split::{plan_split, SplitAxis};
