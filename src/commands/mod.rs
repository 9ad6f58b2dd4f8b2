pub mod check;
mod context;
pub mod list;

pub use check::{collect_sources, match_baselines, run_check, run_check_impl};
pub use list::{run_list, run_list_impl};
