mod matcher;

pub use matcher::{BaselineMatcher, Demonstration, demonstrations, remove_found_forms};
