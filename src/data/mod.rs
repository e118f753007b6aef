//! The catalog that ships with the binary.

use once_cell::sync::Lazy;

use crate::catalog::Catalog;

mod elements;
mod paths;
mod questions;
mod reactions;

pub(crate) static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    elements: elements::build(),
    reactions: reactions::build(),
    questions: questions::build(),
    paths: paths::build(),
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
