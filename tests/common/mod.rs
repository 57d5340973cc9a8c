#![allow(dead_code)]

pub mod fixtures;

use elpath::{Element, Path, PathBuilder, PathError};
use elpath_engine::element::tests::MemoryElement;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A builder whose equality hook understands the `Name` property.
pub fn name_aware_builder() -> PathBuilder<MemoryElement> {
    PathBuilder::<MemoryElement>::new().with_equality(
        |element: &MemoryElement, property: &str, value: &elpath::Literal<'_>| {
            property == "Name" && value.as_str() == Some(element.name())
        },
    )
}

pub fn compile(source: &str) -> Result<Path<MemoryElement>, PathError> {
    name_aware_builder().build(source)
}

/// Compiles `source` and runs it against `root`.
pub fn select(source: &str, root: &MemoryElement) -> Result<Vec<MemoryElement>, PathError> {
    Ok(compile(source)?.execute(root)?)
}

pub fn count(source: &str, root: &MemoryElement) -> Result<usize, PathError> {
    select(source, root).map(|found| found.len())
}

pub fn names(elements: &[MemoryElement]) -> Vec<String> {
    elements.iter().map(|e| e.name().to_string()).collect()
}
