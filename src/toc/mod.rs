pub mod annotator;
pub mod generator;
pub mod heading;
pub mod numberer;
pub mod renderer;
pub mod template;

pub use annotator::AnnotationLedger;
pub use generator::{TocGenerator, TocOutcome};
