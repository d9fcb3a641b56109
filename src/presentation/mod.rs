// Presentation layer - Rendering results
pub mod report_writer;
