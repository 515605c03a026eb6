use std::path::Path;

use crate::config::GeneratorConfig;
use crate::generator::builder::TraceBuilder;
use crate::generator::row::RowSchema;
use crate::generator::template::TemplateExpander;

pub const TEST_SEED: u64 = 123;

pub fn default_test_builder() -> TraceBuilder {
    TraceBuilder::new(TemplateExpander::seeded(TEST_SEED), RowSchema::default())
}

pub fn default_test_generator_config(input_dir: &Path, output_dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(TEST_SEED),
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    }
}

/// Writes directive files `(name, content)` into `dir`.
pub fn write_directive_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}
