use std::path::PathBuf;

use anyhow::Result;

use crate::domain::model::ProjectLayout;

pub trait FileGenerator {
    /// Create the project tree and write every rendered file.
    fn generate(&self, layout: &ProjectLayout, files: &[(PathBuf, String)]) -> Result<()>;
}

pub trait Reporter {
    fn step(&self, message: &str);
    fn success(&self, message: &str);
    fn next_steps(&self, steps: &[String]);
}
