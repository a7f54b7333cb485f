use anyhow::Result;

use super::port::{FileGenerator, Reporter};
use crate::domain::model::ProjectLayout;
use crate::domain::validation::validate_project_name;
use crate::infrastructure::templates::render_files;

pub struct ScaffoldUseCase<G: FileGenerator, R: Reporter> {
    generator: G,
    reporter: R,
}

impl<G: FileGenerator, R: Reporter> ScaffoldUseCase<G, R> {
    pub fn new(generator: G, reporter: R) -> Self {
        Self {
            generator,
            reporter,
        }
    }

    /// Runs the whole scaffold in one linear pass: validate the name, render
    /// every file from the finalized layout, hand the set to the generator,
    /// then report progress and next steps. Any error aborts the remaining
    /// sequence and propagates unmodified; re-running is safe because every
    /// operation is an idempotent create or overwrite.
    pub fn execute(&self, layout: &ProjectLayout) -> Result<()> {
        validate_project_name(layout.name())?;

        self.reporter.step(&format!(
            "Creating project structure for '{}'...",
            layout.name()
        ));

        let files = render_files(layout);
        self.generator.generate(layout, &files)?;

        self.reporter.success("Project structure created successfully!");
        self.reporter.next_steps(&next_steps(layout.name()));

        Ok(())
    }
}

/// Fixed shell commands suggested after a successful run.
pub fn next_steps(name: &str) -> Vec<String> {
    vec![
        format!("cd {name}"),
        "git init".to_string(),
        "git add .".to_string(),
        "git commit -m 'Initial project structure'".to_string(),
        "Create the repository on GitHub and push.".to_string(),
    ]
}
