/// Name of the generated project. Used verbatim as the root directory name,
/// so it must stay free of path separators and filesystem-illegal characters.
pub const PROJECT_NAME: &str = "Quantitative-Portfolio-Strategy";

/// Subdirectories created under the project root, in declared order.
const SUBDIRECTORIES: &[&str] = &[
    ".github/workflows",
    "data/raw",
    "data/processed",
    "notebooks",
    "reports/figures",
    "src",
    "tests",
];

/// The project name together with its name-prefixed directory list.
///
/// Directories are stored already prefixed (`<name>/data/raw`, ...) because
/// both consumers want that form: the filesystem generator creates exactly
/// these paths, and the README embeds exactly this list as the project
/// structure block.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    name: String,
    directories: Vec<String>,
}

impl ProjectLayout {
    /// The fixed layout this tool ships with.
    pub fn standard() -> Self {
        Self::with_name(PROJECT_NAME)
    }

    pub fn with_name(name: &str) -> Self {
        let directories = SUBDIRECTORIES
            .iter()
            .map(|dir| format!("{name}/{dir}"))
            .collect();
        Self {
            name: name.to_string(),
            directories,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Title for the README heading: hyphens replaced with spaces.
    pub fn display_title(&self) -> String {
        self.name.replace('-', " ")
    }

    /// Name-prefixed directory paths, in declared order.
    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    /// The directory list joined one per line. Always joined with `\n`,
    /// never the platform separator, so the rendered README is identical
    /// on every operating system.
    pub fn tree(&self) -> String {
        self.directories.join("\n")
    }
}
