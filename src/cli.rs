use clap::Parser;

/// Scaffolds the Quantitative-Portfolio-Strategy project skeleton in the
/// current working directory. The tool takes no arguments: the project name,
/// directory tree, and every file's content are fixed at compile time.
#[derive(Parser, Debug)]
#[command(
    name = "portfolio-scaffold",
    version,
    about = "Generate the Quantitative-Portfolio-Strategy project skeleton"
)]
pub struct Cli {}
