use clap::Parser;

use portfolio_scaffold::application::scaffold::ScaffoldUseCase;
use portfolio_scaffold::cli::Cli;
use portfolio_scaffold::domain::model::ProjectLayout;
use portfolio_scaffold::infrastructure::generator::FsGenerator;
use portfolio_scaffold::infrastructure::ui::ConsoleReporter;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let base = std::env::current_dir()?;
    let layout = ProjectLayout::standard();
    let use_case = ScaffoldUseCase::new(FsGenerator::new(base), ConsoleReporter::new());
    use_case.execute(&layout)
}
