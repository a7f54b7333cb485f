use console::style;

use crate::application::port::Reporter;

pub fn step_line(message: &str) -> String {
    format!("  {}", style(message).cyan())
}

pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green(), style(message).green())
}

pub fn next_steps_block(steps: &[String]) -> String {
    let mut out = String::from("Next steps:");
    for (index, step) in steps.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. {}", index + 1, step));
    }
    out
}

/// Prints progress to stdout; the only output surface of the tool.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, message: &str) {
        println!("{}", step_line(message));
    }

    fn success(&self, message: &str) {
        println!("{}", success_line(message));
    }

    fn next_steps(&self, steps: &[String]) {
        println!("{}", next_steps_block(steps));
    }
}
