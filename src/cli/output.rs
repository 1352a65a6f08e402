//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tree::TreeSummary;

/// Create a spinner for long-running tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print states, leaves and per-outcome counts of a subtree
pub fn print_summary(summary: &TreeSummary) {
    print_kv("States", &format_number(summary.states));
    print_kv("Leaves", &format_number(summary.leaves));
    for (outcome, count) in summary.outcomes.iter() {
        print_kv(outcome.as_str(), &format_number(count as usize));
    }
}
