//! List rules command implementation.

use trimlint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} {:<8} Description", "Code", "Name", "Fixable");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {:<8} {}",
            rule.code(),
            rule.name(),
            if rule.is_fixable() { "yes" } else { "no" },
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  trimlint check --rules no-trailing-spaces");
    println!("  trimlint format --rules TL001");
}
