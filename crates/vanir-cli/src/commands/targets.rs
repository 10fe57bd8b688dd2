//! Targets command implementation.

use console::style;

use vanir_submit::TargetResolver;

/// Execute the targets command.
pub fn execute() {
    let resolver = TargetResolver::new();

    println!("{} Available providers:\n", style("Vanir").cyan().bold());

    for provider in resolver.available_providers() {
        println!(
            "  {} {}",
            style("●").green(),
            style(&provider).bold()
        );
        println!("    Targets: {provider}.<device>");
    }

    println!(
        "  {} {} (sentinel, no workspace required)",
        style("●").green(),
        style("nothing").bold()
    );
    println!();
    println!(
        "Submit with: {}",
        style("vanir submit <program> --target <provider.device>").dim()
    );
}
