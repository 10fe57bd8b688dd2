//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum job submission for cloud backends",
        style("Vanir").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  vanir-hal            Execution backend abstraction layer");
    println!("  vanir-submit         Submission driver and target resolution");
    println!("  vanir-adapter-cloud  Remote cloud backend");
    println!("  vanir-adapter-noop   No-op sentinel backend");
    println!("  vanir-cli            Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/vanir-q/vanir").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
