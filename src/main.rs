use anyhow::Result;
use cpp_types_zoo::{output, Toolchain};
use std::io;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // No CLI surface: arguments are ignored, the document always goes to
    // stdout, and logging stays on stderr so the Markdown remains clean.
    let toolchain = Toolchain::default_dialect();
    log::info!("emitting type deduction report for {}", toolchain);

    let stdout = io::stdout().lock();
    output::write_report(stdout, toolchain)?;
    Ok(())
}
