use anyhow::Result;
use chore_core::manager::TaskManager;
use colored::*;

pub async fn execute(manager: &TaskManager, target: &str) -> Result<()> {
    println!("{} {}", "Running target".bold(), target.cyan());

    match manager.run_target(target).await {
        Ok(()) => {
            println!();
            println!(
                "{} {}",
                "✓".green().bold(),
                "All commands completed successfully!".green().bold()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!();
            eprintln!("{} {}", "✗".red().bold(), err.to_string().red());
            // The failing command's exit status is the process exit status
            std::process::exit(err.exit_code().unwrap_or(1));
        }
    }
}
