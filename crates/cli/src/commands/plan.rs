use anyhow::Result;
use chore_core::manager::TaskManager;
use colored::*;

pub fn execute(manager: &TaskManager, target: &str) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), target.cyan());

    let plan = manager
        .plan_target(target)
        .map_err(|e| anyhow::anyhow!("Failed to resolve plan: {}", e))?;

    println!("\n{}:", "Commands".bold());
    for (i, invocation) in plan.invocations.iter().enumerate() {
        match invocation.file_count {
            Some(count) => println!(
                "  {}. {} {}",
                i + 1,
                invocation.display,
                format!("({} files)", count).dimmed()
            ),
            None => println!("  {}. {}", i + 1, invocation.display),
        }
    }

    Ok(())
}
