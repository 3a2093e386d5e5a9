use anyhow::Result;
use chore_core::manager::TaskManager;
use colored::*;

pub fn execute(manager: &TaskManager) -> Result<()> {
    println!("{}", "Targets".bold().underline());

    let targets = manager.list_targets();
    if targets.is_empty() {
        println!("  {}", "No targets configured".dimmed());
        return Ok(());
    }

    for info in targets {
        let commands = if info.command_count == 1 {
            "1 command".to_string()
        } else {
            format!("{} commands", info.command_count)
        };
        match &info.description {
            Some(description) => println!(
                "{} {} {}",
                info.name.blue().bold(),
                description,
                format!("({})", commands).dimmed()
            ),
            None => println!(
                "{} {}",
                info.name.blue().bold(),
                format!("({})", commands).dimmed()
            ),
        }
    }

    Ok(())
}
