use anyhow::Result;
use chore_core::configs::tasks::TargetsFileConfig;
use schemars::schema_for;

pub fn execute() -> Result<()> {
    let schema = schema_for!(TargetsFileConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
