use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("consolekit version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
