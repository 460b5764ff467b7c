use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("chatbox-stats version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
