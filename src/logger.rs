use crate::config::LogLevel;
use anyhow::Result;
use simple_logger::init_with_level;

pub fn init(level: LogLevel) -> Result<()> {
    init_with_level(level.into())?;

    Ok(())
}
