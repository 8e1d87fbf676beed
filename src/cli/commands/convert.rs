use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::time_convert::{LOCAL_UTC_OFFSET_HOURS, local_range_from_utc_due_and_duration};
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Convert { due, duration } = cmd {
        let range = local_range_from_utc_due_and_duration(Some(due.as_str()), *duration)
            .ok_or_else(|| AppError::InvalidTime(format!("{due} (duration {duration})")))?;

        println!("Local date : {}", range.local_date_key());
        println!(
            "Shift      : {} - {} (UTC+{})",
            range.start_local.format("%H:%M"),
            range.end_local.format("%H:%M"),
            LOCAL_UTC_OFFSET_HOURS
        );
        println!("Length     : {}", format_minutes(*duration));
        if range.day_shift != 0 {
            println!("Day shift  : {}", range.day_shift);
        }
    }
    Ok(())
}
