use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::EmployeeDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::line::RosterGroup;
use crate::source::{JsonDirSource, ScheduleSource};
use crate::ui::grid_view::render_roster;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { line, keywords } = cmd {
        let groups = match line.as_deref() {
            Some(code) => {
                vec![RosterGroup::from_code(code).ok_or_else(|| AppError::InvalidLine(code.to_string()))?]
            }
            None => vec![RosterGroup::L1, RosterGroup::L2, RosterGroup::Extra],
        };

        let members = JsonDirSource::new(cfg.data_path()).load_members()?;
        let directory = EmployeeDirectory::from_members(&members, &cfg.schedule.line_rules);

        for group in groups {
            let employees = match (group.line(), *keywords) {
                (Some(l), true) => directory.keyword_roster(l),
                // keyword rules have no "extra" bucket
                (None, true) => continue,
                (_, false) => directory.roster(group).to_vec(),
            };

            header(format!("{} ({})", group.code(), employees.len()));
            if employees.is_empty() {
                info("No employees.");
                continue;
            }
            print!("{}", render_roster(&employees));
        }
    }
    Ok(())
}
