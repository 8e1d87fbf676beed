use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::ShiftCatalogIndex;
use crate::errors::AppResult;
use crate::source::{JsonDirSource, ScheduleSource};
use crate::ui::grid_view::render_templates;
use crate::ui::messages::{header, info, note};

use super::resolve_lines;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Templates { line } = cmd {
        let lines = resolve_lines(line.as_deref())?;

        let catalog = JsonDirSource::new(cfg.data_path()).load_catalog()?;
        let index = ShiftCatalogIndex::build(&catalog, &cfg.schedule.catalog_columns);

        for l in lines {
            let templates = index.templates(l);
            header(format!("{} templates ({})", l, templates.len()));
            if templates.is_empty() {
                info("No templates.");
                continue;
            }
            print!("{}", render_templates(templates, &cfg.currency));
        }

        if index.skipped() > 0 {
            note(format!("{} catalog row(s) without an item id skipped", index.skipped()));
        }
    }
    Ok(())
}
