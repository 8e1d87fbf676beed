use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates (unless they exist):
///  - the config directory
///  - the configuration file with defaults
///  - the data directory the dumps are read from
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (path, written) = Config::init_all(cli.test)?;

    if written {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file: {}", path.display()));
    }

    let data = cfg.data_path();
    std::fs::create_dir_all(&data)?;
    info(format!(
        "Data directory: {} (members.json, catalog.json, tasks-YYYY-MM.json)",
        data.display()
    ));

    success("shiftgrid initialization completed!");
    Ok(())
}
