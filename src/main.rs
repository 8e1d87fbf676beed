//! shiftgrid main entrypoint.

use shiftgrid::run;
use shiftgrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
