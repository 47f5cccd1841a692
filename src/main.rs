//! mapty main entrypoint.

use mapty::run;
use mapty::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
