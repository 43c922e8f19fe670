//! schedrec main entrypoint.

use schedrec::run;
use schedrec::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
