//! chemeq main entrypoint.

use chemeq::run;
use chemeq::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
