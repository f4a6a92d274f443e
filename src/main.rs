//! fichajes main entrypoint.

use fichajes::run;
use fichajes::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
