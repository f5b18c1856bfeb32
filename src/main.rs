//! tripoint main entrypoint.

use tripoint_quote::run;
use tripoint_quote::ui::messages::{CONTACT_US, error, warning};

fn main() {
    if let Err(e) = run() {
        error(&e);
        if e.is_contact_us() {
            warning(CONTACT_US);
        }
        std::process::exit(1);
    }
}
