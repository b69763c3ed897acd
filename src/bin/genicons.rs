use std::process;

use exticons::IconConfig;
use exticons::placeholders;

fn main() {
    let config = IconConfig::default();
    if let Err(e) = placeholders::emit_placeholders(&config.base_dir) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
