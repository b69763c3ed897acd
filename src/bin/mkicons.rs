use std::process;

use exticons::IconConfig;
use exticons::resize;

fn main() {
    let config = IconConfig::default();
    match resize::resize_icons(&config.source_path, &config.target_dir, &config.sizes) {
        Ok(()) => println!("Success: All icons generated."),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
