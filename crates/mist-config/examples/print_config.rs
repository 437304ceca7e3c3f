/// Example program to print the loaded configuration
///
/// Run with: cargo run -p mist-config --example print_config

fn main() {
    // Load configuration from mist.toml
    let config = mist_config::MistConfig::load();

    println!("=== Mist Configuration ===\n");

    println!("Animation Settings:");
    println!("  Increment: {}", config.animation.increment);
    println!("  Secondary Increment: {}", config.animation.secondary_increment);
    println!("  Easing: {}", config.animation.easing.as_str());
    println!("  Interrupt Allowed: {}", config.animation.interrupt_allowed);
    println!("  Tick Interval: {}ms", config.animation.tick_interval_ms);
    println!();

    println!("Tab Selector Settings:");
    println!("  Height: {}", config.tab_selector.height);
    println!("  Header Padding: {}", config.tab_selector.header_padding);
    println!("  Indicator Height: {}", config.tab_selector.indicator_height);
    println!("  Form Padding: {}", config.tab_selector.form_padding);
    println!("  Increment: {}", config.tab_selector.increment);
    println!("  Easing: {}", config.tab_selector.easing.as_str());
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
