mod classify;
mod cli;
mod combine;
mod config;
mod export;
mod latex;
mod resolve;
mod table;
mod types;
mod ui;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve configuration (verifies every input table exists)
    let config = match config::build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    // Combine the solver tables, reconciling through the console prompt
    let mut resolver = resolve::ConsoleResolver::new();
    let records = match combine::run(&config, &mut resolver) {
        Ok(records) => records,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    let labels = config.labels();
    if let Err(e) = combine::write_combined(&records, &labels, &config.combined_path) {
        ui::print_error(&e);
        std::process::exit(1);
    }
    ui::status(&format!("combined CSV saved to {}", config.combined_path.display()));

    if let Some(json_path) = &config.json_path {
        if let Err(e) = export::export_json(&records, &labels, json_path) {
            ui::print_error(&e);
            std::process::exit(1);
        }
        ui::status(&format!("JSON report saved to {}", json_path.display()));
    }

    // Second component: re-read the combined CSV and render the LaTeX body
    if !config.skip_report {
        if let Err(e) = latex::run(&config) {
            ui::print_error(&e);
            std::process::exit(1);
        }
        ui::status(&format!("LaTeX table written to {}", config.report_path.display()));
    }
}
