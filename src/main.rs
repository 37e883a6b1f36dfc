use clap::Parser;
use hypercube_viz::io::config::Config;
use hypercube_viz::io::writer::write_html;
use hypercube_viz::render::html::render_document;
use hypercube_viz::scene::loader::build_scene;
use log::{error, info};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "hypercube-viz")]
#[command(about = "Renders a labelled cube graph to a standalone HTML file")]
struct Cli {
    /// Scene configuration (TOML); defaults to the built-in cube
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Overrides the configured output path
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Writes a starter configuration to FILE and exits
    #[arg(long, value_name = "FILE")]
    example_config: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.example_config {
        if let Err(e) = Config::write_example(path) {
            error!("{}", e);
            process::exit(1);
        }
        info!("Example configuration written to '{}'", path);
        return;
    }

    // 1. Configuration
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from '{}'", path);
            match Config::load(path) {
                Ok(c) => c,
                Err(e) => {
                    error!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            info!("Using built-in cube scene");
            Config::default()
        }
    };
    if let Some(output) = cli.output {
        config.output = output;
    }

    // 2. Scene
    let scene = match build_scene(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    // 3. Render and persist
    let html = render_document(&scene);
    match write_html(&config.output, &html) {
        Ok(()) => info!("Wrote {} bytes to '{}'", html.len(), config.output),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
