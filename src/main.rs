//! `main-core`: arma el pipeline iris con Tuner contra los descriptores y
//! muestra cada instancia resuelta como JSON.
use pipespec_rust::config::AppConfig;
use pipespec_rust::errors::AppError;
use pipespec_rust::iris::IrisPipeline;

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let pipeline = IrisPipeline::build(&config.pipeline)?;
    println!("Pipeline '{}' en {}", config.pipeline.pipeline_name, config.pipeline.pipeline_root);
    for component in pipeline.components.values() {
        println!("[{}] fingerprint={}", component.id(), component.spec().fingerprint());
    }
    let rendered = serde_json::to_string_pretty(&pipeline.to_json())?;
    println!("{rendered}");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("main-core: {e}");
        std::process::exit(1);
    }
}
