use std::path::Path;
use std::process::ExitCode;

use texgen::generator::{GeneratorConfig, generate_all};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 可选的唯一参数：输出根目录
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(root) => GeneratorConfig::under_root(Path::new(root)),
        None => GeneratorConfig::default(),
    };

    match generate_all(&config) {
        Ok(report) => {
            if report.is_unchanged() {
                log::info!("All generated files up to date");
            } else {
                log::info!("{} file(s) updated", report.written.len());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}
