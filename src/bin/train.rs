use anyhow::Context;
use env_logger::Env;
use passmark::config::TrainerSettings;
use passmark::tasks::Trainer;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = TrainerSettings::default();
    let dataset = settings.dataset_path.display().to_string();
    let trainer = Trainer::new(settings)?;

    let stdout = io::stdout();
    let report = trainer
        .run(&mut stdout.lock())
        .with_context(|| format!("training on {dataset} failed"))?;

    log::info!(
        "done: {} of {} rows held out, kept {}",
        report.test_rows,
        report.rows,
        report.chosen
    );
    Ok(())
}
