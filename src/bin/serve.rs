use anyhow::Context;
use env_logger::Env;
use passmark::config::ServerSettings;
use passmark::service::{self, PredictorService};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = ServerSettings::default();
    let predictor = PredictorService::load(&settings.artifact_path).with_context(|| {
        format!(
            "cannot start without a model at {}",
            settings.artifact_path.display()
        )
    })?;

    service::run(&settings, predictor)
        .await
        .with_context(|| format!("server on {}:{} failed", settings.host, settings.port))?;
    log::info!("shut down");
    Ok(())
}
