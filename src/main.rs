use cipher_service::api;
use cipher_service::common::init;
use cipher_service::settings::AppSettings;
use cipher_service::workers::seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        "seed" => seed::run(settings).await,
        _ => panic!("Unknown app component"),
    }
}
