use skillshare_service::api;
use skillshare_service::common::init;
use skillshare_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    api::serve(settings).await
}
