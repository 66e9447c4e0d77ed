use catalog_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    catalog_observability::init(config.log_format);

    catalog_api::server::run(config).await
}
