use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use school_catalog::client::SchoolApiClient;
use school_catalog::handlers;
use school_catalog::view::render::PageRenderer;
use school_catalog::{AppConfig, SchoolListView};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    let client = SchoolApiClient::new(&config.api_url, config.fetch_timeout)
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;
    tracing::info!("Fetching schools from {}", client.list_url());

    let view = web::Data::new(SchoolListView::new(Arc::new(client), config.error_policy));

    let renderer = PageRenderer::new(&config.page_size_options)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let renderer = web::Data::new(renderer);

    let bind_addr = format!("{}:{}", config.host, config.port);
    let assets_dir = config.assets_dir.clone();
    let config_data = web::Data::new(config);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(view.clone())
            .app_data(renderer.clone())
            .app_data(config_data.clone())
            .service(Files::new("/static", &assets_dir))
            .configure(handlers::init_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
