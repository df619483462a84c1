use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;

mod config;
mod db;
mod handlers;
mod models;
mod services;

use config::Config;

async fn index(state: web::Data<models::AppState>) -> actix_web::Result<NamedFile> {
    let static_path = state.config.static_files_path.as_deref().unwrap_or("./static");
    Ok(NamedFile::open(format!("{}/index.html", static_path))?)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    log::info!("Starting server at {}:{}", config.host, config.port);

    if let Some(ref path) = config.static_files_path {
        log::info!("Serving static files from: {}", path);
    }

    let pool = db::connect(&config.database_url, 5)
        .await
        .map_err(io::Error::other)?;

    db::migrate(&pool).await.map_err(io::Error::other)?;

    log::info!("Database migrations completed");

    let app_state = web::Data::new(models::AppState {
        db: pool,
        config: config.clone(),
    });

    let static_files_path = config.static_files_path.clone();
    let cors_config = config.clone();

    HttpServer::new(move || {
        let cors_config = cors_config.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|origin| cors_config.allows_origin(origin))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec!["Content-Type"])
            .max_age(3600);

        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure_routes);

        // Serve the compiled frontend if configured
        if let Some(ref path) = static_files_path {
            app = app
                .service(Files::new("/pkg", format!("{}/pkg", path)))
                .service(Files::new("/assets", format!("{}/assets", path)))
                .default_service(web::route().to(index));
        }

        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
