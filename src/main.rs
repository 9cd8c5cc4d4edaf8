use actix_web::{App, HttpServer, middleware, web};

use tourvisto_admin::config::AppConfig;
use tourvisto_admin::models::constants::Constants;
use tourvisto_admin::state::AppState;
use tourvisto_admin::{handlers, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let constants = Constants::load(config.constants_path.as_deref()).map_err(std::io::Error::other)?;
    log::info!(
        "Loaded {} trips and {} users",
        constants.all_trips.len(),
        constants.users.len()
    );

    let state = web::Data::new(AppState::new(&config, constants));
    let static_dir = config.static_dir.clone();

    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(actix_files::Files::new("/static", static_dir.clone()))
            .configure(routes::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind((host, port))?
    .run()
    .await
}
