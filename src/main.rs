use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use qgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    log::info!(
        "starting question generator server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::root)
            .service(handlers::health)
            .service(handlers::info)
            .service(handlers::generate_mcqs)
            .service(handlers::generate_questions)
            .service(handlers::generate_fill_in_blanks)
            .service(handlers::generate_topic_mcqs)
    })
    .bind(bind_addr)?
    .run()
    .await
}
