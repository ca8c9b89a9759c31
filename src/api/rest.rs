use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use log::info;

use crate::api::routes::configure;
use crate::config::Settings;

pub async fn run_server(settings: Settings) -> std::io::Result<()> {
    let bind_address = settings.bind_address();
    info!("Starting REST API server at {}", bind_address);

    let settings = Data::new(settings);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(settings.clone())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
