use std::io;

use actix_web::{App, HttpServer};
use actix_web::middleware::Logger;
use env_logger::Env;
use log::info;

use crate::api::routes;
use crate::config::{BIND_ADDRESS, init_viacep_client};

mod api;
mod config;
#[cfg(test)]
mod test_support;
mod viacep;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::from_env(Env::default().default_filter_or("info")).init();

    let client = init_viacep_client();
    info!("Forwarding lookups to {}", client.base_url());
    info!("Listening on {}", BIND_ADDRESS);

    HttpServer::new(move || {
        App::new()
            .data(client.clone())
            .wrap(Logger::default())
            .configure(routes)
    })
    .bind(BIND_ADDRESS)?
    .run()
    .await
}
