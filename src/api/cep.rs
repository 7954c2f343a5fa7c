use actix_web::{Error, HttpResponse, web};
use log::error;

use crate::viacep::ViaCepClient;

/// Only the first `cep` pair counts; later ones are ignored.
fn first_cep(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "cep")
        .map(|(_, value)| value.as_str())
}

pub async fn lookup_cep(
    query: web::Query<Vec<(String, String)>>,
    client: web::Data<ViaCepClient>
) -> Result<HttpResponse, Error> {
    let cep = match first_cep(&query).filter(|cep| !cep.is_empty()) {
        Some(cep) => cep,
        None => return Ok(HttpResponse::BadRequest().finish()),
    };

    match client.lookup(cep).await {
        Ok(address) => { Ok(HttpResponse::Ok().json(address)) },
        Err(err) => {
            error!("Error while looking up cep {}: {}", cep, err);
            Ok(HttpResponse::InternalServerError().finish())
        },
    }
}
