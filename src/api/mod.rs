use actix_web::{HttpResponse, web};

use crate::api::cep::lookup_cep;

pub mod cep;

/// Route table shared by the server and the tests. `/` goes to the lookup
/// handler, every other path falls through to `not_found`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::to(lookup_cep))
        .service(web::resource("/{tail:.*}").to(not_found));
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}
