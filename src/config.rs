use std::env;

use dotenv::dotenv;

use crate::viacep::ViaCepClient;

pub const BIND_ADDRESS: &str = "0.0.0.0:8080";

const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br";

pub fn init_viacep_client() -> ViaCepClient {
    dotenv().ok();

    let base_url = env::var("VIACEP_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_VIACEP_BASE_URL.to_owned());

    ViaCepClient::new(&base_url)
        .expect("Failed to create ViaCEP client")
}
