use log::info;

use crate::viacep::error::LookupError;
use crate::viacep::models::AddressRecord;

pub mod error;
pub mod models;

const USER_AGENT: &str = concat!("cep-service/", env!("CARGO_PKG_VERSION"));

/// Client for the ViaCEP web service, shared by every worker.
#[derive(Clone, Debug)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String
}

impl ViaCepClient {
    pub fn new(base_url: &str) -> reqwest::Result<ViaCepClient> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(ViaCepClient {
            http,
            base_url: base_url.trim_end_matches('/').to_owned()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lookup_url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, cep)
    }

    /// Fetches the address for `cep`.
    ///
    /// The upstream status code is not checked: any reply whose body decodes
    /// as an address is a success.
    pub async fn lookup(&self, cep: &str) -> Result<AddressRecord, LookupError> {
        let url = self.lookup_url(cep);
        info!("Fetching address at {}", url);

        let body = self.http
            .get(&url)
            .send()
            .await?
            .bytes()
            .await?;

        let record = serde_json::from_slice(&body)?;
        Ok(record)
    }
}
