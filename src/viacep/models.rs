use serde::{Deserialize, Serialize};

/// Address returned by ViaCEP for a single postal code.
///
/// Missing keys decode to empty strings and unknown keys (`ddd`, `siafi`,
/// `erro`...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub ibge: String,
    pub gia: String
}
