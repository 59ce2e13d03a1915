use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub name: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}
