use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub login_token: String,
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub telephone: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub login_token: String,
    pub name: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}
