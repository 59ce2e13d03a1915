use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub sid: String,
    pub name: String,
    pub password: String,
    pub cid: u64,
    #[serde(default)]
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub sid: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub login_token: String,
}
