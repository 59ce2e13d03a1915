use serde::Serialize;

#[derive(Default, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub err: String,
    pub cid: u64,
}

#[derive(Default, Serialize)]
pub struct SearchClinicItem {
    pub cid: u64,
    pub name: String,
    pub address: String,
}

#[derive(Default, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub err: String,
    pub clinics: Vec<SearchClinicItem>,
}

crate::impl_err_response! {
    RegisterResponse,
    SearchResponse,
}
