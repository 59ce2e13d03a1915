use serde::Serialize;

#[derive(Default, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub err: String,
    pub pid: u64,
}

#[derive(Default, Serialize)]
pub struct SearchPatientItem {
    pub pid: u64,
    pub name: String,
    pub gender: String,
    pub birthday: String,
    pub telephone: String,
}

#[derive(Default, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub err: String,
    pub patients: Vec<SearchPatientItem>,
}

crate::impl_err_response! {
    RegisterResponse,
    SearchResponse,
}
