use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub login_token: String,
    pub status: Option<String>,
    pub pid: Option<u64>,
    pub sid: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewAppointRequest {
    pub login_token: String,
    pub id: u64,
}

/// Presence of `id` selects update vs create.
#[derive(Deserialize)]
pub struct SaveAppointRequest {
    pub login_token: String,
    #[serde(default)]
    pub id: Option<u64>,
    pub pid: u64,
    pub sid: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteAppointRequest {
    pub login_token: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct AdvanceAppointRequest {
    pub login_token: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct CancelAppointRequest {
    pub login_token: String,
    pub id: u64,
}

#[derive(Deserialize)]
pub struct DayScheduleRequest {
    pub login_token: String,
    pub date: String,
}
