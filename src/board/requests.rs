use serde::Deserialize;

#[derive(Deserialize)]
pub struct ViewBoardRequest {
    pub login_token: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Raw drag payload as the browser carried it: two string fields plus the
/// target column's status ordinal.
#[derive(Deserialize)]
pub struct DropRequest {
    pub login_token: String,
    pub appointment_id: String,
    pub source_status: String,
    pub target_status: u8,
}
