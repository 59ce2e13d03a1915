use serde::Serialize;

#[derive(Default, Serialize)]
pub struct BoardCardItem {
    pub id: u64,
    pub pid: u64,
    pub patient_name: String,
    pub sid: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
    pub actions: Vec<String>,
}

#[derive(Default, Serialize)]
pub struct BoardColumnItem {
    pub status: String,
    pub count: u64,
    pub ratio: f64,
    pub cards: Vec<BoardCardItem>,
}

#[derive(Default, Serialize)]
pub struct ViewBoardResponse {
    pub success: bool,
    pub err: String,
    pub total: u64,
    pub columns: Vec<BoardColumnItem>,
}

#[derive(Default, Serialize)]
pub struct DropColumnItem {
    pub status: String,
    pub ids: Vec<u64>,
}

#[derive(Default, Serialize)]
pub struct DropResponse {
    pub success: bool,
    pub err: String,
    pub columns: Vec<DropColumnItem>,
}

crate::impl_err_response! {
    ViewBoardResponse,
    DropResponse,
}
