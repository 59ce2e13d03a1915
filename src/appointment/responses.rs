use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchAppointItem {
    pub id: u64,
    pub pid: u64,
    pub patient_name: String,
    pub sid: String,
    pub staff_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub appointments: Vec<SearchAppointItem>,
}

#[derive(Default, Serialize)]
pub struct ViewAppointResponse {
    pub success: bool,
    pub err: String,
    pub id: u64,
    pub pid: u64,
    pub sid: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
    pub status: String,
    pub notes: String,
}

#[derive(Default, Serialize)]
pub struct SaveAppointResponse {
    pub success: bool,
    pub err: String,
    pub id: u64,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct AdvanceAppointResponse {
    pub success: bool,
    pub err: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct DayScheduleItem {
    pub id: u64,
    pub pid: u64,
    pub sid: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct DayScheduleResponse {
    pub success: bool,
    pub err: String,
    pub date: String,
    pub appointments: Vec<DayScheduleItem>,
}

crate::impl_err_response! {
    SearchAppointResponse,
    ViewAppointResponse,
    SaveAppointResponse,
    AdvanceAppointResponse,
    DayScheduleResponse,
}
