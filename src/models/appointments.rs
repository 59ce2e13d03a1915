use crate::schema::appointments;
use chrono::{NaiveDate, NaiveTime};

#[derive(Queryable, Clone)]
pub struct Appointment {
    pub id: u64,
    pub pid: u64,
    pub sid: String,
    pub cid: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub kind: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[table_name = "appointments"]
pub struct NewAppointment {
    pub pid: u64,
    pub sid: String,
    pub cid: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub kind: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(AsChangeset, Default)]
#[table_name = "appointments"]
pub struct UpdateAppointment {
    pub pid: Option<u64>,
    pub sid: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

pub const KIND_NEW: &str = "new";
pub const KIND_FOLLOWUP: &str = "followup";
