use crate::schema::staff_logins;
use chrono::NaiveDateTime;

#[derive(Queryable, Insertable)]
#[table_name = "staff_logins"]
pub struct StaffLoginData {
    pub token: String,
    pub sid: String,
    pub login_time: NaiveDateTime,
}
