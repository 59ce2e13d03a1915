use crate::schema::staff;

#[derive(Queryable, Insertable, Identifiable)]
#[primary_key(sid)]
#[table_name = "staff"]
pub struct StaffData {
    pub sid: String,
    pub cid: u64,
    pub name: String,
    pub password: String,
    pub role: String,
}
