use crate::schema::clinics;

#[derive(Queryable)]
pub struct ClinicData {
    pub cid: u64,
    pub name: String,
    pub address: String,
}

#[derive(Insertable)]
#[table_name = "clinics"]
pub struct NewClinic {
    pub name: String,
    pub address: String,
}
