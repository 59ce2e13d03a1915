use crate::schema::patients;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct PatientData {
    pub pid: u64,
    pub name: String,
    pub gender: String,
    pub birthday: Option<NaiveDate>,
    pub telephone: String,
}

#[derive(Insertable)]
#[table_name = "patients"]
pub struct NewPatient {
    pub name: String,
    pub gender: String,
    pub birthday: Option<NaiveDate>,
    pub telephone: String,
}
