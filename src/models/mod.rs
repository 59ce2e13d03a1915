pub mod appointments;
pub mod clinics;
pub mod patients;
pub mod staff;
pub mod staff_logins;
