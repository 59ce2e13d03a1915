mod requests;
mod responses;

use crate::{
    database::{get_db_conn, last_insert_id},
    models::patients::{NewPatient, PatientData},
    staff::utils::get_staff_from_token,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;
use chrono::NaiveDate;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(search);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, RegisterResponse),
    (search, "/search", SearchRequest, SearchResponse),
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<RegisterResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    get_staff_from_token(info.login_token.clone(), &pool).await?;

    crate::utils::assert_gender_str(&info.gender)?;
    let birthday = match NaiveDate::parse_from_str(&info.birthday, crate::utils::DATE_FMT) {
        Ok(date) => Some(date),
        Err(_) => None,
    };

    let conn = get_db_conn(&pool)?;
    let pid = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let data = NewPatient {
                name: info.name,
                gender: info.gender,
                birthday,
                telephone: info.telephone,
            };
            diesel::insert_into(patients::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            let pid = diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")?;

            Ok(pid)
        })
    })
    .await?;

    Ok(RegisterResponse {
        success: true,
        err: "".to_string(),
        pid,
    })
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchRequest>,
) -> anyhow::Result<SearchResponse> {
    use crate::schema::patients;

    let info = info.into_inner();
    get_staff_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let name_pattern = crate::utils::get_str_pattern_opt(info.name);
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);
    let rows = web::block(move || {
        patients::table
            .filter(patients::name.like(name_pattern))
            .order(patients::name.asc())
            .offset(first_index)
            .limit(limit)
            .get_results::<PatientData>(&conn)
    })
    .await
    .context("DB error")?;

    let patients = rows
        .into_iter()
        .map(|data| SearchPatientItem {
            pid: data.pid,
            name: data.name,
            gender: data.gender,
            birthday: data
                .birthday
                .map(|date| crate::utils::format_date_str(&date))
                .unwrap_or_default(),
            telephone: data.telephone,
        })
        .collect();

    Ok(SearchResponse {
        success: true,
        err: "".to_string(),
        patients,
    })
}
