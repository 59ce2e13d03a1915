mod requests;
mod responses;

use crate::{
    database::{get_db_conn, last_insert_id},
    models::clinics::{ClinicData, NewClinic},
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
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
    use crate::schema::clinics;

    let info = info.into_inner();

    let conn = get_db_conn(&pool)?;
    let cid = web::block(move || {
        conn.transaction(|| {
            let res = clinics::table
                .filter(clinics::name.eq(&info.name))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("Duplicated clinic name");
            }

            let data = NewClinic {
                name: info.name,
                address: info.address,
            };
            diesel::insert_into(clinics::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            let cid = diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")?;

            Ok(cid)
        })
    })
    .await?;

    Ok(RegisterResponse {
        success: true,
        err: "".to_string(),
        cid,
    })
}

async fn search_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchRequest>,
) -> anyhow::Result<SearchResponse> {
    use crate::schema::clinics;

    let info = info.into_inner();

    let conn = get_db_conn(&pool)?;
    let name_pattern = crate::utils::get_str_pattern_opt(info.name);
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);
    let rows = web::block(move || {
        clinics::table
            .filter(clinics::name.like(name_pattern))
            .order(clinics::name.asc())
            .offset(first_index)
            .limit(limit)
            .get_results::<ClinicData>(&conn)
    })
    .await
    .context("DB error")?;

    let clinics = rows
        .into_iter()
        .map(|data| SearchClinicItem {
            cid: data.cid,
            name: data.name,
            address: data.address,
        })
        .collect();

    Ok(SearchResponse {
        success: true,
        err: "".to_string(),
        clinics,
    })
}
