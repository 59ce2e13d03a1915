mod requests;
mod responses;
pub(crate) mod utils;

use crate::{
    database::{assert, get_db_conn},
    models::{staff::StaffData, staff_logins::StaffLoginData},
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use self::{
    requests::{LoginRequest, LogoutRequest, RegisterRequest},
    responses::LoginResponse,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login).service(logout);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::staff;

    let info = info.into_inner();
    assert::assert_clinic(&pool, info.cid).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let res = staff::table
                .filter(staff::sid.eq(&info.sid))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("Duplicated staff ID");
            }

            let role = if info.role.is_empty() {
                "doctor".to_string()
            } else {
                info.role
            };
            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            let data = StaffData {
                sid: info.sid,
                cid: info.cid,
                name: info.name,
                password: hashed_password,
                role,
            };
            diesel::insert_into(staff::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::{staff, staff_logins};

    let info = info.into_inner();
    assert::assert_staff(&pool, info.sid.clone()).await?;

    let conn = get_db_conn(&pool)?;
    let login_token = web::block(move || {
        conn.transaction(|| {
            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            let res = staff::table
                .filter(staff::sid.eq(&info.sid))
                .filter(staff::password.eq(hashed_password))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res != 1 {
                bail!("Wrong password");
            }

            let login_token = format!("{:x}", Blake2b::digest(info.sid.as_bytes()));
            let token_data = StaffLoginData {
                token: login_token.clone(),
                sid: info.sid,
                login_time: Utc::now().naive_utc(),
            };
            diesel::insert_into(staff_logins::table)
                .values(token_data)
                .execute(&conn)
                .context("DB error")?;

            Ok(login_token)
        })
    })
    .await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        login_token,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::staff_logins;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(staff_logins::table.filter(staff_logins::token.eq(info.login_token)))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}
