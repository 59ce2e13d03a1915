use actix_web::web;
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    models::{staff::StaffData, staff_logins::StaffLoginData},
    DbPool,
};

/// Resolves a login token into the staff row, which carries the clinic the
/// session is scoped to. Every appointment/board operation goes through this.
pub async fn get_staff_from_token(
    token: String,
    pool: &web::Data<DbPool>,
) -> anyhow::Result<StaffData> {
    use crate::schema::{staff, staff_logins};
    const MAX_LOGIN_TIME_SECS: i64 = 3600;

    let conn = pool.get().context("DB connection")?;
    let data = web::block(move || {
        staff_logins::table
            .filter(staff_logins::token.eq(token))
            .order(staff_logins::login_time.desc())
            .limit(1)
            .get_result::<StaffLoginData>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    let data = match data {
        Some(data) => data,
        None => bail!("Not logged in"),
    };

    let time_diff = Utc::now()
        .naive_utc()
        .signed_duration_since(data.login_time);
    if time_diff.num_seconds() > MAX_LOGIN_TIME_SECS {
        bail!("Login expired");
    }

    let conn = pool.get().context("DB connection")?;
    let staff = web::block(move || {
        staff::table
            .filter(staff::sid.eq(data.sid))
            .get_result::<StaffData>(&conn)
    })
    .await
    .context("No such staff")?;

    Ok(staff)
}
