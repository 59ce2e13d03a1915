use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_clinic(pool: &web::Data<DbPool>, cid: u64) -> anyhow::Result<()> {
    use crate::schema::clinics;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        clinics::table
            .filter(clinics::cid.eq(cid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such clinic");
    }

    Ok(())
}

pub async fn assert_patient(pool: &web::Data<DbPool>, pid: u64) -> anyhow::Result<()> {
    use crate::schema::patients;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        patients::table
            .filter(patients::pid.eq(pid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such patient");
    }

    Ok(())
}

pub async fn assert_staff(pool: &web::Data<DbPool>, sid: String) -> anyhow::Result<()> {
    use crate::schema::staff;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        staff::table
            .filter(staff::sid.eq(sid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such staff");
    }

    Ok(())
}

pub async fn assert_staff_in_clinic(
    pool: &web::Data<DbPool>,
    sid: String,
    cid: u64,
) -> anyhow::Result<()> {
    use crate::schema::staff;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        staff::table
            .filter(staff::sid.eq(sid))
            .filter(staff::cid.eq(cid))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such staff in this clinic");
    }

    Ok(())
}
