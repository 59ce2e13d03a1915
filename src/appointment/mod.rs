mod requests;
mod responses;

use crate::{
    board::layout,
    database::{assert, get_db_conn, last_insert_id},
    models::{
        appointments::{Appointment, NewAppointment, UpdateAppointment, KIND_FOLLOWUP, KIND_NEW},
        patients::PatientData,
        staff::StaffData,
    },
    protocol::SimpleResponse,
    staff::utils::get_staff_from_token,
    status::AppointmentStatus,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_appoint)
        .service(view_appoint)
        .service(save_appoint)
        .service(delete_appoint)
        .service(advance_appoint)
        .service(cancel_appoint)
        .service(day_schedule);
}

crate::post_funcs! {
    (search_appoint, "/search", SearchAppointRequest, SearchAppointResponse),
    (view_appoint, "/view", ViewAppointRequest, ViewAppointResponse),
    (save_appoint, "/save", SaveAppointRequest, SaveAppointResponse),
    (delete_appoint, "/delete", DeleteAppointRequest, SimpleResponse),
    (advance_appoint, "/advance", AdvanceAppointRequest, AdvanceAppointResponse),
    (cancel_appoint, "/cancel", CancelAppointRequest, SimpleResponse),
    (day_schedule, "/day_schedule", DayScheduleRequest, DayScheduleResponse),
}

async fn search_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    use crate::schema::{appointments, patients, staff};

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token, &pool).await?;

    let status = match info.status {
        Some(status) => {
            if AppointmentStatus::parse(&status).is_none() {
                bail!("Unknown status");
            }
            status
        }
        None => "all".to_string(),
    };
    let pid = info.pid.unwrap_or(0);
    let sid_pattern = crate::utils::get_str_pattern_opt(info.sid);
    let (start_date, end_date) =
        crate::utils::parse_date_pair_opt(info.start_date, info.end_date)?;

    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);
    let rows = web::block(move || {
        appointments::table
            .filter(appointments::cid.eq(cid))
            .filter(appointments::status.eq(&status).or(&status == "all"))
            .filter(appointments::pid.eq(pid).or(pid == 0))
            .filter(appointments::sid.like(sid_pattern))
            .filter(appointments::date.between(start_date, end_date))
            .inner_join(patients::table.on(appointments::pid.eq(patients::pid)))
            .inner_join(staff::table.on(appointments::sid.eq(staff::sid)))
            .order(appointments::date.desc())
            .then_order_by(appointments::start_time.desc())
            .offset(first_index)
            .limit(limit)
            .get_results::<(Appointment, PatientData, StaffData)>(&conn)
    })
    .await
    .context("DB error")?;

    let appos = rows
        .into_iter()
        .map(|(appo, patient, staff)| SearchAppointItem {
            id: appo.id,
            pid: appo.pid,
            patient_name: patient.name,
            sid: appo.sid,
            staff_name: staff.name,
            date: crate::utils::format_date_str(&appo.date),
            start_time: crate::utils::format_clock_str(&appo.start_time),
            end_time: crate::utils::format_clock_str(&appo.end_time),
            kind: appo.kind,
            status: appo.status,
        })
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        appointments: appos,
    })
}

async fn view_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewAppointRequest>,
) -> anyhow::Result<ViewAppointResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token, &pool).await?;

    let id = info.id;
    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    let appo = web::block(move || {
        appointments::table
            .filter(appointments::id.eq(id))
            .filter(appointments::cid.eq(cid))
            .get_result::<Appointment>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    let appo = match appo {
        Some(appo) => appo,
        None => bail!("No such appointment"),
    };

    Ok(ViewAppointResponse {
        success: true,
        err: "".to_string(),
        id: appo.id,
        pid: appo.pid,
        sid: appo.sid,
        date: crate::utils::format_date_str(&appo.date),
        start_time: crate::utils::format_clock_str(&appo.start_time),
        end_time: crate::utils::format_clock_str(&appo.end_time),
        kind: appo.kind,
        status: appo.status,
        notes: appo.notes.unwrap_or_default(),
    })
}

async fn save_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SaveAppointRequest>,
) -> anyhow::Result<SaveAppointResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token.clone(), &pool).await?;

    let date = crate::utils::parse_date_str(&info.date)?;
    let (start_time, end_time) =
        crate::utils::parse_clock_pair_str(&info.start_time, &info.end_time)?;
    if info.kind != KIND_NEW && info.kind != KIND_FOLLOWUP {
        bail!("Unknown appointment kind");
    }

    assert::assert_patient(&pool, info.pid).await?;
    assert::assert_staff_in_clinic(&pool, info.sid.clone(), session.cid).await?;

    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    let (id, status) = web::block(move || {
        conn.transaction(|| {
            match info.id {
                Some(id) => {
                    let appo = appointments::table
                        .filter(appointments::id.eq(id))
                        .filter(appointments::cid.eq(cid))
                        .get_result::<Appointment>(&conn)
                        .optional()
                        .context("DB error")?;
                    let appo = match appo {
                        Some(appo) => appo,
                        None => bail!("No such appointment"),
                    };

                    // edits never touch the status column
                    let data = UpdateAppointment {
                        pid: Some(info.pid),
                        sid: Some(info.sid),
                        date: Some(date),
                        start_time: Some(start_time),
                        end_time: Some(end_time),
                        kind: Some(info.kind),
                        status: None,
                        notes: info.notes,
                    };
                    diesel::update(appointments::table.filter(appointments::id.eq(id)))
                        .set(&data)
                        .execute(&conn)
                        .context("DB error")?;

                    Ok((id, appo.status))
                }
                None => {
                    let status = AppointmentStatus::Scheduled.as_str().to_string();
                    let data = NewAppointment {
                        pid: info.pid,
                        sid: info.sid,
                        cid,
                        date,
                        start_time,
                        end_time,
                        kind: info.kind,
                        status: status.clone(),
                        notes: info.notes,
                    };
                    diesel::insert_into(appointments::table)
                        .values(data)
                        .execute(&conn)
                        .context("DB error")?;

                    let id = diesel::select(last_insert_id)
                        .get_result::<u64>(&conn)
                        .context("DB error")?;

                    Ok((id, status))
                }
            }
        })
    })
    .await?;

    Ok(SaveAppointResponse {
        success: true,
        err: "".to_string(),
        id,
        status,
    })
}

async fn delete_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token, &pool).await?;

    let id = info.id;
    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let res = appointments::table
                .filter(appointments::id.eq(id))
                .filter(appointments::cid.eq(cid))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res == 0 {
                bail!("No such appointment");
            }

            diesel::delete(appointments::table.filter(appointments::id.eq(id)))
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn advance_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AdvanceAppointRequest>,
) -> anyhow::Result<AdvanceAppointResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token, &pool).await?;

    let id = info.id;
    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    let next = web::block(move || {
        conn.transaction(|| {
            let appo = appointments::table
                .filter(appointments::id.eq(id))
                .filter(appointments::cid.eq(cid))
                .get_result::<Appointment>(&conn)
                .optional()
                .context("DB error")?;
            let appo = match appo {
                Some(appo) => appo,
                None => bail!("No such appointment"),
            };

            let status = AppointmentStatus::parse(&appo.status)
                .ok_or_else(|| anyhow::anyhow!("Unknown status"))?;
            let next = match status.next_forward() {
                Some(next) => next,
                None => bail!("No forward transition from this status"),
            };

            diesel::update(appointments::table.filter(appointments::id.eq(id)))
                .set(appointments::status.eq(next.as_str()))
                .execute(&conn)
                .context("DB error")?;

            Ok(next)
        })
    })
    .await?;

    Ok(AdvanceAppointResponse {
        success: true,
        err: "".to_string(),
        status: next.as_str().to_string(),
    })
}

async fn cancel_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token, &pool).await?;

    let id = info.id;
    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let appo = appointments::table
                .filter(appointments::id.eq(id))
                .filter(appointments::cid.eq(cid))
                .get_result::<Appointment>(&conn)
                .optional()
                .context("DB error")?;
            let appo = match appo {
                Some(appo) => appo,
                None => bail!("No such appointment"),
            };

            match AppointmentStatus::parse(&appo.status) {
                Some(AppointmentStatus::Completed) => bail!("Appointment already completed"),
                Some(AppointmentStatus::Cancelled) => bail!("Appointment already cancelled"),
                Some(_) => {}
                None => bail!("Unknown status"),
            }

            diesel::update(appointments::table.filter(appointments::id.eq(id)))
                .set(appointments::status.eq(AppointmentStatus::Cancelled.as_str()))
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn day_schedule_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DayScheduleRequest>,
) -> anyhow::Result<DayScheduleResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let session = get_staff_from_token(info.login_token, &pool).await?;

    let date = crate::utils::parse_date_str(&info.date)?;

    let cid = session.cid;
    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        appointments::table
            .filter(appointments::cid.eq(cid))
            .order(appointments::start_time.asc())
            .get_results::<Appointment>(&conn)
    })
    .await
    .context("DB error")?;

    let appos = layout::day_view(&rows, date)
        .into_iter()
        .map(|appo| DayScheduleItem {
            id: appo.id,
            pid: appo.pid,
            sid: appo.sid.clone(),
            start_time: crate::utils::format_clock_str(&appo.start_time),
            end_time: crate::utils::format_clock_str(&appo.end_time),
            kind: appo.kind.clone(),
            status: appo.status.clone(),
        })
        .collect();

    Ok(DayScheduleResponse {
        success: true,
        err: "".to_string(),
        date: info.date,
        appointments: appos,
    })
}
