pub mod card;
pub mod dnd;
pub mod layout;

mod requests;
mod responses;

use std::collections::HashMap;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    models::{appointments::Appointment, patients::PatientData},
    staff::utils::get_staff_from_token,
    status::{AppointmentStatus, BOARD_COLUMNS},
    DbPool,
};

use self::{
    dnd::DragPayload,
    layout::BoardState,
    requests::*,
    responses::*,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(view_board).service(drop_appoint);
}

crate::post_funcs! {
    (view_board, "/view", ViewBoardRequest, ViewBoardResponse),
    (drop_appoint, "/drop", DropRequest, DropResponse),
}

async fn view_board_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewBoardRequest>,
) -> anyhow::Result<ViewBoardResponse> {
    use crate::schema::{appointments, patients};

    let info = info.into_inner();
    let staff = get_staff_from_token(info.login_token, &pool).await?;

    let (date_min, date_max) = match info.date {
        Some(date) => {
            let date = crate::utils::parse_date_str(date)?;
            (date, date)
        }
        None => (
            NaiveDate::from_ymd(1901, 1, 1),
            NaiveDate::from_ymd(2901, 1, 1),
        ),
    };

    let cid = staff.cid;
    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        appointments::table
            .filter(appointments::cid.eq(cid))
            .filter(appointments::date.between(date_min, date_max))
            .inner_join(patients::table.on(appointments::pid.eq(patients::pid)))
            .order(appointments::id.asc())
            .get_results::<(Appointment, PatientData)>(&conn)
    })
    .await
    .context("DB error")?;

    let patient_names: HashMap<u64, String> = rows
        .iter()
        .map(|(_, patient)| (patient.pid, patient.name.clone()))
        .collect();
    let appos: Vec<Appointment> = rows.into_iter().map(|(appo, _)| appo).collect();

    let total = appos.len();
    let buckets = layout::group_by_status(&appos);
    let columns = BOARD_COLUMNS
        .iter()
        .zip(buckets.iter())
        .map(|(&status, bucket)| BoardColumnItem {
            status: status.as_str().to_string(),
            count: bucket.len() as u64,
            ratio: layout::ratio_percent(bucket.len(), total),
            cards: bucket
                .iter()
                .map(|appo| BoardCardItem {
                    id: appo.id,
                    pid: appo.pid,
                    patient_name: patient_names.get(&appo.pid).cloned().unwrap_or_default(),
                    sid: appo.sid.clone(),
                    date: crate::utils::format_date_str(&appo.date),
                    start_time: crate::utils::format_clock_str(&appo.start_time),
                    end_time: crate::utils::format_clock_str(&appo.end_time),
                    kind: appo.kind.clone(),
                    actions: card::actions_for(status)
                        .into_iter()
                        .map(|action| action.as_str().to_string())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok(ViewBoardResponse {
        success: true,
        err: "".to_string(),
        total: total as u64,
        columns,
    })
}

async fn drop_appoint_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DropRequest>,
) -> anyhow::Result<DropResponse> {
    use crate::schema::appointments;

    let info = info.into_inner();
    let staff = get_staff_from_token(info.login_token, &pool).await?;

    let payload = match DragPayload::parse(&info.appointment_id, &info.source_status) {
        Some(payload) => payload,
        None => {
            log::warn!(
                "rejected drag payload: id={:?} source={:?}",
                info.appointment_id,
                info.source_status
            );
            bail!("Malformed drag payload");
        }
    };
    let target = AppointmentStatus::from_ordinal(info.target_status)
        .ok_or_else(|| anyhow::anyhow!("Unknown target column"))?;
    let event = match payload.drop_on(target) {
        Some(event) => event,
        None => bail!("Drop on the source column"),
    };

    let cid = staff.cid;
    let conn = get_db_conn(&pool)?;
    let state = web::block(move || {
        conn.transaction(|| {
            let rows = appointments::table
                .filter(appointments::cid.eq(cid))
                .order(appointments::id.asc())
                .get_results::<Appointment>(&conn)
                .context("DB error")?;
            if !rows.iter().any(|appo| appo.id == event.id) {
                bail!("No such appointment");
            }

            diesel::update(appointments::table.filter(appointments::id.eq(event.id)))
                .set(appointments::status.eq(event.to.as_str()))
                .execute(&conn)
                .context("DB error")?;

            let mut state = BoardState::new(&rows);
            state.apply(&event);
            Ok(state)
        })
    })
    .await?;

    let columns = BOARD_COLUMNS
        .iter()
        .map(|&status| DropColumnItem {
            status: status.as_str().to_string(),
            ids: state.column(status).to_vec(),
        })
        .collect();

    Ok(DropResponse {
        success: true,
        err: "".to_string(),
        columns,
    })
}
