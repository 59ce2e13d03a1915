#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveTime};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn assert_gender_str(gender: &str) -> anyhow::Result<()> {
    if gender != "male" && gender != "female" {
        bail!("Wrong format on 'gender'")
    }
    Ok(())
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref(), DATE_FMT).context("Wrong date format")
}

pub fn parse_date_pair_opt<S1: AsRef<str>, S2: AsRef<str>>(
    start_date: Option<S1>,
    end_date: Option<S2>,
) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let date_min = NaiveDate::from_ymd(1901, 1, 1);
    let date_max = NaiveDate::from_ymd(2901, 1, 1);
    let start_date = start_date.map_or(Ok(date_min), |d| {
        parse_date_str(d).context("Wrong format on 'start_date'")
    })?;
    let end_date = end_date.map_or(Ok(date_max), |d| {
        parse_date_str(d).context("Wrong format on 'end_date'")
    })?;
    Ok((start_date, end_date))
}

pub fn parse_clock_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveTime> {
    let s = s.as_ref();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .context("Wrong time format")
}

pub fn parse_clock_pair_str<S1: AsRef<str>, S2: AsRef<str>>(
    start_time: S1,
    end_time: S2,
) -> anyhow::Result<(NaiveTime, NaiveTime)> {
    let start_time = parse_clock_str(start_time).context("Wrong format on 'start_time'")?;
    let end_time = parse_clock_str(end_time).context("Wrong format on 'end_time'")?;
    if end_time <= start_time {
        bail!("Invalid time interval");
    }
    Ok((start_time, end_time))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    format!("{}", date.format(DATE_FMT))
}

pub fn format_clock_str(time: &NaiveTime) -> String {
    format!("{}", time.format("%H:%M"))
}

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

pub fn get_str_pattern_opt<S: AsRef<str>>(s: Option<S>) -> String {
    match s {
        Some(s) => get_str_pattern(s),
        None => "%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parse_roundtrip() {
        let date = parse_date_str("2024-01-15").unwrap();
        assert_eq!(format_date_str(&date), "2024-01-15");
        assert!(parse_date_str("15/01/2024").is_err());
    }

    #[test]
    fn clock_pair_requires_order() {
        let (start, end) = parse_clock_pair_str("09:00", "09:30").unwrap();
        assert!(end > start);
        assert!(parse_clock_pair_str("10:00", "09:30").is_err());
        assert!(parse_clock_pair_str("10:00", "10:00").is_err());
    }

    #[test]
    fn clock_parse_accepts_seconds() {
        assert_eq!(
            parse_clock_str("09:15:30").unwrap(),
            chrono::NaiveTime::from_hms(9, 15, 30)
        );
        assert!(parse_clock_str("9 am").is_err());
    }
}
