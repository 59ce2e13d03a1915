//! Pure board computations: the grouped-by-status partition, the per-column
//! progress ratio, the day-schedule slice and the board-state reducer. None
//! of these touch the pool; handlers recompute them from the latest rows.

use chrono::NaiveDate;

use crate::models::appointments::Appointment;
use crate::status::{AppointmentStatus, StatusChanged};

/// Partitions the appointment list into one bucket per board column, keeping
/// input order inside each bucket. Rows with a status string the enum does
/// not know are skipped with a warning; the DB only ever stores known values.
pub fn group_by_status(appos: &[Appointment]) -> [Vec<&Appointment>; 6] {
    let mut buckets: [Vec<&Appointment>; 6] = Default::default();
    for appo in appos {
        match AppointmentStatus::parse(&appo.status) {
            Some(status) => buckets[status.ordinal() as usize].push(appo),
            None => log::warn!("appointment {} has unknown status '{}'", appo.id, appo.status),
        }
    }
    buckets
}

/// Progress-indicator width for one column, as a percentage in [0, 100].
/// An empty board yields 0 for every column.
pub fn ratio_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 100.0 / total as f64).max(0.0).min(100.0)
}

/// The day-schedule view: exact-date slice of the same collection, orthogonal
/// to the status grouping.
pub fn day_view(appos: &[Appointment], date: NaiveDate) -> Vec<&Appointment> {
    appos.iter().filter(|appo| appo.date == date).collect()
}

/// Column membership by appointment id, advanced by `StatusChanged` events
/// instead of a refetch.
pub struct BoardState {
    columns: [Vec<u64>; 6],
}

impl BoardState {
    pub fn new(appos: &[Appointment]) -> Self {
        let mut columns: [Vec<u64>; 6] = Default::default();
        for (bucket, column) in group_by_status(appos).iter().zip(columns.iter_mut()) {
            column.extend(bucket.iter().map(|appo| appo.id));
        }
        Self { columns }
    }

    pub fn column(&self, status: AppointmentStatus) -> &[u64] {
        &self.columns[status.ordinal() as usize]
    }

    /// Moves the card into the event's target column. The id is removed from
    /// whichever column held it, so the partition invariant is preserved.
    pub fn apply(&mut self, event: &StatusChanged) {
        for column in self.columns.iter_mut() {
            column.retain(|&id| id != event.id);
        }
        self.columns[event.to.ordinal() as usize].push(event.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::BOARD_COLUMNS;
    use proptest::prelude::*;

    fn make_appo(id: u64, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            pid: 1,
            sid: "s-1".to_string(),
            cid: 1,
            date: NaiveDate::from_ymd(2024, 1, 15),
            start_time: chrono::NaiveTime::from_hms(9, 0, 0),
            end_time: chrono::NaiveTime::from_hms(9, 30, 0),
            kind: "new".to_string(),
            status: status.as_str().to_string(),
            notes: None,
        }
    }

    #[test]
    fn grouping_example() {
        let appos = vec![
            make_appo(1, AppointmentStatus::Pending),
            make_appo(2, AppointmentStatus::Scheduled),
            make_appo(3, AppointmentStatus::Pending),
        ];
        let buckets = group_by_status(&appos);

        let ids = |status: AppointmentStatus| -> Vec<u64> {
            buckets[status.ordinal() as usize]
                .iter()
                .map(|appo| appo.id)
                .collect()
        };
        assert_eq!(ids(AppointmentStatus::Pending), vec![1, 3]);
        assert_eq!(ids(AppointmentStatus::Scheduled), vec![2]);
        assert!(ids(AppointmentStatus::Confirmed).is_empty());
        assert!(ids(AppointmentStatus::InProgress).is_empty());
        assert!(ids(AppointmentStatus::Completed).is_empty());
        assert!(ids(AppointmentStatus::Cancelled).is_empty());
    }

    #[test]
    fn empty_board_has_zero_ratios() {
        let buckets = group_by_status(&[]);
        for (bucket, _) in buckets.iter().zip(BOARD_COLUMNS.iter()) {
            assert_eq!(ratio_percent(bucket.len(), 0), 0.0);
        }
    }

    #[test]
    fn day_view_keeps_exact_date_only() {
        let mut first = make_appo(1, AppointmentStatus::Scheduled);
        first.date = NaiveDate::from_ymd(2024, 1, 15);
        let mut second = make_appo(2, AppointmentStatus::Scheduled);
        second.date = NaiveDate::from_ymd(2024, 1, 16);
        let appos = vec![first, second];

        let day = day_view(&appos, NaiveDate::from_ymd(2024, 1, 15));
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].id, 1);
    }

    #[test]
    fn reducer_moves_card_between_columns() {
        let appos = vec![
            make_appo(1, AppointmentStatus::Pending),
            make_appo(2, AppointmentStatus::Scheduled),
        ];
        let mut state = BoardState::new(&appos);
        assert_eq!(state.column(AppointmentStatus::Pending), &[1]);

        state.apply(&StatusChanged {
            id: 1,
            to: AppointmentStatus::Confirmed,
        });
        assert!(state.column(AppointmentStatus::Pending).is_empty());
        assert_eq!(state.column(AppointmentStatus::Confirmed), &[1]);
        assert_eq!(state.column(AppointmentStatus::Scheduled), &[2]);

        let total: usize = BOARD_COLUMNS
            .iter()
            .map(|&status| state.column(status).len())
            .sum();
        assert_eq!(total, 2);
    }

    proptest! {
        #[test]
        fn grouping_is_a_partition(ordinals in proptest::collection::vec(0u8..6, 0..64)) {
            let appos: Vec<_> = ordinals
                .iter()
                .enumerate()
                .map(|(i, &ordinal)| {
                    make_appo(i as u64 + 1, AppointmentStatus::from_ordinal(ordinal).unwrap())
                })
                .collect();
            let buckets = group_by_status(&appos);

            // no omissions, no duplicates
            let mut seen: Vec<u64> = buckets
                .iter()
                .flat_map(|bucket| bucket.iter().map(|appo| appo.id))
                .collect();
            seen.sort_unstable();
            let mut expected: Vec<u64> = appos.iter().map(|appo| appo.id).collect();
            expected.sort_unstable();
            prop_assert_eq!(seen, expected);

            // every card sits in the column matching its status
            for (idx, bucket) in buckets.iter().enumerate() {
                for appo in bucket {
                    let status = AppointmentStatus::parse(&appo.status).unwrap();
                    prop_assert_eq!(status.ordinal() as usize, idx);
                }
            }
        }

        #[test]
        fn ratio_is_clamped(count in 0usize..2000, total in 0usize..1000) {
            let ratio = ratio_percent(count, total);
            prop_assert!(ratio >= 0.0);
            prop_assert!(ratio <= 100.0);
        }
    }
}
