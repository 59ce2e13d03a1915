//! Appointment status workflow.
//!
//! The board columns are fixed and ordered by ordinal. Button-driven
//! transitions only walk the forward chain
//! `Pending -> Scheduled -> Confirmed -> InProgress -> Completed`;
//! cancellation is an explicit action from any non-terminal status.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending = 0,
    Scheduled = 1,
    Confirmed = 2,
    InProgress = 3,
    Completed = 4,
    Cancelled = 5,
}

pub const BOARD_COLUMNS: [AppointmentStatus; 6] = [
    AppointmentStatus::Pending,
    AppointmentStatus::Scheduled,
    AppointmentStatus::Confirmed,
    AppointmentStatus::InProgress,
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
];

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(AppointmentStatus::Pending),
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "in_progress" => Some(AppointmentStatus::InProgress),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        BOARD_COLUMNS.get(ordinal as usize).copied()
    }

    /// The single legal button-driven transition, if any.
    pub fn next_forward(self) -> Option<Self> {
        match self {
            AppointmentStatus::Pending => Some(AppointmentStatus::Scheduled),
            AppointmentStatus::Scheduled => Some(AppointmentStatus::Confirmed),
            AppointmentStatus::Confirmed => Some(AppointmentStatus::InProgress),
            AppointmentStatus::InProgress => Some(AppointmentStatus::Completed),
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }
}

/// A status-change event, the only way board state moves between columns.
pub struct StatusChanged {
    pub id: u64,
    pub to: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for &status in BOARD_COLUMNS.iter() {
            assert_eq!(AppointmentStatus::from_ordinal(status.ordinal()), Some(status));
        }
        assert_eq!(AppointmentStatus::from_ordinal(6), None);
        assert_eq!(AppointmentStatus::from_ordinal(255), None);
    }

    #[test]
    fn str_roundtrip_fails_closed() {
        for &status in BOARD_COLUMNS.iter() {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AppointmentStatus::parse("Pending"), None);
        assert_eq!(AppointmentStatus::parse(""), None);
        assert_eq!(AppointmentStatus::parse("done"), None);
    }

    #[test]
    fn forward_chain_ends_at_completed() {
        let mut status = AppointmentStatus::Pending;
        let mut seen = vec![status];
        while let Some(next) = status.next_forward() {
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                AppointmentStatus::Pending,
                AppointmentStatus::Scheduled,
                AppointmentStatus::Confirmed,
                AppointmentStatus::InProgress,
                AppointmentStatus::Completed,
            ]
        );
    }

    #[test]
    fn terminals_have_no_forward_edge() {
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert_eq!(AppointmentStatus::Completed.next_forward(), None);
        assert_eq!(AppointmentStatus::Cancelled.next_forward(), None);
        for &status in BOARD_COLUMNS.iter() {
            if !status.is_terminal() {
                assert!(status.next_forward().is_some());
            }
        }
    }
}
