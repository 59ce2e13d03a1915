//! Drop-controller half of the board's drag-and-drop. The browser side still
//! carries two stringly fields across the wire (appointment id and source
//! status ordinal); this parser fails closed on anything malformed instead of
//! letting a bad payload reach the mutation.

use crate::status::{AppointmentStatus, StatusChanged};

#[derive(Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub appointment_id: u64,
    pub source: AppointmentStatus,
}

impl DragPayload {
    /// Parses the raw payload fields. `None` on a non-numeric id, a
    /// non-numeric ordinal, or an ordinal outside the status enum.
    pub fn parse(id: &str, source_ordinal: &str) -> Option<Self> {
        let appointment_id = id.trim().parse::<u64>().ok()?;
        let ordinal = source_ordinal.trim().parse::<u8>().ok()?;
        let source = AppointmentStatus::from_ordinal(ordinal)?;
        Some(Self {
            appointment_id,
            source,
        })
    }

    /// A drop on the source column is a no-op; any other column produces the
    /// transition event. Deliberately permissive: the target does not have to
    /// be the forward-adjacent status (that rule only binds the card's
    /// primary action).
    pub fn drop_on(&self, target: AppointmentStatus) -> Option<StatusChanged> {
        if target == self.source {
            return None;
        }
        Some(StatusChanged {
            id: self.appointment_id,
            to: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_payload() {
        let payload = DragPayload::parse("42", "2").unwrap();
        assert_eq!(payload.appointment_id, 42);
        assert_eq!(payload.source, AppointmentStatus::Confirmed);
    }

    #[test]
    fn parse_fails_closed() {
        assert_eq!(DragPayload::parse("", "0"), None);
        assert_eq!(DragPayload::parse("abc", "0"), None);
        assert_eq!(DragPayload::parse("1", ""), None);
        assert_eq!(DragPayload::parse("1", "x"), None);
        assert_eq!(DragPayload::parse("1", "-1"), None);
        assert_eq!(DragPayload::parse("1", "6"), None);
        assert_eq!(DragPayload::parse("1", "255"), None);
    }

    #[test]
    fn drop_on_source_column_is_ignored() {
        let payload = DragPayload::parse("7", "1").unwrap();
        assert!(payload.drop_on(AppointmentStatus::Scheduled).is_none());
    }

    #[test]
    fn drop_on_other_column_yields_event() {
        let payload = DragPayload::parse("7", "1").unwrap();
        let event = payload.drop_on(AppointmentStatus::InProgress).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.to, AppointmentStatus::InProgress);
    }

    #[test]
    fn drop_may_jump_states() {
        // drag is not bound to the forward chain: pending straight to confirmed
        let payload = DragPayload::parse("1", "0").unwrap();
        let event = payload.drop_on(AppointmentStatus::Confirmed).unwrap();
        assert_eq!(event.id, 1);
        assert_eq!(event.to, AppointmentStatus::Confirmed);
    }
}
