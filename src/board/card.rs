//! Card action policy: one primary action per status (the single forward
//! transition) plus the two secondary actions every card carries.

use crate::status::AppointmentStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Schedule,
    Confirm,
    Start,
    Complete,
    Edit,
    StartVisit,
}

impl CardAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CardAction::Schedule => "schedule",
            CardAction::Confirm => "confirm",
            CardAction::Start => "start",
            CardAction::Complete => "complete",
            CardAction::Edit => "edit",
            CardAction::StartVisit => "start_visit",
        }
    }
}

fn primary_action(status: AppointmentStatus) -> Option<CardAction> {
    match status {
        AppointmentStatus::Pending => Some(CardAction::Schedule),
        AppointmentStatus::Scheduled => Some(CardAction::Confirm),
        AppointmentStatus::Confirmed => Some(CardAction::Start),
        AppointmentStatus::InProgress => Some(CardAction::Complete),
        AppointmentStatus::Completed | AppointmentStatus::Cancelled => None,
    }
}

pub fn actions_for(status: AppointmentStatus) -> Vec<CardAction> {
    let mut actions = Vec::with_capacity(3);
    if let Some(primary) = primary_action(status) {
        actions.push(primary);
    }
    actions.push(CardAction::Edit);
    actions.push(CardAction::StartVisit);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::BOARD_COLUMNS;

    #[test]
    fn primary_matches_forward_transition() {
        assert_eq!(
            actions_for(AppointmentStatus::Pending)[0],
            CardAction::Schedule
        );
        assert_eq!(
            actions_for(AppointmentStatus::Scheduled)[0],
            CardAction::Confirm
        );
        assert_eq!(
            actions_for(AppointmentStatus::Confirmed)[0],
            CardAction::Start
        );
        assert_eq!(
            actions_for(AppointmentStatus::InProgress)[0],
            CardAction::Complete
        );
    }

    #[test]
    fn exactly_one_primary_per_nonterminal() {
        let primaries = [
            CardAction::Schedule,
            CardAction::Confirm,
            CardAction::Start,
            CardAction::Complete,
        ];
        for &status in BOARD_COLUMNS.iter() {
            let actions = actions_for(status);
            let count = actions
                .iter()
                .filter(|action| primaries.contains(action))
                .count();
            assert_eq!(count, if status.is_terminal() { 0 } else { 1 });
        }
    }

    #[test]
    fn secondary_actions_always_present() {
        for &status in BOARD_COLUMNS.iter() {
            let actions = actions_for(status);
            assert!(actions.contains(&CardAction::Edit));
            assert!(actions.contains(&CardAction::StartVisit));
        }
    }

    #[test]
    fn terminal_cards_expose_secondaries_only() {
        assert_eq!(
            actions_for(AppointmentStatus::Completed),
            vec![CardAction::Edit, CardAction::StartVisit]
        );
        assert_eq!(
            actions_for(AppointmentStatus::Cancelled),
            vec![CardAction::Edit, CardAction::StartVisit]
        );
    }
}
