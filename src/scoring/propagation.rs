use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

use crate::db::{rosters, score_credits, scores};
use crate::models::roster::RosterSlot;
use crate::scoring::calculator::PointTotals;

/// Amount credited to one user's cumulative score in one league
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, Copy, PartialEq)]
pub struct ScoreCredit {
    pub user_id: Uuid,
    pub league_id: Uuid,
    pub points: f64,
}

/// Turn the slots holding a player into per-user credits.
///
/// Each slot contributes the total matching its role. Slots of the same user
/// in the same league are summed into one credit.
pub fn credits_for_slots(slots: &[RosterSlot], points: &PointTotals) -> Vec<ScoreCredit> {
    let mut per_user: BTreeMap<(Uuid, Uuid), f64> = BTreeMap::new();

    for slot in slots {
        *per_user.entry((slot.user_id, slot.league_id)).or_insert(0.0) += points.for_role(slot.role);
    }

    per_user
        .into_iter()
        .map(|((user_id, league_id), points)| ScoreCredit { user_id, league_id, points })
        .collect()
}

/// Ledger changes that take every user from `previous` credits to `current` ones.
///
/// Users only in `previous` get their credit taken back, users only in
/// `current` get the full new credit. Zero changes are left out.
pub fn ledger_changes(previous: &[ScoreCredit], current: &[ScoreCredit]) -> Vec<ScoreCredit> {
    let mut per_user: BTreeMap<(Uuid, Uuid), f64> = BTreeMap::new();

    for credit in previous {
        *per_user.entry((credit.user_id, credit.league_id)).or_insert(0.0) -= credit.points;
    }
    for credit in current {
        *per_user.entry((credit.user_id, credit.league_id)).or_insert(0.0) += credit.points;
    }

    per_user
        .into_iter()
        .filter(|(_, points)| *points != 0.0)
        .map(|((user_id, league_id), points)| ScoreCredit { user_id, league_id, points })
        .collect()
}

/// Credit the rosters holding `player_id` in `league_id` for one match.
///
/// Whatever an earlier submission of the same match credited is reversed for
/// the users who received it, then the slots holding the player now get the
/// full `points`. Runs on the caller's connection so it joins the caller's
/// transaction; every ledger change is an atomic increment.
#[tracing::instrument(name = "Propagate player points to rosters", skip(conn))]
pub async fn propagate(
    conn: &mut PgConnection,
    match_id: Uuid,
    player_id: Uuid,
    league_id: Uuid,
    points: PointTotals,
) -> Result<Vec<ScoreCredit>, sqlx::Error> {
    let slots = rosters::find_roster_slots_by_player_and_league(&mut *conn, player_id, league_id).await?;
    let current = credits_for_slots(&slots, &points);
    let previous = score_credits::find_credits_for_match_player(&mut *conn, match_id, player_id).await?;

    let changes = ledger_changes(&previous, &current);
    for change in &changes {
        scores::add_to_user_league_score(&mut *conn, change.user_id, change.league_id, change.points).await?;
    }
    score_credits::replace_credits_for_match_player(&mut *conn, match_id, player_id, &current).await?;

    tracing::info!(
        "Credited {} user(s) from {} roster slot(s) for player {}; {} ledger row(s) changed",
        current.len(), slots.len(), player_id, changes.len()
    );

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scoring::Role;
    use chrono::Utc;

    fn slot(user_id: Uuid, league_id: Uuid, player_id: Uuid, role: Role) -> RosterSlot {
        RosterSlot {
            id: Uuid::new_v4(),
            user_id,
            league_id,
            role,
            player_id: Some(player_id),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn slot_role_selects_the_credited_total() {
        let league = Uuid::new_v4();
        let player = Uuid::new_v4();
        let field_owner = Uuid::new_v4();
        let keeper_owner = Uuid::new_v4();
        let slots = vec![
            slot(field_owner, league, player, Role::Field),
            slot(keeper_owner, league, player, Role::Goalkeeper),
        ];

        let credits = credits_for_slots(&slots, &PointTotals::new(13.0, 2.5));

        assert_eq!(credits.len(), 2);
        let field_credit = credits.iter().find(|c| c.user_id == field_owner).unwrap();
        let keeper_credit = credits.iter().find(|c| c.user_id == keeper_owner).unwrap();
        assert_eq!(field_credit.points, 13.0);
        assert_eq!(keeper_credit.points, 2.5);
        assert!(credits.iter().all(|c| c.league_id == league));
    }

    #[test]
    fn slots_of_one_user_are_summed() {
        let league = Uuid::new_v4();
        let user = Uuid::new_v4();
        let player = Uuid::new_v4();
        let slots = vec![
            slot(user, league, player, Role::Field),
            slot(user, league, player, Role::Goalkeeper),
        ];

        let credits = credits_for_slots(&slots, &PointTotals::new(4.0, 1.0));

        assert_eq!(credits, vec![ScoreCredit { user_id: user, league_id: league, points: 5.0 }]);
    }

    #[test]
    fn no_slots_means_no_credits() {
        assert!(credits_for_slots(&[], &PointTotals::new(10.0, 10.0)).is_empty());
    }

    #[test]
    fn negative_deltas_are_credited_as_is() {
        let league = Uuid::new_v4();
        let user = Uuid::new_v4();
        let slots = vec![slot(user, league, Uuid::new_v4(), Role::Field)];

        let credits = credits_for_slots(&slots, &PointTotals::new(-3.0, 0.0));

        assert_eq!(credits[0].points, -3.0);
    }

    #[test]
    fn first_submission_credits_current_holders_in_full() {
        let league = Uuid::new_v4();
        let user = Uuid::new_v4();
        let current = vec![ScoreCredit { user_id: user, league_id: league, points: 15.0 }];

        assert_eq!(ledger_changes(&[], &current), current);
    }

    #[test]
    fn dropped_holder_loses_credit_and_new_holder_gets_full_total() {
        let league = Uuid::new_v4();
        let dropped = Uuid::new_v4();
        let picked_up = Uuid::new_v4();
        let previous = vec![ScoreCredit { user_id: dropped, league_id: league, points: 15.0 }];
        let current = vec![ScoreCredit { user_id: picked_up, league_id: league, points: 5.0 }];

        let changes = ledger_changes(&previous, &current);

        assert_eq!(changes.len(), 2);
        let change_for = |user| changes.iter().find(|c| c.user_id == user).map(|c| c.points);
        assert_eq!(change_for(dropped), Some(-15.0));
        assert_eq!(change_for(picked_up), Some(5.0));
    }

    #[test]
    fn unchanged_credits_produce_no_ledger_changes() {
        let league = Uuid::new_v4();
        let credits = vec![
            ScoreCredit { user_id: Uuid::new_v4(), league_id: league, points: 5.77 },
            ScoreCredit { user_id: Uuid::new_v4(), league_id: league, points: -2.0 },
        ];

        assert!(ledger_changes(&credits, &credits).is_empty());
    }

    #[test]
    fn kept_holder_is_charged_only_the_difference() {
        let league = Uuid::new_v4();
        let user = Uuid::new_v4();
        let previous = vec![ScoreCredit { user_id: user, league_id: league, points: 15.0 }];
        let current = vec![ScoreCredit { user_id: user, league_id: league, points: 8.0 }];

        assert_eq!(
            ledger_changes(&previous, &current),
            vec![ScoreCredit { user_id: user, league_id: league, points: -7.0 }]
        );
    }
}
