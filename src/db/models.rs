use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use std::fmt;

/// A roster member. Ids are assigned by the store on insert and never reused.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Villain {
    pub id: i64,
    pub name: String,
    pub other_name: String,
    pub picture: String,
    pub powers: String,
    pub level: i32,
}

impl fmt::Display for Villain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Villain{{id={}, name='{}', otherName='{}', picture='{}', powers='{}', level={}}}",
            self.id, self.name, self.other_name, self.picture, self.powers, self.level
        )
    }
}

/// One fight outcome. A denormalized snapshot of both combatants at fight
/// time, so later roster edits or deletions never rewrite history. Rows are
/// inserted once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    pub id: i64,
    pub fight_date: DateTime<Utc>,
    pub winner_name: String,
    pub winner_level: i32,
    pub winner_picture: String,
    pub winner_team: String,
    pub loser_name: String,
    pub loser_level: i32,
    pub loser_picture: String,
    pub loser_team: String,
}

impl fmt::Display for Fight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fight{{id={}, fightDate={}, winnerName='{}', winnerLevel={}, winnerPicture='{}', \
             winnerTeam='{}', loserName='{}', loserLevel={}, loserPicture='{}', loserTeam='{}'}}",
            self.id,
            self.fight_date,
            self.winner_name,
            self.winner_level,
            self.winner_picture,
            self.winner_team,
            self.loser_name,
            self.loser_level,
            self.loser_picture,
            self.loser_team
        )
    }
}
