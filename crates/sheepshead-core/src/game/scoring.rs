use crate::game::buried::BuriedCards;
use crate::game::teams::{Team, Teams};
use crate::game::tracker::{TeamPoints, TrickTracker};
use crate::model::player::PlayerId;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::{Level, event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    Normal,
    Doubler,
    Leaster,
}

impl Scoring {
    pub const ALL: [Scoring; 3] = [Scoring::Normal, Scoring::Doubler, Scoring::Leaster];

    pub const fn as_str(self) -> &'static str {
        match self {
            Scoring::Normal => "normal",
            Scoring::Doubler => "doubler",
            Scoring::Leaster => "leaster",
        }
    }

    const fn multiplier(self) -> i32 {
        match self {
            Scoring::Normal | Scoring::Leaster => 1,
            Scoring::Doubler => 2,
        }
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scoring {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Scoring::Normal),
            "doubler" => Ok(Scoring::Doubler),
            "leaster" => Ok(Scoring::Leaster),
            _ => Err(ScoringError::UnknownMode(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub delta: i32,
}

impl PlayerScore {
    pub const fn new(player: PlayerId, delta: i32) -> Self {
        Self { player, delta }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("cannot calculate points when teams are unknown")]
    TeamsUnknown,
    #[error("could not determine winner for {scoring} scoring")]
    NoWinnerDeterminable { scoring: Scoring },
    #[error("a {winners}-player winning team requires a known partner")]
    MissingPartner { winners: usize },
    #[error("two-team scoring requires a known picker")]
    MissingPicker,
    #[error("picker {0} is not a member of any team")]
    PickerNotOnTeam(PlayerId),
    #[error("leaster hands have no scoring table yet")]
    LeasterUnscored,
    #[error("unknown scoring mode '{0}'")]
    UnknownMode(String),
}

/// Turns a finished hand into team standings and per-player deltas.
///
/// Teams must already be settled: constructing a calculator without them is
/// an error rather than something checked on first use.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCalculator<'a> {
    scoring: Scoring,
    tracker: &'a TrickTracker,
    buried: &'a BuriedCards,
    teams: &'a Teams,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(
        scoring: Scoring,
        tracker: &'a TrickTracker,
        buried: &'a BuriedCards,
        teams: Option<&'a Teams>,
    ) -> Result<Self, ScoringError> {
        let teams = teams.ok_or(ScoringError::TeamsUnknown)?;
        Ok(Self {
            scoring,
            tracker,
            buried,
            teams,
        })
    }

    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Team tallies ranked by points, highest first. Equal tallies keep
    /// team-list order.
    ///
    /// Outside a leaster the buried cards belong to the picker's team, so a
    /// team list that does not seat the picker is rejected.
    pub fn determine_points(&self) -> Result<Vec<TeamPoints>, ScoringError> {
        let mut tally = self.tracker.calculate_current_points(self.teams);

        match self.scoring {
            Scoring::Leaster => {
                // No team owns the buried cards in a leaster yet.
            }
            Scoring::Normal | Scoring::Doubler if tally.is_empty() => {}
            Scoring::Normal | Scoring::Doubler => {
                let picker = self.teams.picker().ok_or(ScoringError::MissingPicker)?;
                let Some(entry) = tally.iter_mut().find(|entry| entry.team.contains(picker)) else {
                    return Err(ScoringError::PickerNotOnTeam(picker));
                };
                entry.points += self.buried.points();
            }
        }

        tally.sort_by(|a, b| b.points.cmp(&a.points));
        Ok(tally)
    }

    pub fn determine_winner(&self) -> Result<Team, ScoringError> {
        match self.scoring {
            Scoring::Leaster => self
                .tracker
                .tricks()
                .iter()
                .filter(|trick| trick.was_taken())
                .min_by_key(|trick| trick.points())
                .and_then(|trick| trick.winner())
                .map(|taker| Team::new(taker.to_string(), vec![taker]))
                .ok_or(ScoringError::NoWinnerDeterminable {
                    scoring: self.scoring,
                }),
            Scoring::Normal | Scoring::Doubler => self
                .determine_points()?
                .into_iter()
                .next()
                .map(|entry| entry.team)
                .ok_or(ScoringError::NoWinnerDeterminable {
                    scoring: self.scoring,
                }),
        }
    }

    pub fn determine_score(&self) -> Result<Vec<PlayerScore>, ScoringError> {
        match self.scoring {
            Scoring::Normal | Scoring::Doubler => {
                let ranked = self.determine_points()?;
                let multiplier = self.scoring.multiplier();
                Ok(self
                    .score_two_teams(&ranked)?
                    .into_iter()
                    .map(|score| PlayerScore::new(score.player, score.delta * multiplier))
                    .collect())
            }
            Scoring::Leaster => Err(ScoringError::LeasterUnscored),
        }
    }

    fn score_two_teams(&self, ranked: &[TeamPoints]) -> Result<Vec<PlayerScore>, ScoringError> {
        let [winning, losing] = ranked else {
            event!(
                target: "sheepshead_core::scoring",
                Level::DEBUG,
                teams = ranked.len(),
                "table only scores two-team hands"
            );
            return Ok(Vec::new());
        };

        let winners = &winning.team.members;
        let losers = &losing.team.members;
        let picker_won = self
            .teams
            .picker()
            .is_some_and(|picker| winning.team.contains(picker));

        event!(
            target: "sheepshead_core::scoring",
            Level::DEBUG,
            winning_team = %winning.team.label,
            winning_points = winning.points,
            losing_points = losing.points,
            winners = winners.len(),
            picker_won,
            "scoring two-team hand"
        );

        let picker = || self.teams.picker().ok_or(ScoringError::MissingPicker);
        let partner = || {
            self.teams.partner().ok_or(ScoringError::MissingPartner {
                winners: winners.len(),
            })
        };

        let mut scores = Vec::with_capacity(winners.len() + losers.len());
        match winners.len() {
            1 => {
                scores.push(PlayerScore::new(picker()?, 4));
                scores.extend(losers.iter().map(|&p| PlayerScore::new(p, -1)));
            }
            2 => {
                scores.push(PlayerScore::new(picker()?, 2));
                scores.push(PlayerScore::new(partner()?, 1));
                scores.extend(losers.iter().map(|&p| PlayerScore::new(p, -1)));
            }
            3 => {
                scores.push(PlayerScore::new(picker()?, -2));
                scores.push(PlayerScore::new(partner()?, -1));
                scores.extend(winners.iter().map(|&p| PlayerScore::new(p, 1)));
            }
            4 => {
                scores.push(PlayerScore::new(picker()?, -4));
                scores.extend(winners.iter().map(|&p| PlayerScore::new(p, 1)));
            }
            other => {
                event!(
                    target: "sheepshead_core::scoring",
                    Level::DEBUG,
                    winners = other,
                    "no table row for winning team size"
                );
            }
        }

        Ok(scores)
    }
}
