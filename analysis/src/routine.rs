use common::{PlayerInfo, Side};

use crate::repository::{side_players, MatchRepository};
use crate::{Error, Section};

/// Window length used by consumers that do not pick their own.
pub const DEFAULT_ROUTINE_LENGTH: usize = 5;

pub const TEAM_SIZE: usize = 5;

/// One player's movement within one window of frames. Points are appended
/// in frame order and never removed.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Routine {
    points: Vec<(f64, f64)>,
}

impl Routine {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push((x, y));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }
}

/// Per-player routine lists for one team, one slot per roster player.
///
/// The arity is fixed at construction; there is no way to add or remove
/// slots afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeamRoutines {
    routines: [Vec<Routine>; TEAM_SIZE],
}

impl TeamRoutines {
    /// One inner list per player, in roster slot order. Anything other than
    /// exactly [`TEAM_SIZE`] entries is rejected.
    pub fn from_routine_lists(lists: Vec<Vec<Routine>>) -> Result<Self, Error> {
        let routines = <[Vec<Routine>; TEAM_SIZE]>::try_from(lists)
            .map_err(|lists| Error::RosterSizeMismatch {
                actual: lists.len(),
            })?;
        Ok(Self { routines })
    }

    pub fn get_player_routines(&self, player_index: usize) -> Result<&[Routine], Error> {
        self.routines
            .get(player_index)
            .map(|routines| routines.as_slice())
            .ok_or(Error::OutOfRange {
                section: Section::Roster,
                index: player_index,
                len: TEAM_SIZE,
            })
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BothTeamsRoutines {
    pub t_side: TeamRoutines,
    pub ct_side: TeamRoutines,
}

/// Partitions the round's frames into consecutive windows of
/// `window_length` frames (the last window may be shorter) and collects one
/// [`Routine`] per roster player per window.
///
/// The roster for each side is the set of names in the round's first frame,
/// in order of first appearance. A roster name missing from a later frame's
/// list is skipped for that frame; names outside the roster are ignored.
pub fn build_team_routines(
    repository: &MatchRepository,
    round_index: usize,
    window_length: usize,
) -> Result<BothTeamsRoutines, Error> {
    if window_length == 0 {
        return Err(Error::InvalidArgument("window length must be at least 1"));
    }

    let _span =
        tracing::debug_span!("TeamRoutines", round = round_index, window = window_length).entered();

    let frames = repository.frames(round_index)?;

    let mut t_side =
        SideRoutines::from_roster(repository.player_info_list(round_index, 0, Side::T)?);
    let mut ct_side =
        SideRoutines::from_roster(repository.player_info_list(round_index, 0, Side::CT)?);

    for (chunk_index, chunk) in frames.chunks(window_length).enumerate() {
        let _chunk_guard = tracing::trace_span!("Chunk", index = chunk_index).entered();

        t_side.start_window();
        ct_side.start_window();

        for frame in chunk {
            for player in side_players(frame, Side::T)? {
                t_side.record(player);
            }
            for player in side_players(frame, Side::CT)? {
                ct_side.record(player);
            }
        }
    }

    Ok(BothTeamsRoutines {
        t_side: t_side.into_team()?,
        ct_side: ct_side.into_team()?,
    })
}

struct SideRoutines {
    roster: Vec<(String, Vec<Routine>)>,
}

impl SideRoutines {
    fn from_roster(players: &[PlayerInfo]) -> Self {
        let mut roster: Vec<(String, Vec<Routine>)> = Vec::with_capacity(players.len());
        for player in players {
            if roster.iter().any(|(name, _)| name == &player.name) {
                continue;
            }
            roster.push((player.name.clone(), Vec::new()));
        }
        Self { roster }
    }

    fn start_window(&mut self) {
        for (_, routines) in self.roster.iter_mut() {
            routines.push(Routine::new());
        }
    }

    fn record(&mut self, player: &PlayerInfo) {
        let entry = self
            .roster
            .iter_mut()
            .find(|(name, _)| name == &player.name);
        if let Some((_, routines)) = entry {
            if let Some(routine) = routines.last_mut() {
                routine.add_point(player.x, player.y);
            }
        }
    }

    fn into_team(self) -> Result<TeamRoutines, Error> {
        TeamRoutines::from_routine_lists(
            self.roster.into_iter().map(|(_, routines)| routines).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn routine(points: &[(f64, f64)]) -> Routine {
        let mut routine = Routine::new();
        for (x, y) in points {
            routine.add_point(*x, *y);
        }
        routine
    }

    #[test]
    fn team_routines_requires_five_slots() {
        for count in [0, 1, 4, 6] {
            let lists = vec![Vec::new(); count];
            assert_eq!(
                TeamRoutines::from_routine_lists(lists),
                Err(Error::RosterSizeMismatch { actual: count }),
            );
        }

        assert!(TeamRoutines::from_routine_lists(vec![Vec::new(); 5]).is_ok());
    }

    #[test]
    fn player_routines_index_bounds() {
        let team = TeamRoutines::from_routine_lists(vec![
            vec![routine(&[(0.0, 0.0)])],
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        ])
        .unwrap();

        assert_eq!(team.get_player_routines(0).unwrap().len(), 1);
        assert_eq!(team.get_player_routines(4).unwrap().len(), 0);
        assert_eq!(
            team.get_player_routines(5),
            Err(Error::OutOfRange {
                section: Section::Roster,
                index: 5,
                len: TEAM_SIZE,
            }),
        );
    }

    #[test]
    fn routine_axis_views() {
        let routine = routine(&[(1.0, 2.0), (3.0, 4.0)]);

        assert_eq!(routine.xs().collect::<Vec<_>>(), vec![1.0, 3.0]);
        assert_eq!(routine.ys().collect::<Vec<_>>(), vec![2.0, 4.0]);
        assert_eq!(routine.len(), 2);
        assert!(!routine.is_empty());
    }
}
