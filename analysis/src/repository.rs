use common::{
    BombInfo, Frame, GrenadeEvent, MatchRecord, PlayerInfo, Round, RoundEndReason, Side,
};

use crate::{Error, Section};

/// Immutable, bounds-checked view over a validated [`MatchRecord`].
///
/// Every operation is a pure read; the record is never mutated after
/// construction, so a repository can be shared freely between callers.
pub struct MatchRepository {
    data: MatchRecord,
}

impl MatchRepository {
    pub fn new(data: MatchRecord) -> Self {
        Self { data }
    }

    pub fn map_name(&self) -> &str {
        &self.data.map_name
    }

    /// A record without a round section counts as zero rounds for indexing.
    fn rounds(&self) -> &[Round] {
        self.data.game_rounds.as_deref().unwrap_or(&[])
    }

    pub fn round_count(&self) -> usize {
        self.rounds().len()
    }

    pub fn round(&self, round_index: usize) -> Result<&Round, Error> {
        let rounds = self.rounds();
        rounds.get(round_index).ok_or(Error::OutOfRange {
            section: Section::Rounds,
            index: round_index,
            len: rounds.len(),
        })
    }

    pub(crate) fn frames(&self, round_index: usize) -> Result<&[Frame], Error> {
        self.round(round_index)?
            .frames
            .as_deref()
            .ok_or(Error::DataAbsent(Section::Frames))
    }

    pub fn frame_count(&self, round_index: usize) -> Result<usize, Error> {
        Ok(self.frames(round_index)?.len())
    }

    pub fn frame(&self, round_index: usize, frame_index: usize) -> Result<&Frame, Error> {
        let frames = self.frames(round_index)?;
        frames.get(frame_index).ok_or(Error::OutOfRange {
            section: Section::Frames,
            index: frame_index,
            len: frames.len(),
        })
    }

    pub fn player_info_list(
        &self,
        round_index: usize,
        frame_index: usize,
        side: Side,
    ) -> Result<&[PlayerInfo], Error> {
        let frame = self.frame(round_index, frame_index)?;
        side_players(frame, side)
    }

    /// Both side lists for one frame, T first.
    pub fn player_info_lists(
        &self,
        round_index: usize,
        frame_index: usize,
    ) -> Result<(&[PlayerInfo], &[PlayerInfo]), Error> {
        let frame = self.frame(round_index, frame_index)?;
        Ok((side_players(frame, Side::T)?, side_players(frame, Side::CT)?))
    }

    /// Positional access into a side's player list.
    ///
    /// Assumes the record keeps a side's list in the same order for every
    /// frame of a round. That ordering is not verified here; callers that
    /// need stable identity across frames should use [`Self::player_by_name`]
    /// and must not re-sort raw lists upstream.
    pub fn player_at(
        &self,
        player_index: usize,
        side: Side,
        round_index: usize,
        frame_index: usize,
    ) -> Result<&PlayerInfo, Error> {
        let players = self.player_info_list(round_index, frame_index, side)?;
        players.get(player_index).ok_or(Error::OutOfRange {
            section: Section::Players(side),
            index: player_index,
            len: players.len(),
        })
    }

    /// Name-keyed lookup, the stable-identity counterpart to
    /// [`Self::player_at`]. `Ok(None)` means the frame's list is present but
    /// does not contain the name.
    pub fn player_by_name(
        &self,
        name: &str,
        side: Side,
        round_index: usize,
        frame_index: usize,
    ) -> Result<Option<&PlayerInfo>, Error> {
        let players = self.player_info_list(round_index, frame_index, side)?;
        Ok(players.iter().find(|player| player.name == name))
    }

    pub fn is_player_alive(
        &self,
        player_index: usize,
        side: Side,
        round_index: usize,
        frame_index: usize,
    ) -> Result<bool, Error> {
        Ok(self
            .player_at(player_index, side, round_index, frame_index)?
            .is_alive)
    }

    pub fn player_hp(
        &self,
        player_index: usize,
        side: Side,
        round_index: usize,
        frame_index: usize,
    ) -> Result<i32, Error> {
        Ok(self
            .player_at(player_index, side, round_index, frame_index)?
            .hp)
    }

    pub fn bomb_info(&self, round_index: usize, frame_index: usize) -> Result<&BombInfo, Error> {
        Ok(&self.frame(round_index, frame_index)?.bomb)
    }

    pub fn grenade_events(&self, round_index: usize) -> Result<&[GrenadeEvent], Error> {
        self.round(round_index)?
            .grenades
            .as_deref()
            .ok_or(Error::DataAbsent(Section::Grenades))
    }

    pub fn round_stats(&self, round_index: usize, frame_index: usize) -> Result<RoundStats, Error> {
        let round = self.round(round_index)?;
        let frame = self.frame(round_index, frame_index)?;

        let winning_side = Side::from_name(&round.winning_side)
            .ok_or_else(|| Error::InvalidSideValue(round.winning_side.clone()))?;

        let players = side_players(frame, Side::T)?
            .iter()
            .map(PlayerBreakdown::from_player_info)
            .collect();

        Ok(RoundStats {
            players,
            winning_side,
            round_end_reason: round.round_end_reason,
            opponents_alive: frame.ct.alive_players,
            opponent_equipment_value: frame.ct.team_eq_val,
            clock_time: frame.clock_time.clone(),
        })
    }
}

pub(crate) fn side_players(frame: &Frame, side: Side) -> Result<&[PlayerInfo], Error> {
    let state = match side {
        Side::T => &frame.t,
        Side::CT => &frame.ct,
    };
    state
        .players
        .as_deref()
        .ok_or(Error::DataAbsent(Section::Players(side)))
}

/// Snapshot of one round at one frame.
///
/// The two sides are deliberately asymmetric: the CT side is summarized at
/// frame level (`opponents_alive`, `opponent_equipment_value`) while the T
/// side carries a full per-player breakdown.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundStats {
    pub players: Vec<PlayerBreakdown>,
    pub winning_side: Side,
    pub round_end_reason: RoundEndReason,
    pub opponents_alive: u32,
    pub opponent_equipment_value: u32,
    pub clock_time: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerBreakdown {
    pub name: String,
    pub hp: i32,
    pub armor: i32,
    pub cash: i32,
    pub weapons: Vec<String>,
    pub has_bomb: bool,
    pub has_defuse: bool,
    pub has_helmet: bool,
    pub is_alive: bool,
}

impl PlayerBreakdown {
    pub fn from_player_info(info: &PlayerInfo) -> Self {
        Self {
            name: info.name.clone(),
            hp: info.hp,
            armor: info.armor,
            cash: info.cash,
            weapons: info
                .inventory
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(|weapon| weapon.weapon_name.clone())
                .collect(),
            has_bomb: info.has_bomb,
            has_defuse: info.has_defuse,
            has_helmet: info.has_helmet,
            is_alive: info.is_alive,
        }
    }
}
