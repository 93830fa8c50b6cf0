//! Typed view of a recorded match document.
//!
//! Field names follow the recorded JSON schema. Sections the recorder may
//! leave out entirely are explicit `Option`s, so absence checks are plain
//! presence tests instead of null handling at every call site.

/// One side of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    T,
    CT,
}

pub static SIDE_NAMES: phf::Map<&'static str, Side> = phf::phf_map! {
    "T" => Side::T,
    "CT" => Side::CT,
};

impl Side {
    /// Strict lookup of a raw side string. Anything other than `"T"` or
    /// `"CT"` yields `None`, never a default side.
    pub fn from_name(name: &str) -> Option<Self> {
        SIDE_NAMES.get(name).copied()
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::T => write!(f, "T"),
            Self::CT => write!(f, "CT"),
        }
    }
}

/// Reason a round ended, as recorded by the game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundEndReason {
    TargetBombed,
    VipEscaped,
    VipKilled,
    TerroristsEscaped,
    CTStoppedEscape,
    TerroristsStopped,
    BombDefused,
    CTWin,
    TerroristsWin,
    Draw,
    HostageRescued,
    TargetSaved,
    HostagesNotRescued,
    TerroristsNotEscaped,
    VipNotEscaped,
    GameStart,
    TerroristsSurrender,
    CTSurrender,
    TerroristsPlanted,
    CTsReachedHostage,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GrenadeKind {
    #[serde(rename = "Decoy Grenade")]
    Decoy,
    #[serde(rename = "Flashbang")]
    Flashbang,
    #[serde(rename = "HE Grenade")]
    HighExplosive,
    #[serde(rename = "Incendiary Grenade")]
    Incendiary,
    #[serde(rename = "Molotov")]
    Molotov,
    #[serde(rename = "Smoke Grenade")]
    Smoke,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub map_name: String,
    #[serde(default)]
    pub game_rounds: Option<Vec<Round>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    // Raw side string, parsed strictly on access so a malformed value
    // surfaces as a distinct error instead of failing the whole document.
    pub winning_side: String,
    pub round_end_reason: RoundEndReason,
    #[serde(default)]
    pub frames: Option<Vec<Frame>>,
    #[serde(default)]
    pub grenades: Option<Vec<GrenadeEvent>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub tick: u32,
    pub clock_time: String,
    pub t: TeamFrameState,
    pub ct: TeamFrameState,
    pub bomb: BombInfo,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFrameState {
    #[serde(default)]
    pub players: Option<Vec<PlayerInfo>>,
    pub alive_players: u32,
    pub team_eq_val: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub hp: i32,
    pub armor: i32,
    pub cash: i32,
    #[serde(default)]
    pub inventory: Option<Vec<Weapon>>,
    pub has_bomb: bool,
    pub has_defuse: bool,
    pub has_helmet: bool,
    pub is_alive: bool,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub weapon_name: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BombInfo {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrenadeEvent {
    pub thrower_side: Side,
    pub grenade_type: GrenadeKind,
    pub throw_tick: u32,
    pub destroy_tick: u32,
    pub thrower_x: f64,
    pub thrower_y: f64,
    pub grenade_x: f64,
    pub grenade_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn side_names_closed() {
        assert_eq!(Side::from_name("T"), Some(Side::T));
        assert_eq!(Side::from_name("CT"), Some(Side::CT));
        assert_eq!(Side::from_name("ct"), None);
        assert_eq!(Side::from_name("Spectator"), None);
    }

    #[test]
    fn grenade_kind_strict() {
        let parsed: GrenadeKind = serde_json::from_str("\"Smoke Grenade\"").unwrap();
        assert_eq!(parsed, GrenadeKind::Smoke);

        assert!(serde_json::from_str::<GrenadeKind>("\"Snowball\"").is_err());
    }

    #[test]
    fn round_end_reason_strict() {
        let parsed: RoundEndReason = serde_json::from_str("\"BombDefused\"").unwrap();
        assert_eq!(parsed, RoundEndReason::BombDefused);

        assert!(serde_json::from_str::<RoundEndReason>("\"AlienInvasion\"").is_err());
    }
}
