pub mod match_record;
pub use match_record::{
    BombInfo, Frame, GrenadeEvent, GrenadeKind, MatchRecord, PlayerInfo, Round, RoundEndReason,
    Side, TeamFrameState, Weapon,
};

pub mod validator;
pub use validator::{SchemaValidator, ValidationError};
