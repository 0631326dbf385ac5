//! Truth-or-dare game rooms: content, per-chat room state, turn rotation and
//! the operations the bot layer calls.

pub mod content;
pub mod coordinator;
pub mod error;
pub mod intent;
pub mod registry;
pub mod room;
pub mod turn;

pub use content::{ContentBank, ContentError, PromptKind};
pub use coordinator::{GameResult, OperatorDirectory, OperatorList, TruthOrDare};
pub use error::GameError;
pub use intent::{ActionParseError, Delivery, GameAction, Notice, Outbound};
pub use registry::RoomRegistry;
pub use room::{JoinOutcome, Participant, Phase, Room};
pub use turn::{Turn, TurnStage};
