// Game engine modules

pub mod bag;
pub mod board;
pub mod persist;
pub mod rack;
pub mod scorer;
pub mod session;
pub mod table;
pub mod validator;

pub use persist::{JsonSessionStore, MemorySessionStore, SessionStore};
pub use scorer::Scorer;
pub use session::GameSession;
pub use table::{Table, TableView, TurnRecord, TILE_COUNT};
pub use validator::WordValidator;
