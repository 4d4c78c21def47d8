//! HTTP server hosting a single tic-tac-toe game.
//!
//! One [`GameSession`] is shared by every request. The REST surface lives
//! under `/api/game` and speaks JSON snapshots of the whole game:
//!
//! | Route | Method | Body | Response |
//! |---|---|---|---|
//! | `/api/game/status` | GET | | [`GameSnapshot`] |
//! | `/api/game/move` | POST | [`MoveRequest`] | [`MoveResponse`] |
//! | `/api/game/reset` | POST | | [`GameSnapshot`] |
//! | `/api/game/new` | POST | optional [`NewGameRequest`] | [`GameSnapshot`] |
//! | `/api/game/undo` | POST | | [`MoveResponse`] |
//! | `/api/game/history` | GET | | list of [`MoveRecord`] |
//! | `/health` | GET | | `ok` |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;
mod routes;
mod session;

pub use api::{
    ErrorBody, GameSnapshot, MoveRecord, MoveRequest, MoveResponse, NewGameRequest, TIE,
};
pub use config::{ServerConfig, ServerConfigError, WinRule};
pub use error::ApiError;
pub use routes::app;
pub use session::GameSession;
