//! Noughts and crosses game engine.
//!
//! A 3x3 two-player game: Cross and Naught take turns placing marks, three
//! in a row, column or diagonal wins, a full board without a line is a draw.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, status and move history and
//!   exposes [`GameEngine::place_mark`] as its only mutator
//! - **Rules**: pure win/draw predicates over a [`Board`]
//! - **Contracts**: named move preconditions and a postcondition
//! - **Invariants**: properties every reachable game satisfies
//!
//! Rendering is left to callers; the engine only exposes state.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, GameStatus, Mark};
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.place_mark(Mark::Cross, 1, 1), Ok(GameStatus::NaughtTurn));
//! assert!(game.place_mark(Mark::Cross, 0, 0).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use position::Position;
pub use types::{Board, Cell, GameStatus, Mark};
