#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod domain;
pub mod fleet;
mod game;
pub mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod service;
mod ship;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{can_place, place, validate_layout, FleetLayoutGenerator};
pub use game::*;
pub use grid::{Grid, OwnershipGrid, ShipId, ShotGrid};
#[cfg(feature = "std")]
pub use logging::{effective_level, format_line, init_logging, parse_level, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use service::MatchService;
pub use ship::*;
#[cfg(feature = "std")]
pub use store::{BoardStore, InMemoryBoardStore};
#[cfg(feature = "std")]
pub use ui::{print_player_view, render_board};
