//! flashfetch downloads `.swf` game assets for a curated slug list.
//!
//! Each slug is normalized to a search title, resolved against the Flashpoint
//! Archive catalog to recover the game's original URL, then fetched directly
//! from that URL with a Wayback Machine fallback when the host is gone.
//! Everything runs sequentially with a polite delay between requests.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod flashpoint;
pub mod games;
pub mod output;
pub mod retrieve;
pub mod store;
pub mod swf;
pub mod wayback;
