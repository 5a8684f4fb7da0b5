// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for checktitle.
//!
//! This module handles loading, parsing, and merging the optional
//! checktitle.toml file with command-line settings.

pub mod default;
mod loader;
mod schema;

pub use default::{default_types, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, merge_rules, parse_config};
pub use schema::*;
