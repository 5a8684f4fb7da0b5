// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Title module for splitting a pull request title into its parts.

mod parsed;

pub use parsed::ParsedTitle;
