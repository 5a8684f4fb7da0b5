// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git SHA and commit date shown by `checktitle --version`.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen emits placeholder values instead of failing.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
