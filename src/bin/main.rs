// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: main.rs
// Author: rusthasher maintainers

use rusthasher::rh::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
