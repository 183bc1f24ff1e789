// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthasher
// File: app.rs
// Author: rusthasher maintainers

use crate::rh::algorithm::HashAlgorithm;
use crate::rh::config::HasherConfig;
use crate::rh::digest::DigestResult;
use crate::rh::error::{HashError, HashErrorKind};
use crate::rh::hasher::Hasher;
use crate::rh::output::{render, OutputFormat};
use crate::rh::source::{TextEncoding, DEFAULT_CHUNK_SIZE};
use crate::rh::weak;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
	name = "rhash",
	version,
	about = "Compute digests of text, files, and stdin."
)]
pub struct Cli {
	#[command(flatten)]
	pub options: HashOptions,

	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Args, Debug, Clone)]
pub struct HashOptions {
	/// Digest algorithm (see `rhash list`)
	#[arg(
		short,
		long,
		global = true,
		env = "RHASH_ALGORITHM",
		default_value = "md5",
		value_parser = parse_algorithm
	)]
	pub algorithm: HashAlgorithm,

	/// How text arguments are turned into bytes
	#[arg(
		short,
		long,
		global = true,
		env = "RHASH_ENCODING",
		default_value = "utf-8",
		value_parser = parse_encoding
	)]
	pub encoding: TextEncoding,

	/// Read size for files and stdin, in bytes
	#[arg(
		long,
		global = true,
		env = "RHASH_CHUNK_SIZE",
		default_value_t = DEFAULT_CHUNK_SIZE
	)]
	pub chunk_size: usize,

	#[arg(short, long, global = true, value_enum, default_value_t)]
	pub format: OutputFormat,

	/// Print only the digest, without the input label
	#[arg(long, global = true)]
	pub hash_only: bool,

	/// Do not warn about weak algorithms
	#[arg(long, global = true)]
	pub no_warnings: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
	/// Hash a string
	Text { text: String },
	/// Hash one or more files
	File {
		#[arg(required = true)]
		paths: Vec<PathBuf>,
	},
	/// Hash everything read from stdin
	Stdin,
	/// List supported algorithms
	List,
}

impl HashOptions {
	pub fn config(&self) -> HasherConfig {
		HasherConfig::default()
			.with_algorithm(self.algorithm)
			.with_encoding(self.encoding)
			.with_chunk_size(self.chunk_size)
	}
}

fn parse_algorithm(value: &str) -> Result<HashAlgorithm, String> {
	value.parse().map_err(|e: HashError| e.to_string())
}

fn parse_encoding(value: &str) -> Result<TextEncoding, String> {
	value.parse()
}

/// Process exit code for a failure kind.
pub fn exit_code(kind: HashErrorKind) -> i32 {
	match kind {
		HashErrorKind::UnsupportedAlgorithm | HashErrorKind::EncodingError => {
			2
		}
		HashErrorKind::NotFound
		| HashErrorKind::PermissionDenied
		| HashErrorKind::IsDirectory => 3,
		HashErrorKind::IoError => 1,
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();
}

fn emit(
	result: &DigestResult,
	label: &str,
	options: &HashOptions,
) -> Result<(), Box<dyn Error>> {
	println!(
		"{}",
		render(result, label, options.format, options.hash_only)?
	);
	Ok(())
}

fn report(err: &HashError) -> i32 {
	eprintln!("{} {}", "error:".red().bold(), err);
	exit_code(err.kind())
}

/// Run the host for already-parsed arguments; returns the exit code.
pub fn execute(cli: Cli) -> Result<i32, Box<dyn Error>> {
	let options = cli.options;
	if !matches!(cli.mode, Mode::List) && !options.no_warnings {
		weak::emit_warning(options.algorithm);
	}
	let hasher = Hasher::new(options.config());

	match cli.mode {
		Mode::Text { text } => {
			match hasher.hash_text(&text, options.algorithm) {
				Ok(result) => emit(&result, &text, &options)?,
				Err(err) => return Ok(report(&err)),
			}
		}
		Mode::File { paths } => {
			// Keep going after a failure so every path gets a line, but
			// exit with the first failure's code.
			let mut status = 0;
			for path in &paths {
				match hasher.hash_file(path, options.algorithm) {
					Ok(result) => {
						emit(&result, &path.display().to_string(), &options)?
					}
					Err(err) => {
						let code = report(&err);
						if status == 0 {
							status = code;
						}
					}
				}
			}
			return Ok(status);
		}
		Mode::Stdin => {
			match hasher.hash_reader(
				std::io::stdin(),
				"-",
				options.algorithm,
			) {
				Ok(result) => emit(&result, "-", &options)?,
				Err(err) => return Ok(report(&err)),
			}
		}
		Mode::List => {
			for alg in HashAlgorithm::all() {
				let marker = if weak::lookup(alg).is_some() {
					" (weak)"
				} else {
					""
				};
				println!("{:<12} {:>3} bytes{}", alg, alg.output_len(), marker);
			}
		}
	}
	Ok(0)
}

pub fn run() -> Result<(), Box<dyn Error>> {
	init_tracing();
	let code = execute(Cli::parse())?;
	if code != 0 {
		std::process::exit(code);
	}
	Ok(())
}
