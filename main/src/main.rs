use ocarina::{
	chat::{respond, Reply},
	config::Config,
	error::*,
	player::{
		player::play,
		player_option::*,
		sink::*,
	},
	seq::sequence_generator::generate,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use std::{
	io::{self, BufRead},
	path::PathBuf,
	process::exit,
};

/// Plays ocarina notation given as arguments, or line by line from stdin
#[derive(Parser)]
#[command(name = "ocarina", version)]
struct Args {
	/// JSON config file
	#[arg(long)]
	config: Option<PathBuf>,
	#[arg(long, value_enum, default_value = "text")]
	output: PlayerOutput,
	#[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
	start_time: f64,
	/// expect chat messages starting with the trigger word
	#[arg(long)]
	chat: bool,
	inputs: Vec<String>,
}

fn main() {
	tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
			.with_writer(io::stderr)
			.init();

	let args = Args::parse();
	let options = PlayerOptions {
		config_path: args.config,
		output: args.output,
		start_time: args.start_time,
		chat: args.chat,
	};

	if let Err(e) = run(&options, args.inputs) {
		error!("{:#}", e);
		exit(1);
	}
}

fn run(options: &PlayerOptions, inputs: Vec<String>) -> anyhow::Result<()> {
	let config = match &options.config_path {
		Some(path) => Config::load(path) ?,
		None => Config::default(),
	};

	let mut sink: Box<dyn NoteSink> = match options.output {
		PlayerOutput::Text => Box::new(TextSink::new(io::stdout())),
		PlayerOutput::Json => Box::new(JsonSink::new(io::stdout())),
		PlayerOutput::Null => Box::new(NullSink::default()),
	};

	if inputs.is_empty() {
		for line in io::stdin().lock().lines() {
			process(&line ?, options, &config, sink.as_mut()) ?;
		}
	} else {
		for input in &inputs {
			process(input, options, &config, sink.as_mut()) ?;
		}
	}

	Ok(())
}

fn process(input: &str, options: &PlayerOptions, config: &Config, sink: &mut dyn NoteSink) -> OcarinaResult<()> {
	if options.chat {
		match respond(input, options.start_time, config) ? {
			None => { }
			Some(Reply::Play(notes)) => play(&notes, sink) ?,
			Some(reply) => {
				if let Some(text) = reply.text() { println!("{}", text); }
			}
		}
		return Ok(());
	}

	// plain notation, as typed into a test page
	match generate(input, options.start_time, &config.sequencer) {
		Ok(notes) => {
			info!(notes = notes.len(), "playing");
			play(&notes, sink)
		}
		Err(Error::TooLong { total }) => {
			println!("{}", config.chat.refusal);
			info!(total, "skipped");
			Ok(())
		}
		Err(e) => Err(e),
	}
}
