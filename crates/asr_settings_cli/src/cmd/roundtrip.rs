use asr_settings::settings::{Element, XmlWriteOptions, decode_custom_settings, decode_map, encode_map};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: std::path::PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Decode custom settings strictly, re-encode, decode again and compare.
pub fn run(args: Args) -> asr_settings::settings::Result<()> {
	let input = std::fs::read_to_string(&args.file)?;
	let first = decode_custom_settings(&Element::parse_str(&input)?)?;

	let encoded = encode_map("CustomSettings", &first).to_xml_string(&XmlWriteOptions::compact())?;
	let second = decode_map(&Element::parse_str(&encoded)?)?;
	let lossless = second.structurally_eq(&first);
	if !lossless {
		tracing::warn!(path = %args.file.display(), "custom settings changed across re-encoding");
	}

	if args.json {
		emit_json(&RoundtripJson {
			path: args.file.display().to_string(),
			entries: first.len(),
			encoded_len: encoded.len(),
			lossless,
		});
		return Ok(());
	}

	println!("path: {}", args.file.display());
	println!("entries: {}", first.len());
	println!("encoded_len: {}", encoded.len());
	println!("lossless: {lossless}");
	Ok(())
}

#[derive(serde::Serialize)]
struct RoundtripJson {
	path: String,
	entries: usize,
	encoded_len: usize,
	lossless: bool,
}
