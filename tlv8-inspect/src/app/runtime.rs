use std::io::{self, Write};

use base64::{prelude::BASE64_STANDARD, Engine};
use tlv8::{decode_groups, decode_to_list, decode_to_mapping, encode_entries, Entry};
use tracing::{debug, info};

use crate::{
    app::{
        error::RuntimeError,
        formats::{DecodeFormat, EncodeFormat, View},
        input::{parse_entry, read_input},
        options::{Input, Mode, Options},
    },
    renderers::{json::JSON, renderer::Renderer, txt::TXT},
};

/// Stores the application state and runs the requested operation
pub struct Config {
    /// App settings from the CLI
    pub options: Options,
}

impl Config {
    pub fn new(options: Options) -> Self {
        Config { options }
    }

    /// Run the requested operation and print its output to stdout
    pub fn start(&self) -> Result<(), RuntimeError> {
        let output = self.run()?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(output.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(RuntimeError::DiskError)
    }

    /// Run the requested operation and return what should be printed
    pub fn run(&self) -> Result<String, RuntimeError> {
        match &self.options.mode {
            Mode::Decode {
                input,
                view,
                format,
                names,
            } => match format {
                DecodeFormat::Text => Self::decode::<TXT>(input, *view, *names),
                DecodeFormat::Json => Self::decode::<JSON>(input, *view, *names),
            },
            Mode::Encode { entries, format } => Self::encode(entries, *format),
        }
    }

    fn decode<R: Renderer>(input: &Input, view: View, names: bool) -> Result<String, RuntimeError> {
        let bytes = read_input(input)?;
        let renderer = R::new(names);

        let output = match view {
            View::List => renderer.render_list(&decode_to_list(&bytes)?),
            View::Mapping => renderer.render_mapping(&decode_to_mapping(&bytes)?),
            View::Groups => renderer.render_groups(&decode_groups(&bytes)?),
        };
        info!(?view, len = bytes.len(), "Decoded input");
        Ok(output)
    }

    fn encode(entries: &[String], format: EncodeFormat) -> Result<String, RuntimeError> {
        let entries = entries
            .iter()
            .map(|arg| parse_entry(arg))
            .collect::<Result<Vec<Entry>, RuntimeError>>()?;
        debug!(count = entries.len(), "Parsed entries");

        let bytes = encode_entries(&entries)?;
        info!(len = bytes.len(), "Encoded entries");

        let mut output = match format {
            EncodeFormat::Hex => hex::encode(&bytes),
            EncodeFormat::Base64 => BASE64_STANDARD.encode(&bytes),
        };
        output.push('\n');
        Ok(output)
    }
}
