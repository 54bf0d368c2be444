use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};

use crate::app::{
    error::RuntimeError,
    formats::{DecodeFormat, EncodeFormat, View},
};

// CLI Subcommand Names
pub const SUBCOMMAND_DECODE: &str = "decode";
pub const SUBCOMMAND_ENCODE: &str = "encode";

// CLI Arg Names
pub const OPTION_INPUT: &str = "input";
pub const OPTION_FILE: &str = "file";
pub const OPTION_BASE64: &str = "base64";
pub const OPTION_MAPPING: &str = "mapping";
pub const OPTION_GROUPS: &str = "groups";
pub const OPTION_FORMAT: &str = "format";
pub const OPTION_NAMES: &str = "names";
pub const OPTION_ENTRIES: &str = "entries";
pub const OPTION_VERBOSE: &str = "verbose";

// Other CLI Text
pub const SUPPORTED_DECODE_FORMATS: &str = "text, json";
pub const SUPPORTED_ENCODE_FORMATS: &str = "hex, base64";
/// File path that reads from standard input
pub const STDIN_PATH: &str = "-";

/// Where the bytes to decode come from
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Hexadecimal text passed as an argument
    Hex(String),
    /// Base64 text passed as an argument
    Base64(String),
    /// Raw bytes read from a file
    File(PathBuf),
    /// Raw bytes read from standard input
    Stdin,
}

/// The operation to run and its settings
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Decode {
        input: Input,
        view: View,
        format: DecodeFormat,
        /// Annotate type codes with their names
        names: bool,
    },
    Encode {
        /// Raw `TYPE=VALUE` arguments, in order
        entries: Vec<String>,
        format: EncodeFormat,
    },
}

#[derive(Debug)]
pub struct Options {
    /// The operation to run
    pub mode: Mode,
    /// How many times `-v` was passed
    pub verbosity: u8,
}

impl Options {
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let verbosity = args.get_count(OPTION_VERBOSE);

        let mode = match args.subcommand() {
            Some((SUBCOMMAND_DECODE, decode_args)) => Self::decode_from_args(decode_args)?,
            Some((SUBCOMMAND_ENCODE, encode_args)) => Self::encode_from_args(encode_args)?,
            _ => {
                return Err(RuntimeError::InvalidOptions(format!(
                    "Expected a subcommand, one of `{SUBCOMMAND_DECODE}` or `{SUBCOMMAND_ENCODE}`"
                )))
            }
        };

        Ok(Options { mode, verbosity })
    }

    fn decode_from_args(args: &ArgMatches) -> Result<Mode, RuntimeError> {
        let text: Option<&String> = args.get_one(OPTION_INPUT);
        let file: Option<&PathBuf> = args.get_one(OPTION_FILE);
        let base64 = args.get_flag(OPTION_BASE64);
        let mapping = args.get_flag(OPTION_MAPPING);
        let groups = args.get_flag(OPTION_GROUPS);
        let user_format: Option<&String> = args.get_one(OPTION_FORMAT);
        let names = args.get_flag(OPTION_NAMES);

        // Ensure there is exactly one source of data
        let input = match (text, file) {
            (Some(text), None) if base64 => Input::Base64(text.to_owned()),
            (Some(text), None) => Input::Hex(text.to_owned()),
            (None, Some(_)) if base64 => {
                return Err(RuntimeError::InvalidOptions(format!(
                    "Option --{OPTION_BASE64} only applies to text passed as an argument, not to --{OPTION_FILE}"
                )));
            }
            (None, Some(path)) if path.as_os_str() == STDIN_PATH => Input::Stdin,
            (None, Some(path)) => Input::File(path.to_owned()),
            (Some(_), Some(_)) => {
                return Err(RuntimeError::InvalidOptions(format!(
                    "Provide either an argument or --{OPTION_FILE}, not both"
                )));
            }
            (None, None) => {
                return Err(RuntimeError::InvalidOptions(format!(
                    "No data to decode, pass it as an argument or with --{OPTION_FILE}"
                )));
            }
        };

        let view = match (mapping, groups) {
            (true, true) => {
                return Err(RuntimeError::InvalidOptions(format!(
                    "Options --{OPTION_MAPPING} and --{OPTION_GROUPS} cannot be used together"
                )));
            }
            (true, false) => View::Mapping,
            (false, true) => View::Groups,
            (false, false) => View::List,
        };

        let format = match user_format {
            Some(user_format) => DecodeFormat::from_cli(user_format).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{user_format} is not a valid decode format! Must be one of <{SUPPORTED_DECODE_FORMATS}>"
                ))
            })?,
            None => DecodeFormat::default(),
        };

        Ok(Mode::Decode {
            input,
            view,
            format,
            names,
        })
    }

    fn encode_from_args(args: &ArgMatches) -> Result<Mode, RuntimeError> {
        let entries: Vec<String> = args
            .get_many::<String>(OPTION_ENTRIES)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let user_format: Option<&String> = args.get_one(OPTION_FORMAT);

        if entries.is_empty() {
            return Err(RuntimeError::InvalidOptions(
                "Nothing to encode, pass at least one TYPE=VALUE entry".to_string(),
            ));
        }

        let format = match user_format {
            Some(user_format) => EncodeFormat::from_cli(user_format).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{user_format} is not a valid encode format! Must be one of <{SUPPORTED_ENCODE_FORMATS}>"
                ))
            })?,
            None => EncodeFormat::default(),
        };

        Ok(Mode::Encode { entries, format })
    }
}

/// Build the command line interface
fn get_command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(OPTION_VERBOSE)
                .short('v')
                .long(OPTION_VERBOSE)
                .help("Log codec activity to stderr, pass twice to log every chunk\nThe RUST_LOG environment variable overrides this\n")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new(SUBCOMMAND_DECODE)
                .about("Decode TLV8 data and print its entries")
                .arg(
                    Arg::new(OPTION_INPUT)
                        .help("Hexadecimal TLV8 data, whitespace is ignored\n")
                        .value_name("INPUT")
                        .display_order(0),
                )
                .arg(
                    Arg::new(OPTION_FILE)
                        .short('f')
                        .long(OPTION_FILE)
                        .help(format!("Read raw TLV8 bytes from a file, or `{STDIN_PATH}` for stdin\n"))
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf))
                        .display_order(1),
                )
                .arg(
                    Arg::new(OPTION_BASE64)
                        .short('b')
                        .long(OPTION_BASE64)
                        .help("Treat INPUT as base64 instead of hexadecimal\n")
                        .action(ArgAction::SetTrue)
                        .display_order(2),
                )
                .arg(
                    Arg::new(OPTION_MAPPING)
                        .short('m')
                        .long(OPTION_MAPPING)
                        .help("Print entries keyed by type; when a type repeats, the last value wins\n")
                        .action(ArgAction::SetTrue)
                        .display_order(3),
                )
                .arg(
                    Arg::new(OPTION_GROUPS)
                        .short('g')
                        .long(OPTION_GROUPS)
                        .help("Print one mapping per group of entries delimited by separators\n")
                        .action(ArgAction::SetTrue)
                        .display_order(4),
                )
                .arg(
                    Arg::new(OPTION_FORMAT)
                        .short('o')
                        .long(OPTION_FORMAT)
                        .help(format!("Specify a single output format\nIf omitted, the default is `{}`\n", DecodeFormat::default()))
                        .value_name(SUPPORTED_DECODE_FORMATS)
                        .display_order(5),
                )
                .arg(
                    Arg::new(OPTION_NAMES)
                        .short('n')
                        .long(OPTION_NAMES)
                        .help("Annotate type codes with their HomeKit names\n")
                        .action(ArgAction::SetTrue)
                        .display_order(6),
                ),
        )
        .subcommand(
            Command::new(SUBCOMMAND_ENCODE)
                .about("Encode entries as TLV8 data")
                .arg(
                    Arg::new(OPTION_ENTRIES)
                        .help("Entries to encode, in order\nTYPE is a number or a HomeKit type name, VALUE is text or 0x-prefixed hex\nPass `separator` on its own for a separator entry\n")
                        .value_name("TYPE=VALUE")
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .required(true)
                        .display_order(0),
                )
                .arg(
                    Arg::new(OPTION_FORMAT)
                        .short('o')
                        .long(OPTION_FORMAT)
                        .help(format!("Specify a single output format\nIf omitted, the default is `{}`\n", EncodeFormat::default()))
                        .value_name(SUPPORTED_ENCODE_FORMATS)
                        .display_order(1),
                ),
        )
}

/// Parse arguments from the command line
pub fn from_command_line() -> ArgMatches {
    get_command().get_matches()
}
