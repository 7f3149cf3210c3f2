use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{Parser, ValueEnum};
use dirty_json::{DecodeOptions, EncodeOptions, Quote};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "djson", version, about = "Dirty JSON repair and re-encode")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Print the normalized text without parsing it.
    #[arg(short = 'n', long)]
    normalize: bool,

    /// Pretty-print the decoded document instead of compact output.
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Indentation size for --pretty (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Quote style for re-encoded output: double, single, bare.
    #[arg(long, value_enum, value_name = "style", default_value_t = QuoteArg::Double)]
    quote: QuoteArg,

    /// Emit numeric-looking string values unquoted.
    #[arg(long = "numeric-strings")]
    numeric_strings: bool,

    /// Maximum accepted nesting depth (default: 128).
    #[arg(long = "max-depth", value_name = "number")]
    max_depth: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum QuoteArg {
    Double,
    Single,
    Bare,
}

impl From<QuoteArg> for Quote {
    fn from(value: QuoteArg) -> Self {
        match value {
            QuoteArg::Double => Quote::Double,
            QuoteArg::Single => Quote::Single,
            QuoteArg::Bare => Quote::Bare,
        }
    }
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;
    let output_target = OutputTarget::from_arg(args.output.as_deref());

    if args.normalize {
        let normalized = dirty_json::normalize(&input_text)?;
        write_output(output_target.path(), normalized.as_bytes())?;
        if let OutputTarget::File(path) = &output_target {
            report_status("Normalized", &input_source, path);
        }
        return Ok(());
    }

    let mut decode_options = DecodeOptions::new();
    if let Some(max_depth) = args.max_depth {
        decode_options = decode_options.with_max_depth(max_depth);
    }

    if args.pretty {
        let value: serde_json::Value =
            dirty_json::from_str_with_options(&input_text, &decode_options)?;
        with_output_writer(output_target.path(), |writer| {
            write_json_pretty(writer, &value, args.indent)
        })?;
    } else {
        let value = dirty_json::decode_to_value_with_options(&input_text, &decode_options)?;
        let encode_options = EncodeOptions::new()
            .with_quote(args.quote.into())
            .with_numeric_strings(args.numeric_strings);
        let text = dirty_json::encode_value(&value, &encode_options)?;
        write_output(output_target.path(), text.as_bytes())?;
    }

    if let OutputTarget::File(path) = &output_target {
        report_status("Repaired", &input_source, path);
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    with_output_writer(path, |writer| {
        writer.write_all(data)?;
        Ok(())
    })
}

fn write_json_pretty(
    writer: &mut dyn Write,
    value: &serde_json::Value,
    indent: usize,
) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

fn report_status(verb: &str, input_source: &InputSource, output_path: &str) {
    let input_label = match input_source {
        InputSource::Stdin => "stdin",
        InputSource::File(path) => path.as_str(),
    };
    println!("✔ {verb} {input_label} → {output_path}");
}
