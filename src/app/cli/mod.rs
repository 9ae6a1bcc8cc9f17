//! CLI Adapter.
//!
//! Every flag doubles as a step input: when the flag is absent, clap reads
//! the `INPUT_<NAME>` variable the Actions runner sets for `with:` entries.

use clap::Parser;

use crate::app::{api, logging};
use crate::domain::{AppError, GenerateConfig, RawInputs};

#[derive(Parser, Debug)]
#[command(name = "arraygen")]
#[command(version)]
#[command(
    about = "Generate a JavaScript array declaration from raw values",
    long_about = None
)]
struct Cli {
    /// Target JavaScript file
    #[arg(long, env = "INPUT_JS-NAME")]
    js_name: Option<String>,
    /// Binding name (derived from the file name when absent)
    #[arg(long, env = "INPUT_ARRAY-NAME")]
    array_name: Option<String>,
    /// Raw value text
    #[arg(long, env = "INPUT_VALUES", allow_hyphen_values = true)]
    values: Option<String>,
    /// stringified, string, number or boolean
    #[arg(long, env = "INPUT_VALUE-TYPE")]
    value_type: Option<String>,
    /// json or js
    #[arg(long, env = "INPUT_PARSE-MODE")]
    parse_mode: Option<String>,
    /// let, const or var
    #[arg(long, env = "INPUT_DECL-KIND")]
    decl_kind: Option<String>,
    /// none, named, default or commonjs
    #[arg(long, env = "INPUT_EXPORT-STYLE")]
    export_style: Option<String>,
    /// "true" renders one element per line
    #[arg(long, env = "INPUT_PRETTY")]
    pretty: Option<String>,
    /// "false" refuses to replace an existing file
    #[arg(long, env = "INPUT_OVERWRITE")]
    overwrite: Option<String>,
    /// "true" prints the result without writing it
    #[arg(long, env = "INPUT_DRY-RUN")]
    dry_run: Option<String>,
    /// Place the array under this field of an object declaration
    #[arg(long, env = "INPUT_FIELD")]
    field: Option<String>,
}

impl Cli {
    fn into_raw_inputs(self) -> Result<RawInputs, AppError> {
        let values = self
            .values
            .ok_or_else(|| AppError::config_error("values input is required"))?;
        Ok(RawInputs {
            js_name: self.js_name.unwrap_or_default(),
            array_name: self.array_name,
            values,
            value_type: self.value_type,
            parse_mode: self.parse_mode,
            decl_kind: self.decl_kind,
            export_style: self.export_style,
            pretty: self.pretty,
            overwrite: self.overwrite,
            dry_run: self.dry_run,
            field: self.field,
        })
    }
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run_generate(cli) {
        tracing::debug!(kind = ?e.kind(), "generation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    let config = GenerateConfig::resolve(cli.into_raw_inputs()?)?;
    let outcome = api::generate(&config)?;

    if outcome.written {
        println!("✅ Wrote {}", outcome.path);
    } else {
        println!("Dry run: {} not written", outcome.path);
    }
    Ok(())
}
