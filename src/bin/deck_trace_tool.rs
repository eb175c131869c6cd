use deck_rs::api::NavigatorTrace;
use deck_rs::charts::default_charts_json_pretty;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: deck_trace_tool <replay|export-charts> [--input <path>] --output <path>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Replay,
    ExportCharts,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: Option<PathBuf>,
    output: PathBuf,
}

fn main() {
    let _ = deck_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let payload = match args.command {
        CommandKind::Replay => {
            let input = args
                .input
                .ok_or_else(|| "replay requires --input".to_owned())?;
            let raw = fs::read_to_string(&input)
                .map_err(|err| format!("failed to read `{}`: {err}", input.display()))?;
            NavigatorTrace::from_json_str(&raw)
                .and_then(NavigatorTrace::replay)
                .and_then(|report| report.to_json_pretty())
                .map_err(|err| err.to_string())?
        }
        CommandKind::ExportCharts => default_charts_json_pretty().map_err(|err| err.to_string())?,
    };
    fs::write(&args.output, payload)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("replay") => CommandKind::Replay,
        Some("export-charts") => CommandKind::ExportCharts,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        input,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
    })
}
