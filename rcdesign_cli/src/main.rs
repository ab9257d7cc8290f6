//! # RC Design CLI
//!
//! Command-line driver for `rcdesign_core`. Reads calculation requests as
//! JSON, runs them, and prints a summary line per request followed by the
//! JSON results.
//!
//! ```text
//! rcdesign run request.json [--settings settings.json] [--json-only]
//! rcdesign demo
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod demo;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rcdesign_core::{parse_batch, run_requests, CalcError, CalcResult, CalculationItem, CalculationOutput, DesignSettings};

/// Settings or request file could not be read or parsed
const EXIT_BAD_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "rcdesign")]
#[command(about = "Reinforced-concrete analysis and design calculations")]
struct Cli {
    /// Settings file (JSON); defaults apply to omitted fields
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print only the JSON results
    #[arg(long, global = true)]
    json_only: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a request file holding one calculation or an array of them
    Run {
        /// Request file (JSON)
        request: PathBuf,
    },
    /// Run the built-in worked examples
    Demo,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rcdesign_cli=info,rcdesign_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = match load_settings(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => return report_error("settings", &e),
    };

    let requests = match &cli.command {
        Command::Run { request } => match load_request(request) {
            Ok(requests) => requests,
            Err(e) => return report_error("request", &e),
        },
        Command::Demo => demo::items().into_iter().map(Ok).collect(),
    };

    info!(count = requests.len(), "running calculations");
    let results = run_requests(&requests, &settings);

    if !cli.json_only {
        print_summary(&requests, &results);
    }

    match results_json(&results) {
        Ok(text) => println!("{}", text),
        Err(e) => error!(error = %e, "could not serialize results"),
    }

    ExitCode::from(exit_status(&results))
}

/// 0 when every calculation ran, 1 otherwise
fn exit_status(results: &[CalcResult<CalculationOutput>]) -> u8 {
    let failures = results.iter().filter(|r| r.is_err()).count();
    if failures > 0 {
        error!(failures, "some calculations failed");
        1
    } else {
        0
    }
}

fn results_json(results: &[CalcResult<CalculationOutput>]) -> serde_json::Result<String> {
    let json = results
        .iter()
        .map(|result| match result {
            Ok(output) => serde_json::to_value(output),
            Err(e) => serde_json::to_value(e).map(|e| serde_json::json!({ "error": e })),
        })
        .collect::<serde_json::Result<Vec<_>>>()?;
    serde_json::to_string_pretty(&json)
}

fn load_settings(path: Option<&Path>) -> CalcResult<DesignSettings> {
    match path {
        Some(path) => {
            let text = read_file(path)?;
            DesignSettings::from_json(&text)
        }
        None => Ok(DesignSettings::default()),
    }
}

/// A request file holds either one item or an array of items. Each item
/// decodes on its own; only an unreadable file or invalid JSON is an error here.
fn load_request(path: &Path) -> CalcResult<Vec<CalcResult<CalculationItem>>> {
    let text = read_file(path)?;
    parse_batch(&text)
}

fn read_file(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CalcError::serialization(format!("{}: {}", path.display(), e)))
}

fn report_error(what: &str, e: &CalcError) -> ExitCode {
    error!(code = e.error_code(), "invalid {}: {}", what, e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!("{}", json);
    }
    ExitCode::from(EXIT_BAD_INPUT)
}

fn print_summary(requests: &[CalcResult<CalculationItem>], results: &[CalcResult<CalculationOutput>]) {
    println!("═══════════════════════════════════════");
    println!("  RC DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    for (request, result) in requests.iter().zip(results) {
        let (calc_type, label) = match request {
            Ok(item) => (item.calc_type(), item.label()),
            Err(_) => ("?", "?"),
        };
        match result {
            Ok(output) => println!(
                "  {:<8} {:<18} {:<16} {}",
                status_icon(output.passes()),
                calc_type,
                label,
                describe(output)
            ),
            Err(e) => println!("  {:<8} {:<18} {:<16} {}", "[ERROR]", calc_type, label, e),
        }
    }
    println!("═══════════════════════════════════════");
    println!();
}

/// One-line description of the governing quantities
fn describe(output: &CalculationOutput) -> String {
    match output {
        CalculationOutput::Materials(m) => format!(
            "Ec = {:.0} kgf/cm², fr = {:.2} kgf/cm², β1 = {:.3}, εy = {:.5}",
            m.concrete.ec, m.concrete.fr, m.concrete.beta1, m.steel.ey
        ),
        CalculationOutput::BeamSpan(r) => format!(
            "R = {:.0} / {:.0} kgf, M+ = {:.0} kgf·m @ {:.2} m, M- = {:.0} kgf·m",
            r.reaction_left_kgf, r.reaction_right_kgf, r.max_moment.value, r.max_moment.x_m, r.min_moment.value
        ),
        CalculationOutput::ContinuousBeam(r) => format!(
            "M_B = {:.0} kgf·m, R = {:.0} / {:.0} / {:.0} kgf",
            r.interior_moment_kgf_m,
            r.reactions.a_kgf,
            r.reactions.b_total_kgf(),
            r.reactions.c_kgf
        ),
        CalculationOutput::Flexure(r) => format!(
            "ρ = {:.4}, As = {:.2} cm², φMn = {:.0} kgf·cm (unity {:.2})",
            r.rho, r.as_cm2, r.phi_mn_kgf_cm, r.flexure_unity
        ),
        CalculationOutput::Shear(r) => format!(
            "φVc = {:.0} kgf, Vs = {:.0} kgf, {} @ {:.1} cm",
            r.phi_vc_kgf, r.vs_required_kgf, r.stirrup, r.spacing_cm
        ),
        CalculationOutput::ShearVerification(r) => format!(
            "Vu = {:.0} kgf, φVc = {:.0} kgf, {} @ {:.1} / {:.1} cm, {} stirrups",
            r.vu_kgf,
            r.design.phi_vc_kgf,
            r.design.stirrup,
            r.critical_zone.spacing_cm,
            r.non_critical_zone.spacing_cm,
            r.total_stirrups()
        ),
        CalculationOutput::BeamDesign(r) => format!(
            "As = {:.2} cm², {} @ {:.1} cm (governs: {})",
            r.flexure.as_cm2,
            r.shear.stirrup,
            r.shear.spacing_cm,
            r.governing_condition()
        ),
        CalculationOutput::Column(r) => format!(
            "φPn = {:.0} kgf, ρ = {:.4}, ties ≤ {:.1} cm (unity {:.2})",
            r.phi_pn_kgf, r.rho, r.ties.max_spacing_cm, r.axial_unity
        ),
        CalculationOutput::Footing(r) => format!(
            "B = {:.1} cm, d = {:.1} cm, As = {:.2} cm²",
            r.side_cm, r.depth_cm, r.as_cm2
        ),
        CalculationOutput::Seismic(r) => format!(
            "ZUCS/R = {:.4}, V = {:.2} tf ({:.0} kgf)",
            r.coefficient,
            r.base_shear_tf.value(),
            r.base_shear_kgf.value()
        ),
        CalculationOutput::Predimension(r) => format!(
            "h = {:.2} m, beam {:.0}x{:.0} cm, column {:.1} cm",
            r.slab_thickness_m, r.beam_width_cm, r.beam_depth_cm, r.column_side_cm
        ),
    }
}

fn status_icon(verdict: Option<bool>) -> &'static str {
    match verdict {
        Some(true) => "[OK]",
        Some(false) => "[FAIL]",
        None => "[--]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcdesign_core::settings::WorkingRatioPolicy;
    use std::fs;
    use tempfile::TempDir;

    const SEISMIC: &str =
        r#"{ "type": "Seismic", "label": "A", "zone": "Z3", "soil": "S2", "importance_u": 1.0, "weight_t": 500.0 }"#;

    fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_load_request_single_item() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "one.json", SEISMIC);

        let requests = load_request(&path).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].as_ref().unwrap().calc_type(), "Seismic");
    }

    #[test]
    fn test_load_request_array_keeps_good_items() {
        let dir = TempDir::new().unwrap();
        let bad = SEISMIC.replace("Z3", "Z9");
        let path = write(&dir, "batch.json", &format!("[{}, {}, {}]", SEISMIC, bad, SEISMIC));

        let requests = load_request(&path).unwrap();
        assert_eq!(requests.len(), 3);
        assert!(requests[0].is_ok());
        assert_eq!(requests[1].as_ref().unwrap_err().error_code(), "UNSUPPORTED_CODE");
        assert!(requests[2].is_ok());

        let results = run_requests(&requests, &DesignSettings::default());
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());
        assert_eq!(exit_status(&results), 1);
    }

    #[test]
    fn test_load_request_bad_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "[ { \"type\": ");
        assert_eq!(load_request(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let missing = dir.path().join("missing.json");
        let err = load_request(&missing).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_settings() {
        assert_eq!(load_settings(None).unwrap(), DesignSettings::default());

        let dir = TempDir::new().unwrap();
        let path = write(&dir, "settings.json", r#"{ "working_ratio": { "policy": "Fixed", "rho": 0.01 } }"#);
        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.working_ratio, WorkingRatioPolicy::Fixed { rho: 0.01 });
        assert_eq!(settings.sample_points, DesignSettings::default().sample_points);

        let path = write(&dir, "invalid.json", r#"{ "sample_points": 1 }"#);
        assert_eq!(load_settings(Some(&path)).unwrap_err().error_code(), "INVALID_INPUT");

        let path = write(&dir, "garbled.json", "sample_points = 1");
        assert_eq!(load_settings(Some(&path)).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_exit_status_and_json() {
        let requests = parse_batch(SEISMIC).unwrap();
        let results = run_requests(&requests, &DesignSettings::default());
        assert_eq!(exit_status(&results), 0);

        let text = results_json(&results).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["type"], "Seismic");

        let failed = vec![Err(CalcError::unsupported_code("seismic zone", "Z9"))];
        let json: serde_json::Value = serde_json::from_str(&results_json(&failed).unwrap()).unwrap();
        assert_eq!(json[0]["error"]["type"], "UnsupportedCode");
    }

    #[test]
    fn test_status_icon() {
        assert_eq!(status_icon(Some(true)), "[OK]");
        assert_eq!(status_icon(Some(false)), "[FAIL]");
        assert_eq!(status_icon(None), "[--]");
    }
}
