use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use console::Style;

use nightwatch_core::capability::{spawn_initializer, CapabilityCell, CapabilityState};
use nightwatch_core::frame::Frame;
use nightwatch_core::report::{AnalysisResult, EnvironmentDetail, StructureDetail};
use nightwatch_core::scan::Scanner;

/// How long to wait for the accelerated backend probe before scanning anyway.
const ACCEL_WAIT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Args)]
pub struct ScanArgs {
    /// Input image file (PNG, JPEG, ...)
    pub file: PathBuf,

    /// Skip the accelerated backend and force the basic strategy
    #[arg(long)]
    pub basic: bool,

    /// Emit the result as JSON instead of a styled report
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let capability = Arc::new(CapabilityCell::new());

    if !args.basic {
        spawn_initializer(Arc::clone(&capability));
        // The pipeline never blocks on the cell, but as the external caller
        // we give the one-shot probe a moment to resolve.
        let deadline = Instant::now() + ACCEL_WAIT_TIMEOUT;
        while capability.state() == CapabilityState::Initializing
            || capability.state() == CapabilityState::Uninitialized
        {
            if Instant::now() >= deadline {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    let img = image::open(&args.file)?.to_rgba8();
    let frame = Frame::from_image(&img);
    tracing::debug!(
        width = frame.width(),
        height = frame.height(),
        backend = ?capability.state(),
        "frame decoded"
    );

    let mut scanner = Scanner::new(capability);
    let result = scanner.scan(Some(frame))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn print_report(result: &AnalysisResult) {
    let title = Style::new().cyan().bold();
    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let alert = Style::new().yellow();

    println!();
    println!("  {}", title.apply_to("Nightwatch Scan"));
    println!("  {}", title.apply_to("═══════════════"));
    println!();
    println!(
        "  {:<16}{}",
        label.apply_to("Safety score"),
        value.apply_to(format!("{}/100", result.safety_score))
    );
    println!(
        "  {:<16}{}",
        label.apply_to("Method"),
        value.apply_to(result.method)
    );

    if let Some(features) = &result.features {
        println!(
            "  {:<16}{} ({:.1})",
            label.apply_to("Brightness"),
            value.apply_to(features.brightness.status),
            features.brightness.level
        );
        let environment = match &features.environment.detail {
            EnvironmentDetail::ColorTally { dominant } => {
                format!("{:?} (dominant color: {})", features.environment.classification, dominant)
            }
            EnvironmentDetail::ContourShapes {
                indoor_indicators,
                outdoor_indicators,
            } => format!(
                "{:?} (indicators {} indoor / {} outdoor)",
                features.environment.classification, indoor_indicators, outdoor_indicators
            ),
        };
        println!("  {:<16}{}", label.apply_to("Environment"), value.apply_to(environment));
        let structure = match &features.structure.detail {
            StructureDetail::GridEdges {
                vertical_edges,
                horizontal_edges,
            } => format!(
                "{:?} ({} vertical / {} horizontal edges)",
                features.structure.classification, vertical_edges, horizontal_edges
            ),
            StructureDetail::EdgeDensity {
                edge_ratio,
                complexity,
            } => format!(
                "{:?} (edge ratio {:.3}, {:?} complexity)",
                features.structure.classification, edge_ratio, complexity
            ),
        };
        println!("  {:<16}{}", label.apply_to("Structure"), value.apply_to(structure));
    }

    println!();
    println!("  {}", label.apply_to("Recommendations"));
    for advisory in &result.recommendations {
        println!("    {} {}", alert.apply_to("•"), advisory);
    }
    println!();
}
