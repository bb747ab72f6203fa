use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sheet_impose::{
    GripMargins, ImpositionInput, ImpositionRecord, ImpositionResult, RunStatistics,
    SheetOrientation, SheetSize,
};
use std::path::{Path, PathBuf};

mod logger;

/// Largest layout `--placements` will list
const MAX_LISTED_PLACEMENTS: u64 = 100_000;

#[derive(Parser)]
#[command(name = "impose", about = "Sheet imposition calculator", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate how many copies of a product fit on a sheet
    Calculate(CalculateArgs),

    /// Recalculate a saved job record and write it back
    Update {
        /// JSON record (job fields, optionally with a previous result)
        record: PathBuf,

        /// Write here instead of overwriting the record
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in sheet sizes
    Presets,
}

#[derive(Args)]
struct CalculateArgs {
    /// Load the job from a JSON file instead of flags
    #[arg(
        long,
        conflicts_with_all = [
            "product", "bleed", "gutter", "gutter_h", "gutter_v",
            "sheet", "preset", "landscape", "margin", "valid",
        ]
    )]
    config: Option<PathBuf>,

    /// Product size in mm, e.g. 90x50
    #[arg(short, long, value_parser = parse_dimensions, required_unless_present = "config")]
    product: Option<Dimensions>,

    /// Bleed in mm added to every side of the product
    #[arg(short, long, default_value = "0")]
    bleed: f64,

    /// Gutter in mm between copies on both axes
    #[arg(short, long, default_value = "0")]
    gutter: f64,

    /// Horizontal gutter in mm (overrides --gutter)
    #[arg(long)]
    gutter_h: Option<f64>,

    /// Vertical gutter in mm (overrides --gutter)
    #[arg(long)]
    gutter_v: Option<f64>,

    /// Sheet size in mm, e.g. 520x370
    #[arg(short, long, value_parser = parse_dimensions, conflicts_with = "preset")]
    sheet: Option<Dimensions>,

    /// Standard sheet size
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Lay the sheet out landscape (long edge horizontal)
    #[arg(long)]
    landscape: bool,

    /// Uniform grip margin in mm subtracted from the sheet
    #[arg(short, long, default_value = "0")]
    margin: f64,

    /// Printable area in mm, overriding the sheet minus margins
    #[arg(long, value_parser = parse_dimensions)]
    valid: Option<Dimensions>,

    /// Copies to print; adds sheet requirements to the output
    #[arg(short, long)]
    quantity: Option<u64>,

    /// List the position of every copy
    #[arg(long)]
    placements: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Save the job (without result) to a JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Fail instead of warning when the job looks wrong
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Dimensions {
    width: f64,
    height: f64,
}

fn parse_dimensions(s: &str) -> Result<Dimensions, String> {
    let (w, h) = s
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width = w
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{}': {}", w, e))?;
    let height = h
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{}': {}", h, e))?;
    Ok(Dimensions { width, height })
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Sra3,
    Sra4,
    A3,
    A4,
    B3,
    #[value(name = "50x70")]
    Commercial,
}

impl From<PresetArg> for SheetSize {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Sra3 => Self::Sra3,
            PresetArg::Sra4 => Self::Sra4,
            PresetArg::A3 => Self::A3,
            PresetArg::A4 => Self::A4,
            PresetArg::B3 => Self::B3,
            PresetArg::Commercial => Self::Commercial,
        }
    }
}

/// Everything `impose calculate` reports
struct Report {
    input: ImpositionInput,
    result: ImpositionResult,
    run: Option<RunStatistics>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Calculate(args) => {
            let report = run_calculate(&args).await?;
            if args.json {
                let json = report.to_json(args.placements)?;
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                report.print(args.placements)?;
            }
        }

        Commands::Update { record, output } => {
            let (updated, target) = run_update(&record, output.as_deref()).await?;
            if let Some(result) = updated.result {
                print_result(&updated.input, &result);
            }
            println!("Updated → {}", target.display());
        }

        Commands::Presets => {
            println!("Sheet presets (portrait, mm):");
            for preset in SheetSize::PRESETS {
                let (w, h) = preset.dimensions_mm();
                println!("  {:<6} {} x {}", preset.name(), w, h);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Subcommands
// =============================================================================

async fn run_calculate(args: &CalculateArgs) -> Result<Report> {
    let input = match &args.config {
        Some(path) => ImpositionInput::load(path)
            .await
            .with_context(|| format!("loading job from {}", path.display()))?,
        None => build_input(args)?,
    };

    if let Err(e) = input.validate() {
        if args.strict {
            return Err(e.into());
        }
        log::warn!("{}", e);
    }

    if let Some(path) = &args.save {
        input
            .save(path)
            .await
            .with_context(|| format!("saving job to {}", path.display()))?;
        log::info!("Saved job → {}", path.display());
    }

    let result = sheet_impose::calculate(&input);
    let run = args
        .quantity
        .map(|quantity| sheet_impose::calculate_run(&result, quantity))
        .transpose()?;

    Ok(Report { input, result, run })
}

fn build_input(args: &CalculateArgs) -> Result<ImpositionInput> {
    let product = args.product.context("--product is required")?;
    let orientation = if args.landscape {
        SheetOrientation::Landscape
    } else {
        SheetOrientation::Portrait
    };

    let (sheet_width, sheet_height) = match (args.preset, args.sheet, args.valid) {
        (Some(preset), _, _) => SheetSize::from(preset).dimensions_with_orientation(orientation),
        (None, Some(sheet), _) => (sheet.width, sheet.height),
        // No sheet given: the printable area is the whole sheet
        (None, None, Some(valid)) => (valid.width, valid.height),
        (None, None, None) => bail!("specify --sheet, --preset or --valid"),
    };

    let input = ImpositionInput::new(product.width, product.height)
        .with_bleed(args.bleed)
        .with_gutters(
            args.gutter_h.unwrap_or(args.gutter),
            args.gutter_v.unwrap_or(args.gutter),
        )
        .with_sheet_and_margins(
            sheet_width,
            sheet_height,
            &GripMargins::uniform(args.margin),
        );

    Ok(match args.valid {
        Some(valid) => input.with_valid_area(valid.width, valid.height),
        None => input,
    })
}

async fn run_update(record: &Path, output: Option<&Path>) -> Result<(ImpositionRecord, PathBuf)> {
    let loaded = ImpositionRecord::load(record)
        .await
        .with_context(|| format!("loading record from {}", record.display()))?;
    if loaded.result.is_none() {
        log::info!("Record has no previous result");
    }

    let updated = loaded.recalculated();
    let target = output.unwrap_or(record).to_path_buf();
    updated
        .save(&target)
        .await
        .with_context(|| format!("saving record to {}", target.display()))?;

    Ok((updated, target))
}

// =============================================================================
// Output
// =============================================================================

impl Report {
    fn to_json(&self, with_placements: bool) -> Result<serde_json::Value> {
        let mut report = serde_json::json!({
            "input": self.input,
            "result": self.result,
            "run": self.run,
        });
        if with_placements {
            ensure_listable(&self.result)?;
            report["placements"] = sheet_impose::placements(&self.input, &self.result)
                .map(|p| {
                    serde_json::json!({
                        "row": p.grid_pos.row,
                        "col": p.grid_pos.col,
                        "x": p.bounds.x,
                        "y": p.bounds.y,
                        "width": p.bounds.width,
                        "height": p.bounds.height,
                    })
                })
                .collect();
        }
        Ok(report)
    }

    fn print(&self, with_placements: bool) -> Result<()> {
        print_result(&self.input, &self.result);
        if let Some(run) = &self.run {
            print_run(run);
        }
        if with_placements {
            ensure_listable(&self.result)?;
            println!("Placements (x, y from valid-area origin):");
            for placement in sheet_impose::placements(&self.input, &self.result) {
                println!(
                    "  [{}, {}] {:.1}, {:.1}",
                    placement.grid_pos.row,
                    placement.grid_pos.col,
                    placement.bounds.x,
                    placement.bounds.y
                );
            }
        }
        Ok(())
    }
}

fn ensure_listable(result: &ImpositionResult) -> Result<()> {
    if result.total_repetitions > MAX_LISTED_PLACEMENTS {
        bail!(
            "layout has {} copies per sheet; --placements lists at most {}",
            result.total_repetitions,
            MAX_LISTED_PLACEMENTS
        );
    }
    Ok(())
}

fn print_result(input: &ImpositionInput, result: &ImpositionResult) {
    println!("Imposition:");
    println!(
        "  Product: {} x {} mm (+{} bleed → {} x {})",
        input.product_width,
        input.product_height,
        input.bleed,
        input.bleed_width(),
        input.bleed_height()
    );
    println!(
        "  Sheet: {} x {} mm, valid area {} x {} mm",
        input.sheet_width, input.sheet_height, input.valid_width, input.valid_height
    );
    println!(
        "  Layout: {} x {} = {} copies ({})",
        result.repetitions_h, result.repetitions_v, result.total_repetitions, result.orientation
    );
    println!("  Utilization: {:.1}%", result.utilization);
}

fn print_run(run: &RunStatistics) {
    println!("Print run:");
    println!("  Quantity: {}", run.quantity);
    println!("  Sheets: {}", run.sheets);
    println!("  Copies printed: {}", run.copies_printed);
    println!("  Overs: {}", run.overs);
}
