use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use vennplot::{
    CosmicTextMeasure, Fill, VennConfig, VennInput, compute_labels, svg_to_pdf, svg_to_png, venn,
};

/// Draw a Venn diagram of 2 to 6 sets
#[derive(Parser, Debug)]
#[command(name = "vennplot")]
#[command(version)]
#[command(about = "Render Venn diagrams to SVG, PNG or PDF", long_about = None)]
struct Args {
    /// Input document with `sets` (and optional `names`) as TOML, YAML or JSON (use "-" for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file path (extension determines format: .svg, .png or .pdf)
    #[arg(short, long, value_name = "OUTPUT")]
    output: PathBuf,

    /// Diagram settings file (TOML, YAML or JSON)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Label contents, overriding the config: any of logic, number, percent
    #[arg(long, value_delimiter = ',')]
    fill: Option<Vec<Fill>>,

    /// Set names, overriding the config and the input document
    #[arg(long, value_delimiter = ',')]
    names: Option<Vec<String>>,

    /// Title drawn above the diagram
    #[arg(long)]
    title: Option<String>,

    /// Raster scale multiplier for PNG output
    #[arg(long, default_value_t = 1.0)]
    png_scale: f32,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Svg,
    Png,
    Pdf,
}

impl OutputFormat {
    fn from_path(path: &Path) -> Result<Self, String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or("Output file has no extension")?
            .to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(format!(
                "Unsupported output format: .{} (use .svg, .png or .pdf)",
                ext
            )),
        }
    }
}

fn main() -> Result<(), String> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vennplot=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let format = OutputFormat::from_path(&args.output)?;

    let mut config = if let Some(ref config_path) = args.config {
        if config_path.exists() && config_path.is_file() {
            let content = std::fs::read_to_string(config_path)
                .map_err(|e| format!("Failed to read config file: {}", e))?;
            VennConfig::parse(&content).map_err(|e| format!("Invalid config file: {}", e))?
        } else {
            return Err(format!("Config file not found: {}", config_path.display()));
        }
    } else {
        VennConfig::default()
    };

    let source = if args.input.to_str() == Some("-") {
        let mut buffer = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        buffer
    } else {
        std::fs::read_to_string(&args.input)
            .map_err(|e| format!("Failed to read input file: {}", e))?
    };
    let input = VennInput::parse(&source).map_err(|e| format!("Invalid input: {}", e))?;

    if let Some(names) = args.names {
        config.names = names;
    } else if config.names.is_empty() {
        config.names = input.names.clone();
    }
    if let Some(fill) = args.fill {
        config.fill = fill;
    }

    let labels = compute_labels(&input.sets, &config.fill).map_err(|e| e.to_string())?;
    let mut figure = venn(&labels, &config.to_options()).map_err(|e| e.to_string())?;
    if let Some(title) = args.title {
        figure.axes_mut().set_title(title, config.font_size * 1.2);
    }

    let mut measure = CosmicTextMeasure::new();
    let svg = figure.to_svg(&mut measure);

    match format {
        OutputFormat::Svg => {
            std::fs::write(&args.output, &svg)
                .map_err(|e| format!("Failed to write SVG: {}", e))?;
        }
        OutputFormat::Png => {
            let png_data = svg_to_png(&svg, args.png_scale).map_err(|e| e.to_string())?;
            std::fs::write(&args.output, png_data)
                .map_err(|e| format!("Failed to write PNG: {}", e))?;
        }
        OutputFormat::Pdf => {
            let pdf_data = svg_to_pdf(&svg).map_err(|e| e.to_string())?;
            std::fs::write(&args.output, pdf_data)
                .map_err(|e| format!("Failed to write PDF: {}", e))?;
        }
    }

    tracing::info!(sets = input.sets.len(), output = %args.output.display(), "diagram saved");
    Ok(())
}
