//! Command-line interface for batch painting of PNG files

use crate::brush::BrushTexture;
use crate::io::configuration::{
    DEFAULT_ANGLE_BINS, DEFAULT_DETAIL_SCALES, DEFAULT_NOISE, DEFAULT_ORIENTED_STROKES,
    DEFAULT_SEED, DEFAULT_STROKES, DEFAULT_STROKE_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::render::multi_scale::{
    multi_scale_oriented_paint, oriented_paint, painterly, tonal_paint,
};
use crate::render::TonalOrder;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Painting strategy applied to each source image
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaintMode {
    /// Coarse pass plus sharpness-guided detail pass, axis-aligned strokes
    Painterly,
    /// Both passes rotate strokes along local image structure
    Oriented,
    /// Oriented strokes painted brightest first
    LightToDark,
    /// Oriented strokes painted darkest first
    DarkToLight,
    /// Oriented coarse pass plus several tightening detail scales
    Multiscale,
}

impl PaintMode {
    const fn label(self) -> &'static str {
        match self {
            Self::Painterly => "painterly",
            Self::Oriented => "oriented",
            Self::LightToDark => "light-to-dark",
            Self::DarkToLight => "dark-to-light",
            Self::Multiscale => "multiscale",
        }
    }
}

#[derive(Parser)]
#[command(name = "impasto")]
#[command(
    author,
    version,
    about = "Repaint images with importance-sampled brush strokes"
)]
/// Command-line arguments for the painting tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Painting mode
    #[arg(short, long, value_enum, default_value_t = PaintMode::Painterly)]
    pub mode: PaintMode,

    /// Brush texture image (greyscale, luminance as opacity); a built-in
    /// elliptical stroke is used when omitted
    #[arg(short, long)]
    pub brush: Option<PathBuf>,

    /// Strokes per painting pass (defaults to 10000, or 7000 for
    /// oriented modes)
    #[arg(short = 'n', long)]
    pub strokes: Option<usize>,

    /// Longest side of a coarse-pass stroke in pixels
    #[arg(short = 'z', long, default_value_t = DEFAULT_STROKE_SIZE)]
    pub size: usize,

    /// Multiplicative color noise fraction in [0, 1]
    #[arg(long, default_value_t = DEFAULT_NOISE)]
    pub noise: f64,

    /// Random seed for reproducible painting
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of precomputed brush rotations
    #[arg(short, long, default_value_t = DEFAULT_ANGLE_BINS)]
    pub angles: usize,

    /// Detail scales for multiscale mode
    #[arg(long, default_value_t = DEFAULT_DETAIL_SCALES)]
    pub scales: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Stroke count, falling back to the mode's default
    pub const fn stroke_count(&self) -> usize {
        match self.strokes {
            Some(n) => n,
            None => match self.mode {
                PaintMode::Painterly => DEFAULT_STROKES,
                _ => DEFAULT_ORIENTED_STROKES,
            },
        }
    }
}

/// Orchestrates batch painting of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, painting, or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let brush = match &self.cli.brush {
            Some(path) => BrushTexture::from_image_file(path)?,
            None => BrushTexture::default_stroke(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &brush)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, brush: &BrushTexture) -> Result<()> {
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, self.cli.mode.label());
        }

        let im = load_image(input_path)?;
        let strokes = self.cli.stroke_count();
        let (size, noise, seed, angles) =
            (self.cli.size, self.cli.noise, self.cli.seed, self.cli.angles);

        let canvas = match self.cli.mode {
            PaintMode::Painterly => painterly(&im, brush, strokes, size, noise, seed)?,
            PaintMode::Oriented => {
                oriented_paint(&im, brush, strokes, size, noise, angles, seed)?
            }
            PaintMode::LightToDark => tonal_paint(
                &im,
                brush,
                strokes,
                size,
                noise,
                angles,
                TonalOrder::LightToDark,
                seed,
            )?,
            PaintMode::DarkToLight => tonal_paint(
                &im,
                brush,
                strokes,
                size,
                noise,
                angles,
                TonalOrder::DarkToLight,
                seed,
            )?,
            PaintMode::Multiscale => multi_scale_oriented_paint(
                &im,
                brush,
                strokes,
                size,
                noise,
                angles,
                self.cli.scales,
                seed,
            )?,
        };

        save_image(&canvas, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
