//! `dpe render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use dpe_config::{CliSettings, Config};
use dpe_document::{
    HtmlRenderer, ImageAsset, PassthroughVulgarizer, Photo, Pipeline, PlainTextExtractor,
    ReportOptions, ThemeColors,
};

use crate::error::CliError;
use crate::output::Output;

/// A `--photo PATH[=CAPTION]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhotoArg {
    path: PathBuf,
    caption: Option<String>,
}

fn parse_photo(value: &str) -> Result<PhotoArg, String> {
    let (path, caption) = match value.split_once('=') {
        Some((path, caption)) => (path, Some(caption.trim())),
        None => (value, None),
    };
    if path.is_empty() {
        return Err("photo path cannot be empty".to_owned());
    }
    Ok(PhotoArg {
        path: PathBuf::from(path),
        caption: caption.filter(|c| !c.is_empty()).map(str::to_owned),
    })
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Report text in the markup dialect.
    input: PathBuf,

    /// Output HTML file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source document name shown in the header (default: input file name).
    #[arg(long)]
    name: Option<String>,

    /// Logo image shown in the header.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Cover page image (overrides the default cover).
    #[arg(long)]
    cover: Option<PathBuf>,

    /// Default cover image used when no --cover is given (overrides config).
    #[arg(long)]
    default_cover: Option<PathBuf>,

    /// Full-page image appended at the end. Repeatable.
    #[arg(long = "end-page")]
    end_pages: Vec<PathBuf>,

    /// Building photo, optionally captioned as PATH=CAPTION. Repeatable.
    #[arg(long = "photo", value_parser = parse_photo)]
    photos: Vec<PhotoArg>,

    /// Primary theme color, #RRGGBB (overrides config).
    #[arg(long, env = "DPE_PRIMARY_COLOR")]
    primary_color: Option<String>,

    /// Secondary theme color, #RRGGBB (overrides config).
    #[arg(long, env = "DPE_SECONDARY_COLOR")]
    secondary_color: Option<String>,

    /// Path to configuration file (default: auto-discover dpe.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            primary_color: self.primary_color.clone(),
            secondary_color: self.secondary_color.clone(),
            default_cover: self.default_cover.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let theme = ThemeColors::new(&config.theme.primary_color, &config.theme.secondary_color)?;
        let name = self.name.clone().unwrap_or_else(|| display_name(&self.input));

        let mut options = ReportOptions::new(name)
            .with_theme(theme)
            .with_default_cover(config.assets_resolved.default_cover.clone());
        if let Some(logo) = self.logo.as_deref().and_then(|p| load_image(p, &output)) {
            options = options.with_logo(logo);
        }
        if let Some(cover) = self.cover.as_deref().and_then(|p| load_image(p, &output)) {
            options = options.with_cover(cover);
        }
        for page in &self.end_pages {
            if let Some(image) = load_image(page, &output) {
                options = options.with_end_page(image);
            }
        }
        for photo in self.photos {
            if let Some(image) = load_image(&photo.path, &output) {
                options = options.with_photo(Photo {
                    image,
                    caption: photo.caption,
                });
            }
        }

        let document = std::fs::read(&self.input)?;
        let pipeline = Pipeline::new(PlainTextExtractor, PassthroughVulgarizer, HtmlRenderer);
        let rendered = pipeline.run(&document, &options)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                output.success(&format!("Report written to {}", path.display()));
            }
            None => std::io::stdout().lock().write_all(&rendered)?,
        }
        Ok(())
    }
}

/// Load an optional image, warning instead of failing.
fn load_image(path: &Path, output: &Output) -> Option<ImageAsset> {
    match ImageAsset::from_path(path) {
        Ok(image) => Some(image),
        Err(e) => {
            output.warning(&format!("Skipping image: {e}"));
            None
        }
    }
}

fn display_name(input: &Path) -> String {
    input.file_name().map_or_else(
        || input.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_photo_path_only() {
        assert_eq!(
            parse_photo("photos/facade.jpg").unwrap(),
            PhotoArg {
                path: PathBuf::from("photos/facade.jpg"),
                caption: None,
            }
        );
    }

    #[test]
    fn test_parse_photo_with_caption() {
        assert_eq!(
            parse_photo("sud.png=Façade sud = côté jardin").unwrap(),
            PhotoArg {
                path: PathBuf::from("sud.png"),
                caption: Some("Façade sud = côté jardin".to_owned()),
            }
        );
    }

    #[test]
    fn test_parse_photo_empty_caption() {
        assert_eq!(parse_photo("a.png=").unwrap().caption, None);
    }

    #[test]
    fn test_parse_photo_empty_path() {
        assert!(parse_photo("=légende").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/dpe-2026.txt")), "dpe-2026.txt");
    }
}
