//! HTML shell around the rendered report body.
//!
//! Produces one self-contained document: stylesheet, images and charts are
//! all inline so the headless renderer needs no network or file access.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use dpe_render::{RenderResult, Section, escape_html, render_report};

use crate::asset::{ImageAsset, Photo};
use crate::summary::SummaryFields;
use crate::theme::ThemeColors;

const STYLESHEET: &str = include_str!("report.css");

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Everything around the report text that shapes the final document.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Name of the uploaded source document, shown in the header.
    pub original_name: String,
    pub theme: ThemeColors,
    pub logo: Option<ImageAsset>,
    /// Cover image. Takes precedence over `default_cover`.
    pub cover: Option<ImageAsset>,
    /// Cover file read when `cover` is `None`. Missing or unreadable files
    /// mean no cover page.
    pub default_cover: Option<PathBuf>,
    /// Full-page images appended after the footer, in order.
    pub end_pages: Vec<ImageAsset>,
    pub photos: Vec<Photo>,
    /// Date printed in the footer.
    pub generated_on: NaiveDate,
}

impl ReportOptions {
    /// Options with the default theme, no images and today's date.
    #[must_use]
    pub fn new(original_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            theme: ThemeColors::default(),
            logo: None,
            cover: None,
            default_cover: None,
            end_pages: Vec::new(),
            photos: Vec::new(),
            generated_on: Local::now().date_naive(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeColors) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_logo(mut self, logo: ImageAsset) -> Self {
        self.logo = Some(logo);
        self
    }

    #[must_use]
    pub fn with_cover(mut self, cover: ImageAsset) -> Self {
        self.cover = Some(cover);
        self
    }

    #[must_use]
    pub fn with_default_cover(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_cover = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_end_page(mut self, page: ImageAsset) -> Self {
        self.end_pages.push(page);
        self
    }

    #[must_use]
    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photos.push(photo);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    /// Cover data URI: explicit cover first, then the default cover file.
    fn cover_uri(&self) -> Option<String> {
        if let Some(cover) = &self.cover {
            return Some(cover.data_uri());
        }
        let path = self.default_cover.as_deref()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No default cover");
            return None;
        }
        ImageAsset::load_best_effort(path).map(|asset| asset.data_uri())
    }
}

/// Render report text and wrap it into a complete HTML document.
///
/// Summary values are extracted from the same text the body is rendered
/// from.
#[must_use]
pub fn assemble(text: &str, options: &ReportOptions) -> String {
    let body = render_report(text);
    let summary = SummaryFields::extract(text);
    tracing::debug!(
        sections = body.sections.len(),
        body_len = body.html.len(),
        "Rendered report body"
    );
    render_document(&body, &summary, options)
}

/// Wrap an already rendered body.
#[must_use]
pub fn render_document(
    body: &RenderResult,
    summary: &SummaryFields,
    options: &ReportOptions,
) -> String {
    let theme = &options.theme;
    let mut html = String::with_capacity(body.html.len() + STYLESHEET.len() + 8192);

    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>DPE Simplifié</title>\n");
    html.push_str("<style>\n");
    let _ = write!(
        html,
        ":root {{\n  --primary: {};\n  --secondary: {};\n  --light: {};\n  \
         --very-light: {};\n  --faint: {};\n  --primary-translucent: {}33;\n}}\n",
        theme.primary, theme.secondary, theme.light, theme.very_light, theme.faint, theme.primary,
    );
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");

    if let Some(cover) = options.cover_uri() {
        let _ = writeln!(
            html,
            "<div class=\"cover-page\"><img src=\"{cover}\" alt=\"Couverture\"/></div>"
        );
    }

    render_table_of_contents(&mut html, &body.sections);
    render_header(&mut html, options);

    html.push_str("<div class=\"body\">\n");
    summary.render(&mut html, &theme.primary);
    html.push_str(&body.html);
    html.push('\n');
    render_photos(&mut html, &options.photos);
    html.push_str("</div>\n");

    render_footer(&mut html, options.generated_on);

    for (i, page) in options.end_pages.iter().enumerate() {
        let _ = writeln!(
            html,
            "<div class=\"end-page\"><img src=\"{}\" alt=\"Page de fin {}\"/></div>",
            page.data_uri(),
            i + 1
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Render the `SOMMAIRE` page. Omitted when there are no sections.
fn render_table_of_contents(html: &mut String, sections: &[Section]) {
    if sections.is_empty() {
        return;
    }
    html.push_str("<div class=\"sommaire-page\">\n");
    html.push_str("<h1 class=\"sommaire-title\">SOMMAIRE</h1>\n");
    html.push_str("<div class=\"sommaire-items\">\n");
    for section in sections {
        let _ = writeln!(
            html,
            "<a class=\"sommaire-item\" href=\"#{}\"><span class=\"sommaire-number\">{}</span>\
             <span class=\"sommaire-text\">{}</span></a>",
            section.anchor(),
            section.label(),
            escape_html(&section.title),
        );
    }
    html.push_str("</div>\n</div>\n");
}

fn render_header(html: &mut String, options: &ReportOptions) {
    html.push_str("<div class=\"header\">\n");
    html.push_str(
        "<div class=\"deco-1\"></div><div class=\"deco-2\"></div><div class=\"deco-3\"></div>\n",
    );
    if let Some(logo) = &options.logo {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"Logo\" class=\"header-logo\"/>",
            logo.data_uri()
        );
    }
    html.push_str("<div class=\"header-content\">\n");
    html.push_str("<div class=\"badge\">Rapport Énergétique</div>\n");
    html.push_str("<h1>Votre DPE Simplifié</h1>\n");
    let _ = writeln!(
        html,
        "<p>Basé sur : {}</p>",
        escape_html(&options.original_name)
    );
    html.push_str("</div>\n</div>\n");
}

fn render_photos(html: &mut String, photos: &[Photo]) {
    if photos.is_empty() {
        return;
    }
    html.push_str("<div class=\"photos-section\">\n");
    html.push_str("<h2>📸 Photos du bâtiment</h2>\n");
    html.push_str("<div class=\"photo-grid\">\n");
    for (i, photo) in photos.iter().enumerate() {
        let _ = write!(
            html,
            "<div class=\"photo-item\"><img src=\"{}\" alt=\"Photo {}\"/>",
            photo.image.data_uri(),
            i + 1
        );
        if let Some(caption) = photo.caption.as_deref().filter(|c| !c.is_empty()) {
            let _ = write!(
                html,
                "<p class=\"photo-caption\">{}</p>",
                escape_html(caption)
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
}

fn render_footer(html: &mut String, date: NaiveDate) {
    html.push_str("<div class=\"footer\">\n");
    let _ = writeln!(
        html,
        "<p>Ce document a été généré automatiquement par DPE Simplifié le {}.</p>",
        french_long_date(date)
    );
    html.push_str("<p>Veuillez vérifier le contenu avant de le transmettre à votre client.</p>\n");
    html.push_str("</div>\n");
}

/// `07 octobre 2026`.
fn french_long_date(date: NaiveDate) -> String {
    let month = FRENCH_MONTHS[date.month0() as usize];
    format!("{:02} {month} {}", date.day(), date.year())
}
