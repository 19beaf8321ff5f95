//! Upload-to-document pipeline.
//!
//! Text extraction, rewriting into the report dialect and final rendering
//! are delegated to collaborators behind traits. Their failures propagate to
//! the caller. The steps in between (chart injection and assembly) cannot
//! fail.

use dpe_render::inject_chart_directives;

use crate::template::{ReportOptions, assemble};

/// Pipeline error.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Text could not be extracted from the uploaded document.
    #[error("Extraction failed: {0}")]
    Extraction(String),
    /// The text could not be rewritten into the report dialect.
    #[error("Vulgarization failed: {0}")]
    Vulgarization(String),
    /// The assembled document could not be rendered.
    #[error("Rendering failed: {0}")]
    Rendering(String),
}

/// Turns an uploaded document into plain text.
pub trait Extractor {
    fn extract(&self, document: &[u8]) -> Result<String, PipelineError>;
}

/// Rewrites technical text into the report markup dialect.
pub trait Vulgarizer {
    fn vulgarize(&self, text: &str) -> Result<String, PipelineError>;
}

/// Turns an assembled HTML document into the final binary document.
pub trait Renderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, PipelineError>;
}

/// Decodes the upload as UTF-8 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, document: &[u8]) -> Result<String, PipelineError> {
        std::str::from_utf8(document)
            .map(str::to_owned)
            .map_err(|e| PipelineError::Extraction(e.to_string()))
    }
}

/// Returns the text unchanged, for input already written in the dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughVulgarizer;

impl Vulgarizer for PassthroughVulgarizer {
    fn vulgarize(&self, text: &str) -> Result<String, PipelineError> {
        Ok(text.to_owned())
    }
}

/// Returns the HTML document bytes for hand-off to an external renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, PipelineError> {
        Ok(html.as_bytes().to_vec())
    }
}

/// The full chain: extract, vulgarize, inject charts, assemble, render.
#[derive(Debug, Default)]
pub struct Pipeline<E, V, R> {
    extractor: E,
    vulgarizer: V,
    renderer: R,
}

impl<E: Extractor, V: Vulgarizer, R: Renderer> Pipeline<E, V, R> {
    pub fn new(extractor: E, vulgarizer: V, renderer: R) -> Self {
        Self {
            extractor,
            vulgarizer,
            renderer,
        }
    }

    /// Run every stage on `document`.
    pub fn run(&self, document: &[u8], options: &ReportOptions) -> Result<Vec<u8>, PipelineError> {
        let text = self.extractor.extract(document)?;
        tracing::info!(chars = text.chars().count(), "Extracted text");

        let report = self.vulgarizer.vulgarize(&text)?;
        tracing::info!(chars = report.chars().count(), "Rewrote report");

        let report = inject_chart_directives(&report);
        let html = assemble(&report, options);

        let output = self.renderer.render(&html)?;
        tracing::info!(bytes = output.len(), "Rendered document");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FailingVulgarizer;

    impl Vulgarizer for FailingVulgarizer {
        fn vulgarize(&self, _text: &str) -> Result<String, PipelineError> {
            Err(PipelineError::Vulgarization("rate limited".to_owned()))
        }
    }

    struct HeadingVulgarizer;

    impl Vulgarizer for HeadingVulgarizer {
        fn vulgarize(&self, text: &str) -> Result<String, PipelineError> {
            Ok(format!("# Votre score énergétique\n{text}"))
        }
    }

    fn options() -> ReportOptions {
        ReportOptions::new("rapport.pdf").with_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap())
    }

    #[test]
    fn test_plain_text_extractor() {
        assert_eq!(PlainTextExtractor.extract("été".as_bytes()).unwrap(), "été");
        let err = PlainTextExtractor.extract(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, PipelineError::Extraction(_)));
    }

    #[test]
    fn test_run_produces_document() {
        let pipeline = Pipeline::new(PlainTextExtractor, PassthroughVulgarizer, HtmlRenderer);
        let output = pipeline.run("# Intro\nBonjour".as_bytes(), &options()).unwrap();
        let html = String::from_utf8(output).unwrap();

        assert!(html.contains("<p>Bonjour</p>"));
        assert!(html.contains("SOMMAIRE"));
        assert!(html.contains("05 janvier 2026"));
    }

    #[test]
    fn test_run_injects_charts() {
        let pipeline = Pipeline::new(PlainTextExtractor, HeadingVulgarizer, HtmlRenderer);
        let output = pipeline
            .run("| Classe énergétique actuelle | C |".as_bytes(), &options())
            .unwrap();
        let html = String::from_utf8(output).unwrap();

        assert!(html.contains("CLASSE ÉNERGÉTIQUE"));
        assert!(html.contains("data-grade=\"C\""));
    }

    #[test]
    fn test_extraction_failure_propagates() {
        let pipeline = Pipeline::new(PlainTextExtractor, PassthroughVulgarizer, HtmlRenderer);
        let err = pipeline.run(&[0xc3, 0x28], &options()).unwrap_err();
        assert!(matches!(err, PipelineError::Extraction(_)));
    }

    #[test]
    fn test_vulgarizer_failure_propagates() {
        let pipeline = Pipeline::new(PlainTextExtractor, FailingVulgarizer, HtmlRenderer);
        let err = pipeline.run(b"texte", &options()).unwrap_err();
        assert!(matches!(err, PipelineError::Vulgarization(_)));
        assert_eq!(err.to_string(), "Vulgarization failed: rate limited");
    }
}
