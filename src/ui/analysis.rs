use pulldown_cmark::{Event, Options, Parser, html};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::form::messages;

#[derive(Debug, Error)]
#[error("could not render analysis: {0}")]
pub struct RenderError(pub String);

/// Turns the analysis text (markdown) into HTML for the results panel.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// CommonMark renderer backed by pulldown-cmark.
///
/// Raw HTML in the source is emitted as escaped text, never as markup.
#[derive(Debug, Default)]
pub struct CommonMarkRenderer;

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let events = Parser::new_ext(markdown, options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events);
        Ok(out)
    }
}

/// Body returned by the analysis endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Empty,
    Rendered(String),
    Error(String),
}

pub struct AnalysisPanel<R: MarkdownRenderer = CommonMarkRenderer> {
    renderer: R,
    content: PanelContent,
}

impl AnalysisPanel<CommonMarkRenderer> {
    pub fn new() -> Self {
        Self::with_renderer(CommonMarkRenderer)
    }
}

impl Default for AnalysisPanel<CommonMarkRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: MarkdownRenderer> AnalysisPanel<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            renderer,
            content: PanelContent::Empty,
        }
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    /// Populate the panel from a raw response body.
    pub fn apply_reply(&mut self, body: &str) -> &PanelContent {
        self.content = match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => match serde_json::from_value::<AnalysisResponse>(value) {
                Ok(response) => self.render_response(response),
                Err(e) => {
                    error!("analysis response had an unexpected shape: {}", e);
                    PanelContent::Error(messages::ANALYSIS_FAILED.to_string())
                }
            },
            Ok(_) => {
                error!("analysis response was not a JSON object");
                PanelContent::Error(messages::ANALYSIS_FAILED.to_string())
            }
            Err(e) => {
                error!("analysis response was not valid JSON: {}", e);
                PanelContent::Error(messages::ANALYSIS_FAILED.to_string())
            }
        };
        &self.content
    }

    /// The request itself failed.
    pub fn apply_failure(&mut self, reason: &str) -> &PanelContent {
        error!("analysis request failed: {}", reason);
        self.content = PanelContent::Error(messages::ANALYSIS_FAILED.to_string());
        &self.content
    }

    fn render_response(&self, response: AnalysisResponse) -> PanelContent {
        match (response.success, response.analysis) {
            (true, Some(text)) => match self.renderer.render(&text) {
                Ok(html) => PanelContent::Rendered(html),
                Err(e) => {
                    error!("{}", e);
                    PanelContent::Error(messages::ANALYSIS_FAILED.to_string())
                }
            },
            _ => PanelContent::Error(
                response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| messages::ANALYSIS_FAILED.to_string()),
            ),
        }
    }
}
