//! The single source-of-truth document and its propagation to the preview.
//!
//! Every edit replaces the whole text and the next render rebuilds the whole
//! payload. There is no debouncing, diffing or incremental patching.

use serde::Serialize;

use crate::export::Download;
use crate::preview::PreviewTemplate;
use crate::settings::Settings;

/// Starter document shown when nothing has been saved.
pub const DEFAULT_SOURCE: &str = r##"<!-- Tailwind CSS Playground -->
<!-- Try editing this code to see the changes in real-time -->

<div class="p-8 max-w-md mx-auto bg-white rounded-xl shadow-md overflow-hidden md:max-w-2xl">
  <div class="md:flex">
    <div class="md:shrink-0">
      <img class="h-48 w-full object-cover md:h-full md:w-48" src="https://images.unsplash.com/photo-1637734433731-621aca1c8cb6" alt="Modern building architecture">
    </div>
    <div class="p-8">
      <div class="uppercase tracking-wide text-sm text-indigo-500 font-semibold">Company retreats</div>
      <a href="#" class="block mt-1 text-lg leading-tight font-medium text-black hover:underline">Incredible accommodation for your team</a>
      <p class="mt-2 text-slate-500">Looking to take your team away on a retreat to enjoy awesome food and take in some sunshine? We have the perfect location.</p>
      <button class="mt-4 px-4 py-2 bg-indigo-500 text-white rounded hover:bg-indigo-600 transition">
        Book now
      </button>
    </div>
  </div>
</div>"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderState {
    /// The last payload reflects the current text.
    Idle,
    /// The text changed since the last payload was built.
    Dirty,
}

/// A payload together with the edit it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPreview {
    pub revision: u64,
    pub payload: String,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    source: String,
    state: RenderState,
    revision: u64,
    template: PreviewTemplate,
}

impl EditorSession {
    /// A fresh session starts dirty: nothing has been rendered yet.
    pub fn new(initial: impl Into<String>, template: PreviewTemplate) -> Self {
        Self {
            source: initial.into(),
            state: RenderState::Dirty,
            revision: 0,
            template,
        }
    }

    /// Start from the saved document, or the starter template.
    pub fn restore(settings: &Settings, template: PreviewTemplate) -> Self {
        Self::new(settings.initial_source(), template)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn template(&self) -> &PreviewTemplate {
        &self.template
    }

    /// Replace the document text.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.source = text.into();
        self.revision += 1;
        self.state = RenderState::Dirty;
    }

    /// Rebuild the payload from the current text.
    pub fn render(&mut self) -> RenderedPreview {
        let payload = self.template.render(&self.source);
        self.state = RenderState::Idle;
        RenderedPreview {
            revision: self.revision,
            payload,
        }
    }

    /// One keystroke's worth of work: replace the text, re-render at once.
    pub fn apply_edit(&mut self, text: impl Into<String>) -> RenderedPreview {
        self.edit(text);
        self.render()
    }

    pub fn download(&self) -> Download {
        Download::of_source(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_marks_dirty_and_render_settles() {
        let mut session = EditorSession::new("<p>a</p>", PreviewTemplate::default());
        assert_eq!(session.state(), RenderState::Dirty);
        session.render();
        assert_eq!(session.state(), RenderState::Idle);

        session.edit("<p>b</p>");
        assert_eq!(session.state(), RenderState::Dirty);
        assert_eq!(session.revision(), 1);

        let out = session.render();
        assert_eq!(session.state(), RenderState::Idle);
        assert_eq!(out.revision, 1);
        assert!(out.payload.contains("<p>b</p>"));
        assert!(!out.payload.contains("<p>a</p>"));
    }

    #[test]
    fn every_edit_rebuilds_the_whole_payload() {
        let mut session = EditorSession::new("", PreviewTemplate::default());
        let first = session.apply_edit("<div>1</div>");
        let second = session.apply_edit("<div>12</div>");
        assert_eq!(second.revision, first.revision + 1);
        assert_eq!(second.payload, PreviewTemplate::default().render("<div>12</div>"));
    }

    #[test]
    fn unclosed_markup_renders_without_error() {
        let mut session = EditorSession::new("", PreviewTemplate::default());
        let out = session.apply_edit(r#"<div class="p-4"><span>open"#);
        assert!(out.payload.contains(r#"<div class="p-4"><span>open"#));
    }

    #[test]
    fn restore_prefers_saved_source() {
        let settings = Settings {
            saved_source: Some("<h1>saved</h1>".into()),
            ..Settings::default()
        };
        let session = EditorSession::restore(&settings, PreviewTemplate::default());
        assert_eq!(session.source(), "<h1>saved</h1>");

        let fresh = EditorSession::restore(&Settings::default(), PreviewTemplate::default());
        assert_eq!(fresh.source(), DEFAULT_SOURCE);
    }
}
