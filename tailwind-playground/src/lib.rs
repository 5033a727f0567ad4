pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod notice;
pub mod palette;
pub mod preview;
pub mod settings;
pub mod snippets;
pub mod sync;
pub mod tour;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use editor::{EditorSession, RenderedPreview};
pub use error::{PlaygroundError, Result};
pub use preview::{build_payload, PreviewTemplate, PREVIEW_SANDBOX};
pub use settings::{Settings, SettingsStore};
pub use sync::HeightSync;
