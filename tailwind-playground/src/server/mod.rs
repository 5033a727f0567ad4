use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderName, Request};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tower_livereload::{LiveReloadLayer, Reloader};

use crate::config::PlaygroundConfig;
use crate::editor::{EditorSession, RenderedPreview};
use crate::error::PlaygroundError;
use crate::palette::{swatches, Utility};
use crate::preview::{PreviewTemplate, PREVIEW_SANDBOX};
use crate::settings::{Settings, SettingsStore};
use crate::snippets::{Snippet, CATALOG};
use crate::sync::HeightSync;
use crate::tour::{Tour, TourStatus};

mod css;
mod toolbar;
mod panels;
mod inline_js;
mod page;
pub(crate) mod util;

/// Everything the routes share: the open document, persisted settings and
/// where they live, the preview height parameters and the running tour.
pub struct DevState {
    session: EditorSession,
    settings: Settings,
    store: SettingsStore,
    sync: HeightSync,
    tour: Option<Tour>,
}

pub type SharedState = Arc<Mutex<DevState>>;

impl DevState {
    /// Load settings from `store` and reopen the saved document, if any.
    pub fn new(store: SettingsStore, template: PreviewTemplate, sync: HeightSync) -> Self {
        let settings = store.load_or_default();
        let session = EditorSession::restore(&settings, template);
        Self {
            session,
            settings,
            store,
            sync,
            tour: None,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the document, as if typed.
    pub fn seed(&mut self, source: impl Into<String>) {
        self.session.edit(source);
    }

    /// Write `next` to the store. The in-memory settings change only once
    /// the write succeeded.
    fn commit(&mut self, next: Settings) -> crate::error::Result<()> {
        self.store.save(&next)?;
        self.settings = next;
        Ok(())
    }

    fn tour_status(&self) -> TourStatus {
        // No tour running reads as cancelled.
        self.tour.as_ref().map_or(TourStatus::Cancelled, Tour::status)
    }
}

/// Poisoning is ignored: the state holds no cross-field invariant.
fn lock(state: &SharedState) -> MutexGuard<'_, DevState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(serve_host))
        .route("/render", post(serve_render))
        .route("/preview.html", get(serve_preview))
        .route("/snippets.json", get(serve_snippets))
        .route("/palette.json", get(serve_palette))
        .route("/settings", get(serve_settings))
        .route("/save", post(serve_save))
        .route("/tour/dismiss", post(serve_tour_dismiss))
        .route("/tour/start", post(serve_tour_start))
        .route("/tour/next", post(serve_tour_next))
        .route("/tour/back", post(serve_tour_back))
        .route("/tour/cancel", post(serve_tour_cancel))
        .route("/download", get(serve_download))
        .with_state(state)
}

/// Start the playground server. With `watch_file` set, the file seeds the
/// editor and every change to it replaces the document and reloads the page.
pub async fn run(config: PlaygroundConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = config
        .settings_path
        .clone()
        .map(SettingsStore::at)
        .unwrap_or_else(SettingsStore::default_location);
    tracing::info!(path = %store.path().display(), "settings");

    let mut dev = DevState::new(
        store,
        config.preview.template(),
        config.preview.height_sync(),
    );
    if let Some(path) = &config.watch_file {
        let text = std::fs::read_to_string(path).map_err(|e| PlaygroundError::io(path, e))?;
        dev.seed(text);
    }
    let state = Arc::new(Mutex::new(dev));

    // Only the host page gets the reload script; payloads and downloads
    // must stay byte-exact.
    let livereload = LiveReloadLayer::new()
        .request_predicate(|req: &Request<Body>| req.uri().path() == "/");
    let reloader = livereload.reloader();

    let watcher = match &config.watch_file {
        Some(path) => Some(watch_seed(path.clone(), state.clone(), reloader)?),
        None => None,
    };

    let app = router(state).layer(livereload);

    let addr = config.addr();
    eprintln!("Tailwind Playground");
    if let Some(path) = &config.watch_file {
        eprintln!("  file:      {}", path.display());
    }
    eprintln!("  editor:    http://{addr}/");
    eprintln!("  preview:   http://{addr}/preview.html");
    eprintln!("  download:  http://{addr}/download");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    // Keep watcher alive
    drop(watcher);
    Ok(())
}

fn watch_seed(
    path: PathBuf,
    state: SharedState,
    reloader: Reloader,
) -> crate::error::Result<RecommendedWatcher> {
    let file_name = path.file_name().map(|n| n.to_os_string());
    let source_path = path.clone();
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("watch error: {e}");
                return;
            }
        };
        if !event.kind.is_modify() {
            return;
        }
        if !event.paths.iter().any(|p| p.file_name() == file_name.as_deref()) {
            return;
        }
        match std::fs::read_to_string(&source_path) {
            Ok(text) => {
                lock(&state).seed(text);
                tracing::info!(file = %source_path.display(), "reloaded");
                reloader.reload();
            }
            Err(e) => tracing::warn!(file = %source_path.display(), "cannot re-read: {e}"),
        }
    })?;
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

// ── Route handlers ────────────────────────────────────────────────────

async fn serve_host(State(state): State<SharedState>) -> Html<String> {
    Html(page::build_host_page(&mut lock(&state)))
}

#[derive(Deserialize)]
struct SourceRequest {
    source: String,
}

/// Every edit re-renders immediately; the response carries the revision so
/// the browser can drop answers that arrive out of order.
async fn serve_render(
    State(state): State<SharedState>,
    Json(req): Json<SourceRequest>,
) -> Json<RenderedPreview> {
    let rendered = lock(&state).session.apply_edit(req.source);
    tracing::debug!(revision = rendered.revision, "rendered");
    Json(rendered)
}

/// The current payload as a standalone document, under the same sandbox the
/// editor frame applies.
async fn serve_preview(
    State(state): State<SharedState>,
) -> ([(HeaderName, String); 2], String) {
    let payload = lock(&state).session.render().payload;
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_SECURITY_POLICY, PREVIEW_SANDBOX.csp_header()),
        ],
        payload,
    )
}

async fn serve_snippets() -> Json<&'static [Snippet]> {
    Json(CATALOG)
}

async fn serve_palette() -> Json<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for utility in Utility::ALL {
        let groups = serde_json::to_value(swatches(utility)).unwrap_or_default();
        map.insert(utility.prefix().to_string(), groups);
    }
    Json(serde_json::Value::Object(map))
}

async fn serve_settings(State(state): State<SharedState>) -> Json<Settings> {
    Json(lock(&state).settings.clone())
}

#[derive(Serialize)]
struct SaveResponse {
    ok: bool,
    error: Option<String>,
}

impl From<crate::error::Result<()>> for SaveResponse {
    fn from(res: crate::error::Result<()>) -> Self {
        match res {
            Ok(()) => SaveResponse {
                ok: true,
                error: None,
            },
            Err(e) => {
                tracing::error!("{e}");
                SaveResponse {
                    ok: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

async fn serve_save(
    State(state): State<SharedState>,
    Json(req): Json<SourceRequest>,
) -> Json<SaveResponse> {
    let mut dev = lock(&state);
    if dev.session.source() != req.source {
        dev.session.edit(req.source.clone());
    }
    let mut next = dev.settings.clone();
    next.saved_source = Some(req.source);
    Json(dev.commit(next).into())
}

async fn serve_tour_dismiss(State(state): State<SharedState>) -> Json<SaveResponse> {
    let mut dev = lock(&state);
    let mut next = dev.settings.clone();
    crate::tour::skip(&mut next);
    Json(dev.commit(next).into())
}

// ── Guided tour ───────────────────────────────────────────────────────
//
// The page renders whatever step the server reports; a status other than
// `active` closes the overlay.

async fn serve_tour_start(State(state): State<SharedState>) -> Json<TourStatus> {
    let mut dev = lock(&state);
    let mut next = dev.settings.clone();
    let tour = Tour::start(&mut next);
    if let Err(e) = dev.commit(next) {
        tracing::warn!("tour started but dismissal not saved: {e}");
    }
    dev.tour = Some(tour);
    Json(dev.tour_status())
}

async fn serve_tour_next(State(state): State<SharedState>) -> Json<TourStatus> {
    let mut dev = lock(&state);
    if let Some(tour) = dev.tour.as_mut() {
        tour.next();
    }
    Json(dev.tour_status())
}

async fn serve_tour_back(State(state): State<SharedState>) -> Json<TourStatus> {
    let mut dev = lock(&state);
    if let Some(tour) = dev.tour.as_mut() {
        tour.back();
    }
    Json(dev.tour_status())
}

async fn serve_tour_cancel(State(state): State<SharedState>) -> Json<TourStatus> {
    let mut dev = lock(&state);
    if let Some(tour) = dev.tour.as_mut() {
        tour.cancel();
    }
    Json(dev.tour_status())
}

async fn serve_download(
    State(state): State<SharedState>,
) -> ([(HeaderName, String); 2], String) {
    let download = lock(&state).session.download();
    (
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (header::CONTENT_DISPOSITION, download.content_disposition()),
        ],
        download.body,
    )
}
