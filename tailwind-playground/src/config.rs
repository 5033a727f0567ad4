//! Server configuration: defaults, an optional JSON file, then CLI overrides.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlaygroundError, Result};
use crate::preview::{PreviewTemplate, STYLING_ENGINE_URL};
use crate::sync::{HeightSync, HEIGHT_PADDING_PX, MIN_CONTAINER_HEIGHT_PX};

pub const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub engine_url: String,
    pub padding_px: u32,
    pub min_height_px: u32,
    pub contain_navigation: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            engine_url: STYLING_ENGINE_URL.to_string(),
            padding_px: HEIGHT_PADDING_PX,
            min_height_px: MIN_CONTAINER_HEIGHT_PX,
            contain_navigation: true,
        }
    }
}

impl PreviewConfig {
    pub fn template(&self) -> PreviewTemplate {
        PreviewTemplate {
            engine_url: self.engine_url.clone(),
            contain_navigation: self.contain_navigation,
            ..PreviewTemplate::default()
        }
    }

    pub fn height_sync(&self) -> HeightSync {
        HeightSync::new(self.padding_px, self.min_height_px)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Settings file; the platform data directory when unset.
    pub settings_path: Option<PathBuf>,
    /// File whose contents seed the editor and are reloaded on change.
    pub watch_file: Option<PathBuf>,
    pub preview: PreviewConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            settings_path: None,
            watch_file: None,
            preview: PreviewConfig::default(),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| PlaygroundError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| PlaygroundError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
