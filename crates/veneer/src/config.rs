//! Page Configuration

use serde::{Deserialize, Serialize};
use veneer_dom::{Engine, Quirks};

/// Page configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine the page is rendered by
    pub engine: Engine,

    /// Quirks to use instead of the engine's defaults
    pub quirks: Option<Quirks>,

    /// Detach every observed element's listeners on unload
    pub sweep_on_unload: bool,

    /// Announce `dom:loaded` once the document is ready
    pub content_loaded: bool,
}

impl Config {
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Quirks in effect: the override if any, else the engine's own
    pub fn quirks(&self) -> Quirks {
        self.quirks.unwrap_or_else(|| self.engine.quirks())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: Engine::default(),
            quirks: None,
            sweep_on_unload: true,
            content_loaded: true,
        }
    }
}
