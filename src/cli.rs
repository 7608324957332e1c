use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ThemeMode};

#[derive(Debug, Parser)]
#[command(name = "datapulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live planetary counters in your terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/datapulse/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start in day theme
    #[arg(long)]
    pub light: bool,

    /// Start with ambient sound on
    #[arg(long)]
    pub sound: bool,

    /// Skip the intro screen
    #[arg(long)]
    pub no_intro: bool,

    /// Target redraw rate
    #[arg(long)]
    pub fps: Option<u64>,

    /// Write logs here instead of the default cache location
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags override the config file
    pub fn apply(&self, config: &mut Config) {
        if self.light {
            config.display.theme = ThemeMode::Light;
        }
        if self.sound {
            config.ambience.enabled = true;
        }
        if self.no_intro {
            config.display.show_intro = false;
        }
        if let Some(fps) = self.fps {
            config.display.fps = fps;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
