//! Workspace management for DigiLeTs projects

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use digilets_pipeline::{GridLayout, PreprocessConfig};

use crate::error::{CliError, CliResult};

/// Name of the workspace manifest file
pub const WORKSPACE_FILE: &str = "digilets.toml";

/// Workspace configuration stored in digilets.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Workspace metadata
    pub workspace: WorkspaceInfo,

    /// Corpus discovery settings
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Preprocessing settings
    #[serde(default)]
    pub preprocess: PreprocessSection,

    /// Grid layout settings
    #[serde(default)]
    pub grid: GridSection,
}

/// Workspace metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    /// Workspace name
    pub name: String,

    /// Workspace version
    pub version: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Where recordings live and how corpus files are recognized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Directory containing recording files, relative to the workspace root
    pub data_dir: String,

    /// Suffix that marks a file as a corpus recording
    pub corpus_suffix: String,

    /// Suffix that marks a file as metadata to be skipped
    pub info_suffix: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            corpus_suffix: digilets_pipeline::dataset::CORPUS_SUFFIX.to_string(),
            info_suffix: digilets_pipeline::dataset::INFO_SUFFIX.to_string(),
        }
    }
}

/// Preprocessing parameters applied when loading the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessSection {
    /// Number of points every trajectory is resampled to
    pub num_steps: usize,

    /// Recordings per symbol, used for index-based labeling
    pub instances_per_class: usize,
}

impl Default for PreprocessSection {
    fn default() -> Self {
        Self {
            num_steps: digilets_pipeline::DEFAULT_NUM_STEPS,
            instances_per_class: digilets_pipeline::DEFAULT_INSTANCES_PER_CLASS,
        }
    }
}

impl PreprocessSection {
    /// Convert to a validated pipeline configuration
    pub fn to_config(&self) -> CliResult<PreprocessConfig> {
        Ok(PreprocessConfig::new(
            self.num_steps,
            self.instances_per_class,
        )?)
    }
}

/// Symbol grid parameters for visualization and dynamics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSection {
    /// Number of symbol classes
    pub num_symbols: usize,

    /// Instances recorded per symbol
    pub instances_per_symbol: usize,

    /// Trajectories longer than this are truncated
    pub max_points: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        let layout = GridLayout::default();
        Self {
            num_symbols: layout.num_symbols,
            instances_per_symbol: layout.instances_per_symbol,
            max_points: layout.max_points,
        }
    }
}

impl GridSection {
    /// Convert to a validated grid layout
    pub fn to_layout(&self) -> CliResult<GridLayout> {
        Ok(GridLayout::new(
            self.num_symbols,
            self.instances_per_symbol,
            self.max_points,
        )?)
    }
}

/// A DigiLeTs workspace rooted at a directory containing digilets.toml
#[derive(Debug)]
pub struct Workspace {
    /// Root directory of the workspace
    pub root: PathBuf,

    /// Parsed workspace configuration
    pub config: WorkspaceConfig,
}

impl Workspace {
    /// Open a workspace at the given root directory
    pub fn new(root: impl AsRef<Path>) -> CliResult<Self> {
        let root = root.as_ref().to_path_buf();
        let config = Self::load_config(&root)?;
        Ok(Self { root, config })
    }

    /// Load workspace configuration from digilets.toml
    pub fn load_config(root: &Path) -> CliResult<WorkspaceConfig> {
        let config_path = root.join(WORKSPACE_FILE);
        if !config_path.exists() {
            return Err(CliError::workspace(format!(
                "No {} found in {}",
                WORKSPACE_FILE,
                root.display()
            )));
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: WorkspaceConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check whether a directory looks like a workspace root
    pub fn is_valid(root: &Path) -> bool {
        root.join(WORKSPACE_FILE).exists()
    }

    /// Directory containing recording files
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(&self.config.corpus.data_dir)
    }

    /// Directory where exported datasets are written
    pub fn exports_dir(&self) -> PathBuf {
        self.root.join("exports")
    }

    /// Create the directories the workspace expects
    pub fn ensure_directories(&self) -> CliResult<()> {
        std::fs::create_dir_all(self.data_dir())?;
        std::fs::create_dir_all(self.exports_dir())?;
        Ok(())
    }

    /// Walk up from a starting directory until a workspace root is found
    pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
        let mut current = start;
        loop {
            if Self::is_valid(current) {
                return Some(current.to_path_buf());
            }
            current = current.parent()?;
        }
    }
}
