//! Workspace initialization command

use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use crate::error::CliResult;
use crate::workspace::WORKSPACE_FILE;

/// Initialize a new DigiLeTs workspace
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Workspace name
    pub name: String,

    /// Create with a small example corpus
    #[arg(long)]
    pub examples: bool,

    /// Initialize Git repository
    #[arg(long)]
    pub git: bool,
}

impl InitCommand {
    pub async fn execute(
        self,
        workspace: PathBuf,
        _config: Option<PathBuf>,
    ) -> CliResult<()> {
        info!("Initializing DigiLeTs workspace: {}", self.name);

        let workspace_dir = workspace.join(&self.name);
        std::fs::create_dir_all(&workspace_dir)?;

        // Create basic directory structure
        std::fs::create_dir_all(workspace_dir.join("data"))?;
        std::fs::create_dir_all(workspace_dir.join("exports"))?;

        // Create default config file
        let config_content = r#"# DigiLeTs Workspace Configuration
[workspace]
name = "{name}"
version = "0.1.0"

[corpus]
data_dir = "data"
corpus_suffix = "_preprocessed"   # recording files end with this
info_suffix = "_info"             # metadata files are skipped

[preprocess]
num_steps = 100           # points per resampled trajectory
instances_per_class = 5   # recordings per symbol

[grid]
num_symbols = 62          # digits, upper case, lower case
instances_per_symbol = 5
max_points = 250          # longer traces are cut off
"#;

        let config_content = config_content.replace("{name}", &self.name);
        std::fs::write(workspace_dir.join(WORKSPACE_FILE), config_content)?;

        if self.examples {
            // Create a tiny synthetic recording plus its metadata twin
            let data_dir = workspace_dir.join("data");
            std::fs::write(data_dir.join("000-sample_preprocessed"), sample_blob())?;
            std::fs::write(
                data_dir.join("000-sample_info"),
                "participant: sample\nsession: 0\n",
            )?;
        }

        if self.git {
            // Initialize git repository
            std::process::Command::new("git")
                .arg("init")
                .current_dir(&workspace_dir)
                .output()?;

            // Create .gitignore
            let gitignore_content = r#"# Generated files
/exports/

# Temporary files
*.tmp
*.log

# IDE files
.vscode/
.idea/
*.swp
*.swo

# OS files
.DS_Store
Thumbs.db
"#;
            std::fs::write(workspace_dir.join(".gitignore"), gitignore_content)?;
        }

        info!("Workspace initialized at: {}", workspace_dir.display());
        info!("Run 'cd {}' to enter the workspace", self.name);

        Ok(())
    }
}

/// Build a small recording blob: one label line and two symbols with
/// five instances each, enough to exercise the whole pipeline.
fn sample_blob() -> String {
    let labels: Vec<String> = ('0'..='9')
        .chain('A'..='Z')
        .chain('a'..='z')
        .map(|c| c.to_string())
        .collect();

    let mut blob = String::new();
    blob.push_str(&labels.join(" "));
    blob.push('\n');

    for symbol in 0..2usize {
        for instance in 0..5usize {
            let mut line = String::new();
            for i in 0..8usize {
                let t = i as f32;
                let x = t * 0.1 * (symbol + 1) as f32;
                let y = t * t * 0.01 + instance as f32 * 0.05;
                let pressure = 0.5 + (i % 4) as f32 * 0.1;
                let pen_down = if i + 1 < 8 { 1.0 } else { 0.0 };
                let time = t * 0.012;
                if i > 0 {
                    line.push(' ');
                }
                let _ = write!(
                    line,
                    "{:.4} {:.4} {:.4} {:.1} {:.4}",
                    x, y, pressure, pen_down, time
                );
            }
            blob.push_str(&line);
            blob.push('\n');
        }
    }

    blob
}
