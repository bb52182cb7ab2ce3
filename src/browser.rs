use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Étape manuelle préalable : ouvrir le planning et préparer le script de scraping.
pub trait ScrapeAssist {
    fn open_url(&self, url: &str) -> Result<()>;
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Implémentation par commandes système (`open`/`pbcopy` sur macOS).
#[derive(Debug, Clone)]
pub struct SystemAssist {
    pub opener: Vec<String>,
    pub clipboard: Vec<String>,
}

impl Default for SystemAssist {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self {
                opener: vec!["open".into()],
                clipboard: vec!["pbcopy".into()],
            }
        } else {
            Self {
                opener: vec!["xdg-open".into()],
                clipboard: vec!["xclip".into(), "-selection".into(), "clipboard".into()],
            }
        }
    }
}

fn split_program(cmd: &[String]) -> Result<(&String, &[String])> {
    match cmd.split_first() {
        Some(parts) => Ok(parts),
        None => bail!("empty command"),
    }
}

impl ScrapeAssist for SystemAssist {
    fn open_url(&self, url: &str) -> Result<()> {
        let (program, args) = split_program(&self.opener)?;
        let status = Command::new(program)
            .args(args)
            .arg(url)
            .status()
            .with_context(|| format!("running {program}"))?;
        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (program, args) = split_program(&self.clipboard)?;
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("running {program}"))?;
        child
            .stdin
            .take()
            .context("clipboard stdin unavailable")?
            .write_all(text.as_bytes())?;
        let status = child.wait()?;
        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}

/// Ouvre la page de planning puis copie le script de scraping dans le presse-papier.
pub fn prepare_scrape(assist: &dyn ScrapeAssist, schedule_url: &str, snippet: &str) -> Result<()> {
    assist
        .open_url(schedule_url)
        .with_context(|| format!("opening {schedule_url}"))?;
    assist
        .copy_to_clipboard(snippet)
        .context("copying scrape script to clipboard")?;
    Ok(())
}
