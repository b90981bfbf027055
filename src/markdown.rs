use crate::card::CardData;
use crate::error::ScrapeError;
use crate::normalize::sanitize_filename;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

// Inventory columns filled in by hand after the export.
const TRAILER: &str = "amount:\nvalue:\nsold_price:\noffer_price:\ntotal:\ncurrency: €\n";

/// Writes `<base_dir>/<set_no>/<set_no><card_no>_<slug>.md` and returns its path.
pub fn write_card(base_dir: &Path, card: &CardData) -> Result<PathBuf, ScrapeError> {
    let dir = base_dir.join(&card.set_no);
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder
        .create(&dir)
        .map_err(|e| ScrapeError::write(&dir, e))?;

    let path = dir.join(card_filename(card));
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(&path).map_err(|e| ScrapeError::write(&path, e))?;
    file.write_all(render_card(card).as_bytes())
        .map_err(|e| ScrapeError::write(&path, e))?;

    Ok(path)
}

pub fn card_filename(card: &CardData) -> String {
    format!(
        "{}{}_{}.md",
        card.set_no,
        card.card_no,
        sanitize_filename(&card.title)
    )
}

/// Front-matter plus a title heading. Values are not escaped, so a `"`
/// in a title or prop breaks the YAML.
pub fn render_card(card: &CardData) -> String {
    let mut out = String::from("---\n");
    out.push_str(&format!("title: \"{}\"\n", card.title));
    out.push_str(&format!("set_no: {}\n", card.set_no));
    out.push_str(&format!("card_no: {}\n", card.card_no));
    out.push_str(&format!(
        "photo: \"[[./{}|{}]]\"\n",
        card.image_path, card.image_name
    ));
    for (key, value) in &card.props {
        out.push_str(&format!("{}: \"{}\"\n", key, value));
    }
    out.push_str(TRAILER);
    out.push_str("---\n\n");
    out.push_str(&format!("# {}\n", card.title));
    out
}
