use crate::card::CardData;
use crate::error::ScrapeError;
use crate::normalize::{normalize_key, normalize_spaces, sanitize_filename};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::io::Read;

lazy_static! {
    static ref HEADING: Selector = Selector::parse("h1 a").unwrap();
    static ref INLINE_TABLE: Selector = Selector::parse("table.inline").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref KEY_CELL: Selector = Selector::parse("td.col0").unwrap();
    static ref VALUE_CELL: Selector = Selector::parse("td.col1").unwrap();
    static ref CARD_IMAGE: Selector = Selector::parse("p span a img.media").unwrap();
    // e.g. "1R1": set, rarity letter, card number
    static ref METADATA_RE: Regex = Regex::new(r"([0-9]+)([A-Z])([0-9]+)").unwrap();
}

/// Parses one card page into a `CardData`.
///
/// `base_url` is prepended verbatim to the image `src`. The set and card
/// numbers come from the heading token; the driver may overwrite them.
pub fn scrape_lotr_card<R: Read>(mut reader: R, base_url: &str) -> Result<CardData, ScrapeError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(ScrapeError::ParseFailed)?;
    let document = Html::parse_document(&String::from_utf8_lossy(&bytes));

    let heading = document
        .select(&HEADING)
        .next()
        .map(element_text)
        .unwrap_or_default();
    let heading = heading.trim();
    if heading.is_empty() {
        return Err(ScrapeError::HeadingMissing);
    }

    let title = heading.split('(').next().unwrap_or_default().trim();
    if title.is_empty() {
        return Err(ScrapeError::HeadingMissing);
    }

    let (set_no, card_no) = parse_metadata(heading)?;
    let props = scrape_props(&document);

    let image = document
        .select(&CARD_IMAGE)
        .next()
        .ok_or(ScrapeError::ImageMissing)?;
    let src = image.value().attr("src").ok_or(ScrapeError::ImageMissing)?;
    let image_name = image.value().attr("title").unwrap_or_default();

    Ok(CardData {
        title: title.to_string(),
        set_no,
        card_no,
        image_url: format!("{}{}", base_url, src),
        image_path: format!("{}{}", sanitize_filename(title), file_extension(src)),
        image_name: image_name.to_string(),
        props,
    })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn parse_metadata(heading: &str) -> Result<(String, String), ScrapeError> {
    let missing = || ScrapeError::MetadataMissing(heading.to_string());
    let caps = METADATA_RE.captures(heading).ok_or_else(missing)?;

    let out_of_range = || {
        ScrapeError::MetadataMissing(format!("{} (token {} out of range)", heading, &caps[0]))
    };
    let set: u32 = caps[1].parse().map_err(|_| out_of_range())?;
    let card: u32 = caps[3].parse().map_err(|_| out_of_range())?;
    if set > 99 || card > 999 {
        return Err(out_of_range());
    }

    Ok((format!("{:02}", set), format!("{:03}", card)))
}

fn scrape_props(document: &Html) -> HashMap<String, String> {
    let mut props = HashMap::new();

    let table = match document.select(&INLINE_TABLE).next() {
        Some(table) => table,
        None => return props,
    };

    for row in table.select(&ROW) {
        let key = row.select(&KEY_CELL).next().map(element_text).unwrap_or_default();
        let value = row
            .select(&VALUE_CELL)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }

        let key = normalize_key(key);
        if key.is_empty() {
            continue;
        }
        props.insert(key, normalize_spaces(value));
    }

    props
}

/// Extension of the last path segment, dot included; empty when there is none.
fn file_extension(src: &str) -> &str {
    let segment = &src[src.rfind('/').map_or(0, |i| i + 1)..];
    match segment.rfind('.') {
        Some(i) => &segment[i..],
        None => "",
    }
}
