use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::motion::TransitionName;

use super::content::SlideContent;
use super::types::{ContentTable, PresentationDescriptor, SlideDescriptor};

/// Decks compiled into the binary, in catalog order.
const BUILTIN_DECKS: &[(&str, &str)] = &[
    ("sample.toml", include_str!("../../decks/sample.toml")),
    (
        "concept-to-cockpit.toml",
        include_str!("../../decks/concept-to-cockpit.toml"),
    ),
    (
        "medicine-delivery.toml",
        include_str!("../../decks/medicine-delivery.toml"),
    ),
    ("saas-builder.toml", include_str!("../../decks/saas-builder.toml")),
    (
        "realtime-voice.toml",
        include_str!("../../decks/realtime-voice.toml"),
    ),
    (
        "traffic-manager.toml",
        include_str!("../../decks/traffic-manager.toml"),
    ),
];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    id: String,
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    slides: Vec<SlideEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SlideEntry {
    id: String,
    #[serde(default)]
    transition: Option<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    content: Option<SlideContent>,
}

pub(crate) fn load_builtin_decks() -> AppResult<Vec<PresentationDescriptor>> {
    BUILTIN_DECKS
        .iter()
        .map(|(name, raw)| parse_deck(raw, Path::new(name)))
        .collect()
}

/// Loads every `*.toml` file in `dir`, ordered by file name.
pub(crate) fn load_deck_dir(dir: &Path) -> AppResult<Vec<PresentationDescriptor>> {
    if !dir.is_dir() {
        return Err(AppError::invalid_argument(format!(
            "decks path is not a directory: {}",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|source| {
        AppError::io_with_context(source, format!("failed to list decks in {}", dir.display()))
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| {
                AppError::io_with_context(source, format!("failed to list decks in {}", dir.display()))
            })?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|path| load_deck_file(path)).collect()
}

pub(crate) fn load_deck_file(path: &Path) -> AppResult<PresentationDescriptor> {
    let raw = fs::read_to_string(path).map_err(|source| {
        AppError::io_with_context(source, format!("failed to read deck: {}", path.display()))
    })?;
    parse_deck(&raw, path)
}

pub(crate) fn parse_deck(raw: &str, origin: &Path) -> AppResult<PresentationDescriptor> {
    let deck =
        toml::from_str::<DeckFile>(raw).map_err(|source| AppError::deck_parse(origin, source))?;
    if deck.id.trim().is_empty() {
        return Err(AppError::invalid_argument(format!(
            "deck {} has an empty id",
            origin.display()
        )));
    }

    let mut seen = HashSet::new();
    let mut slides = Vec::with_capacity(deck.slides.len());
    let mut table = ContentTable::default();
    for entry in deck.slides {
        if !seen.insert(entry.id.clone()) {
            return Err(AppError::duplicate_slide(&deck.id, entry.id));
        }

        let transition = TransitionName::resolve(entry.transition.as_deref());
        if let Some(raw_name) = entry.transition.as_deref()
            && TransitionName::parse(raw_name).is_none()
        {
            tracing::debug!(
                deck = %deck.id,
                slide = %entry.id,
                transition = raw_name,
                "unknown transition, using fade"
            );
        }

        if let Some(content) = entry.content {
            table.insert(entry.id.clone(), content);
        }
        slides.push(SlideDescriptor {
            id: entry.id,
            transition,
            style: entry.style,
        });
    }

    Ok(PresentationDescriptor {
        id: deck.id,
        title: deck.title,
        subtitle: deck.subtitle,
        slides,
        renderer: Arc::new(table),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_builtin_decks, load_deck_dir, parse_deck};
    use crate::error::AppError;
    use crate::motion::TransitionName;

    fn unique_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("deck_loader_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn builtin_decks_parse_in_catalog_order() {
        let decks = load_builtin_decks().expect("built-in decks should parse");
        let ids: Vec<_> = decks.iter().map(|deck| deck.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "sample",
                "concept-to-cockpit",
                "medicine-delivery",
                "saas-builder",
                "realtime-voice",
                "traffic-manager",
            ]
        );
        assert!(decks.iter().all(|deck| !deck.slides.is_empty()));
    }

    #[test]
    fn unknown_transition_falls_back_to_fade() {
        let deck = parse_deck(
            r#"
            id = "t"
            title = "T"

            [[slides]]
            id = "a"
            transition = "spin"

            [[slides]]
            id = "b"
            transition = "up"
            "#,
            Path::new("t.toml"),
        )
        .expect("deck should parse");

        assert_eq!(deck.slides[0].transition, TransitionName::Fade);
        assert_eq!(deck.slides[1].transition, TransitionName::Up);
    }

    #[test]
    fn duplicate_slide_ids_are_rejected() {
        let err = parse_deck(
            r#"
            id = "dup"
            title = "Dup"

            [[slides]]
            id = "a"

            [[slides]]
            id = "a"
            "#,
            Path::new("dup.toml"),
        )
        .expect_err("duplicate slide ids should fail");

        assert!(matches!(err, AppError::DuplicateSlide { .. }));
    }

    #[test]
    fn malformed_deck_reports_origin() {
        let err = parse_deck("id = ", Path::new("broken.toml")).expect_err("should fail");
        assert_eq!(err.to_string(), "failed to parse deck broken.toml");
    }

    #[test]
    fn slides_without_content_render_placeholders() {
        let deck = parse_deck(
            r#"
            id = "bare"
            title = "Bare"

            [[slides]]
            id = "later"
            "#,
            Path::new("bare.toml"),
        )
        .expect("deck should parse");

        let content = deck.renderer.render(&deck.slides[0], 0);
        assert!(content.plain_lines().join(" ").contains("Missing slide: later"));
    }

    #[test]
    fn deck_dir_loads_toml_files_sorted_by_name() {
        let dir = unique_temp_dir("dir");
        fs::create_dir_all(&dir).expect("temp dir should be created");
        fs::write(dir.join("b.toml"), "id = \"beta\"\ntitle = \"Beta\"\n")
            .expect("deck should be written");
        fs::write(dir.join("a.toml"), "id = \"alpha\"\ntitle = \"Alpha\"\n")
            .expect("deck should be written");
        fs::write(dir.join("notes.md"), "ignored").expect("file should be written");

        let decks = load_deck_dir(&dir).expect("dir should load");
        let ids: Vec<_> = decks.iter().map(|deck| deck.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "beta"]);

        fs::remove_dir_all(&dir).expect("temp dir should be removed");
    }
}
