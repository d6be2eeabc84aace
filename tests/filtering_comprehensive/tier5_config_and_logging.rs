//! Tier 5: Configuration and logging
//!
//! Engine configuration loaded from disk drives search fields and copy
//! locale; pipeline stages are reported through `tracing`.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::test_utils::*;
use questlog::{EmptyStateContext, EngineConfig, FilterEngine, FilterSet, MessageLocale};

#[test]
fn engine_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questlog.toml");
    std::fs::write(
        &path,
        "search_fields = [\"title\", \"location\"]\nlocale = \"pt-br\"\n",
    )
    .unwrap();

    let engine = FilterEngine::new(EngineConfig::load(&path).unwrap());
    assert_eq!(engine.config().locale, MessageLocale::Portuguese);

    let posts = posts();
    let out = engine.combine(&posts, &FilterSet::new().search("portal"));
    assert_eq!(ids(&out), vec!["p2"]);

    let empty = engine.empty_state(EmptyStateContext::Search, true, false, Some("lich"));
    assert_eq!(empty.description, "Não encontramos resultados para \"lich\".");
}

#[test]
fn malformed_config_is_an_error() {
    assert!(EngineConfig::from_toml_str("search_fields = 3").is_err());
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn pipeline_stages_are_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let posts = posts();
    tracing::subscriber::with_default(subscriber, || {
        let filters = FilterSet::new().tag("gelo").viewer(["dragon"], false);
        let out = questlog::combine_filters(&posts, &filters);
        assert_eq!(out.len(), 1);
    });

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("filter stage applied"));
    assert!(logs.contains("stage=\"tag\""));
    assert!(logs.contains("stage=\"visibility\""));
}
