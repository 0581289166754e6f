//! Lookups against the datasets shipped in `data/`.

use cityweather::location::{DatasetError, TableKind};
use cityweather::{CityResolver, ReferenceTables};
use std::path::PathBuf;
use std::sync::Arc;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn resolver() -> CityResolver {
    let tables = ReferenceTables::load(data("worldcities.csv"), data("russiacities.csv")).unwrap();
    CityResolver::new(Arc::new(tables))
}

#[test]
fn test_datasets_exist_and_load() {
    let resolver = resolver();
    assert!(!resolver.tables().global.is_empty());
    assert!(!resolver.tables().regional.is_empty());
}

#[test]
fn test_london() {
    let city = resolver().resolve("London").unwrap();
    assert_eq!(city.name, "London");
    // The UK entry precedes London, Ontario
    assert!((city.latitude - 51.5072).abs() < 1e-6);
}

#[test]
fn test_moscow_cyrillic() {
    let city = resolver().resolve("Москва").unwrap();
    assert_eq!(city.name, "Москва");
}

#[test]
fn test_york_exact_over_new_york() {
    let city = resolver().resolve("york").unwrap();
    assert_eq!(city.name, "York");
}

#[test]
fn test_unknown_city() {
    assert!(resolver().resolve("NonExistentCity123").is_err());
}

#[test]
fn test_cyrillic_results_come_from_regional_table() {
    let resolver = resolver();
    for query in ["мос", "Новгород", "ск", "Санкт"] {
        assert_eq!(TableKind::for_query(query), TableKind::Regional);
        let city = resolver.resolve(query).unwrap();
        assert!(resolver.tables().regional.records().contains(&city));
        assert!(!resolver.tables().global.records().iter().any(|r| r.name == city.name));
    }
}

#[test]
fn test_latin_results_come_from_global_table() {
    let resolver = resolver();
    for query in ["mos", "Petersburg", "burg", "Lon"] {
        let city = resolver.resolve(query).unwrap();
        assert!(resolver.tables().global.records().contains(&city));
    }
}

#[test]
fn test_suggestions() {
    let resolver = resolver();
    let latin = resolver.suggest("Lon", 10);
    assert_eq!(latin, vec!["London", "Londonderry"]);

    let cyrillic = resolver.suggest("Мос", 10);
    assert_eq!(cyrillic, vec!["Москва", "Мосальск"]);
}

#[test]
fn test_missing_regional_dataset_fails_startup() {
    let err = ReferenceTables::load(data("worldcities.csv"), data("missing.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}
