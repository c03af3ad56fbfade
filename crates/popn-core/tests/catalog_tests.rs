//! Integration tests for catalog queries
//!
//! These tests build a small catalog covering every flag and check that
//! filter strings, structured options and sampling agree with each other.

use std::io::Write;

use popn_core::{
    Catalog, Chart, Difficulty, Error, FilterOptions, IncludeOption, SranLevel, load_snapshot,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn catalog() -> Catalog {
    let charts = vec![
        Chart::builder("1e", "1", Difficulty::Easy, 5)
            .rating(-0.5)
            .bpm("120")
            .build(),
        Chart::builder("1n", "1", Difficulty::Normal, 15)
            .rating(0.0)
            .bpm("121")
            .holds(true)
            .build(),
        Chart::builder("1h", "1", Difficulty::Hyper, 30)
            .rating(0.6)
            .sran_level(SranLevel::Lv01a)
            .bpm("121")
            .build(),
        Chart::builder("1ex", "1", Difficulty::Ex, 40)
            .rating(0.3)
            .sran_level(SranLevel::Lv05)
            .bpm("100-200")
            .build(),
        Chart::builder("2n", "2", Difficulty::Normal, 20)
            .bpm("155")
            .label("omnimix")
            .build(),
        Chart::builder("2h", "2", Difficulty::Hyper, 33)
            .rating(-0.2)
            .bpm("155")
            .label("omnimix")
            .build(),
        Chart::builder("3h", "3", Difficulty::Hyper, 36)
            .bpm("173")
            .labels(["lively", "floor_infection"])
            .build(),
        Chart::builder("4n", "4", Difficulty::Normal, 12)
            .rating(-0.1)
            .bpm("133")
            .build(),
        Chart::builder("4h", "4", Difficulty::Hyper, 38)
            .rating(0.5)
            .bpm("133")
            .label("upper")
            .build(),
        Chart::builder("4ex", "4", Difficulty::Ex, 45)
            .rating(-0.6)
            .sran_level(SranLevel::Lv10)
            .bpm("133")
            .holds(true)
            .label("ura")
            .build(),
    ];
    Catalog::new(charts.into_iter().collect::<popn_core::Result<Vec<_>>>().unwrap()).unwrap()
}

fn ids(charts: &[&Chart]) -> Vec<String> {
    charts.iter().map(|chart| chart.id.clone()).collect()
}

fn query_ids(catalog: &Catalog, query: &str) -> Vec<String> {
    ids(&catalog.query(query).unwrap())
}

/// Test filter-string queries against the catalog
mod query_tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_nothing() {
        let catalog = catalog();
        assert!(catalog.query("").unwrap().is_empty());
        assert!(catalog.query(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_omnimix_excluded_by_default() {
        let catalog = catalog();
        assert_eq!(query_ids(&catalog, "lv<=20"), ["1e", "1n", "4n"]);
        assert_eq!(query_ids(&catalog, "lv<=20,+omnimix"), ["1e", "1n", "2n", "4n"]);
        assert_eq!(query_ids(&catalog, "omnimix"), ["2n", "2h"]);
    }

    #[test]
    fn test_lively_excluded_by_default() {
        let catalog = catalog();
        assert!(query_ids(&catalog, "floorinfection").is_empty());
        assert_eq!(query_ids(&catalog, "floorinfection,+lively"), ["3h"]);
    }

    #[test]
    fn test_hardest_for_song() {
        let catalog = catalog();
        assert_eq!(query_ids(&catalog, "hardest"), ["1ex", "4ex"]);
        assert_eq!(
            query_ids(&catalog, "hardest,+omnimix,+lively"),
            ["1ex", "2h", "3h", "4ex"]
        );
        assert_eq!(query_ids(&catalog, "-hardest,diff=h"), ["1h", "4h"]);
    }

    #[test]
    fn test_level_emh() {
        let catalog = catalog();
        assert_eq!(query_ids(&catalog, "lv>=38h"), ["1ex", "4h", "4ex"]);
        assert_eq!(query_ids(&catalog, "lv=30h"), ["1h"]);
    }

    #[test]
    fn test_bpm_flags() {
        let catalog = catalog();
        assert_eq!(query_ids(&catalog, "buggedbpm"), ["1e", "1ex"]);
        assert_eq!(query_ids(&catalog, "soflan"), ["1ex"]);
    }

    #[test]
    fn test_sran_and_rating() {
        let catalog = catalog();
        assert_eq!(query_ids(&catalog, "srlv>=01b"), ["1ex", "4ex"]);
        assert_eq!(query_ids(&catalog, "rat=0"), ["1n"]);
        assert_eq!(query_ids(&catalog, "rat<0,diff=n"), ["4n"]);
    }

    #[test]
    fn test_invalid_queries_fail() {
        let catalog = catalog();
        assert!(matches!(
            catalog.query("lv=99"),
            Err(Error::InvalidCondition { .. })
        ));
        assert!(matches!(
            catalog.query("bogus"),
            Err(Error::InvalidCondition { .. })
        ));
    }

    #[test]
    fn test_find_many_lines_up() {
        let catalog = catalog();
        let found = catalog.find_many(["4h", "missing", "1e"]);
        let found: Vec<Option<&str>> = found.iter().map(|c| c.map(|c| c.id.as_str())).collect();
        assert_eq!(found, [Some("4h"), None, Some("1e")]);
    }

    #[test]
    fn test_find_ignores_id_case() {
        let catalog = catalog();
        assert_eq!(catalog.find("4EX").map(|c| c.id.as_str()), Some("4ex"));
        assert_eq!(catalog.find("1Ex").map(|c| c.id.as_str()), Some("1ex"));
    }
}

/// Test random sampling
mod sample_tests {
    use super::*;

    #[test]
    fn test_sample_caps_at_match_count() {
        let catalog = catalog();
        let sampled = catalog.sample(10, "diff=n,+omnimix").unwrap();
        let mut sampled = ids(&sampled);
        sampled.sort();
        assert_eq!(sampled, ["1n", "2n", "4n"]);
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let mut sampled = ids(&catalog.sample_with_rng(3, "lv>=1", &mut rng).unwrap());
            assert_eq!(sampled.len(), 3);
            sampled.sort();
            sampled.dedup();
            assert_eq!(sampled.len(), 3);
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let catalog = catalog();
        let a = catalog
            .sample_with_rng(4, "lv>=1", &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = catalog
            .sample_with_rng(4, "lv>=1", &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_zero_count_and_blank_filter_yield_nothing() {
        let catalog = catalog();
        assert!(catalog.sample(0, "lv>=1").unwrap().is_empty());
        assert!(catalog.sample(5, "").unwrap().is_empty());
    }

    #[test]
    fn test_sample_filtered() {
        let catalog = catalog();
        let options = FilterOptions {
            hardest: IncludeOption::Only,
            ..Default::default()
        };
        let mut sampled = ids(&catalog.sample_filtered(5, &options, &mut StdRng::seed_from_u64(5)));
        sampled.sort();
        assert_eq!(sampled, ["1ex", "4ex"]);
    }
}

/// Test structured filter options against equivalent filter strings
mod filter_tests {
    use super::*;

    fn option_variants() -> Vec<FilterOptions> {
        let base = FilterOptions::default();
        vec![
            base.clone(),
            FilterOptions {
                level_min: 30,
                ..base.clone()
            },
            FilterOptions {
                level_min: 10,
                level_max: 36,
                include_easy: false,
                ..base.clone()
            },
            FilterOptions {
                rating_min: Some(0.0),
                rating_max: Some(0.5),
                ..base.clone()
            },
            FilterOptions {
                rating_min: Some(10.25),
                ..base.clone()
            },
            FilterOptions {
                rating_max: Some(12.5),
                ..base.clone()
            },
            FilterOptions {
                sran_level_min: Some(SranLevel::Lv02a),
                ..base.clone()
            },
            FilterOptions {
                include_normal: false,
                include_hyper: false,
                hardest: IncludeOption::Exclude,
                ..base.clone()
            },
            FilterOptions {
                omnimix: IncludeOption::Include,
                lively: IncludeOption::Include,
                hardest: IncludeOption::Only,
                ..base.clone()
            },
            FilterOptions {
                lively: IncludeOption::Only,
                floor_infection: IncludeOption::Only,
                ..base.clone()
            },
            FilterOptions {
                omnimix: IncludeOption::Only,
                holds: IncludeOption::Exclude,
                ..base.clone()
            },
            FilterOptions {
                bugged_bpm: IncludeOption::Exclude,
                bpm_changes: IncludeOption::Exclude,
                upper: IncludeOption::Exclude,
                ura: IncludeOption::Exclude,
                ..base.clone()
            },
            FilterOptions {
                include_easy: false,
                include_normal: false,
                include_hyper: false,
                include_ex: false,
                ..base.clone()
            },
            FilterOptions {
                level_min: 45,
                level_max: 40,
                ..base
            },
        ]
    }

    #[test]
    fn test_filter_matches_equivalent_query() {
        let catalog = catalog();
        for options in option_variants() {
            let query = options.to_query();
            assert_eq!(
                ids(&catalog.filter(&options)),
                query_ids(&catalog, &query),
                "{query}"
            );
        }
    }

    #[test]
    fn test_default_options_select_everything_but_omnimix_and_lively() {
        let catalog = catalog();
        assert_eq!(
            ids(&catalog.filter(&FilterOptions::default())),
            ["1e", "1n", "1h", "1ex", "4n", "4h", "4ex"]
        );
    }

    #[test]
    fn test_only_and_exclude() {
        let catalog = catalog();
        let only_holds = FilterOptions {
            holds: IncludeOption::Only,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter(&only_holds)), ["1n", "4ex"]);

        let no_holds = FilterOptions {
            holds: IncludeOption::Exclude,
            ..Default::default()
        };
        assert_eq!(
            ids(&catalog.filter(&no_holds)),
            ["1e", "1h", "1ex", "4n", "4h"]
        );
    }
}

/// Test loading a catalog from a snapshot file
mod snapshot_tests {
    use super::*;

    #[test]
    fn test_load_snapshot_into_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "10n", "sid": 10, "diff": "n", "lv": 18, "jk": {{"rating": 0.1}}}},
                {{"id": "10h", "sid": "10", "diff": "h", "lv": 34, "jk": {{"rating": "-0.7", "srlv": 1}}}},
                {{"id": "11ex", "sid": 11, "diff": "ex", "lv": 47, "debut": "cslively"}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::new(load_snapshot(file.path()).unwrap()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(query_ids(&catalog, "hardest"), ["10h"]);
        assert_eq!(query_ids(&catalog, "srlv=1a"), ["10h"]);
        assert_eq!(query_ids(&catalog, "lively"), ["11ex"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
