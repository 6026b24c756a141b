use serde_json::Value;
use setpick_algorithms::problem_set::{Algorithm, SearchConfig};
use setpick_challenges::problem_set::{sample_instances, GeneratorSettings, Solution};
use setpick_runtime::*;
use setpick_utils::ValueWidth;
use std::fs;

const WIDE: &str = "2000000000000000000000 2\nx\n1 1500000000000000000000 1 x 10\n2 1500000000000000000000 2 x 10\n";

#[test]
fn test_load_config() {
    assert_eq!(load_config(None).unwrap(), SearchConfig::default());

    let config = load_config(Some(r#"{"algorithm": "exhaustive", "value_width": "u64"}"#)).unwrap();
    assert_eq!(config.algorithm, Algorithm::Exhaustive);
    assert_eq!(config.value_width, ValueWidth::U64);

    let path = std::env::temp_dir().join(format!("setpick-config-{}.json", std::process::id()));
    fs::write(&path, r#"{"max_subset_size": 2}"#).unwrap();
    let config = load_config(Some(path.to_str().unwrap())).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.max_subset_size, Some(2));

    assert!(load_config(Some(r#"{"colour": "red"}"#)).is_err());
    assert!(load_config(Some("/no/such/config.json")).is_err());
}

#[test]
fn test_load_solution() {
    assert_eq!(load_solution("3 4").unwrap().items, vec![3, 4]);
    assert_eq!(load_solution("").unwrap(), Solution::new());
    assert!(load_solution("3 x").is_err());

    let path = std::env::temp_dir().join(format!("setpick-solution-{}.txt", std::process::id()));
    fs::write(&path, "1 3\n").unwrap();
    let path = path.to_str().unwrap().to_string();
    let from_file = load_solution(&format!("@{}", path)).unwrap();
    // without the prefix the argument is always an id line
    let literal = load_solution(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(from_file.items, vec![1, 3]);
    assert!(literal.is_err());
    assert!(load_solution("@/no/such/solution.txt").is_err());
}

#[test]
fn test_solve_samples() {
    for (text, answer) in sample_instances() {
        let report = solve(text, &SearchConfig::default()).unwrap();
        assert_eq!(report.answer, answer);
        assert!(report.stats.is_some());
    }
}

#[test]
fn test_solve_reports_exhaustion() {
    let report = solve("100 2\na\n1 5 1 a 1\n2 6 1 a 1\n", &SearchConfig::default()).unwrap();
    assert_eq!(report.answer, "-1");
    assert!(report.solution.is_none());
    assert!(report.key.is_none());
}

#[test]
fn test_solve_with_other_algorithms() {
    for algorithm in [Algorithm::Exhaustive, Algorithm::Dynamic] {
        let config = SearchConfig {
            algorithm,
            ..Default::default()
        };
        for (text, answer) in sample_instances() {
            let report = solve(text, &config).unwrap();
            assert_eq!(report.answer, answer);
            assert!(report.key.is_some());
            assert!(report.stats.is_none());
        }
    }
}

#[test]
fn test_solve_json_report() {
    let (text, _) = sample_instances()[0];
    let report = solve(text, &SearchConfig::default()).unwrap();
    let json: Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["answer"], "3 4");
    assert_eq!(json["solution"]["items"], serde_json::json!([3, 4]));
    assert_eq!(json["key"]["cost"], 5);
    assert_eq!(json["key"]["count"], 2);
    assert!(json["stats"]["states_popped"].as_u64().unwrap() > 0);
}

#[test]
fn test_value_width_dispatch() {
    let narrow = SearchConfig {
        value_width: ValueWidth::U64,
        ..Default::default()
    };
    assert!(solve(WIDE, &narrow).is_err());

    let report = solve(WIDE, &SearchConfig::default()).unwrap();
    assert_eq!(report.answer, "1 2");

    let wide = SearchConfig {
        value_width: ValueWidth::U256,
        ..Default::default()
    };
    assert_eq!(solve(WIDE, &wide).unwrap().answer, "1 2");
}

#[test]
fn test_verify() {
    let (text, _) = sample_instances()[0];
    let config = SearchConfig::default();

    let key = verify(text, &"3 4".parse().unwrap(), &config).unwrap();
    assert_eq!((key.cost, key.count), (5, 2));

    let err = verify(text, &"3".parse().unwrap(), &config).unwrap_err();
    assert!(err.to_string().contains("Invalid solution"));

    let capped = SearchConfig {
        max_subset_size: Some(1),
        ..Default::default()
    };
    assert!(verify(text, &"3 4".parse().unwrap(), &capped).is_err());
}

#[test]
fn test_validate() {
    for (text, _) in sample_instances() {
        assert!(validate(text).is_ok());
    }
    let err = validate("10 1\na\n1 5 1 a 1").unwrap_err();
    assert!(err.to_string().contains("Invalid instance"));
}

#[test]
fn test_generate() {
    let settings = GeneratorSettings {
        min_items: 10,
        max_items: 12,
    };
    let a = generate("seed", &settings).unwrap();
    assert_eq!(a, generate("seed", &settings).unwrap());
    assert_ne!(a, generate("other seed", &settings).unwrap());
    assert!(validate(&a).is_ok());

    let config = SearchConfig {
        value_width: ValueWidth::U64,
        ..Default::default()
    };
    let report = solve(&a, &config).unwrap();
    assert!(report.solution.is_some());
    let solution = report.solution.unwrap();
    assert!(solution.items.len() <= 10);
    assert!(verify(&a, &solution, &config).is_ok());
}
