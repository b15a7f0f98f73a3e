use rstudyplan::config::Config;
use rstudyplan::core::checkin::StartAgainPolicy;
use rstudyplan::core::reconcile::MatchStrategy;
use rstudyplan::errors::AppError;

#[test]
fn test_config_defaults_for_missing_fields() {
    let cfg = Config::from_yaml("database: /tmp/plan.sqlite\n").expect("parse");
    assert_eq!(cfg.database, "/tmp/plan.sqlite");
    assert_eq!(cfg.start_again, StartAgainPolicy::Append);
    assert_eq!(cfg.match_by, MatchStrategy::Triple);
    assert_eq!(cfg.separator(), '-');
}

#[test]
fn test_config_reads_policies() {
    let yaml = "database: /tmp/plan.sqlite\nstart_again: reset\nmatch_by: entry\nseparator_char: \"=\"\n";
    let cfg = Config::from_yaml(yaml).expect("parse");
    assert_eq!(cfg.start_again, StartAgainPolicy::ResetInPlace);
    assert_eq!(cfg.match_by, MatchStrategy::Entry);
    assert_eq!(cfg.separator(), '=');

    let opts = cfg.session_options();
    assert_eq!(opts.start_again, StartAgainPolicy::ResetInPlace);
    assert_eq!(opts.match_by, MatchStrategy::Entry);
}

#[test]
fn test_config_rejects_unknown_policy() {
    let yaml = "database: /tmp/plan.sqlite\nstart_again: sometimes\n";
    assert!(matches!(
        Config::from_yaml(yaml),
        Err(AppError::ConfigParse(_))
    ));
}

#[test]
fn test_config_rejects_empty_database() {
    assert!(matches!(
        Config::from_yaml("database: \"  \"\n"),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_config_yaml_round_trip() {
    let cfg = Config {
        database: "/tmp/plan.sqlite".to_string(),
        start_again: StartAgainPolicy::ResetInPlace,
        match_by: MatchStrategy::Entry,
        separator_char: "-".to_string(),
    };
    let yaml = cfg.to_yaml().expect("serialize");
    assert!(yaml.contains("start_again: reset"));
    assert!(yaml.contains("match_by: entry"));
    assert_eq!(Config::from_yaml(&yaml).expect("parse"), cfg);
}

#[test]
fn test_resolve_db_path_keeps_absolute_paths() {
    let abs = std::env::temp_dir().join("plan.sqlite");
    let abs_str = abs.to_string_lossy().to_string();
    let resolved = Config::resolve_db_path(Some(abs_str.as_str()));
    assert_eq!(resolved, abs);

    let relative = Config::resolve_db_path(Some("plan.sqlite"));
    assert_eq!(relative, Config::config_dir().join("plan.sqlite"));
}
