use repovet::enums::scan_status::ScanStatus;
use repovet::structs::app_state::AppState;

/// Drives the state machine to completion, bounded so a broken session
/// cannot hang the test suite.
fn run_to_completion(state: &mut AppState) {
    for _ in 0..30 {
        if state.on_tick() {
            return;
        }
    }
    panic!("scan did not complete within 30 ticks");
}

mod scan_flow {
    use super::*;

    #[test]
    fn full_scan_produces_a_classified_report() {
        let mut state = AppState::new(Some(7));
        state.on_query_change("facebook/react");
        state.on_start_scan().unwrap();

        assert_eq!(state.session.status(), ScanStatus::Scanning);
        run_to_completion(&mut state);

        assert_eq!(state.session.status(), ScanStatus::Complete);
        assert_eq!(state.session.progress(), 100.0);

        let report = state.report.as_ref().expect("report after completion");
        assert_eq!(report.analysis.owner, "facebook");
        assert_eq!(report.analysis.repo_name, "react");
        assert!((20..=79).contains(&report.analysis.risk_score));
        assert!((3..=7).contains(&report.analysis.findings.len()));
        assert!(["HIGH RISK", "MODERATE", "LOW RISK"].contains(&report.assessment.label.as_str()));
    }

    #[test]
    fn url_target_is_normalized_before_scanning() {
        let mut state = AppState::new(Some(9));
        state.on_query_change("https://github.com/vercel/next.js.git");
        state.on_start_scan().unwrap();
        run_to_completion(&mut state);

        let report = state.report.as_ref().unwrap();
        assert_eq!(report.analysis.owner, "vercel");
        assert_eq!(report.analysis.repo_name, "next.js");
    }

    #[test]
    fn restart_discards_the_previous_report() {
        let mut state = AppState::new(Some(3));
        state.on_query_change("facebook/react");
        state.on_start_scan().unwrap();
        run_to_completion(&mut state);
        assert!(state.report.is_some());

        state.on_query_change("microsoft/vscode");
        state.on_start_scan().unwrap();

        // The stale report is gone before the new scan produces anything.
        assert!(state.report.is_none());
        assert_eq!(state.session.status(), ScanStatus::Scanning);
        assert_eq!(state.session.progress(), 0.0);

        run_to_completion(&mut state);
        assert_eq!(state.report.as_ref().unwrap().analysis.owner, "microsoft");
    }

    #[test]
    fn format_error_leaves_prior_state_untouched() {
        let mut state = AppState::new(Some(3));
        state.on_query_change("facebook/react");
        state.on_start_scan().unwrap();
        run_to_completion(&mut state);

        state.on_query_change("not-a-valid-string");
        let err = state.on_start_scan().unwrap_err();
        assert_eq!(
            err.user_message(),
            "Invalid format. Use: owner/repo or https://github.com/owner/repo"
        );

        // No scan started, the completed report survives.
        assert_eq!(state.session.status(), ScanStatus::Complete);
        assert!(state.report.is_some());
        assert_eq!(state.query, "not-a-valid-string");
        assert!(state.last_error.is_some());
    }

    #[test]
    fn empty_query_is_rejected_with_the_fixed_message() {
        let mut state = AppState::new(None);
        let err = state.on_start_scan().unwrap_err();

        assert_eq!(err.user_message(), "Please enter a repository URL or owner/repo");
        assert_eq!(state.session.status(), ScanStatus::Idle);
        assert!(state.report.is_none());
    }

    #[test]
    fn same_seed_reproduces_the_whole_flow() {
        let mut a = AppState::new(Some(21));
        let mut b = AppState::new(Some(21));
        for state in [&mut a, &mut b] {
            state.on_query_change("facebook/react");
            state.on_start_scan().unwrap();
            run_to_completion(state);
        }

        let report_a = a.report.as_ref().unwrap();
        let report_b = b.report.as_ref().unwrap();
        assert_eq!(report_a.analysis, report_b.analysis);
        assert_eq!(report_a.assessment, report_b.assessment);
        assert_eq!(report_a.ticks, report_b.ticks);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut state = AppState::new(Some(13));
        state.on_query_change("facebook/react");
        state.on_start_scan().unwrap();
        run_to_completion(&mut state);

        let payload = repovet::logger::report_logger::ReportLogger::to_json(
            state.report.as_ref().unwrap(),
        )
        .unwrap();

        assert!(payload.contains("\"risk_score\""));
        assert!(payload.contains("\"findings\""));
    }
}

mod config {
    use std::fs;
    use repovet::config::config_manager::ConfigManager;
    use repovet::config::constants::DEFAULT_SCAN_TICK_INTERVAL_MS;
    use repovet::errors::RepoVetError;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.scan.tick_interval_ms, DEFAULT_SCAN_TICK_INTERVAL_MS);
        assert_eq!(config.scan.seed, None);
    }

    #[test]
    fn settings_are_read_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scan]\ntick_interval_ms = 50\nseed = 42\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.scan.tick_interval_ms, 50);
        assert_eq!(config.scan.seed, Some(42));
    }

    #[test]
    fn invalid_toml_reports_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scan\nnot toml").unwrap();

        let err = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(err, RepoVetError::ConfigurationFileError { .. }));
    }
}

mod properties {
    use proptest::prelude::*;
    use repovet::services::identifier_parser::IdentifierParser;
    use repovet::services::risk_classifier::RiskClassifier;

    proptest! {
        #[test]
        fn any_simple_pair_parses_verbatim(
            owner in "[A-Za-z0-9._-]{1,16}",
            repo in "[A-Za-z0-9_-]{1,16}",
        ) {
            let id = IdentifierParser::parse(&format!("{}/{}", owner, repo)).unwrap();
            prop_assert_eq!(id.owner, owner);
            prop_assert_eq!(id.repo, repo);
        }

        #[test]
        fn classify_is_total_over_scores(score in 0u8..=100u8) {
            let assessment = RiskClassifier::classify(score);
            prop_assert!(
                ["HIGH RISK", "MODERATE", "LOW RISK"].contains(&assessment.label.as_str())
            );
        }
    }
}
