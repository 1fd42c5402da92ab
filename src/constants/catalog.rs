//! Static data for the scan simulation: the finding catalog, the phase
//! captions, the license pool and the example targets.

use once_cell::sync::Lazy;
use crate::enums::finding_category::FindingCategory;
use crate::enums::severity::Severity;
use crate::structs::finding::Finding;

/// Captions shown while a scan progresses, in order.
pub const SCAN_PHASES: [&str; 8] = [
    "Initializing…",
    "Fetching repository metadata…",
    "Mapping dependency tree…",
    "Scanning for known vulnerabilities…",
    "Checking license compliance…",
    "Reviewing commit history…",
    "Evaluating maintainer activity…",
    "Compiling risk assessment…",
];

pub const LICENSE_POOL: [&str; 5] = ["MIT", "Apache-2.0", "GPL-3.0", "BSD-3-Clause", "Unlicense"];

pub const EXAMPLE_TARGETS: [&str; 3] = [
    "facebook/react",
    "vercel/next.js",
    "microsoft/vscode",
];

/// The fixed universe of findings every analysis samples from. Entries are
/// cloned into a report, never mutated here.
pub static FINDING_CATALOG: Lazy<Vec<Finding>> = Lazy::new(|| {
    vec![
        finding(
            FindingCategory::Security,
            Severity::Critical,
            "Hardcoded credentials in source history",
            "Commit patterns consistent with committed API keys or passwords were flagged in the repository history.",
        ),
        finding(
            FindingCategory::Security,
            Severity::High,
            "Dependencies with known CVEs",
            "Several pinned dependencies match versions listed in public vulnerability databases.",
        ),
        finding(
            FindingCategory::Security,
            Severity::Medium,
            "Unaudited install scripts",
            "Package install hooks execute shell commands that have not been reviewed.",
        ),
        finding(
            FindingCategory::Privacy,
            Severity::High,
            "Undisclosed telemetry collection",
            "The code appears to transmit usage data to a third-party endpoint without documenting it.",
        ),
        finding(
            FindingCategory::Privacy,
            Severity::Medium,
            "Embedded third-party analytics",
            "Bundled analytics snippets report identifiers that may be traceable to individual users.",
        ),
        finding(
            FindingCategory::Maintenance,
            Severity::Medium,
            "Irregular release cadence",
            "Long gaps between releases suggest fixes may be slow to land.",
        ),
        finding(
            FindingCategory::Maintenance,
            Severity::Low,
            "Sparse automated test coverage",
            "Large portions of the codebase are not exercised by the test suite.",
        ),
        finding(
            FindingCategory::Trust,
            Severity::High,
            "Unverified publisher identity",
            "The publishing account has no verified organization or signing history.",
        ),
        finding(
            FindingCategory::Trust,
            Severity::Info,
            "Single active maintainer",
            "Most recent changes come from one contributor, concentrating bus-factor risk.",
        ),
        finding(
            FindingCategory::License,
            Severity::Low,
            "Ambiguous licensing terms",
            "License files conflict between subdirectories, leaving reuse terms unclear.",
        ),
    ]
});

fn finding(category: FindingCategory, severity: Severity, title: &str, description: &str) -> Finding {
    Finding {
        category,
        severity,
        title: title.to_string(),
        description: description.to_string(),
    }
}
