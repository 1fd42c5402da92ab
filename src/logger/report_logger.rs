use crate::structs::scan_report::ScanReport;

pub struct ReportLogger;

impl ReportLogger {
    /// Prints the full trust report for a completed scan.
    pub fn print_report(report: &ScanReport) {
        let analysis = &report.analysis;
        let assessment = &report.assessment;

        println!("\n🔍 REPOSITORY TRUST REPORT");
        println!("═══════════════════════════════════════");
        println!("📦 {}/{}", analysis.owner, analysis.repo_name);
        println!("🕒 Completed: {}", report.completed_at.format("%Y-%m-%d %H:%M:%S UTC"));

        println!("\n📈 Overview:");
        println!("   ⭐ Stars: {}", analysis.stars);
        println!("   🍴 Forks: {}", analysis.forks);
        println!("   🐛 Open Issues: {}", analysis.open_issues);
        println!("   👥 Contributors: {}", analysis.contributors);
        println!("   📜 License: {}", analysis.license);
        println!("   🕐 Last Update: {}", analysis.last_update);
        println!("   📅 Age: {}", analysis.age);

        println!("\n🎯 Risk Assessment:");
        println!(
            "   Risk Score: {}/100 ({} {})",
            analysis.risk_score,
            assessment.tier.emoji(),
            assessment.label
        );

        println!("\n🔎 Findings ({} total):", analysis.findings.len());
        let mut findings: Vec<_> = analysis.findings.iter().collect();
        findings.sort_by_key(|f| f.severity);
        for finding in findings {
            println!(
                "\n   {} {} {} [{}]: {}",
                finding.severity.emoji(),
                finding.severity.name(),
                finding.category.emoji(),
                finding.category.name(),
                finding.title
            );
            println!("      💡 {}", finding.description);
        }

        println!("\n{} {}", assessment.tier.emoji(), assessment.verdict_title);
        println!("   {}", assessment.verdict_body);
        println!("═══════════════════════════════════════\n");
    }

    /// Machine-readable form of the report.
    pub fn to_json(report: &ScanReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }
}
