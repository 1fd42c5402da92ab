use crate::errors::{RepoVetError, RepoVetResult};
use crate::services::identifier_parser::IdentifierParser;
use crate::services::scan_session::ScanSession;
use crate::structs::scan_report::ScanReport;

/// Top-level mutable state: the pending query, the active session, the last
/// completed report and the last input error. The presentation layer only
/// reads from here; all mutation goes through the transition methods.
pub struct AppState {
    pub query: String,
    pub session: ScanSession,
    pub report: Option<ScanReport>,
    pub last_error: Option<RepoVetError>,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            query: String::new(),
            session: ScanSession::new(seed),
            report: None,
            last_error: None,
        }
    }

    /// Replaces the pending query. No validation happens here.
    pub fn on_query_change(&mut self, text: &str) {
        self.query = text.to_string();
    }

    /// Parses the pending query and starts a fresh scan. On a format error
    /// the previous report and session are left untouched and no scan
    /// starts.
    pub fn on_start_scan(&mut self) -> RepoVetResult<()> {
        match IdentifierParser::parse(&self.query) {
            Ok(target) => {
                self.report = None;
                self.last_error = None;
                self.session.start(target);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Advances the active scan by one step. Returns true on the tick that
    /// completed the scan and produced a report.
    pub fn on_tick(&mut self) -> bool {
        match self.session.tick() {
            Some(report) => {
                self.report = Some(report);
                true
            }
            None => false,
        }
    }
}
