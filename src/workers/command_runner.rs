use std::io::{self, Write};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::tick_duration;
use crate::constants::catalog::EXAMPLE_TARGETS;
use crate::enums::commands::Commands;
use crate::enums::scan_status::ScanStatus;
use crate::errors::{RepoVetError, RepoVetResult};
use crate::logger::progress_logger::ScanProgressLogger;
use crate::logger::report_logger::ReportLogger;
use crate::structs::app_state::AppState;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> RepoVetResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Scan { target, seed, json } => self.scan_command(target, seed, json).await,
            Commands::Interactive => self.interactive_command().await,
            Commands::Examples => self.examples_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn scan_command(&self, target: String, seed: Option<u64>, json: bool) -> RepoVetResult<()> {
        let config = self.load_config();
        let seed = seed.or(config.scan.seed);

        let mut state = AppState::new(seed);
        state.on_query_change(&target);

        if let Err(e) = state.on_start_scan() {
            log::error!("❌ {}", e.user_message());
            return Err(e);
        }

        log::info!("🔍 Scanning {}...", target.trim());
        self.drive_scan(&mut state, config.scan.tick_interval_ms, !json).await;

        if let Some(report) = state.report.as_ref() {
            if json {
                let payload = ReportLogger::to_json(report)
                    .map_err(|e| RepoVetError::system_error("serialize report", &e.to_string()))?;
                println!("{}", payload);
            } else {
                ReportLogger::print_report(report);
            }
        }

        Ok(())
    }

    async fn interactive_command(&self) -> RepoVetResult<()> {
        let config = self.load_config();
        let mut state = AppState::new(config.scan.seed);

        println!("🔍 RepoVet interactive mode");
        println!("Type a repository URL or owner/repo to set the target, then `scan`.");
        println!("Commands: scan, examples, use <1-{}>, quit", EXAMPLE_TARGETS.len());

        loop {
            print!("\nrepovet> ");
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let line = input.trim();

            match line {
                "" => continue,
                "quit" | "exit" | "q" => {
                    println!("👋 Bye.");
                    break;
                }
                "examples" => {
                    self.print_examples();
                }
                "scan" => {
                    if let Err(e) = state.on_start_scan() {
                        println!("❌ {}", e.user_message());
                        continue;
                    }
                    self.drive_scan(&mut state, config.scan.tick_interval_ms, true).await;
                    if let Some(report) = state.report.as_ref() {
                        ReportLogger::print_report(report);
                    }
                }
                _ => {
                    if let Some(choice) = line.strip_prefix("use ") {
                        match choice.trim().parse::<usize>() {
                            Ok(n) if (1..=EXAMPLE_TARGETS.len()).contains(&n) => {
                                state.on_query_change(EXAMPLE_TARGETS[n - 1]);
                                println!("📝 Target set to: {}", state.query);
                            }
                            _ => println!("❌ Pick an example between 1 and {}", EXAMPLE_TARGETS.len()),
                        }
                    } else {
                        state.on_query_change(line);
                        println!("📝 Target set to: {}", state.query);
                    }
                }
            }
        }

        Ok(())
    }

    async fn examples_command(&self) -> RepoVetResult<()> {
        self.print_examples();
        Ok(())
    }

    /// Ticks the active scan on a fixed cadence until it completes. The
    /// session enforces an upper bound on ticks per scan, so this loop
    /// always terminates.
    async fn drive_scan(&self, state: &mut AppState, tick_interval_ms: u64, show_progress: bool) {
        if state.session.status() != ScanStatus::Scanning {
            return;
        }

        let progress = ScanProgressLogger::new();
        let mut interval = tokio::time::interval(tick_duration(tick_interval_ms));
        // The first tick of a tokio interval fires immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            let completed = state.on_tick();
            if show_progress {
                progress.render(state.session.progress(), state.session.phase());
            }
            if completed {
                break;
            }
        }

        if show_progress {
            progress.finish();
        }
    }

    fn print_examples(&self) {
        println!("\n📋 Example targets:");
        for (i, target) in EXAMPLE_TARGETS.iter().enumerate() {
            println!("  {}. {}", i + 1, target);
        }
    }

    fn load_config(&self) -> Config {
        match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("❌ {}", e.user_message());
                log::info!("💡 Falling back to default settings.");
                Config::default()
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
