use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use tracing::info;

use deskstart_core::config::validate_config;
use deskstart_core::items::has_launchable_items;
use deskstart_core::launch::ItemReport;
use deskstart_core::resolver::{TargetResolver, group_by_target};
use deskstart_core::{
    DeskConfig, ItemDescriptor, LaunchOrchestrator, LaunchOutcome, RunSummary, ShellSpawner,
    default_enumerator, default_resolver, events, scan_startup_dir,
};

pub fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let startup_dir = resolve_startup_dir(matches.get_one::<String>("startup_dir"))?;

    let mut config = DeskConfig::load_hierarchy(&startup_dir)?;
    apply_cli_overrides(&mut config, matches);
    validate_config(&config)?;

    let json = matches.get_flag("json");
    let items = scan_startup_dir(&startup_dir, &config.scan_filter())?;

    if items.is_empty() {
        if json {
            let empty = RunSummary {
                reports: Vec::new(),
                launched_count: 0,
            };
            println!("{}", serde_json::to_string_pretty(&empty)?);
        } else {
            println!("No startup items found in {}", startup_dir.display());
            println!("Place .lnk shortcuts or executable files there and re-run.");
        }
        return Ok(());
    }

    let resolver = default_resolver();
    let enumerator = default_enumerator();
    let spawner = ShellSpawner;

    if !json {
        println!(
            "Startup folder: {} ({} items)",
            startup_dir.display(),
            items.len()
        );
        report_duplicate_targets(&items, &resolver);
    }

    let policy = config.policy_config();
    let orchestrator = LaunchOrchestrator::new(
        &resolver,
        enumerator.as_ref(),
        &spawner,
        &policy,
        config.wait_config(),
    );
    let summary = orchestrator.run(&items);

    events::log_run_completed(summary.launched_count, summary.reports.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for report in &summary.reports {
            println!("{}", describe(report));
        }
        println!();
        println!("Launched {} new item(s)", summary.launched_count);
    }

    Ok(())
}

/// Pick the startup folder: the positional argument if given, otherwise
/// `./Desktop-Startup`. When the folder does not exist but the current
/// directory already contains launchable items, the current directory
/// stands in; otherwise the folder is created for next time.
fn resolve_startup_dir(arg: Option<&String>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let dir = match arg {
        Some(dir) if dir == "." => cwd.join("Desktop-Startup"),
        Some(dir) => {
            let path = PathBuf::from(dir);
            if path.is_absolute() { path } else { cwd.join(path) }
        }
        None => cwd.join("Desktop-Startup"),
    };

    if dir.is_dir() {
        return Ok(dir);
    }

    if has_launchable_items(&cwd) {
        info!(
            event = "cli.run.startup_dir_fallback",
            dir = %cwd.display()
        );
        return Ok(cwd);
    }

    info!(event = "cli.run.startup_dir_created", dir = %dir.display());
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// CLI flags override whatever the config files said.
fn apply_cli_overrides(config: &mut DeskConfig, matches: &ArgMatches) {
    if matches.get_flag("restrict-all") {
        config.policy.restrict_all = Some(true);
    }
    if let Some(names) = matches.get_many::<String>("restrict-multiple") {
        config.policy.restricted = names.cloned().collect();
    }
    if let Some(names) = matches.get_many::<String>("allow-multiple") {
        config.policy.allowed = names.cloned().collect();
    }
    if matches.get_flag("no-native") {
        config.items.include_native = Some(false);
        config.items.include_shortcuts = Some(true);
    }
    if matches.get_flag("native-only") {
        config.items.include_shortcuts = Some(false);
        config.items.include_native = Some(true);
    }
    if let Some(types) = matches.get_many::<String>("native-types") {
        config.items.native_types = Some(types.cloned().collect());
    }
    if let Some(delay) = matches.get_one::<f64>("delay") {
        config.launch.delay_secs = Some(*delay);
    }
    if let Some(ticks) = matches.get_one::<u32>("wait-time") {
        config.launch.wait_ticks = Some(*ticks);
    }
}

/// Point out items that share a target (intentional duplicates) and
/// shortcuts that could not be parsed, before launching starts.
fn report_duplicate_targets(items: &[ItemDescriptor], resolver: &dyn TargetResolver) {
    let (groups, unresolvable) = group_by_target(items, resolver);

    for (target, group) in &groups {
        if group.len() > 1 {
            let names: Vec<String> = group.iter().map(|i| i.display_name()).collect();
            println!(
                "Note: {} items target {}: {}",
                group.len(),
                target,
                names.join(", ")
            );
        }
    }

    if !unresolvable.is_empty() {
        let names: Vec<String> = unresolvable.iter().map(|i| i.display_name()).collect();
        println!(
            "Warning: {} shortcut(s) cannot be parsed: {}",
            unresolvable.len(),
            names.join(", ")
        );
    }
}

fn describe(report: &ItemReport) -> String {
    match report.outcome {
        LaunchOutcome::SkippedAlreadyRunning => {
            format!("-> {} already running, skipped", report.display_name)
        }
        LaunchOutcome::Confirmed => format!("ok {} started", report.display_name),
        LaunchOutcome::TimedOut => format!(
            "!  {} launched but not confirmed (may be starting slowly)",
            report.display_name
        ),
        LaunchOutcome::LaunchFailed => format!("x  {} failed to launch", report.display_name),
        LaunchOutcome::ResolutionFailed => format!(
            "x  {} could not be resolved or launched",
            report.display_name
        ),
    }
}
