use clap::ArgMatches;
use tracing::{error, info, warn};

use ontrack_core::config::OnTrackConfig;
use ontrack_core::config::loading::apply_overrides;
use ontrack_core::events;
use ontrack_core::geometry;
use ontrack_core::refresh::{RefreshScheduler, ReloadHandle, Timeline, TimelineHost};
use ontrack_core::render;
use ontrack_core::stats::{BudgetStat, StatFetcher, StatSource};

use crate::display;

/// Load configuration with warning on errors, then apply --url/--token.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning(matches: &ArgMatches) -> OnTrackConfig {
    let config = match OnTrackConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.ontrack/config.toml and ./.ontrack/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            OnTrackConfig::default()
        }
    };

    apply_overrides(
        config,
        matches.get_one::<String>("url").cloned(),
        matches.get_one::<String>("token").cloned(),
    )
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches.subcommand_name().unwrap_or("none");
    events::log_session_started(command);

    let result = match matches.subcommand() {
        Some(("fetch", sub_matches)) => handle_fetch_command(matches, sub_matches),
        Some(("snapshot", sub_matches)) => handle_snapshot_command(matches, sub_matches),
        Some(("render", sub_matches)) => handle_render_command(matches, sub_matches),
        Some(("preview", sub_matches)) => handle_preview_command(sub_matches),
        Some(("watch", sub_matches)) => handle_watch_command(matches, sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_command_failed(command, e.as_ref());
    }

    result
}

fn build_fetcher(
    matches: &ArgMatches,
) -> Result<(OnTrackConfig, StatFetcher), Box<dyn std::error::Error>> {
    let config = load_config_with_warning(matches);
    let endpoint = config.resolve_endpoint()?;
    events::log_endpoint_resolved(&endpoint, config.refresh.interval());
    let fetcher = StatFetcher::new(endpoint)?;
    Ok((config, fetcher))
}

fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Runtime::new()?)
}

fn handle_fetch_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");
    info!(event = "cli.fetch_started", json_output = json_output);

    let (_, fetcher) = build_fetcher(matches)?;
    let stat = runtime()?.block_on(fetcher.fetch())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stat)?);
    } else {
        println!("{}", display::format_stat(&stat));
    }

    events::log_session_ended("fetch", None);
    info!(event = "cli.fetch_completed");
    Ok(())
}

fn handle_snapshot_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");
    info!(event = "cli.snapshot_started", json_output = json_output);

    let (config, fetcher) = build_fetcher(matches)?;
    let scheduler = RefreshScheduler::with_interval(fetcher, config.refresh.interval());
    let timeline = runtime()?.block_on(scheduler.timeline(chrono::Utc::now()));

    print_timeline(&timeline, json_output)?;

    events::log_session_ended("snapshot", timeline.current());
    info!(event = "cli.snapshot_completed");
    Ok(())
}

fn handle_render_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let use_sample = sub_matches.get_flag("sample");
    info!(event = "cli.render_started", sample = use_sample);

    let snapshot = if use_sample {
        geometry::transform_or_placeholder(&BudgetStat::sample())
    } else {
        let (config, fetcher) = build_fetcher(matches)?;
        let scheduler = RefreshScheduler::with_interval(fetcher, config.refresh.interval());
        let timeline = runtime()?.block_on(scheduler.timeline(chrono::Utc::now()));
        timeline
            .entries
            .into_iter()
            .next()
            .map(|entry| entry.snapshot)
            .unwrap_or_else(geometry::DisplaySnapshot::placeholder)
    };

    let scene = render::render(&snapshot);
    println!("{}", serde_json::to_string_pretty(&scene)?);

    events::log_session_ended("render", None);

    info!(
        event = "cli.render_completed",
        drawables = scene.drawables.len()
    );
    Ok(())
}

fn handle_preview_command(sub_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");
    info!(event = "cli.preview_started", json_output = json_output);

    let scheduler = RefreshScheduler::new(BudgetStat::sample());
    let timeline = runtime()?.block_on(scheduler.timeline(chrono::Utc::now()));

    print_timeline(&timeline, json_output)?;

    events::log_session_ended("preview", timeline.current());
    info!(event = "cli.preview_completed");
    Ok(())
}

fn handle_watch_command(
    matches: &ArgMatches,
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = sub_matches.get_flag("json");

    let (config, fetcher) = build_fetcher(matches)?;
    let interval_minutes = config.refresh.interval_minutes();
    let scheduler = RefreshScheduler::with_interval(fetcher, config.refresh.interval());

    info!(
        event = "cli.watch_started",
        json_output = json_output,
        interval_minutes = interval_minutes
    );

    let last = runtime()?.block_on(watch_timelines(scheduler, json_output, interval_minutes))?;

    events::log_session_ended("watch", last.as_ref().and_then(Timeline::current));
    info!(event = "cli.watch_completed");
    Ok(())
}

async fn watch_timelines<S: StatSource + 'static>(
    scheduler: RefreshScheduler<S>,
    json_output: bool,
    interval_minutes: u64,
) -> Result<Option<Timeline>, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let host = TimelineHost::new(scheduler);
    let mut latest = host.subscribe();
    let shutdown = host.shutdown_token();
    reload_on_hangup(host.reload_handle())?;
    let host_task = tokio::spawn(host.run());

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut shown = None;

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                shutdown.cancel();
                break;
            }
            changed = latest.changed() => {
                if changed.is_err() {
                    break;
                }
                let timeline = latest.borrow_and_update().clone();
                let Some(timeline) = timeline else {
                    continue;
                };

                if json_output {
                    println!("{}", serde_json::to_string(&timeline)?);
                } else {
                    print!("\x1B[2J\x1B[1;1H");
                    println!("{}", display::format_timeline(&timeline));
                    println!(
                        "\nRefreshing every {}m. Press Ctrl+C to exit.",
                        interval_minutes
                    );
                }
                io::stdout().flush()?;
                shown = Some(timeline);
            }
        }
    }

    host_task.await?;
    Ok(shown)
}

/// SIGHUP acts as the "Reload" button while watching.
#[cfg(unix)]
fn reload_on_hangup(reload: ReloadHandle) -> Result<(), Box<dyn std::error::Error>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangup = signal(SignalKind::hangup())?;
    tokio::spawn(async move {
        while hangup.recv().await.is_some() {
            reload.reload_all_timelines();
        }
    });
    Ok(())
}

#[cfg(not(unix))]
fn reload_on_hangup(_reload: ReloadHandle) -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}

fn print_timeline(
    timeline: &Timeline,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(timeline)?);
    } else {
        println!("{}", display::format_timeline(timeline));
    }
    Ok(())
}
