//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats `armada_solver` events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, trimming)
//! - **DEBUG**: One line per accepted restart attempt
//! - **TRACE**: Discarded attempts and individual swaps

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "armada_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Armada banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut builder = EnvFilter::builder();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            builder = builder.with_default_directive(directive);
        }
        let filter = builder.from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ArmadaConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
    _                         _
   / \   _ __ _ __ ___   __ _  __| | __ _
  / _ \ | '__| '_ ` _ \ / _` |/ _` |/ _` |
 / ___ \| |  | | | | | | (_| | (_| | (_| |
/_/   \_\_|  |_| |_| |_|\__,_|\__,_|\__,_|
"#;

    let version_line = format!("         v{} - Constrained Unit Partitioner\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct ArmadaConsoleLayer;

impl<S: Subscriber> Layer<S> for ArmadaConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("armada_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    mode: Option<String>,
    member_count: Option<u64>,
    unit_count: Option<u64>,
    capacity: Option<u64>,
    cluster_count: Option<u64>,
    placeholder_count: Option<u64>,
    restarts: Option<u64>,
    swap_iterations: Option<u64>,
    seed: Option<u64>,
    dropped_clusters: Option<u64>,
    dropped_members: Option<u64>,
    penalty: Option<u64>,
    restart: Option<u64>,
    rapport: Option<u64>,
    total_rapport: Option<u64>,
    improving_swaps: Option<u64>,
    attempts: Option<u64>,
    construction_failures: Option<u64>,
    combat_rejections: Option<u64>,
    duration_ms: Option<u64>,
    iteration: Option<u64>,
    left_unit: Option<u64>,
    right_unit: Option<u64>,
    combat_score: Option<f64>,
    min_combat_score: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "mode" => self.mode = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "member_count" => self.member_count = Some(value),
            "unit_count" => self.unit_count = Some(value),
            "capacity" => self.capacity = Some(value),
            "cluster_count" => self.cluster_count = Some(value),
            "placeholder_count" => self.placeholder_count = Some(value),
            "restarts" => self.restarts = Some(value),
            "swap_iterations" => self.swap_iterations = Some(value),
            "seed" => self.seed = Some(value),
            "dropped_clusters" => self.dropped_clusters = Some(value),
            "dropped_members" => self.dropped_members = Some(value),
            "penalty" => self.penalty = Some(value),
            "restart" => self.restart = Some(value),
            "rapport" => self.rapport = Some(value),
            "total_rapport" => self.total_rapport = Some(value),
            "improving_swaps" => self.improving_swaps = Some(value),
            "attempts" => self.attempts = Some(value),
            "construction_failures" => self.construction_failures = Some(value),
            "combat_rejections" => self.combat_rejections = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "iteration" => self.iteration = Some(value),
            "left_unit" => self.left_unit = Some(value),
            "right_unit" => self.right_unit = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "combat_score" => self.combat_score = Some(value),
            "min_combat_score" => self.min_combat_score = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "mode" => self.mode = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "trim" => format_trim(v),
        "restart_end" => format_restart_end(v),
        "construction_failed" | "combat_rejected" => format_discarded(v, event, level),
        "swap" => format_swap(v, level),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Solving │ {} members │ {} units ({} slots) │ {} clusters",
        "▶".bright_green().bold(),
        count(v.member_count).bright_yellow(),
        count(v.unit_count).bright_yellow(),
        count(v.capacity).bright_yellow(),
        count(v.cluster_count).bright_yellow(),
    );

    if let Some(placeholders) = v.placeholder_count.filter(|&n| n > 0) {
        output.push_str(&format!(
            " │ {} placeholders",
            placeholders.to_formatted_string(&Locale::en).bright_black()
        ));
    }

    output.push_str(&format!(
        " │ {} restarts ({}) │ seed {}",
        count(v.restarts).bright_magenta(),
        v.mode.as_deref().unwrap_or("sequential"),
        v.seed.unwrap_or(0).bright_white(),
    ));

    output
}

fn format_trim(v: &EventVisitor) -> String {
    format!(
        "{} Trimmed {} members in {} clusters │ {} rapport potential lost",
        "✂".yellow(),
        count(v.dropped_members).bright_yellow(),
        count(v.dropped_clusters).bright_yellow(),
        count(v.penalty).yellow(),
    )
}

fn format_restart_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Restart {:>6} │ {} rapport │ {} swaps",
        "↻".bright_blue(),
        count(v.restart).white(),
        count(v.rapport).bright_green(),
        count(v.improving_swaps).white(),
    );

    if let Some(combat) = v.combat_score {
        output.push_str(&format!(" │ {} combat", format_combat(combat)));
    }

    output
}

fn format_discarded(v: &EventVisitor, event: &str, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let reason = match (event, v.combat_score, v.min_combat_score) {
        ("combat_rejected", Some(score), Some(min)) => {
            format!("combat {:.2} below {:.2}", score, min)
        }
        ("combat_rejected", _, _) => "combat below minimum".to_string(),
        _ => "no feasible construction".to_string(),
    };

    format!(
        "{} Restart {:>6} │ {}",
        "✗".bright_red(),
        count(v.restart).bright_black(),
        reason.bright_black()
    )
}

fn format_swap(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} Swap {:>6} │ unit {} ⇄ unit {}",
        "✓".bright_green(),
        count(v.iteration).bright_black(),
        count(v.left_unit).bright_black(),
        count(v.right_unit).bright_black(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let attempts = v.attempts.unwrap_or(0);
    let failures = v.construction_failures.unwrap_or(0);
    let rejections = v.combat_rejections.unwrap_or(0);
    let accepted = attempts.saturating_sub(failures + rejections);

    let mut output = format!(
        "{} Solving complete │ {} │ {} rapport",
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.total_rapport).bright_green().bold(),
    );
    if let Some(combat) = v.combat_score {
        output.push_str(&format!(" │ {} combat", format_combat(combat)));
    }

    // Summary box
    let inner_width: usize = 58;
    let border = "═".repeat(inner_width);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", border).bright_cyan().to_string());
    output.push('\n');

    let rows = [
        ("Total rapport:", count(v.total_rapport)),
        (
            "Attempts:",
            format!(
                "{} ok / {} failed / {} rejected",
                accepted, failures, rejections
            ),
        ),
    ];
    for (label, value) in rows {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&format!("╚{}╝", border).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_combat(score: f64) -> String {
    let text = format!("{:.2}", score);
    if score > 0.0 {
        text.bright_green().to_string()
    } else {
        text.white().to_string()
    }
}
