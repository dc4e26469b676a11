//! Rateline CLI - validate, render and exercise rating manifests.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::ptr_arg,
    clippy::doc_markdown
)]

use clap::{Parser, Subcommand};
use rateline_core::{Event, Key, MouseButton, Point, Rect, Widget};
use rateline_widgets::{Rating, RatingChanged};
use rateline_yaml::{Manifest, WidgetConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rateline")]
#[command(about = "Rating widget manifest tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check YAML manifest validity
    Check {
        /// Path to manifest file
        #[arg(default_value = "ratings.yaml")]
        manifest: PathBuf,
    },

    /// Render widgets to SVG
    Render {
        /// Path to manifest file
        #[arg(default_value = "ratings.yaml")]
        manifest: PathBuf,

        /// Only render this widget
        #[arg(short, long)]
        widget: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Feed input events through a widget and print the commits
    Simulate {
        /// Path to manifest file
        #[arg(default_value = "ratings.yaml")]
        manifest: PathBuf,

        /// Widget to drive
        #[arg(short, long)]
        widget: String,

        /// Comma-separated events: key names (right, end, pageup, ...),
        /// hover:<fraction>, click:<fraction>, leave
        #[arg(short, long)]
        events: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { manifest } => check_manifest(&manifest),
        Commands::Render {
            manifest,
            widget,
            output,
        } => render(&manifest, widget.as_deref(), output.as_ref()),
        Commands::Simulate {
            manifest,
            widget,
            events,
        } => simulate(&manifest, &widget, &events),
    }
}

fn load_manifest(path: &PathBuf) -> Manifest {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read manifest: {}", e);
            std::process::exit(1);
        }
    };

    match Manifest::load(&content) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Manifest invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn find_widget<'a>(manifest: &'a Manifest, id: &str) -> &'a WidgetConfig {
    match manifest.widget(id) {
        Some(w) => w,
        None => {
            eprintln!("No widget '{}' in manifest '{}'", id, manifest.name);
            std::process::exit(1);
        }
    }
}

fn build(config: &WidgetConfig) -> Rating {
    match Rating::from_config(config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Widget '{}' invalid: {}", config.id, e);
            std::process::exit(1);
        }
    }
}

fn check_manifest(path: &PathBuf) {
    println!("Checking manifest: {}", path.display());
    let manifest = load_manifest(path);

    println!("Manifest valid!");
    println!("  Name: {}", manifest.name);
    println!("  Format: {}", manifest.rateline);
    println!("  Widgets: {}", manifest.widgets.len());
    for widget in &manifest.widgets {
        println!(
            "    {} - {} of {} ({} rounding{})",
            widget.id,
            widget.value,
            widget.max,
            widget.rounding,
            if widget.read_only { ", read-only" } else { "" }
        );
    }
}

fn render(path: &PathBuf, widget: Option<&str>, output: Option<&PathBuf>) {
    let manifest = load_manifest(path);
    let configs: Vec<&WidgetConfig> = match widget {
        Some(id) => vec![find_widget(&manifest, id)],
        None => manifest.widgets.iter().collect(),
    };

    let svg = configs
        .into_iter()
        .map(|config| build(config).to_svg())
        .collect::<Vec<_>>()
        .join("\n");

    match output {
        Some(out) => {
            if let Err(e) = fs::write(out, svg + "\n") {
                eprintln!("Failed to write {}: {}", out.display(), e);
                std::process::exit(1);
            }
            println!("Wrote {}", out.display());
        }
        None => println!("{}", svg),
    }
}

/// One step of a simulated session.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    Key(Key),
    Hover(f32),
    Click(f32),
    Leave,
}

fn parse_step(token: &str) -> Result<Step, String> {
    let fraction = |s: &str| {
        s.parse::<f32>()
            .ok()
            .filter(|f| (0.0..=1.0).contains(f))
            .ok_or_else(|| format!("invalid fraction '{}' (expected 0..=1)", s))
    };
    match token.split_once(':') {
        Some(("hover", f)) => Ok(Step::Hover(fraction(f)?)),
        Some(("click", f)) => Ok(Step::Click(fraction(f)?)),
        Some(_) => Err(format!("unknown event '{}'", token)),
        None if token.eq_ignore_ascii_case("leave") => Ok(Step::Leave),
        None => Key::from_name(token)
            .map(Step::Key)
            .ok_or_else(|| format!("unknown key '{}'", token)),
    }
}

fn step_events(step: &Step, bounds: Rect) -> Vec<Event> {
    let at = |f: f32| Point::new(bounds.width.mul_add(f, bounds.x), bounds.height / 2.0);
    match *step {
        Step::Key(key) => vec![Event::KeyDown { key }, Event::KeyUp { key }],
        Step::Hover(f) => vec![Event::MouseMove { position: at(f) }],
        Step::Click(f) => vec![
            Event::MouseDown {
                position: at(f),
                button: MouseButton::Left,
            },
            Event::MouseUp {
                position: at(f),
                button: MouseButton::Left,
            },
        ],
        Step::Leave => vec![Event::MouseLeave],
    }
}

fn simulate(path: &PathBuf, widget: &str, events: &str) {
    let manifest = load_manifest(path);
    let mut rating = build(find_widget(&manifest, widget));

    let steps: Vec<Step> = match events
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_step)
        .collect()
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let size = rating.get_size() * rating.get_max() as f32;
    let bounds = Rect::new(0.0, 0.0, size, rating.get_size());
    rating.layout(bounds);

    println!("{}: start at {}", widget, rating.display().tooltip);
    for step in &steps {
        for event in step_events(step, bounds) {
            let committed = rating
                .event(&event)
                .and_then(|msg| msg.downcast::<RatingChanged>().ok());
            if let Some(changed) = committed {
                // The CLI plays the host and accepts every commit.
                rating.set_value(changed.value);
                println!("  {:?} -> commit {}", step, changed.value);
            }
        }
        if let Some(preview) = rating.preview() {
            println!("  {:?} -> preview {}", step, preview);
        }
    }
    println!("{}: end at {}", widget, rating.display().tooltip);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!(parse_step("right"), Ok(Step::Key(Key::Right)));
        assert_eq!(parse_step("PageUp"), Ok(Step::Key(Key::PageUp)));
        assert_eq!(parse_step("hover:0.5"), Ok(Step::Hover(0.5)));
        assert_eq!(parse_step("click:1"), Ok(Step::Click(1.0)));
        assert_eq!(parse_step("leave"), Ok(Step::Leave));
        assert!(parse_step("click:2").is_err());
        assert!(parse_step("drag:0.5").is_err());
        assert!(parse_step("f13").is_err());
    }

    #[test]
    fn test_click_step_commits() {
        let mut rating = Rating::new();
        let bounds = Rect::new(0.0, 0.0, 120.0, 24.0);
        rating.layout(bounds);
        let commits: Vec<f32> = step_events(&Step::Click(0.46), bounds)
            .iter()
            .filter_map(|e| rating.event(e))
            .filter_map(|m| m.downcast::<RatingChanged>().ok())
            .map(|m| m.value)
            .collect();
        assert_eq!(commits, vec![2.5]);
    }

    #[test]
    fn test_cli_parses_simulate() {
        let cli = Cli::try_parse_from([
            "rateline",
            "simulate",
            "ratings.yaml",
            "--widget",
            "quality",
            "--events",
            "right,end",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Simulate { ref widget, ref events, .. } if widget == "quality" && events == "right,end"
        ));
    }
}
