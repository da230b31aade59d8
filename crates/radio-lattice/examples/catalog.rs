//! Radio Lattice Catalog Example
//!
//! Text-mode tour of every group style and content shape:
//! - Simple, subtitle, and subtitle & detail items
//! - Standard and grouped styles
//! - Vertical and horizontal axes
//!
//! Each group is drawn, tapped, and drawn again so the selection change
//! and its notifications are visible.
//!
//! Run with: cargo run -p radio-lattice --example catalog
//!
//! Pass a TOML appearance file to apply overrides to every group:
//! cargo run -p radio-lattice --example catalog -- appearance.toml
//!
//! Set `RUST_LOG=radio_lattice=debug` to see selection logging.

use std::fmt::Write as _;

use radio_lattice::prelude::*;
use tracing_subscriber::EnvFilter;

/// Width of the simulated screen, in points.
const SCREEN_WIDTH: f32 = 360.0;

/// Points per character cell of the text output.
const POINTS_PER_COLUMN: f32 = 4.0;

/// The kind of content shown by a catalog page.
#[derive(Debug, Clone, Copy)]
enum Content {
    Simple,
    Subtitle,
    SubtitleAndDetail,
}

impl Content {
    fn title(self) -> &'static str {
        match self {
            Content::Simple => "Simple",
            Content::Subtitle => "Subtitle",
            Content::SubtitleAndDetail => "Subtitle & Detail",
        }
    }

    fn footer(self) -> &'static str {
        match self {
            Content::Simple => "Regular radio buttons, no additional information",
            Content::Subtitle => "This example contains a description for each radio button",
            Content::SubtitleAndDetail => {
                "In addition to the description, detailed information is displayed on the right"
            }
        }
    }

    fn items(self, count: usize) -> Vec<RadioItem> {
        (1..=count)
            .map(|n| {
                let item = RadioItem::new(format!("Variant {n}"));
                match self {
                    Content::Simple => item,
                    Content::Subtitle => item.with_subtitle("Description to the variant"),
                    Content::SubtitleAndDetail => item
                        .with_subtitle("Description to the variant")
                        .with_detail("Detail"),
                }
            })
            .collect()
    }
}

/// Renders rows as lines of text.
#[derive(Default)]
struct TextRenderer {
    output: String,
    horizontal: Vec<String>,
}

impl TextRenderer {
    fn columns(points: f32) -> usize {
        (points / POINTS_PER_COLUMN).round().max(1.0) as usize
    }

    fn indicator(visual: &RowVisual<'_>) -> &'static str {
        if visual.appearance.dot_color.is_some() {
            "(\u{25cf})"
        } else {
            "( )"
        }
    }
}

impl GroupRenderer for TextRenderer {
    fn begin_group(&mut self, config: &StyleConfiguration, size: Size) {
        self.horizontal.clear();
        let _ = writeln!(
            self.output,
            "    [{} / {} | {:.0}x{:.0}pt]",
            config.style, config.axis, size.width, size.height
        );
    }

    fn draw_row(&mut self, visual: RowVisual<'_>) {
        let width = Self::columns(visual.row.frame.width());
        let inset = " ".repeat(Self::columns(visual.row.layout.indicator_x));
        let mut title = format!("{inset}{} {}", Self::indicator(&visual), visual.item.title());

        if let Some(detail) = visual.item.detail() {
            let pad = width.saturating_sub(title.chars().count() + detail.len() + 1);
            title = format!("{title}{} {detail}", " ".repeat(pad));
        }

        if visual.config.axis == Axis::Horizontal {
            self.horizontal.push(format!("{title:<width$}"));
            return;
        }

        let card = visual.config.has_card_background();
        let edge = if card { "|" } else { " " };
        let _ = writeln!(self.output, "    {edge}{title:<width$}{edge}");

        if let Some(subtitle) = visual.item.subtitle() {
            let indent = " ".repeat(Self::columns(visual.row.layout.subtitle_x));
            let _ = writeln!(self.output, "    {edge}{:<width$}{edge}", format!("{indent}{subtitle}"));
        }

        if visual.appearance.separator_color.is_some() {
            let lead = Self::columns(visual.row.layout.separator_x);
            let line = "\u{2500}".repeat(width.saturating_sub(lead));
            let _ = writeln!(self.output, "    {}{line}", " ".repeat(lead + 1));
        } else if card {
            let _ = writeln!(self.output, "    {}", "-".repeat(width + 2));
        }
    }

    fn end_group(&mut self) {
        if !self.horizontal.is_empty() {
            let _ = writeln!(self.output, "    {}", self.horizontal.join("   "));
            self.horizontal.clear();
        }
    }
}

fn show(group: &RadioGroup) {
    let mut renderer = TextRenderer::default();
    group.paint(SCREEN_WIDTH, &mut renderer);
    print!("{}", renderer.output);
}

fn demo_group(
    label: &str,
    items: Vec<RadioItem>,
    style: GroupStyle,
    axis: Axis,
    appearance: &AppearanceConfig,
    tap: i32,
) -> radio_lattice::Result<()> {
    let mut group = RadioGroup::new(items, style, axis)?;
    group.merge_overrides(&appearance.overrides)?;
    if let Some(enabled) = appearance.feedback {
        group.set_feedback_enabled(enabled);
    }

    let name = label.to_string();
    group.on_selection_changed(move |index| println!("    -> {name}: selected {index}"));
    group.feedback.connect(|_| println!("    -> feedback"));

    println!("  {label}");
    show(&group);

    // Tap the middle of the row, the way a renderer would report it.
    let layout = group.layout(SCREEN_WIDTH);
    if let Some(row) = layout.row(tap as usize) {
        let center = Point::new(
            row.frame.left() + row.frame.width() / 2.0,
            row.frame.top() + row.layout.center_y,
        );
        if let Some(hit) = layout.hit_test(center) {
            group.select(hit as i32)?;
        }
    }
    // A repeated tap changes nothing.
    group.select(tap)?;

    show(&group);
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let appearance = match std::env::args().nth(1) {
        Some(path) => AppearanceConfig::load_toml(path)?,
        None => AppearanceConfig::default(),
    };

    println!("Radio Lattice catalog");
    println!("=====================");
    println!();

    for content in [Content::Simple, Content::Subtitle, Content::SubtitleAndDetail] {
        println!("{}", content.title());
        println!("{}", "-".repeat(content.title().len()));
        println!("{}", content.footer());
        println!();

        for style in [GroupStyle::Standard, GroupStyle::Grouped] {
            demo_group(
                &format!("{style} / vertical"),
                content.items(3),
                style,
                Axis::Vertical,
                &appearance,
                1,
            )?;
            demo_group(
                &format!("{style} / horizontal"),
                content.items(2),
                style,
                Axis::Horizontal,
                &appearance,
                0,
            )?;
        }
    }

    let tree_group = RadioGroup::new(Content::Subtitle.items(3), GroupStyle::Grouped, Axis::Vertical)?
        .with_initial_selection(2)?;
    println!("Debug tree");
    println!("----------");
    print!("{}", tree_group.debug_tree(TreeFormatOptions::detailed()));

    Ok(())
}
