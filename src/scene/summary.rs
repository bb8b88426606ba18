//! Scenes for the static daily summary reel.

use std::sync::Arc;

use crate::animation::spring::Spring;
use crate::data::aggregate::{ChangeKind, change_items};
use crate::data::model::StaticSummary;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::ReelResult;
use crate::scene::layout::{text_width, thousands};
use crate::scene::{Scene, SceneCtx, SceneNode, TextAlign, theme};

fn line_height(size: f64) -> f64 {
    size * 1.2
}

/// Left edge and width of the centered content column.
fn column(ctx: &SceneCtx) -> (f64, f64) {
    let width = ctx.canvas.w() * 0.8;
    ((ctx.canvas.w() - width) / 2.0, width)
}

/// Headline numbers in a two-by-two grid of popping cards.
#[derive(Clone, Debug)]
pub struct MetricsScene {
    summary: Arc<StaticSummary>,
}

impl MetricsScene {
    /// Grid for the summary's metrics.
    pub fn new(summary: Arc<StaticSummary>) -> Self {
        Self { summary }
    }
}

impl Scene for MetricsScene {
    fn name(&self) -> &'static str {
        "metrics"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let snappy = Spring::new(theme::SNAPPY)?;
        let m = &self.summary.metrics;
        let items = [
            ("Contributors", m.contributors.to_string(), "👥"),
            ("Merged PRs", m.merged_prs.to_string(), "🔄"),
            ("New Issues", m.new_issues.to_string(), "⚠️"),
            ("Lines Changed", thousands(m.lines_changed), "📝"),
        ];

        let gap = 2.0 * theme::REM;
        let (left, width) = column(ctx);
        let (icon_size, value_size, label_size) =
            (2.0 * theme::REM, 3.0 * theme::REM, 1.5 * theme::REM);
        let pad = 1.5 * theme::REM;
        let cell_w = (width - 2.0 * gap - gap) / 2.0;
        let cell_h = 2.0 * pad
            + line_height(icon_size)
            + line_height(value_size)
            + line_height(label_size)
            + 2.0 * 0.5 * theme::REM;
        let grid_top = (ctx.canvas.h() - (2.0 * cell_h + gap)) / 2.0;

        for (i, (label, value, icon)) in items.into_iter().enumerate() {
            let x = left + gap + (i % 2) as f64 * (cell_w + gap);
            let y = grid_top + (i / 2) as f64 * (cell_h + gap);
            let cell = Rect::new(x, y, x + cell_w, y + cell_h);
            let cx = cell.center().x;
            let t = ctx.stagger(i, 5).progress(&snappy);
            let id = format!("metrics/{i}");

            let gap_y = 0.5 * theme::REM;
            let icon_top = y + pad;
            let value_top = icon_top + line_height(icon_size) + gap_y;
            let label_top = value_top + line_height(value_size) + gap_y;
            let icon_node = SceneNode::text(
                format!("{id}/icon"),
                icon,
                Point::new(cx, icon_top + icon_size),
                icon_size,
                theme::TEXT,
                TextAlign::Center,
            );
            let value_node = SceneNode::text(
                format!("{id}/value"),
                value,
                Point::new(cx, value_top + value_size),
                value_size,
                theme::TEXT,
                TextAlign::Center,
            )
            .bold();
            let label_node = SceneNode::text(
                format!("{id}/label"),
                label,
                Point::new(cx, label_top + label_size),
                label_size,
                theme::SLATE,
                TextAlign::Center,
            );

            let nodes = [
                SceneNode::rect(id.clone(), cell, 12.0, Color::WHITE.with_alpha(0.1)),
                icon_node,
                value_node,
                label_node,
            ];
            out.extend(
                nodes
                    .into_iter()
                    .map(|n| n.scaled_about(cell.center(), t).faded(t)),
            );
        }
        Ok(())
    }
}

/// Badge color for a change kind.
pub fn change_color(kind: ChangeKind) -> Color {
    match kind {
        ChangeKind::Feature => theme::PR_OPEN,
        ChangeKind::Fix => theme::RED,
        ChangeKind::Chore => theme::ACCENT,
    }
}

/// Change-log rows sliding in from the left.
#[derive(Clone, Debug)]
pub struct ChangesScene {
    summary: Arc<StaticSummary>,
}

impl ChangesScene {
    /// Rows for features, fixes and chores in that order.
    pub fn new(summary: Arc<StaticSummary>) -> Self {
        Self { summary }
    }
}

impl Scene for ChangesScene {
    fn name(&self) -> &'static str {
        "changes"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let entrance = Spring::new(theme::ENTRANCE)?;
        let items = change_items(&self.summary.changes);

        let (left, _) = column(ctx);
        let (badge_size, text_size) = (1.2 * theme::REM, 1.5 * theme::REM);
        let badge_h = line_height(badge_size) + theme::REM;
        let row_h = badge_h.max(line_height(text_size));
        let step = row_h + 1.5 * theme::REM;
        let total = (items.len() as f64 * step - 1.5 * theme::REM).max(0.0);
        let mut top = (ctx.canvas.h() - total) / 2.0;

        for (i, item) in items.iter().enumerate() {
            let t = ctx.stagger(i, 5);
            let dx = t.spring(&entrance, -100.0, 0.0);
            let opacity = t.progress(&entrance);
            let id = format!("change/{i}");
            let label = item.kind.label();

            let badge_w = (text_width(label, badge_size) + 2.0 * theme::REM).max(100.0);
            let mid = top + row_h / 2.0;
            let badge = Rect::new(left, mid - badge_h / 2.0, left + badge_w, mid + badge_h / 2.0);
            let nodes = [
                SceneNode::rect(format!("{id}/badge"), badge, 20.0, change_color(item.kind)),
                SceneNode::text(
                    format!("{id}/badge/label"),
                    label,
                    Point::new(badge.center().x, mid + badge_size * 0.35),
                    badge_size,
                    theme::TEXT,
                    TextAlign::Center,
                ),
                SceneNode::text(
                    format!("{id}/text"),
                    item.text,
                    Point::new(badge.x1 + theme::REM, mid + text_size * 0.35),
                    text_size,
                    theme::TEXT,
                    TextAlign::Left,
                ),
            ];
            out.extend(nodes.into_iter().map(|n| n.translated(dx, 0.0).faded(opacity)));
            top += step;
        }
        Ok(())
    }
}

const AREA_BAR_H: f64 = 24.0;
const AREA_LABEL_W: f64 = 100.0;

/// Per-area addition and deletion bars scaled to the busiest area.
#[derive(Clone, Debug)]
pub struct AreasScene {
    summary: Arc<StaticSummary>,
}

impl AreasScene {
    /// Bars for every area, in summary order.
    pub fn new(summary: Arc<StaticSummary>) -> Self {
        Self { summary }
    }
}

impl Scene for AreasScene {
    fn name(&self) -> &'static str {
        "areas"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let entrance = Spring::new(theme::ENTRANCE)?;
        let areas = &self.summary.areas;
        let max_scale = areas
            .iter()
            .map(|a| a.additions.max(a.deletions))
            .max()
            .unwrap_or(0);
        let percent = |n: u64| {
            if max_scale == 0 {
                0.0
            } else {
                n as f64 / max_scale as f64 * 100.0
            }
        };

        let (left, width) = column(ctx);
        let right = left + width;
        let track_w = width - theme::REM - AREA_LABEL_W;
        let name_size = 1.5 * theme::REM;
        let gap = 0.5 * theme::REM;
        let step = line_height(name_size) + 2.0 * (gap + AREA_BAR_H) + 2.0 * theme::REM;
        let total = areas.len() as f64 * step;
        let mut top = (ctx.canvas.h() - total) / 2.0;

        for (i, area) in areas.iter().enumerate() {
            let t = ctx.stagger(i, 5);
            let opacity = t.progress(&entrance);
            let id = format!("area/{i}");
            let header = top + name_size;

            let mut nodes = vec![
                SceneNode::text(
                    format!("{id}/name"),
                    area.name.as_str(),
                    Point::new(left, header),
                    name_size,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .bold(),
                SceneNode::text(
                    format!("{id}/files"),
                    format!("{} files", area.files),
                    Point::new(right, header),
                    theme::REM,
                    theme::SLATE,
                    TextAlign::Right,
                ),
            ];

            let mut bar_top = top + line_height(name_size) + gap;
            let bars = [
                ("additions", area.additions, '+', theme::PR_OPEN),
                ("deletions", area.deletions, '-', theme::RED),
            ];
            for (key, lines, sign, color) in bars {
                let share = t.spring(&entrance, 0.0, percent(lines)) / 100.0;
                let track = Rect::new(left, bar_top, left + track_w, bar_top + AREA_BAR_H);
                let fill = Rect::new(left, bar_top, left + track_w * share, bar_top + AREA_BAR_H);
                nodes.push(SceneNode::rect(
                    format!("{id}/{key}/track"),
                    track,
                    12.0,
                    color.with_alpha(0.2),
                ));
                nodes.push(SceneNode::rect(format!("{id}/{key}"), fill, 12.0, color));
                nodes.push(SceneNode::text(
                    format!("{id}/{key}/label"),
                    format!("{sign}{lines}"),
                    Point::new(
                        track.x1 + theme::REM,
                        bar_top + AREA_BAR_H / 2.0 + 0.35 * theme::REM,
                    ),
                    theme::REM,
                    color,
                    TextAlign::Left,
                ));
                bar_top += AREA_BAR_H + gap;
            }

            out.extend(nodes.into_iter().map(|n| n.faded(opacity)));
            top += step;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/summary.rs"]
mod tests;
