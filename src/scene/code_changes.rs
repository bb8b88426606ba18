use std::sync::Arc;

use crate::animation::spring::Spring;
use crate::data::aggregate::top_file_changes;
use crate::data::model::CodeChangeSet;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::ReelResult;
use crate::scene::layout::{centered_row, text_width};
use crate::scene::{Scene, SceneCtx, SceneNode, TextAlign, push_heading, theme};

/// Files shown, largest churn first.
pub const MAX_FILES: usize = 8;

const LABEL_H: f64 = theme::REM * 1.2 + 5.0;
const BAR_H: f64 = 20.0;
const ROW_GAP: f64 = 20.0;
const LEGEND_GAP: f64 = 40.0;
const SWATCH: f64 = 16.0;

/// Addition/deletion bars for the most-changed files.
#[derive(Clone, Debug)]
pub struct CodeChangesScene {
    set: Arc<CodeChangeSet>,
}

impl CodeChangesScene {
    /// Bars for the top files of `set`.
    pub fn new(set: Arc<CodeChangeSet>) -> Self {
        Self { set }
    }
}

impl Scene for CodeChangesScene {
    fn name(&self) -> &'static str {
        "code_changes"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let fade = Spring::new(theme::FADE)?;
        let grow = Spring::new(theme::GROW)?;
        let slide = Spring::new(theme::SLIDE)?;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());

        push_heading(
            out,
            "changes",
            ctx.canvas,
            h * 0.1,
            &self.set.title,
            Some("Code Changes Impact"),
            ctx.progress(&fade),
        );

        let files = top_file_changes(&self.set.changes, MAX_FILES);
        let max_total = files.iter().map(|c| c.total).max().unwrap_or(0);
        let max_bar = w * 0.6;
        let width = max_bar + 300.0;
        let left = (w - width) / 2.0;
        let right = left + width;
        let row_h = LABEL_H + BAR_H + ROW_GAP;
        let height = files.len() as f64 * row_h + LEGEND_GAP + SWATCH;
        let mut top = (h - height) / 2.0;

        let container = ctx.delayed(15).progress(&grow);
        let scale = |n: u64| {
            if max_total == 0 {
                0.0
            } else {
                n as f64 / max_total as f64 * max_bar
            }
        };

        for (i, change) in files.iter().enumerate() {
            let item = ctx.stagger(i, 5);
            let bar = item.delayed(30).progress(&slide);
            let label = item.delayed(45).progress(&fade);
            let id = format!("changes/file/{i}");
            let baseline = top + theme::REM;

            let minus = format!("-{}", change.deletions);
            let plus = format!("+{}", change.additions);
            let stat_size = 0.9 * theme::REM;
            let minus_x = right;
            let slash_x = minus_x - text_width(&minus, stat_size);
            let plus_x = slash_x - text_width(" / ", stat_size);

            let labels = [
                SceneNode::text(
                    format!("{id}/path"),
                    change.path.as_str(),
                    Point::new(left, baseline),
                    theme::REM,
                    theme::TEXT,
                    TextAlign::Left,
                ),
                SceneNode::text(
                    format!("{id}/additions"),
                    plus,
                    Point::new(plus_x, baseline),
                    stat_size,
                    theme::GREEN,
                    TextAlign::Right,
                ),
                SceneNode::text(
                    format!("{id}/separator"),
                    " / ",
                    Point::new(slash_x, baseline),
                    stat_size,
                    theme::MUTED,
                    TextAlign::Right,
                ),
                SceneNode::text(
                    format!("{id}/deletions"),
                    minus,
                    Point::new(minus_x, baseline),
                    stat_size,
                    theme::RED,
                    TextAlign::Right,
                ),
            ];
            out.extend(labels.into_iter().map(|n| n.faded(label * container)));

            let bar_top = top + LABEL_H;
            let add_w = scale(change.additions) * bar;
            let del_w = scale(change.deletions) * bar;
            out.push(
                SceneNode::rect(
                    format!("{id}/added"),
                    Rect::new(left, bar_top, left + add_w, bar_top + BAR_H),
                    4.0,
                    theme::GREEN,
                )
                .faded(container),
            );
            out.push(
                SceneNode::rect(
                    format!("{id}/deleted"),
                    Rect::new(left + add_w, bar_top, left + add_w + del_w, bar_top + BAR_H),
                    4.0,
                    theme::RED,
                )
                .faded(container),
            );

            top += row_h;
        }

        // Legend.
        let legend_opacity = ctx.delayed(60).progress(&fade);
        let legend_top = top + LEGEND_GAP - ROW_GAP;
        let entries = [
            ("added", "Lines Added", theme::GREEN),
            ("deleted", "Lines Deleted", theme::RED),
        ];
        let widths: Vec<f64> = entries
            .iter()
            .map(|(_, label, _)| SWATCH + 8.0 + text_width(label, theme::REM))
            .collect();
        let lefts = centered_row(&widths, 30.0, (left + right) / 2.0);
        for ((key, label, color), x) in entries.into_iter().zip(lefts) {
            out.push(
                SceneNode::rect(
                    format!("changes/legend/{key}/swatch"),
                    Rect::new(x, legend_top, x + SWATCH, legend_top + SWATCH),
                    4.0,
                    color,
                )
                .faded(legend_opacity),
            );
            out.push(
                SceneNode::text(
                    format!("changes/legend/{key}/label"),
                    label,
                    Point::new(x + SWATCH + 8.0, legend_top + SWATCH - 2.0),
                    theme::REM,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .faded(legend_opacity),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/code_changes.rs"]
mod tests;
