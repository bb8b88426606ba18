//! Scenes driven by an [`ActivitySummary`]: the event timeline, the contributor-to-repository
//! flow, the static counts overlay and the detailed per-repository summary.

use std::f64::consts::FRAC_PI_4;
use std::sync::Arc;

use crate::animation::interpolate::{InterpolateOptions, interpolate};
use crate::animation::spring::Spring;
use crate::data::aggregate::{
    events_by_author, events_by_repository, repo_short_name, time_markers, timeline_points,
    timeline_position, unique_authors, unique_repositories,
};
use crate::data::model::ActivitySummary;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::error::ReelResult;
use crate::scene::layout::{clock, text_width};
use crate::scene::node::scale_about;
use crate::scene::{Scene, SceneCtx, SceneNode, TextAlign, theme};

const TIMELINE_MARGIN: f64 = 100.0;
const TIME_TICKS: usize = 5;

/// Event markers placed on a horizontal time axis.
#[derive(Clone, Debug)]
pub struct TimelineScene {
    summary: Arc<ActivitySummary>,
}

impl TimelineScene {
    /// Timeline over the summary's date window.
    pub fn new(summary: Arc<ActivitySummary>) -> Self {
        Self { summary }
    }
}

impl Scene for TimelineScene {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let spring = Spring::new(theme::ENTRANCE)?;
        let s = &self.summary;
        let span = ctx.canvas.w() - 2.0 * TIMELINE_MARGIN;
        let axis_y = ctx.canvas.h() - 150.0;

        out.push(SceneNode::rect(
            "timeline/axis",
            Rect::new(
                TIMELINE_MARGIN,
                axis_y - 1.0,
                TIMELINE_MARGIN + span,
                axis_y + 1.0,
            ),
            0.0,
            Color::WHITE.with_alpha(0.2),
        ));

        for (i, point) in timeline_points(&s.events).iter().enumerate() {
            let p = ctx.stagger(i, 3).progress(&spring);
            let x = TIMELINE_MARGIN
                + timeline_position(point.time(), s.start_date, s.end_date, span);
            let anchor = Point::new(x, axis_y);
            let pop = scale_about(anchor, p);

            out.push(
                SceneNode::circle(
                    format!("timeline/marker/{i}"),
                    anchor,
                    6.0,
                    theme::event_color(point.kind),
                )
                .stroked(2.0, Color::WHITE.with_alpha(0.2))
                .transformed(pop)
                .faded(p),
            );

            let label_origin = Point::new(x, axis_y + 24.0);
            out.push(
                SceneNode::text(
                    format!("timeline/label/{i}"),
                    point.display_name,
                    label_origin,
                    0.8 * theme::REM,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .transformed(Affine::rotate_about(-FRAC_PI_4, label_origin))
                .transformed(pop)
                .faded(p),
            );
        }

        let ticks = time_markers(s.start_date, s.end_date, TIME_TICKS);
        for (i, t) in ticks.iter().enumerate() {
            let opacity = ctx.stagger(i, 3).spring(&spring, 0.0, 0.5);
            let x = TIMELINE_MARGIN + span * i as f64 / (TIME_TICKS - 1) as f64;
            out.push(
                SceneNode::text(
                    format!("timeline/tick/{i}"),
                    clock(*t),
                    Point::new(x, axis_y - 10.0),
                    0.8 * theme::REM,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .faded(opacity),
            );
        }
        Ok(())
    }
}

/// Particles travelling from contributor rows (left) to repository rows (right).
#[derive(Clone, Debug)]
pub struct ActivityFlowScene {
    summary: Arc<ActivitySummary>,
}

impl ActivityFlowScene {
    /// Flow over every event of the summary.
    pub fn new(summary: Arc<ActivitySummary>) -> Self {
        Self { summary }
    }
}

impl Scene for ActivityFlowScene {
    fn name(&self) -> &'static str {
        "activity_flow"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let travel = Spring::new(theme::ENTRANCE)?;
        let pop = Spring::new(theme::POP)?;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
        let label_size = theme::REM;

        let authors = unique_authors(&self.summary.events);
        let repos = unique_repositories(&self.summary.events);
        let row_y = |i: usize, n: usize| h * (i + 1) as f64 / (n + 1) as f64;

        for (i, author) in authors.iter().enumerate() {
            let author_y = row_y(i, authors.len());
            out.push(
                SceneNode::text(
                    format!("flow/author/{i}"),
                    *author,
                    Point::new(20.0, author_y - 10.0 + label_size),
                    label_size,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .faded(ctx.progress(&travel)),
            );

            for (e, event) in events_by_author(&self.summary.events, author)
                .iter()
                .enumerate()
            {
                let repo_index = repos
                    .iter()
                    .position(|r| *r == event.detail.repository)
                    .unwrap_or(0);
                let target_y = row_y(repo_index, repos.len());
                let item = ctx.stagger(e, 5);
                let progress = item.progress(&travel);

                let x = interpolate(
                    progress,
                    &[0.0, 1.0],
                    &[100.0, w - 100.0],
                    InterpolateOptions::default(),
                )?;
                let y = interpolate(
                    progress,
                    &[0.0, 1.0],
                    &[author_y, target_y],
                    InterpolateOptions::default(),
                )?;
                let center = Point::new(x + 4.0, y + 4.0);
                out.push(
                    SceneNode::circle(
                        format!("flow/particle/{i}/{e}"),
                        center,
                        4.0,
                        theme::event_color(event.kind),
                    )
                    .scaled_about(center, item.progress(&pop)),
                );
            }
        }

        for (i, repo) in repos.iter().enumerate() {
            let y = row_y(i, repos.len());
            out.push(
                SceneNode::text(
                    format!("flow/repo/{i}"),
                    repo_short_name(repo),
                    Point::new(w - 20.0, y - 10.0 + label_size),
                    label_size,
                    theme::TEXT,
                    TextAlign::Right,
                )
                .faded(ctx.stagger(i, 3).progress(&travel)),
            );
        }
        Ok(())
    }
}

/// Static per-type event counts pinned to the top-right corner.
#[derive(Clone, Debug)]
pub struct StatsOverlayScene {
    summary: Arc<ActivitySummary>,
}

impl StatsOverlayScene {
    /// Overlay listing every event group.
    pub fn new(summary: Arc<ActivitySummary>) -> Self {
        Self { summary }
    }
}

impl Scene for StatsOverlayScene {
    fn name(&self) -> &'static str {
        "stats_overlay"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        const PAD: f64 = 20.0;
        let heading = "Activity Summary";
        let heading_size = 1.2 * theme::REM;
        let row_size = 0.9 * theme::REM;
        let row_pitch = row_size * 1.2 + 5.0;

        let rows: Vec<(String, String)> = self
            .summary
            .events
            .values()
            .map(|g| (format!("{}:", g.display_name), g.details.len().to_string()))
            .collect();

        let content_w = rows
            .iter()
            .map(|(l, c)| text_width(l, row_size) + 20.0 + text_width(c, row_size))
            .fold(text_width(heading, heading_size), f64::max);
        let panel_w = content_w + 2.0 * PAD;
        let panel_h = 2.0 * PAD + heading_size * 1.2 + 10.0 + rows.len() as f64 * row_pitch;
        let right = ctx.canvas.w() - 20.0;
        let left = right - panel_w;
        let top = 20.0;

        out.push(
            SceneNode::rect(
                "stats/panel",
                Rect::new(left, top, right, top + panel_h),
                12.0,
                theme::BACKGROUND.with_alpha(0.8),
            )
            .stroked(1.0, Color::WHITE.with_alpha(0.1)),
        );
        out.push(SceneNode::text(
            "stats/heading",
            heading,
            Point::new(left + PAD, top + PAD + heading_size),
            heading_size,
            theme::ACCENT,
            TextAlign::Left,
        ));

        let mut y = top + PAD + heading_size * 1.2 + 10.0 + row_size;
        for (i, (label, count)) in rows.into_iter().enumerate() {
            out.push(SceneNode::text(
                format!("stats/row/{i}/label"),
                label,
                Point::new(left + PAD, y),
                row_size,
                theme::TEXT,
                TextAlign::Left,
            ));
            out.push(SceneNode::text(
                format!("stats/row/{i}/count"),
                count,
                Point::new(right - PAD, y),
                row_size,
                theme::ACCENT,
                TextAlign::Right,
            ));
            y += row_pitch;
        }
        Ok(())
    }
}

/// Organization header, per-type count cards and per-repository event lists.
#[derive(Clone, Debug)]
pub struct ActivityDetailScene {
    summary: Arc<ActivitySummary>,
}

impl ActivityDetailScene {
    /// Detailed summary of every event group.
    pub fn new(summary: Arc<ActivitySummary>) -> Self {
        Self { summary }
    }
}

const PAGE_PAD: f64 = 2.0 * theme::REM;
const CARD_H: f64 = 120.0;
const ROW_H: f64 = 44.0;
const ROW_GAP: f64 = 0.8 * theme::REM;

impl Scene for ActivityDetailScene {
    fn name(&self) -> &'static str {
        "activity_detail"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let spring = Spring::new(theme::ENTRANCE)?;
        let s = &self.summary;
        let header_opacity = ctx.progress(&spring);

        let heading_size = 2.5 * theme::REM;
        out.push(
            SceneNode::text(
                "detail/heading",
                format!("{} Activity Summary", s.org_name),
                Point::new(PAGE_PAD, PAGE_PAD + heading_size),
                heading_size,
                theme::ACCENT,
                TextAlign::Left,
            )
            .bold()
            .faded(header_opacity),
        );

        // Count cards.
        let cards_top = PAGE_PAD + heading_size * 1.2 + theme::REM;
        let mut x = PAGE_PAD;
        for (i, (kind, group)) in s.events.iter().enumerate() {
            let count = group.count.to_string();
            let color = theme::event_color(kind);
            let card_w = [
                text_width(&group.display_name, theme::REM),
                text_width(&count, 1.8 * theme::REM),
                2.0 * theme::REM,
            ]
            .into_iter()
            .fold(0.0, f64::max)
                + 2.0 * theme::REM;
            let rect = Rect::new(x, cards_top, x + card_w, cards_top + CARD_H);
            let pop = scale_about(rect.center(), ctx.stagger(i, 5).progress(&spring));
            let cx = rect.x0 + theme::REM;

            let nodes = [
                SceneNode::rect(
                    format!("detail/card/{i}"),
                    rect,
                    8.0,
                    Color::WHITE.with_alpha(0.1),
                ),
                SceneNode::text(
                    format!("detail/card/{i}/icon"),
                    theme::event_icon(kind),
                    Point::new(cx, rect.y0 + theme::REM + 2.0 * theme::REM),
                    2.0 * theme::REM,
                    color,
                    TextAlign::Left,
                ),
                SceneNode::text(
                    format!("detail/card/{i}/count"),
                    count,
                    Point::new(cx, rect.y0 + 84.0),
                    1.8 * theme::REM,
                    color,
                    TextAlign::Left,
                ),
                SceneNode::text(
                    format!("detail/card/{i}/name"),
                    group.display_name.as_str(),
                    Point::new(cx, rect.y1 - theme::REM),
                    theme::REM,
                    theme::MUTED,
                    TextAlign::Left,
                ),
            ];
            out.extend(
                nodes
                    .into_iter()
                    .map(|n| n.transformed(pop).faded(header_opacity)),
            );
            x = rect.x1 + 2.0 * theme::REM;
        }

        // Repository panels.
        let panel_w = ctx.canvas.w() - 2.0 * PAGE_PAD;
        let mut top = cards_top + CARD_H + 2.0 * theme::REM;
        for (r, (repo, events)) in events_by_repository(&s.events).iter().enumerate() {
            let panel_ctx = ctx.stagger(r, 5);
            let heading_h = 1.5 * theme::REM * 1.2 + theme::REM;
            let rows_h = events.len() as f64 * ROW_H
                + events.len().saturating_sub(1) as f64 * ROW_GAP;
            let rect = Rect::new(
                PAGE_PAD,
                top,
                PAGE_PAD + panel_w,
                top + 2.0 * 1.5 * theme::REM + heading_h + rows_h,
            );
            let pop = scale_about(rect.center(), panel_ctx.progress(&spring));
            let inner_x = rect.x0 + 1.5 * theme::REM;

            out.push(
                SceneNode::rect(
                    format!("detail/repo/{r}"),
                    rect,
                    12.0,
                    Color::WHITE.with_alpha(0.05),
                )
                .transformed(pop),
            );
            out.push(
                SceneNode::text(
                    format!("detail/repo/{r}/name"),
                    repo_short_name(repo),
                    Point::new(inner_x, rect.y0 + 1.5 * theme::REM + 1.5 * theme::REM),
                    1.5 * theme::REM,
                    theme::ACCENT,
                    TextAlign::Left,
                )
                .bold()
                .transformed(pop),
            );

            let mut row_top = rect.y0 + 1.5 * theme::REM + heading_h;
            for (e, event) in events.iter().enumerate() {
                let opacity = panel_ctx.delayed(3 * e as i64).progress(&spring);
                let color = theme::event_color(event.kind);
                let mut headline = event.display_name.to_owned();
                if let Some(title) = &event.detail.title {
                    headline.push_str(": ");
                    headline.push_str(title);
                }
                if let Some(commit) = event.detail.commits.first() {
                    headline.push_str(": ");
                    headline.push_str(&commit.message);
                }
                let byline = format!(
                    "by {} at {}",
                    event.detail.author,
                    event.detail.created_at.format("%-I:%M:%S %p")
                );
                let text_x = inner_x + 1.5 * theme::REM + theme::REM;

                let nodes = [
                    SceneNode::text(
                        format!("detail/repo/{r}/event/{e}/icon"),
                        theme::event_icon(event.kind),
                        Point::new(inner_x, row_top + 1.5 * theme::REM),
                        1.5 * theme::REM,
                        color,
                        TextAlign::Left,
                    ),
                    SceneNode::text(
                        format!("detail/repo/{r}/event/{e}/headline"),
                        headline,
                        Point::new(text_x, row_top + theme::REM),
                        theme::REM,
                        color,
                        TextAlign::Left,
                    ),
                    SceneNode::text(
                        format!("detail/repo/{r}/event/{e}/byline"),
                        byline,
                        Point::new(text_x, row_top + ROW_H - 4.0),
                        0.9 * theme::REM,
                        theme::MUTED,
                        TextAlign::Left,
                    ),
                ];
                out.extend(
                    nodes
                        .into_iter()
                        .map(|n| n.transformed(pop).faded(opacity)),
                );
                row_top += ROW_H + ROW_GAP;
            }

            top = rect.y1 + 1.5 * theme::REM;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/activity.rs"]
mod tests;
