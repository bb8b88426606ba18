//! Issue and pull request scenes.

use std::f64::consts::TAU;
use std::sync::Arc;

use crate::animation::ops::pulse;
use crate::animation::spring::Spring;
use crate::data::aggregate::pull_requests_by_state;
use crate::data::model::{
    IssueList, PrState, Priority, PullRequestList, StatusCounts, StatusSnapshot,
};
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::ReelResult;
use crate::scene::layout::{capitalize, centered_row, short_timestamp, text_width};
use crate::scene::node::scale_about;
use crate::scene::{Scene, SceneCtx, SceneNode, TextAlign, push_heading, theme};

/// Open/closed proportion bars for issues and pull requests.
#[derive(Clone, Debug)]
pub struct StatusBarsScene {
    snapshot: Arc<StatusSnapshot>,
}

impl StatusBarsScene {
    /// Bars for the snapshot's two tallies.
    pub fn new(snapshot: Arc<StatusSnapshot>) -> Self {
        Self { snapshot }
    }
}

const BAR_H: f64 = 40.0;

fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl Scene for StatusBarsScene {
    fn name(&self) -> &'static str {
        "status_bars"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let fade = Spring::new(theme::FADE)?;
        let slide = Spring::new(theme::SLIDE)?;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());

        push_heading(
            out,
            "status",
            ctx.canvas,
            h * 0.1,
            &self.snapshot.org_name,
            Some("Issues & Pull Requests Status"),
            ctx.progress(&fade),
        );

        let grow = ctx.delayed(30).progress(&slide);
        let stats_opacity = ctx.delayed(60).progress(&fade);

        let max_bar = w * 0.6;
        let left = (w - (max_bar + 200.0)) / 2.0;
        let label_size = 1.17 * theme::REM;
        let section_h = label_size * 1.2 + 20.0 + BAR_H;
        let mut top = h / 2.0 - (2.0 * section_h + 60.0) / 2.0;

        let sections: [(&str, &str, StatusCounts); 2] = [
            ("issues", "Issues", self.snapshot.issues),
            ("pull_requests", "Pull Requests", self.snapshot.pull_requests),
        ];
        for (key, label, counts) in sections {
            out.push(
                SceneNode::text(
                    format!("status/{key}/label"),
                    label,
                    Point::new(left, top + label_size),
                    label_size,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .bold(),
            );

            let bar_top = top + label_size * 1.2 + 20.0;
            let open_w = share(counts.open, counts.total) * max_bar * grow;
            let closed_w = share(counts.closed, counts.total) * max_bar * grow;
            out.push(SceneNode::rect(
                format!("status/{key}/open"),
                Rect::new(left, bar_top, left + open_w, bar_top + BAR_H),
                4.0,
                theme::RED,
            ));
            out.push(SceneNode::rect(
                format!("status/{key}/closed"),
                Rect::new(left + open_w, bar_top, left + open_w + closed_w, bar_top + BAR_H),
                4.0,
                theme::GREEN,
            ));

            let baseline = bar_top + BAR_H / 2.0 + 0.35 * theme::REM;
            let open_text = format!("{} Open", counts.open);
            let stats_x = left + open_w + closed_w + 20.0;
            let closed_x = stats_x + text_width(&open_text, theme::REM) + 20.0;
            out.push(
                SceneNode::text(
                    format!("status/{key}/open_count"),
                    open_text,
                    Point::new(stats_x, baseline),
                    theme::REM,
                    theme::RED,
                    TextAlign::Left,
                )
                .faded(stats_opacity),
            );
            out.push(
                SceneNode::text(
                    format!("status/{key}/closed_count"),
                    format!("{} Closed", counts.closed),
                    Point::new(closed_x, baseline),
                    theme::REM,
                    theme::GREEN,
                    TextAlign::Left,
                )
                .faded(stats_opacity),
            );

            top += section_h + 60.0;
        }
        Ok(())
    }
}

fn priority_color(p: Priority) -> Color {
    match p {
        Priority::High => theme::RED,
        Priority::Medium => theme::YELLOW,
        Priority::Low => theme::GREEN,
    }
}

fn priority_label(p: Priority) -> &'static str {
    match p {
        Priority::High => "HIGH PRIORITY",
        Priority::Medium => "MEDIUM PRIORITY",
        Priority::Low => "LOW PRIORITY",
    }
}

const ISSUE_CARD_H: f64 = 118.0;
const ISSUE_CARD_GAP: f64 = 16.0;

/// Issue cards sliding in from the left, one after another.
#[derive(Clone, Debug)]
pub struct IssueListScene {
    list: Arc<IssueList>,
}

impl IssueListScene {
    /// Cards for every issue, in list order.
    pub fn new(list: Arc<IssueList>) -> Self {
        Self { list }
    }
}

impl Scene for IssueListScene {
    fn name(&self) -> &'static str {
        "issue_list"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let fade = Spring::new(theme::FADE)?;
        let grow = Spring::new(theme::GROW)?;
        let slide = Spring::new(theme::SLIDE)?;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());

        push_heading(
            out,
            "issues",
            ctx.canvas,
            h * 0.05,
            &self.list.title,
            Some("New Issues"),
            ctx.progress(&fade),
        );

        let card_w = (w * 0.8).min(1200.0);
        let left = (w - card_w) / 2.0;
        let right = left + card_w;
        let mut top = h * 0.2;

        for (i, issue) in self.list.issues.iter().enumerate() {
            let item = ctx.stagger(i, 5);
            let dx = item.spring(&slide, -1.0, 0.0) * card_w;
            let opacity = item.progress(&grow);
            let id = format!("issues/card/{i}");
            let inner = left + 20.0;
            let color = priority_color(issue.priority);

            let badge_size = 0.8 * theme::REM;
            let badge_text = priority_label(issue.priority);
            let badge_w = text_width(badge_text, badge_size) + 16.0;
            let badge = Rect::new(
                right - 20.0 - badge_w,
                top + 20.0,
                right - 20.0,
                top + 20.0 + badge_size * 1.2 + 8.0,
            );

            let mut nodes = vec![
                SceneNode::rect(
                    id.clone(),
                    Rect::new(left, top, right, top + ISSUE_CARD_H),
                    8.0,
                    theme::SURFACE,
                )
                    .stroked(1.0, theme::RAISED),
                SceneNode::text(
                    format!("{id}/title"),
                    issue.title.as_str(),
                    Point::new(inner, top + 20.0 + 1.2 * theme::REM),
                    1.2 * theme::REM,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .bold(),
                SceneNode::text(
                    format!("{id}/repository"),
                    issue.repository.as_str(),
                    Point::new(inner, top + 20.0 + 1.2 * theme::REM * 1.2 + 4.0 + 0.9 * theme::REM),
                    0.9 * theme::REM,
                    theme::MUTED,
                    TextAlign::Left,
                ),
                SceneNode::rect(format!("{id}/priority"), badge, 4.0, color.with_alpha_u8(0x20)),
                SceneNode::text(
                    format!("{id}/priority/label"),
                    badge_text,
                    Point::new(badge.x0 + 8.0, badge.y0 + 4.0 + badge_size),
                    badge_size,
                    color,
                    TextAlign::Left,
                )
                .bold(),
            ];

            let chip_size = 0.8 * theme::REM;
            let chip_top = top + ISSUE_CARD_H - 20.0 - (chip_size * 1.2 + 4.0);
            let mut chip_x = inner;
            for (l, label) in issue.labels.iter().enumerate() {
                let chip_w = text_width(label, chip_size) + 16.0;
                let chip_bottom = chip_top + chip_size * 1.2 + 4.0;
                let chip = Rect::new(chip_x, chip_top, chip_x + chip_w, chip_bottom);
                nodes.push(SceneNode::rect(format!("{id}/label/{l}"), chip, 12.0, theme::RAISED));
                nodes.push(SceneNode::text(
                    format!("{id}/label/{l}/text"),
                    label.as_str(),
                    Point::new(chip.x0 + 8.0, chip.y0 + 2.0 + chip_size),
                    chip_size,
                    theme::MUTED,
                    TextAlign::Left,
                ));
                chip_x = chip.x1 + 8.0;
            }
            nodes.push(SceneNode::text(
                format!("{id}/byline"),
                format!("by {} • {}", issue.author, short_timestamp(issue.created_at)),
                Point::new(right - 20.0, chip_top + 2.0 + chip_size),
                0.9 * theme::REM,
                theme::MUTED,
                TextAlign::Right,
            ));

            out.extend(nodes.into_iter().map(|n| n.translated(dx, 0.0).faded(opacity)));
            top += ISSUE_CARD_H + ISSUE_CARD_GAP;
        }
        Ok(())
    }
}

const RING_PARTICLES: usize = 30;
const PULSE_PERIOD: i64 = 60;

fn state_color(state: PrState) -> Color {
    match state {
        PrState::Open => theme::PR_OPEN,
        PrState::Closed => theme::RED,
        PrState::Merged => theme::PURPLE,
    }
}

fn ring_radius(state: PrState) -> f64 {
    match state {
        PrState::Open => 150.0,
        PrState::Closed => 200.0,
        PrState::Merged => 250.0,
    }
}

/// Concentric particle rings per pull request state, state badges and the first three PR cards.
#[derive(Clone, Debug)]
pub struct PullRequestFlowScene {
    list: Arc<PullRequestList>,
}

impl PullRequestFlowScene {
    /// Flow over every pull request.
    pub fn new(list: Arc<PullRequestList>) -> Self {
        Self { list }
    }
}

impl Scene for PullRequestFlowScene {
    fn name(&self) -> &'static str {
        "pull_request_flow"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let grow = Spring::new(theme::GROW)?;
        let orbit = Spring::new(theme::ORBIT)?;
        let swirl = Spring::new(theme::SWIRL)?;
        let slide = Spring::new(theme::SLIDE)?;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
        let center = ctx.canvas.center();
        let intro = ctx.progress(&grow);

        push_heading(out, "prs", ctx.canvas, h * 0.05, &self.list.title, None, intro);

        let groups = pull_requests_by_state(&self.list.pull_requests);
        let particle_opacity = pulse(ctx.frame, PULSE_PERIOD, 0.8, 0.3)?;

        for (state, _) in &groups {
            let color = state_color(*state);
            let base = ring_radius(*state);
            for i in 0..RING_PARTICLES {
                let item = ctx.stagger(i, 2);
                let radius = item.spring(&orbit, 0.0, base);
                let angle = item.spring(&swirl, 0.0, i as f64 / RING_PARTICLES as f64 * TAU);
                out.push(
                    SceneNode::circle(
                        format!("prs/{}/particle/{i}", state.as_str()),
                        center + Vec2::new(angle.cos(), angle.sin()) * radius,
                        4.0,
                        color,
                    )
                    .faded(particle_opacity),
                );
            }
        }

        // State badges sit side by side over the rings.
        let badge_r = 60.0;
        let lefts = centered_row(&vec![2.0 * badge_r; groups.len()], 20.0, center.x);
        for ((state, prs), left) in groups.iter().zip(lefts) {
            let c = Point::new(left + badge_r, center.y);
            let pop = scale_about(c, intro);
            let nodes = [
                SceneNode::circle(
                    format!("prs/{}/badge", state.as_str()),
                    c,
                    badge_r,
                    state_color(*state),
                ),
                SceneNode::text(
                    format!("prs/{}/badge/count", state.as_str()),
                    prs.len().to_string(),
                    Point::new(c.x, c.y),
                    2.0 * theme::REM,
                    theme::TEXT,
                    TextAlign::Center,
                )
                .bold(),
                SceneNode::text(
                    format!("prs/{}/badge/label", state.as_str()),
                    capitalize(state.as_str()),
                    Point::new(c.x, c.y + 1.2 * theme::REM * 1.4),
                    1.2 * theme::REM,
                    theme::TEXT,
                    TextAlign::Center,
                ),
            ];
            out.extend(nodes.into_iter().map(|n| n.transformed(pop).faded(intro)));
        }

        let card_w = 300.0;
        let card_h = 75.0;
        let shown = self.list.pull_requests.iter().take(3).collect::<Vec<_>>();
        let lefts = centered_row(&vec![card_w; shown.len()], 20.0, w / 2.0);
        let bottom = h * 0.95;
        for (i, (pr, left)) in shown.iter().zip(lefts).enumerate() {
            let dx = ctx.stagger(i, 5).spring(&slide, -1.0, 0.0) * card_w;
            let rect = Rect::new(left, bottom - card_h, left + card_w, bottom);
            let nodes = [
                SceneNode::rect(format!("prs/card/{i}"), rect, 8.0, theme::SURFACE)
                    .stroked(1.0, theme::RAISED),
                SceneNode::text(
                    format!("prs/card/{i}/title"),
                    pr.title.as_str(),
                    Point::new(rect.x0 + 15.0, rect.y0 + 15.0 + 1.1 * theme::REM),
                    1.1 * theme::REM,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .bold(),
                SceneNode::text(
                    format!("prs/card/{i}/meta"),
                    format!("{} • {}", pr.repository, pr.author),
                    Point::new(rect.x0 + 15.0, rect.y1 - 15.0),
                    0.9 * theme::REM,
                    theme::MUTED,
                    TextAlign::Left,
                ),
            ];
            out.extend(nodes.into_iter().map(|n| n.translated(dx, 0.0)));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/issues.rs"]
mod tests;
