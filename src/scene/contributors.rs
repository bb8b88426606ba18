//! Ranked contributor podium and the three contributor activity sections.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::sync::Arc;

use crate::animation::ops::pulse;
use crate::animation::spring::Spring;
use crate::data::aggregate::{
    contribution_level, podium_slot, sort_by_total_contributions, top_by_score,
};
use crate::data::model::{ActiveContributor, ContributorActivityReport, ContributorBoard};
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::ReelResult;
use crate::scene::layout::{capitalize, centered_row, text_width, thousands};
use crate::scene::{Scene, SceneCtx, SceneNode, Shape, Stroke, TextAlign, push_heading, theme};

/// Podium block heights for first, second and third place.
pub const PODIUM_HEIGHTS: [f64; 3] = [200.0, 150.0, 100.0];

const PODIUM_W: f64 = 120.0;
const AVATAR: f64 = 80.0;
const STREAK_PARTICLES: usize = 20;

fn line_height(size: f64) -> f64 {
    size * 1.2
}

/// Chart color for a contribution kind label.
pub fn kind_color(kind: &str) -> Color {
    match kind {
        "commits" => theme::GREEN,
        "reviews" => theme::LAVENDER,
        "issues" => theme::RED,
        _ => theme::ACCENT,
    }
}

/// Top three contributors on a growing podium, first place in the middle.
#[derive(Clone, Debug)]
pub struct PodiumScene {
    board: Arc<ContributorBoard>,
}

impl PodiumScene {
    /// Podium for the board's three best scores.
    pub fn new(board: Arc<ContributorBoard>) -> Self {
        Self { board }
    }
}

impl Scene for PodiumScene {
    fn name(&self) -> &'static str {
        "podium"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let fade = Spring::new(theme::FADE)?;
        let grow = Spring::new(theme::GROW)?;
        let (w, h) = (ctx.canvas.w(), ctx.canvas.h());

        push_heading(
            out,
            "podium",
            ctx.canvas,
            h * 0.05,
            &self.board.title,
            Some("Top Contributors"),
            ctx.progress(&fade),
        );

        let thirds = w / 3.0;
        let floor = h * 0.8;
        let podium = top_by_score(&self.board.contributors, 3);
        for (rank, contributor) in podium.into_iter().enumerate() {
            let slot = podium_slot(rank);
            let column = ctx.delayed(10 * slot as i64);
            let height = PODIUM_HEIGHTS[rank] * column.progress(&grow);
            let content = column.delayed(30).progress(&fade);
            let medal = theme::MEDALS[rank];
            let cx = slot as f64 * thirds + thirds / 2.0;
            let id = format!("podium/{rank}");

            let block = Rect::new(cx - PODIUM_W / 2.0, floor - height, cx + PODIUM_W / 2.0, floor);
            out.push(SceneNode::rect(format!("{id}/block"), block, 8.0, theme::RAISED));
            out.push(SceneNode::rect(format!("{id}/tint"), block, 8.0, medal.with_alpha_u8(0x20)));

            // Content stacks upward from the top of the block.
            let mut y = block.y0 - 20.0;
            let small = 0.9 * theme::REM;
            let mut labels = Vec::new();
            y -= line_height(small);
            labels.push(SceneNode::text(
                format!("{id}/score"),
                format!("{} points", contributor.total_score),
                Point::new(cx, y + small),
                small,
                medal,
                TextAlign::Center,
            ));
            y -= 5.0;
            for (c, contribution) in contributor.contributions.iter().enumerate().rev() {
                y -= line_height(small);
                labels.push(SceneNode::text(
                    format!("{id}/contribution/{c}"),
                    format!("{} {}", contribution.count, contribution.kind),
                    Point::new(cx, y + small),
                    small,
                    theme::MUTED,
                    TextAlign::Center,
                ));
            }
            y -= 10.0;
            let name_size = 1.2 * theme::REM;
            y -= line_height(name_size);
            labels.push(
                SceneNode::text(
                    format!("{id}/username"),
                    contributor.username.as_str(),
                    Point::new(cx, y + name_size),
                    name_size,
                    theme::TEXT,
                    TextAlign::Center,
                )
                .bold(),
            );
            y -= 20.0;

            let avatar = Rect::new(cx - AVATAR / 2.0, y - AVATAR, cx + AVATAR / 2.0, y);
            let badge = Point::new(avatar.x1 + 10.0 - 15.0, avatar.y1 + 10.0 - 15.0);
            let mut nodes = vec![
                SceneNode::new(
                    format!("{id}/avatar"),
                    Shape::Image {
                        source: contributor.avatar_url.clone(),
                        rect: avatar,
                        radius: AVATAR / 2.0,
                    },
                ),
                SceneNode::circle(
                    format!("{id}/avatar/border"),
                    avatar.center(),
                    AVATAR / 2.0,
                    medal.with_alpha_u8(0),
                )
                .stroked(4.0, medal),
                SceneNode::circle(format!("{id}/medal"), badge, 15.0, medal),
                SceneNode::text(
                    format!("{id}/medal/rank"),
                    (rank + 1).to_string(),
                    Point::new(badge.x, badge.y + 0.4 * theme::REM),
                    1.2 * theme::REM,
                    theme::BACKGROUND,
                    TextAlign::Center,
                )
                .bold(),
            ];
            nodes.extend(labels.into_iter().rev());
            out.extend(nodes.into_iter().map(|n| n.faded(content)));
        }
        Ok(())
    }
}

/// Report title that stays on screen across every contributor activity section.
#[derive(Clone, Debug)]
pub struct ContributorHeadingScene {
    report: Arc<ContributorActivityReport>,
}

impl ContributorHeadingScene {
    /// Heading for `report`.
    pub fn new(report: Arc<ContributorActivityReport>) -> Self {
        Self { report }
    }
}

impl Scene for ContributorHeadingScene {
    fn name(&self) -> &'static str {
        "contributor_heading"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let grow = Spring::new(theme::GROW)?;
        push_heading(
            out,
            "activity",
            ctx.canvas,
            ctx.canvas.h() * 0.05,
            &self.report.title,
            None,
            ctx.progress(&grow),
        );
        Ok(())
    }
}

fn section_heading(
    out: &mut Vec<SceneNode>,
    id: &str,
    text: &str,
    ctx: &SceneCtx,
    top: f64,
) -> f64 {
    let size = 1.5 * theme::REM;
    out.push(
        SceneNode::text(
            id,
            text,
            Point::new(ctx.canvas.w() / 2.0, top + size),
            size,
            theme::TEXT,
            TextAlign::Center,
        )
        .bold(),
    );
    top + line_height(size)
}

/// Card width for the activity sections, limited to `max`.
fn card_width(ctx: &SceneCtx, max: f64) -> f64 {
    (ctx.canvas.w() * 0.8).min(max)
}

/// Contributor cards with a streak halo, recent-day heat cells and a lifetime total.
#[derive(Clone, Debug)]
pub struct ContributorOverviewScene {
    report: Arc<ContributorActivityReport>,
}

impl ContributorOverviewScene {
    /// Overview cards for every contributor, most active first.
    pub fn new(report: Arc<ContributorActivityReport>) -> Self {
        Self { report }
    }
}

const OVERVIEW_PAD: f64 = 24.0;
const CELL: f64 = 30.0;
const TOTAL_BOX_W: f64 = 140.0;

/// Springs and pulse shared by every overview card at one frame.
struct CardMotion {
    orbit: Spring,
    grow: Spring,
    glow: f64,
}

impl ContributorOverviewScene {
    fn card(
        ctx: &SceneCtx,
        motion: &CardMotion,
        i: usize,
        contributor: &ActiveContributor,
        rect: Rect,
    ) -> Vec<SceneNode> {
        let id = format!("overview/{i}");
        let item = ctx.stagger(i, 5);
        let mut nodes = vec![SceneNode::rect(id.clone(), rect, 12.0, theme::RAISED)];

        let avatar = Rect::new(
            rect.x0 + OVERVIEW_PAD,
            rect.y0 + OVERVIEW_PAD,
            rect.x0 + OVERVIEW_PAD + AVATAR,
            rect.y0 + OVERVIEW_PAD + AVATAR,
        );
        let center = avatar.center();
        nodes.push(SceneNode::new(
            format!("{id}/avatar"),
            Shape::Image {
                source: contributor.avatar_url.clone(),
                rect: avatar,
                radius: AVATAR / 2.0,
            },
        ));
        nodes.push(
            SceneNode::circle(
                format!("{id}/avatar/border"),
                center,
                AVATAR / 2.0,
                theme::ACCENT.with_alpha_u8(0),
            )
            .stroked(3.0, theme::ACCENT),
        );

        // Halo radius grows with the streak; particles share one pulsing opacity.
        let halo = 40.0 + 2.0 * contributor.streak as f64;
        for k in 0..STREAK_PARTICLES {
            let angle = k as f64 / STREAK_PARTICLES as f64 * TAU;
            let radius = ctx.stagger(k, 2).spring(&motion.orbit, 0.0, halo);
            let p = Point::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius);
            nodes.push(
                SceneNode::circle(format!("{id}/particle/{k}"), p, 2.0, theme::ACCENT)
                    .faded(motion.glow),
            );
        }

        let info_x = avatar.x1 + 32.0;
        let name_size = 1.5 * theme::REM;
        nodes.push(
            SceneNode::text(
                format!("{id}/username"),
                contributor.username.as_str(),
                Point::new(info_x, rect.y0 + OVERVIEW_PAD + name_size),
                name_size,
                theme::TEXT,
                TextAlign::Left,
            )
            .bold(),
        );

        let total_box = Rect::new(
            rect.x1 - OVERVIEW_PAD - TOTAL_BOX_W,
            rect.y0 + OVERVIEW_PAD,
            rect.x1 - OVERVIEW_PAD,
            rect.y0 + OVERVIEW_PAD + AVATAR,
        );
        nodes.push(
            SceneNode::text(
                format!("{id}/streak"),
                format!("{} day streak 🔥", contributor.streak),
                Point::new(total_box.x0 - 32.0, rect.y0 + OVERVIEW_PAD + name_size),
                theme::REM,
                theme::ACCENT,
                TextAlign::Right,
            )
            .bold(),
        );

        let cell_top = rect.y0 + OVERVIEW_PAD + line_height(name_size) + theme::REM;
        let cell_size = 0.8 * theme::REM;
        for (k, day) in contributor.recent_contributions.iter().enumerate() {
            let x = info_x + k as f64 * (CELL + 8.0);
            let cell = Rect::new(x, cell_top, x + CELL, cell_top + CELL);
            let scale = item.stagger(k, 2).progress(&motion.grow);
            let fill = theme::HEAT[usize::from(contribution_level(day.count))];
            nodes.push(
                SceneNode::rect(format!("{id}/cell/{k}"), cell, 4.0, fill)
                    .scaled_about(cell.center(), scale),
            );
            nodes.push(
                SceneNode::text(
                    format!("{id}/cell/{k}/count"),
                    day.count.to_string(),
                    Point::new(cell.center().x, cell.center().y + cell_size * 0.35),
                    cell_size,
                    theme::TEXT,
                    TextAlign::Center,
                )
                .scaled_about(cell.center(), scale),
            );
        }

        let total_center = total_box.center();
        nodes.push(SceneNode::rect(format!("{id}/total"), total_box, 8.0, theme::ACCENT));
        nodes.push(
            SceneNode::text(
                format!("{id}/total/count"),
                contributor.total_contributions.to_string(),
                Point::new(total_center.x, total_center.y + 4.0),
                2.0 * theme::REM,
                theme::TEXT,
                TextAlign::Center,
            )
            .bold(),
        );
        nodes.push(SceneNode::text(
            format!("{id}/total/label"),
            "contributions",
            Point::new(total_center.x, total_center.y + 4.0 + line_height(0.9 * theme::REM)),
            0.9 * theme::REM,
            theme::TEXT,
            TextAlign::Center,
        ));
        nodes
    }
}

impl Scene for ContributorOverviewScene {
    fn name(&self) -> &'static str {
        "contributor_overview"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let motion = CardMotion {
            orbit: Spring::new(theme::ORBIT)?,
            grow: Spring::new(theme::GROW)?,
            glow: pulse(ctx.frame, 60, 0.8, 0.3)?,
        };
        let slide = Spring::new(theme::SLIDE)?;

        let card_w = card_width(ctx, 1000.0);
        let card_h = 2.0 * OVERVIEW_PAD + AVATAR;
        let left = (ctx.canvas.w() - card_w) / 2.0;
        let mut top = ctx.canvas.h() * 0.2;

        let contributors = sort_by_total_contributions(&self.report.contributors);
        for (i, contributor) in contributors.into_iter().enumerate() {
            let dx = ctx.stagger(i, 5).spring(&slide, -1.0, 0.0) * card_w;
            let rect = Rect::new(left, top, left + card_w, top + card_h);
            let nodes = Self::card(ctx, &motion, i, contributor, rect);
            out.extend(nodes.into_iter().map(|n| n.translated(dx, 0.0)));
            top += card_h + 2.0 * theme::REM;
        }
        Ok(())
    }
}

const DONUT_BOX: f64 = 200.0;
const DONUT_R: f64 = 80.0;
const DONUT_STROKE: f64 = 20.0;

/// Per-contributor donut chart of contributions by kind, with a legend.
#[derive(Clone, Debug)]
pub struct ContributionBreakdownScene {
    report: Arc<ContributorActivityReport>,
}

impl ContributionBreakdownScene {
    /// Breakdown cards for every contributor, most active first.
    pub fn new(report: Arc<ContributorActivityReport>) -> Self {
        Self { report }
    }
}

impl Scene for ContributionBreakdownScene {
    fn name(&self) -> &'static str {
        "contribution_breakdown"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let grow = Spring::new(theme::GROW)?;
        let slide = Spring::new(theme::SLIDE)?;

        let heading_top = ctx.canvas.h() * 0.15;
        let mut top = section_heading(
            out,
            "breakdown/heading",
            "Contribution Breakdown",
            ctx,
            heading_top,
        );
        top += 2.0 * theme::REM;

        let card_w = card_width(ctx, 800.0);
        let left = (ctx.canvas.w() - card_w) / 2.0;
        let name_size = 1.17 * theme::REM;
        let card_h = 2.0 * OVERVIEW_PAD + line_height(name_size) + theme::REM + DONUT_BOX;

        let contributors = sort_by_total_contributions(&self.report.contributors);
        for (i, contributor) in contributors.into_iter().enumerate() {
            let item = ctx.stagger(i, 5);
            let dx = item.spring(&slide, -1.0, 0.0) * card_w;
            let id = format!("breakdown/{i}");
            let inner = left + OVERVIEW_PAD;
            let mut nodes = vec![
                SceneNode::rect(
                    id.clone(),
                    Rect::new(left, top, left + card_w, top + card_h),
                    12.0,
                    theme::RAISED,
                ),
                SceneNode::text(
                    format!("{id}/username"),
                    contributor.username.as_str(),
                    Point::new(inner, top + OVERVIEW_PAD + name_size),
                    name_size,
                    theme::TEXT,
                    TextAlign::Left,
                )
                .bold(),
            ];

            let chart_top = top + OVERVIEW_PAD + line_height(name_size) + theme::REM;
            let center = Point::new(inner + DONUT_BOX / 2.0, chart_top + DONUT_BOX / 2.0);
            let by_type = contributor.contributions_by_type;
            let total = by_type.sum();
            let mut offset = 0.0;
            for (j, (kind, count)) in by_type.entries().into_iter().enumerate() {
                let pct = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                let shown = ctx.stagger(j, 5).spring(&grow, 0.0, pct);
                nodes.push(SceneNode::new(
                    format!("{id}/segment/{j}"),
                    Shape::Arc {
                        center,
                        radius: DONUT_R,
                        start_angle: -FRAC_PI_2 + (offset * 3.6_f64).to_radians(),
                        sweep_angle: (shown * 3.6_f64).to_radians(),
                        stroke: Stroke {
                            width: DONUT_STROKE,
                            color: kind_color(kind),
                        },
                    },
                ));
                offset += pct;
            }
            nodes.push(
                SceneNode::text(
                    format!("{id}/total"),
                    total.to_string(),
                    Point::new(center.x, center.y + 4.0),
                    2.0 * theme::REM,
                    theme::TEXT,
                    TextAlign::Center,
                )
                .bold(),
            );
            nodes.push(SceneNode::text(
                format!("{id}/total/label"),
                "total",
                Point::new(center.x, center.y + 4.0 + line_height(0.9 * theme::REM)),
                0.9 * theme::REM,
                theme::TEXT,
                TextAlign::Center,
            ));

            let legend_x = left + card_w / 2.0 + OVERVIEW_PAD;
            let row_size = 1.1 * theme::REM;
            for (j, (kind, count)) in by_type.entries().into_iter().enumerate() {
                let row_top = chart_top + j as f64 * (line_height(row_size) + 0.8 * theme::REM);
                let opacity = item.stagger(j, 3).progress(&grow);
                let mid = row_top + line_height(row_size) / 2.0;
                nodes.push(
                    SceneNode::circle(
                        format!("{id}/legend/{j}/dot"),
                        Point::new(legend_x + 6.0, mid),
                        6.0,
                        kind_color(kind),
                    )
                    .faded(opacity),
                );
                nodes.push(
                    SceneNode::text(
                        format!("{id}/legend/{j}/text"),
                        format!("{}: {count}", capitalize(kind)),
                        Point::new(legend_x + 12.0 + theme::REM, row_top + row_size),
                        row_size,
                        theme::TEXT,
                        TextAlign::Left,
                    )
                    .faded(opacity),
                );
            }

            out.extend(nodes.into_iter().map(|n| n.translated(dx, 0.0)));
            top += card_h + 2.0 * theme::REM;
        }
        Ok(())
    }
}

/// Per-contributor impact figures as popping metric cards.
#[derive(Clone, Debug)]
pub struct ImpactMetricsScene {
    report: Arc<ContributorActivityReport>,
}

impl ImpactMetricsScene {
    /// Metric cards for every contributor, most active first.
    pub fn new(report: Arc<ContributorActivityReport>) -> Self {
        Self { report }
    }
}

/// `(label, value, color)` for each impact card.
fn impact_cards(contributor: &ActiveContributor) -> [(&'static str, String, Color); 4] {
    let m = &contributor.impact_metrics;
    [
        ("Lines Changed", thousands(m.total_lines_changed), kind_color("commits")),
        ("Files Modified", thousands(m.files_modified), kind_color("pullRequests")),
        ("Avg Review Comments", format!("{:.1}", m.avg_review_comments), kind_color("reviews")),
        ("Merge Rate", format!("{:.1}%", m.merge_rate * 100.0), kind_color("issues")),
    ]
}

impl Scene for ImpactMetricsScene {
    fn name(&self) -> &'static str {
        "impact_metrics"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let grow = Spring::new(theme::GROW)?;
        let slide = Spring::new(theme::SLIDE)?;

        let heading_top = ctx.canvas.h() * 0.2;
        let mut top = section_heading(out, "impact/heading", "Impact Metrics", ctx, heading_top);
        top += 3.0 * theme::REM;

        let card_w = card_width(ctx, 800.0);
        let left = (ctx.canvas.w() - card_w) / 2.0;
        let name_size = 1.17 * theme::REM;
        let (value_size, label_size) = (1.5 * theme::REM, 0.9 * theme::REM);
        let box_h = 2.0 * theme::REM + line_height(value_size) + line_height(label_size);
        let pad = 2.0 * theme::REM;
        let card_h = 2.0 * pad + line_height(name_size) + 1.5 * theme::REM + box_h;

        let contributors = sort_by_total_contributions(&self.report.contributors);
        for (i, contributor) in contributors.into_iter().enumerate() {
            let dx = ctx.stagger(i, 5).spring(&slide, -1.0, 0.0) * card_w;
            let id = format!("impact/{i}");
            let cx = left + card_w / 2.0;
            let mut nodes = vec![
                SceneNode::rect(
                    id.clone(),
                    Rect::new(left, top, left + card_w, top + card_h),
                    12.0,
                    theme::RAISED,
                ),
                SceneNode::text(
                    format!("{id}/username"),
                    contributor.username.as_str(),
                    Point::new(cx, top + pad + name_size),
                    name_size,
                    theme::TEXT,
                    TextAlign::Center,
                )
                .bold(),
            ];

            let cards = impact_cards(contributor);
            let widths: Vec<f64> = cards
                .iter()
                .map(|(label, value, _)| {
                    let text = text_width(value, value_size).max(text_width(label, label_size));
                    text + 2.0 * theme::REM
                })
                .collect();
            let box_top = top + pad + line_height(name_size) + 1.5 * theme::REM;
            let lefts = centered_row(&widths, theme::REM, cx);
            let slots = lefts.into_iter().zip(widths);
            for (k, ((label, value, color), (x, bw))) in cards.into_iter().zip(slots).enumerate() {
                let rect = Rect::new(x, box_top, x + bw, box_top + box_h);
                let scale = ctx.stagger(k, 5).progress(&grow);
                let mid = rect.center().x;
                let card = [
                    SceneNode::rect(format!("{id}/metric/{k}"), rect, 8.0, theme::RAISED)
                        .stroked(2.0, color),
                    SceneNode::text(
                        format!("{id}/metric/{k}/value"),
                        value,
                        Point::new(mid, rect.y0 + theme::REM + value_size),
                        value_size,
                        color,
                        TextAlign::Center,
                    )
                    .bold(),
                    SceneNode::text(
                        format!("{id}/metric/{k}/label"),
                        label,
                        Point::new(
                            mid,
                            rect.y0 + theme::REM + line_height(value_size) + label_size,
                        ),
                        label_size,
                        theme::TEXT,
                        TextAlign::Center,
                    ),
                ];
                nodes.extend(card.into_iter().map(|n| n.scaled_about(rect.center(), scale)));
            }

            out.extend(nodes.into_iter().map(|n| n.translated(dx, 0.0)));
            top += card_h + 3.0 * theme::REM;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/contributors.rs"]
mod tests;
