//! Palette, type scale and spring presets shared by every scene.

use crate::animation::spring::SpringConfig;
use crate::foundation::color::Color;

/// Canvas clear color (GitHub dark).
pub const BACKGROUND: Color = Color::hex(0x0D1117);
/// Card surface.
pub const SURFACE: Color = Color::hex(0x161B22);
/// Raised surface and bar tracks.
pub const RAISED: Color = Color::hex(0x30363D);
/// Primary text.
pub const TEXT: Color = Color::WHITE;
/// Secondary text.
pub const MUTED: Color = Color::hex(0x8B949E);
/// Secondary text in static summaries.
pub const SLATE: Color = Color::hex(0x94A3B8);
/// Links and headings.
pub const ACCENT: Color = Color::hex(0x58A6FF);
/// Additions, closed items, success.
pub const GREEN: Color = Color::hex(0x2EA043);
/// Deletions, open items, failures.
pub const RED: Color = Color::hex(0xF85149);
/// Medium priority.
pub const YELLOW: Color = Color::hex(0xF7C847);
/// Open pull requests and features.
pub const PR_OPEN: Color = Color::hex(0x238636);
/// Merged pull requests.
pub const PURPLE: Color = Color::hex(0x8957E5);
/// Reviews.
pub const LAVENDER: Color = Color::hex(0xA371F7);
/// Gold, silver and bronze medals.
pub const MEDALS: [Color; 3] = [
    Color::hex(0xFFD700),
    Color::hex(0xC0C0C0),
    Color::hex(0xCD7F32),
];
/// Contribution heat levels 0..=4.
pub const HEAT: [Color; 5] = [
    Color::hex(0x161B22),
    Color::hex(0x0E4429),
    Color::hex(0x006D32),
    Color::hex(0x26A641),
    Color::hex(0x39D353),
];

/// Root font size; `rem` values in layouts are multiples of this.
pub const REM: f64 = 16.0;

/// Color for a GitHub event type.
pub fn event_color(kind: &str) -> Color {
    match kind {
        "PushEvent" => GREEN,
        "PullRequestEvent" => Color::hex(0xDB61A2),
        "IssuesEvent" => Color::hex(0xF78166),
        "IssueCommentEvent" => PURPLE,
        "CreateEvent" => Color::hex(0x3FB950),
        "DeleteEvent" => RED,
        _ => ACCENT,
    }
}

/// Short glyph label for a GitHub event type.
pub fn event_icon(kind: &str) -> &'static str {
    match kind {
        "PushEvent" => "🔄",
        "PullRequestEvent" => "🔀",
        "IssuesEvent" => "⚠️",
        "IssueCommentEvent" => "💬",
        "CreateEvent" => "✨",
        "DeleteEvent" => "🗑️",
        _ => "📊",
    }
}

/// Light, lively entrance used for titles and metric cards.
pub const SNAPPY: SpringConfig = SpringConfig::damped(0.5, 10.0);
/// Default entrance for markers, panels and rows.
pub const ENTRANCE: SpringConfig = SpringConfig::damped(0.5, 12.0);
/// Very light spring for particle pops.
pub const POP: SpringConfig = SpringConfig::damped(0.3, 8.0);
/// Particle ring expansion.
pub const ORBIT: SpringConfig = SpringConfig::damped(0.5, 15.0);
/// Particle ring rotation.
pub const SWIRL: SpringConfig = SpringConfig::damped(0.3, 12.0);
/// Unit-mass fade.
pub const FADE: SpringConfig = SpringConfig::with_damping(10.0);
/// Unit-mass grow.
pub const GROW: SpringConfig = SpringConfig::with_damping(12.0);
/// Unit-mass slide, barely overshooting.
pub const SLIDE: SpringConfig = SpringConfig::with_damping(15.0);
