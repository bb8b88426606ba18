use crate::animation::spring::Spring;
use crate::foundation::core::Point;
use crate::foundation::error::ReelResult;
use crate::scene::layout::{centered_row, text_width};
use crate::scene::{Scene, SceneCtx, SceneNode, TextAlign, theme};

const WORD_STEP: i64 = 5;

/// Word-by-word title reveal with an optional subtitle.
///
/// Each word fades in while dropping from 50px above its rest position; subtitle words rise
/// 30px and start after every title word has started.
#[derive(Clone, Debug)]
pub struct TitleScene {
    title: String,
    subtitle: Option<String>,
}

impl TitleScene {
    /// Title card; an empty subtitle is treated as none.
    pub fn new(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.filter(|s| !s.trim().is_empty()),
        }
    }
}

struct WordLine<'a> {
    id: &'a str,
    words: Vec<&'a str>,
    size: f64,
    gap: f64,
    baseline: f64,
    rise_from: f64,
    first_index: usize,
}

impl Scene for TitleScene {
    fn name(&self) -> &'static str {
        "title"
    }

    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()> {
        let spring = Spring::new(theme::SNAPPY)?;
        let center = ctx.canvas.center();

        let title_size = 4.0 * theme::REM;
        let sub_size = 2.0 * theme::REM;
        let title_words: Vec<&str> = self.title.split_whitespace().collect();

        let (title_baseline, sub_baseline) = if self.subtitle.is_some() {
            let block = title_size * 1.2 + 2.0 * theme::REM + sub_size * 1.2;
            let top = center.y - block / 2.0;
            (
                top + title_size,
                top + title_size * 1.2 + 2.0 * theme::REM + sub_size,
            )
        } else {
            (center.y + title_size * 0.35, 0.0)
        };

        let mut lines = vec![WordLine {
            id: "word",
            words: title_words.clone(),
            size: title_size,
            gap: 20.0,
            baseline: title_baseline,
            rise_from: -50.0,
            first_index: 0,
        }];
        if let Some(subtitle) = &self.subtitle {
            lines.push(WordLine {
                id: "subword",
                words: subtitle.split_whitespace().collect(),
                size: sub_size,
                gap: 10.0,
                baseline: sub_baseline,
                rise_from: 30.0,
                first_index: title_words.len(),
            });
        }

        for (line_no, line) in lines.iter().enumerate() {
            let widths: Vec<f64> = line.words.iter().map(|w| text_width(w, line.size)).collect();
            let lefts = centered_row(&widths, line.gap, center.x);
            let (color, bold) = if line_no == 0 {
                (theme::TEXT, true)
            } else {
                (theme::MUTED, false)
            };

            for (i, (word, left)) in line.words.iter().zip(lefts).enumerate() {
                let word_ctx = ctx.stagger(line.first_index + i, WORD_STEP);
                let opacity = word_ctx.progress(&spring);
                let dy = word_ctx.spring(&spring, line.rise_from, 0.0);

                let node = SceneNode::text(
                    format!("title/{}/{i}", line.id),
                    *word,
                    Point::new(left, line.baseline),
                    line.size,
                    color,
                    TextAlign::Left,
                );
                let node = if bold { node.bold() } else { node };
                out.push(node.translated(0.0, dy).faded(opacity));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/title.rs"]
mod tests;
