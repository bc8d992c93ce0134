use folio_protocol::{Element, SkillDatum, ViewportProfile};

use crate::builder::{build, translate};

use super::svg_root;

const BACKGROUND: &str = "#faf8f5";
const TRACK: &str = "#e5e0da";
const LABEL_COLOR: &str = "#1a1a1a";
const VALUE_COLOR: &str = "#666666";
const TITLE_COLOR: &str = "#d4502e";
const LABEL_FONT: &str = "'Darker Grotesque', sans-serif";
const TITLE_FONT: &str = "'Fraunces', serif";
const TITLE: &str = "Design Skills & Proficiency";

const BAR_GAP: f64 = 10.0;
const BAR_RADIUS: f64 = 4.0;
const MAX_VALUE: f64 = 100.0;
/// Delay between consecutive bars starting to fill.
const STAGGER_MS: f64 = 100.0;
/// How long after its bar starts a value label begins to fade back in.
const LABEL_FADE_OFFSET_MS: f64 = 500.0;
const LABEL_FADE_MS: f64 = 500.0;

/// The skills shown on the portfolio page, top to bottom.
pub fn default_skills() -> Vec<SkillDatum> {
    [
        ("UX Design", 90.0, "#d4502e"),
        ("UI Design", 90.0, "#e76f3c"),
        ("Figma", 95.0, "#f08d4a"),
        ("User Research", 85.0, "#f4a258"),
        ("Adobe Suite", 85.0, "#f7b766"),
        ("Prototyping", 85.0, "#facc74"),
        ("HTML/CSS", 80.0, "#fde082"),
    ]
    .into_iter()
    .map(|(name, value, color)| SkillDatum::new(name, value, color))
    .collect()
}

/// Cosmetic opacity pulse on a value label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFade {
    pub label_id: String,
    pub delay_ms: f64,
    pub fade_ms: f64,
}

/// Everything the animation driver needs to fill one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlan {
    pub index: usize,
    /// `id` of the zero-width fill rect in the scene.
    pub bar_id: String,
    pub target_width: f64,
    pub delay_ms: f64,
    pub fade: LabelFade,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartScene {
    pub root: Element,
    pub bars: Vec<BarPlan>,
}

impl BarChartScene {
    /// A copy of the chart with every fill rect at its final width, for
    /// static export where nothing will animate it.
    pub fn settled(&self) -> Element {
        let mut root = self.root.clone();
        for plan in &self.bars {
            set_width_by_id(&mut root, &plan.bar_id, plan.target_width);
        }
        root
    }
}

fn set_width_by_id(element: &mut Element, id: &str, width: f64) -> bool {
    if element.id() == Some(id) {
        element.set_attr("width", width);
        return true;
    }
    element
        .children
        .iter_mut()
        .any(|child| set_width_by_id(child, id, width))
}

/// Lay out one horizontal bar per skill, top to bottom.
///
/// Fill rects are emitted at width 0; their final widths are carried by the
/// returned [`BarPlan`]s so the caller can animate them in.
pub fn compose_bar_chart(skills: &[SkillDatum], profile: &ViewportProfile) -> BarChartScene {
    let chart_width = profile.chart_width();
    let chart_height = profile.chart_height();
    let fonts = profile.font_sizes;

    let mut root = svg_root(profile.width, profile.height).child(
        build("rect", [("width", profile.width), ("height", profile.height)])
            .attr("fill", BACKGROUND),
    );

    let mut group = Element::new("g").attr(
        "transform",
        translate(profile.margins.left, profile.margins.top),
    );
    let mut bars = Vec::with_capacity(skills.len());

    if !skills.is_empty() {
        let pitch = chart_height / skills.len() as f64;
        let bar_height = (pitch - BAR_GAP).max(1.0);

        for (index, skill) in skills.iter().enumerate() {
            let y = index as f64 * pitch;
            let target_width =
                skill.value / MAX_VALUE * chart_width * profile.bar_width_multiplier;
            let bar_id = format!("skill-bar-{index}");
            let label_id = format!("skill-value-{index}");
            let mid_y = y + bar_height / 2.0;

            group = group
                .child(
                    build(
                        "rect",
                        [
                            ("x", 0.0),
                            ("y", y),
                            ("width", chart_width + profile.background_extra),
                            ("height", bar_height),
                            ("rx", BAR_RADIUS),
                        ],
                    )
                    .attr("fill", TRACK),
                )
                .child(
                    Element::new("rect")
                        .attr("id", bar_id.as_str())
                        .attr("x", 0.0)
                        .attr("y", y)
                        .attr("width", 0.0)
                        .attr("height", bar_height)
                        .attr("fill", skill.color.as_str())
                        .attr("rx", BAR_RADIUS),
                )
                .child(
                    Element::new("text")
                        .attr("x", -10.0)
                        .attr("y", mid_y)
                        .attr("text-anchor", "end")
                        .attr("dominant-baseline", "middle")
                        .attr("fill", LABEL_COLOR)
                        .attr("font-size", fonts.label)
                        .attr("font-weight", "600")
                        .attr("font-family", LABEL_FONT)
                        .with_text(skill.name.as_str()),
                )
                .child(
                    Element::new("text")
                        .attr("id", label_id.as_str())
                        .attr("x", target_width + 10.0)
                        .attr("y", mid_y)
                        .attr("dominant-baseline", "middle")
                        .attr("fill", VALUE_COLOR)
                        .attr("font-size", fonts.value)
                        .attr("font-weight", "600")
                        .attr("font-family", LABEL_FONT)
                        .with_text(format!("{}%", skill.value)),
                );

            let delay_ms = index as f64 * STAGGER_MS;
            bars.push(BarPlan {
                index,
                bar_id,
                target_width,
                delay_ms,
                fade: LabelFade {
                    label_id,
                    delay_ms: delay_ms + LABEL_FADE_OFFSET_MS,
                    fade_ms: LABEL_FADE_MS,
                },
            });
        }
    }

    root = root.child(group).child(
        Element::new("text")
            .attr("x", profile.width / 2.0)
            .attr("y", profile.margins.top - 15.0)
            .attr("text-anchor", "middle")
            .attr("fill", TITLE_COLOR)
            .attr("font-size", fonts.title)
            .attr("font-weight", "700")
            .attr("font-family", TITLE_FONT)
            .with_text(TITLE),
    );

    tracing::debug!(
        bars = bars.len(),
        compact = profile.is_compact,
        "composed bar chart"
    );
    BarChartScene { root, bars }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_group(scene: &BarChartScene) -> &Element {
        &scene.root.children[1]
    }

    #[test]
    fn one_group_of_four_per_skill() {
        let skills = default_skills();
        let scene = compose_bar_chart(&skills, &ViewportProfile::standard());
        assert_eq!(scene.bars.len(), skills.len());
        assert_eq!(chart_group(&scene).children.len(), skills.len() * 4);
        assert_eq!(scene.root.count_tag("text"), skills.len() * 2 + 1);
    }

    #[test]
    fn bars_start_empty_with_recorded_targets() {
        let profile = ViewportProfile::standard();
        let skills = default_skills();
        let scene = compose_bar_chart(&skills, &profile);
        for (plan, skill) in scene.bars.iter().zip(&skills) {
            let bar = scene.root.find_by_id(&plan.bar_id);
            assert_eq!(bar.and_then(|b| b.number_attr("width")), Some(0.0));
            let expected = skill.value / 100.0 * profile.chart_width();
            assert!((plan.target_width - expected).abs() < 1e-9);
        }
        // 95% of 640
        assert!((scene.bars[2].target_width - 608.0).abs() < 1e-9);
    }

    #[test]
    fn bars_stagger_and_labels_fade_later() {
        let scene = compose_bar_chart(&default_skills(), &ViewportProfile::standard());
        for plan in &scene.bars {
            assert_eq!(plan.delay_ms, plan.index as f64 * 100.0);
            assert_eq!(plan.fade.delay_ms, plan.delay_ms + 500.0);
            assert_eq!(plan.fade.fade_ms, 500.0);
        }
    }

    #[test]
    fn value_labels_sit_past_the_bar_end() {
        let scene = compose_bar_chart(&default_skills(), &ViewportProfile::standard());
        let plan = &scene.bars[0];
        let label = scene.root.find_by_id(&plan.fade.label_id);
        assert_eq!(label.and_then(|l| l.number_attr("x")), Some(plan.target_width + 10.0));
        assert_eq!(label.and_then(|l| l.text.as_deref()), Some("90%"));
    }

    #[test]
    fn compact_profile_widens_tracks_and_scales_bars() {
        let profile = ViewportProfile::compact();
        let skills = vec![SkillDatum::new("Rust", 50.0, "#000")];
        let scene = compose_bar_chart(&skills, &profile);
        let track = &chart_group(&scene).children[0];
        assert_eq!(
            track.number_attr("width"),
            Some(profile.chart_width() + profile.background_extra)
        );
        let expected = 0.5 * profile.chart_width() * profile.bar_width_multiplier;
        assert!((scene.bars[0].target_width - expected).abs() < 1e-9);
        assert_eq!(
            chart_group(&scene).children[2].number_attr("font-size"),
            Some(profile.font_sizes.label)
        );
    }

    #[test]
    fn empty_skill_list_still_draws_frame() {
        let scene = compose_bar_chart(&[], &ViewportProfile::standard());
        assert!(scene.bars.is_empty());
        assert!(chart_group(&scene).children.is_empty());
        assert_eq!(scene.root.count_tag("text"), 1);
    }

    #[test]
    fn settled_copy_has_final_widths() {
        let scene = compose_bar_chart(&default_skills(), &ViewportProfile::standard());
        let settled = scene.settled();
        for plan in &scene.bars {
            let bar = settled.find_by_id(&plan.bar_id);
            assert_eq!(bar.and_then(|b| b.number_attr("width")), Some(plan.target_width));
        }
        let original = scene.root.find_by_id("skill-bar-0");
        assert_eq!(original.and_then(|b| b.number_attr("width")), Some(0.0));
    }
}
