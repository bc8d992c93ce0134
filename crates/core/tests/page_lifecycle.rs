//! Integration test: compose the page's scenes, mount them on an in-memory
//! surface and drive the bar fills and resize rebuilds the way the browser
//! host does.

use folio_core::anim::BarFill;
use folio_core::page::{Effect, PageEvent, PageState};
use folio_core::scenes::default_skills;
use folio_core::svg::render_svg;
use folio_core::{
    MemorySurface, PageConfig, Surface, compose_bar_chart, compose_geometric, compose_winter,
    mount,
};
use folio_protocol::ViewportProfile;

fn page_surface(config: &PageConfig) -> MemorySurface {
    let mut surface = MemorySurface::new();
    surface.add_target("svg", &config.ids.bar_chart);
    surface.add_target("svg", &config.ids.winter_scene);
    surface.add_target("svg", &config.ids.geometric_art);
    surface
}

fn bar_width(surface: &MemorySurface, id: &str) -> Option<f64> {
    let node = surface.element_by_id(id)?;
    surface.attribute(&node, "width")?.parse().ok()
}

#[test]
fn bars_fill_from_zero_to_target() {
    let config = PageConfig::default();
    let mut surface = page_surface(&config);
    let profile = ViewportProfile::for_width(1280.0, config.compact_breakpoint);
    let scene = compose_bar_chart(&default_skills(), &profile);

    let mounted = mount(&mut surface, &config.ids.bar_chart, &scene.root);
    assert!(matches!(mounted, Ok(Some(_))));

    for plan in &scene.bars {
        assert_eq!(bar_width(&surface, &plan.bar_id), Some(0.0));
    }

    // Frame loop at ~60 Hz; every bar starts after its stagger delay.
    let fills: Vec<BarFill> = scene
        .bars
        .iter()
        .map(|p| BarFill::new(p.target_width, p.delay_ms))
        .collect();
    let mut now = 0.0;
    let mut running = vec![true; fills.len()];
    while running.iter().any(|r| *r) {
        for (i, fill) in fills.iter().enumerate() {
            if !running[i] || now < scene.bars[i].delay_ms {
                continue;
            }
            let frame = fill.tick(now);
            if let Some(node) = surface.element_by_id(&scene.bars[i].bar_id) {
                let _ = surface.set_attribute(&node, "width", &frame.width.to_string());
            }
            running[i] = !frame.done;
        }
        now += 16.0;
        assert!(now < 5_000.0, "fills never finished");
    }

    for plan in &scene.bars {
        let width = bar_width(&surface, &plan.bar_id).unwrap_or_default();
        assert!((width - plan.target_width).abs() < 1e-9);
    }
}

#[test]
fn halfway_sample_matches_ease_out_cubic() {
    let fill = BarFill::new(100.0, 0.0);
    let width = fill.tick(500.0).width;
    assert!((width - 87.5).abs() <= 0.5);
}

#[test]
fn resize_burst_rebuilds_chart_once_with_new_profile() {
    let config = PageConfig::default();
    let mut surface = page_surface(&config);
    let mut page = PageState::new(&config);

    let _ = mount(
        &mut surface,
        &config.ids.bar_chart,
        &compose_bar_chart(&default_skills(), &ViewportProfile::standard()).root,
    );

    let mut timers = Vec::new();
    for t in [0.0, 10.0, 30.0, 70.0, 95.0] {
        for effect in page.dispatch(PageEvent::Resize { now_ms: t }) {
            if let Effect::ArmRebuildTimer { ticket, delay_ms } = effect {
                timers.push((t + delay_ms, ticket));
            }
        }
    }

    let mut rebuilds = Vec::new();
    for (at, ticket) in timers {
        if page.dispatch(PageEvent::RebuildTimer(ticket)).contains(&Effect::RebuildChart) {
            let profile = ViewportProfile::for_width(375.0, config.compact_breakpoint);
            let scene = compose_bar_chart(&default_skills(), &profile);
            let _ = mount(&mut surface, &config.ids.bar_chart, &scene.root);
            rebuilds.push(at);
        }
    }
    assert_eq!(rebuilds, vec![345.0]);

    let chart = surface.element_by_id(&config.ids.bar_chart);
    let view_box = chart.and_then(|c| surface.attribute(&c, "viewBox"));
    assert_eq!(view_box.as_deref(), Some("0 0 800 560"));
}

#[test]
fn decorative_scenes_mount_identically_twice() {
    let config = PageConfig::default();
    let mut surface = page_surface(&config);

    for (id, scene) in [
        (&config.ids.winter_scene, compose_winter()),
        (&config.ids.geometric_art, compose_geometric()),
    ] {
        let first = mount(&mut surface, id, &scene)
            .ok()
            .flatten()
            .and_then(|n| surface.snapshot(n));
        let second = mount(&mut surface, id, &scene)
            .ok()
            .flatten()
            .and_then(|n| surface.snapshot(n));
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}

#[test]
fn missing_targets_leave_surface_untouched() {
    let mut surface = MemorySurface::new();
    let before = format!("{surface:?}");
    let scene = compose_bar_chart(&default_skills(), &ViewportProfile::standard());
    assert!(matches!(mount(&mut surface, "dataViz", &scene.root), Ok(None)));
    assert!(matches!(mount(&mut surface, "winterScene", &compose_winter()), Ok(None)));
    assert_eq!(format!("{surface:?}"), before);
}

#[test]
fn static_export_is_well_formed() {
    for svg in [
        render_svg(&compose_bar_chart(&default_skills(), &ViewportProfile::standard()).root),
        render_svg(&compose_winter()),
        render_svg(&compose_geometric()),
    ] {
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<svg").count(), 1);
    }
}
