//! Event wiring: registers the page listeners and applies [`Effect`]s.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::anim::BarFill;
use folio_core::page::{ContactForm, Effect, PageEvent, PageState, scroll, skills};
use folio_core::scenes::{BarPlan, LabelFade, default_skills};
use folio_core::{PageConfig, compose_bar_chart, compose_geometric, compose_winter, mount};
use folio_protocol::ViewportProfile;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, ScrollBehavior, ScrollToOptions, Window,
};

use crate::dom::DomSurface;
use crate::timer::Timeout;

const NAVBAR_SELECTOR: &str = ".navbar";
const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
/// Gap between hiding a value label and starting its fade back in.
const LABEL_REVEAL_MS: f64 = 50.0;

/// State shared by every registered listener.
struct Page {
    window: Window,
    document: Document,
    config: PageConfig,
    state: RefCell<PageState>,
    rebuild_timer: Timeout,
}

type SharedPage = Rc<Page>;

/// Draw the scenes and register all listeners, waiting for the DOM if the
/// document is still loading.
pub fn install(config: PageConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = Rc::new(Page {
        state: RefCell::new(PageState::new(&config)),
        window,
        document,
        config,
        rebuild_timer: Timeout::new(),
    });

    if page.document.ready_state() == "loading" {
        let deferred = page.clone();
        let target: EventTarget = page.document.clone().into();
        listen(&target, "DOMContentLoaded", move |_| {
            if let Err(e) = initialize(&deferred) {
                tracing::error!(error = ?e, "page initialization failed");
            }
        })
    } else {
        initialize(&page)
    }
}

fn initialize(page: &SharedPage) -> Result<(), JsValue> {
    rebuild_chart(page);
    draw_decorations(page);
    wire_menu(page)?;
    wire_skill_progress(page)?;
    wire_form(page)?;
    wire_navbar(page)?;
    wire_smooth_scroll(page)?;
    wire_resize(page)?;
    greet();
    tracing::info!("portfolio page initialized");
    Ok(())
}

// --- Scenes ---

fn rebuild_chart(page: &SharedPage) {
    let viewport_width = page
        .window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY);
    let profile = ViewportProfile::for_width(viewport_width, page.config.compact_breakpoint);
    let scene = compose_bar_chart(&default_skills(), &profile);

    let mut surface = DomSurface::new(page.document.clone());
    match mount(&mut surface, &page.config.ids.bar_chart, &scene.root) {
        Ok(Some(_)) => {
            for plan in &scene.bars {
                schedule_bar(page, plan);
            }
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "bar chart rebuild failed"),
    }
}

fn draw_decorations(page: &SharedPage) {
    let mut surface = DomSurface::new(page.document.clone());
    for (id, scene) in [
        (&page.config.ids.winter_scene, compose_winter()),
        (&page.config.ids.geometric_art, compose_geometric()),
    ] {
        if let Err(e) = mount(&mut surface, id, &scene) {
            tracing::warn!(error = %e, target_id = %id, "decorative scene failed");
        }
    }
}

fn schedule_bar(page: &SharedPage, plan: &BarPlan) {
    let Some(bar) = page.document.get_element_by_id(&plan.bar_id) else {
        return;
    };
    let window = page.window.clone();
    let target = plan.target_width;
    let duration = page.config.bar_fill_duration_ms;
    let started = set_timeout(&page.window, plan.delay_ms, move || {
        let start = now_ms(&window);
        let fill = BarFill::new(target, start).with_duration(duration);
        animation_loop(&window, start, move |timestamp| {
            let frame = fill.tick(timestamp);
            let _ = bar.set_attribute("width", &frame.width.to_string());
            !frame.done
        });
    });
    if let Err(e) = started {
        tracing::warn!(error = ?e, bar = %plan.bar_id, "could not schedule bar fill");
    }
    schedule_label_fade(page, &plan.fade);
}

fn schedule_label_fade(page: &SharedPage, fade: &LabelFade) {
    let Some(label) = page.document.get_element_by_id(&fade.label_id) else {
        return;
    };
    let window = page.window.clone();
    let transition = format!("transition: opacity {}s", fade.fade_ms / 1000.0);
    let _ = set_timeout(&page.window, fade.delay_ms, move || {
        let _ = label.set_attribute("style", &format!("opacity: 0; {transition}"));
        let _ = set_timeout(&window, LABEL_REVEAL_MS, move || {
            let _ = label.set_attribute("style", &format!("opacity: 1; {transition}"));
        });
    });
}

// --- Listeners ---

fn wire_menu(page: &SharedPage) -> Result<(), JsValue> {
    let ids = &page.config.ids;
    let (Some(hamburger), Some(nav_links)) = (
        page.document.get_element_by_id(&ids.hamburger),
        page.document.get_element_by_id(&ids.nav_links),
    ) else {
        return Ok(());
    };

    let p = page.clone();
    listen(&hamburger, "click", move |event| {
        event.stop_propagation();
        dispatch(&p, PageEvent::HamburgerClick);
    })?;

    let links = nav_links.query_selector_all("a")?;
    for i in 0..links.length() {
        if let Some(link) = links.item(i) {
            let p = page.clone();
            listen(&link, "click", move |_| dispatch(&p, PageEvent::NavLinkClick))?;
        }
    }

    let p = page.clone();
    let target: EventTarget = page.document.clone().into();
    listen(&target, "click", move |event| {
        let clicked = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let event = PageEvent::DocumentClick {
            inside_menu: nav_links.contains(clicked.as_ref()),
            inside_toggle: hamburger.contains(clicked.as_ref()),
        };
        dispatch(&p, event);
    })
}

fn wire_skill_progress(page: &SharedPage) -> Result<(), JsValue> {
    let bars = page.document.query_selector_all(skills::PROGRESS_SELECTOR)?;
    if bars.length() == 0 {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let bar = entry.target();
                let width = bar
                    .get_attribute(skills::PROGRESS_ATTRIBUTE)
                    .and_then(|raw| skills::progress_width(&raw));
                if let (Some(width), Some(bar)) = (width, bar.dyn_ref::<HtmlElement>()) {
                    let _ = bar.style().set_property("width", &width);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(skills::VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for i in 0..bars.length() {
        if let Some(bar) = bars.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&bar);
        }
    }
    Ok(())
}

fn wire_form(page: &SharedPage) -> Result<(), JsValue> {
    let Some(form) = page.document.get_element_by_id(&page.config.ids.contact_form) else {
        return Ok(());
    };
    let p = page.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let ids = &p.config.ids;
        let submission = ContactForm::new(
            &field_value(&p.document, &ids.name_input),
            &field_value(&p.document, &ids.email_input),
            &field_value(&p.document, &ids.message_input),
        );
        dispatch(&p, PageEvent::Submit(submission));
    })
}

fn wire_navbar(page: &SharedPage) -> Result<(), JsValue> {
    if page.document.query_selector(NAVBAR_SELECTOR)?.is_none() {
        return Ok(());
    }
    let p = page.clone();
    listen(&page.window, "scroll", move |_| {
        let y = p.window.scroll_y().unwrap_or_default();
        dispatch(&p, PageEvent::Scroll { y });
    })
}

fn wire_smooth_scroll(page: &SharedPage) -> Result<(), JsValue> {
    let links = page.document.query_selector_all(ANCHOR_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let p = page.clone();
        let anchor = link.clone();
        listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = scroll::anchor_target(&href) else {
                return;
            };
            event.prevent_default();
            let Some(target) = p
                .document
                .get_element_by_id(id)
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let navbar_height = p
                .document
                .query_selector(NAVBAR_SELECTOR)
                .ok()
                .flatten()
                .and_then(|n| n.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |n| f64::from(n.offset_height()));

            let options = ScrollToOptions::new();
            options.set_top(scroll::scroll_top(f64::from(target.offset_top()), navbar_height));
            options.set_behavior(ScrollBehavior::Smooth);
            p.window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

fn wire_resize(page: &SharedPage) -> Result<(), JsValue> {
    let p = page.clone();
    listen(&page.window, "resize", move |_| {
        let now_ms = now_ms(&p.window);
        dispatch(&p, PageEvent::Resize { now_ms });
    })
}

// --- Effects ---

fn dispatch(page: &SharedPage, event: PageEvent) {
    // Release the state borrow before effects run; a rebuild re-enters it.
    let effects = page.state.borrow_mut().dispatch(event);
    for effect in effects {
        apply(page, effect);
    }
}

fn apply(page: &SharedPage, effect: Effect) {
    let ids = &page.config.ids;
    match effect {
        Effect::SetMenuOpen(open) => {
            for id in [&ids.hamburger, &ids.nav_links] {
                if let Some(el) = page.document.get_element_by_id(id) {
                    let _ = el
                        .class_list()
                        .toggle_with_force(folio_core::page::MenuState::ACTIVE_CLASS, open);
                }
            }
        }
        Effect::SetNavbar(position) => {
            let navbar = page
                .document
                .query_selector(NAVBAR_SELECTOR)
                .ok()
                .flatten()
                .and_then(|n| n.dyn_into::<HtmlElement>().ok());
            if let Some(navbar) = navbar {
                let _ = navbar.style().set_property("transform", position.transform());
            }
        }
        Effect::ShowFeedback(feedback) => {
            if let Some(el) = page.document.get_element_by_id(&ids.form_feedback) {
                el.set_text_content(Some(&feedback.message));
                el.set_class_name(feedback.class_name());
            }
        }
        Effect::ResetForm => {
            if let Some(form) = page
                .document
                .get_element_by_id(&ids.contact_form)
                .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
            {
                form.reset();
            }
        }
        Effect::ArmRebuildTimer { ticket, delay_ms } => {
            // Weak: the page owns the timer, which owns this callback.
            let weak: Weak<Page> = Rc::downgrade(page);
            let armed = page.rebuild_timer.arm(&page.window, delay_ms, move || {
                if let Some(p) = weak.upgrade() {
                    dispatch(&p, PageEvent::RebuildTimer(ticket));
                }
            });
            if let Err(e) = armed {
                tracing::warn!(error = ?e, "could not arm rebuild timer");
            }
        }
        Effect::RebuildChart => {
            tracing::debug!("rebuilding bar chart after resize");
            rebuild_chart(page);
        }
    }
}

// --- Browser plumbing ---

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener.
    closure.forget();
    Ok(())
}

/// Fire-and-forget timer. The closure is freed when it runs, so this is only
/// for timers that are never cancelled; see [`Timeout`] for the rest.
fn set_timeout(window: &Window, delay_ms: f64, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.round() as i32,
    )
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or_else(js_sys::Date::now, |p| p.now())
}

/// Call `step` once now and then once per display frame until it returns
/// `false`.
fn animation_loop(window: &Window, now: f64, mut step: impl FnMut(f64) -> bool + 'static) {
    if !step(now) {
        return;
    }

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = slot.clone();
    let win = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if step(timestamp) {
            if let Some(next) = handle.borrow().as_ref() {
                let _ = win.request_animation_frame(next.as_ref().unchecked_ref());
            }
        } else if let Some(finished) = handle.borrow_mut().take() {
            // Cannot drop a closure while it runs; release it on the next turn.
            let _ = set_timeout(&win, 0.0, move || drop(finished));
        }
    }));

    if let Some(first) = slot.borrow().as_ref() {
        let _ = window.request_animation_frame(first.as_ref().unchecked_ref());
    }
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn greet() {
    web_sys::console::log_2(
        &"%c Hello, curious developer!".into(),
        &"color: #d4502e; font-size: 20px; font-weight: bold;".into(),
    );
    web_sys::console::log_2(
        &"%cThanks for checking out the code. Feel free to reach out if you want to collaborate!"
            .into(),
        &"color: #666; font-size: 14px;".into(),
    );
}
