use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MediaQueryListEvent, MouseEvent, ScrollBehavior, ScrollToOptions,
    Storage,
};
use yew::prelude::*;

use crate::filter;
use crate::motion;
use crate::theme::{self, Theme};

const THEME_KEY: &str = "theme";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

const REVEAL_SELECTOR: &str = ".skill-category, .timeline-item, .portfolio-item, .stat";
const SECTION_SELECTOR: &str = ".parallax-section";
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";
const REVEAL_THRESHOLD: f64 = 0.1;

const HERO_REVEAL_DELAY_MS: u32 = 300;
const TYPING_START_DELAY_MS: u32 = 1_000;
const TYPING_SPEED_MS: u32 = 80;
const RIPPLE_MS: u32 = 600;

struct PortfolioEntry {
    title: &'static str,
    category: &'static str,
    blurb: &'static str,
}

const PORTFOLIO_ENTRIES: [PortfolioEntry; 6] = [
    PortfolioEntry {
        title: "Orbit Dashboard",
        category: "web",
        blurb: "Realtime analytics dashboard with live charts and alerting.",
    },
    PortfolioEntry {
        title: "Fieldnotes",
        category: "app",
        blurb: "Offline-first note taking for trail surveys.",
    },
    PortfolioEntry {
        title: "Lumen Brand System",
        category: "design",
        blurb: "Identity and component library for a lighting studio.",
    },
    PortfolioEntry {
        title: "Tidepool Storefront",
        category: "web",
        blurb: "Headless commerce storefront with instant search.",
    },
    PortfolioEntry {
        title: "Cadence",
        category: "app",
        blurb: "Interval training companion with haptic cues.",
    },
    PortfolioEntry {
        title: "Atlas Type Specimens",
        category: "design",
        blurb: "Interactive specimen pages for a variable typeface.",
    },
];

const FILTERS: [(&str, &str); 4] = [
    (filter::ALL, "All"),
    ("web", "Web"),
    ("app", "Apps"),
    ("design", "Design"),
];

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

const FLOATING_CARDS: [&str; 3] = ["Rust + WebAssembly", "UI Engineering", "Motion Design"];

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn resolve_theme() -> Theme {
    theme::resolve_initial(read_stored_theme(), system_prefers_dark())
}

fn apply_theme(theme: Theme) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Marks the document root for the duration of the CSS theme crossfade.
fn flash_theme_transition() {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    let _ = root.class_list().add_1(theme::TRANSITION_CLASS);
    Timeout::new(theme::TRANSITION_MS, move || {
        let _ = root.class_list().remove_1(theme::TRANSITION_CLASS);
    })
    .forget();
}

/// Follows the system color-scheme signal for the rest of the session.
/// Installed only when no preference was stored at load; automatic changes
/// are never persisted.
fn subscribe_system_theme(on_change: Callback<Theme>) {
    let Some(media) = window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
        return;
    };
    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        let next = if event.matches() {
            Theme::Dark
        } else {
            Theme::Light
        };
        on_change.emit(next);
    });
    let _ = media.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    listener.forget();
}

/// Reports `(scroll_y, progress_percent)` on every scroll event, plus once at
/// install time so position-dependent styling starts out correct.
fn subscribe_scroll(on_scroll: Callback<(f64, f64)>) {
    let Some(win) = window() else {
        return;
    };

    let sample = move || {
        let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let progress = document()
            .and_then(|d| d.document_element())
            .map(|root| {
                motion::progress_percent(
                    scroll_y,
                    f64::from(root.scroll_height()),
                    f64::from(root.client_height()),
                )
            })
            .unwrap_or(0.0);
        (scroll_y, progress)
    };

    let listener = {
        let on_scroll = on_scroll.clone();
        Closure::<dyn FnMut()>::new(move || on_scroll.emit(sample()))
    };
    let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    listener.forget();

    on_scroll.emit(sample());
}

fn scroll_to_section(target_id: &str) {
    let Some(target) = document().and_then(|d| d.get_element_by_id(target_id)) else {
        log::debug!("anchor target #{target_id} not found");
        return;
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(motion::anchor_top(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn collect_nodes(nodes: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let mut found = Vec::new();
    let Ok(nodes) = nodes else {
        return found;
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            found.push(element);
        }
    }
    found
}

fn select_all(doc: &Document, selector: &str) -> Vec<Element> {
    collect_nodes(doc.query_selector_all(selector))
}

fn select_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect_nodes(parent.query_selector_all(selector))
}

/// Observer firing once an element is 10% visible, with a 50px bottom margin
/// pulled in so elements reveal slightly before reaching the viewport edge.
fn intersection_observer(
    mut on_intersect: impl FnMut(Element) + 'static,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_intersect(entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    callback.forget();
    Some(observer)
}

/// One-shot reveal markers: individual animate elements get `animate-in`
/// when scrolled into view; whole sections get `revealed` plus a staggered
/// cascade over their animate children. Neither marker is ever removed.
fn init_reveal_animations() {
    let Some(doc) = document() else {
        return;
    };

    if let Some(observer) = intersection_observer(|target| {
        let _ = target.class_list().add_1("animate-in");
    }) {
        for element in select_all(&doc, REVEAL_SELECTOR) {
            observer.observe(&element);
        }
    }

    if let Some(observer) = intersection_observer(|target| {
        let _ = target.class_list().add_1("revealed");
        for (index, child) in select_within(&target, REVEAL_SELECTOR)
            .into_iter()
            .enumerate()
        {
            Timeout::new(filter::stagger_delay_ms(index), move || {
                let _ = child.class_list().add_1("animate-in");
            })
            .forget();
        }
    }) {
        for section in select_all(&doc, SECTION_SELECTOR) {
            let _ = section.class_list().add_1("section-reveal");
            observer.observe(&section);
        }
    }
}

/// Appends a trail element to the body and eases it toward the pointer once
/// per animation frame. The pointer is sampled on every `mousemove`.
fn init_cursor_trail() {
    let Some(doc) = document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(trail) = doc.create_element("div") else {
        return;
    };
    trail.set_class_name("cursor-trail");
    if body.append_child(&trail).is_err() {
        return;
    }
    let Ok(trail) = trail.dyn_into::<HtmlElement>() else {
        return;
    };

    let pointer = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
    {
        let pointer = pointer.clone();
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            pointer.set((f64::from(event.client_x()), f64::from(event.client_y())));
        });
        let _ = doc.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref());
        listener.forget();
    }

    let position = Cell::new((0.0_f64, 0.0_f64));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_handle = frame.clone();
    *frame.borrow_mut() = Some(Closure::new(move || {
        let (target_x, target_y) = pointer.get();
        let (x, y) = position.get();
        let next = (motion::trail_step(x, target_x), motion::trail_step(y, target_y));
        position.set(next);

        let style = trail.style();
        let _ = style.set_property("left", &format!("{}px", next.0));
        let _ = style.set_property("top", &format!("{}px", next.1));

        request_frame(&frame_handle);
    }));
    request_frame(&frame);
}

fn request_frame(frame: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(win) = window() else {
        return;
    };
    if let Some(callback) = frame.borrow().as_ref() {
        let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Expanding circle centered on the click point, removed after its
/// animation finishes.
fn spawn_ripple(event: &MouseEvent) {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(doc) = document() else {
        return;
    };
    let Ok(ripple) = doc.create_element("span") else {
        return;
    };

    let rect = target.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;

    ripple.set_class_name("btn-ripple");
    let _ = ripple.set_attribute(
        "style",
        &format!("width: {size}px; height: {size}px; left: {x}px; top: {y}px;"),
    );

    if target.append_child(&ripple).is_ok() {
        Timeout::new(RIPPLE_MS, move || ripple.remove()).forget();
    }
}

/// Retypes the element's current text one character at a time.
fn start_typing(element: HtmlElement, speed_ms: u32) {
    let text: Rc<Vec<char>> = Rc::new(element.text_content().unwrap_or_default().chars().collect());
    element.set_text_content(Some(""));
    type_next(element, text, 0, speed_ms);
}

fn type_next(element: HtmlElement, text: Rc<Vec<char>>, upto: usize, speed_ms: u32) {
    if upto >= text.len() {
        return;
    }
    let typed: String = text[..=upto].iter().collect();
    element.set_text_content(Some(&typed));
    Timeout::new(speed_ms, move || type_next(element, text, upto + 1, speed_ms)).forget();
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);
    let menu_open = use_state(|| false);
    let active_filter = use_state(|| filter::ALL);
    let hiding = use_state(|| false);
    let scroll_y = use_state(|| 0.0_f64);
    let progress = use_state(|| 0.0_f64);
    let hero_visible = use_state(|| false);
    let hero_role = use_node_ref();

    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    {
        let theme = theme.clone();
        let scroll_y = scroll_y.clone();
        let progress = progress.clone();
        let hero_visible = hero_visible.clone();
        let hero_role = hero_role.clone();
        use_effect_with((), move |_| {
            if read_stored_theme().is_none() {
                subscribe_system_theme(Callback::from(move |next| theme.set(next)));
            }

            subscribe_scroll(Callback::from(move |(y, percent)| {
                scroll_y.set(y);
                progress.set(percent);
            }));

            init_reveal_animations();
            init_cursor_trail();

            Timeout::new(HERO_REVEAL_DELAY_MS, move || hero_visible.set(true)).forget();

            if let Some(role) = hero_role.cast::<HtmlElement>() {
                Timeout::new(TYPING_START_DELAY_MS, move || {
                    start_typing(role, TYPING_SPEED_MS)
                })
                .forget();
            }

            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            flash_theme_transition();
            theme.set(next);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let nav_link_to = |target: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(false);
            scroll_to_section(target);
        })
    };

    let cta_to = |target: &'static str| {
        Callback::from(move |event: MouseEvent| {
            spawn_ripple(&event);
            event.prevent_default();
            scroll_to_section(target);
        })
    };

    let select_filter = |value: &'static str| {
        let active_filter = active_filter.clone();
        let hiding = hiding.clone();
        Callback::from(move |_| {
            hiding.set(true);
            let active_filter = active_filter.clone();
            let hiding = hiding.clone();
            Timeout::new(filter::HIDE_MS, move || {
                active_filter.set(value);
                hiding.set(false);
            })
            .forget();
        })
    };

    let on_tag_enter = Callback::from(|event: MouseEvent| {
        if let Some(tag) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        {
            let _ = tag
                .style()
                .set_property("transform", "translateY(-2px) scale(1.05)");
        }
    });

    let on_tag_leave = Callback::from(|event: MouseEvent| {
        if let Some(tag) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        {
            let _ = tag
                .style()
                .set_property("transform", "translateY(0) scale(1)");
        }
    });

    let skill_tag = |label: &'static str| {
        html! {
            <li
                class="skill-tag"
                onmouseenter={on_tag_enter.clone()}
                onmouseleave={on_tag_leave.clone()}
            >
                {label}
            </li>
        }
    };

    let nav_scrolled = motion::past_threshold(*scroll_y);
    let progress_style = format!("width: {:.2}%;", *progress);

    html! {
        <>
            <div
                id="scrollProgress"
                class={classes!("scroll-progress", nav_scrolled.then_some("visible"))}
                style={progress_style}
            ></div>

            <nav class={classes!("nav", nav_scrolled.then_some("scrolled"))}>
                <a class="nav-brand" href="#home" onclick={nav_link_to("home")}>{"Alex Reyes"}</a>
                <ul class={classes!("nav-menu", menu_open.then_some("active"))}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <li>
                            <a class="nav-link" href={format!("#{id}")} onclick={nav_link_to(*id)}>
                                {*label}
                            </a>
                        </li>
                    }) }
                </ul>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={(*theme).toggle_label()}
                    aria-pressed={(*theme).pressed().to_string()}
                    onclick={on_toggle_theme}
                >
                    <span class="theme-icon theme-icon-sun" style={(*theme).sun_style()} aria-hidden="true">{"☀"}</span>
                    <span class="theme-icon theme-icon-moon" style={(*theme).moon_style()} aria-hidden="true">{"☾"}</span>
                </button>
                <button
                    class={classes!("nav-toggle", menu_open.then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation"
                    onclick={on_toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            <main>
                <section id="home" class="hero parallax-section">
                    <div class={classes!("hero-content", hero_visible.then_some("is-visible"))}>
                        <h1 class="hero-title">{"Alex Reyes"}</h1>
                        <p class="hero-role" ref={hero_role}>{"Creative Frontend Developer"}</p>
                        <p class="hero-tagline">
                            {"I build fast, animated interfaces for the web."}
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary" type="button" onclick={cta_to("portfolio")}>
                                {"View Work"}
                            </button>
                            <button class="btn btn-ghost" type="button" onclick={cta_to("contact")}>
                                {"Get in Touch"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        { for FLOATING_CARDS.iter().enumerate().map(|(index, label)| html! {
                            <div class="floating-card" style={motion::card_transform(*scroll_y, index)}>
                                {*label}
                            </div>
                        }) }
                    </div>
                    <div class="hero-backdrop" aria-hidden="true">
                        { for (0..3).map(|index| html! {
                            <div class="floating-shape" style={motion::shape_transform(*scroll_y, index)}></div>
                        }) }
                        <div class="gradient-orb" style={motion::shape_transform(*scroll_y, 3)}></div>
                    </div>
                </section>

                <section id="about" class="about parallax-section">
                    <h2>{"About"}</h2>
                    <p>
                        {"Frontend engineer focused on interaction design, WebAssembly, and the \
                          kind of polish that makes interfaces feel alive."}
                    </p>
                    <div class="stats">
                        <div class="stat">
                            <span class="stat-value">{"8"}</span>
                            <span class="stat-label">{"years shipping"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{"40+"}</span>
                            <span class="stat-label">{"projects delivered"}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-value">{"12"}</span>
                            <span class="stat-label">{"design systems"}</span>
                        </div>
                    </div>
                </section>

                <section id="skills" class="skills parallax-section">
                    <h2>{"Skills"}</h2>
                    <div class="skill-category">
                        <h3>{"Languages"}</h3>
                        <ul class="skill-tags">
                            { skill_tag("Rust") }
                            { skill_tag("TypeScript") }
                            { skill_tag("CSS") }
                        </ul>
                    </div>
                    <div class="skill-category">
                        <h3>{"Tooling"}</h3>
                        <ul class="skill-tags">
                            { skill_tag("Yew") }
                            { skill_tag("Trunk") }
                            { skill_tag("Figma") }
                        </ul>
                    </div>
                </section>

                <section id="experience" class="experience parallax-section">
                    <h2>{"Experience"}</h2>
                    <div class="timeline-item">
                        <h3>{"Senior Frontend Engineer — Meridian Labs"}</h3>
                        <p>{"Leading the interaction layer of a mapping platform."}</p>
                    </div>
                    <div class="timeline-item">
                        <h3>{"UI Engineer — Northlight Studio"}</h3>
                        <p>{"Built marketing sites and product surfaces for early-stage teams."}</p>
                    </div>
                </section>

                <section id="portfolio" class="portfolio parallax-section">
                    <h2>{"Portfolio"}</h2>
                    <div class="portfolio-filters">
                        { for FILTERS.iter().map(|(value, label)| html! {
                            <button
                                class={classes!(
                                    "portfolio-filter",
                                    (*active_filter == *value).then_some("active"),
                                )}
                                type="button"
                                data-filter={*value}
                                onclick={select_filter(*value)}
                            >
                                {*label}
                            </button>
                        }) }
                    </div>
                    <div class="portfolio-grid">
                        { for PORTFOLIO_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                            <article
                                class={classes!(
                                    "portfolio-item",
                                    filter::item_hidden(*active_filter, entry.category)
                                        .then_some("hidden"),
                                )}
                                data-category={entry.category}
                                style={filter::item_style(*active_filter, entry.category, index, *hiding)}
                            >
                                <h3>{entry.title}</h3>
                                <p>{entry.blurb}</p>
                            </article>
                        }) }
                    </div>
                </section>

                <section id="contact" class="contact parallax-section">
                    <h2>{"Contact"}</h2>
                    <p>{"Say hello at "}<a class="link" href="mailto:hi@alexreyes.dev">{"hi@alexreyes.dev"}</a></p>
                </section>
            </main>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
