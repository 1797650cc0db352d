use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use gloo_net::http::Request;
use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Array, Function, Reflect};
use log::{error, info};
use portfolio_page::{
    animation::{
        stagger_delay_class, AnimationKind, CounterStepper, ObserverOptions, ProgressTarget,
        Trigger, VisibilityAnimator, VisibilitySample,
    },
    config::{LogLevel, PageConfig},
    contact::{
        ContactForm, ContactFormSubmitter, FormView, MailRelay, RelayError, RelayRequest,
        RelayTarget, EMAILJS_SEND_URL,
    },
    content::{Card, Experience, NavLink, PortfolioContent},
    scroll::{fragment_target, scroll_destination, BackToTopControl, BACK_TO_TOP_VISIBLE_CLASS},
    tagline::{TaglineRotator, TaglineSequence, FADE_OUT_CLASS},
    theme::{PreferenceStore, ThemeMode, ThemePreference, DARK_MODE_CLASS},
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
    Storage, Window,
};
use yew::prelude::*;

fn build_time_value(name: &str) -> Option<String> {
    let value = match name {
        "PORTFOLIO_EMAILJS_SERVICE_ID" => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
        "PORTFOLIO_EMAILJS_TEMPLATE_ID" => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
        "PORTFOLIO_EMAILJS_PUBLIC_KEY" => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        "PORTFOLIO_THEME_KEY" => option_env!("PORTFOLIO_THEME_KEY"),
        "PORTFOLIO_BACK_TO_TOP_PX" => option_env!("PORTFOLIO_BACK_TO_TOP_PX"),
        "PORTFOLIO_TAGLINE_INTERVAL_MS" => option_env!("PORTFOLIO_TAGLINE_INTERVAL_MS"),
        "PORTFOLIO_TAGLINE_FADE_MS" => option_env!("PORTFOLIO_TAGLINE_FADE_MS"),
        "PORTFOLIO_COUNTER_STEPS" => option_env!("PORTFOLIO_COUNTER_STEPS"),
        "PORTFOLIO_COUNTER_TICK_MS" => option_env!("PORTFOLIO_COUNTER_TICK_MS"),
        "PORTFOLIO_VISIBILITY_THRESHOLD_PERCENT" => {
            option_env!("PORTFOLIO_VISIBILITY_THRESHOLD_PERCENT")
        }
        "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
        _ => None,
    };

    value.map(str::to_string)
}

fn init_logging(level: LogLevel) {
    console_log::init_with_level(level.level()).expect("error initializing log");
}

// Theme

struct LocalStore;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|err| format!("{err:?}"))
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .class_list()
            .toggle_with_force(DARK_MODE_CLASS, mode.is_dark());
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(mode: ThemeMode) {
    if prefers_reduced_motion() {
        apply_theme(mode);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(mode);
        return;
    };

    let document_js: JsValue = document.into();
    let Some(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        apply_theme(mode);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(mode));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(mode);
    }
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    mode: ThemeMode,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label={props.mode.toggle_label()}
            aria-pressed={props.mode.is_dark().to_string()}
            onclick={props.on_toggle.clone()}
        >
            <i class={classes!("fas", props.mode.icon().class())} aria-hidden="true"></i>
        </button>
    }
}

// Scrolling

fn smooth_scroll_window(win: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_element(id: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(element) = win.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };

    let top = element.get_bounding_client_rect().top();
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    smooth_scroll_window(&win, scroll_destination(top, scroll_y));
}

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
struct AnchorProps {
    link: NavLink,
    #[prop_or_default]
    class: Classes,
}

#[function_component(SmoothAnchor)]
fn smooth_anchor(props: &AnchorProps) -> Html {
    let href = props.link.href;
    let onclick = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(id) = fragment_target(href) {
            scroll_to_element(id);
        }
    });

    html! {
        <a class={props.class.clone()} href={href} onclick={onclick}>{props.link.label}</a>
    }
}

#[derive(Properties, PartialEq)]
struct BackToTopProps {
    threshold: f64,
}

#[function_component(BackToTop)]
fn back_to_top(props: &BackToTopProps) -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let control = BackToTopControl::new(props.threshold);
        use_effect_with((), move |_| {
            let update = move || visible.set(control.is_visible(current_scroll_y()));
            update();

            let listener = Closure::<dyn FnMut()>::new(update);
            let win = window();
            if let Some(win) = win.as_ref() {
                let _ = win
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let onclick = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        if let Some(win) = window() {
            smooth_scroll_window(&win, 0.0);
        }
    });

    html! {
        <a
            id="backToTop"
            href="#home"
            class={classes!("back-to-top", visible.then_some(BACK_TO_TOP_VISIBLE_CLASS))}
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </a>
    }
}

// Visibility animations

#[derive(Clone)]
struct AnimatorHandle(Rc<RefCell<VisibilityAnimator>>);

impl PartialEq for AnimatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    id: AttrValue,
    kind: AnimationKind,
    animator: AnimatorHandle,
    triggered: UseStateHandle<Option<Trigger>>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    animator.0.borrow_mut().watch(id.to_string(), kind);
    let options = animator.0.borrow().options();

    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let sample = VisibilitySample {
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            };

            let trigger = animator.0.borrow_mut().on_visibility(&id, sample);
            if let Some(trigger) = trigger {
                observer.unobserve(&entry.target());
                triggered.set(Some(trigger));
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[hook]
fn use_reveal(id: AttrValue, kind: AnimationKind) -> (NodeRef, Option<Trigger>) {
    let animator = use_context::<AnimatorHandle>();
    let node = use_node_ref();
    let triggered = use_state(|| None::<Trigger>);

    {
        let node = node.clone();
        let triggered = triggered.clone();
        use_effect_with((), move |_| {
            let observed = match (node.cast::<Element>(), animator) {
                (Some(element), Some(animator)) => {
                    observe_once(&element, id, kind, animator, triggered)
                }
                _ => None,
            };

            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        });
    }

    (node, (*triggered).clone())
}

fn fade_class(trigger: &Option<Trigger>) -> Option<&'static str> {
    trigger.as_ref().map(|trigger| trigger.fade_class)
}

#[derive(Properties, PartialEq)]
struct ProgressBarProps {
    id: AttrValue,
    name: AttrValue,
    level: ProgressTarget,
}

#[function_component(ProgressBar)]
fn progress_bar(props: &ProgressBarProps) -> Html {
    let (node, trigger) = use_reveal(props.id.clone(), AnimationKind::ProgressFill(props.level));
    let width = match trigger.as_ref().map(|trigger| trigger.kind) {
        Some(AnimationKind::ProgressFill(target)) => target.width(),
        _ => "0%".to_string(),
    };

    html! {
        <div class="skill">
            <div class="skill-info">
                <span>{props.name.clone()}</span>
                <span>{format!("{}%", props.level.percent())}</span>
            </div>
            <div class="skill-bar">
                <div
                    ref={node}
                    class={classes!("skill-progress", fade_class(&trigger))}
                    style={format!("width: {width};")}
                ></div>
            </div>
        </div>
    }
}

fn counter_interval(
    target: u64,
    steps: u32,
    tick_ms: u32,
    shown: UseStateHandle<u64>,
    done: UseStateHandle<bool>,
) -> Interval {
    let mut stepper = CounterStepper::new(target, steps);
    Interval::new(tick_ms, move || {
        let tick = stepper.tick();
        shown.set(tick.value());
        if tick.is_finished() {
            done.set(true);
        }
    })
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    id: AttrValue,
    label: AttrValue,
    target: u64,
    suffix: AttrValue,
    steps: u32,
    tick_ms: u32,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let (node, trigger) = use_reveal(
        props.id.clone(),
        AnimationKind::Counter {
            target: props.target,
        },
    );
    let shown = use_state(|| 0u64);
    let done = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let done_handle = done.clone();
        let steps = props.steps;
        let tick_ms = props.tick_ms;
        use_effect_with((trigger.clone(), *done), move |(trigger, done)| {
            let interval = match (trigger.as_ref().map(|trigger| trigger.kind), *done) {
                (Some(AnimationKind::Counter { target }), false) => {
                    Some(counter_interval(target, steps, tick_ms, shown, done_handle))
                }
                _ => None,
            };

            move || drop(interval)
        });
    }

    html! {
        <div class="stat">
            <span ref={node} class={classes!("stat-number", fade_class(&trigger))}>
                {shown.to_string()}
            </span>
            <span class="stat-suffix">{props.suffix.clone()}</span>
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RevealCardProps {
    id: AttrValue,
    card: Card,
    index: usize,
    kind_class: &'static str,
}

#[function_component(RevealCard)]
fn reveal_card(props: &RevealCardProps) -> Html {
    let (node, trigger) = use_reveal(props.id.clone(), AnimationKind::FadeOnly);

    html! {
        <article
            ref={node}
            class={classes!(
                props.kind_class,
                stagger_delay_class(props.index),
                fade_class(&trigger)
            )}
        >
            <h3>{props.card.title}</h3>
            <p>{props.card.description}</p>
            <ul class="tags">
                { for props.card.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
            </ul>
        </article>
    }
}

// Experience

#[derive(Properties, PartialEq)]
struct ExperienceItemProps {
    experience: Experience,
    today: NaiveDate,
}

#[function_component(ExperienceItem)]
fn experience_item(props: &ExperienceItemProps) -> Html {
    let meta = match props.experience.display(props.today) {
        Some(display) => html! {
            <p class="exp-meta">
                {"Joined "}<span class="joined-date">{display.joined}</span>
                {" · "}<span class="duration-text">{display.duration}</span>
                {" ("}<span class="total-months">{display.total_months.to_string()}</span>{" months)"}
            </p>
        },
        None => html! {
            <p class="exp-meta">{"Joined "}{props.experience.join}</p>
        },
    };

    html! {
        <li class="exp-item">
            <h3>{props.experience.role}<span class="muted">{" · "}{props.experience.company}</span></h3>
            {meta}
            <p>{props.experience.summary}</p>
        </li>
    }
}

// Tagline

#[derive(Properties, PartialEq)]
struct TaglineProps {
    taglines: TaglineSequence,
    interval_ms: u32,
    fade_ms: u32,
}

#[function_component(Tagline)]
fn tagline(props: &TaglineProps) -> Html {
    let rotator = use_mut_ref(|| TaglineRotator::new(props.taglines.clone()));
    let text = use_state(|| rotator.borrow().current().to_string());
    let fading = use_state_eq(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let text = text.clone();
        let fading = fading.clone();
        let interval_ms = props.interval_ms;
        let fade_ms = props.fade_ms;
        use_effect_with((), move |_| {
            let slot = pending.clone();
            let interval = Interval::new(interval_ms, move || {
                rotator.borrow_mut().begin_fade();
                fading.set(true);

                let rotator = rotator.clone();
                let text = text.clone();
                let fading = fading.clone();
                // Replacing the slot drops any swap that hasn't fired yet.
                *slot.borrow_mut() = Some(Timeout::new(fade_ms, move || {
                    let next = rotator.borrow_mut().advance().to_string();
                    text.set(next);
                    fading.set(false);
                }));
            });

            move || {
                drop(interval);
                pending.borrow_mut().take();
            }
        });
    }

    html! {
        <p id="dynamicTagline" class={classes!("tagline", fading.then_some(FADE_OUT_CLASS))}>
            {(*text).clone()}
        </p>
    }
}

// Contact form

struct EmailJsRelay {
    public_key: Option<String>,
}

#[async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        form: &ContactForm,
    ) -> Result<(), RelayError> {
        let public_key = self
            .public_key
            .as_deref()
            .ok_or_else(|| RelayError::new(None, "mail relay public key is not configured"))?;
        let body = RelayRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: form,
        };

        let response = Request::post(EMAILJS_SEND_URL)
            .json(&body)
            .map_err(|err| RelayError::new(None, err.to_string()))?
            .send()
            .await
            .map_err(|err| RelayError::new(None, err.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let text = match response.text().await {
            Ok(text) if !text.trim().is_empty() => text,
            _ => response.status_text(),
        };
        Err(RelayError::new(Some(status), text))
    }
}

struct YewFormView {
    form: UseStateHandle<ContactForm>,
    loading: UseStateHandle<bool>,
}

impl FormView for YewFormView {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn acknowledge(&self, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn reset_fields(&self) {
        self.form.set(ContactForm::default());
    }
}

fn input_value(event: &InputEvent) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }

    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn field_setter(
    form: &UseStateHandle<ContactForm>,
    apply: fn(&mut ContactForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let mut next = (*form).clone();
        apply(&mut next, input_value(&event));
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    relay: RelayTarget,
    public_key: Option<String>,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_state(ContactForm::default);
    let loading = use_state_eq(|| false);

    let onsubmit = {
        let form = form.clone();
        let loading = loading.clone();
        let relay = props.relay.clone();
        let public_key = props.public_key.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let submitter = ContactFormSubmitter::new(
                EmailJsRelay {
                    public_key: public_key.clone(),
                },
                relay.clone(),
            );
            let fields = (*form).clone();
            let view = YewFormView {
                form: form.clone(),
                loading: loading.clone(),
            };

            spawn_local(async move {
                let outcome = submitter.submit(&fields, &view).await;
                info!("contact form finished: {outcome:?}");
            });
        })
    };

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                required={true}
                value={form.name.clone()}
                oninput={field_setter(&form, |form, value| form.name = value)}
            />
            <input
                type="email"
                name="email"
                placeholder="Your email"
                required={true}
                value={form.email.clone()}
                oninput={field_setter(&form, |form, value| form.email = value)}
            />
            <input
                type="text"
                name="subject"
                placeholder="Subject"
                value={form.subject.clone()}
                oninput={field_setter(&form, |form, value| form.subject = value)}
            />
            <textarea
                name="message"
                rows="5"
                placeholder="Your message"
                required={true}
                value={form.message.clone()}
                oninput={field_setter(&form, |form, value| form.message = value)}
            ></textarea>
            <button type="submit" class="btn" disabled={*loading}>
                <span id="submitText" style={if *loading { "display: none;" } else { "display: inline;" }}>
                    {"Send Message"}
                </span>
                <span
                    id="formLoader"
                    class="loader"
                    style={if *loading { "display: inline-block;" } else { "display: none;" }}
                ></span>
            </button>
        </form>
    }
}

// Page

#[derive(Properties, PartialEq)]
struct AppProps {
    config: PageConfig,
    content: PortfolioContent,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let content = &props.content;

    let preference = use_mut_ref(|| ThemePreference::new(LocalStore, config.theme_key.clone()));
    let theme = {
        let preference = preference.clone();
        use_state(move || preference.borrow_mut().restore())
    };
    let animator = {
        let options = ObserverOptions {
            threshold: config.visibility_threshold,
            ..ObserverOptions::default()
        };
        use_memo((), move |_| {
            AnimatorHandle(Rc::new(RefCell::new(VisibilityAnimator::new(options))))
        })
    };
    let today = use_memo((), |_| Local::now().date_naive());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = preference.borrow_mut().toggle();
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<AnimatorHandle> context={(*animator).clone()}>
            <header class="site-header">
                <nav class="nav">
                    <SmoothAnchor class={classes!("logo")} link={NavLink { label: content.owner, href: "#home" }} />
                    <ul class="nav-links">
                        { for content.nav.iter().map(|link| html! {
                            <li><SmoothAnchor link={link.clone()} /></li>
                        }) }
                    </ul>
                    <ThemeToggle mode={*theme} on_toggle={on_toggle} />
                </nav>
            </header>

            <main>
                <section id="home" class="hero">
                    <h1>{content.owner}</h1>
                    <Tagline
                        taglines={content.taglines.clone()}
                        interval_ms={config.tagline_interval_ms}
                        fade_ms={config.tagline_fade_ms}
                    />
                    <SmoothAnchor class={classes!("btn")} link={NavLink { label: "Get in touch", href: "#contact" }} />
                </section>

                <section id="about" class="section">
                    <h2>{"About"}</h2>
                    <div class="stats">
                        { for content.stats.iter().enumerate().map(|(index, stat)| html! {
                            <StatCounter
                                id={format!("stat-{index}")}
                                label={stat.label}
                                target={stat.target}
                                suffix={stat.suffix}
                                steps={config.counter_steps}
                                tick_ms={config.counter_tick_ms}
                            />
                        }) }
                    </div>
                </section>

                <section id="skills" class="section">
                    <h2>{"Skills"}</h2>
                    { for content.skills.iter().enumerate().map(|(index, skill)| html! {
                        <ProgressBar id={format!("skill-{index}")} name={skill.name} level={skill.level} />
                    }) }
                </section>

                <section id="experience" class="section">
                    <h2>{"Experience"}</h2>
                    <ul class="timeline">
                        { for content.experiences.iter().map(|experience| html! {
                            <ExperienceItem experience={experience.clone()} today={*today} />
                        }) }
                    </ul>
                </section>

                <section id="projects" class="section">
                    <h2>{"Projects"}</h2>
                    <div class="card-grid">
                        { for content.projects.iter().enumerate().map(|(index, card)| html! {
                            <RevealCard id={format!("project-{index}")} card={card.clone()} index={index} kind_class="project-card" />
                        }) }
                    </div>
                    <h2>{"Certifications"}</h2>
                    <div class="card-grid">
                        { for content.certifications.iter().enumerate().map(|(index, card)| html! {
                            <RevealCard id={format!("cert-{index}")} card={card.clone()} index={index} kind_class="cert-card" />
                        }) }
                    </div>
                </section>

                <section id="contact" class="section">
                    <h2>{"Contact"}</h2>
                    <ContactSection
                        relay={config.relay.clone()}
                        public_key={config.relay_public_key.clone()}
                    />
                </section>
            </main>

            <footer class="site-footer">
                <p>{format!("© {} {}", today.format("%Y"), content.owner)}</p>
            </footer>
            <BackToTop threshold={config.back_to_top_threshold} />
        </ContextProvider<AnimatorHandle>>
    }
}

pub fn run() {
    let config = PageConfig::from_lookup(build_time_value);
    init_logging(config.log_level);

    let content = match PortfolioContent::portfolio() {
        Ok(content) => content,
        Err(err) => {
            error!("portfolio content rejected: {err}");
            return;
        }
    };

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { config, content },
    )
    .render();
}
