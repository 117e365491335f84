// src/main.rs
mod clock;
mod content;
mod greeting;
mod spotlight;

use gloo::console::{debug, log};
use yew::prelude::*;

use content::{ContentProfile, CONTACT_MAILTO, CONVERSATION_STARTERS, SOCIAL_URL};
use spotlight::{Selection, SpotlightKey};

fn main() {
    log!("hi-there: mounting");
    yew::Renderer::<App>::new().render();
}

#[function_component(App)]
fn app() -> Html {
    // Read the clock once per mount.
    let greeting = use_memo((), |_| greeting::for_hour(clock::local_hour()));
    let year = use_memo((), |_| clock::current_year());

    html! { <Page greeting={*greeting} year={*year} /> }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    greeting: &'static str,
    year: u32,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let selection = use_state(Selection::default);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |key: SpotlightKey| {
            let mut next = *selection;
            next.select(key);
            debug!("spotlight:", selection.active().as_str(), "->", key.as_str());
            selection.set(next);
        })
    };

    html! {
        <div class="page">
          <div class="glow" aria-hidden="true"></div>
          <div class="wrap">
            <Hero greeting={props.greeting} />

            <main class="stack">
              <section class="spotlight">
                <SelectorButtons selection={*selection} on_select={on_select} />
                <ActiveProfile profile={selection.active_profile()} />
              </section>

              <ConversationStarters />
              <ReadyBand />
            </main>

            <SiteFooter year={props.year} />
          </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    greeting: &'static str,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
          <span class="badge">
            <span class="dot"></span>
            { greeting::badge_text(props.greeting) }
          </span>
          <h1 class="h1">{ "Hi, I’m the friendly teammate who helps ideas feel real." }</h1>
          <p class="lead">
            { "Whether you need a quick gut-check, a polished prototype, or a launch partner, this space is here to welcome the spark that started with a simple “Hi”." }
          </p>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct SelectorProps {
    selection: Selection,
    on_select: Callback<SpotlightKey>,
}

#[function_component(SelectorButtons)]
fn selector_buttons(props: &SelectorProps) -> Html {
    html! {
        <div class="card picker">
          <h2 class="card-t">{ "How can I help today?" }</h2>
          <p class="card-p">{ "Choose a spotlight to see what working together might look like." }</p>
          <div class="picker-list">
            { for SpotlightKey::ALL.iter().map(|&key| {
                let is_active = props.selection.is_active(key);
                let onclick = props.on_select.reform(move |_: MouseEvent| key);
                html! {
                  <button
                    key={key.as_str()}
                    data-key={key.as_str()}
                    class={classes!("pick", is_active.then_some("active"))}
                    aria-pressed={if is_active { "true" } else { "false" }}
                    {onclick}
                  >
                    { key.button_label() }
                  </button>
                }
            }) }
          </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActiveProfileProps {
    profile: &'static ContentProfile,
}

#[function_component(ActiveProfile)]
fn active_profile(props: &ActiveProfileProps) -> Html {
    let p = props.profile;
    html! {
        <article class="card feature">
          <div class="orb" aria-hidden="true"></div>
          <h3 class="feature-t">{ p.title }</h3>
          <p class="feature-p">{ p.subtitle }</p>
          <ul class="highlights">
            { for p.highlights.iter().map(|h| html! {
                <li key={h.label} class="highlight">
                  <p class="label">{ h.label }</p>
                  <p class="detail">{ h.detail }</p>
                </li>
            }) }
          </ul>
          <div class="cta-row">
            <a class="btn" href={p.cta.href}>
              { p.cta.label }
              <span aria-hidden="true">{ " ↗" }</span>
            </a>
          </div>
        </article>
    }
}

#[function_component(ConversationStarters)]
fn conversation_starters() -> Html {
    html! {
        <section class="starters">
          <div class="starters-intro">
            <h2 class="h2">{ "Conversation starters" }</h2>
            <p class="card-p">
              { "Bring one of these to our next chat\u{2014}or send your own vibe. Each prompt turns a simple greeting into momentum." }
            </p>
          </div>
          <div class="starters-list">
            { for CONVERSATION_STARTERS.iter().map(|s| html! {
                <div key={s.heading} class="card">
                  <h3 class="card-t">{ s.heading }</h3>
                  <p class="card-p">{ s.body }</p>
                </div>
            }) }
          </div>
        </section>
    }
}

#[function_component(ReadyBand)]
fn ready_band() -> Html {
    html! {
        <section class="card ready">
          <h2 class="h2">{ "Ready when you are." }</h2>
          <p class="card-p">
            { "I’m here to make that first “Hi” feel effortless\u{2014}whether it turns into a quick note, a week-long sprint, or a long-term collaboration." }
          </p>
          <div class="row">
            <a class="btn" href={CONTACT_MAILTO}>{ "Send an email" }</a>
            <a class="btn btn2" href={SOCIAL_URL}>{ "Say hi on LinkedIn" }</a>
          </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    year: u32,
}

#[function_component(SiteFooter)]
fn site_footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
          <span>{ content::footer_text(props.year) }</span>
          <span class="muted">{ "Built with Rust, Yew & WebAssembly" }</span>
        </footer>
    }
}
