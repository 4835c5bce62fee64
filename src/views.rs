use crate::{
    content::{
        self, icon_url, ABOUT, CERTIFICATIONS, CONTACT_BLURB, HERO_BIO, JOURNEY, OWNER_FIRST_NAME,
        OWNER_LAST_NAME, PROJECTS, ROLE, SKILLS, SOCIAL_LINKS, STATS,
    },
    sections::Section,
    theme::Theme,
    widgets::{AnimatedCounter, HireMeButton, PuzzleGateView},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub theme: Theme,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub theme: Theme,
    pub on_celebrate: Callback<(f64, f64)>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = props.theme;

    html! {
        <section id={Section::Home.id()} class="section hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        {format!("👋 Hey, I’m {OWNER_FIRST_NAME}")}
                        <br />
                        <span class="hero-role">{ROLE}</span>
                    </h1>
                    <p class="hero-bio">{HERO_BIO}</p>
                    <HireMeButton on_celebrate={props.on_celebrate.clone()} />
                    <ul class="social-row">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <li key={link.label}>
                                <a
                                    href={link.url}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.label}
                                >
                                    <img class="social-icon" src={icon_url(link.icon, theme)} alt="" loading="lazy" />
                                </a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="hero-portrait">
                    <PuzzleGateView />
                    <img
                        class="signature"
                        src={theme.signature_src()}
                        alt={format!("{OWNER_FIRST_NAME} {OWNER_LAST_NAME} signature")}
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="section alt centered">
            <h2>{"About Me"}</h2>
            <p class="lede">{ABOUT}</p>
            <ul class="stats">
                { for STATS.iter().map(|stat| html! {
                    <li key={stat.label} class="stat">
                        <AnimatedCounter to={stat.target} />
                        <span class="stat-label">{stat.label}</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Journey)]
pub fn journey() -> Html {
    html! {
        <section id={Section::Journey.id()} class="section">
            <h2>{"My Journey"}</h2>
            <ol class="timeline">
                { for JOURNEY.iter().map(|entry| html! {
                    <li key={entry.period} class="timeline-entry card">
                        <span class="timeline-period">{entry.period}</span>
                        <h3>{entry.title}</h3>
                        <p class="muted">{entry.organization}</p>
                        <p>{entry.description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id={Section::Projects.id()} class="section alt">
            <h2>{"Projects"}</h2>
            <div class="card-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article key={project.title} class="card project">
                        <h3>{project.title}</h3>
                        <p class="muted">{project.description}</p>
                        <ul class="tag-list">
                            { for project.tags.iter().map(|tag| html! { <li class="tag">{*tag}</li> }) }
                        </ul>
                        <div class="card-links">
                            { for project.links.iter().map(|link| html! {
                                <a class="card-link" href={link.url} target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            }) }
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let theme = props.theme;

    html! {
        <section id={Section::Skills.id()} class="section">
            <h2>{"Skills"}</h2>
            <ul class="skill-list">
                { for SKILLS.iter().map(|skill| {
                    let percent = skill.percent();
                    html! {
                        <li key={skill.name} class="skill">
                            <div class="skill-head">
                                <img class="skill-icon" src={icon_url(skill.icon, theme)} alt="" loading="lazy" />
                                <span class="skill-name">{skill.name}</span>
                                <span class="skill-level">{format!("{percent}%")}</span>
                            </div>
                            <div
                                class="skill-bar"
                                role="progressbar"
                                aria-valuemin="0"
                                aria-valuemax="100"
                                aria-valuenow={percent.to_string()}
                                aria-label={skill.name}
                            >
                                <span class="skill-fill" style={format!("width: {percent}%;")}></span>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}

#[function_component(Certifications)]
pub fn certifications() -> Html {
    html! {
        <section id={Section::Certifications.id()} class="section alt">
            <h2>{"Certifications"}</h2>
            <div class="card-grid">
                { for CERTIFICATIONS.iter().map(|certification| html! {
                    <article key={certification.title} class="card">
                        <h3>{certification.title}</h3>
                        <a class="card-link" href={certification.url} target="_blank" rel="noopener noreferrer">
                            {"View License"}
                        </a>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="section centered">
            <h2>{"Contact Me"}</h2>
            <p class="lede">{CONTACT_BLURB}</p>
            <a class="cta" href={content::mailto()}>{"Email Me"}</a>
        </section>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">{content::footer_line(year)}</footer>
    }
}
