use log::info;
use yew::prelude::*;

use crate::cipher::gate::{MediaGate, VideoGate};
use crate::components::carousel::Carousel;
use crate::components::cipher_board::CipherBoard;
use crate::components::loader::Loader;
use crate::components::video_modal::VideoModal;
use crate::config::SiteConfig;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Speed", "Reflexes and quickness on the track."),
    ("Strength", "Power built through discipline and training."),
    ("Spirit", "Team energy that propels us forward."),
];

const MARQUEE: [&str; 4] = ["SPEED", "STRENGTH", "SPIRIT", "MASSON"];

fn scroll_to_section(id: &str) {
    if let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        section.scroll_into_view();
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_state(SiteConfig::load);
    let video_open = use_state(|| false);
    let unlocked = use_state(|| false);

    let gate = {
        let setter = video_open.setter();
        VideoGate::new(Callback::from(move |open: bool| setter.set(open)))
    };

    let on_lock_change = {
        let setter = unlocked.setter();
        Callback::from(move |now_unlocked: bool| {
            info!("Cipher {}", if now_unlocked { "unlocked" } else { "locked again" });
            setter.set(now_unlocked);
        })
    };

    let watch = {
        let gate = gate.clone();
        let unlocked = *unlocked;
        Callback::from(move |_: MouseEvent| {
            if unlocked {
                gate.open();
            } else {
                scroll_to_section("game-section");
            }
        })
    };

    let marquee = (0..4)
        .flat_map(|_| MARQUEE.iter())
        .enumerate()
        .map(|(i, word)| {
            html! {
                <span key={i}>
                    <span class={classes!("marquee-word", (*word == "MASSON").then(|| "accent"))}>{*word}</span>
                    <span class="marquee-dot">{" • "}</span>
                </span>
            }
        })
        .collect::<Html>();

    html! {
        <div class="home-page">
            <Loader duration_ms={config.loader_ms} />

            <div class="background-glow">
                <div class="glow glow-top"></div>
                <div class="glow glow-bottom"></div>
            </div>

            <main>
                <section class="hero">
                    <div class="hero-content">
                        <div class="hero-badge">{"Ave Maria Convent • Sports Meet 2026"}</div>
                        <h1 class="hero-title">{"MASSON"}</h1>
                        <div class="hero-rule"></div>
                        <div class="hero-tags">
                            <span class="hero-tag">{"House of Blue"}</span>
                            <span class="hero-tag">{"The Legacy"}</span>
                        </div>
                    </div>
                    <div class="hero-arrow">{"↓"}</div>
                </section>

                <section class="marquee-section">
                    <div class="marquee-content">{marquee}</div>
                </section>

                <section id="game-section" class="cipher-section">
                    <div class="cipher-copy">
                        <h2>{"UNLOCK THE "}<br /><span class="accent">{"LEGACY."}</span></h2>
                        <p>
                            {"The premiere film is locked. Solve the visual cipher to verify your House of Blue status and access the exclusive content."}
                        </p>
                        <div class="cipher-status">
                            <span class="status-online">{"System Online"}</span>
                            <span class="status-sep">{"|"}</span>
                            <span>{"Difficulty: Recruit"}</span>
                        </div>
                    </div>
                    <CipherBoard
                        target_word={config.target_word.clone()}
                        tiles={config.tiles.clone()}
                        unlock_delay_ms={config.unlock_delay_ms}
                        gate={gate.clone()}
                        on_lock_change={on_lock_change}
                    />
                </section>

                <section id="about" class="about-section">
                    <div class="about-copy">
                        <h3>{"At Ave Maria Convent,"}</h3>
                        <h4>{"Masson House stands for resilience, discipline, and unstoppable energy."}</h4>
                        <p>{"The House that trains, inspires and raises athletes who carry forward tradition and fierce sportsmanship."}</p>
                        <span class="about-underline">{"Our Spirit"}</span>
                    </div>
                    <Carousel images={config.carousel_images.clone()} />
                </section>

                <section id="highlights" class="highlights-section">
                    <h3>{"Highlights"}</h3>
                    <p class="highlights-sub">{"The pillars that define Masson."}</p>
                    <div class="highlights-grid">
                        {
                            HIGHLIGHTS.iter().map(|(title, text)| html! {
                                <div key={*title} class="glass-card">
                                    <div class="card-title">{*title}</div>
                                    <p>{*text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="final-cta" class="cta-section">
                    <div class="cta-hero">
                        <h2>{"Blue Doesn't Follow. Blue Leads."}</h2>
                        <p>{"Join the ascendancy and witness Masson's rise."}</p>
                        <button class="cta-button" onclick={watch}>
                            {if *unlocked { "Watch Masson Rise" } else { "Solve the Cipher to Watch" }}
                        </button>
                    </div>
                </section>

                <footer class="site-footer">
                    <div class="footer-row">
                        <div class="footer-brand">
                            <h2>{"MASSON"}</h2>
                            <p>{"House of Blue"}</p>
                        </div>
                        <div class="footer-credit">
                            <div>{"Made by "}<span class="accent">{"Shalon Fernando"}</span></div>
                            <a href="https://shalon.web.lk" target="_blank" rel="noopener noreferrer">{"shalon.web.lk ↗"}</a>
                        </div>
                    </div>
                    <div class="footer-bottom">{"© 2026 Masson House. Ave Maria Convent."}</div>
                </footer>
            </main>

            <VideoModal open={*video_open} video_url={config.video_url.clone()} gate={gate} />

            <style>
                {r#"
                .home-page {
                    background: #020617;
                    color: #fff;
                    min-height: 100vh;
                    font-family: 'Inter', sans-serif;
                }
                .home-page h1, .home-page h2, .home-page h3, .home-page h4 {
                    font-family: 'Syne', sans-serif;
                }
                .accent {
                    color: #3b82f6;
                }
                .background-glow {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                    overflow: hidden;
                }
                .glow {
                    position: absolute;
                    border-radius: 50%;
                }
                .glow-top {
                    top: -10%;
                    left: -10%;
                    width: 60vw;
                    height: 60vw;
                    background: rgba(37, 99, 235, 0.1);
                    filter: blur(100px);
                }
                .glow-bottom {
                    bottom: -10%;
                    right: -10%;
                    width: 70vw;
                    height: 70vw;
                    background: rgba(49, 46, 129, 0.2);
                    filter: blur(120px);
                }
                main {
                    position: relative;
                    z-index: 10;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    padding: 5rem 1rem;
                }
                .hero-content {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .hero-badge {
                    color: #60a5fa;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    margin-bottom: 1.5rem;
                }
                .hero-title {
                    font-size: clamp(2.5rem, 12vw, 11rem);
                    line-height: 0.85;
                    font-weight: 900;
                    margin: 0;
                    background: linear-gradient(to bottom, #fff, #fff, #1e3a8a);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-rule {
                    height: 1px;
                    width: 100%;
                    max-width: 42rem;
                    margin: 2.5rem 0;
                    opacity: 0.5;
                    background: linear-gradient(to right, transparent, #3b82f6, transparent);
                }
                .hero-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-tag {
                    padding: 0.5rem 1.5rem;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    background: rgba(30, 58, 138, 0.1);
                    border-radius: 9999px;
                    color: #bfdbfe;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .hero-arrow {
                    position: absolute;
                    bottom: 2rem;
                    color: #60a5fa;
                    opacity: 0.5;
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }
                .marquee-section {
                    padding: 4rem 0;
                    overflow: hidden;
                    border-top: 1px solid rgba(59, 130, 246, 0.2);
                    border-bottom: 1px solid rgba(59, 130, 246, 0.2);
                }
                .marquee-content {
                    display: flex;
                    gap: 2rem;
                    white-space: nowrap;
                    font-size: clamp(3.75rem, 8vw, 8rem);
                    font-weight: 900;
                    animation: marquee 30s linear infinite;
                }
                .marquee-word {
                    color: rgba(96, 165, 250, 0.6);
                }
                .marquee-word.accent {
                    color: rgba(59, 130, 246, 0.7);
                }
                .marquee-dot {
                    color: rgba(147, 197, 253, 0.4);
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .cipher-section, .about-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                    padding: 8rem 1rem;
                }
                .cipher-section {
                    min-height: 100vh;
                }
                .cipher-copy h2 {
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    line-height: 0.9;
                }
                .cipher-copy p {
                    color: #9ca3af;
                    max-width: 28rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .cipher-status {
                    display: flex;
                    gap: 1rem;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                }
                .status-online {
                    color: #60a5fa;
                }
                .status-sep {
                    color: #374151;
                }
                .about-copy h3 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 800;
                    margin: 0;
                }
                .about-copy h4 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    color: #60a5fa;
                    margin: 0.5rem 0 0;
                }
                .about-copy p {
                    margin-top: 1.5rem;
                    color: #9ca3af;
                    max-width: 32rem;
                }
                .about-underline {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding-bottom: 6px;
                    border-bottom: 4px solid #3b82f6;
                }
                .highlights-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 6rem 1rem;
                    text-align: center;
                }
                .highlights-section h3 {
                    font-size: 2.25rem;
                    margin: 0;
                }
                .highlights-sub {
                    color: #9ca3af;
                    margin-bottom: 2.5rem;
                }
                .highlights-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    text-align: left;
                }
                .glass-card {
                    background: rgba(255, 255, 255, 0.04);
                    border-radius: 14px;
                    padding: 28px;
                    border: 1px solid rgba(59, 130, 246, 0.15);
                    backdrop-filter: blur(8px);
                    transition: transform 0.35s ease, box-shadow 0.35s ease;
                }
                .glass-card:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 20px 60px rgba(59, 130, 246, 0.12);
                }
                .card-title {
                    color: #93c5fd;
                    font-weight: 700;
                    font-size: 1.125rem;
                }
                .glass-card p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .cta-section {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 10rem 1rem;
                }
                .cta-hero {
                    border-radius: 24px;
                    padding: 3rem;
                    text-align: center;
                    background: linear-gradient(90deg, #0ea5e9, #3b82f6, #60a5fa);
                    background-size: 200% 200%;
                    animation: moveBg 8s linear infinite;
                }
                @keyframes moveBg {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                .cta-hero h2 {
                    font-size: clamp(1.875rem, 6vw, 4.5rem);
                    font-weight: 800;
                    margin: 0;
                }
                .cta-hero p {
                    margin-top: 1.5rem;
                    color: rgba(229, 231, 235, 0.8);
                }
                .cta-button {
                    margin-top: 2rem;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #2563eb;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                }
                .cta-button:hover {
                    background: #3b82f6;
                }
                .site-footer {
                    border-top: 1px solid rgba(59, 130, 246, 0.1);
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .footer-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                .footer-brand h2 {
                    font-size: 3.75rem;
                    font-weight: 900;
                    margin: 0;
                    color: #3b82f6;
                }
                .footer-brand p {
                    color: rgba(147, 197, 253, 0.6);
                    letter-spacing: 0.05em;
                }
                .footer-credit {
                    text-align: right;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .footer-credit a {
                    color: #60a5fa;
                    text-decoration: none;
                }
                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(59, 130, 246, 0.1);
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.75rem;
                }
                @media (max-width: 1024px) {
                    .cipher-section, .about-section {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }
                    .highlights-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-row {
                        flex-direction: column;
                    }
                    .footer-credit {
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
