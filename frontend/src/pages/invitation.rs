use std::rc::Rc;

use yew::prelude::*;

use crate::components::info_row::InfoRow;
use crate::components::snow_layer::SnowLayer;
use crate::config::EventConfig;
use crate::countdown::Countdown;
use crate::links;
use crate::sequencer::audio::BrowserAudio;
use crate::sequencer::machine::{Sequencer, Signal};
use crate::sequencer::phase::Phase;
use crate::sequencer::signals::BrowserSignals;
use crate::sequencer::timers::GlooScheduler;

#[derive(Properties, PartialEq)]
pub struct InvitationProps {
    pub config: Rc<EventConfig>,
}

pub struct Invitation {
    audio_ref: NodeRef,
    sequencer: Sequencer<GlooScheduler, BrowserAudio>,
    signals: Option<BrowserSignals>,
    calendar_link: String,
    whatsapp_link: String,
    video_src: String,
}

impl Component for Invitation {
    type Message = Signal;
    type Properties = InvitationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = &ctx.props().config;
        let audio_ref = NodeRef::default();
        let scheduler = GlooScheduler::new(ctx.link().callback(Signal::TimerFired));
        let audio = BrowserAudio::new(audio_ref.clone(), config.media.volume);

        Self {
            audio_ref,
            sequencer: Sequencer::new(scheduler, audio),
            signals: None,
            calendar_link: links::calendar_link(config),
            whatsapp_link: links::whatsapp_link(&config.rsvp),
            video_src: links::video_embed_src(&config.media),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.sequencer.handle(msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let config = &ctx.props().config;
        self.calendar_link = links::calendar_link(config);
        self.whatsapp_link = links::whatsapp_link(&config.rsvp);
        self.video_src = links::video_embed_src(&config.media);
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.signals = BrowserSignals::attach(ctx.link().callback(|signal: Signal| signal));
            if self.signals.is_none() {
                log::warn!("No window or document; visibility and focus changes will be ignored");
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.signals = None;
        self.sequencer.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;
        let playback = self.sequencer.playback();
        let phase = self.sequencer.phase();

        let (mute_label, mute_aria) = if playback.muted {
            ("🔇 Música", "Activar música")
        } else {
            ("🔊 Música", "Silenciar música")
        };

        html! {
            <div class="invitation">
                <style>{STYLES}</style>
                <audio ref={self.audio_ref.clone()} src={config.media.audio_src.clone()} preload="auto" />
                <SnowLayer />

                { match phase {
                    Phase::Intro => self.intro(ctx),
                    Phase::Video => self.video_overlay(ctx),
                    Phase::Invite => html! {},
                } }

                <main class={classes!(
                    "invite-main",
                    (phase.is_terminal() && self.sequencer.invite_visible()).then(|| "visible")
                )}>
                    { if phase.is_terminal() { self.invite_card(config) } else { html! {} } }
                </main>

                <button
                    class="mute-button"
                    aria-label={mute_aria}
                    onclick={ctx.link().callback(|_| Signal::ToggleMute)}
                >
                    {mute_label}
                </button>
            </div>
        }
    }
}

impl Invitation {
    fn intro(&self, ctx: &Context<Self>) -> Html {
        let media = &ctx.props().config.media;
        html! {
            <div class="overlay">
                <div class="overlay-card">
                    <div class="frame">
                        <img class="intro-image" src={media.intro_image.clone()} alt="Personajes de Frozen" />
                    </div>
                    <div class="frame play-frame">
                        <img class="play-image" src={media.play_image.clone()} alt="Dale play" />
                    </div>
                    <button class="start-button" onclick={ctx.link().callback(|_| Signal::Start)}>
                        {"Iniciar aventura ❄️"}
                    </button>
                </div>
            </div>
        }
    }

    fn video_overlay(&self, ctx: &Context<Self>) -> Html {
        let media = &ctx.props().config.media;
        html! {
            <div class={classes!("overlay", "fading", self.sequencer.transitioning().then(|| "faded"))}>
                <div class="overlay-card video-card">
                    <button class="skip-button" onclick={ctx.link().callback(|_| Signal::Skip)}>
                        {"Saltar"}
                    </button>
                    <div class="video-frame">
                        <iframe
                            src={self.video_src.clone()}
                            title="Video de invitación"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                            referrerpolicy="strict-origin-when-cross-origin"
                            allowfullscreen={true}
                        />
                        <div class="caption-wrap">
                            <div class={classes!("caption", self.sequencer.caption_visible().then(|| "visible"))}>
                                {media.caption.clone()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        }
    }

    fn invite_card(&self, config: &EventConfig) -> Html {
        html! {
            <section class="invite-card">
                <header class="invite-header">
                    <p class="invite-kicker">{"Estás invitado al cumpleaños de"}</p>
                    <h1 class="invite-name">{config.honoree.clone()}</h1>
                    <p class="invite-age">{config.age.clone()}</p>
                </header>

                <div class="divider">{"❄"}</div>

                <div class="details">
                    <InfoRow label="📅 Fecha" value={config.date_label.clone()} />
                    <InfoRow label="⏰ Hora" value={config.time_label.clone()} />
                    <InfoRow label="📍 Lugar" value={config.venue.clone()} />
                    { for config.hosts.iter().map(|hosts| html! {
                        <InfoRow label="💌 Invitados por" value={hosts.clone()} stacked={true} />
                    }) }
                </div>

                <Countdown target_iso={config.event_iso.clone()} />

                <div class="cta-grid">
                    <a class="cta" href={self.calendar_link.clone()} target="_blank" rel="noreferrer">
                        {"Agregar al calendario 📅"}
                    </a>
                    <a class="cta cta-maps" href={config.maps_link.clone()} target="_blank" rel="noreferrer">
                        {"Ver en Google Maps 📍"}
                    </a>
                </div>

                <div class="no-faltes">
                    <img src="/part3.png" alt="Marco no faltes" loading="lazy" />
                    <img class="no-faltes-badge" src="/no_faltes.png" alt="No faltes" loading="lazy" />
                    <div class="no-faltes-plate">
                        <img src={config.media.plate_image.clone()} alt="Camelia en placa" loading="lazy" />
                    </div>
                </div>

                <p class="closing-line">{config.closing_line.clone()}</p>

                <a class="cta cta-rsvp" href={self.whatsapp_link.clone()} target="_blank" rel="noreferrer">
                    {"Confirmar asistencia por WhatsApp 💬"}
                </a>
            </section>
        }
    }
}

const STYLES: &str = r#"
    .invitation {
        min-height: 100vh;
        width: 100%;
        overflow: hidden;
        color: #fff;
        background: linear-gradient(to bottom, #082f49, #0c4a6e, #020617);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 16px;
        background: rgba(0, 0, 0, 0.7);
        backdrop-filter: blur(4px);
    }
    .overlay.fading {
        transition: opacity 0.5s;
        opacity: 1;
    }
    .overlay.fading.faded {
        opacity: 0;
    }
    .overlay-card {
        position: relative;
        width: 100%;
        max-width: 448px;
        padding: 20px;
        border-radius: 24px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(2, 6, 23, 0.8);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .frame {
        overflow: hidden;
        padding: 12px;
        border-radius: 16px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(15, 23, 42, 0.55);
    }
    .play-frame {
        margin-top: 20px;
    }
    .intro-image {
        display: block;
        width: 100%;
        max-height: 380px;
        object-fit: contain;
    }
    .play-image {
        display: block;
        width: 100%;
        max-width: 280px;
        margin: 0 auto;
    }
    .start-button, .cta {
        display: block;
        width: 100%;
        margin-top: 20px;
        padding: 14px 20px;
        border-radius: 16px;
        border: 1px solid rgba(165, 243, 252, 0.25);
        background: rgba(103, 232, 249, 0.15);
        color: #fff;
        font-size: 14px;
        font-weight: 600;
        text-align: center;
        text-decoration: none;
    }
    .skip-button {
        position: absolute;
        top: 16px;
        right: 16px;
        z-index: 10;
        padding: 4px 12px;
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(0, 0, 0, 0.3);
        color: rgba(255, 255, 255, 0.9);
        font-size: 12px;
    }
    .video-frame {
        position: relative;
        width: 100%;
        aspect-ratio: 9 / 16;
        overflow: hidden;
        border-radius: 16px;
        background: #000;
    }
    .video-frame iframe {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        border: 0;
    }
    .caption-wrap {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        padding: 24px;
    }
    .caption {
        margin: 0 auto;
        width: fit-content;
        max-width: 92%;
        padding: 12px 20px;
        border-radius: 16px;
        background: rgba(0, 0, 0, 0.45);
        font-size: 30px;
        font-weight: 800;
        text-align: center;
        opacity: 0;
        transform: translateY(12px);
        transition: all 0.7s ease-out;
    }
    .caption.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .invite-main {
        position: relative;
        z-index: 10;
        max-width: 448px;
        margin: 0 auto;
        padding: 32px 16px;
        opacity: 0;
        transform: translateY(8px);
        transition: all 0.7s;
    }
    .invite-main.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .invite-card {
        padding: 24px;
        border-radius: 24px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
    }
    .invite-header {
        text-align: center;
    }
    .invite-name {
        margin: 8px 0;
        font-size: 36px;
        font-weight: 800;
    }
    .divider {
        margin: 24px 0;
        text-align: center;
        color: rgba(255, 255, 255, 0.7);
    }
    .details {
        display: grid;
        gap: 12px;
        padding: 16px;
        border-radius: 16px;
        background: rgba(2, 6, 23, 0.3);
    }
    .info-row {
        display: flex;
        justify-content: space-between;
        gap: 12px;
    }
    .info-row.stacked {
        flex-direction: column;
    }
    .info-label {
        font-size: 14px;
        color: rgba(255, 255, 255, 0.7);
    }
    .info-value {
        font-size: 14px;
        font-weight: 500;
        text-align: right;
    }
    .info-row.stacked .info-value {
        text-align: left;
    }
    .countdown {
        margin-top: 16px;
        padding: 16px;
        border-radius: 16px;
        background: rgba(15, 23, 42, 0.4);
        text-align: center;
    }
    .countdown-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 8px;
        margin-top: 12px;
    }
    .time-box {
        padding: 12px 8px;
        border-radius: 12px;
        background: rgba(0, 0, 0, 0.2);
    }
    .time-box-value {
        margin: 0;
        font-size: 20px;
        font-weight: 800;
    }
    .time-box-label {
        margin: 4px 0 0;
        font-size: 11px;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.7);
    }
    .cta-maps {
        border-color: rgba(167, 243, 208, 0.25);
        background: rgba(110, 231, 183, 0.15);
    }
    .cta-rsvp {
        border-color: rgba(134, 239, 172, 0.3);
        background: rgba(34, 197, 94, 0.2);
    }
    .no-faltes {
        position: relative;
        max-width: 360px;
        margin: 16px auto 0;
    }
    .no-faltes img {
        display: block;
        width: 100%;
    }
    .no-faltes .no-faltes-badge {
        position: absolute;
        left: 50%;
        top: 42%;
        width: 56%;
        max-width: 210px;
        transform: translate(-50%, -50%);
    }
    .no-faltes .no-faltes-plate {
        position: absolute;
        left: 50%;
        top: 83%;
        width: 30%;
        max-width: 110px;
        overflow: hidden;
        border-radius: 38%;
        transform: translate(-50%, -50%);
    }
    .closing-line {
        margin: 24px 0 0;
        text-align: center;
        font-size: 14px;
        color: rgba(255, 255, 255, 0.8);
    }
    .mute-button {
        position: fixed;
        right: 16px;
        bottom: 16px;
        z-index: 60;
        padding: 8px 14px;
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(0, 0, 0, 0.4);
        color: #fff;
        font-size: 13px;
    }
    .snow-layer {
        pointer-events: none;
        position: fixed;
        inset: 0;
        overflow: hidden;
    }
    .snowflake {
        position: absolute;
        top: -10px;
        border-radius: 50%;
        background: #fff;
        filter: blur(0.2px);
    }
    @keyframes snow {
        0% { transform: translateY(-10%); opacity: 0; }
        10% { opacity: 1; }
        100% { transform: translateY(120vh); opacity: 0.7; }
    }
"#;
