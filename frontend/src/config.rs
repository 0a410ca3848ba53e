use log::Level;
use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

/// Id of the optional `<script type="application/json">` block in index.html
/// that overrides the built-in event data.
pub const CONFIG_ELEMENT_ID: &str = "event-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid event config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub honoree: String,
    pub age: String,
    pub date_label: String,
    pub time_label: String,
    pub venue: String,
    pub maps_link: String,
    /// Target of the countdown, ISO-8601.
    pub event_iso: String,
    /// Who is inviting. Left out of the card when absent.
    pub hosts: Option<String>,
    /// Line under the card, above the RSVP button.
    pub closing_line: String,
    pub calendar: CalendarConfig,
    pub rsvp: RsvpConfig,
    pub media: MediaConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub title: String,
    pub details: String,
    /// UTC stamps in the `YYYYMMDDTHHMMSSZ` form the calendar template expects.
    pub start_utc: String,
    pub end_utc: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RsvpConfig {
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub intro_image: String,
    pub play_image: String,
    /// Portrait set into the "no faltes" frame.
    pub plate_image: String,
    pub video_id: String,
    pub video_start_seconds: u32,
    pub caption: String,
    pub audio_src: String,
    pub volume: f64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            honoree: "Mía Fernanda".to_string(),
            age: "8 Años".to_string(),
            date_label: "Domingo, 05 de abril 2026".to_string(),
            time_label: "2:00 p.m.".to_string(),
            venue: "21 de Marzo, Guelatao 132, 71228 Santa Lucía del Camino, Oax.".to_string(),
            maps_link: "https://share.google/J7Vn0EB9LgaVYxK1U".to_string(),
            event_iso: "2026-04-05T14:00:00-06:00".to_string(),
            hosts: None,
            closing_line: "¡Camelia está emocionada por celebrar contigo!".to_string(),
            calendar: CalendarConfig::default(),
            rsvp: RsvpConfig::default(),
            media: MediaConfig::default(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            title: "Cumpleaños de Camelia".to_string(),
            details: "Acompáñanos a celebrar el cumpleaños de Camelia.".to_string(),
            // 2:00 p.m. at UTC-6, three hours long
            start_utc: "20260405T200000Z".to_string(),
            end_utc: "20260405T230000Z".to_string(),
        }
    }
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            phone: "529514121200".to_string(),
            message: "Hola, confirmo mi asistencia al cumpleaños de Camelia 🎉".to_string(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            intro_image: "/intro_01.png".to_string(),
            play_image: "/dale_paly.png".to_string(),
            plate_image: "/mia_01.png".to_string(),
            video_id: "dwL2zgUApK8".to_string(),
            video_start_seconds: 7,
            caption: "¡Estás invitado a una aventura congelada!".to_string(),
            audio_src: "/tema.mp3".to_string(),
            volume: 0.7,
        }
    }
}

impl EventConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Built-in data, overridden by the host page's config block if it has one.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    log::debug!("Loaded event config from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("{}, falling back to built-in data", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
