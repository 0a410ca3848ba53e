use urlencoding::encode;

use crate::config::{EventConfig, MediaConfig, RsvpConfig};

pub fn calendar_link(config: &EventConfig) -> String {
    let calendar = &config.calendar;
    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        encode(&calendar.title),
        calendar.start_utc,
        calendar.end_utc,
        encode(&calendar.details),
        encode(&config.venue),
    )
}

pub fn video_embed_src(media: &MediaConfig) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&start={}&mute=1&controls=1&rel=0&playsinline=1",
        encode(&media.video_id),
        media.video_start_seconds,
    )
}

pub fn whatsapp_link(rsvp: &RsvpConfig) -> String {
    format!("https://wa.me/{}?text={}", rsvp.phone, encode(&rsvp.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_link_encodes_free_text() {
        let link = calendar_link(&EventConfig::default());
        assert_eq!(
            link,
            "https://calendar.google.com/calendar/render?action=TEMPLATE\
             &text=Cumplea%C3%B1os%20de%20Camelia\
             &dates=20260405T200000Z/20260405T230000Z\
             &details=Acomp%C3%A1%C3%B1anos%20a%20celebrar%20el%20cumplea%C3%B1os%20de%20Camelia.\
             &location=21%20de%20Marzo%2C%20Guelatao%20132%2C%2071228%20Santa%20Luc%C3%ADa%20del%20Camino%2C%20Oax."
        );
    }

    #[test]
    fn calendar_link_ignores_hosts() {
        let mut config = EventConfig::default();
        let without = calendar_link(&config);
        config.hosts = Some("Ana & Luis".to_string());
        assert_eq!(calendar_link(&config), without);
    }

    #[test]
    fn video_embed_starts_muted_at_offset() {
        assert_eq!(
            video_embed_src(&MediaConfig::default()),
            "https://www.youtube.com/embed/dwL2zgUApK8?autoplay=1&start=7&mute=1&controls=1&rel=0&playsinline=1"
        );
    }

    #[test]
    fn whatsapp_link_prefills_message() {
        assert_eq!(
            whatsapp_link(&RsvpConfig::default()),
            "https://wa.me/529514121200?text=Hola%2C%20confirmo%20mi%20asistencia%20al%20cumplea%C3%B1os%20de%20Camelia%20%F0%9F%8E%89"
        );
    }
}
