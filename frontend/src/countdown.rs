use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

const TICK_MS: u32 = 1_000;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Time left until the party, always derived from the wall clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemainingTime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub done: bool,
}

impl RemainingTime {
    pub fn elapsed() -> Self {
        Self {
            done: true,
            ..Self::default()
        }
    }

    fn from_total_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
            done: false,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Parses the forms a browser `Date` would accept for an event timestamp:
/// RFC 3339 with offset or `Z`, the same at minute precision, a local
/// date-time without offset, or a bare date (UTC midnight).
pub fn parse_target(target: &str) -> Option<DateTime<Utc>> {
    let target = target.trim();
    let zoned = match target.strip_suffix(['Z', 'z']) {
        Some(rest) if !rest.is_empty() => format!("{}+00:00", rest),
        _ => target.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&zoned) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(&zoned, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(target, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(target, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Breaks the time between `now` and `target` into days/hours/minutes/seconds.
/// An unparseable target counts as already elapsed.
pub fn time_remaining(target: &str, now: DateTime<Utc>) -> RemainingTime {
    let Some(target_at) = parse_target(target) else {
        log::debug!("Unparseable countdown target {:?}", target);
        return RemainingTime::elapsed();
    };

    let diff_ms = target_at.signed_duration_since(now).num_milliseconds();
    if diff_ms <= 0 {
        return RemainingTime::elapsed();
    }

    RemainingTime::from_total_seconds(diff_ms as u64 / 1_000)
}

/// Repeating timer behind the countdown. Dropping the handle stops the ticks.
pub trait Ticker {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

pub struct GlooTicker;

impl Ticker for GlooTicker {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

/// Publishes the remaining time once right away, then on every tick for as
/// long as the returned handle is alive.
pub fn run_countdown<T: Ticker>(
    ticker: &T,
    target: String,
    now: impl Fn() -> DateTime<Utc> + 'static,
    publish: impl Fn(RemainingTime) + 'static,
) -> T::Handle {
    let tick = move || publish(time_remaining(&target, now()));
    tick();
    ticker.every(TICK_MS, Box::new(tick))
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub target_iso: String,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let remaining = {
        let target = props.target_iso.clone();
        use_state(move || time_remaining(&target, Utc::now()))
    };

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |target: &String| {
                let interval = run_countdown(&GlooTicker, target.clone(), Utc::now, move |left| {
                    remaining.set(left)
                });

                move || drop(interval)
            },
            props.target_iso.clone(),
        );
    }

    html! {
        <div class="countdown">
            <p class="countdown-title">{"⏳ Cuenta regresiva para la fiesta"}</p>
            {
                if remaining.done {
                    html! {
                        <p class="countdown-done">{"¡La fiesta ya comenzó! 🎉"}</p>
                    }
                } else {
                    html! {
                        <div class="countdown-grid">
                            <TimeBox label="Días" value={remaining.days} />
                            <TimeBox label="Horas" value={remaining.hours} />
                            <TimeBox label="Min" value={remaining.minutes} />
                            <TimeBox label="Seg" value={remaining.seconds} />
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimeBoxProps {
    label: &'static str,
    value: u64,
}

#[function_component(TimeBox)]
fn time_box(props: &TimeBoxProps) -> Html {
    html! {
        <div class="time-box">
            <p class="time-box-value">{format!("{:02}", props.value)}</p>
            <p class="time-box-label">{props.label}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const PARTY: &str = "2026-04-05T14:00:00-06:00";

    fn at(iso: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(iso).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn one_hour_before_party() {
        let remaining = time_remaining(PARTY, at("2026-04-05T13:00:00-06:00"));
        assert_eq!(
            remaining,
            RemainingTime { days: 0, hours: 1, minutes: 0, seconds: 0, done: false }
        );
    }

    #[test]
    fn after_party_is_done() {
        let remaining = time_remaining(PARTY, at("2026-04-06T00:00:00-06:00"));
        assert_eq!(remaining, RemainingTime::elapsed());
        assert_eq!(remaining.total_seconds(), 0);
    }

    #[test]
    fn exactly_at_target_is_done() {
        assert!(time_remaining(PARTY, at(PARTY)).done);
    }

    #[test]
    fn unparseable_target_is_done() {
        for target in ["", "mañana", "2026-13-40T00:00:00Z", "05/04/2026"] {
            assert_eq!(time_remaining(target, Utc::now()), RemainingTime::elapsed(), "{target}");
        }
    }

    #[test]
    fn sub_second_remainder_is_floored() {
        let now = at(PARTY) - Duration::milliseconds(61_999);
        let remaining = time_remaining(PARTY, now);
        assert_eq!((remaining.minutes, remaining.seconds), (1, 1));
    }

    #[test]
    fn less_than_a_second_left_is_all_zero_but_not_done() {
        let now = at(PARTY) - Duration::milliseconds(400);
        let remaining = time_remaining(PARTY, now);
        assert!(!remaining.done);
        assert_eq!(remaining.total_seconds(), 0);
    }

    #[test]
    fn multi_day_breakdown() {
        let now = at(PARTY) - Duration::seconds(3 * 86_400 + 5 * 3_600 + 7 * 60 + 9);
        let remaining = time_remaining(PARTY, now);
        assert_eq!(
            remaining,
            RemainingTime { days: 3, hours: 5, minutes: 7, seconds: 9, done: false }
        );
    }

    #[test]
    fn date_only_target_is_utc_midnight() {
        let remaining = time_remaining("2026-04-05", at("2026-04-04T23:00:00Z"));
        assert_eq!(remaining.hours, 1);
        assert!(!remaining.done);
    }

    #[test]
    fn offsetless_target_uses_local_time() {
        let expected = Local
            .with_ymd_and_hms(2026, 4, 5, 14, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parse_target("2026-04-05T14:00:00"), Some(expected));
    }

    #[test]
    fn minute_precision_with_offset() {
        let remaining = time_remaining("2026-04-05T14:00-06:00", at("2026-04-05T13:00:00-06:00"));
        assert_eq!(
            remaining,
            RemainingTime { days: 0, hours: 1, minutes: 0, seconds: 0, done: false }
        );
    }

    #[test]
    fn minute_precision_utc_z() {
        let remaining = time_remaining("2026-04-05T20:00Z", at("2026-04-05T19:00:00Z"));
        assert_eq!(
            remaining,
            RemainingTime { days: 0, hours: 1, minutes: 0, seconds: 0, done: false }
        );
        assert_eq!(parse_target("2026-04-05T20:00:00Z"), parse_target("2026-04-05T20:00Z"));
    }

    /// Ticks are run by hand; a dropped handle marks its tick dead.
    #[derive(Default)]
    struct FakeTicker {
        ticks: RefCell<Vec<(Rc<Cell<bool>>, u32, Box<dyn FnMut()>)>>,
    }

    struct FakeInterval {
        alive: Rc<Cell<bool>>,
    }

    impl Drop for FakeInterval {
        fn drop(&mut self) {
            self.alive.set(false);
        }
    }

    impl Ticker for FakeTicker {
        type Handle = FakeInterval;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> FakeInterval {
            let alive = Rc::new(Cell::new(true));
            self.ticks.borrow_mut().push((alive.clone(), period_ms, tick));
            FakeInterval { alive }
        }
    }

    impl FakeTicker {
        fn fire(&self) -> usize {
            let mut fired = 0;
            for (alive, _, tick) in self.ticks.borrow_mut().iter_mut() {
                if alive.get() {
                    tick();
                    fired += 1;
                }
            }
            fired
        }
    }

    #[test]
    fn ticks_every_second_until_handle_dropped() {
        let ticker = FakeTicker::default();
        let clock = Rc::new(Cell::new(at("2026-04-05T13:59:58-06:00")));
        let published = Rc::new(RefCell::new(Vec::new()));

        let handle = {
            let clock = clock.clone();
            let published = published.clone();
            run_countdown(&ticker, PARTY.to_string(), move || clock.get(), move |left| {
                published.borrow_mut().push(left)
            })
        };
        assert_eq!(published.borrow().len(), 1);
        assert_eq!(published.borrow()[0].seconds, 2);
        assert_eq!(ticker.ticks.borrow()[0].1, TICK_MS);

        clock.set(clock.get() + Duration::seconds(1));
        assert_eq!(ticker.fire(), 1);
        assert_eq!(published.borrow()[1].seconds, 1);

        drop(handle);
        clock.set(clock.get() + Duration::seconds(1));
        assert_eq!(ticker.fire(), 0);
        assert_eq!(published.borrow().len(), 2);
    }

    proptest! {
        #[test]
        fn past_targets_are_done(offset_ms in 0i64..10_000_000_000) {
            let now = at(PARTY) + Duration::milliseconds(offset_ms);
            prop_assert_eq!(time_remaining(PARTY, now), RemainingTime::elapsed());
        }

        #[test]
        fn future_targets_decompose_exactly(offset_ms in 1i64..10_000_000_000) {
            let now = at(PARTY) - Duration::milliseconds(offset_ms);
            let remaining = time_remaining(PARTY, now);
            prop_assert!(!remaining.done);
            prop_assert!(remaining.seconds < 60);
            prop_assert!(remaining.minutes < 60);
            prop_assert!(remaining.hours < 24);
            prop_assert_eq!(remaining.total_seconds(), (offset_ms / 1_000) as u64);
        }
    }
}
