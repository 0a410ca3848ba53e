use yew::prelude::*;

const FLAKE_COUNT: u32 = 18;

#[derive(Clone, Debug, PartialEq)]
pub struct Flake {
    pub left_pct: f64,
    pub size_px: u32,
    pub duration_s: u32,
    /// Negative so the flake starts mid-fall.
    pub delay_s: i32,
    pub opacity: f64,
}

/// Deterministic spread of flakes across the page width.
pub fn flakes(count: u32) -> Vec<Flake> {
    (0..count)
        .map(|i| Flake {
            left_pct: f64::from(i) * 100.0 / f64::from(count),
            size_px: 6 + (i % 6) * 2,
            duration_s: 8 + i % 7,
            delay_s: -((i % 9) as i32),
            opacity: 0.25 + f64::from(i % 5) * 0.12,
        })
        .collect()
}

#[function_component(SnowLayer)]
pub fn snow_layer() -> Html {
    html! {
        <div class="snow-layer" aria-hidden="true">
            { for flakes(FLAKE_COUNT).into_iter().map(|flake| {
                let style = format!(
                    "left: {}%; width: {}px; height: {}px; opacity: {}; animation: snow {}s linear infinite; animation-delay: {}s;",
                    flake.left_pct, flake.size_px, flake.size_px, flake.opacity, flake.duration_s, flake.delay_s,
                );
                html! { <span class="snowflake" style={style}></span> }
            }) }
        </div>
    }
}
