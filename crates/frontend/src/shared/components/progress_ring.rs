use contracts::shared::progress::ProgressArc;
use leptos::prelude::*;

/// Круговой индикатор прогресса (SVG, обводка по `stroke-dashoffset`)
#[component]
pub fn ProgressRing(
    #[prop(into)] percent: Signal<f64>,
    label: &'static str,
    #[prop(optional)] radius: Option<f64>,
) -> impl IntoView {
    let radius = radius.unwrap_or(42.0);
    let size = radius * 2.0 + 16.0;
    let center = size / 2.0;
    let arc = Memo::new(move |_| ProgressArc::from_percent(percent.get(), radius));
    let (c, r, side) = (center.to_string(), radius.to_string(), size.to_string());

    view! {
        <div class="progress-ring">
            <svg width=side.clone() height=side.clone() viewBox=format!("0 0 {} {}", side, side)>
                <circle
                    class="progress-ring__track"
                    cx=c.clone()
                    cy=c.clone()
                    r=r.clone()
                    fill="none"
                    stroke-width="8"
                />
                <circle
                    class="progress-ring__value"
                    cx=c.clone()
                    cy=c.clone()
                    r=r
                    fill="none"
                    stroke-width="8"
                    stroke-linecap="round"
                    stroke-dasharray=move || arc.get().dasharray()
                    stroke-dashoffset=move || arc.get().dashoffset()
                    transform=format!("rotate(-90 {} {})", center, center)
                />
                <text
                    x=c.clone()
                    y=c
                    text-anchor="middle"
                    dominant-baseline="central"
                    class="progress-ring__text"
                >
                    {move || format!("{:.0}%", arc.get().percent)}
                </text>
            </svg>
            <div class="progress-ring__label">{label}</div>
        </div>
    }
}
