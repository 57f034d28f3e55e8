//! Pie Breakdown Component
//!
//! Draws a `PieChart` as a conic-gradient disc with a legend.

use leptos::prelude::*;
use libtask_client::reports::PieChart;

#[component]
pub fn PieBreakdown(#[prop(into)] chart: Signal<PieChart>) -> impl IntoView {
    view! {
        <div class="pie">
            <div
                class="pie-disc"
                style=move || format!("background: {};", chart.with(PieChart::gradient))
            ></div>
            {move || match chart.get() {
                PieChart::Empty { label } => view! {
                    <p class="pie-empty">{label}</p>
                }
                .into_any(),
                PieChart::Slices { total, slices } => view! {
                    <ul class="pie-legend">
                        {slices.into_iter().map(|slice| view! {
                            <li>
                                <span class="swatch" style=format!("background: {};", slice.color)></span>
                                {format!("{}: {} ({:.1}%)", slice.label, slice.value, slice.percent)}
                            </li>
                        }).collect_view()}
                        <li class="pie-total">{format!("Total: {}", total)}</li>
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
