//! Dioxus-based issue infographic
//!
//! A pure Rust frontend that compiles to WebAssembly.
//! 100% Rust - no manually written JS/TS.
//!
//! The dashboard owns a single piece of state, the selected severity tier.
//! Everything else (max mentions, the visible subset, bar widths) is derived
//! from the static dataset in `issue-infographic-core`.

use dioxus::prelude::*;
use issue_infographic_core::view::{bar_row, filter_buttons, table_row};
use issue_infographic_core::{
    filtered_issues, max_mentions, DashboardConfig, FilterState, IssueRecord, SeverityTier,
    FOOTER, HERO, ISSUES,
};
use tracing::{debug, info, warn};

mod styles;

use styles::*;

fn main() {
    tracing_wasm::set_as_global_default();
    mount(&DashboardConfig::default());
}

/// Attach the dashboard to its host element. A missing element is not an
/// error: nothing is mounted and the page is left as it is.
fn mount(config: &DashboardConfig) {
    if !host_element_exists(&config.host_element_id) {
        warn!(
            "Host element #{} not found, dashboard not mounted",
            config.host_element_id
        );
        return;
    }

    info!("Mounting dashboard into #{}", config.host_element_id);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus_web::Config::new().rootname(config.host_element_id.clone()))
        .launch(App);
}

fn host_element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .is_some()
}

#[component]
fn App() -> Element {
    let mut filter = use_signal(FilterState::new);

    // The dataset never changes, so this is computed once
    let max = use_memo(|| max_mentions(ISSUES));
    let visible = use_memo(move || filtered_issues(ISSUES, filter.read().selected()));

    rsx! {
        div { style: "{app_style()}",
            main { style: "{container_style()}",
                Hero {}

                FilterBar {
                    selected: filter.read().selected(),
                    on_toggle: move |tier: SeverityTier| {
                        let previous = filter.read().selected();
                        filter.write().toggle(tier);
                        debug!(?previous, current = ?filter.read().selected(), "Filter toggled");
                    }
                }

                BarChart { issues: visible(), max_mentions: max() }
                CardList { issues: visible() }
                DataTable { issues: visible() }
            }

            Footer {}
        }
    }
}

/// Static summary; the highlighted facts are authored copy, not rankings
#[component]
fn Hero() -> Element {
    rsx! {
        header { style: "{hero_style()}",
            h1 { style: "{hero_heading_style()}", "{HERO.heading}" }
            p { style: "{hero_summary_style()}", "{HERO.summary}" }

            div { style: "{hero_facts_style()}",
                div { style: "{hero_fact_style(SeverityTier::Sev2)}",
                    div { style: "{hero_fact_label_style()}", "{HERO.most_mentioned.label}" }
                    div { style: "{hero_fact_value_style()}", "{HERO.most_mentioned.value}" }
                }
                div { style: "{hero_fact_style(SeverityTier::Sev1)}",
                    div { style: "{hero_fact_label_style()}", "{HERO.top_blocker.label}" }
                    div { style: "{hero_fact_value_style()}", "{HERO.top_blocker.value}" }
                }
            }
        }
    }
}

#[component]
fn FilterBar(selected: Option<SeverityTier>, on_toggle: EventHandler<SeverityTier>) -> Element {
    rsx! {
        nav { style: "{filter_bar_style()}",
            for btn in filter_buttons(selected) {
                button {
                    key: "{btn.tier}",
                    style: "{filter_btn_style(btn.tier, btn.active)}",
                    "aria-pressed": "{btn.active}",
                    onclick: move |_| on_toggle.call(btn.tier),
                    "{btn.label}"
                }
            }
        }
    }
}

#[component]
fn BarChart(issues: Vec<&'static IssueRecord>, max_mentions: u32) -> Element {
    rsx! {
        section { style: "{section_style()}",
            h2 { style: "{section_title_style()}", "Mentions" }

            if issues.is_empty() {
                EmptyTier {}
            }

            for row in issues.iter().map(|issue| bar_row(issue, max_mentions)) {
                div { key: "{row.id}", style: "{bar_row_style()}",
                    span { style: "{bar_label_style()}", title: "{row.title}", "{row.title}" }
                    div { style: "{bar_track_style()}",
                        div { style: "{bar_fill_style(row.tier, row.width_percent)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CardList(issues: Vec<&'static IssueRecord>) -> Element {
    rsx! {
        section { style: "{section_style()}",
            h2 { style: "{section_title_style()}", "What members are saying" }

            if issues.is_empty() {
                EmptyTier {}
            }

            div { style: "{card_grid_style()}",
                for issue in issues.iter() {
                    article { key: "{issue.id}", style: "{card_style(issue.severity)}",
                        h3 { style: "{card_title_style()}", "{issue.title}" }
                        div { style: "{severity_label_style(issue.severity)}", "{issue.severity_label}" }
                        div { style: "{muted_style()}",
                            "{issue.mentions} mentions · {issue.prevalence} of reviews"
                        }
                        blockquote { style: "{quote_style()}", "“{issue.quote}”" }
                    }
                }
            }
        }
    }
}

#[component]
fn DataTable(issues: Vec<&'static IssueRecord>) -> Element {
    rsx! {
        section { style: "{section_style()}",
            h2 { style: "{section_title_style()}", "All issues" }

            table { style: "{table_style()}",
                thead {
                    tr {
                        th { style: "{th_style()}", "Issue" }
                        th { style: "{th_style()}", "Severity" }
                        th { style: "{th_style()}", "Mentions" }
                        th { style: "{th_style()}", "Prevalence" }
                    }
                }
                tbody {
                    for row in issues.iter().map(|issue| table_row(issue)) {
                        tr { key: "{row.id}",
                            td { style: "{td_style()}", "{row.title}" }
                            td { style: "{td_style()}", "{row.severity_name}" }
                            td { style: "{td_style()}", "{row.mentions}" }
                            td { style: "{td_style()}", "{row.prevalence}" }
                        }
                    }
                }
            }

            if issues.is_empty() {
                EmptyTier {}
            }
        }
    }
}

#[component]
fn EmptyTier() -> Element {
    rsx! {
        div { style: "{empty_style()}", "No issues reported in this tier." }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { style: "{footer_style()}",
            p { "{FOOTER}" }
        }
    }
}
