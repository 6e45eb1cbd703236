//! Inline styles - no external CSS files
//!
//! Colors are never defined here. Every color is a `var(--...)` reference
//! resolved by the host page stylesheet, including the per-tier
//! `--sev-1`..`--sev-4` variables.

use issue_infographic_core::SeverityTier;

// ============================================================================
// Layout
// ============================================================================

pub fn app_style() -> &'static str {
    "min-height: 100vh; \
     font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif; \
     font-size: 14px; \
     background: var(--bg-primary); \
     color: var(--text-primary); \
     line-height: 1.5;"
}

pub fn container_style() -> &'static str {
    "max-width: 1100px; \
     margin: 0 auto; \
     padding: 1.5rem 2rem;"
}

pub fn section_style() -> &'static str {
    "background: var(--bg-secondary); \
     border: 1px solid var(--border-color); \
     border-radius: 8px; \
     padding: 1rem 1.25rem; \
     margin-bottom: 1.5rem;"
}

pub fn section_title_style() -> &'static str {
    "font-size: 1rem; \
     font-weight: 600; \
     margin: 0 0 0.75rem 0;"
}

// ============================================================================
// Hero
// ============================================================================

pub fn hero_style() -> &'static str {
    "padding: 2rem 1.5rem; \
     margin-bottom: 1.5rem; \
     border-radius: 12px; \
     border: 1px solid var(--border-color); \
     background: linear-gradient(135deg, var(--bg-secondary) 0%, var(--bg-tertiary) 100%);"
}

pub fn hero_heading_style() -> &'static str {
    "font-size: 1.8rem; \
     font-weight: 700; \
     margin: 0 0 0.5rem 0;"
}

pub fn hero_summary_style() -> &'static str {
    "color: var(--text-secondary); \
     margin: 0 0 1.25rem 0;"
}

pub fn hero_facts_style() -> &'static str {
    "display: flex; \
     flex-wrap: wrap; \
     gap: 1rem;"
}

/// Highlighted fact box, accented with a tier color
pub fn hero_fact_style(tier: SeverityTier) -> String {
    format!(
        "flex: 1 1 240px; \
         padding: 0.75rem 1rem; \
         border-radius: 8px; \
         background: var(--bg-primary); \
         border-left: 4px solid {};",
        tier.css_var()
    )
}

pub fn hero_fact_label_style() -> &'static str {
    "font-size: 0.75rem; \
     text-transform: uppercase; \
     letter-spacing: 0.05em; \
     color: var(--text-muted);"
}

pub fn hero_fact_value_style() -> &'static str {
    "font-weight: 600; \
     font-size: 1rem;"
}

// ============================================================================
// Filter bar
// ============================================================================

pub fn filter_bar_style() -> &'static str {
    "display: flex; \
     flex-wrap: wrap; \
     gap: 0.5rem; \
     margin-bottom: 1.5rem;"
}

/// Filter button. Active buttons are filled with the tier color.
pub fn filter_btn_style(tier: SeverityTier, active: bool) -> String {
    let color = tier.css_var();
    let (bg, fg) = if active {
        (color, "var(--bg-primary)")
    } else {
        ("transparent", color)
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {color}; \
         padding: 0.35rem 0.9rem; \
         font-family: inherit; \
         font-size: 0.85rem; \
         font-weight: 600; \
         border-radius: 999px; \
         cursor: pointer;"
    )
}

// ============================================================================
// Bar chart
// ============================================================================

pub fn bar_row_style() -> &'static str {
    "display: grid; \
     grid-template-columns: 260px 1fr; \
     align-items: center; \
     gap: 0.75rem; \
     margin-bottom: 0.4rem;"
}

pub fn bar_label_style() -> &'static str {
    "font-size: 0.85rem; \
     white-space: nowrap; \
     overflow: hidden; \
     text-overflow: ellipsis;"
}

pub fn bar_track_style() -> &'static str {
    "height: 14px; \
     border-radius: 7px; \
     background: var(--bg-tertiary); \
     overflow: hidden;"
}

pub fn bar_fill_style(tier: SeverityTier, width_percent: u32) -> String {
    format!(
        "height: 100%; \
         width: {width_percent}%; \
         background: {}; \
         border-radius: 7px;",
        tier.css_var()
    )
}

// ============================================================================
// Cards
// ============================================================================

pub fn card_grid_style() -> &'static str {
    "display: grid; \
     grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); \
     gap: 1rem;"
}

pub fn card_style(tier: SeverityTier) -> String {
    format!(
        "background: var(--bg-primary); \
         border: 1px solid var(--border-color); \
         border-top: 4px solid {}; \
         border-radius: 8px; \
         padding: 0.9rem 1rem;",
        tier.css_var()
    )
}

pub fn card_title_style() -> &'static str {
    "font-weight: 600; \
     margin: 0 0 0.25rem 0;"
}

pub fn severity_label_style(tier: SeverityTier) -> String {
    format!(
        "font-size: 0.75rem; \
         font-weight: 600; \
         color: {};",
        tier.css_var()
    )
}

pub fn muted_style() -> &'static str {
    "color: var(--text-muted); \
     font-size: 0.8rem;"
}

pub fn quote_style() -> &'static str {
    "margin: 0.6rem 0 0 0; \
     padding-left: 0.75rem; \
     border-left: 2px solid var(--border-color); \
     font-style: italic; \
     color: var(--text-secondary);"
}

// ============================================================================
// Table
// ============================================================================

pub fn table_style() -> &'static str {
    "width: 100%; \
     border-collapse: collapse; \
     font-size: 0.85rem;"
}

pub fn th_style() -> &'static str {
    "text-align: left; \
     padding: 0.5rem 0.75rem; \
     color: var(--text-secondary); \
     font-weight: 500; \
     text-transform: uppercase; \
     font-size: 0.75rem; \
     border-bottom: 1px solid var(--border-color);"
}

pub fn td_style() -> &'static str {
    "padding: 0.5rem 0.75rem; \
     border-bottom: 1px solid var(--border-color);"
}

pub fn empty_style() -> &'static str {
    "padding: 1rem; \
     text-align: center; \
     color: var(--text-muted);"
}

// ============================================================================
// Footer
// ============================================================================

pub fn footer_style() -> &'static str {
    "text-align: center; \
     padding: 1.5rem; \
     color: var(--text-muted); \
     font-size: 0.8rem;"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_only_reference_variables() {
        for tier in SeverityTier::ALL {
            for style in [
                filter_btn_style(tier, true),
                filter_btn_style(tier, false),
                bar_fill_style(tier, 50),
                card_style(tier),
            ] {
                assert!(!style.contains('#'), "literal color in {style}");
                assert!(style.contains(tier.css_var()));
            }
        }
    }

    #[test]
    fn test_bar_fill_width() {
        assert!(bar_fill_style(SeverityTier::Sev1, 100).contains("width: 100%;"));
        assert!(bar_fill_style(SeverityTier::Sev4, 0).contains("width: 0%;"));
    }
}
