//! HTML rendering of the dashboard view model

use std::fmt::{self, Write};

use sentinel_core::DataOrigin;
use sentinel_view::{BlockedTable, DashboardView, DataSources, TrendDirection};

/// Notice shown when any section is on fallback data
pub const DEGRADED_NOTICE: &str =
    "Some metrics are temporarily unavailable; showing fallback data for:";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem;background:#f8fafc;color:#0f172a}\
.cards{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem}\
.card{background:#fff;border-radius:8px;padding:1rem;box-shadow:0 1px 2px #0001}\
.trend-up{color:#16a34a}.trend-down{color:#dc2626}\
.notice{background:#fef3c7;border:1px solid #f59e0b;padding:.5rem 1rem;border-radius:6px}\
.bar{background:#6366f1;height:1rem;border-radius:4px}\
table{width:100%;border-collapse:collapse}td,th{padding:.4rem;text-align:left;border-bottom:1px solid #e2e8f0}\
.badge-success{color:#16a34a}.badge-warning{color:#d97706}.badge-danger{color:#dc2626}\
.empty{color:#64748b;text-align:center;padding:2rem}";

/// Render the full dashboard page
pub fn render_dashboard(view: &DashboardView) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(8 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\"><head><meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", escape(&view.title))?;
    writeln!(html, "<style>{}</style></head><body>", STYLE)?;
    writeln!(html, "<h1>{}</h1>", escape(&view.title))?;
    writeln!(html, "<p>{}</p>", escape(&view.subtitle))?;

    render_notice(&mut html, &view.data_sources)?;

    writeln!(html, "<section class=\"cards\">")?;
    for card in &view.cards {
        let trend_class = match card.trend.direction {
            TrendDirection::Up => "trend-up",
            TrendDirection::Down => "trend-down",
        };
        writeln!(
            html,
            "<div class=\"card\"><h3>{}</h3><p class=\"value\">{}</p><p class=\"{}\">{}</p></div>",
            escape(&card.title),
            escape(&card.value),
            trend_class,
            escape(&card.trend.text)
        )?;
    }
    writeln!(html, "</section>")?;

    writeln!(html, "<section><h2>Revenue by Provider</h2>")?;
    let max_revenue = view
        .revenue_chart
        .iter()
        .map(|point| point.revenue)
        .fold(0.0_f64, f64::max);
    for point in &view.revenue_chart {
        let width = if max_revenue > 0.0 {
            (point.revenue / max_revenue * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        writeln!(
            html,
            "<div><span>{}</span> <span>{:.2}</span><div class=\"bar\" style=\"width:{:.1}%\"></div></div>",
            escape(&point.name),
            point.revenue,
            width
        )?;
    }
    writeln!(html, "</section>")?;

    writeln!(html, "<section><h2>Insights</h2><dl>")?;
    for insight in &view.insights {
        writeln!(
            html,
            "<dt>{}</dt><dd>{}</dd>",
            escape(&insight.label),
            escape(&insight.value)
        )?;
    }
    writeln!(html, "</dl></section>")?;

    writeln!(html, "<section><h2>Blocked Transactions</h2>")?;
    match &view.blocked {
        BlockedTable::Empty { message } => {
            writeln!(html, "<p class=\"empty\">{}</p>", escape(message))?;
        }
        BlockedTable::Rows { rows } => {
            writeln!(
                html,
                "<table><thead><tr><th>Transaction ID</th><th>User</th><th>Amount</th>\
                 <th>Risk</th><th>Provider</th><th>Time</th></tr></thead><tbody>"
            )?;
            for row in rows {
                writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{}</td>\
                     <td><span class=\"badge-{}\">{} ({})</span></td><td>{}</td><td>{}</td></tr>",
                    escape(&row.id),
                    escape(&row.user_id),
                    escape(&row.amount),
                    row.badge,
                    escape(&row.risk.label),
                    escape(&row.risk_percent),
                    escape(&row.provider),
                    escape(&row.timestamp)
                )?;
            }
            writeln!(html, "</tbody></table>")?;
        }
    }
    writeln!(html, "</section>")?;

    writeln!(html, "</body></html>")?;
    Ok(html)
}

fn render_notice(html: &mut String, sources: &DataSources) -> fmt::Result {
    if !sources.degraded {
        return Ok(());
    }

    let sections: Vec<&str> = [
        ("stats", sources.dashboard_stats),
        ("blocked transactions", sources.blocked_transactions),
        ("revenue", sources.revenue_metrics),
    ]
    .into_iter()
    .filter(|(_, origin)| *origin == DataOrigin::Fallback)
    .map(|(name, _)| name)
    .collect();

    writeln!(
        html,
        "<p class=\"notice\">{} {}</p>",
        DEGRADED_NOTICE,
        sections.join(", ")
    )
}

/// Escape text for HTML element and attribute content
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
