//! Risk-event calendar generator.

use chrono::{Duration, NaiveDate};

use crate::models::{EventImpact, RiskEvent};

struct EventTemplate {
    days_ahead: i64,
    title: &'static str,
    category: &'static str,
    impact: EventImpact,
    description: &'static str,
}

const EVENT_TEMPLATES: [EventTemplate; 12] = [
    EventTemplate {
        days_ahead: 2,
        title: "US CPI Release",
        category: "Economic",
        impact: EventImpact::High,
        description: "Consumer Price Index data, the key inflation gauge for Fed policy",
    },
    EventTemplate {
        days_ahead: 5,
        title: "Fed FOMC Minutes",
        category: "Monetary",
        impact: EventImpact::High,
        description: "Federal Reserve meeting minutes may signal rate path changes",
    },
    EventTemplate {
        days_ahead: 7,
        title: "US Retail Sales",
        category: "Economic",
        impact: EventImpact::Medium,
        description: "Monthly consumer spending report impacts growth outlook",
    },
    EventTemplate {
        days_ahead: 10,
        title: "RBI Policy Decision",
        category: "Monetary",
        impact: EventImpact::High,
        description: "Reserve Bank of India rate decision affects INR gold prices",
    },
    EventTemplate {
        days_ahead: 12,
        title: "China PMI Data",
        category: "Economic",
        impact: EventImpact::Medium,
        description: "Manufacturing activity in the world's largest gold consumer",
    },
    EventTemplate {
        days_ahead: 14,
        title: "US PPI Release",
        category: "Economic",
        impact: EventImpact::Medium,
        description: "Producer Price Index, an upstream inflation indicator",
    },
    EventTemplate {
        days_ahead: 18,
        title: "ECB Rate Decision",
        category: "Monetary",
        impact: EventImpact::High,
        description: "European Central Bank rate decision affects EUR/USD and gold",
    },
    EventTemplate {
        days_ahead: 21,
        title: "US GDP (Q4)",
        category: "Economic",
        impact: EventImpact::High,
        description: "Quarterly GDP growth, a broad economic health indicator",
    },
    EventTemplate {
        days_ahead: 25,
        title: "BoJ Policy Meeting",
        category: "Monetary",
        impact: EventImpact::Medium,
        description: "Bank of Japan policy and its yen carry trade impact on gold",
    },
    EventTemplate {
        days_ahead: 28,
        title: "US PCE Inflation",
        category: "Economic",
        impact: EventImpact::High,
        description: "The Fed's preferred inflation measure, critical for rate expectations",
    },
    EventTemplate {
        days_ahead: 30,
        title: "India Gold Import Data",
        category: "Supply",
        impact: EventImpact::Low,
        description: "Monthly physical gold import figures from India",
    },
    EventTemplate {
        days_ahead: 35,
        title: "OPEC+ Meeting",
        category: "Geopolitical",
        impact: EventImpact::Medium,
        description: "Oil supply decisions indirectly affect inflation and gold demand",
    },
];

/// Project the fixed event calendar forward from the last historical date.
pub fn generate_risk_events(last_date: NaiveDate) -> Vec<RiskEvent> {
    EVENT_TEMPLATES
        .iter()
        .map(|t| RiskEvent {
            date: last_date + Duration::days(t.days_ahead),
            title: t.title.to_string(),
            category: t.category.to_string(),
            impact: t.impact,
            description: t.description.to_string(),
        })
        .collect()
}
