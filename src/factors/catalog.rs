//! Static catalog of factor categories and their sub-factors.
//!
//! The catalog is a fixed ordered table, not an extensible registry. Order
//! matters twice over: the signal draw consumes the random stream in
//! catalog order, and residual weight corrections break largest-sibling
//! ties by first declaration.

use crate::models::{CategoryId, TimeHorizon};

use TimeHorizon::{Intraday, Longterm, Swing};

/// One leaf indicator template with its default percentage weight.
pub struct SubFactorTemplate {
    pub name: &'static str,
    /// Default percentage points within the category (0-20).
    pub weight: f64,
    pub detail: &'static str,
    pub horizons: &'static [TimeHorizon],
}

/// One category template. `default_weight` is a 0-1 fraction of the total.
pub struct CategoryTemplate {
    pub id: CategoryId,
    pub name: &'static str,
    pub icon: &'static str,
    pub default_weight: f64,
    pub sub_factors: &'static [SubFactorTemplate],
}

pub const TEMPLATES: [CategoryTemplate; 6] = [
    CategoryTemplate {
        id: CategoryId::GlobalMacro,
        name: "Global Macro",
        icon: "Globe",
        default_weight: 0.35,
        sub_factors: &[
            SubFactorTemplate {
                name: "US 10Y Real Yield",
                weight: 10.0,
                detail: "Real yield inversely correlated with gold; rising yields pressure gold",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Treasury Yield Curve",
                weight: 3.0,
                detail: "Yield curve shape signals recession risk and safe-haven demand",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Inflation Expectations",
                weight: 5.0,
                detail: "Breakeven inflation rates drive gold as an inflation hedge",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Fed Rate Expectations",
                weight: 5.0,
                detail: "Fed funds futures pricing for next meeting and forward path",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "DXY Index",
                weight: 4.0,
                detail: "US Dollar Index inversely correlated with gold prices",
                horizons: &[Intraday, Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Geopolitical Tensions",
                weight: 1.5,
                detail: "Global conflict index and geopolitical risk premium",
                horizons: &[Intraday, Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Global Liquidity",
                weight: 3.0,
                detail: "Central bank balance sheet expansion supports gold",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "GDP Growth",
                weight: 1.5,
                detail: "Slowing GDP growth increases safe-haven appeal",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "Unemployment Rate",
                weight: 1.0,
                detail: "Rising unemployment signals economic weakness, bullish for gold",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "M2 Money Supply",
                weight: 1.0,
                detail: "Monetary expansion creates inflation risk, supports gold",
                horizons: &[Longterm],
            },
        ],
    },
    CategoryTemplate {
        id: CategoryId::IndiaMarket,
        name: "India Market Pulse",
        icon: "IndianRupee",
        default_weight: 0.15,
        sub_factors: &[
            SubFactorTemplate {
                name: "INR-USD Exchange Rate",
                weight: 6.0,
                detail: "Rupee depreciation directly boosts INR gold prices",
                horizons: &[Intraday, Swing, Longterm],
            },
            SubFactorTemplate {
                name: "RBI Policy Stance",
                weight: 2.0,
                detail: "RBI rate decisions and liquidity measures affect gold demand",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "MCX-COMEX Basis",
                weight: 3.0,
                detail: "Premium/discount between MCX and COMEX gold futures",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "Local Premium/Discount",
                weight: 2.0,
                detail: "India physical gold premium over international price",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "Import Duty Effect",
                weight: 1.0,
                detail: "Changes in gold import duty impact domestic prices",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "Festival/Wedding Season",
                weight: 1.0,
                detail: "Seasonal demand spikes during Diwali, Akshaya Tritiya, wedding season",
                horizons: &[Swing, Longterm],
            },
        ],
    },
    CategoryTemplate {
        id: CategoryId::MarketMicrostructure,
        name: "Market Microstructure & Flows",
        icon: "BarChart3",
        default_weight: 0.20,
        sub_factors: &[
            SubFactorTemplate {
                name: "Open Interest Change",
                weight: 3.0,
                detail: "Rising OI with price confirms trend strength",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "OI + Price Divergence",
                weight: 3.0,
                detail: "Divergence between OI and price signals potential reversal",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "Volume Delta",
                weight: 2.5,
                detail: "Buy vs sell volume imbalance indicates directional pressure",
                horizons: &[Intraday],
            },
            SubFactorTemplate {
                name: "Large Trader Positioning",
                weight: 2.5,
                detail: "Institutional order flow and block trade patterns",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "VWAP Deviation",
                weight: 1.5,
                detail: "Price relative to VWAP signals intraday fair value",
                horizons: &[Intraday],
            },
            SubFactorTemplate {
                name: "Bid-Ask Spread",
                weight: 1.5,
                detail: "Widening spreads indicate stress; tight spreads mean confidence",
                horizons: &[Intraday],
            },
            SubFactorTemplate {
                name: "COT Net Speculative",
                weight: 3.0,
                detail: "CFTC Commitment of Traders speculative net positioning",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "ETF Flows (GLD/IAU)",
                weight: 3.0,
                detail: "Gold ETF inflows/outflows signal institutional sentiment",
                horizons: &[Swing, Longterm],
            },
        ],
    },
    CategoryTemplate {
        id: CategoryId::Technical,
        name: "Technical Indicators",
        icon: "TrendingUp",
        default_weight: 0.15,
        sub_factors: &[
            SubFactorTemplate {
                name: "Moving Average Alignment",
                weight: 4.0,
                detail: "5/20/50-day MA crossovers and alignment direction",
                horizons: &[Intraday, Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Support/Resistance",
                weight: 3.0,
                detail: "Key price levels from historical pivots and Fibonacci",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "RSI (14-day)",
                weight: 2.0,
                detail: "Overbought >70, oversold <30 momentum oscillator",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "ATR Volatility",
                weight: 2.0,
                detail: "Average True Range indicates current volatility regime",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "Momentum (ROC)",
                weight: 2.0,
                detail: "Rate of change and momentum divergence signals",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "Volume Trend",
                weight: 2.0,
                detail: "Volume confirming or diverging from price trend",
                horizons: &[Intraday, Swing],
            },
        ],
    },
    CategoryTemplate {
        id: CategoryId::VolatilityRisk,
        name: "Volatility & Risk",
        icon: "Shield",
        default_weight: 0.10,
        sub_factors: &[
            SubFactorTemplate {
                name: "Implied Volatility",
                weight: 3.0,
                detail: "Gold options implied vol signals expected future moves",
                horizons: &[Intraday, Swing],
            },
            SubFactorTemplate {
                name: "Historical Volatility",
                weight: 2.0,
                detail: "Realized volatility over trailing 20/60 day windows",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Volatility Skew",
                weight: 2.0,
                detail: "Put/call skew indicates directional fear in options market",
                horizons: &[Swing],
            },
            SubFactorTemplate {
                name: "Event Risk Premium",
                weight: 3.0,
                detail: "Elevated risk ahead of FOMC, NFP, CPI releases",
                horizons: &[Intraday, Swing],
            },
        ],
    },
    CategoryTemplate {
        id: CategoryId::BehavioralSupply,
        name: "Behavioral & Physical Supply-Demand",
        icon: "Scale",
        default_weight: 0.05,
        sub_factors: &[
            SubFactorTemplate {
                name: "COT Sentiment Reports",
                weight: 1.0,
                detail: "Commercial hedger vs speculator positioning extremes",
                horizons: &[Swing, Longterm],
            },
            SubFactorTemplate {
                name: "Retail Sentiment",
                weight: 0.5,
                detail: "Retail investor positioning as a contrarian indicator",
                horizons: &[Swing],
            },
            SubFactorTemplate {
                name: "Central Bank Buying",
                weight: 1.0,
                detail: "Global central bank gold reserve accumulation trends",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "Jewelry Demand",
                weight: 0.5,
                detail: "Consumer jewelry demand from India, China, Middle East",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "Mine Production",
                weight: 0.5,
                detail: "Global gold mining output and all-in sustaining costs",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "Recycling Supply",
                weight: 0.5,
                detail: "Scrap gold supply increases when prices are high",
                horizons: &[Longterm],
            },
            SubFactorTemplate {
                name: "China Demand",
                weight: 1.0,
                detail: "Shanghai Gold Exchange withdrawals and PBOC buying",
                horizons: &[Swing, Longterm],
            },
        ],
    },
];

/// Template for one category.
pub fn category_template(id: CategoryId) -> &'static CategoryTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .expect("all CategoryId variants are in TEMPLATES")
}
