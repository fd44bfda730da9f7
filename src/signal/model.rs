// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl SignalDirection {
    pub const ALL: [SignalDirection; 3] = [SignalDirection::Buy, SignalDirection::Sell, SignalDirection::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyNote {
    pub name: String,
    pub status: String,
    pub detail: String,
}

impl StrategyNote {
    fn new(name: &str, status: &str, detail: &str) -> Self {
        Self {
            name: name.to_string(),
            status: status.to_string(),
            detail: detail.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSignal {
    pub signal: SignalDirection,
    /// Percent, 0-100.
    pub confidence: u32,
    pub entry: String,
    #[serde(rename = "sl")]
    pub stop_loss: String,
    #[serde(rename = "tp")]
    pub take_profit: String,
    pub strategies: Vec<StrategyNote>,
}

impl TradeSignal {
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence)
    }
}

/// Strategy commentary for a direction. Anything but BUY reads as bearish,
/// except volume which only distinguishes NEUTRAL.
pub fn strategies_for(direction: SignalDirection) -> Vec<StrategyNote> {
    let buy = direction == SignalDirection::Buy;
    vec![
        if buy {
            StrategyNote::new(
                "9/20 EMA",
                "Bullish Crossover",
                "9 EMA crossed above 20 EMA, indicating upward momentum.",
            )
        } else {
            StrategyNote::new(
                "9/20 EMA",
                "Bearish Crossover",
                "9 EMA crossed below 20 EMA, indicating downward pressure.",
            )
        },
        if buy {
            StrategyNote::new(
                "RSI Indicator",
                "Oversold Recovery",
                "RSI bouncing from oversold territory, suggesting potential reversal.",
            )
        } else {
            StrategyNote::new(
                "RSI Indicator",
                "Overbought Zone",
                "RSI approaching overbought levels, caution advised.",
            )
        },
        StrategyNote::new(
            "Volume Analysis",
            if direction == SignalDirection::Neutral { "Low Volume" } else { "High Volume" },
            "Recent volume spike confirms the current price action trend.",
        ),
        if buy {
            StrategyNote::new(
                "Support/Resistance",
                "Support Holding",
                "Price holding above key support level with strong buying pressure.",
            )
        } else {
            StrategyNote::new(
                "Support/Resistance",
                "Resistance Test",
                "Price testing major resistance, watch for breakout or rejection.",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SignalDirection::Neutral).unwrap(), r#""NEUTRAL""#);
        assert_eq!(SignalDirection::Buy.to_string(), "BUY");
    }

    #[test]
    fn test_strategies_follow_direction() {
        let buy = strategies_for(SignalDirection::Buy);
        assert_eq!(buy.len(), 4);
        assert_eq!(buy[0].status, "Bullish Crossover");
        assert_eq!(buy[2].status, "High Volume");
        assert_eq!(buy[3].status, "Support Holding");

        let neutral = strategies_for(SignalDirection::Neutral);
        assert_eq!(neutral[1].status, "Overbought Zone");
        assert_eq!(neutral[2].status, "Low Volume");
    }

    #[test]
    fn test_signal_json_uses_short_keys() {
        let signal = TradeSignal {
            signal: SignalDirection::Sell,
            confidence: 80,
            entry: "$41,000 - $41,500".to_string(),
            stop_loss: "$39,500".to_string(),
            take_profit: "$44,000".to_string(),
            strategies: Vec::new(),
        };
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(json["sl"], "$39,500");
        assert_eq!(json["tp"], "$44,000");
        assert_eq!(json["signal"], "SELL");
        assert_eq!(signal.confidence_label(), "80%");
    }
}
