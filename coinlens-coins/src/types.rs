//! Coinranking API response types
//!
//! These types mirror the coinranking responses. Numeric-looking fields
//! (price, market cap, volume) arrive as strings and stay that way on the
//! wire; decimal accessors parse on demand.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Response from GET /coins
#[derive(Debug, Clone, Deserialize)]
pub struct CoinsResponse {
    /// "success" on the happy path
    #[serde(default)]
    pub status: Option<String>,
    pub data: CoinsData,
}

/// Payload of the coin listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoinsData {
    /// Global market stats
    #[serde(default)]
    pub stats: Option<CoinStats>,
    /// Coin listing, in upstream rank order
    #[serde(default)]
    pub coins: Vec<Coin>,
}

/// Global market stats from the coin listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoinStats {
    /// Total number of coins tracked
    #[serde(default)]
    pub total: Option<i64>,

    /// Total number of markets
    #[serde(rename = "totalMarkets", default)]
    pub total_markets: Option<i64>,

    /// Total number of exchanges
    #[serde(rename = "totalExchanges", default)]
    pub total_exchanges: Option<i64>,

    /// Total market cap (string-encoded)
    #[serde(rename = "totalMarketCap", default)]
    pub total_market_cap: Option<String>,

    /// Total 24h volume (string-encoded)
    #[serde(rename = "total24hVolume", default)]
    pub total_24h_volume: Option<String>,
}

/// A coin from the listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Coin {
    /// Unique identifier
    pub uuid: String,

    /// Ticker symbol (e.g., "BTC")
    #[serde(default)]
    pub symbol: Option<String>,

    /// Display name (e.g., "Bitcoin")
    #[serde(default)]
    pub name: Option<String>,

    /// Icon URL
    #[serde(rename = "iconUrl", default)]
    pub icon_url: Option<String>,

    /// Current price in USD (string-encoded)
    #[serde(default)]
    pub price: Option<String>,

    /// Market cap in USD (string-encoded)
    #[serde(rename = "marketCap", default)]
    pub market_cap: Option<String>,

    /// 24h price change in percent (string-encoded, may be negative)
    #[serde(default)]
    pub change: Option<String>,

    /// Listing rank (1 = largest market cap)
    #[serde(default)]
    pub rank: Option<i64>,

    /// 24h volume in USD (string-encoded)
    #[serde(rename = "24hVolume", default)]
    pub volume_24h: Option<String>,

    /// Sparkline price points; upstream nulls out gaps
    #[serde(default)]
    pub sparkline: Vec<Option<String>>,
}

impl Coin {
    /// Price parsed to a decimal, when present and well-formed
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.price.as_deref().and_then(|p| Decimal::from_str(p).ok())
    }

    /// 24h change parsed to a decimal, when present and well-formed
    pub fn change_decimal(&self) -> Option<Decimal> {
        self.change.as_deref().and_then(|c| Decimal::from_str(c).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_coins_response() {
        let payload = json!({
            "status": "success",
            "data": {
                "stats": {
                    "total": 38837,
                    "totalMarkets": 46559,
                    "totalExchanges": 174,
                    "totalMarketCap": "3339280884633",
                    "total24hVolume": "83434117180"
                },
                "coins": [
                    {
                        "uuid": "Qwsogvtv82FCd",
                        "symbol": "BTC",
                        "name": "Bitcoin",
                        "iconUrl": "https://cdn.coinranking.com/bOabBYkcX/bitcoin_btc.svg",
                        "price": "97123.4417",
                        "marketCap": "1923190291245",
                        "change": "-1.52",
                        "rank": 1,
                        "24hVolume": "28417610219",
                        "sparkline": ["97201.11", null, "97123.44"]
                    }
                ]
            }
        });

        let response: CoinsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.status.as_deref(), Some("success"));
        assert_eq!(response.data.coins.len(), 1);

        let coin = &response.data.coins[0];
        assert_eq!(coin.symbol.as_deref(), Some("BTC"));
        assert_eq!(coin.rank, Some(1));
        assert_eq!(coin.sparkline.len(), 3);
        assert!(coin.sparkline[1].is_none());

        let stats = response.data.stats.as_ref().unwrap();
        assert_eq!(stats.total, Some(38837));
    }

    #[test]
    fn test_decimal_accessors() {
        let coin: Coin = serde_json::from_value(json!({
            "uuid": "x",
            "price": "97123.4417",
            "change": "-1.52"
        }))
        .unwrap();

        assert_eq!(coin.price_decimal().unwrap().to_string(), "97123.4417");
        assert!(coin.change_decimal().unwrap().is_sign_negative());

        let bare: Coin = serde_json::from_value(json!({ "uuid": "y" })).unwrap();
        assert!(bare.price_decimal().is_none());
    }
}
