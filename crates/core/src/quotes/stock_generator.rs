//! Synthetic Indian equity feed.
//!
//! There is no upstream for stocks: every refresh draws a fresh random walk
//! around a fixed base price per instrument. Nothing carries over between
//! refreshes.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::quotes_model::StockQuote;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// A static instrument definition.
#[derive(Debug, Clone, Copy)]
pub struct StockListing {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub base_price: f64,
}

const fn listing(
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    base_price: f64,
) -> StockListing {
    StockListing {
        symbol,
        name,
        sector,
        base_price,
    }
}

pub const NAMED_LISTINGS: [StockListing; 50] = [
    listing("RELIANCE", "Reliance Industries Ltd", "Oil & Gas", 2450.0),
    listing("TCS", "Tata Consultancy Services", "IT", 3650.0),
    listing("HDFCBANK", "HDFC Bank Ltd", "Banking", 1580.0),
    listing("INFY", "Infosys Ltd", "IT", 1450.0),
    listing("ICICIBANK", "ICICI Bank Ltd", "Banking", 1120.0),
    listing("HINDUNILVR", "Hindustan Unilever Ltd", "FMCG", 2380.0),
    listing("ITC", "ITC Ltd", "FMCG", 445.0),
    listing("SBIN", "State Bank of India", "Banking", 625.0),
    listing("BHARTIARTL", "Bharti Airtel Ltd", "Telecom", 1550.0),
    listing("KOTAKBANK", "Kotak Mahindra Bank", "Banking", 1780.0),
    listing("LT", "Larsen & Toubro Ltd", "Construction", 3450.0),
    listing("BAJFINANCE", "Bajaj Finance Ltd", "Finance", 6850.0),
    listing("WIPRO", "Wipro Ltd", "IT", 425.0),
    listing("MARUTI", "Maruti Suzuki India", "Automobile", 10800.0),
    listing("ASIANPAINT", "Asian Paints Ltd", "Paints", 2850.0),
    listing("HCLTECH", "HCL Technologies Ltd", "IT", 1240.0),
    listing("AXISBANK", "Axis Bank Ltd", "Banking", 1050.0),
    listing("TITAN", "Titan Company Ltd", "Consumer Goods", 3250.0),
    listing("ULTRACEMCO", "UltraTech Cement Ltd", "Cement", 9500.0),
    listing("ADANIENT", "Adani Enterprises Ltd", "Conglomerate", 2450.0),
    listing("SUNPHARMA", "Sun Pharmaceutical", "Pharma", 1580.0),
    listing("TATAMOTORS", "Tata Motors Ltd", "Automobile", 780.0),
    listing("TATASTEEL", "Tata Steel Ltd", "Steel", 145.0),
    listing("POWERGRID", "Power Grid Corporation", "Power", 285.0),
    listing("NTPC", "NTPC Ltd", "Power", 340.0),
    listing("ONGC", "Oil & Natural Gas Corp", "Oil & Gas", 245.0),
    listing("BAJAJFINSV", "Bajaj Finserv Ltd", "Finance", 1650.0),
    listing("NESTLEIND", "Nestle India Ltd", "FMCG", 2450.0),
    listing("TECHM", "Tech Mahindra Ltd", "IT", 1580.0),
    listing("M&M", "Mahindra & Mahindra", "Automobile", 2850.0),
    listing("JSWSTEEL", "JSW Steel Ltd", "Steel", 880.0),
    listing("DIVISLAB", "Divi's Laboratories", "Pharma", 3650.0),
    listing("DRREDDY", "Dr. Reddy's Laboratories", "Pharma", 5800.0),
    listing("CIPLA", "Cipla Ltd", "Pharma", 1450.0),
    listing("APOLLOHOSP", "Apollo Hospitals", "Healthcare", 6250.0),
    listing("ADANIPORTS", "Adani Ports & SEZ", "Infrastructure", 1180.0),
    listing("GRASIM", "Grasim Industries", "Cement", 2350.0),
    listing("INDUSINDBK", "IndusInd Bank Ltd", "Banking", 980.0),
    listing("EICHERMOT", "Eicher Motors Ltd", "Automobile", 4850.0),
    listing("BPCL", "Bharat Petroleum", "Oil & Gas", 285.0),
    listing("COALINDIA", "Coal India Ltd", "Mining", 420.0),
    listing("BRITANNIA", "Britannia Industries", "FMCG", 4850.0),
    listing("SHREECEM", "Shree Cement Ltd", "Cement", 25000.0),
    listing("HINDALCO", "Hindalco Industries", "Metals", 625.0),
    listing("HEROMOTOCO", "Hero MotoCorp Ltd", "Automobile", 4250.0),
    listing("SBILIFE", "SBI Life Insurance", "Insurance", 1450.0),
    listing("HDFCLIFE", "HDFC Life Insurance", "Insurance", 680.0),
    listing("ICICIGI", "ICICI Lombard General", "Insurance", 1850.0),
    listing("BAJAJ-AUTO", "Bajaj Auto Ltd", "Automobile", 9250.0),
    listing("VEDL", "Vedanta Ltd", "Mining", 445.0),
];

/// Sectors assigned round-robin to the padding instruments.
pub const PADDING_SECTORS: [&str; 5] = ["IT", "Banking", "FMCG", "Pharma", "Auto"];

const PADDING_COUNT: usize = 50;

struct Instrument {
    symbol: String,
    name: String,
    sector: String,
    base_price: f64,
}

fn instruments<R: Rng + ?Sized>(rng: &mut R) -> Vec<Instrument> {
    let named = NAMED_LISTINGS.iter().map(|l| Instrument {
        symbol: l.symbol.to_string(),
        name: l.name.to_string(),
        sector: l.sector.to_string(),
        base_price: l.base_price,
    });

    let first_padding = NAMED_LISTINGS.len() + 1;
    let padding: Vec<Instrument> = (0..PADDING_COUNT)
        .map(|i| {
            let n = first_padding + i;
            Instrument {
                symbol: format!("STOCK{n}"),
                name: format!("Indian Company {n}"),
                sector: PADDING_SECTORS[i % PADDING_SECTORS.len()].to_string(),
                base_price: round_money(rng.gen::<f64>() * 5000.0 + 100.0),
            }
        })
        .collect();

    named.chain(padding).collect()
}

fn round_money(value: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMAL_PRECISION as i32);
    (value * factor).round() / factor
}

fn to_display(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Generates one snapshot of all one hundred instruments.
///
/// The list is ordered as the instrument table with `rank = index + 1`.
/// Display fields are rounded to two decimals; volume and market cap are
/// floored integers.
pub fn generate_stock_quotes<R: Rng + ?Sized>(rng: &mut R) -> Vec<StockQuote> {
    instruments(rng)
        .into_iter()
        .enumerate()
        .map(|(index, instrument)| {
            let base = instrument.base_price;
            let change_percent = (rng.gen::<f64>() - 0.5) * 10.0;
            let current_price = base * (1.0 + change_percent / 100.0);
            let volume = (rng.gen::<f64>() * 10_000_000.0).floor() as u64 + 100_000;
            let market_cap =
                (current_price * (rng.gen::<f64>() * 100_000_000.0 + 10_000_000.0)).floor() as u64;
            let open_price = base * (1.0 + (rng.gen::<f64>() - 0.5) * 0.05);

            StockQuote {
                symbol: instrument.symbol,
                name: instrument.name,
                sector: instrument.sector,
                current_price: to_display(current_price),
                change_percent: to_display(change_percent),
                change_amount: to_display(current_price - base),
                volume,
                market_cap,
                high_24h: to_display(current_price * 1.02),
                low_24h: to_display(current_price * 0.98),
                open_price: to_display(open_price),
                previous_close: to_display(base),
                rank: (index + 1) as u32,
            }
        })
        .collect()
}
