use shared::{MovieStatsDto, ScreeningStatsDto};

use crate::domain::{MovieStats, ScreeningStats};

pub struct StatsMapper;

impl StatsMapper {
    /// Amount with the currency symbol and two decimals, e.g. "$2340.00"
    pub fn format_amount(currency_symbol: &str, amount: f64) -> String {
        format!("{}{:.2}", currency_symbol, amount)
    }

    pub fn screening_to_dto(stats: &ScreeningStats, currency_symbol: &str) -> ScreeningStatsDto {
        ScreeningStatsDto {
            screening_id: stats.screening.id().to_string(),
            summary: stats.screening.summary(),
            tickets_sold: stats.tickets_sold,
            price_per_ticket: stats.price_per_ticket,
            revenue: stats.revenue,
            formatted_revenue: Self::format_amount(currency_symbol, stats.revenue),
        }
    }

    pub fn movie_to_dto(stats: &MovieStats, currency_symbol: &str) -> MovieStatsDto {
        MovieStatsDto {
            movie_id: stats.movie_id.clone(),
            title: stats.title.clone(),
            screenings: stats
                .screenings
                .iter()
                .map(|s| Self::screening_to_dto(s, currency_symbol))
                .collect(),
            total_tickets: stats.total_tickets,
            total_revenue: stats.total_revenue,
            formatted_total_revenue: Self::format_amount(currency_symbol, stats.total_revenue),
        }
    }
}
