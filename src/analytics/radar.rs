//! Relative comparison of the top performers.
//!
//! The radar chart compares the five highest-volume representatives on a
//! 0-100 scale per axis, where 100 is the best value among those five. Each
//! per-count axis is floored at 1 before dividing, so an all-zero axis
//! scores 0 instead of dividing by zero. Win rate is already a percentage
//! and passes through unscaled.

use serde::{Deserialize, Serialize};

use super::dimensions::{top_by_volume, SalespersonPerformance};

const RADAR_TOP_N: usize = 5;

/// Rescaled axes for one representative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadarScore {
    /// First token of the name, short enough for a radar vertex.
    pub label: String,
    pub volume: u32,
    pub deals: u32,
    pub won: u32,
    pub win_rate: f64,
}

pub fn radar_scores(rows: &[SalespersonPerformance]) -> Vec<RadarScore> {
    let top = top_by_volume(rows, RADAR_TOP_N);
    let max_volume = top.iter().map(|row| row.volume).fold(1.0_f64, f64::max);
    let max_deals = top
        .iter()
        .map(|row| row.deals as f64)
        .fold(1.0_f64, f64::max);
    let max_won = top.iter().map(|row| row.won as f64).fold(1.0_f64, f64::max);
    top.iter()
        .map(|row| RadarScore {
            label: row.salesperson.short_name().to_string(),
            volume: rescale(row.volume, max_volume),
            deals: rescale(row.deals as f64, max_deals),
            won: rescale(row.won as f64, max_won),
            win_rate: row.win_rate,
        })
        .collect()
}

fn rescale(value: f64, max: f64) -> u32 {
    (value / max * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Salesperson;

    fn row(salesperson: Salesperson, deals: usize, won: usize, volume: f64) -> SalespersonPerformance {
        SalespersonPerformance {
            salesperson,
            deals,
            won,
            volume,
            win_rate: if deals > 0 {
                (won as f64 / deals as f64 * 1000.0).round() / 10.0
            } else {
                0.0
            },
        }
    }

    #[test]
    fn test_leader_scores_100_per_axis() {
        let rows = vec![
            row(Salesperson::PoliMauro, 10, 5, 1000.0),
            row(Salesperson::DuranteLuca, 4, 2, 500.0),
        ];
        let scores = radar_scores(&rows);
        assert_eq!(scores[0].volume, 100);
        assert_eq!(scores[0].deals, 100);
        assert_eq!(scores[0].won, 100);
        assert_eq!(scores[1].volume, 50);
        assert_eq!(scores[1].deals, 40);
        assert_eq!(scores[1].won, 40);
    }

    #[test]
    fn test_all_zero_axis_scores_zero() {
        let rows = vec![
            row(Salesperson::PoliMauro, 3, 0, 0.0),
            row(Salesperson::DuranteLuca, 2, 0, 0.0),
        ];
        let scores = radar_scores(&rows);
        assert!(scores.iter().all(|score| score.volume == 0));
        assert!(scores.iter().all(|score| score.won == 0));
        assert_eq!(scores[0].deals, 100);
    }

    #[test]
    fn test_win_rate_passes_through() {
        let rows = vec![row(Salesperson::MazzolaLorena, 4, 3, 800.0)];
        let scores = radar_scores(&rows);
        assert_eq!(scores[0].win_rate, 75.0);
    }

    #[test]
    fn test_takes_at_most_five() {
        let rows: Vec<SalespersonPerformance> = Salesperson::ALL
            .iter()
            .enumerate()
            .map(|(i, &person)| row(person, 1, 0, i as f64))
            .collect();
        assert_eq!(radar_scores(&rows).len(), 5);
    }

    #[test]
    fn test_labels_are_short_names() {
        let rows = vec![row(Salesperson::LazzarottoGiampaolo, 1, 1, 10.0)];
        let scores = radar_scores(&rows);
        assert_eq!(scores[0].label, "LAZZAROTTO");
    }
}
