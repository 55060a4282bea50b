//! Edge weights as a blend of normalized ticket price and distance

use crate::{constants::Weight, util::math::normalize};

/// Coefficients of the blended edge weight.
///
/// Both coefficients have to be non-negative and sum up to 1.0 so that the
/// resulting weights stay in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPreferences {
    pub weight_ticket: f64,
    pub weight_distance: f64,
}

impl WeightPreferences {
    pub fn new(weight_ticket: f64, weight_distance: f64) -> Self {
        WeightPreferences {
            weight_ticket,
            weight_distance,
        }
    }

    pub fn weight_ticket(mut self, coeff: f64) -> Self {
        self.weight_ticket = coeff;
        self
    }

    pub fn weight_distance(mut self, coeff: f64) -> Self {
        self.weight_distance = coeff;
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, coeff) in [
            ("weight_ticket", self.weight_ticket),
            ("weight_distance", self.weight_distance),
        ] {
            anyhow::ensure!(
                coeff.is_finite() && coeff >= 0.0,
                "{} must be a non-negative number, got {}",
                name,
                coeff
            );
        }
        let sum = self.weight_ticket + self.weight_distance;
        anyhow::ensure!(
            (sum - 1.0).abs() < 1e-9,
            "Weight coefficients must sum up to 1.0, got {}",
            sum
        );
        Ok(())
    }
}

impl Default for WeightPreferences {
    fn default() -> Self {
        WeightPreferences {
            weight_ticket: 0.4,
            weight_distance: 0.6,
        }
    }
}

/// Computes one weight per route from its distance and ticket price.
///
/// Both columns are normalized independently, `distances[i]` and `tickets[i]`
/// have to belong to the same route.
pub fn calculate_weights(
    distances: &[f64],
    tickets: &[f64],
    prefs: &WeightPreferences,
) -> anyhow::Result<Vec<Weight>> {
    prefs.validate()?;
    anyhow::ensure!(
        distances.len() == tickets.len(),
        "Got {} distances but {} ticket prices",
        distances.len(),
        tickets.len()
    );

    let norm_dist = normalize(distances)?;
    let norm_ticket = normalize(tickets)?;

    Ok(norm_ticket
        .iter()
        .zip(norm_dist.iter())
        .map(|(ticket, dist)| prefs.weight_ticket * ticket + prefs.weight_distance * dist)
        .collect())
}
