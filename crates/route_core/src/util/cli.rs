use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    constants::CityId, graph::DuplicateEdgePolicy, planner::PlannerParams,
    weights::WeightPreferences,
};

const CSV_FORMAT: &str = "\
Your CSV file should be in the following format:
    id,city,to,ticket_average,distance,hours
    0, Braga, 0, 0, 0, 0
    1, Lisbon, 0,40, 50, 5
    2, Porto, 0, 25, 30, 1.5
    2, Porto, 1, 30, 26, 1.5";

#[derive(Parser)]
#[command(
    version,
    about = "Find the cheapest route from city 0 to a destination",
    long_about = None,
    arg_required_else_help = true,
    after_help = CSV_FORMAT
)]
struct Cli {
    /// Path to the .csv file with the routes
    #[arg(long, default_value = "example.csv")]
    filepath: PathBuf,

    /// ID of the desired place to go
    #[arg(long, default_value_t = 1)]
    to: CityId,

    /// Set the coefficient for the ticket price
    #[arg(long, value_name = "coeff")]
    weight_ticket: Option<f64>,

    /// Set the coefficient for the distance
    #[arg(long, value_name = "coeff")]
    weight_distance: Option<f64>,

    /// How to handle several routes between the same two cities
    #[arg(long, value_enum, default_value_t = Duplicates::KeepMin)]
    duplicates: Duplicates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Duplicates {
    KeepFirst,
    KeepLast,
    KeepMin,
}

impl From<Duplicates> for DuplicateEdgePolicy {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::KeepFirst => DuplicateEdgePolicy::KeepFirst,
            Duplicates::KeepLast => DuplicateEdgePolicy::KeepLast,
            Duplicates::KeepMin => DuplicateEdgePolicy::KeepMinimum,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub csv_file: PathBuf,
    pub destination: CityId,
    pub params: PlannerParams,
}

pub fn parse() -> Cfg {
    cfg_from(Cli::parse())
}

fn cfg_from(cli: Cli) -> Cfg {
    let mut preferences = WeightPreferences::default();

    // Setting only one coefficient implies the other one
    match (cli.weight_ticket, cli.weight_distance) {
        (Some(ticket), Some(distance)) => {
            preferences = preferences.weight_ticket(ticket).weight_distance(distance);
        }
        (Some(ticket), None) => {
            preferences = preferences
                .weight_ticket(ticket)
                .weight_distance(1.0 - ticket);
        }
        (None, Some(distance)) => {
            preferences = preferences
                .weight_ticket(1.0 - distance)
                .weight_distance(distance);
        }
        (None, None) => {}
    }

    Cfg {
        csv_file: cli.filepath,
        destination: cli.to,
        params: PlannerParams::new()
            .preferences(preferences)
            .duplicate_policy(cli.duplicates.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cfg(args: &[&str]) -> Cfg {
        let args = std::iter::once("plan").chain(args.iter().copied());
        cfg_from(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn defaults() {
        let cfg = cfg(&["--filepath", "routes.csv"]);

        assert_eq!(cfg.csv_file, PathBuf::from("routes.csv"));
        assert_eq!(cfg.destination, 1);
        assert_eq!(cfg.params.origin, 0);
        assert_eq!(cfg.params.preferences, WeightPreferences::default());
        assert_eq!(cfg.params.duplicate_policy, DuplicateEdgePolicy::KeepMinimum);
    }

    #[test]
    fn single_coefficient_implies_other() {
        let cfg = cfg(&["--to", "2", "--weight-ticket", "0.7"]);

        assert_eq!(cfg.destination, 2);
        assert_relative_eq!(cfg.params.preferences.weight_ticket, 0.7);
        assert_relative_eq!(cfg.params.preferences.weight_distance, 0.3);
    }

    #[test]
    fn duplicates_flag() {
        let cfg = cfg(&["--to", "2", "--duplicates", "keep-last"]);

        assert_eq!(cfg.params.duplicate_policy, DuplicateEdgePolicy::KeepLast);
    }

    #[test]
    fn no_arguments_shows_help() {
        assert!(Cli::try_parse_from(["plan"]).is_err());
    }
}
