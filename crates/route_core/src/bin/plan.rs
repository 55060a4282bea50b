use route_core::{prelude::*, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let records = read_routes(&cfg.csv_file)?;
    let planner = RoutePlanner::new(&records, cfg.params)?;

    println!("====== Graph ======");
    println!("{}", planner.graph());
    println!("====== Graph ======");

    let route = planner.shortest_to(cfg.destination);
    println!("{}", planner.render(&route));

    Ok(())
}
