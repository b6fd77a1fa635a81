use tracing_subscriber::EnvFilter;
use zcell_rs::{EdgePolicy, GeoCell, ProximityQuery, ZcellError};

fn main() -> Result<(), ZcellError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lon = -2.2479699500757597;
    let lat = 53.48082746395233;

    let cell = GeoCell::from_wgs84(&(lon, lat), 20)?;

    println!("Cell ID: {}", cell.id());
    println!("Code: {} (step {})", cell.code, cell.precision.step());
    println!("Bounds: {:?}", cell.bounds());

    let neighbors = cell.neighbors(EdgePolicy::Clamp);
    println!("Neighbors: {:?}", neighbors);

    let query = ProximityQuery::new(20)?.edge_policy(EdgePolicy::Clamp);
    for range in query.ranges(lat, lon)? {
        match range.hi() {
            Some(hi) => println!("Scan [{}, {})", range.lo(), hi),
            None => println!("Scan [{}, end of keyspace]", range.lo()),
        }
    }

    Ok(())
}
