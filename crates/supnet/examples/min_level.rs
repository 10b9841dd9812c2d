//! Exact level minimization timing probe for one generated network.
//!
//! Draws a random binary network (12 leaves, 5 reticulations), prints its
//! trail shapes and support-network counts, then runs the exact algorithm
//! sequentially and in parallel.

use std::time::Instant;

use supnet::api::{
    count_support_networks, decompose, level, solve_min_level, NetworkGenParams,
    NetworkGenerator, SolveCfg,
};

fn main() {
    let params = NetworkGenParams::new(12, 5);
    let net = NetworkGenerator::generate_single(&params, 2021).expect("valid params");

    for (i, t) in decompose(&net).iter().enumerate() {
        println!("trail {i}: {} len={}", t.trail_type(), t.len());
    }
    let counts = count_support_networks(&net).expect("trail lengths are positive");
    println!(
        "|A|={} |B|={} |C|={} level(N)={}",
        counts.all,
        counts.minimal,
        counts.minimum,
        level(&net)
    );

    for parallel in [false, true] {
        let cfg = SolveCfg {
            parallel,
            ..SolveCfg::default()
        };
        let start = Instant::now();
        let sol = solve_min_level(&net, &cfg).expect("family within the default cap");
        let ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "parallel={parallel} min_level={} examined={} total={} time_ms={ms:.3}",
            sol.level, sol.examined, sol.total
        );
    }
}
