use std::time::{Duration, Instant};

use broadcast_sssp::graph::generators::random_triples;
use broadcast_sssp::{Dijkstra, Graph, MessagePassing, ShortestPathAlgorithm};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A: ShortestPathAlgorithm>(algorithm: &A, graph: &Graph, source: i64) -> (Duration, usize) {
    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} failed: {}", algorithm.name(), err);
            return (start.elapsed(), 0);
        }
    };
    (start.elapsed(), result.reachable_count())
}

fn main() {
    env_logger::init();

    // The linear selection scan is quadratic, so sizes stay small
    let graph_sizes = [100, 500, 1_000, 2_000, 4_000];
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: message passing vs heap Dijkstra");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let message_passing = MessagePassing::new();
    let dijkstra = Dijkstra::new();

    println!(
        "{:<10} | {:<18} | {:<15} | {:<10} | {:<10}",
        "Vertices", "Msg passing (ms)", "Dijkstra (ms)", "Reached", "Slowdown"
    );
    println!("-----------------------------------------------------");

    for &size in &graph_sizes {
        let triples = random_triples(size, size * edge_factor, 100, size as u64);
        let graph = match Graph::build(&triples, false) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("Cannot build graph with {} vertices: {}", size, err);
                continue;
            }
        };
        let source = 1;

        let (mp_time, mp_reached) = benchmark_algorithm(&message_passing, &graph, source);
        let (dj_time, dj_reached) = benchmark_algorithm(&dijkstra, &graph, source);
        if mp_reached != dj_reached {
            eprintln!("Reachability mismatch on {} vertices: {} vs {}", size, mp_reached, dj_reached);
        }

        println!(
            "{:<10} | {:<18.2} | {:<15.2} | {:<10} | {:<10.2}",
            size,
            mp_time.as_secs_f64() * 1000.0,
            dj_time.as_secs_f64() * 1000.0,
            mp_reached,
            mp_time.as_secs_f64() / dj_time.as_secs_f64().max(f64::EPSILON)
        );
    }
}
