use std::error::Error;

use basic_structures::algorithms::graph::depth_first_search;
use basic_structures::algorithms::search::binary_search;
use basic_structures::collections::contiguous::Vector;
use basic_structures::collections::linked::SinglyLinkedList;
use basic_structures::collections::matrix::Matrix;
use basic_structures::collections::pair::Pair;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Walks through each of the structures, logging what happens. Run with `RUST_LOG=trace` to see
/// every reallocation made by the Vector.
fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::Layer::default())
        .with(EnvFilter::from_default_env());

    tracing::subscriber::set_global_default(subscriber)?;

    let mut vec = Vector::with_cap(4);
    for i in 1..=1000 {
        vec.push(i * 5);
    }
    info!(len = vec.len(), cap = vec.cap(), "Filled vector");

    while vec.len() > 3 {
        vec.remove_at(vec.len() - 1);
    }
    info!(len = vec.len(), cap = vec.cap(), "Emptied vector");
    info!("Vector: {vec}");

    vec.clear();
    info!(cap = vec.cap(), "Cleared vector");

    let list: SinglyLinkedList<_> = [5, 10, 15].into_iter().collect();
    info!("List: {list}");

    let mut pair = Pair::<&str, u32>::default();
    info!(assigned = pair.is_assigned(), "Default pair");
    pair.assign("answer", 42);
    info!(assigned = pair.is_assigned(), "Assigned pair: {pair}");

    let mat = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    info!("Matrix squared:\n{}", &mat * &mat);

    let sorted = [1, 3, 5, 7, 9, 11];
    info!(found = binary_search(&sorted, &7), "Searched for 7");

    let adjacency = [[0, 1, 0], [0, 0, 1], [0, 0, 0]];
    info!(reachable = depth_first_search(&adjacency, 0), "Searched graph");

    Ok(())
}
