//! Tests for the swap local search phase.

use super::*;
use armada_core::{Pair, PairSet};

fn singletons(ids: &[&str]) -> Vec<Cluster> {
    ids.iter().map(|id| Cluster::singleton(*id)).collect()
}

fn metrics(
    clusters: &[Cluster],
    edges: &[(&str, &str)],
    blacklist: &[(&str, &str)],
) -> ClusterMetrics {
    let edges: PairSet = Pair::set_of(edges.iter().copied()).unwrap();
    let blacklist: PairSet = Pair::set_of(blacklist.iter().copied()).unwrap();
    ClusterMetrics::build(clusters, &edges, &blacklist).unwrap()
}

fn units(lists: &[&[usize]]) -> Vec<UnitClusters> {
    lists.iter().map(|l| l.iter().copied().collect()).collect()
}

fn total(metrics: &ClusterMetrics, units: &[UnitClusters]) -> usize {
    units.iter().map(|u| metrics.unit_rapport(u)).sum()
}

#[test]
fn test_swap_reunites_partners() {
    // a=0 b=1 c=2 d=3
    let clusters = singletons(&["a", "b", "c", "d"]);
    let metrics = metrics(&clusters, &[("a", "b"), ("c", "d")], &[]);
    let search = SwapLocalSearch::new(&clusters, &metrics, 10);

    let mut assignment = units(&[&[0, 2], &[1, 3]]);
    assert_eq!(total(&metrics, &assignment), 0);

    let swaps = search.improve(&mut assignment);
    assert_eq!(swaps, 1);
    assert_eq!(assignment, units(&[&[3, 2], &[1, 0]]));
    assert_eq!(total(&metrics, &assignment), 2);
}

#[test]
fn test_swap_delta_excludes_swapped_clusters() {
    let clusters = singletons(&["a", "b", "c", "d"]);
    let metrics = metrics(&clusters, &[("a", "b"), ("c", "d"), ("a", "c")], &[]);
    let search = SwapLocalSearch::new(&clusters, &metrics, 10);

    // a leaves c (-1) and joins b (+1); d leaves b (0) and joins c (+1).
    assert_eq!(search.swap_delta(0, 3, &[0, 2], &[1, 3]), 1);
    // a with b: a loses c and gains nothing.
    assert_eq!(search.swap_delta(0, 1, &[0, 2], &[1, 3]), -1);
}

#[test]
fn test_blacklist_blocks_swaps() {
    let clusters = singletons(&["a", "b", "c", "d"]);
    let metrics = metrics(&clusters, &[("a", "b"), ("c", "d")], &[("c", "d")]);
    let search = SwapLocalSearch::new(&clusters, &metrics, 10);

    let mut assignment = units(&[&[0, 2], &[1, 3]]);
    assert_eq!(search.improve(&mut assignment), 0);
    assert_eq!(assignment, units(&[&[0, 2], &[1, 3]]));
}

#[test]
fn test_only_equal_sizes_swap() {
    let clusters = vec![
        Cluster::new(vec!["a".into(), "b".into()]).unwrap(),
        Cluster::singleton("c"),
        Cluster::singleton("d"),
    ];
    let metrics = metrics(&clusters, &[("a", "c"), ("b", "c")], &[]);
    let search = SwapLocalSearch::new(&clusters, &metrics, 10);

    // Moving c next to the pair would gain, but no equal-size partner exists.
    let mut assignment = units(&[&[0], &[1, 2]]);
    let before = assignment.clone();
    assert_eq!(search.improve(&mut assignment), 0);
    assert_eq!(assignment, before);
}

#[test]
fn test_zero_iterations_leaves_assignment() {
    let clusters = singletons(&["a", "b", "c", "d"]);
    let metrics = metrics(&clusters, &[("a", "b"), ("c", "d")], &[]);
    let search = SwapLocalSearch::new(&clusters, &metrics, 0);

    let mut assignment = units(&[&[0, 2], &[1, 3]]);
    assert_eq!(search.improve(&mut assignment), 0);
    assert_eq!(assignment, units(&[&[0, 2], &[1, 3]]));
}

#[test]
fn test_iteration_budget_stops_early() {
    // a=0 b=1 c=2 d=3 e=4 f=5 g=6 h=7
    let clusters = singletons(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    let metrics = metrics(
        &clusters,
        &[("a", "b"), ("c", "d"), ("e", "f"), ("g", "h")],
        &[],
    );
    let search = SwapLocalSearch::new(&clusters, &metrics, 1);

    let mut assignment = units(&[&[0, 2], &[1, 3], &[4, 6], &[5, 7]]);
    assert_eq!(search.improve(&mut assignment), 1);
    assert_eq!(assignment, units(&[&[3, 2], &[1, 0], &[4, 6], &[5, 7]]));
    assert_eq!(total(&metrics, &assignment), 2);

    // The swap between the last two units is still available.
    let mut resumed = assignment.clone();
    assert_eq!(search.improve(&mut resumed), 1);
    assert_eq!(total(&metrics, &resumed), 4);
}

#[test]
fn test_swaps_never_lower_rapport() {
    let ids = ["a", "b", "c", "d", "e", "f"];
    let clusters = singletons(&ids);
    let metrics = metrics(
        &clusters,
        &[("a", "d"), ("b", "e"), ("c", "f"), ("a", "e"), ("d", "f")],
        &[],
    );
    let search = SwapLocalSearch::new(&clusters, &metrics, 50);

    let mut assignment = units(&[&[0, 1, 2], &[3, 4, 5]]);
    let before = total(&metrics, &assignment);
    let swaps = search.improve(&mut assignment);
    assert!(swaps > 0);
    assert!(total(&metrics, &assignment) > before);

    let mut flat: Vec<usize> = assignment.iter().flatten().copied().collect();
    flat.sort_unstable();
    assert_eq!(flat, vec![0, 1, 2, 3, 4, 5]);
}
