//! Fruchterman-Reingold force-directed layout.
//!
//! Positions start uniformly random in the unit square (seeded), then each
//! iteration applies pairwise repulsion `k²/d` and attraction `d²/k` along
//! directed adjacency, capped by a linearly cooling temperature. The result is
//! centred on the origin and scaled so the largest coordinate is `scale`.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::network::graph::VotingGraph;

const MIN_DISTANCE: f64 = 0.01;
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub struct SpringLayoutConfig {
    /// Optimal distance between nodes.
    pub k: f64,
    pub iterations: usize,
    pub seed: u64,
    /// Half-width of the output box.
    pub scale: f64,
}

impl Default for SpringLayoutConfig {
    fn default() -> Self {
        Self {
            k: 0.15,
            iterations: 20,
            seed: 42,
            scale: 1.0,
        }
    }
}

/// Lay out `graph`; the result is indexed by node order.
pub fn spring_layout(graph: &VotingGraph, config: &SpringLayoutConfig) -> Vec<(f64, f64)> {
    let n = graph.node_count();
    match n {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    let mut adjacency = vec![vec![0.0f64; n]; n];
    for (a, b, _) in graph.edges() {
        adjacency[a][b] = 1.0;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.r#gen::<f64>(), rng.r#gen::<f64>()]).collect();

    let k = config.k;
    let span = |dim: usize, pos: &[[f64; 2]]| {
        let (lo, hi) = pos
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p[dim]), hi.max(p[dim])));
        hi - lo
    };
    let mut t = span(0, &pos).max(span(1, &pos)) * 0.1;
    let dt = t / (config.iterations as f64 + 1.0);

    let mut displacement = vec![[0.0f64; 2]; n];
    for _ in 0..config.iterations {
        for (i, disp) in displacement.iter_mut().enumerate() {
            *disp = [0.0, 0.0];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / (d * d) - adjacency[i][j] * d / k;
                disp[0] += dx * force;
                disp[1] += dy * force;
            }
        }

        let mut moved = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let len = (disp[0] * disp[0] + disp[1] * disp[1]).sqrt();
            let len = if len < MIN_DISTANCE { 0.1 } else { len };
            let step = [disp[0] * t / len, disp[1] * t / len];
            p[0] += step[0];
            p[1] += step[1];
            moved += step[0] * step[0] + step[1] * step[1];
        }
        t -= dt;

        if moved.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    rescale(&mut pos, config.scale);
    pos.into_iter().map(|p| (p[0], p[1])).collect()
}

fn rescale(pos: &mut [[f64; 2]], scale: f64) {
    let n = pos.len() as f64;
    for dim in 0..2 {
        let mean = pos.iter().map(|p| p[dim]).sum::<f64>() / n;
        for p in pos.iter_mut() {
            p[dim] -= mean;
        }
    }
    let lim = pos
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0, f64::max);
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p[0] *= scale / lim;
            p[1] *= scale / lim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sign;

    fn ring(n: usize) -> VotingGraph {
        let mut g = VotingGraph::new();
        for i in 0..n {
            g.add_vote(&format!("n{i}"), &format!("n{}", (i + 1) % n), Sign::Support);
        }
        g
    }

    #[test]
    fn layout_fits_the_unit_box() {
        let pos = spring_layout(&ring(8), &SpringLayoutConfig::default());
        assert_eq!(pos.len(), 8);
        let max = pos.iter().flat_map(|&(x, y)| [x.abs(), y.abs()]).fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-9, "max coordinate {max}");
        let mean_x = pos.iter().map(|p| p.0).sum::<f64>() / 8.0;
        assert!(mean_x.abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = SpringLayoutConfig::default();
        assert_eq!(spring_layout(&ring(5), &config), spring_layout(&ring(5), &config));
    }

    #[test]
    fn trivial_graphs() {
        assert!(spring_layout(&VotingGraph::new(), &SpringLayoutConfig::default()).is_empty());
        let mut g = VotingGraph::new();
        g.add_vote("a", "a", Sign::Oppose);
        assert_eq!(spring_layout(&g, &SpringLayoutConfig::default()), vec![(0.0, 0.0)]);
    }
}
