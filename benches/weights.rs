use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use mean_variance_rs::optimization::minimum_variance_weights_from_returns;
use mean_variance_rs::optimization::optimal_weights_from_returns;
use mean_variance_rs::Frontier;
use mean_variance_rs::MeanVarianceConfig;
use ndarray::Array1;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;

fn returns(t: usize, n: usize) -> Array2<f64> {
  let mut rng = StdRng::seed_from_u64(42);
  let noise = Array2::random_using((t, n), Normal::new(0.0, 0.02).unwrap(), &mut rng);
  noise + &Array1::linspace(0.001, 0.01, n)
}

fn bench_weights_by_assets(c: &mut Criterion) {
  let mut group = c.benchmark_group("weights_by_assets");

  for &n in &[5, 20, 50, 100] {
    let r = returns(4 * n, n);
    group.bench_with_input(BenchmarkId::new("minimum_variance", n), &r, |b, r| {
      b.iter(|| black_box(minimum_variance_weights_from_returns(r)))
    });
    group.bench_with_input(BenchmarkId::new("optimal", n), &r, |b, r| {
      b.iter(|| black_box(optimal_weights_from_returns(0.005, r)))
    });
  }

  group.finish();
}

fn bench_frontier_sweep(c: &mut Criterion) {
  let mut group = c.benchmark_group("frontier_sweep");
  let r = returns(500, 50);
  let frontier = Frontier::from_returns(&r, &MeanVarianceConfig::default()).unwrap();

  for &points in &[10, 100, 1000] {
    group.bench_with_input(BenchmarkId::new("sample", points), &points, |b, &points| {
      b.iter(|| black_box(frontier.sample(0.0, 0.02, points)))
    });
  }

  group.finish();
}

criterion_group!(benches, bench_weights_by_assets, bench_frontier_sweep);
criterion_main!(benches);
