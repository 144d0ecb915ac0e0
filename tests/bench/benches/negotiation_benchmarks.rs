//! Content negotiation benchmarks
//!
//! Benchmarks for the request-time path:
//! - Accept header parsing for typical browser and API client headers
//! - Negotiation against small and large supported lists

use accept::{AcceptHeader, ContentNegotiation, NegotiationOption};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const HEADERS: &[(&str, &str)] = &[
	("api_client", "application/json"),
	(
		"browser",
		"text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
	),
	("weighted", "text/csv;q=0.2,application/json;q=0.7,text/html;q=0.5"),
	("no_match", "image/png,image/gif;q=0.5,video/mp4;q=0.1"),
	("empty", ""),
];

fn benchmark_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("accept_header_parse");
	for (name, header) in HEADERS {
		group.bench_with_input(BenchmarkId::from_parameter(name), header, |b, header| {
			b.iter(|| black_box(AcceptHeader::parse(black_box(header))));
		});
	}
	group.finish();
}

fn benchmark_negotiate(c: &mut Criterion) {
	let small = ContentNegotiation::new([NegotiationOption::with_supported_media_types([
		"application/json",
		"text/html",
	])]);
	let large = ContentNegotiation::builder()
		.supported_media_types((0..64).map(|i| format!("application/vnd.example.v{i}+json")))
		.default_media_type("application/json")
		.build();

	let mut group = c.benchmark_group("negotiate");
	for (name, header) in HEADERS {
		group.bench_with_input(BenchmarkId::new("small", name), header, |b, header| {
			b.iter(|| black_box(small.negotiate(black_box(header))).len());
		});
		group.bench_with_input(BenchmarkId::new("large", name), header, |b, header| {
			b.iter(|| black_box(large.negotiate(black_box(header))).len());
		});
	}
	group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_negotiate);
criterion_main!(benches);
