//! Benchmarks for component page rendering.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use compdoc_render::{ComponentRenderer, RenderOptions};
use compdoc_schema::{Component, ComponentType, FieldSpec};
use serde_yaml::{Mapping, Value};

/// Build a component with `groups` object fields, each holding `leaves` leaf
/// fields, plus a matching example document.
fn generate_component(groups: usize, leaves: usize) -> (Component, Value) {
    let mut children = Vec::with_capacity(groups);
    let mut config = Mapping::new();

    for g in 0..groups {
        let name = format!("group_{g}");
        let mut group_config = Mapping::new();
        let mut group_children = Vec::with_capacity(leaves);
        for l in 0..leaves {
            let leaf = format!("field_{l}");
            let mut spec = FieldSpec::new(&leaf, format!("Leaf {l} of group {g}."));
            if l % 3 == 0 {
                spec = spec.advanced();
            }
            group_children.push(spec);
            // Reverse insertion order so sorting has work to do.
            group_config.insert(Value::from(format!("field_{}", leaves - 1 - l)), Value::from(l));
        }
        children.push(FieldSpec::new(&name, "").with_children(group_children));
        config.insert(Value::from(name), Value::Mapping(group_config));
    }

    let component = Component::new("bench", ComponentType::Processor)
        .with_summary("A generated component.")
        .with_config(FieldSpec::object().with_children(children));

    let mut example = Mapping::new();
    example.insert(Value::from("bench"), Value::Mapping(config));
    (component, Value::Mapping(example))
}

fn bench_render_small(c: &mut Criterion) {
    let (component, example) = generate_component(2, 3);
    let renderer = ComponentRenderer::default();

    c.bench_function("render_small_component", |b| {
        b.iter(|| renderer.render(&component, &example));
    });
}

fn bench_render_nested(c: &mut Criterion) {
    let (component, example) = generate_component(5, 5);
    let renderer = ComponentRenderer::new(RenderOptions {
        nest: true,
        ..RenderOptions::default()
    });

    c.bench_function("render_nested_component", |b| {
        b.iter(|| renderer.render(&component, &example));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = ComponentRenderer::default();
    let mut group = c.benchmark_group("render_by_size");

    for (groups, leaves) in [(5, 5), (20, 10), (50, 20)] {
        let (component, example) = generate_component(groups, leaves);
        group.throughput(Throughput::Elements((groups * (leaves + 1)) as u64));
        group.bench_with_input(
            BenchmarkId::new("fields", format!("{groups}g_{leaves}l")),
            &(component, example),
            |b, (component, example)| b.iter(|| renderer.render(component, example)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_small,
    bench_render_nested,
    bench_render_varying_sizes
);
criterion_main!(benches);
