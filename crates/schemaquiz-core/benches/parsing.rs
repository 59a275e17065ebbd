use criterion::{black_box, criterion_group, criterion_main, Criterion};

use schemaquiz_core::parser::{
    parse_question_draft_str, parse_question_set_str, validate_question_set,
};

fn bench_toml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("toml_parsing");

    let small = generate_question_set_toml(11);
    let large = generate_question_set_toml(500);

    group.bench_function("11_questions", |b| {
        b.iter(|| parse_question_set_str(black_box(&small), black_box("bench.toml".as_ref())))
    });

    group.bench_function("500_questions", |b| {
        b.iter(|| parse_question_set_str(black_box(&large), black_box("bench.toml".as_ref())))
    });

    group.bench_function("validate_500", |b| {
        let draft = parse_question_draft_str(&large, "bench.toml".as_ref()).unwrap();
        b.iter(|| validate_question_set(black_box(&draft)))
    });

    group.finish();
}

fn generate_question_set_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[question_set]
id = "bench"
name = "Benchmark"
"#,
    );
    for i in 0..n {
        let label = if i % 2 == 0 { "yes" } else { "no" };
        s.push_str(&format!(
            r#"
[[questions]]
id = "q_{i}"
text = "Is property {i} true of the relationship?"
embed_label = "{label}"
"#
        ));
    }
    s
}

criterion_group!(benches, bench_toml_parsing);
criterion_main!(benches);
