use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tf_fold::{asciize, dewinize, shave_marks, shave_marks_latin};

fn generate_text(size_kb: usize) -> String {
    let base = "\u{201C}Herr Vo\u{DF}: \u{2022} \u{BD} cup of \u{152}tker\u{2122} caff\u{E8} latte \u{2022} bowl of a\u{E7}a\u{ED}.\u{201D} Ζέφυρος, Zéfiro — naïve façade… ";
    let mut text = String::with_capacity(size_kb * 1024 + base.len());
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text
}

fn generate_random_mix(size_kb: usize) -> String {
    let palette: Vec<char> = "abcdefgh aeiou çéàüñ ÆŒß ™…–“” Ζέφυρος".chars().collect();
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::with_capacity(size_kb * 1024 + 4);
    while text.len() < size_kb * 1024 {
        text.push(palette[rng.gen_range(0..palette.len())]);
    }
    text
}

fn bench_shave(c: &mut Criterion) {
    for &size in &[1usize, 10, 100] {
        let text = generate_text(size);
        c.bench_function(&format!("shave_marks_{size}kb"), |b| {
            b.iter(|| black_box(shave_marks(black_box(&text))))
        });
        c.bench_function(&format!("shave_marks_latin_{size}kb"), |b| {
            b.iter(|| black_box(shave_marks_latin(black_box(&text))))
        });
    }
}

fn bench_dewinize(c: &mut Criterion) {
    for &size in &[1usize, 10, 100] {
        let text = generate_text(size);
        c.bench_function(&format!("dewinize_{size}kb"), |b| {
            b.iter(|| black_box(dewinize(black_box(&text))))
        });
    }
}

fn bench_asciize(c: &mut Criterion) {
    for &size in &[1usize, 10, 100] {
        let text = generate_text(size);
        c.bench_function(&format!("asciize_{size}kb"), |b| {
            b.iter(|| black_box(asciize(black_box(&text))))
        });
    }
    let random = generate_random_mix(10);
    c.bench_function("asciize_random_10kb", |b| {
        b.iter(|| black_box(asciize(black_box(&random))))
    });
}

criterion_group!(benches, bench_shave, bench_dewinize, bench_asciize);
criterion_main!(benches);
