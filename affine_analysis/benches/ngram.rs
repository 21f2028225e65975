use criterion::{black_box, criterion_group, criterion_main, Criterion};

use affine_analysis::{affine, cryptanalysis, ngram, AffineKey, Alphabet, UKRAINIAN_ALPHABET};

const SAMPLE: &str = "Він іде по стежці до річки, а вітер несе пісню понад водою. \
                      Навесні вода тече швидко, і ми стоїмо на березі та слухаємо.";

fn bench_counting(c: &mut Criterion) {
    let alphabet = Alphabet::build(UKRAINIAN_ALPHABET, false).unwrap();
    let text = SAMPLE.repeat(200);

    c.bench_function("count_characters", |b| {
        b.iter(|| ngram::count_characters(black_box(&text), &alphabet))
    });
    c.bench_function("count_bigrams", |b| {
        b.iter(|| ngram::count_bigrams(black_box(&text), &alphabet).unwrap())
    });
    c.bench_function("count_trigrams", |b| {
        b.iter(|| ngram::count_trigrams(black_box(&text), &alphabet).unwrap())
    });
}

fn bench_recovery(c: &mut Criterion) {
    let alphabet = Alphabet::build(UKRAINIAN_ALPHABET, false).unwrap();
    let text = SAMPLE.repeat(200);
    let ciphertext = affine::encrypt(&text, &alphabet, AffineKey::new(4, 17)).unwrap();

    c.bench_function("recover_and_decrypt", |b| {
        b.iter(|| cryptanalysis::recover_and_decrypt(black_box(&text), black_box(&ciphertext), &alphabet).unwrap())
    });
}

criterion_group!(benches, bench_counting, bench_recovery);
criterion_main!(benches);
