use criterion::{criterion_group, criterion_main, Criterion};

use augur::engine::{assess_image, merge_forensic, HeuristicReport};
use augur::gateway::parse_reply;
use augur::{ImageMetadata, ImageSize};

fn full_metadata() -> ImageMetadata {
    ImageMetadata {
        software: Some("Adobe Photoshop CC 2024".to_string()),
        is_altered_timestamp: true,
        has_exif: true,
        is_screenshot: true,
        make: Some("Canon".to_string()),
        model: Some("EOS R5".to_string()),
        gps_latitude: Some(19.076),
        gps_longitude: Some(72.8777),
    }
}

fn bench_assess_all_rules(c: &mut Criterion) {
    let metadata = full_metadata();
    let size = ImageSize {
        width: 1080,
        height: 1920,
    };
    c.bench_function("assess_image_all_rules", |b| {
        b.iter(|| assess_image(Some(&metadata), size, "Google Pay"));
    });
}

fn bench_assess_no_signals(c: &mut Criterion) {
    let size = ImageSize {
        width: 1080,
        height: 2340,
    };
    c.bench_function("assess_image_no_signals", |b| {
        b.iter(|| assess_image(None, size, "General"));
    });
}

fn bench_merge_with_vision(c: &mut Criterion) {
    let reply = parse_reply(
        r#"{"score": 72, "reasons": ["off-brand font", "misaligned header"],
            "explanation": "Likely forged.", "layoutStatus": "Failed", "anomalies": []}"#,
    );
    c.bench_function("merge_forensic_with_vision", |b| {
        b.iter(|| {
            let heuristic = HeuristicReport {
                score: 60,
                reasons: vec!["tool detected".to_string(), "off-brand font".to_string()],
            };
            merge_forensic(heuristic, Some(reply.clone()))
        });
    });
}

fn bench_parse_reply(c: &mut Criterion) {
    let raw = r#"```json
{"score": 88, "reasons": ["a", "b", "c"], "explanation": "x",
 "layoutStatus": "Suspicious",
 "anomalies": [{"x":1,"y":2,"width":3,"height":4,"label":"l","severity":"High"}]}
```"#;
    c.bench_function("parse_reply_fenced", |b| {
        b.iter(|| parse_reply(raw));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(50)
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5));
    targets = bench_assess_all_rules, bench_assess_no_signals,
        bench_merge_with_vision, bench_parse_reply
);
criterion_main!(benches);
